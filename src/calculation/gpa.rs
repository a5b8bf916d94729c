//! GPA calculation functionality.

use rust_decimal::Decimal;

use crate::models::LetterGrade;

/// Calculates the GPA of a set of grades on the 4.0 scale.
///
/// The GPA is the arithmetic mean of the grade point values (A=4.0, B=3.0,
/// C=2.0, D=1.0, F=0.0). An empty slice returns exactly `0.0` rather than an
/// error: callers display "--" when there are no grades, so zero-on-empty must
/// not be read as a failing grade.
///
/// # Examples
///
/// ```
/// use reward_engine::calculation::calculate_gpa;
/// use reward_engine::models::LetterGrade;
/// use rust_decimal::Decimal;
///
/// let gpa = calculate_gpa(&[LetterGrade::A, LetterGrade::F]);
/// assert_eq!(gpa, Decimal::new(20, 1));
///
/// assert_eq!(calculate_gpa(&[]), Decimal::ZERO);
/// ```
pub fn calculate_gpa(grades: &[LetterGrade]) -> Decimal {
    if grades.is_empty() {
        return Decimal::ZERO;
    }

    let total: Decimal = grades.iter().map(|grade| grade.grade_points()).sum();
    total / Decimal::from(grades.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// GPA-001: empty input is exactly zero
    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(calculate_gpa(&[]), Decimal::ZERO);
    }

    /// GPA-002: straight As are exactly 4.0
    #[test]
    fn test_straight_as() {
        assert_eq!(
            calculate_gpa(&[LetterGrade::A, LetterGrade::A]),
            dec("4.0")
        );
    }

    /// GPA-003: A and F average to 2.0
    #[test]
    fn test_a_and_f_average() {
        assert_eq!(
            calculate_gpa(&[LetterGrade::A, LetterGrade::F]),
            dec("2.0")
        );
    }

    #[test]
    fn test_single_grade() {
        assert_eq!(calculate_gpa(&[LetterGrade::D]), dec("1.0"));
    }

    #[test]
    fn test_mixed_grades() {
        // (4 + 3 + 2 + 1 + 0) / 5 = 2.0
        let grades = [
            LetterGrade::A,
            LetterGrade::B,
            LetterGrade::C,
            LetterGrade::D,
            LetterGrade::F,
        ];
        assert_eq!(calculate_gpa(&grades), dec("2.0"));
    }

    #[test]
    fn test_non_terminating_mean_keeps_precision() {
        // (4 + 3 + 3) / 3 = 3.333...
        let gpa = calculate_gpa(&[LetterGrade::A, LetterGrade::B, LetterGrade::B]);
        assert!(gpa > dec("3.33") && gpa < dec("3.34"));
    }

    #[test]
    fn test_order_independent() {
        let forward = calculate_gpa(&[LetterGrade::A, LetterGrade::C, LetterGrade::B]);
        let reverse = calculate_gpa(&[LetterGrade::B, LetterGrade::C, LetterGrade::A]);
        assert_eq!(forward, reverse);
    }
}
