//! Letter grade model and related types.
//!
//! This module defines the [`LetterGrade`] enum and the [`GradeEntry`] value
//! type pairing a grade with its base dollar amount and derived reward.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

/// A letter grade on the standard A-F scale (no E).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    /// Highest grade: full reward multiplier, 4.0 grade points.
    A,
    /// Above average: 75% reward multiplier, 3.0 grade points.
    B,
    /// Average: 50% reward multiplier, 2.0 grade points.
    C,
    /// Below average: 25% reward multiplier, 1.0 grade points.
    D,
    /// Failing: no reward, 0.0 grade points.
    F,
}

impl LetterGrade {
    /// Returns the reward multiplier applied to a grade's base amount.
    ///
    /// The table is fixed: A=1.00, B=0.75, C=0.50, D=0.25, F=0.00.
    ///
    /// # Examples
    ///
    /// ```
    /// use reward_engine::models::LetterGrade;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(LetterGrade::B.reward_multiplier(), Decimal::new(75, 2));
    /// ```
    pub fn reward_multiplier(&self) -> Decimal {
        match self {
            LetterGrade::A => Decimal::new(100, 2),
            LetterGrade::B => Decimal::new(75, 2),
            LetterGrade::C => Decimal::new(50, 2),
            LetterGrade::D => Decimal::new(25, 2),
            LetterGrade::F => Decimal::ZERO,
        }
    }

    /// Returns the grade points on the 4.0 scale.
    ///
    /// A=4.0, B=3.0, C=2.0, D=1.0, F=0.0.
    pub fn grade_points(&self) -> Decimal {
        match self {
            LetterGrade::A => Decimal::new(40, 1),
            LetterGrade::B => Decimal::new(30, 1),
            LetterGrade::C => Decimal::new(20, 1),
            LetterGrade::D => Decimal::new(10, 1),
            LetterGrade::F => Decimal::ZERO,
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        };
        write!(f, "{letter}")
    }
}

impl FromStr for LetterGrade {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s.trim() {
            "A" | "a" => Ok(LetterGrade::A),
            "B" | "b" => Ok(LetterGrade::B),
            "C" | "c" => Ok(LetterGrade::C),
            "D" | "d" => Ok(LetterGrade::D),
            "F" | "f" => Ok(LetterGrade::F),
            other => Err(EngineError::InvalidGrade {
                value: other.to_string(),
            }),
        }
    }
}

/// A graded subject with its base dollar amount and derived reward.
///
/// The reward amount is always `base_amount * grade.reward_multiplier()`;
/// construct entries through [`GradeEntry::new`] to keep that invariant.
///
/// # Example
///
/// ```
/// use reward_engine::models::{GradeEntry, LetterGrade};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let entry = GradeEntry::new(
///     "Math".to_string(),
///     LetterGrade::B,
///     Decimal::from_str("20.00").unwrap(),
/// ).unwrap();
/// assert_eq!(entry.reward_amount, Decimal::from_str("15.0000").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeEntry {
    /// The subject the grade was earned in (e.g. "Math").
    pub subject: String,
    /// The letter grade earned.
    pub grade: LetterGrade,
    /// The base dollar amount a perfect grade would earn.
    pub base_amount: Decimal,
    /// The derived reward: `base_amount * multiplier`.
    pub reward_amount: Decimal,
}

impl GradeEntry {
    /// Creates a grade entry, deriving the reward amount from the multiplier
    /// table.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NegativeAmount`] if `base_amount` is negative.
    pub fn new(subject: String, grade: LetterGrade, base_amount: Decimal) -> EngineResult<Self> {
        if base_amount.is_sign_negative() {
            return Err(EngineError::NegativeAmount {
                field: "base_amount".to_string(),
                amount: base_amount,
            });
        }

        let reward_amount = base_amount * grade.reward_multiplier();
        Ok(GradeEntry {
            subject,
            grade,
            base_amount,
            reward_amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_multiplier_table_is_exact() {
        assert_eq!(LetterGrade::A.reward_multiplier(), dec("1.00"));
        assert_eq!(LetterGrade::B.reward_multiplier(), dec("0.75"));
        assert_eq!(LetterGrade::C.reward_multiplier(), dec("0.50"));
        assert_eq!(LetterGrade::D.reward_multiplier(), dec("0.25"));
        assert_eq!(LetterGrade::F.reward_multiplier(), dec("0"));
    }

    #[test]
    fn test_grade_points_table_is_exact() {
        assert_eq!(LetterGrade::A.grade_points(), dec("4.0"));
        assert_eq!(LetterGrade::B.grade_points(), dec("3.0"));
        assert_eq!(LetterGrade::C.grade_points(), dec("2.0"));
        assert_eq!(LetterGrade::D.grade_points(), dec("1.0"));
        assert_eq!(LetterGrade::F.grade_points(), dec("0"));
    }

    #[test]
    fn test_parse_accepts_both_cases() {
        assert_eq!(LetterGrade::from_str("A").unwrap(), LetterGrade::A);
        assert_eq!(LetterGrade::from_str("b").unwrap(), LetterGrade::B);
        assert_eq!(LetterGrade::from_str(" f ").unwrap(), LetterGrade::F);
    }

    #[test]
    fn test_parse_rejects_unknown_letters() {
        let err = LetterGrade::from_str("E").unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized letter grade: E");
        assert!(LetterGrade::from_str("A+").is_err());
        assert!(LetterGrade::from_str("").is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for grade in [
            LetterGrade::A,
            LetterGrade::B,
            LetterGrade::C,
            LetterGrade::D,
            LetterGrade::F,
        ] {
            assert_eq!(LetterGrade::from_str(&grade.to_string()).unwrap(), grade);
        }
    }

    #[test]
    fn test_entry_derives_reward_amount() {
        let entry = GradeEntry::new("Science".to_string(), LetterGrade::C, dec("10.00")).unwrap();
        assert_eq!(entry.reward_amount, dec("5.0000"));
    }

    #[test]
    fn test_entry_rejects_negative_base_amount() {
        let err = GradeEntry::new("Math".to_string(), LetterGrade::A, dec("-1.00")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid base_amount: -1.00 is negative");
    }

    #[test]
    fn test_entry_serialization() {
        let entry = GradeEntry::new("Math".to_string(), LetterGrade::A, dec("20.00")).unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"subject\":\"Math\""));
        assert!(json.contains("\"grade\":\"A\""));
        assert!(json.contains("\"base_amount\":\"20.00\""));
    }

    #[test]
    fn test_entry_deserialization() {
        let json = r#"{
            "subject": "History",
            "grade": "D",
            "base_amount": "8.00",
            "reward_amount": "2.00"
        }"#;

        let entry: GradeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.subject, "History");
        assert_eq!(entry.grade, LetterGrade::D);
        assert_eq!(entry.base_amount, dec("8.00"));
        assert_eq!(entry.reward_amount, dec("2.00"));
    }
}
