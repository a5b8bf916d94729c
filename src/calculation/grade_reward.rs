//! Grade reward calculation functionality.
//!
//! This module converts a letter grade and base dollar amount into a reward
//! amount via the fixed multiplier table, and sums rewards across subjects.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, GradeEntry, LetterGrade};

/// Calculates the reward for a single grade.
///
/// The reward is `base_amount * multiplier(grade)` with the fixed table
/// A=1.00, B=0.75, C=0.50, D=0.25, F=0.00. No rounding is applied here:
/// currency rounding to two decimal places is a display concern, and rounding
/// before aggregation would compound error across subjects.
///
/// # Arguments
///
/// * `grade` - The letter grade earned
/// * `base_amount` - The dollar amount a perfect grade would earn (must be >= 0)
///
/// # Errors
///
/// Returns [`EngineError::NegativeAmount`] if `base_amount` is negative.
///
/// # Examples
///
/// ```
/// use reward_engine::calculation::reward_for;
/// use reward_engine::models::LetterGrade;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let reward = reward_for(LetterGrade::B, Decimal::from_str("20.00").unwrap()).unwrap();
/// assert_eq!(reward, Decimal::from_str("15.00").unwrap());
/// ```
pub fn reward_for(grade: LetterGrade, base_amount: Decimal) -> EngineResult<Decimal> {
    if base_amount.is_sign_negative() {
        return Err(EngineError::NegativeAmount {
            field: "base_amount".to_string(),
            amount: base_amount,
        });
    }

    Ok(base_amount * grade.reward_multiplier())
}

/// Sums the reward amounts across a set of grade entries.
///
/// Additive: the total of a concatenation equals the sum of the totals.
pub fn total_reward(entries: &[GradeEntry]) -> Decimal {
    entries.iter().map(|entry| entry.reward_amount).sum()
}

/// The result of a grade reward calculation, including the entry and audit step.
#[derive(Debug, Clone)]
pub struct GradeRewardResult {
    /// The grade entry with its derived reward amount.
    pub entry: GradeEntry,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the reward for a graded subject, recording an audit step.
///
/// # Arguments
///
/// * `subject` - The subject the grade was earned in
/// * `grade` - The letter grade earned
/// * `base_amount` - The dollar amount a perfect grade would earn
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns [`EngineError::NegativeAmount`] if `base_amount` is negative.
pub fn calculate_grade_reward(
    subject: &str,
    grade: LetterGrade,
    base_amount: Decimal,
    step_number: u32,
) -> EngineResult<GradeRewardResult> {
    let entry = GradeEntry::new(subject.to_string(), grade, base_amount)?;
    let multiplier = grade.reward_multiplier();

    let audit_step = AuditStep {
        step_number,
        rule_id: "grade_reward".to_string(),
        rule_name: "Grade Reward".to_string(),
        input: serde_json::json!({
            "subject": subject,
            "grade": grade.to_string(),
            "base_amount": base_amount.normalize().to_string()
        }),
        output: serde_json::json!({
            "multiplier": multiplier.normalize().to_string(),
            "reward_amount": entry.reward_amount.normalize().to_string()
        }),
        reasoning: format!(
            "{}: {} x ${} = ${}",
            subject,
            grade,
            base_amount.normalize(),
            entry.reward_amount.normalize()
        ),
    };

    Ok(GradeRewardResult { entry, audit_step })
}
