//! Education bonus tier calculation functionality.
//!
//! This module converts daily trivia results into an integer accuracy
//! percentage, maps the percentage to a bonus tier, and applies the tier's
//! percentage to a base reward amount.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, BonusAward};

/// The minimum accuracy percentage that earns any bonus.
pub const EDUCATION_BONUS_QUALIFYING_ACCURACY: u32 = 50;

/// The education tier table, highest threshold first.
///
/// Each row is (minimum accuracy percent, bonus percentage, tier label).
/// Walked top down; first satisfied threshold wins.
fn education_tiers() -> [(u32, Decimal, &'static str); 5] {
    [
        (90, Decimal::new(5, 2), "Tier 5"),
        (80, Decimal::new(4, 2), "Tier 4"),
        (70, Decimal::new(3, 2), "Tier 3"),
        (60, Decimal::new(2, 2), "Tier 2"),
        (50, Decimal::new(1, 2), "Tier 1"),
    ]
}

/// Converts trivia results into an integer accuracy percentage.
///
/// The percentage is `correct / total * 100` rounded half away from zero,
/// matching how the app has always rounded. Zero total questions yields zero
/// rather than a division error: a student who answered nothing simply has no
/// accuracy yet.
///
/// # Examples
///
/// ```
/// use reward_engine::calculation::accuracy_percentage;
///
/// assert_eq!(accuracy_percentage(2, 3), 67);
/// assert_eq!(accuracy_percentage(1, 2), 50);
/// assert_eq!(accuracy_percentage(0, 0), 0);
/// ```
pub fn accuracy_percentage(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }

    let ratio = Decimal::from(correct) * Decimal::from(100u32) / Decimal::from(total);
    ratio
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

/// Calculates the education bonus for an accuracy percentage.
///
/// Accuracy below 50% earns no bonus. At and above 50% the tiers step by ten
/// points: Tier 1 (>= 50, 1%) through Tier 5 (>= 90, 5%). The bonus amount is
/// `base_reward * percentage`, unrounded.
///
/// # Errors
///
/// * [`EngineError::NegativeAmount`] if `base_reward` is negative
/// * [`EngineError::MetricOutOfRange`] if `accuracy` exceeds 100
///
/// # Examples
///
/// ```
/// use reward_engine::calculation::education_bonus;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let award = education_bonus(90, Decimal::from_str("100").unwrap()).unwrap();
/// assert_eq!(award.percentage, Decimal::from_str("0.05").unwrap());
/// assert_eq!(award.amount, Decimal::from_str("5.00").unwrap());
/// assert_eq!(award.tier.as_deref(), Some("Tier 5"));
/// ```
pub fn education_bonus(accuracy: u32, base_reward: Decimal) -> EngineResult<BonusAward> {
    if base_reward.is_sign_negative() {
        return Err(EngineError::NegativeAmount {
            field: "base_reward".to_string(),
            amount: base_reward,
        });
    }
    if accuracy > 100 {
        return Err(EngineError::MetricOutOfRange {
            metric: "accuracy percentage".to_string(),
            value: Decimal::from(accuracy),
            min: Decimal::ZERO,
            max: Decimal::from(100u32),
        });
    }

    for (min_accuracy, percentage, label) in education_tiers() {
        if accuracy >= min_accuracy {
            return Ok(BonusAward {
                percentage,
                amount: base_reward * percentage,
                tier: Some(label.to_string()),
            });
        }
    }

    Ok(BonusAward::none())
}

/// The result of an education bonus calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct EducationBonusResult {
    /// The awarded bonus.
    pub bonus: BonusAward,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the education bonus, recording an audit step.
///
/// # Errors
///
/// Same failure conditions as [`education_bonus`].
pub fn calculate_education_bonus(
    accuracy: u32,
    base_reward: Decimal,
    step_number: u32,
) -> EngineResult<EducationBonusResult> {
    let bonus = education_bonus(accuracy, base_reward)?;

    let reasoning = match &bonus.tier {
        Some(tier) => format!(
            "Trivia accuracy {}% reaches {}: ${} x {} = ${}",
            accuracy,
            tier,
            base_reward.normalize(),
            bonus.percentage.normalize(),
            bonus.amount.normalize()
        ),
        None => format!(
            "Trivia accuracy {}% is below the {}% qualifying threshold - no bonus",
            accuracy, EDUCATION_BONUS_QUALIFYING_ACCURACY
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "education_bonus".to_string(),
        rule_name: "Education Bonus".to_string(),
        input: serde_json::json!({
            "accuracy_percentage": accuracy,
            "base_reward": base_reward.normalize().to_string()
        }),
        output: serde_json::json!({
            "tier": bonus.tier,
            "percentage": bonus.percentage.normalize().to_string(),
            "amount": bonus.amount.normalize().to_string()
        }),
        reasoning,
    };

    Ok(EducationBonusResult { bonus, audit_step })
}
