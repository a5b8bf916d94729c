//! Behavior bonus tier calculation functionality.
//!
//! This module maps an overall behavior average (0.0-5.0) to a named bonus
//! tier and applies the tier's percentage to a base reward amount.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, BonusAward};

/// The minimum behavior average that earns any bonus.
pub const BEHAVIOR_BONUS_QUALIFYING_SCORE: u32 = 3;

/// The behavior tier table, highest threshold first.
///
/// Each row is (minimum average, bonus percentage, tier label). The table is
/// walked top down and the first satisfied threshold wins, so rows must stay
/// in descending threshold order.
fn behavior_tiers() -> [(Decimal, Decimal, &'static str); 4] {
    [
        (Decimal::new(45, 1), Decimal::new(10, 2), "Outstanding"),
        (Decimal::new(40, 1), Decimal::new(8, 2), "Excellent"),
        (Decimal::new(35, 1), Decimal::new(6, 2), "Great"),
        (Decimal::new(30, 1), Decimal::new(4, 2), "Good"),
    ]
}

/// Calculates the behavior bonus for an overall behavior average.
///
/// Averages below 3.0 earn no bonus. At and above 3.0 the tiers are
/// Good (>= 3.0, 4%), Great (>= 3.5, 6%), Excellent (>= 4.0, 8%), and
/// Outstanding (>= 4.5, 10%). The bonus amount is
/// `base_reward * percentage`, unrounded.
///
/// # Errors
///
/// * [`EngineError::NegativeAmount`] if `base_reward` is negative
/// * [`EngineError::MetricOutOfRange`] if `average` is outside 0.0-5.0
///
/// # Examples
///
/// ```
/// use reward_engine::calculation::behavior_bonus;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let award = behavior_bonus(
///     Decimal::from_str("4.2").unwrap(),
///     Decimal::from_str("100").unwrap(),
/// ).unwrap();
/// assert_eq!(award.percentage, Decimal::from_str("0.08").unwrap());
/// assert_eq!(award.amount, Decimal::from_str("8.00").unwrap());
/// assert_eq!(award.tier.as_deref(), Some("Excellent"));
/// ```
pub fn behavior_bonus(average: Decimal, base_reward: Decimal) -> EngineResult<BonusAward> {
    if base_reward.is_sign_negative() {
        return Err(EngineError::NegativeAmount {
            field: "base_reward".to_string(),
            amount: base_reward,
        });
    }
    if average.is_sign_negative() || average > Decimal::from(5) {
        return Err(EngineError::MetricOutOfRange {
            metric: "behavior average".to_string(),
            value: average,
            min: Decimal::ZERO,
            max: Decimal::from(5),
        });
    }

    for (min_average, percentage, label) in behavior_tiers() {
        if average >= min_average {
            return Ok(BonusAward {
                percentage,
                amount: base_reward * percentage,
                tier: Some(label.to_string()),
            });
        }
    }

    Ok(BonusAward::none())
}

/// The result of a behavior bonus calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct BehaviorBonusResult {
    /// The awarded bonus.
    pub bonus: BonusAward,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the behavior bonus, recording an audit step.
///
/// # Errors
///
/// Same failure conditions as [`behavior_bonus`].
pub fn calculate_behavior_bonus(
    average: Decimal,
    base_reward: Decimal,
    step_number: u32,
) -> EngineResult<BehaviorBonusResult> {
    let bonus = behavior_bonus(average, base_reward)?;

    let reasoning = match &bonus.tier {
        Some(tier) => format!(
            "Behavior average {} reaches the {} tier: ${} x {} = ${}",
            average.normalize(),
            tier,
            base_reward.normalize(),
            bonus.percentage.normalize(),
            bonus.amount.normalize()
        ),
        None => format!(
            "Behavior average {} is below the {}.0 qualifying score - no bonus",
            average.normalize(),
            BEHAVIOR_BONUS_QUALIFYING_SCORE
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "behavior_bonus".to_string(),
        rule_name: "Behavior Bonus".to_string(),
        input: serde_json::json!({
            "behavior_average": average.normalize().to_string(),
            "base_reward": base_reward.normalize().to_string()
        }),
        output: serde_json::json!({
            "tier": bonus.tier,
            "percentage": bonus.percentage.normalize().to_string(),
            "amount": bonus.amount.normalize().to_string()
        }),
        reasoning,
    };

    Ok(BehaviorBonusResult { bonus, audit_step })
}
