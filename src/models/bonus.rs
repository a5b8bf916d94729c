//! Bonus award model shared by the behavior and education bonus engines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The outcome of a bonus tier lookup.
///
/// Both bonus engines produce this shape: the qualifying percentage, the
/// dollar amount it yields on the base reward, and an optional tier label the
/// UI displays. The label is `None` when no tier qualifies.
///
/// # Example
///
/// ```
/// use reward_engine::models::BonusAward;
/// use rust_decimal::Decimal;
///
/// let none = BonusAward::none();
/// assert_eq!(none.percentage, Decimal::ZERO);
/// assert_eq!(none.amount, Decimal::ZERO);
/// assert!(none.tier.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusAward {
    /// The bonus percentage as a fraction (e.g. 0.05 for 5%).
    pub percentage: Decimal,
    /// The bonus dollar amount: `base_reward * percentage`.
    pub amount: Decimal,
    /// The human-readable tier label, `None` when no tier qualifies.
    pub tier: Option<String>,
}

impl BonusAward {
    /// The zero award returned when no tier threshold is met.
    pub fn none() -> Self {
        BonusAward {
            percentage: Decimal::ZERO,
            amount: Decimal::ZERO,
            tier: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_none_award_is_all_zero() {
        let award = BonusAward::none();
        assert_eq!(award.percentage, Decimal::ZERO);
        assert_eq!(award.amount, Decimal::ZERO);
        assert_eq!(award.tier, None);
    }

    #[test]
    fn test_serialization_includes_tier_label() {
        let award = BonusAward {
            percentage: dec("0.05"),
            amount: dec("5.00"),
            tier: Some("Tier 5".to_string()),
        };

        let json = serde_json::to_string(&award).unwrap();
        assert!(json.contains("\"percentage\":\"0.05\""));
        assert!(json.contains("\"amount\":\"5.00\""));
        assert!(json.contains("\"tier\":\"Tier 5\""));
    }

    #[test]
    fn test_deserialization_with_null_tier() {
        let json = r#"{"percentage": "0", "amount": "0", "tier": null}"#;
        let award: BonusAward = serde_json::from_str(json).unwrap();
        assert_eq!(award, BonusAward::none());
    }
}
