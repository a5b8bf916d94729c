//! Budget allocation calculation functionality.
//!
//! This module splits a total reward into the four fixed budget buckets:
//! taxes 15%, retirement 10%, savings 25%, discretionary 50%.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AllocationBreakdown, AuditStep};

/// Returns the taxes allocation rate (15%).
pub fn taxes_rate() -> Decimal {
    Decimal::new(15, 2)
}

/// Returns the retirement allocation rate (10%).
pub fn retirement_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Returns the savings allocation rate (25%).
pub fn savings_rate() -> Decimal {
    Decimal::new(25, 2)
}

/// Splits a total into the four fixed budget buckets.
///
/// Taxes, retirement, and savings are computed directly from their rates; the
/// discretionary bucket is the remainder `total - taxes - retirement - savings`
/// rather than `total * 0.50`, so any arithmetic residual is absorbed there
/// and the four buckets always sum exactly to the input.
///
/// # Errors
///
/// Returns [`EngineError::NegativeAmount`] if `total` is negative.
///
/// # Examples
///
/// ```
/// use reward_engine::calculation::allocate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = allocate(Decimal::from_str("100").unwrap()).unwrap();
/// assert_eq!(breakdown.taxes, Decimal::from_str("15").unwrap());
/// assert_eq!(breakdown.retirement, Decimal::from_str("10").unwrap());
/// assert_eq!(breakdown.savings, Decimal::from_str("25").unwrap());
/// assert_eq!(breakdown.discretionary, Decimal::from_str("50").unwrap());
/// ```
pub fn allocate(total: Decimal) -> EngineResult<AllocationBreakdown> {
    if total.is_sign_negative() {
        return Err(EngineError::NegativeAmount {
            field: "total".to_string(),
            amount: total,
        });
    }

    let taxes = total * taxes_rate();
    let retirement = total * retirement_rate();
    let savings = total * savings_rate();
    let discretionary = total - taxes - retirement - savings;

    Ok(AllocationBreakdown {
        total,
        taxes,
        retirement,
        savings,
        discretionary,
    })
}

/// The result of a budget allocation, including the audit step.
#[derive(Debug, Clone)]
pub struct AllocationResult {
    /// The allocation breakdown.
    pub breakdown: AllocationBreakdown,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Splits a total into the budget buckets, recording an audit step.
///
/// # Errors
///
/// Returns [`EngineError::NegativeAmount`] if `total` is negative.
pub fn calculate_allocation(total: Decimal, step_number: u32) -> EngineResult<AllocationResult> {
    let breakdown = allocate(total)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "budget_allocation".to_string(),
        rule_name: "Budget Allocation".to_string(),
        input: serde_json::json!({
            "total": total.normalize().to_string()
        }),
        output: serde_json::json!({
            "taxes": breakdown.taxes.normalize().to_string(),
            "retirement": breakdown.retirement.normalize().to_string(),
            "savings": breakdown.savings.normalize().to_string(),
            "discretionary": breakdown.discretionary.normalize().to_string()
        }),
        reasoning: format!(
            "${} split 15/10/25/50: taxes ${}, retirement ${}, savings ${}, discretionary ${}",
            total.normalize(),
            breakdown.taxes.normalize(),
            breakdown.retirement.normalize(),
            breakdown.savings.normalize(),
            breakdown.discretionary.normalize()
        ),
    };

    Ok(AllocationResult {
        breakdown,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn assert_sums_to_total(breakdown: &AllocationBreakdown) {
        let sum =
            breakdown.taxes + breakdown.retirement + breakdown.savings + breakdown.discretionary;
        assert_eq!(sum, breakdown.total, "buckets must sum exactly to total");
    }

    /// AL-001: round total splits exactly per the rate table
    #[test]
    fn test_allocate_100() {
        let breakdown = allocate(dec("100")).unwrap();
        assert_eq!(breakdown.taxes, dec("15"));
        assert_eq!(breakdown.retirement, dec("10"));
        assert_eq!(breakdown.savings, dec("25"));
        assert_eq!(breakdown.discretionary, dec("50"));
        assert_sums_to_total(&breakdown);
    }

    /// AL-002: non-round total still sums exactly
    #[test]
    fn test_allocate_non_round_total() {
        let breakdown = allocate(dec("33.33")).unwrap();
        assert_eq!(breakdown.taxes, dec("4.9995"));
        assert_eq!(breakdown.retirement, dec("3.333"));
        assert_eq!(breakdown.savings, dec("8.3325"));
        assert_sums_to_total(&breakdown);
    }

    /// AL-003: zero total allocates to all-zero buckets
    #[test]
    fn test_allocate_zero() {
        let breakdown = allocate(Decimal::ZERO).unwrap();
        assert_eq!(breakdown.taxes, Decimal::ZERO);
        assert_eq!(breakdown.discretionary, Decimal::ZERO);
        assert_sums_to_total(&breakdown);
    }

    /// AL-004: negative total is rejected
    #[test]
    fn test_allocate_negative_rejected() {
        let err = allocate(dec("-0.01")).unwrap_err();
        assert!(matches!(err, EngineError::NegativeAmount { .. }));
        assert_eq!(err.to_string(), "Invalid total: -0.01 is negative");
    }

    #[test]
    fn test_rates_sum_to_one_with_discretionary() {
        // 15% + 10% + 25% + 50% = 100%
        let named = taxes_rate() + retirement_rate() + savings_rate();
        assert_eq!(Decimal::ONE - named, dec("0.50"));
    }

    #[test]
    fn test_high_precision_total_sums_exactly() {
        let breakdown = allocate(dec("0.0000001")).unwrap();
        assert_sums_to_total(&breakdown);
    }

    #[test]
    fn test_audit_step_records_buckets() {
        let result = calculate_allocation(dec("200"), 6).unwrap();

        assert_eq!(result.audit_step.step_number, 6);
        assert_eq!(result.audit_step.rule_id, "budget_allocation");
        assert_eq!(result.audit_step.input["total"].as_str().unwrap(), "200");
        assert_eq!(result.audit_step.output["taxes"].as_str().unwrap(), "30");
        assert_eq!(
            result.audit_step.output["discretionary"].as_str().unwrap(),
            "100"
        );
        assert!(result.audit_step.reasoning.contains("15/10/25/50"));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = allocate(dec("47.19")).unwrap();
        let second = allocate(dec("47.19")).unwrap();
        assert_eq!(first, second);
    }
}
