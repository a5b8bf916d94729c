//! Budget allocation breakdown model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A total reward split into the four fixed budget buckets.
///
/// The split is taxes 15%, retirement 10%, savings 25%, discretionary 50%.
/// The four buckets always sum exactly to the input total: discretionary is
/// derived by subtraction, so any arithmetic residual lands there instead of
/// breaking the invariant.
///
/// # Example
///
/// ```
/// use reward_engine::calculation::allocate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = allocate(Decimal::from_str("100").unwrap()).unwrap();
/// assert_eq!(breakdown.taxes, Decimal::from_str("15.00").unwrap());
/// assert_eq!(breakdown.discretionary, Decimal::from_str("50.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationBreakdown {
    /// The total amount that was allocated.
    pub total: Decimal,
    /// The taxes bucket (15% of total).
    pub taxes: Decimal,
    /// The retirement bucket (10% of total).
    pub retirement: Decimal,
    /// The savings bucket (25% of total).
    pub savings: Decimal,
    /// The discretionary bucket (remainder, nominally 50%).
    pub discretionary: Decimal,
}
