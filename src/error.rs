//! Error types for the Reward Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all invalid-input conditions the engine rejects. Invalid inputs are
//! never silently clamped: a negative amount or an out-of-range metric
//! indicates corrupted upstream data, and masking it would produce a
//! plausible-looking but wrong dollar amount.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Reward Calculation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use reward_engine::error::EngineError;
///
/// let error = EngineError::InvalidGrade {
///     value: "E".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unrecognized letter grade: E");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A string could not be parsed as a letter grade.
    #[error("Unrecognized letter grade: {value}")]
    InvalidGrade {
        /// The value that failed to parse.
        value: String,
    },

    /// A monetary amount was negative where only zero or positive is valid.
    #[error("Invalid {field}: {amount} is negative")]
    NegativeAmount {
        /// The name of the offending input field.
        field: String,
        /// The negative amount that was supplied.
        amount: Decimal,
    },

    /// A behavior category rating was outside the valid 0-5 range.
    #[error("Behavior rating '{category}' is {value}, must be between 0 and 5")]
    RatingOutOfRange {
        /// The behavior category with the invalid rating.
        category: String,
        /// The out-of-range rating value.
        value: u8,
    },

    /// A performance metric fell outside its valid range.
    #[error("{metric} is {value}, outside the valid range {min} to {max}")]
    MetricOutOfRange {
        /// The name of the metric (e.g. "accuracy percentage").
        metric: String,
        /// The out-of-range value.
        value: Decimal,
        /// The inclusive lower bound.
        min: Decimal,
        /// The inclusive upper bound.
        max: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
