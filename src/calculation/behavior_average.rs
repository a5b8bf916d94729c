//! Behavior score aggregation functionality.
//!
//! This module averages a single day's ten category ratings and aggregates
//! multiple daily assessments into an overall average.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{BEHAVIOR_CATEGORY_COUNT, BehaviorScoreSet};

/// Calculates the average rating of a single assessment.
///
/// The average is the sum of all ten category ratings divided by ten,
/// regardless of completeness: an unset category counts as zero and pulls the
/// average down. Callers are expected to require all ten ratings before
/// submitting an assessment; the engine does not enforce it.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::RatingOutOfRange`] if any rating is
/// above 5.
///
/// # Examples
///
/// ```
/// use reward_engine::calculation::average_score;
/// use reward_engine::models::BehaviorScoreSet;
/// use rust_decimal::Decimal;
///
/// let scores = BehaviorScoreSet::uniform(4);
/// assert_eq!(average_score(&scores).unwrap(), Decimal::from(4));
/// ```
pub fn average_score(scores: &BehaviorScoreSet) -> EngineResult<Decimal> {
    scores.validate()?;
    Ok(scores.total() / Decimal::from(BEHAVIOR_CATEGORY_COUNT))
}

/// Calculates the overall average across multiple daily assessments.
///
/// This is the mean of each assessment's own average (mean of means), not a
/// pooled mean over all the underlying ratings. The distinction matters when
/// assessments are incomplete, and the mean-of-means form is what the app has
/// always displayed, so it is preserved. Order of assessments is irrelevant;
/// there is no recency weighting. An empty slice returns exactly `0.0`.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::RatingOutOfRange`] if any assessment
/// contains a rating above 5.
pub fn overall_average(assessments: &[BehaviorScoreSet]) -> EngineResult<Decimal> {
    if assessments.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let mut sum = Decimal::ZERO;
    for assessment in assessments {
        sum += average_score(assessment)?;
    }

    Ok(sum / Decimal::from(assessments.len()))
}
