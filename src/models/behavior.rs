//! Behavior score set model.
//!
//! A daily behavior assessment rates a child across ten fixed categories on a
//! 1-5 scale. A zero rating means the category has not been filled in yet.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The number of behavior categories in every score set.
pub const BEHAVIOR_CATEGORY_COUNT: u32 = 10;

/// A single day's behavior assessment across the ten fixed categories.
///
/// Each rating is an integer in 1-5; zero marks an unset category. An unset
/// category still counts as zero in the average, pulling it down — the UI is
/// expected to require all ten ratings before submission, so the engine does
/// not treat incompleteness as an error (see [`BehaviorScoreSet::is_complete`]).
///
/// # Example
///
/// ```
/// use reward_engine::models::BehaviorScoreSet;
///
/// let scores = BehaviorScoreSet::uniform(4);
/// assert!(scores.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorScoreSet {
    /// Healthy eating rating.
    pub diet: u8,
    /// Physical activity rating.
    pub exercise: u8,
    /// Schoolwork and chores rating.
    pub work: u8,
    /// Personal hygiene rating.
    pub hygiene: u8,
    /// Respect toward others rating.
    pub respect: u8,
    /// Household responsibilities rating.
    pub responsibilities: u8,
    /// General attitude rating.
    pub attitude: u8,
    /// Cooperation with family rating.
    pub cooperation: u8,
    /// Courtesy and manners rating.
    pub courtesy: u8,
    /// Service to others rating.
    pub service: u8,
}

impl BehaviorScoreSet {
    /// Creates a score set with the same rating in every category.
    pub fn uniform(rating: u8) -> Self {
        BehaviorScoreSet {
            diet: rating,
            exercise: rating,
            work: rating,
            hygiene: rating,
            respect: rating,
            responsibilities: rating,
            attitude: rating,
            cooperation: rating,
            courtesy: rating,
            service: rating,
        }
    }

    /// Returns each category name paired with its rating, in declaration order.
    pub fn categories(&self) -> [(&'static str, u8); 10] {
        [
            ("diet", self.diet),
            ("exercise", self.exercise),
            ("work", self.work),
            ("hygiene", self.hygiene),
            ("respect", self.respect),
            ("responsibilities", self.responsibilities),
            ("attitude", self.attitude),
            ("cooperation", self.cooperation),
            ("courtesy", self.courtesy),
            ("service", self.service),
        ]
    }

    /// Returns true if all ten categories have been rated (all > 0).
    pub fn is_complete(&self) -> bool {
        self.categories().iter().all(|(_, rating)| *rating > 0)
    }

    /// Returns the sum of all ten ratings as a decimal.
    pub fn total(&self) -> Decimal {
        let sum: u32 = self.categories().iter().map(|(_, r)| u32::from(*r)).sum();
        Decimal::from(sum)
    }

    /// Validates that every rating is within 0-5.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RatingOutOfRange`] naming the first category
    /// with a rating above 5.
    pub fn validate(&self) -> EngineResult<()> {
        for (category, rating) in self.categories() {
            if rating > 5 {
                return Err(EngineError::RatingOutOfRange {
                    category: category.to_string(),
                    value: rating,
                });
            }
        }
        Ok(())
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
    fn test_uniform_fills_every_category() {
        let scores = BehaviorScoreSet::uniform(3);
        for (_, rating) in scores.categories() {
            assert_eq!(rating, 3);
        }
    }

    #[test]
    fn test_complete_requires_all_categories_rated() {
        let mut scores = BehaviorScoreSet::uniform(4);
        assert!(scores.is_complete());

        scores.courtesy = 0;
        assert!(!scores.is_complete());
    }

    #[test]
    fn test_total_sums_all_ten_ratings() {
        let scores = BehaviorScoreSet::uniform(5);
        assert_eq!(scores.total(), dec("50"));

        let mut mixed = BehaviorScoreSet::uniform(1);
        mixed.diet = 5;
        assert_eq!(mixed.total(), dec("14"));
    }

    #[test]
    fn test_validate_accepts_zero_through_five() {
        assert!(BehaviorScoreSet::uniform(0).validate().is_ok());
        assert!(BehaviorScoreSet::uniform(5).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_rating_above_five() {
        let mut scores = BehaviorScoreSet::uniform(3);
        scores.respect = 6;

        let err = scores.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Behavior rating 'respect' is 6, must be between 0 and 5"
        );
    }

    #[test]
    fn test_serialization_uses_category_names() {
        let scores = BehaviorScoreSet::uniform(2);
        let json = serde_json::to_string(&scores).unwrap();
        assert!(json.contains("\"diet\":2"));
        assert!(json.contains("\"responsibilities\":2"));
        assert!(json.contains("\"service\":2"));
    }

    #[test]
    fn test_deserialization() {
        let json = r#"{
            "diet": 5, "exercise": 4, "work": 3, "hygiene": 5, "respect": 5,
            "responsibilities": 2, "attitude": 4, "cooperation": 3,
            "courtesy": 5, "service": 4
        }"#;

        let scores: BehaviorScoreSet = serde_json::from_str(json).unwrap();
        assert_eq!(scores.diet, 5);
        assert_eq!(scores.responsibilities, 2);
        assert_eq!(scores.total(), dec("40"));
    }
}
