//! Calculation logic for the Reward Calculation Engine.
//!
//! This module contains all the calculation functions for turning raw inputs
//! into monetary amounts: grade reward calculation, GPA computation, behavior
//! score aggregation, behavior and education bonus tier lookup, fixed-percentage
//! budget allocation, and the full reward summary pipeline that composes them.

mod behavior_average;
mod behavior_bonus;
mod budget_allocation;
mod education_bonus;
mod gpa;
mod grade_reward;
mod summary;

pub use behavior_average::{average_score, overall_average};
pub use behavior_bonus::{
    BEHAVIOR_BONUS_QUALIFYING_SCORE, BehaviorBonusResult, behavior_bonus, calculate_behavior_bonus,
};
pub use budget_allocation::{AllocationResult, allocate, calculate_allocation};
pub use education_bonus::{
    EDUCATION_BONUS_QUALIFYING_ACCURACY, EducationBonusResult, accuracy_percentage,
    calculate_education_bonus, education_bonus,
};
pub use gpa::calculate_gpa;
pub use grade_reward::{GradeRewardResult, calculate_grade_reward, reward_for, total_reward};
pub use summary::{GradeInput, RewardRequest, calculate_reward_summary};
