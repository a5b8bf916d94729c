//! Core data models for the Reward Calculation Engine.
//!
//! This module contains all the value types used throughout the engine.
//! Every type here is an immutable value: none has a lifecycle beyond the
//! calculation call that produces or consumes it.

mod allocation;
mod behavior;
mod bonus;
mod grade;
mod reward_summary;

pub use allocation::AllocationBreakdown;
pub use behavior::{BEHAVIOR_CATEGORY_COUNT, BehaviorScoreSet};
pub use bonus::BonusAward;
pub use grade::{GradeEntry, LetterGrade};
pub use reward_summary::{AuditStep, AuditTrace, AuditWarning, RewardSummary};
