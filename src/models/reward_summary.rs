//! Reward summary models for the Reward Calculation Engine.
//!
//! This module contains the [`RewardSummary`] type and its associated audit
//! structures that capture all outputs from a full reward calculation for one
//! student: grade rewards, GPA, behavior average, bonuses, the grand total,
//! its allocation, and a complete audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AllocationBreakdown, BonusAward, GradeEntry};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate data quirks that don't prevent calculation but may
/// require attention, such as an incomplete behavior score set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the calculation process so parents can
/// see exactly how a reward amount came to be.
///
/// # Example
///
/// ```
/// use reward_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a reward calculation for one student.
///
/// This struct captures all outputs from the reward engine, including the
/// per-subject grade entries, GPA, behavior average, both bonus awards, the
/// grand total, its budget allocation, and a complete audit trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardSummary {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the student the calculation is for.
    pub student_id: String,
    /// The per-subject grade entries with derived reward amounts.
    pub grade_entries: Vec<GradeEntry>,
    /// The sum of all grade reward amounts.
    pub grade_reward_total: Decimal,
    /// The GPA on the 4.0 scale (0 when no grades were supplied).
    pub gpa: Decimal,
    /// The overall behavior average (0 when no assessments were supplied).
    pub behavior_average: Decimal,
    /// The behavior bonus awarded on the grade reward total.
    pub behavior_bonus: BonusAward,
    /// The education bonus awarded on the grade reward total.
    pub education_bonus: BonusAward,
    /// The grand total: grade rewards plus both bonuses.
    pub total_reward: Decimal,
    /// The budget allocation of the grand total.
    pub allocation: AllocationBreakdown,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
