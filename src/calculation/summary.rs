//! Full reward summary pipeline.
//!
//! This module composes the individual calculators into the complete chain
//! run for one student: per-subject grade rewards, GPA, behavior overall
//! average, both bonuses applied to the grade reward total, the grand total,
//! and its budget allocation. Every step lands in the audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;
use uuid::Uuid;

use crate::ENGINE_VERSION;
use crate::error::EngineResult;
use crate::models::{
    AuditTrace, AuditWarning, BehaviorScoreSet, GradeEntry, LetterGrade, RewardSummary,
};

use super::{
    accuracy_percentage, calculate_allocation, calculate_behavior_bonus, calculate_education_bonus,
    calculate_grade_reward, calculate_gpa, overall_average, total_reward,
};

/// A graded subject supplied to the reward pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeInput {
    /// The subject name (e.g. "Math").
    pub subject: String,
    /// The letter grade earned.
    pub grade: LetterGrade,
    /// The dollar amount a perfect grade would earn.
    pub base_amount: Decimal,
}

/// All inputs for one student's reward calculation.
///
/// Assembled by the caller from whatever storage it uses; the engine never
/// fetches anything itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRequest {
    /// The ID of the student the calculation is for.
    pub student_id: String,
    /// The graded subjects for the period.
    pub grades: Vec<GradeInput>,
    /// The daily behavior assessments for the period, any order.
    pub assessments: Vec<BehaviorScoreSet>,
    /// Trivia questions answered correctly.
    pub quiz_correct: u32,
    /// Trivia questions answered in total.
    pub quiz_total: u32,
}

/// Runs the full reward calculation for one student.
///
/// The chain is: grade rewards per subject, GPA, behavior overall average,
/// behavior bonus and education bonus (both applied to the grade reward
/// total), grand total, budget allocation. Incomplete behavior assessments
/// produce an audit warning but do not fail the call.
///
/// # Errors
///
/// Any invalid input (negative amount, rating above 5, out-of-range metric)
/// rejects the entire calculation; there is no partial result.
pub fn calculate_reward_summary(request: &RewardRequest) -> EngineResult<RewardSummary> {
    let started = Instant::now();
    let mut steps = Vec::new();
    let mut warnings = Vec::new();
    let mut step_number = 0u32;

    let mut entries: Vec<GradeEntry> = Vec::with_capacity(request.grades.len());
    for input in &request.grades {
        step_number += 1;
        let result =
            calculate_grade_reward(&input.subject, input.grade, input.base_amount, step_number)?;
        steps.push(result.audit_step);
        entries.push(result.entry);
    }

    let grade_reward_total = total_reward(&entries);
    let letter_grades: Vec<LetterGrade> = request.grades.iter().map(|g| g.grade).collect();
    let gpa = calculate_gpa(&letter_grades);

    for (index, assessment) in request.assessments.iter().enumerate() {
        if !assessment.is_complete() {
            warnings.push(AuditWarning {
                code: "INCOMPLETE_SCORE_SET".to_string(),
                message: format!("Assessment {} has unrated categories", index + 1),
                severity: "low".to_string(),
            });
        }
    }
    let behavior_average = overall_average(&request.assessments)?;

    step_number += 1;
    let behavior = calculate_behavior_bonus(behavior_average, grade_reward_total, step_number)?;
    steps.push(behavior.audit_step);

    let accuracy = accuracy_percentage(request.quiz_correct, request.quiz_total);
    step_number += 1;
    let education = calculate_education_bonus(accuracy, grade_reward_total, step_number)?;
    steps.push(education.audit_step);

    let total = grade_reward_total + behavior.bonus.amount + education.bonus.amount;
    step_number += 1;
    let allocation = calculate_allocation(total, step_number)?;
    steps.push(allocation.audit_step);

    debug!(
        student_id = %request.student_id,
        %total,
        steps = steps.len(),
        warnings = warnings.len(),
        "reward summary calculated"
    );

    Ok(RewardSummary {
        calculation_id: Uuid::new_v4(),
        timestamp: chrono::Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        student_id: request.student_id.clone(),
        grade_entries: entries,
        grade_reward_total,
        gpa,
        behavior_average,
        behavior_bonus: behavior.bonus,
        education_bonus: education.bonus,
        total_reward: total,
        allocation: allocation.breakdown,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: started.elapsed().as_micros() as u64,
        },
    })
}
