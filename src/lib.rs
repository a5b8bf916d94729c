//! Reward Calculation Engine for a family financial-literacy app.
//!
//! This crate provides the pure calculation core that converts letter grades,
//! behavior ratings, and quiz accuracy into monetary rewards, bonuses, and a
//! fixed-percentage budget allocation.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;

/// The engine version recorded on every [`models::RewardSummary`].
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
