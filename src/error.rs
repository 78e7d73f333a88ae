//! Error types for the planning pipeline
//!
//! Only configuration problems are errors. Validation findings travel as
//! `ValidationReport` data and never abort a run.

use serde::{Deserialize, Serialize};

use crate::bryant::BryantMethod;

/// ---------------------------------------------------------------------------
/// Planning Errors
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum PlanningError {
  #[error("Total weeks must be greater than zero")]
  InvalidTotalWeeks,

  #[error("Phase distribution assigns {allocated} weeks but the program has only {total_weeks}")]
  DistributionExceedsTotal { allocated: u64, total_weeks: u32 },

  #[error("{method} configured for {weeks} weeks (must be 1-{total_weeks})")]
  InvalidMethodWeeks {
    method: BryantMethod,
    weeks: u32,
    total_weeks: u32,
  },

  #[error("Duplicate configuration for {0}")]
  DuplicateMethod(BryantMethod),
}

/// ---------------------------------------------------------------------------
/// Configuration Errors
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ConfigError {
  #[error("Invalid value for {key}: {value:?} ({reason})")]
  Invalid {
    key: String,
    value: String,
    reason: String,
  },
}
