//! Planner configuration from the environment
//!
//! Every key is optional; unset keys fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

use crate::error::ConfigError;
use crate::models::PhaseDistribution;
use crate::volume::DEFAULT_SETS_PER_EXERCISE;

/// ---------------------------------------------------------------------------
/// Configuration Keys
/// ---------------------------------------------------------------------------

pub const TOTAL_WEEKS_KEY: &str = "PLANNER_DEFAULT_TOTAL_WEEKS";
pub const SETS_PER_EXERCISE_KEY: &str = "PLANNER_SETS_PER_EXERCISE";
pub const PHASE_DISTRIBUTION_KEY: &str = "PLANNER_PHASE_DISTRIBUTION";

const DEFAULT_TOTAL_WEEKS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerConfig {
  /// Program length for a new session
  pub default_total_weeks: u32,
  pub sets_per_exercise: u32,
  /// Linear distribution used when the caller gives none
  pub phase_distribution: PhaseDistribution,
}

impl Default for PlannerConfig {
  fn default() -> Self {
    Self {
      default_total_weeks: DEFAULT_TOTAL_WEEKS,
      sets_per_exercise: DEFAULT_SETS_PER_EXERCISE,
      phase_distribution: PhaseDistribution::default(),
    }
  }
}

impl PlannerConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    let defaults = Self::default();
    Ok(Self {
      default_total_weeks: positive_var(TOTAL_WEEKS_KEY)?.unwrap_or(defaults.default_total_weeks),
      sets_per_exercise: positive_var(SETS_PER_EXERCISE_KEY)?.unwrap_or(defaults.sets_per_exercise),
      phase_distribution: match env::var(PHASE_DISTRIBUTION_KEY) {
        Ok(raw) => parse_distribution(&raw)?,
        Err(_) => defaults.phase_distribution,
      },
    })
  }

  /// Load `.env` (if present) and read the environment
  pub fn load() -> Result<Self, ConfigError> {
    dotenvy::dotenv().ok();
    Self::from_env()
  }
}

fn invalid(key: &str, value: &str, reason: &str) -> ConfigError {
  ConfigError::Invalid {
    key: key.to_string(),
    value: value.to_string(),
    reason: reason.to_string(),
  }
}

fn positive_var(key: &str) -> Result<Option<u32>, ConfigError> {
  let raw = match env::var(key) {
    Ok(raw) => raw,
    Err(_) => return Ok(None),
  };
  let value: u32 = raw
    .trim()
    .parse()
    .map_err(|_| invalid(key, &raw, "expected a whole number"))?;
  if value == 0 {
    return Err(invalid(key, &raw, "must be greater than zero"));
  }
  debug!(key, value, "Config override from environment");
  Ok(Some(value))
}

/// Parse "aa,hyp,str,pow" week counts
pub fn parse_distribution(raw: &str) -> Result<PhaseDistribution, ConfigError> {
  let key = PHASE_DISTRIBUTION_KEY;
  let weeks = raw
    .split(',')
    .map(|part| part.trim().parse::<u32>())
    .collect::<Result<Vec<_>, _>>()
    .map_err(|_| invalid(key, raw, "expected comma-separated week counts"))?;

  match weeks.as_slice() {
    [aa, hyp, strength, power] => {
      let distribution = PhaseDistribution::new(*aa, *hyp, *strength, *power);
      if distribution.total() == 0 {
        return Err(invalid(key, raw, "must assign at least one week"));
      }
      debug!(key, total = distribution.total(), "Config override from environment");
      Ok(distribution)
    }
    _ => Err(invalid(key, raw, "expected exactly 4 week counts")),
  }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
