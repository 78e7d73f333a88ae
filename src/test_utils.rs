//! Test utilities and fixtures shared by the module tests
//!
//! This module provides:
//! - Bryant method configuration factories
//! - Assessment factories with goal priorities
//! - Exercise selection fixtures
//! - Hand-built phases for scheduler tests

use crate::bryant::{self, BryantMethod, BryantMethodConfig};
use crate::models::{
  AssessmentResult, BryantReadiness, ExerciseSelection, GoalPriorities, MovementPattern,
  PhaScreening, Phase, PhaseFocus, Priority,
};
use crate::phases::focus_targets;

/// ---------------------------------------------------------------------------
/// Bryant Method Configurations
/// ---------------------------------------------------------------------------

/// Full registry list with only `methods` switched on
pub fn enabled_configs(methods: &[BryantMethod]) -> Vec<BryantMethodConfig> {
  bryant::default_method_configs()
    .into_iter()
    .map(|mut config| {
      config.enabled = methods.contains(&config.method());
      config
    })
    .collect()
}

pub fn all_methods_enabled() -> Vec<BryantMethodConfig> {
  enabled_configs(&BryantMethod::ALL)
}

/// ---------------------------------------------------------------------------
/// Assessments
/// ---------------------------------------------------------------------------

/// Assessment with the given goals set to high, everything else absent
pub fn assessment_with_high_goals(strength: bool, hypertrophy: bool, power: bool, tactical: bool) -> AssessmentResult {
  let high = |flag: bool| if flag { Some(Priority::High) } else { None };
  AssessmentResult {
    goal_priorities: GoalPriorities {
      strength: high(strength),
      hypertrophy: high(hypertrophy),
      power: high(power),
      tactical: high(tactical),
    },
    ..Default::default()
  }
}

pub fn assessment_preferring(methods: &[BryantMethod]) -> AssessmentResult {
  AssessmentResult {
    bryant_readiness: Some(BryantReadiness {
      preferred_methods: methods.to_vec(),
      equipment_access: vec!["barbell".to_string(), "sandbag".to_string()],
    }),
    pha_screening: Some(PhaScreening::default()),
    ..Default::default()
  }
}

/// ---------------------------------------------------------------------------
/// Exercise Selections
/// ---------------------------------------------------------------------------

/// Two exercises for every pattern
pub fn full_body_selection() -> ExerciseSelection {
  ExerciseSelection::default()
    .with_pattern(MovementPattern::Squat, ["back squat", "split squat"])
    .with_pattern(MovementPattern::Hinge, ["deadlift", "romanian deadlift"])
    .with_pattern(MovementPattern::Push, ["bench press", "overhead press"])
    .with_pattern(MovementPattern::Pull, ["barbell row", "pull-up"])
    .with_pattern(MovementPattern::Carry, ["farmer carry", "suitcase carry"])
    .with_pattern(MovementPattern::Rotate, ["pallof press", "landmine rotation"])
}

/// ---------------------------------------------------------------------------
/// Phases
/// ---------------------------------------------------------------------------

pub fn make_phase(name: &str, focus: PhaseFocus, start_week: u32, end_week: u32) -> Phase {
  let (intensity, volume) = focus_targets(focus);
  Phase {
    name: name.to_string(),
    order: 1,
    start_week,
    end_week,
    focus,
    intensity,
    volume,
    bryant_methods: Vec::new(),
    description: String::new(),
  }
}
