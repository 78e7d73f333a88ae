use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bryant::BryantMethod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
  Low,
  Medium,
  High,
}

/// Goals the intake can prioritise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingGoal {
  Strength,
  Hypertrophy,
  Power,
  Tactical,
}

/// Missing goals mean "no adjustment", never an error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalPriorities {
  pub strength: Option<Priority>,
  pub hypertrophy: Option<Priority>,
  pub power: Option<Priority>,
  pub tactical: Option<Priority>,
}

impl GoalPriorities {
  pub fn priority(&self, goal: TrainingGoal) -> Option<Priority> {
    match goal {
      TrainingGoal::Strength => self.strength,
      TrainingGoal::Hypertrophy => self.hypertrophy,
      TrainingGoal::Power => self.power,
      TrainingGoal::Tactical => self.tactical,
    }
  }

  pub fn is_high(&self, goal: TrainingGoal) -> bool {
    self.priority(goal) == Some(Priority::High)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
  Beginner,
  Intermediate,
  Advanced,
  Elite,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BryantReadiness {
  pub preferred_methods: Vec<BryantMethod>,
  pub equipment_access: Vec<String>,
}

/// Outcome of the external health screening questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaScreening {
  pub cleared: bool,
  pub restrictions: Vec<String>,
}

impl Default for PhaScreening {
  fn default() -> Self {
    Self {
      cleared: true,
      restrictions: Vec::new(),
    }
  }
}

/// Structured result of the intake wizard (read-only input)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssessmentResult {
  pub goal_priorities: GoalPriorities,
  pub experience_level: Option<ExperienceLevel>,
  pub bryant_readiness: Option<BryantReadiness>,
  pub pha_screening: Option<PhaScreening>,
}

impl AssessmentResult {
  pub fn preferred_methods(&self) -> &[BryantMethod] {
    self.bryant_readiness
      .as_ref()
      .map(|r| r.preferred_methods.as_slice())
      .unwrap_or(&[])
  }
}

/// ---------------------------------------------------------------------------
/// Exercise Selection (supplied by the exercise library)
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementPattern {
  Squat,
  Hinge,
  Push,
  Pull,
  Carry,
  Rotate,
}

impl MovementPattern {
  pub const ALL: [MovementPattern; 6] = [
    MovementPattern::Squat,
    MovementPattern::Hinge,
    MovementPattern::Push,
    MovementPattern::Pull,
    MovementPattern::Carry,
    MovementPattern::Rotate,
  ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternSelection {
  pub selected: Vec<String>,
  pub priority: Option<Priority>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExerciseSelection {
  pub movement_patterns: BTreeMap<MovementPattern, PatternSelection>,
}

impl ExerciseSelection {
  /// Number of exercises picked for a pattern (0 when the pattern is absent)
  pub fn exercise_count(&self, pattern: MovementPattern) -> u32 {
    self.movement_patterns
      .get(&pattern)
      .map(|p| p.selected.len() as u32)
      .unwrap_or(0)
  }

  pub fn with_pattern<I, S>(mut self, pattern: MovementPattern, exercises: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.movement_patterns.insert(
      pattern,
      PatternSelection {
        selected: exercises.into_iter().map(Into::into).collect(),
        priority: None,
      },
    );
    self
  }
}
