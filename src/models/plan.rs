use serde::{Deserialize, Serialize};

use crate::bryant::{BryantMethod, BryantMethodConfig};

/// ---------------------------------------------------------------------------
/// Periodization Model
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodizationModel {
  #[default]
  Linear,
  Undulating,
  Block,
  Tactical,
}

impl std::fmt::Display for PeriodizationModel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Linear => write!(f, "linear"),
      Self::Undulating => write!(f, "undulating"),
      Self::Block => write!(f, "block"),
      Self::Tactical => write!(f, "tactical"),
    }
  }
}

impl std::str::FromStr for PeriodizationModel {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "linear" => Ok(Self::Linear),
      "undulating" => Ok(Self::Undulating),
      "block" => Ok(Self::Block),
      "tactical" => Ok(Self::Tactical),
      _ => Err(format!("Unknown periodization model: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Phase Focus, Intensity, Volume Level
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseFocus {
  MovementQuality,
  MuscleGrowth,
  MaximalStrength,
  PowerDevelopment,
  AerobicBase,
  StrengthEndurance,
  TacticalPerformance,
}

impl PhaseFocus {
  pub fn as_str(&self) -> &'static str {
    match self {
      PhaseFocus::MovementQuality => "movement_quality",
      PhaseFocus::MuscleGrowth => "muscle_growth",
      PhaseFocus::MaximalStrength => "maximal_strength",
      PhaseFocus::PowerDevelopment => "power_development",
      PhaseFocus::AerobicBase => "aerobic_base",
      PhaseFocus::StrengthEndurance => "strength_endurance",
      PhaseFocus::TacticalPerformance => "tactical_performance",
    }
  }
}

impl std::fmt::Display for PhaseFocus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Target load as a percentage of training max
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IntensityRange {
  Percent { min: u8, max: u8 },
  Variable,
}

impl std::fmt::Display for IntensityRange {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Percent { min, max } => write!(f, "{}-{}%", min, max),
      Self::Variable => write!(f, "variable"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VolumeLevel {
  Low,
  Moderate,
  ModerateHigh,
  High,
}

/// ---------------------------------------------------------------------------
/// Phase Distribution (linear / undulating only)
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseDistribution {
  pub anatomical_adaptation: u32,
  pub hypertrophy: u32,
  pub strength: u32,
  pub power: u32,
}

impl Default for PhaseDistribution {
  fn default() -> Self {
    Self {
      anatomical_adaptation: 2,
      hypertrophy: 4,
      strength: 4,
      power: 2,
    }
  }
}

impl PhaseDistribution {
  pub fn new(anatomical_adaptation: u32, hypertrophy: u32, strength: u32, power: u32) -> Self {
    Self {
      anatomical_adaptation,
      hypertrophy,
      strength,
      power,
    }
  }

  /// Week counts in canonical linear order
  pub fn as_array(&self) -> [u32; 4] {
    [self.anatomical_adaptation, self.hypertrophy, self.strength, self.power]
  }

  /// Weeks assigned across all four phases, widened so huge inputs cannot wrap
  pub fn total(&self) -> u64 {
    self.as_array().iter().map(|w| u64::from(*w)).sum()
  }
}

/// ---------------------------------------------------------------------------
/// Phase
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
  pub name: String,
  /// 1-based position in the plan
  pub order: u32,
  pub start_week: u32,
  pub end_week: u32,
  pub focus: PhaseFocus,
  pub intensity: IntensityRange,
  pub volume: VolumeLevel,
  pub bryant_methods: Vec<BryantMethod>,
  pub description: String,
}

impl Phase {
  pub fn weeks(&self) -> u32 {
    self.end_week + 1 - self.start_week
  }

  pub fn uses_method(&self, method: BryantMethod) -> bool {
    self.bryant_methods.contains(&method)
  }
}

/// ---------------------------------------------------------------------------
/// Periodization Plan
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodizationPlan {
  pub total_weeks: u32,
  pub model: PeriodizationModel,
  pub phases: Vec<Phase>,
  /// Enabled method configurations carried into the plan
  pub bryant_integration: Vec<BryantMethodConfig>,
}

impl PeriodizationPlan {
  pub fn assigned_weeks(&self) -> u32 {
    self.phases.iter().map(Phase::weeks).sum()
  }

  /// Phases start at week 1, follow each other without gaps or overlaps
  /// and end exactly on `total_weeks`
  pub fn covers_program(&self) -> bool {
    let mut expected_start = 1;
    for phase in &self.phases {
      if phase.start_week != expected_start || phase.end_week < phase.start_week {
        return false;
      }
      expected_start = phase.end_week + 1;
    }
    !self.phases.is_empty() && expected_start == self.total_weeks + 1
  }

  pub fn has_focus(&self, focus: PhaseFocus) -> bool {
    self.phases.iter().any(|p| p.focus == focus)
  }

  pub fn enabled_methods(&self) -> Vec<BryantMethod> {
    self.bryant_integration.iter().map(BryantMethodConfig::method).collect()
  }
}
