use serde::{Deserialize, Serialize};

use super::assessment::Priority;
use super::plan::{IntensityRange, PhaseFocus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
  Chest,
  Back,
  Shoulders,
  Biceps,
  Triceps,
  Quads,
  Hamstrings,
  Glutes,
  Calves,
  Abs,
}

impl MuscleGroup {
  pub const ALL: [MuscleGroup; 10] = [
    MuscleGroup::Chest,
    MuscleGroup::Back,
    MuscleGroup::Shoulders,
    MuscleGroup::Biceps,
    MuscleGroup::Triceps,
    MuscleGroup::Quads,
    MuscleGroup::Hamstrings,
    MuscleGroup::Glutes,
    MuscleGroup::Calves,
    MuscleGroup::Abs,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      MuscleGroup::Chest => "chest",
      MuscleGroup::Back => "back",
      MuscleGroup::Shoulders => "shoulders",
      MuscleGroup::Biceps => "biceps",
      MuscleGroup::Triceps => "triceps",
      MuscleGroup::Quads => "quads",
      MuscleGroup::Hamstrings => "hamstrings",
      MuscleGroup::Glutes => "glutes",
      MuscleGroup::Calves => "calves",
      MuscleGroup::Abs => "abs",
    }
  }

  /// Capitalised name for warnings
  pub fn label(&self) -> String {
    let name = self.as_str();
    let mut chars = name.chars();
    match chars.next() {
      Some(first) => first.to_uppercase().chain(chars).collect(),
      None => String::new(),
    }
  }
}

impl std::fmt::Display for MuscleGroup {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Weekly set counts for one muscle against its landmarks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleGroupVolume {
  pub muscle: MuscleGroup,
  pub mev: u32,
  pub mav: u32,
  pub mrv: u32,
  /// Derived from the exercise selection, never edited in place
  pub current: u32,
  pub priority: Priority,
}

impl MuscleGroupVolume {
  pub fn status(&self) -> VolumeStatus {
    crate::volume_validation::classify(self.current, self.mev, self.mav, self.mrv)
  }
}

/// Ordered from least to most volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeStatus {
  Under,
  Optimal,
  High,
  Excessive,
}

impl VolumeStatus {
  pub fn label(&self) -> &'static str {
    match self {
      VolumeStatus::Under => "Below MEV",
      VolumeStatus::Optimal => "Optimal",
      VolumeStatus::High => "High Volume",
      VolumeStatus::Excessive => "Above MRV",
    }
  }
}

/// ---------------------------------------------------------------------------
/// Volume Progression
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekVolume {
  /// Program week (absolute)
  pub week_number: u32,
  /// 1-based week inside the phase
  pub week_in_phase: u32,
  pub volume: u32,
  pub intensity: IntensityRange,
  pub focus: PhaseFocus,
  pub is_deload: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeProgression {
  pub phase_name: String,
  pub start_volume: u32,
  pub weeks: Vec<WeekVolume>,
}

impl VolumeProgression {
  pub fn peak_volume(&self) -> u32 {
    self.weeks.iter().map(|w| w.volume).max().unwrap_or(0)
  }

  pub fn deload_week(&self) -> Option<&WeekVolume> {
    self.weeks.iter().find(|w| w.is_deload)
  }
}
