pub mod assessment;
pub mod plan;
pub mod recovery;
pub mod report;
pub mod volume;

pub use assessment::{
  AssessmentResult, BryantReadiness, ExerciseSelection, ExperienceLevel, GoalPriorities,
  MovementPattern, PatternSelection, PhaScreening, Priority, TrainingGoal,
};
pub use plan::{
  IntensityRange, PeriodizationModel, PeriodizationPlan, Phase, PhaseDistribution, PhaseFocus,
  VolumeLevel,
};
pub use recovery::RecoveryProtocols;
pub use report::ValidationReport;
pub use volume::{MuscleGroup, MuscleGroupVolume, VolumeProgression, VolumeStatus, WeekVolume};
