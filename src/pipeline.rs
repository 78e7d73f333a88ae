//! End-to-end planning run
//!
//! One call takes the assessment and the user's choices through every stage:
//! phase generation, plan validation, volume allocation, volume validation,
//! progression scheduling and deload selection. The run is pure; callers
//! re-invoke it after each edit and keep only the latest outcome.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::bryant::{self, BryantMethodConfig};
use crate::config::PlannerConfig;
use crate::deload::{self, DeloadStrategy};
use crate::error::PlanningError;
use crate::models::{
    AssessmentResult, ExerciseSelection, MuscleGroup, PeriodizationModel, PeriodizationPlan,
    PhaseDistribution, RecoveryProtocols, ValidationReport, VolumeProgression,
};
use crate::phases::{self, PhaseRequest};
use crate::plan_validation::{self, PlanReport};
use crate::progression;
use crate::volume::{self, VolumeAllocation};
use crate::volume_validation::{self, VolumeReport};

// ---------------------------------------------------------------------------
/// Input
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanningInput {
    pub assessment: AssessmentResult,
    pub total_weeks: u32,
    pub model: PeriodizationModel,
    /// Linear/undulating split; `None` uses the configured default
    pub distribution: Option<PhaseDistribution>,
    pub methods: Vec<BryantMethodConfig>,
    pub exercise_selection: ExerciseSelection,
    pub recovery: RecoveryProtocols,
    /// Hand-set weekly sets that replace the derived value
    pub volume_overrides: BTreeMap<MuscleGroup, u32>,
}

impl Default for PlanningInput {
    fn default() -> Self {
        Self {
            assessment: AssessmentResult::default(),
            total_weeks: PlannerConfig::default().default_total_weeks,
            model: PeriodizationModel::default(),
            distribution: None,
            methods: bryant::default_method_configs(),
            exercise_selection: ExerciseSelection::default(),
            recovery: RecoveryProtocols::default(),
            volume_overrides: BTreeMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
/// Outcome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramOutcome {
    pub plan: PeriodizationPlan,
    pub plan_report: PlanReport,
    pub volume: VolumeAllocation,
    pub volume_report: VolumeReport,
    pub progressions: Vec<VolumeProgression>,
    pub deload: DeloadStrategy,
    /// Plan findings followed by volume findings
    pub validation: ValidationReport,
}

impl ProgramOutcome {
    pub fn is_valid(&self) -> bool {
        self.validation.is_valid
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub fn run_pipeline(input: &PlanningInput, config: &PlannerConfig) -> Result<ProgramOutcome, PlanningError> {
    info!(
        total_weeks = input.total_weeks,
        model = %input.model,
        "Running planning pipeline"
    );

    let request = PhaseRequest {
        total_weeks: input.total_weeks,
        model: input.model,
        distribution: Some(input.distribution.unwrap_or(config.phase_distribution)),
        methods: &input.methods,
    };
    let plan = phases::build_plan(&request).map_err(|e| {
        warn!(error = %e, "Planning configuration rejected");
        e
    })?;

    let plan_report = plan_validation::validate_plan(&plan, &input.methods, &input.assessment);

    let enabled = bryant::enabled_methods(&input.methods);
    let volume = volume::allocate_volume(
        &input.exercise_selection,
        &input.assessment.goal_priorities,
        &enabled,
        config.sets_per_exercise,
    )
    .with_overrides(&input.volume_overrides);

    let volume_report = volume_validation::validate_volume(&volume.muscles, &enabled, &input.recovery);

    let progressions = progression::schedule_plan(&plan, volume.total_volume());

    let validation = plan_report.report.clone().merge(&volume_report.report);

    info!(
        phases = plan.phases.len(),
        weekly_volume = volume_report.weekly_volume,
        is_valid = validation.is_valid,
        warnings = validation.warnings.len(),
        "Planning pipeline complete"
    );

    Ok(ProgramOutcome {
        plan,
        plan_report,
        volume,
        volume_report,
        progressions,
        deload: deload::select_strategy(),
        validation,
    })
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
