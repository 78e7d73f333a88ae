//! Planning session
//!
//! Host-side holder of the user's choices and the last computed outcome.
//! Every edit re-runs the pipeline; nothing is patched incrementally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::bryant::{self, BryantMethod, BryantMethodConfig};
use crate::config::PlannerConfig;
use crate::error::PlanningError;
use crate::models::{
    AssessmentResult, ExerciseSelection, MuscleGroup, PeriodizationModel, PhaseDistribution,
    RecoveryProtocols,
};
use crate::phases;
use crate::pipeline::{self, PlanningInput, ProgramOutcome};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub outcome: ProgramOutcome,
    pub computed_at: DateTime<Utc>,
    pub revision: u64,
}

#[derive(Debug, Clone)]
pub struct PlanningSession {
    config: PlannerConfig,
    input: PlanningInput,
    snapshot: Option<SessionSnapshot>,
    last_error: Option<PlanningError>,
    revision: u64,
}

impl PlanningSession {
    /// Seed a session from the intake: suggested model, preferred methods
    /// switched on, configured program length
    pub fn new(assessment: AssessmentResult, config: PlannerConfig) -> Self {
        let input = PlanningInput {
            total_weeks: config.default_total_weeks,
            model: phases::suggest_model(&assessment.goal_priorities),
            distribution: None,
            methods: bryant::configs_from_assessment(&assessment),
            assessment,
            ..Default::default()
        };
        let mut session = Self {
            config,
            input,
            snapshot: None,
            last_error: None,
            revision: 0,
        };
        session.recompute();
        session
    }

    pub fn input(&self) -> &PlanningInput {
        &self.input
    }

    pub fn snapshot(&self) -> Option<&SessionSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn outcome(&self) -> Option<&ProgramOutcome> {
        self.snapshot.as_ref().map(|s| &s.outcome)
    }

    pub fn last_error(&self) -> Option<&PlanningError> {
        self.last_error.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True when the last run succeeded and passed both validators
    pub fn can_proceed(&self) -> bool {
        self.outcome().is_some_and(ProgramOutcome::is_valid)
    }

    // -----------------------------------------------------------------------
    /// Structural edits
    // -----------------------------------------------------------------------

    pub fn set_total_weeks(&mut self, total_weeks: u32) {
        self.input.total_weeks = total_weeks;
        self.recompute();
    }

    pub fn set_model(&mut self, model: PeriodizationModel) {
        self.input.model = model;
        self.recompute();
    }

    pub fn set_distribution(&mut self, distribution: Option<PhaseDistribution>) {
        self.input.distribution = distribution;
        self.recompute();
    }

    pub fn set_recovery(&mut self, recovery: RecoveryProtocols) {
        self.input.recovery = recovery;
        self.recompute();
    }

    // -----------------------------------------------------------------------
    /// Allocator input edits (drop hand-set volumes)
    // -----------------------------------------------------------------------

    pub fn set_method_enabled(&mut self, method: BryantMethod, enabled: bool) {
        match self.input.methods.iter_mut().find(|c| c.method() == method) {
            Some(config) => config.enabled = enabled,
            None if enabled => self.input.methods.push(BryantMethodConfig::enabled(method)),
            None => {}
        }
        self.input.volume_overrides.clear();
        self.recompute();
    }

    /// Replace the configuration for `config`'s method
    pub fn set_method_config(&mut self, config: BryantMethodConfig) {
        let method = config.method();
        match self.input.methods.iter_mut().find(|c| c.method() == method) {
            Some(existing) => *existing = config,
            None => self.input.methods.push(config),
        }
        self.input.volume_overrides.clear();
        self.recompute();
    }

    pub fn set_exercise_selection(&mut self, selection: ExerciseSelection) {
        self.input.exercise_selection = selection;
        self.input.volume_overrides.clear();
        self.recompute();
    }

    /// New intake data. Model and methods stay as the user left them.
    pub fn set_assessment(&mut self, assessment: AssessmentResult) {
        self.input.assessment = assessment;
        self.input.volume_overrides.clear();
        self.recompute();
    }

    // -----------------------------------------------------------------------
    /// Volume overrides
    // -----------------------------------------------------------------------

    pub fn override_volume(&mut self, muscle: MuscleGroup, sets: u32) {
        self.input.volume_overrides.insert(muscle, sets);
        self.recompute();
    }

    pub fn clear_override(&mut self, muscle: MuscleGroup) {
        if self.input.volume_overrides.remove(&muscle).is_some() {
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        self.revision += 1;
        match pipeline::run_pipeline(&self.input, &self.config) {
            Ok(outcome) => {
                info!(
                    revision = self.revision,
                    is_valid = outcome.is_valid(),
                    "Session recomputed"
                );
                self.snapshot = Some(SessionSnapshot {
                    outcome,
                    computed_at: Utc::now(),
                    revision: self.revision,
                });
                self.last_error = None;
            }
            Err(e) => {
                info!(revision = self.revision, error = %e, "Session recompute rejected");
                self.snapshot = None;
                self.last_error = Some(e);
            }
        }
    }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
