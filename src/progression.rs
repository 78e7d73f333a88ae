//! Progression Scheduler
//!
//! Week-by-week volume curve for each phase:
//! - start volume = weekly baseline x focus multiplier
//! - +5% of the start volume per week inside the phase
//! - the final week of a phase of 4+ weeks is a deload at 60% of start
//!
//! Key principles:
//! - Calendar-driven, not criteria-driven (no logged-performance feedback)
//! - Every value is derived from the start volume, so phases are independent
//! - Short phases (< 4 weeks) never auto-deload

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{PeriodizationPlan, Phase, PhaseFocus, VolumeProgression, WeekVolume};

/// Weekly growth as a fraction of the phase start volume
pub const WEEKLY_INCREMENT: f64 = 0.05;
/// Deload week volume as a fraction of the phase start volume
pub const DELOAD_FACTOR: f64 = 0.6;
/// Phases at least this long end in a deload
pub const MIN_DELOAD_PHASE_WEEKS: u32 = 4;

// ---------------------------------------------------------------------------
/// Week Kind: Building vs Deload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekKind {
    /// Volume climbs linearly from the start volume
    Building,
    /// Final week of a long phase, reduced volume
    Deload,
}

impl std::fmt::Display for WeekKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Building => write!(f, "building"),
            Self::Deload => write!(f, "deload"),
        }
    }
}

/// Which kind of week `week` (1-based) is inside a phase of `phase_weeks`
pub fn week_kind(week: u32, phase_weeks: u32) -> WeekKind {
    if week == phase_weeks && phase_weeks >= MIN_DELOAD_PHASE_WEEKS {
        WeekKind::Deload
    } else {
        WeekKind::Building
    }
}

// ---------------------------------------------------------------------------
/// Start Volume
// ---------------------------------------------------------------------------

/// Scale applied to the weekly baseline when a phase starts
pub fn focus_multiplier(focus: PhaseFocus) -> f64 {
    match focus {
        PhaseFocus::MovementQuality => 0.7,
        PhaseFocus::MuscleGrowth => 1.2,
        PhaseFocus::MaximalStrength => 0.9,
        PhaseFocus::PowerDevelopment => 0.6,
        PhaseFocus::AerobicBase
        | PhaseFocus::StrengthEndurance
        | PhaseFocus::TacticalPerformance => 1.0,
    }
}

pub fn start_volume(focus: PhaseFocus, baseline: u32) -> u32 {
    (f64::from(baseline) * focus_multiplier(focus)).round() as u32
}

/// Volume for one week (1-based) of a phase
pub fn week_volume(start: u32, week: u32, phase_weeks: u32) -> u32 {
    let start = f64::from(start);
    let volume = match week_kind(week, phase_weeks) {
        WeekKind::Deload => start * DELOAD_FACTOR,
        WeekKind::Building => start * (1.0 + WEEKLY_INCREMENT * f64::from(week.saturating_sub(1))),
    };
    volume.round() as u32
}

// ---------------------------------------------------------------------------
/// Schedules
// ---------------------------------------------------------------------------

/// Weekly curve for a phase starting at `start`
pub fn schedule_phase(phase: &Phase, start: u32) -> VolumeProgression {
    let phase_weeks = phase.weeks();
    let weeks = (1..=phase_weeks)
        .map(|week| WeekVolume {
            week_number: phase.start_week + week - 1,
            week_in_phase: week,
            volume: week_volume(start, week, phase_weeks),
            intensity: phase.intensity,
            focus: phase.focus,
            is_deload: week_kind(week, phase_weeks) == WeekKind::Deload,
        })
        .collect();

    VolumeProgression {
        phase_name: phase.name.clone(),
        start_volume: start,
        weeks,
    }
}

/// One progression per phase, each seeded from `baseline` (total weekly sets)
pub fn schedule_plan(plan: &PeriodizationPlan, baseline: u32) -> Vec<VolumeProgression> {
    plan.phases
        .iter()
        .map(|phase| {
            let start = start_volume(phase.focus, baseline);
            let progression = schedule_phase(phase, start);
            debug!(
                phase = %phase.name,
                start,
                peak = progression.peak_volume(),
                deload = progression.deload_week().is_some(),
                "Scheduled phase progression"
            );
            progression
        })
        .collect()
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
