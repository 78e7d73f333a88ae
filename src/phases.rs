//! Phase Generator
//!
//! Splits a program of `total_weeks` into ordered, contiguous phases according
//! to the chosen periodization model, then attaches enabled Bryant methods to
//! the phases whose focus they suit.
//!
//! Key rules:
//! - Phases with zero weeks are omitted; the week cursor never skips
//! - A method attaches to the earliest eligible phase only
//! - An impossible configuration is an error, never a truncated plan

use tracing::{debug, warn};

use crate::bryant::{self, BryantMethod, BryantMethodConfig};
use crate::error::PlanningError;
use crate::models::{
    GoalPriorities, IntensityRange, PeriodizationModel, PeriodizationPlan, Phase,
    PhaseDistribution, PhaseFocus, TrainingGoal, VolumeLevel,
};

// ---------------------------------------------------------------------------
/// Phase templates
// ---------------------------------------------------------------------------

struct PhaseTemplate {
    name: &'static str,
    focus: PhaseFocus,
    description: &'static str,
    /// Used instead of `description` when a Bryant method lands in the phase
    bryant_description: Option<&'static str>,
}

const LINEAR_PHASES: [PhaseTemplate; 4] = [
    PhaseTemplate {
        name: "Anatomical Adaptation",
        focus: PhaseFocus::MovementQuality,
        description: "Basic movement patterns and technique development",
        bryant_description: Some(
            "Movement preparation with PHA circuits for cardiovascular adaptation",
        ),
    },
    PhaseTemplate {
        name: "Hypertrophy",
        focus: PhaseFocus::MuscleGrowth,
        description: "Traditional hypertrophy training with progressive overload",
        bryant_description: Some(
            "Muscle hypertrophy with Bryant cluster sets for enhanced volume tolerance",
        ),
    },
    PhaseTemplate {
        name: "Strength",
        focus: PhaseFocus::MaximalStrength,
        description: "Maximal strength development with progressive intensity",
        bryant_description: None,
    },
    PhaseTemplate {
        name: "Power",
        focus: PhaseFocus::PowerDevelopment,
        description: "Explosive power development and rate of force development",
        bryant_description: None,
    },
];

const BLOCK_PHASES: [PhaseTemplate; 3] = [
    PhaseTemplate {
        name: "Accumulation",
        focus: PhaseFocus::MuscleGrowth,
        description: "High-volume accumulation of work capacity and muscle mass",
        bryant_description: None,
    },
    PhaseTemplate {
        name: "Transmutation",
        focus: PhaseFocus::MaximalStrength,
        description: "Converting accumulated capacity into maximal strength",
        bryant_description: None,
    },
    PhaseTemplate {
        name: "Realization",
        focus: PhaseFocus::PowerDevelopment,
        description: "Peaking and expression of power on reduced volume",
        bryant_description: None,
    },
];

const TACTICAL_PHASES: [PhaseTemplate; 3] = [
    PhaseTemplate {
        name: "Base Building",
        focus: PhaseFocus::AerobicBase,
        description: "Aerobic base development with work capacity emphasis",
        bryant_description: None,
    },
    PhaseTemplate {
        name: "Strength Endurance",
        focus: PhaseFocus::StrengthEndurance,
        description: "Strength endurance development for fatigue resistance",
        bryant_description: Some("Strength endurance with cluster sets for fatigue resistance"),
    },
    PhaseTemplate {
        name: "Tactical Application",
        focus: PhaseFocus::TacticalPerformance,
        description: "Tactical-specific training with specialized protocols",
        bryant_description: Some(
            "Tactical-specific training with strongman events and specialized protocols",
        ),
    },
];

/// Intensity and volume targets for a focus
pub fn focus_targets(focus: PhaseFocus) -> (IntensityRange, VolumeLevel) {
    let pct = |min, max| IntensityRange::Percent { min, max };
    match focus {
        PhaseFocus::MovementQuality => (pct(50, 65), VolumeLevel::Moderate),
        PhaseFocus::MuscleGrowth => (pct(65, 80), VolumeLevel::High),
        PhaseFocus::MaximalStrength => (pct(80, 95), VolumeLevel::Moderate),
        PhaseFocus::PowerDevelopment => (pct(30, 60), VolumeLevel::Low),
        PhaseFocus::AerobicBase => (pct(60, 75), VolumeLevel::High),
        PhaseFocus::StrengthEndurance => (pct(70, 85), VolumeLevel::ModerateHigh),
        PhaseFocus::TacticalPerformance => (IntensityRange::Variable, VolumeLevel::Moderate),
    }
}

// ---------------------------------------------------------------------------
/// Generation
// ---------------------------------------------------------------------------

/// Everything the generator reads
#[derive(Debug, Clone, Copy)]
pub struct PhaseRequest<'a> {
    pub total_weeks: u32,
    pub model: PeriodizationModel,
    /// Only read by linear and undulating; `None` falls back to the default split
    pub distribution: Option<PhaseDistribution>,
    pub methods: &'a [BryantMethodConfig],
}

pub fn generate_phases(request: &PhaseRequest<'_>) -> Result<Vec<Phase>, PlanningError> {
    let total_weeks = request.total_weeks;
    if total_weeks == 0 {
        warn!("Rejecting plan request with zero total weeks");
        return Err(PlanningError::InvalidTotalWeeks);
    }

    let distribution = request.distribution.unwrap_or_default();
    let (templates, weeks): (&[PhaseTemplate], Vec<u32>) = match request.model {
        PeriodizationModel::Linear => (&LINEAR_PHASES, linear_weeks(total_weeks, &distribution)?),
        PeriodizationModel::Undulating => {
            debug!(total_weeks, "No undulating layout defined, using linear phases");
            (&LINEAR_PHASES, linear_weeks(total_weeks, &distribution)?)
        }
        PeriodizationModel::Block => (&BLOCK_PHASES, block_weeks(total_weeks).to_vec()),
        PeriodizationModel::Tactical => (&TACTICAL_PHASES, tactical_weeks(total_weeks).to_vec()),
    };

    let enabled = bryant::enabled_methods(request.methods);
    let phases = lay_out(templates, &weeks, &enabled);

    debug!(
        model = %request.model,
        total_weeks,
        phase_count = phases.len(),
        "Generated phases"
    );

    Ok(phases)
}

/// Generate phases and wrap them with the enabled method configurations
pub fn build_plan(request: &PhaseRequest<'_>) -> Result<PeriodizationPlan, PlanningError> {
    if request.total_weeks == 0 {
        return Err(PlanningError::InvalidTotalWeeks);
    }
    bryant::validate_configs(request.methods, request.total_weeks)?;

    let phases = generate_phases(request)?;

    let mut bryant_integration: Vec<BryantMethodConfig> =
        request.methods.iter().filter(|c| c.enabled).cloned().collect();
    bryant_integration.sort_by_key(BryantMethodConfig::method);

    Ok(PeriodizationPlan {
        total_weeks: request.total_weeks,
        model: request.model,
        phases,
        bryant_integration,
    })
}

fn linear_weeks(total_weeks: u32, distribution: &PhaseDistribution) -> Result<Vec<u32>, PlanningError> {
    let allocated = distribution.total();
    if allocated > u64::from(total_weeks) {
        warn!(allocated, total_weeks, "Phase distribution exceeds program length");
        return Err(PlanningError::DistributionExceedsTotal {
            allocated,
            total_weeks,
        });
    }
    Ok(distribution.as_array().to_vec())
}

/// Three equal blocks, remainder goes to the first
fn block_weeks(total_weeks: u32) -> [u32; 3] {
    let base = total_weeks / 3;
    [base + total_weeks % 3, base, base]
}

/// Three equal phases, remainder goes to the last
fn tactical_weeks(total_weeks: u32) -> [u32; 3] {
    let base = total_weeks / 3;
    [base, base, total_weeks - base * 2]
}

fn lay_out(templates: &[PhaseTemplate], weeks: &[u32], enabled: &[BryantMethod]) -> Vec<Phase> {
    let slots: Vec<(&PhaseTemplate, u32)> = templates
        .iter()
        .zip(weeks.iter().copied())
        .filter(|(_, w)| *w > 0)
        .collect();

    // Earliest eligible slot wins; `enabled` is in registry order so each
    // phase lists its methods in that order too
    let mut assigned: Vec<Vec<BryantMethod>> = vec![Vec::new(); slots.len()];
    for method in enabled {
        if let Some(idx) = slots.iter().position(|(t, _)| method.allows(t.focus)) {
            assigned[idx].push(*method);
        }
    }

    let mut cursor = 1;
    slots
        .into_iter()
        .zip(assigned)
        .enumerate()
        .map(|(idx, ((template, weeks), methods))| {
            let start_week = cursor;
            let end_week = cursor + weeks - 1;
            cursor = end_week.saturating_add(1);

            let (intensity, volume) = focus_targets(template.focus);
            let description = match template.bryant_description {
                Some(text) if !methods.is_empty() => text,
                _ => template.description,
            };

            Phase {
                name: template.name.to_string(),
                order: idx as u32 + 1,
                start_week,
                end_week,
                focus: template.focus,
                intensity,
                volume,
                bryant_methods: methods,
                description: description.to_string(),
            }
        })
        .collect()
}

/// Suggested starting model for a new plan
pub fn suggest_model(goals: &GoalPriorities) -> PeriodizationModel {
    if goals.is_high(TrainingGoal::Tactical) {
        PeriodizationModel::Tactical
    } else if goals.is_high(TrainingGoal::Power) {
        PeriodizationModel::Block
    } else if goals.is_high(TrainingGoal::Strength) && goals.is_high(TrainingGoal::Hypertrophy) {
        PeriodizationModel::Undulating
    } else {
        PeriodizationModel::Linear
    }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::test_utils::all_methods_enabled;
    use proptest::prelude::*;

    fn arb_model() -> impl Strategy<Value = PeriodizationModel> {
        prop_oneof![
            Just(PeriodizationModel::Linear),
            Just(PeriodizationModel::Undulating),
            Just(PeriodizationModel::Block),
            Just(PeriodizationModel::Tactical),
        ]
    }

    proptest! {
        #[test]
        fn linear_exact_distribution_covers_program(
            aa in 0u32..8, hyp in 0u32..8, strength in 0u32..8, power in 0u32..8,
        ) {
            let dist = PhaseDistribution::new(aa, hyp, strength, power);
            let total_weeks = dist.total() as u32;
            prop_assume!(total_weeks > 0);

            let methods = all_methods_enabled();
            let plan = build_plan(&PhaseRequest {
                total_weeks,
                model: PeriodizationModel::Linear,
                distribution: Some(dist),
                methods: &[],
            }).unwrap();

            prop_assert!(plan.covers_program());
            prop_assert_eq!(plan.assigned_weeks(), total_weeks);

            // Methods never appear twice across phases
            let phases = generate_phases(&PhaseRequest {
                total_weeks,
                model: PeriodizationModel::Linear,
                distribution: Some(dist),
                methods: &methods,
            }).unwrap();
            for method in BryantMethod::ALL {
                let count = phases.iter().filter(|p| p.uses_method(method)).count();
                prop_assert!(count <= 1);
            }
        }

        #[test]
        fn tactical_is_three_phases_summing_to_total(total_weeks in 3u32..104) {
            let phases = generate_phases(&PhaseRequest {
                total_weeks,
                model: PeriodizationModel::Tactical,
                distribution: None,
                methods: &[],
            }).unwrap();

            prop_assert_eq!(phases.len(), 3);
            prop_assert_eq!(phases.iter().map(Phase::weeks).sum::<u32>(), total_weeks);
        }

        #[test]
        fn generation_is_idempotent(total_weeks in 12u32..60, model in arb_model()) {
            let methods = all_methods_enabled();
            let req = PhaseRequest {
                total_weeks,
                model,
                distribution: None,
                methods: &methods,
            };
            prop_assert_eq!(generate_phases(&req), generate_phases(&req));
        }

        #[test]
        fn block_and_tactical_always_cover_program(total_weeks in 1u32..104, tactical in any::<bool>()) {
            let model = if tactical { PeriodizationModel::Tactical } else { PeriodizationModel::Block };
            let plan = build_plan(&PhaseRequest {
                total_weeks,
                model,
                distribution: None,
                methods: &[],
            }).unwrap();
            prop_assert!(plan.covers_program());
        }
    }
}
