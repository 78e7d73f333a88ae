//! Volume Allocator
//!
//! Derives weekly per-muscle set counts from the exercise selection:
//! - each selected exercise counts a fixed number of sets
//! - a pattern credits its full set count to every muscle it trains
//! - high-priority goals scale current volume (multipliers compose)
//! - cluster sets raise the recoverable ceiling of the big movers
//!
//! The table is rebuilt from scratch on every call.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bryant::BryantMethod;
use crate::landmarks::landmark_table;
use crate::models::{
    ExerciseSelection, GoalPriorities, MovementPattern, MuscleGroup, MuscleGroupVolume,
    TrainingGoal,
};

pub const DEFAULT_SETS_PER_EXERCISE: u32 = 3;

const CLUSTER_MRV_FACTOR: f64 = 1.15;
const CLUSTER_MUSCLES: [MuscleGroup; 3] = [MuscleGroup::Chest, MuscleGroup::Back, MuscleGroup::Quads];

/// Muscles credited for each movement pattern
pub fn muscles_for_pattern(pattern: MovementPattern) -> &'static [MuscleGroup] {
    match pattern {
        MovementPattern::Squat => &[MuscleGroup::Quads, MuscleGroup::Glutes],
        MovementPattern::Hinge => &[MuscleGroup::Hamstrings, MuscleGroup::Glutes, MuscleGroup::Back],
        MovementPattern::Push => &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps],
        MovementPattern::Pull => &[MuscleGroup::Back, MuscleGroup::Biceps],
        MovementPattern::Carry => &[MuscleGroup::Back, MuscleGroup::Shoulders, MuscleGroup::Abs],
        MovementPattern::Rotate => &[MuscleGroup::Abs],
    }
}

/// Per-muscle multiplier from the high-priority goals.
///
/// Each goal is checked on its own; when several are high their factors
/// multiply. Muscles without an entry stay at 1.0.
pub fn goal_multipliers(goals: &GoalPriorities) -> BTreeMap<MuscleGroup, f64> {
    let mut factors: BTreeMap<MuscleGroup, f64> =
        MuscleGroup::ALL.iter().map(|m| (*m, 1.0)).collect();
    let mut scale = |muscle: MuscleGroup, factor: f64| {
        if let Some(f) = factors.get_mut(&muscle) {
            *f *= factor;
        }
    };

    if goals.is_high(TrainingGoal::Strength) {
        scale(MuscleGroup::Back, 1.2);
        scale(MuscleGroup::Quads, 1.2);
        scale(MuscleGroup::Glutes, 1.1);
    }
    if goals.is_high(TrainingGoal::Hypertrophy) {
        for muscle in MuscleGroup::ALL {
            scale(muscle, 1.15);
        }
    }
    if goals.is_high(TrainingGoal::Power) {
        for muscle in MuscleGroup::ALL {
            scale(muscle, 0.85);
        }
    }

    factors
}

fn scaled(value: u32, factor: f64) -> u32 {
    (f64::from(value) * factor).round() as u32
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeAllocation {
    pub muscles: Vec<MuscleGroupVolume>,
    /// Informational volume factors of the enabled methods
    pub bryant_volume_factors: BTreeMap<BryantMethod, f64>,
}

impl VolumeAllocation {
    pub fn muscle(&self, muscle: MuscleGroup) -> Option<&MuscleGroupVolume> {
        self.muscles.iter().find(|m| m.muscle == muscle)
    }

    pub fn total_volume(&self) -> u32 {
        total_volume(&self.muscles)
    }

    /// Replace `current` for the muscles in `overrides`, leaving landmarks alone
    pub fn with_overrides(mut self, overrides: &BTreeMap<MuscleGroup, u32>) -> Self {
        for entry in &mut self.muscles {
            if let Some(sets) = overrides.get(&entry.muscle) {
                debug!(muscle = %entry.muscle, derived = entry.current, sets, "Applying volume override");
                entry.current = *sets;
            }
        }
        self
    }
}

/// Weekly sets across all muscles, saturating at `u32::MAX` for overridden values
pub fn total_volume(muscles: &[MuscleGroupVolume]) -> u32 {
    muscles
        .iter()
        .fold(0u32, |total, m| total.saturating_add(m.current))
}

pub fn allocate_volume(
    selection: &ExerciseSelection,
    goals: &GoalPriorities,
    enabled: &[BryantMethod],
    sets_per_exercise: u32,
) -> VolumeAllocation {
    let mut muscles = landmark_table();

    for pattern in MovementPattern::ALL {
        let sets = selection.exercise_count(pattern).saturating_mul(sets_per_exercise);
        if sets == 0 {
            continue;
        }
        for target in muscles_for_pattern(pattern) {
            if let Some(entry) = muscles.iter_mut().find(|m| m.muscle == *target) {
                entry.current = entry.current.saturating_add(sets);
            }
        }
    }

    let factors = goal_multipliers(goals);
    for entry in &mut muscles {
        if let Some(factor) = factors.get(&entry.muscle) {
            entry.current = scaled(entry.current, *factor);
        }
    }

    if enabled.contains(&BryantMethod::ClusterSets) {
        for entry in muscles.iter_mut().filter(|m| CLUSTER_MUSCLES.contains(&m.muscle)) {
            entry.mrv = scaled(entry.mrv, CLUSTER_MRV_FACTOR);
        }
    }

    let bryant_volume_factors = enabled
        .iter()
        .filter_map(|m| m.volume_adjustment().map(|adj| (*m, adj.factor)))
        .collect();

    debug!(
        total = total_volume(&muscles),
        sets_per_exercise,
        "Allocated muscle group volume"
    );

    VolumeAllocation {
        muscles,
        bryant_volume_factors,
    }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn current(allocation: &VolumeAllocation, muscle: MuscleGroup) -> u32 {
        allocation.muscle(muscle).map(|m| m.current).unwrap_or(0)
    }

    #[test]
    fn test_pattern_credits_every_mapped_muscle_in_full() {
        // Arrange: two squat variations
        let selection = ExerciseSelection::default()
            .with_pattern(MovementPattern::Squat, ["back squat", "front squat"]);

        // Act
        let allocation = allocate_volume(&selection, &GoalPriorities::default(), &[], 3);

        // Assert: 2 x 3 sets to both quads and glutes, nothing split
        assert_eq!(current(&allocation, MuscleGroup::Quads), 6);
        assert_eq!(current(&allocation, MuscleGroup::Glutes), 6);
        assert_eq!(current(&allocation, MuscleGroup::Chest), 0);
        assert_eq!(allocation.total_volume(), 12);
    }

    #[test]
    fn test_full_body_selection() {
        let allocation =
            allocate_volume(&full_body_selection(), &GoalPriorities::default(), &[], 3);

        // back: hinge + pull + carry
        assert_eq!(current(&allocation, MuscleGroup::Back), 18);
        // glutes: squat + hinge
        assert_eq!(current(&allocation, MuscleGroup::Glutes), 12);
        // abs: carry + rotate
        assert_eq!(current(&allocation, MuscleGroup::Abs), 12);
        assert_eq!(current(&allocation, MuscleGroup::Calves), 0);
        assert_eq!(allocation.total_volume(), 84);
    }

    #[test]
    fn test_strength_goal_scales_compound_muscles() {
        let goals = assessment_with_high_goals(true, false, false, false).goal_priorities;
        let allocation = allocate_volume(&full_body_selection(), &goals, &[], 3);

        assert_eq!(current(&allocation, MuscleGroup::Back), 22); // 18 x 1.2 = 21.6
        assert_eq!(current(&allocation, MuscleGroup::Quads), 7); // 6 x 1.2 = 7.2
        assert_eq!(current(&allocation, MuscleGroup::Glutes), 13); // 12 x 1.1 = 13.2
        assert_eq!(current(&allocation, MuscleGroup::Chest), 6);
    }

    #[test]
    fn test_goal_multipliers_compose() {
        let goals = assessment_with_high_goals(true, true, false, false).goal_priorities;
        let factors = goal_multipliers(&goals);

        assert!((factors[&MuscleGroup::Back] - 1.2 * 1.15).abs() < 1e-9);
        assert!((factors[&MuscleGroup::Chest] - 1.15).abs() < 1e-9);

        let allocation = allocate_volume(&full_body_selection(), &goals, &[], 3);
        // 18 x 1.38 = 24.84
        assert_eq!(current(&allocation, MuscleGroup::Back), 25);
    }

    #[test]
    fn test_power_goal_reduces_all_volume() {
        let goals = assessment_with_high_goals(false, false, true, false).goal_priorities;
        let allocation = allocate_volume(&full_body_selection(), &goals, &[], 3);

        assert_eq!(current(&allocation, MuscleGroup::Back), 15); // 15.3
        assert_eq!(current(&allocation, MuscleGroup::Chest), 5); // 5.1
    }

    #[test]
    fn test_cluster_sets_raise_mrv_not_current() {
        let allocation = allocate_volume(
            &full_body_selection(),
            &GoalPriorities::default(),
            &[BryantMethod::ClusterSets],
            3,
        );

        let chest = allocation.muscle(MuscleGroup::Chest).unwrap();
        assert_eq!(chest.mrv, 23); // round(20 x 1.15)
        assert_eq!(chest.current, 6);
        assert_eq!(allocation.muscle(MuscleGroup::Back).unwrap().mrv, 29); // 28.75
        assert_eq!(allocation.muscle(MuscleGroup::Quads).unwrap().mrv, 23);
        assert_eq!(allocation.muscle(MuscleGroup::Shoulders).unwrap().mrv, 22);
        assert_eq!(allocation.bryant_volume_factors.get(&BryantMethod::ClusterSets), Some(&1.2));
    }

    #[test]
    fn test_missing_goals_mean_no_adjustment() {
        let factors = goal_multipliers(&GoalPriorities::default());
        assert!(factors.values().all(|f| (*f - 1.0).abs() < f64::EPSILON));
    }

    #[test]
    fn test_overrides_replace_current_only() {
        let mut overrides = BTreeMap::new();
        overrides.insert(MuscleGroup::Calves, 9);

        let allocation =
            allocate_volume(&full_body_selection(), &GoalPriorities::default(), &[], 3)
                .with_overrides(&overrides);

        let calves = allocation.muscle(MuscleGroup::Calves).unwrap();
        assert_eq!(calves.current, 9);
        assert_eq!(calves.mrv, 20);
    }

    #[test]
    fn test_total_volume_saturates_on_huge_overrides() {
        let overrides = BTreeMap::from([(MuscleGroup::Chest, u32::MAX), (MuscleGroup::Back, 1)]);

        let allocation =
            allocate_volume(&full_body_selection(), &GoalPriorities::default(), &[], 3)
                .with_overrides(&overrides);

        assert_eq!(allocation.total_volume(), u32::MAX);
    }

    #[test]
    fn test_sets_per_exercise_is_configurable() {
        let selection =
            ExerciseSelection::default().with_pattern(MovementPattern::Rotate, ["pallof press"]);
        let allocation = allocate_volume(&selection, &GoalPriorities::default(), &[], 4);
        assert_eq!(current(&allocation, MuscleGroup::Abs), 4);
    }
}
