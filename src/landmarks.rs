//! Volume landmark reference data (weekly sets per muscle group)

use serde::{Deserialize, Serialize};

use crate::models::{MuscleGroup, MuscleGroupVolume, Priority};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeLandmarks {
    /// Minimum effective volume
    pub mev: u32,
    /// Maximum adaptive volume
    pub mav: u32,
    /// Maximum recoverable volume
    pub mrv: u32,
    pub priority: Priority,
}

const fn landmark(mev: u32, mav: u32, mrv: u32, priority: Priority) -> VolumeLandmarks {
    VolumeLandmarks {
        mev,
        mav,
        mrv,
        priority,
    }
}

pub const fn landmarks_for(muscle: MuscleGroup) -> VolumeLandmarks {
    match muscle {
        MuscleGroup::Chest => landmark(8, 14, 20, Priority::Medium),
        MuscleGroup::Back => landmark(10, 16, 25, Priority::High),
        MuscleGroup::Shoulders => landmark(8, 14, 22, Priority::Medium),
        MuscleGroup::Biceps => landmark(6, 10, 16, Priority::Low),
        MuscleGroup::Triceps => landmark(6, 10, 18, Priority::Low),
        MuscleGroup::Quads => landmark(8, 12, 20, Priority::High),
        MuscleGroup::Hamstrings => landmark(6, 10, 16, Priority::Medium),
        MuscleGroup::Glutes => landmark(6, 8, 12, Priority::Medium),
        MuscleGroup::Calves => landmark(6, 12, 20, Priority::Low),
        MuscleGroup::Abs => landmark(0, 6, 12, Priority::Medium),
    }
}

/// Fresh table with zero current volume, one row per muscle group
pub fn landmark_table() -> Vec<MuscleGroupVolume> {
    MuscleGroup::ALL
        .iter()
        .map(|&muscle| {
            let l = landmarks_for(muscle);
            MuscleGroupVolume {
                muscle,
                mev: l.mev,
                mav: l.mav,
                mrv: l.mrv,
                current: 0,
                priority: l.priority,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkTotals {
    pub total_mev: u32,
    pub total_mav: u32,
    pub total_mrv: u32,
}

impl LandmarkTotals {
    pub fn from_table(muscles: &[MuscleGroupVolume]) -> Self {
        muscles.iter().fold(Self::default(), |acc, m| Self {
            total_mev: acc.total_mev + m.mev,
            total_mav: acc.total_mav + m.mav,
            total_mrv: acc.total_mrv + m.mrv,
        })
    }
}
