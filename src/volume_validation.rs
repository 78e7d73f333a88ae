//! Volume Classifier & Validator
//!
//! Classifies each muscle's weekly sets against its MEV/MAV/MRV landmarks
//! and scores the distribution. A muscle below MEV or above MRV blocks the
//! program; total-volume findings are advisory.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bryant::BryantMethod;
use crate::landmarks::LandmarkTotals;
use crate::models::{MuscleGroup, MuscleGroupVolume, RecoveryProtocols, ValidationReport, VolumeStatus};
use crate::volume::total_volume;

const OPTIMAL_POINTS: u32 = 20;
const TOLERATED_POINTS: u32 = 10;
const MAX_BALANCE: u32 = 100;
/// Uncapped score at which the distribution earns a positive note
const BALANCED_THRESHOLD: u32 = 160;

const MIN_WEEKLY_VOLUME: u32 = 50;
const MAX_WEEKLY_VOLUME: u32 = 150;

/// Place `current` on the landmark scale. Boundaries are inclusive on the
/// lower status: `mev` and `mav` are optimal, `mrv` is high.
pub fn classify(current: u32, mev: u32, mav: u32, mrv: u32) -> VolumeStatus {
    if current < mev {
        VolumeStatus::Under
    } else if current <= mav {
        VolumeStatus::Optimal
    } else if current <= mrv {
        VolumeStatus::High
    } else {
        VolumeStatus::Excessive
    }
}

/// Balance score contribution of one muscle
pub fn balance_points(status: VolumeStatus) -> u32 {
    match status {
        VolumeStatus::Under => 0,
        VolumeStatus::Optimal => OPTIMAL_POINTS,
        VolumeStatus::High | VolumeStatus::Excessive => TOLERATED_POINTS,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleDistribution {
    pub muscle: MuscleGroup,
    pub current: u32,
    /// Share of the weekly total, one decimal
    pub percentage: f64,
    pub status: VolumeStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeReport {
    #[serde(flatten)]
    pub report: ValidationReport,
    /// 0-100
    pub volume_balance: u32,
    pub weekly_volume: u32,
    pub distribution: Vec<MuscleDistribution>,
    pub landmark_totals: LandmarkTotals,
    pub recovery_adequacy: u32,
}

impl VolumeReport {
    pub fn status_of(&self, muscle: MuscleGroup) -> Option<VolumeStatus> {
        self.distribution
            .iter()
            .find(|d| d.muscle == muscle)
            .map(|d| d.status)
    }
}

fn percentage_of(current: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(current) / f64::from(total) * 1000.0).round() / 10.0
}

pub fn validate_volume(
    muscles: &[MuscleGroupVolume],
    enabled: &[BryantMethod],
    recovery: &RecoveryProtocols,
) -> VolumeReport {
    let mut report = ValidationReport::default();
    let weekly_volume = total_volume(muscles);
    let mut raw_balance = 0;
    let mut distribution = Vec::with_capacity(muscles.len());

    for m in muscles {
        let status = m.status();
        raw_balance += balance_points(status);

        match status {
            VolumeStatus::Under => {
                debug!(muscle = %m.muscle, current = m.current, mev = m.mev, "Muscle below MEV");
                report.reject(format!(
                    "{} below MEV ({}/{} sets)",
                    m.muscle.label(),
                    m.current,
                    m.mev
                ));
            }
            VolumeStatus::Excessive => {
                debug!(muscle = %m.muscle, current = m.current, mrv = m.mrv, "Muscle above MRV");
                report.reject(format!(
                    "{} above MRV ({}/{} sets)",
                    m.muscle.label(),
                    m.current,
                    m.mrv
                ));
            }
            VolumeStatus::Optimal | VolumeStatus::High => {}
        }

        distribution.push(MuscleDistribution {
            muscle: m.muscle,
            current: m.current,
            percentage: percentage_of(m.current, weekly_volume),
            status,
        });
    }

    if weekly_volume < MIN_WEEKLY_VOLUME {
        report.warn("Total weekly volume may be insufficient for adaptation");
    } else if weekly_volume > MAX_WEEKLY_VOLUME {
        report.warn("Total weekly volume may exceed recovery capacity");
    }

    if raw_balance >= BALANCED_THRESHOLD {
        report.recommend("Volume distribution optimal for RP progression");
    }

    for method in enabled {
        if let Some(note) = method.volume_note() {
            report.recommend(note);
        }
    }

    let volume_balance = raw_balance.min(MAX_BALANCE);
    debug!(
        weekly_volume,
        volume_balance,
        is_valid = report.is_valid,
        "Validated muscle group volume"
    );

    VolumeReport {
        report,
        volume_balance,
        weekly_volume,
        distribution,
        landmark_totals: LandmarkTotals::from_table(muscles),
        recovery_adequacy: recovery.adequacy_score(),
    }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
