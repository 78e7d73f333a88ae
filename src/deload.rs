//! Deload Strategy Selector
//!
//! Stateless lookup of when a deload is warranted and what it prescribes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeloadTrigger {
    PerformanceDecline,
    Fatigue,
    TimeBased,
    Planned,
}

impl DeloadTrigger {
    pub const ALL: [DeloadTrigger; 4] = [
        DeloadTrigger::PerformanceDecline,
        DeloadTrigger::Fatigue,
        DeloadTrigger::TimeBased,
        DeloadTrigger::Planned,
    ];
}

impl std::fmt::Display for DeloadTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PerformanceDecline => write!(f, "performanceDecline"),
            Self::Fatigue => write!(f, "fatigue"),
            Self::TimeBased => write!(f, "timeBased"),
            Self::Planned => write!(f, "planned"),
        }
    }
}

impl std::str::FromStr for DeloadTrigger {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "performanceDecline" => Ok(Self::PerformanceDecline),
            "fatigue" => Ok(Self::Fatigue),
            "timeBased" => Ok(Self::TimeBased),
            "planned" => Ok(Self::Planned),
            _ => Err(format!("Unknown deload trigger: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reduction {
    pub enabled: bool,
    /// Percent taken off the normal load
    pub percent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteRest {
    pub enabled: bool,
    pub days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeloadTypes {
    pub volume_reduction: Reduction,
    pub intensity_reduction: Reduction,
    pub complete_rest: CompleteRest,
}

/// What a deload week looks like. `None` fields are not applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeloadPrescription {
    pub volume_reduction_percent: Option<u8>,
    pub intensity_reduction_percent: Option<u8>,
    pub rest_days: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeloadStrategy {
    pub triggers: BTreeSet<DeloadTrigger>,
    pub types: DeloadTypes,
    /// Time-based deload every N weeks
    pub frequency_weeks: u32,
}

impl Default for DeloadStrategy {
    fn default() -> Self {
        Self::standard()
    }
}

impl DeloadStrategy {
    /// All triggers armed, 40% volume cut every fourth week
    pub fn standard() -> Self {
        Self {
            triggers: DeloadTrigger::ALL.into_iter().collect(),
            types: DeloadTypes {
                volume_reduction: Reduction {
                    enabled: true,
                    percent: 40,
                },
                intensity_reduction: Reduction {
                    enabled: false,
                    percent: 20,
                },
                complete_rest: CompleteRest {
                    enabled: false,
                    days: 3,
                },
            },
            frequency_weeks: 4,
        }
    }

    pub fn is_armed(&self, trigger: DeloadTrigger) -> bool {
        self.triggers.contains(&trigger)
    }

    /// Enabled reductions for `trigger`, or `None` if the trigger is not armed
    pub fn prescription_for(&self, trigger: DeloadTrigger) -> Option<DeloadPrescription> {
        if !self.is_armed(trigger) {
            return None;
        }
        let types = &self.types;
        Some(DeloadPrescription {
            volume_reduction_percent: types
                .volume_reduction
                .enabled
                .then_some(types.volume_reduction.percent),
            intensity_reduction_percent: types
                .intensity_reduction
                .enabled
                .then_some(types.intensity_reduction.percent),
            rest_days: types.complete_rest.enabled.then_some(types.complete_rest.days),
        })
    }

    /// Program week (1-based) falls on the time-based cadence
    pub fn is_scheduled_deload(&self, week: u32) -> bool {
        self.is_armed(DeloadTrigger::TimeBased)
            && self.frequency_weeks > 0
            && week > 0
            && week % self.frequency_weeks == 0
    }

    /// Fraction of normal volume kept in a deload week
    pub fn volume_factor(&self) -> f64 {
        if !self.types.volume_reduction.enabled {
            return 1.0;
        }
        1.0 - f64::from(self.types.volume_reduction.percent.min(100)) / 100.0
    }
}

/// Strategy applied to every generated program
pub fn select_strategy() -> DeloadStrategy {
    DeloadStrategy::standard()
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
