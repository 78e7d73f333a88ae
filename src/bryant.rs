//! Bryant Method Registry
//!
//! Static catalogue of the four Bryant protocols:
//! - which phase focuses each method may attach to
//! - default duration and per-method parameters
//! - the advisory texts the validators surface
//!
//! Parameters are a closed enum, one record per method, so a configuration
//! can never carry another method's parameter shape.

use serde::{Deserialize, Serialize};

use crate::error::PlanningError;
use crate::models::{AssessmentResult, PhaseFocus, VolumeLevel};

// ---------------------------------------------------------------------------
/// Method identity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BryantMethod {
    PhaCircuits,
    ClusterSets,
    StrongmanEvents,
    TacticalApplications,
}

impl std::fmt::Display for BryantMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BryantMethod {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phaCircuits" => Ok(Self::PhaCircuits),
            "clusterSets" => Ok(Self::ClusterSets),
            "strongmanEvents" => Ok(Self::StrongmanEvents),
            "tacticalApplications" => Ok(Self::TacticalApplications),
            _ => Err(format!("Unknown Bryant method: {}", s)),
        }
    }
}

const PHA_FOCUSES: &[PhaseFocus] = &[PhaseFocus::MovementQuality, PhaseFocus::AerobicBase];

const CLUSTER_FOCUSES: &[PhaseFocus] = &[
    PhaseFocus::MuscleGrowth,
    PhaseFocus::MaximalStrength,
    PhaseFocus::PowerDevelopment,
    PhaseFocus::StrengthEndurance,
];

const EVENT_FOCUSES: &[PhaseFocus] = &[
    PhaseFocus::MaximalStrength,
    PhaseFocus::PowerDevelopment,
    PhaseFocus::TacticalPerformance,
];

impl BryantMethod {
    /// Registry order; also the order methods are listed in plans
    pub const ALL: [BryantMethod; 4] = [
        BryantMethod::PhaCircuits,
        BryantMethod::ClusterSets,
        BryantMethod::StrongmanEvents,
        BryantMethod::TacticalApplications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BryantMethod::PhaCircuits => "phaCircuits",
            BryantMethod::ClusterSets => "clusterSets",
            BryantMethod::StrongmanEvents => "strongmanEvents",
            BryantMethod::TacticalApplications => "tacticalApplications",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BryantMethod::PhaCircuits => "PHA circuits",
            BryantMethod::ClusterSets => "Cluster sets",
            BryantMethod::StrongmanEvents => "Strongman events",
            BryantMethod::TacticalApplications => "Tactical applications",
        }
    }

    /// Phase focuses this method may be attached to.
    ///
    /// The linear set is movement_quality for PHA, growth/strength/power for
    /// clusters and strength/power for events. The tactical-model focuses are
    /// added so the tactical layout (PHA in base building, clusters in
    /// strength endurance, events in tactical application) follows the same
    /// rule.
    pub fn allowed_focuses(&self) -> &'static [PhaseFocus] {
        match self {
            BryantMethod::PhaCircuits => PHA_FOCUSES,
            BryantMethod::ClusterSets => CLUSTER_FOCUSES,
            BryantMethod::StrongmanEvents | BryantMethod::TacticalApplications => EVENT_FOCUSES,
        }
    }

    pub fn allows(&self, focus: PhaseFocus) -> bool {
        self.allowed_focuses().contains(&focus)
    }

    pub fn default_weeks(&self) -> u32 {
        match self {
            BryantMethod::PhaCircuits => 4,
            BryantMethod::ClusterSets => 6,
            BryantMethod::StrongmanEvents => 4,
            BryantMethod::TacticalApplications => 8,
        }
    }

    pub fn default_parameters(&self) -> BryantParameters {
        match self {
            BryantMethod::PhaCircuits => BryantParameters::PhaCircuits {
                progression: CircuitProgression::Volume,
                circuits: Vec::new(),
            },
            BryantMethod::ClusterSets => BryantParameters::ClusterSets {
                intra_rest_seconds: 15,
                inter_rest_seconds: 180,
            },
            BryantMethod::StrongmanEvents => BryantParameters::StrongmanEvents {
                events: Vec::new(),
                progression: EventProgression::Time,
            },
            BryantMethod::TacticalApplications => BryantParameters::TacticalApplications {
                protocols: Vec::new(),
                requirements: Vec::new(),
            },
        }
    }

    /// Recommendation shown when the method made it into at least one phase
    pub fn integration_note(&self) -> Option<&'static str> {
        match self {
            BryantMethod::PhaCircuits => Some("PHA circuits will enhance cardiovascular adaptation"),
            BryantMethod::ClusterSets => Some("Cluster sets will allow higher training volumes"),
            _ => None,
        }
    }

    /// Recommendation appended by the volume validator
    pub fn volume_note(&self) -> Option<&'static str> {
        match self {
            BryantMethod::ClusterSets => Some("Cluster sets allow 15-20% higher volume tolerance"),
            BryantMethod::StrongmanEvents => Some("Account for strongman event fatigue in weekly planning"),
            BryantMethod::PhaCircuits | BryantMethod::TacticalApplications => None,
        }
    }

    pub fn volume_adjustment(&self) -> Option<VolumeAdjustment> {
        match self {
            BryantMethod::PhaCircuits => Some(VolumeAdjustment {
                contribution: VolumeLevel::Low,
                recovery_impact: RecoveryImpact::Minimal,
                factor: 0.8,
            }),
            BryantMethod::ClusterSets => Some(VolumeAdjustment {
                contribution: VolumeLevel::High,
                recovery_impact: RecoveryImpact::Moderate,
                factor: 1.2,
            }),
            BryantMethod::StrongmanEvents => Some(VolumeAdjustment {
                contribution: VolumeLevel::Moderate,
                recovery_impact: RecoveryImpact::High,
                factor: 1.1,
            }),
            BryantMethod::TacticalApplications => None,
        }
    }
}

// ---------------------------------------------------------------------------
/// Per-method parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircuitProgression {
    Volume,
    Intensity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventProgression {
    Time,
    Load,
    Distance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum BryantParameters {
    PhaCircuits {
        progression: CircuitProgression,
        circuits: Vec<String>,
    },
    ClusterSets {
        /// Rest between reps inside a cluster
        intra_rest_seconds: u32,
        /// Rest between clusters
        inter_rest_seconds: u32,
    },
    StrongmanEvents {
        events: Vec<String>,
        progression: EventProgression,
    },
    TacticalApplications {
        protocols: Vec<String>,
        requirements: Vec<String>,
    },
}

impl BryantParameters {
    pub fn method(&self) -> BryantMethod {
        match self {
            BryantParameters::PhaCircuits { .. } => BryantMethod::PhaCircuits,
            BryantParameters::ClusterSets { .. } => BryantMethod::ClusterSets,
            BryantParameters::StrongmanEvents { .. } => BryantMethod::StrongmanEvents,
            BryantParameters::TacticalApplications { .. } => BryantMethod::TacticalApplications,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryImpact {
    Minimal,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeAdjustment {
    pub contribution: VolumeLevel,
    pub recovery_impact: RecoveryImpact,
    pub factor: f64,
}

// ---------------------------------------------------------------------------
/// Method configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BryantMethodConfig {
    pub enabled: bool,
    pub weeks: u32,
    pub parameters: BryantParameters,
}

impl BryantMethodConfig {
    /// Registry defaults, disabled
    pub fn new(method: BryantMethod) -> Self {
        Self {
            enabled: false,
            weeks: method.default_weeks(),
            parameters: method.default_parameters(),
        }
    }

    pub fn enabled(method: BryantMethod) -> Self {
        Self {
            enabled: true,
            ..Self::new(method)
        }
    }

    pub fn method(&self) -> BryantMethod {
        self.parameters.method()
    }

    /// Enabled methods must run for 1..=total_weeks weeks
    pub fn validate(&self, total_weeks: u32) -> Result<(), PlanningError> {
        if self.enabled && (self.weeks == 0 || self.weeks > total_weeks) {
            return Err(PlanningError::InvalidMethodWeeks {
                method: self.method(),
                weeks: self.weeks,
                total_weeks,
            });
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse method config: {}", e))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// One disabled default configuration per method
pub fn default_method_configs() -> Vec<BryantMethodConfig> {
    BryantMethod::ALL.iter().map(|m| BryantMethodConfig::new(*m)).collect()
}

/// Default configurations with the assessment's preferred methods switched on
pub fn configs_from_assessment(assessment: &AssessmentResult) -> Vec<BryantMethodConfig> {
    let preferred = assessment.preferred_methods();
    default_method_configs()
        .into_iter()
        .map(|mut config| {
            config.enabled = preferred.contains(&config.method());
            config
        })
        .collect()
}

/// Reject a list that configures the same method twice, then check each entry
pub fn validate_configs(configs: &[BryantMethodConfig], total_weeks: u32) -> Result<(), PlanningError> {
    let mut seen = Vec::with_capacity(configs.len());
    for config in configs {
        let method = config.method();
        if seen.contains(&method) {
            return Err(PlanningError::DuplicateMethod(method));
        }
        seen.push(method);
        config.validate(total_weeks)?;
    }
    Ok(())
}

/// Enabled methods in registry order
pub fn enabled_methods(configs: &[BryantMethodConfig]) -> Vec<BryantMethod> {
    BryantMethod::ALL
        .iter()
        .copied()
        .filter(|m| configs.iter().any(|c| c.enabled && c.method() == *m))
        .collect()
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BryantReadiness;

    #[test]
    fn test_allowed_focus_sets() {
        assert!(BryantMethod::PhaCircuits.allows(PhaseFocus::MovementQuality));
        assert!(!BryantMethod::PhaCircuits.allows(PhaseFocus::MuscleGrowth));

        assert!(BryantMethod::ClusterSets.allows(PhaseFocus::MuscleGrowth));
        assert!(BryantMethod::ClusterSets.allows(PhaseFocus::PowerDevelopment));
        assert!(!BryantMethod::ClusterSets.allows(PhaseFocus::MovementQuality));

        for method in [BryantMethod::StrongmanEvents, BryantMethod::TacticalApplications] {
            assert!(method.allows(PhaseFocus::MaximalStrength));
            assert!(method.allows(PhaseFocus::PowerDevelopment));
            assert!(!method.allows(PhaseFocus::MuscleGrowth));
        }
    }

    #[test]
    fn test_parameters_determine_method() {
        for method in BryantMethod::ALL {
            assert_eq!(BryantMethodConfig::new(method).method(), method);
        }
    }

    #[test]
    fn test_validate_rejects_zero_and_overlong_weeks() {
        let mut config = BryantMethodConfig::enabled(BryantMethod::TacticalApplications);
        assert_eq!(config.weeks, 8);

        assert_eq!(
            config.validate(6),
            Err(PlanningError::InvalidMethodWeeks {
                method: BryantMethod::TacticalApplications,
                weeks: 8,
                total_weeks: 6,
            })
        );
        assert!(config.validate(8).is_ok());

        config.weeks = 0;
        assert!(config.validate(12).is_err());

        // Disabled methods are not checked
        config.enabled = false;
        assert!(config.validate(12).is_ok());
    }

    #[test]
    fn test_duplicate_method_rejected() {
        let configs = vec![
            BryantMethodConfig::enabled(BryantMethod::ClusterSets),
            BryantMethodConfig::new(BryantMethod::ClusterSets),
        ];
        assert_eq!(
            validate_configs(&configs, 12),
            Err(PlanningError::DuplicateMethod(BryantMethod::ClusterSets))
        );
    }

    #[test]
    fn test_configs_from_assessment_enable_preferred() {
        let assessment = AssessmentResult {
            bryant_readiness: Some(BryantReadiness {
                preferred_methods: vec![BryantMethod::StrongmanEvents, BryantMethod::PhaCircuits],
                equipment_access: vec![],
            }),
            ..Default::default()
        };

        let configs = configs_from_assessment(&assessment);

        assert_eq!(configs.len(), 4);
        assert_eq!(
            enabled_methods(&configs),
            vec![BryantMethod::PhaCircuits, BryantMethod::StrongmanEvents]
        );
    }

    #[test]
    fn test_method_config_json_roundtrip() {
        let config = BryantMethodConfig::enabled(BryantMethod::ClusterSets);
        let json = config.to_json().unwrap();
        assert!(json.contains("\"method\":\"clusterSets\""));
        assert!(json.contains("\"intraRestSeconds\":15"));

        let parsed = BryantMethodConfig::from_json(&json).unwrap();
        match parsed.parameters {
            BryantParameters::ClusterSets {
                intra_rest_seconds,
                inter_rest_seconds,
            } => {
                assert_eq!(intra_rest_seconds, 15);
                assert_eq!(inter_rest_seconds, 180);
            }
            _ => panic!("Wrong parameters"),
        }
    }
}
