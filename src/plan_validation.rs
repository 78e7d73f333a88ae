//! Plan Validator
//!
//! Cross-checks a generated plan for completeness and goal alignment. Every
//! rule is evaluated independently; only structural problems clear
//! `is_valid`, everything else is advisory. Pure, so hosts can re-run it after
//! each edit.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bryant::{self, BryantMethod, BryantMethodConfig};
use crate::models::{
    AssessmentResult, PeriodizationModel, PeriodizationPlan, PhaseFocus, TrainingGoal,
    ValidationReport,
};

const MIN_PHASES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BryantCompatibility {
    Integrated,
    #[serde(rename = "none")]
    NotSelected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    #[serde(flatten)]
    pub report: ValidationReport,
    pub bryant_compatibility: BryantCompatibility,
}

pub fn validate_plan(
    plan: &PeriodizationPlan,
    methods: &[BryantMethodConfig],
    assessment: &AssessmentResult,
) -> PlanReport {
    let mut report = ValidationReport::default();

    if plan.phases.len() < MIN_PHASES {
        report.reject("Minimum 2 phases recommended for effective periodization");
    }

    if !plan.covers_program() {
        report.reject(format!(
            "Phase distribution covers {} of {} weeks",
            plan.assigned_weeks(),
            plan.total_weeks
        ));
    }

    let enabled = bryant::enabled_methods(methods);
    if !enabled.is_empty() {
        let ids: Vec<&str> = enabled.iter().map(BryantMethod::as_str).collect();
        report.recommend(format!("Bryant methods integrated: {}", ids.join(", ")));
    }

    for method in &enabled {
        let integrated = plan.phases.iter().any(|p| p.uses_method(*method));
        if !integrated {
            report.warn(format!(
                "{} selected but not integrated into any phase",
                method.label()
            ));
        } else if let Some(note) = method.integration_note() {
            report.recommend(note);
        }
    }

    let goals = &assessment.goal_priorities;
    if goals.is_high(TrainingGoal::Tactical) && plan.model != PeriodizationModel::Tactical {
        report.recommend("Consider tactical periodization model for tactical goals");
    }
    if goals.is_high(TrainingGoal::Power) && !plan.has_focus(PhaseFocus::PowerDevelopment) {
        report.warn("Power goal selected but no power development phase planned");
    }

    if let Some(screening) = &assessment.pha_screening {
        if !screening.cleared && enabled.contains(&BryantMethod::PhaCircuits) {
            report.warn("PHA circuits selected without health screening clearance");
        }
        if !screening.restrictions.is_empty() {
            report.recommend(format!(
                "Respect screening restrictions: {}",
                screening.restrictions.join(", ")
            ));
        }
    }

    debug!(
        is_valid = report.is_valid,
        warnings = report.warnings.len(),
        recommendations = report.recommendations.len(),
        "Validated periodization plan"
    );

    PlanReport {
        report,
        bryant_compatibility: if enabled.is_empty() {
            BryantCompatibility::NotSelected
        } else {
            BryantCompatibility::Integrated
        },
    }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PhaScreening, PhaseDistribution};
    use crate::phases::{build_plan, PhaseRequest};
    use crate::test_utils::*;

    fn plan_for(
        total_weeks: u32,
        model: PeriodizationModel,
        distribution: Option<PhaseDistribution>,
        methods: &[BryantMethodConfig],
    ) -> PeriodizationPlan {
        build_plan(&PhaseRequest {
            total_weeks,
            model,
            distribution,
            methods,
        })
        .expect("valid plan")
    }

    #[test]
    fn test_default_linear_plan_is_valid() {
        let plan = plan_for(12, PeriodizationModel::Linear, None, &[]);

        let result = validate_plan(&plan, &[], &AssessmentResult::default());

        assert!(result.report.is_valid);
        assert!(result.report.warnings.is_empty());
        assert!(result.report.recommendations.is_empty());
        assert_eq!(result.bryant_compatibility, BryantCompatibility::NotSelected);
    }

    #[test]
    fn test_single_phase_is_invalid() {
        let plan = plan_for(
            6,
            PeriodizationModel::Linear,
            Some(PhaseDistribution::new(0, 6, 0, 0)),
            &[],
        );

        let result = validate_plan(&plan, &[], &AssessmentResult::default());

        assert!(!result.report.is_valid);
        assert!(result.report.warnings[0].contains("Minimum 2 phases"));
    }

    #[test]
    fn test_under_allocated_distribution_is_invalid() {
        let plan = plan_for(
            16,
            PeriodizationModel::Linear,
            Some(PhaseDistribution::default()),
            &[],
        );

        let result = validate_plan(&plan, &[], &AssessmentResult::default());

        assert!(!result.report.is_valid);
        assert!(result
            .report
            .warnings
            .contains(&"Phase distribution covers 12 of 16 weeks".to_string()));
    }

    #[test]
    fn test_unintegrated_method_warns_but_stays_valid() {
        // No movement-quality phase, so PHA circuits have nowhere to go
        let methods = enabled_configs(&[BryantMethod::PhaCircuits]);
        let plan = plan_for(12, PeriodizationModel::Block, None, &methods);

        let result = validate_plan(&plan, &methods, &AssessmentResult::default());

        assert!(result.report.is_valid);
        assert_eq!(
            result.report.warnings,
            vec!["PHA circuits selected but not integrated into any phase"]
        );
        assert_eq!(
            result.report.recommendations,
            vec!["Bryant methods integrated: phaCircuits"]
        );
        assert_eq!(result.bryant_compatibility, BryantCompatibility::Integrated);
    }

    #[test]
    fn test_integrated_methods_add_notes() {
        let methods = enabled_configs(&[BryantMethod::PhaCircuits, BryantMethod::ClusterSets]);
        let plan = plan_for(12, PeriodizationModel::Linear, None, &methods);

        let result = validate_plan(&plan, &methods, &AssessmentResult::default());

        assert!(result.report.warnings.is_empty());
        assert_eq!(
            result.report.recommendations,
            vec![
                "Bryant methods integrated: phaCircuits, clusterSets",
                "PHA circuits will enhance cardiovascular adaptation",
                "Cluster sets will allow higher training volumes",
            ]
        );
    }

    #[test]
    fn test_tactical_goal_recommends_tactical_model() {
        let assessment = assessment_with_high_goals(false, false, false, true);
        let linear = plan_for(12, PeriodizationModel::Linear, None, &[]);
        let tactical = plan_for(12, PeriodizationModel::Tactical, None, &[]);

        let on_linear = validate_plan(&linear, &[], &assessment);
        let on_tactical = validate_plan(&tactical, &[], &assessment);

        assert!(on_linear
            .report
            .recommendations
            .contains(&"Consider tactical periodization model for tactical goals".to_string()));
        assert!(on_linear.report.is_valid);
        assert!(on_tactical.report.recommendations.is_empty());
    }

    #[test]
    fn test_power_goal_without_power_phase_warns() {
        let assessment = assessment_with_high_goals(false, false, true, false);
        let plan = plan_for(
            10,
            PeriodizationModel::Linear,
            Some(PhaseDistribution::new(2, 4, 4, 0)),
            &[],
        );

        let result = validate_plan(&plan, &[], &assessment);

        assert!(result.report.is_valid);
        assert_eq!(
            result.report.warnings,
            vec!["Power goal selected but no power development phase planned"]
        );
    }

    #[test]
    fn test_uncleared_screening_flags_pha() {
        let methods = enabled_configs(&[BryantMethod::PhaCircuits]);
        let plan = plan_for(12, PeriodizationModel::Linear, None, &methods);
        let assessment = AssessmentResult {
            pha_screening: Some(PhaScreening {
                cleared: false,
                restrictions: vec!["no overhead loading".to_string()],
            }),
            ..Default::default()
        };

        let result = validate_plan(&plan, &methods, &assessment);

        assert!(result
            .report
            .warnings
            .contains(&"PHA circuits selected without health screening clearance".to_string()));
        assert!(result
            .report
            .recommendations
            .contains(&"Respect screening restrictions: no overhead loading".to_string()));
    }

    #[test]
    fn test_rules_are_independent() {
        // Single phase + tactical goal + power goal all reported together
        let assessment = assessment_with_high_goals(false, false, true, true);
        let plan = plan_for(
            4,
            PeriodizationModel::Linear,
            Some(PhaseDistribution::new(0, 4, 0, 0)),
            &[],
        );

        let result = validate_plan(&plan, &[], &assessment);

        assert!(!result.report.is_valid);
        assert_eq!(result.report.warnings.len(), 2);
        assert_eq!(result.report.recommendations.len(), 1);
    }
}
