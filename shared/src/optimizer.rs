//! Multi-objective seasonal plan optimizer
//!
//! Generates three plan archetypes for a farm, drops the ones that violate
//! the farmer's constraints, scores the rest against normalized objective
//! weights and explains the winner. The routine is deterministic and pure,
//! so it can run in the backend and in the browser alike.

use crate::models::{
    FarmState, ObjectivePreferences, OptimizationResult, PlanKind, PlanOption, ResourceConstraints,
    ScoredPlan,
};
use crate::types::RiskTolerance;

/// Plans using more water than this are dropped whenever a water cap is set
pub const WATER_HUNGRY_THRESHOLD: f64 = 0.7;

/// Plans riskier than this are dropped for low risk tolerance
pub const LOW_RISK_CEILING: f64 = 0.5;

/// Scenario label used when the caller gives none
pub const DEFAULT_SCENARIO: &str = "this upcoming season";

/// Outcome of weight normalization
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    /// Weights divided by their positive sum
    Normalized(ObjectivePreferences),
    /// Sum was not positive (or not finite); the default preset applies
    FellBackToDefault(ObjectivePreferences),
}

impl Normalization {
    pub fn weights(&self) -> ObjectivePreferences {
        match self {
            Normalization::Normalized(prefs) | Normalization::FellBackToDefault(prefs) => *prefs,
        }
    }

    pub fn fell_back(&self) -> bool {
        matches!(self, Normalization::FellBackToDefault(_))
    }
}

/// Scale weights so they sum to 1.0
///
/// Individual negative weights are accepted as long as the sum is positive.
pub fn normalize_preferences(prefs: &ObjectivePreferences) -> Normalization {
    let total = prefs.total();
    if !total.is_finite() || total <= 0.0 {
        return Normalization::FellBackToDefault(ObjectivePreferences::default());
    }
    Normalization::Normalized(ObjectivePreferences::new(
        prefs.weight_yield / total,
        prefs.weight_profit / total,
        prefs.weight_water_saving / total,
        prefs.weight_risk_reduction / total,
    ))
}

/// Build the three plan templates for a farm, in tie-break order
pub fn candidate_plans(farm: &FarmState) -> Vec<PlanOption> {
    let crop = farm.main_crop();
    PlanKind::ALL.iter().map(|kind| plan_template(*kind, crop)).collect()
}

fn plan_template(kind: PlanKind, crop: &str) -> PlanOption {
    match kind {
        PlanKind::Conservative => PlanOption {
            kind,
            name: "Conservative water- and risk-aware plan".to_string(),
            description: format!(
                "Maintain moderate fertilizer rates, prioritize soil moisture monitoring, \
                 and irrigate only when {} shows clear stress or soil moisture drops below \
                 a conservative threshold.",
                crop
            ),
            expected_yield_index: 0.7,
            expected_profit_index: 0.7,
            water_use_index: 0.3,
            risk_index: 0.2,
            notes: Some("Designed for low risk and water saving.".to_string()),
        },
        PlanKind::Balanced => PlanOption {
            kind,
            name: "Balanced yield-water-profit plan".to_string(),
            description: format!(
                "Use regionally recommended fertilizer rates and scheduled irrigation events \
                 for {}, skipping or reducing events after significant rainfall.",
                crop
            ),
            expected_yield_index: 0.85,
            expected_profit_index: 0.85,
            water_use_index: 0.5,
            risk_index: 0.4,
            notes: Some("Aims for good yield with reasonable input use.".to_string()),
        },
        PlanKind::Aggressive => PlanOption {
            kind,
            name: "Aggressive high-yield plan".to_string(),
            description: format!(
                "Push {} towards maximum yield with higher-end fertilizer rates and more \
                 frequent irrigation, focusing on avoiding any water or nutrient stress.",
                crop
            ),
            expected_yield_index: 0.95,
            expected_profit_index: 0.9,
            water_use_index: 0.8,
            risk_index: 0.7,
            notes: Some("Higher upside but also higher input use and risk.".to_string()),
        },
    }
}

/// Whether a plan survives the constraint filter
///
/// The water rule fires on the presence of a cap, whatever its value.
pub fn satisfies_constraints(plan: &PlanOption, constraints: &ResourceConstraints) -> bool {
    if constraints.max_water_mm.is_some() && plan.water_use_index > WATER_HUNGRY_THRESHOLD {
        return false;
    }
    if constraints.risk_tolerance == RiskTolerance::Low && plan.risk_index > LOW_RISK_CEILING {
        return false;
    }
    true
}

/// Keep the plans that satisfy the constraints, or all of them if none do
pub fn filter_plans(candidates: Vec<PlanOption>, constraints: &ResourceConstraints) -> Vec<PlanOption> {
    let filtered: Vec<PlanOption> = candidates
        .iter()
        .filter(|plan| satisfies_constraints(plan, constraints))
        .cloned()
        .collect();

    if filtered.is_empty() {
        candidates
    } else {
        filtered
    }
}

/// Weighted composite score; water use and risk count inverted
pub fn score_plan(plan: &PlanOption, weights: &ObjectivePreferences) -> f64 {
    weights.weight_yield * plan.expected_yield_index
        + weights.weight_profit * plan.expected_profit_index
        + weights.weight_water_saving * (1.0 - plan.water_use_index)
        + weights.weight_risk_reduction * (1.0 - plan.risk_index)
}

/// Generate, filter, score and rank plans, best first
///
/// The sort is stable, so equal scores keep the conservative, balanced,
/// aggressive generation order.
pub fn rank_plans(
    farm: &FarmState,
    prefs: &ObjectivePreferences,
    constraints: &ResourceConstraints,
) -> Vec<ScoredPlan> {
    rank_plans_by(farm, prefs, constraints, score_plan)
}

fn rank_plans_by<F>(
    farm: &FarmState,
    prefs: &ObjectivePreferences,
    constraints: &ResourceConstraints,
    scorer: F,
) -> Vec<ScoredPlan>
where
    F: Fn(&PlanOption, &ObjectivePreferences) -> f64,
{
    let weights = normalize_preferences(prefs).weights();
    let survivors = filter_plans(candidate_plans(farm), constraints);

    let mut ranked: Vec<ScoredPlan> = survivors
        .into_iter()
        .map(|plan| {
            let score = scorer(&plan, &weights);
            ScoredPlan { plan, score }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Pick the best and runner-up plan and explain the choice
pub fn optimize_plan(
    farm: &FarmState,
    prefs: &ObjectivePreferences,
    constraints: &ResourceConstraints,
    scenario_description: Option<&str>,
) -> OptimizationResult {
    let mut ranked = rank_plans(farm, prefs, constraints).into_iter().map(|s| s.plan);

    // filter_plans never returns an empty set, so there is always a first plan
    let best = ranked
        .next()
        .unwrap_or_else(|| plan_template(PlanKind::Conservative, farm.main_crop()));
    let alternative = ranked.next().unwrap_or_else(|| best.clone());

    let reasoning_summary = explain_choice(&best, &alternative, scenario_description);

    OptimizationResult {
        best_plan: best,
        alternative_plan: alternative,
        reasoning_summary,
    }
}

/// Scenario text for the rationale: trimmed input, or the default when blank
pub fn scenario_label(scenario_description: Option<&str>) -> &str {
    match scenario_description.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => DEFAULT_SCENARIO,
    }
}

fn explain_choice(best: &PlanOption, alternative: &PlanOption, scenario: Option<&str>) -> String {
    format!(
        "For {}, given the stated preferences and constraints, the '{}' scores highest on \
         the combined objectives. It balances expected yield (index {:.2}), profit ({:.2}), \
         water use (index {:.2}, lower is better), and risk (index {:.2}, lower is better). \
         The alternative plan '{}' is also reasonable and may be preferred if you value the \
         trade-offs it offers in terms of inputs and risk.",
        scenario_label(scenario),
        best.name,
        best.expected_yield_index,
        best.expected_profit_index,
        best.water_use_index,
        best.risk_index,
        alternative.name,
    )
}
