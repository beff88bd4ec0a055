//! Seasonal planning models: objective weights, constraints and candidate plans

use serde::{Deserialize, Serialize};

use crate::types::RiskTolerance;

/// Farmer's relative weighting of the four planning objectives
///
/// Weights are expected in `[0, 1]` but are only normalized, never rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObjectivePreferences {
    pub weight_yield: f64,
    pub weight_profit: f64,
    pub weight_water_saving: f64,
    pub weight_risk_reduction: f64,
}

impl Default for ObjectivePreferences {
    fn default() -> Self {
        Self {
            weight_yield: 0.4,
            weight_profit: 0.3,
            weight_water_saving: 0.2,
            weight_risk_reduction: 0.1,
        }
    }
}

impl ObjectivePreferences {
    pub fn new(yield_: f64, profit: f64, water_saving: f64, risk_reduction: f64) -> Self {
        Self {
            weight_yield: yield_,
            weight_profit: profit,
            weight_water_saving: water_saving,
            weight_risk_reduction: risk_reduction,
        }
    }

    pub fn total(&self) -> f64 {
        self.weight_yield + self.weight_profit + self.weight_water_saving + self.weight_risk_reduction
    }

    pub fn as_array(&self) -> [f64; 4] {
        [
            self.weight_yield,
            self.weight_profit,
            self.weight_water_saving,
            self.weight_risk_reduction,
        ]
    }
}

/// Resource caps and risk appetite for the season
///
/// Only the presence of a water cap and the risk tolerance affect which
/// plans are considered; nitrogen and budget caps are carried for the
/// explanation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ResourceConstraints {
    pub max_water_mm: Option<f64>,
    pub max_nitrogen_kg_ha: Option<f64>,
    pub max_budget_usd: Option<f64>,
    pub risk_tolerance: RiskTolerance,
}

/// The three plan archetypes, in tie-break order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    Conservative,
    Balanced,
    Aggressive,
}

impl PlanKind {
    pub const ALL: [PlanKind; 3] = [PlanKind::Conservative, PlanKind::Balanced, PlanKind::Aggressive];
}

impl std::fmt::Display for PlanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanKind::Conservative => write!(f, "conservative"),
            PlanKind::Balanced => write!(f, "balanced"),
            PlanKind::Aggressive => write!(f, "aggressive"),
        }
    }
}

/// One candidate management plan with an index per objective
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanOption {
    pub kind: PlanKind,
    pub name: String,
    pub description: String,
    pub expected_yield_index: f64,
    pub expected_profit_index: f64,
    /// 1.0 = heavy water use, 0.0 = very little
    pub water_use_index: f64,
    /// 1.0 = high risk, 0.0 = very safe
    pub risk_index: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Best and runner-up plan with a plain-language rationale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptimizationResult {
    pub best_plan: PlanOption,
    pub alternative_plan: PlanOption,
    pub reasoning_summary: String,
}

/// A plan paired with its composite score
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredPlan {
    pub plan: PlanOption,
    pub score: f64,
}
