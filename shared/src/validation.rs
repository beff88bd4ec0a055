//! Lenient input checks for the Prometheus farm advisory platform
//!
//! Planning inputs are never rejected: out-of-range values are normalized
//! by the optimizer. These helpers only report what looks suspicious so the
//! caller can log it.

use crate::models::{ObjectivePreferences, ResourceConstraints};

// ============================================================================
// Objective Weights
// ============================================================================

/// Describe weights outside `[0, 1]` and a non-positive total
pub fn preference_warnings(prefs: &ObjectivePreferences) -> Vec<String> {
    let named = [
        ("weight_yield", prefs.weight_yield),
        ("weight_profit", prefs.weight_profit),
        ("weight_water_saving", prefs.weight_water_saving),
        ("weight_risk_reduction", prefs.weight_risk_reduction),
    ];

    let mut warnings: Vec<String> = named
        .iter()
        .filter(|(_, value)| !is_unit_interval(*value))
        .map(|(field, value)| format!("{} = {} is outside [0, 1]", field, value))
        .collect();

    let total = prefs.total();
    if !total.is_finite() || total <= 0.0 {
        warnings.push(format!(
            "weights sum to {}; the default preset will be used",
            total
        ));
    }
    warnings
}

fn is_unit_interval(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

// ============================================================================
// Resource Constraints
// ============================================================================

/// Describe negative or non-finite resource caps
pub fn constraint_warnings(constraints: &ResourceConstraints) -> Vec<String> {
    [
        ("max_water_mm", constraints.max_water_mm),
        ("max_nitrogen_kg_ha", constraints.max_nitrogen_kg_ha),
        ("max_budget_usd", constraints.max_budget_usd),
    ]
    .iter()
    .filter_map(|(field, value)| match value {
        Some(v) if !v.is_finite() || *v < 0.0 => {
            Some(format!("{} = {} is not a usable cap", field, v))
        }
        _ => None,
    })
    .collect()
}
