//! WebAssembly module for Prometheus Farm Advisory
//!
//! Provides client-side computation for:
//! - Plan ranking against the farmer's objectives and constraints
//! - Preference normalization preview
//! - Farm summaries
//! - Offline crop suggestion lookup
//!
//! Inputs and outputs are JSON strings in the same shape the backend uses.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PlanRequest {
    farm: FarmState,
    objectives: ObjectivePreferences,
    constraints: ResourceConstraints,
    scenario_description: Option<String>,
}

fn parse<T: for<'de> Deserialize<'de>>(json: &str, what: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid {} JSON: {}", what, e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rank plans for `{farm, objectives, constraints, scenario_description}`
/// and return the `OptimizationResult` as JSON
#[wasm_bindgen]
pub fn optimize_plan_json(request_json: &str) -> Result<String, JsValue> {
    let request: PlanRequest = parse(request_json, "plan request")?;
    let result = shared::optimize_plan(
        &request.farm,
        &request.objectives,
        &request.constraints,
        request.scenario_description.as_deref(),
    );
    to_json(&result)
}

/// Normalized weights for an objectives object
#[wasm_bindgen]
pub fn normalize_preferences_json(objectives_json: &str) -> Result<String, JsValue> {
    let prefs: ObjectivePreferences = parse(objectives_json, "objectives")?;
    to_json(&shared::normalize_preferences(&prefs).weights())
}

/// One-paragraph summary of a farm profile
#[wasm_bindgen]
pub fn summarize_farm_json(farm_json: &str) -> Result<String, JsValue> {
    let farm: FarmState = parse(farm_json, "farm")?;
    Ok(summarize_farm_state(&farm))
}

/// Crop suggestions for a season and optional soil texture
#[wasm_bindgen]
pub fn crop_suggestions_json(soil_type: Option<String>, season: &str) -> Result<String, JsValue> {
    to_json(&crop_suggestions(None, soil_type.as_deref(), season))
}
