//! HTTP handler for multi-objective decision support

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use shared::{
    constraint_warnings, optimize_plan, preference_warnings, summarize_farm_state,
    FarmProfileUpdate, ObjectivePreferences, PlanOption, ResourceConstraints,
};

use crate::error::{AppError, AppResult};
use crate::services::prompts::decision_explainer_prompt;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DecisionSupportRequest {
    pub session_id: String,
    pub scenario_description: Option<String>,
    pub farmer_profile: Option<FarmProfileUpdate>,
    #[serde(default)]
    pub objectives: ObjectivePreferences,
    #[serde(default)]
    pub constraints: ResourceConstraints,
}

#[derive(Debug, Serialize)]
pub struct DecisionSupportResponse {
    pub best_plan: PlanOption,
    pub alternative_plan: PlanOption,
    pub reasoning_summary: String,
    pub llm_explanation: String,
}

/// Rank candidate plans for the farm and explain the recommendation
/// POST /api/decision-support
pub async fn decision_support(
    State(state): State<AppState>,
    Json(request): Json<DecisionSupportRequest>,
) -> AppResult<Json<DecisionSupportResponse>> {
    let session_id = request.session_id;
    let farm_state = state.farms.sync_profile(&session_id, request.farmer_profile);

    for warning in preference_warnings(&request.objectives)
        .into_iter()
        .chain(constraint_warnings(&request.constraints))
    {
        tracing::warn!(session_id = %session_id, "Lenient planning input: {}", warning);
    }

    let result = optimize_plan(
        &farm_state,
        &request.objectives,
        &request.constraints,
        request.scenario_description.as_deref(),
    );
    tracing::info!(
        session_id = %session_id,
        best = %result.best_plan.kind,
        alternative = %result.alternative_plan.kind,
        risk_tolerance = %request.constraints.risk_tolerance,
        "Plan optimized"
    );

    let farm_summary = summarize_farm_state(&farm_state);
    let prompt = decision_explainer_prompt(&farm_summary, &result);

    let llm_explanation = match state.assistant.respond(&session_id, prompt).await {
        Ok(text) => text,
        Err(AppError::LanguageModelUnavailable) => {
            tracing::warn!(session_id = %session_id, "No language model configured; returning optimizer reasoning");
            result.reasoning_summary.clone()
        }
        Err(e) => return Err(e),
    };

    Ok(Json(DecisionSupportResponse {
        best_plan: result.best_plan,
        alternative_plan: result.alternative_plan,
        reasoning_summary: result.reasoning_summary,
        llm_explanation,
    }))
}
