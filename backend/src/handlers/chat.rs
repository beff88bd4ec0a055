//! HTTP handlers for the conversational endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use shared::{summarize_farm_state, FarmProfileUpdate};

use crate::error::AppResult;
use crate::services::prompts::{chat_prompt, image_diagnosis_prompt};
use crate::services::tools::VISION_TOOL;
use crate::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
    pub farmer_profile: Option<FarmProfileUpdate>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageDiagnosisRequest {
    pub session_id: String,
    /// Opaque reference to an uploaded image (filename, URL or ID)
    pub image_reference: String,
    pub crop: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImageDiagnosisResponse {
    pub diagnosis: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Answer a farmer's question with the farm's digital twin as context
/// POST /api/chat
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let farm_state = state
        .farms
        .sync_profile(&request.session_id, request.farmer_profile.clone());
    let farm_summary = summarize_farm_state(&farm_state);

    let prompt = chat_prompt(&farm_summary, request.farmer_profile.as_ref(), &request.message);
    let reply = state.assistant.respond(&request.session_id, prompt).await?;

    Ok(Json(ChatResponse { reply }))
}

/// Diagnose a plant health issue from an image reference
/// POST /api/image-diagnosis
pub async fn image_diagnosis(
    State(state): State<AppState>,
    Json(request): Json<ImageDiagnosisRequest>,
) -> AppResult<Json<ImageDiagnosisResponse>> {
    let findings = state.tools.invoke(
        VISION_TOOL,
        json!({
            "crop": request.crop,
            "description": request.description,
            "image_reference": request.image_reference,
        }),
    )?;

    let prompt = image_diagnosis_prompt(
        &request.image_reference,
        request.crop.as_deref(),
        request.description.as_deref(),
        &findings,
    );
    let diagnosis = state.assistant.respond(&request.session_id, prompt).await?;

    Ok(Json(ImageDiagnosisResponse { diagnosis }))
}
