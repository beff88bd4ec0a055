//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// Sessions with a recorded farm profile
    pub sessions: usize,
    pub language_model: String,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let language_model = if state.assistant.is_configured() {
        "configured"
    } else {
        "not_configured"
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        service: "prometheus".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sessions: state.farms.len(),
        language_model: language_model.to_string(),
    })
}
