//! Farm digital twin HTTP handlers

use axum::{
    extract::{Path, State},
    Json,
};
use shared::{FarmProfileUpdate, FarmState};

use crate::AppState;

/// Get the farm state for a session (empty if never recorded)
/// GET /api/farms/:session_id
pub async fn get_farm_state(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<FarmState> {
    Json(state.farms.get(&session_id))
}

/// Merge a partial profile into the farm state for a session
/// PUT /api/farms/:session_id
pub async fn update_farm_state(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(update): Json<FarmProfileUpdate>,
) -> Json<FarmState> {
    Json(state.farms.upsert(&session_id, update))
}
