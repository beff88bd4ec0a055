//! Route definitions for the Prometheus farm advisory backend

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Conversational endpoints
        .route("/chat", post(handlers::chat))
        .route("/image-diagnosis", post(handlers::image_diagnosis))
        // Planning
        .route("/decision-support", post(handlers::decision_support))
        .route("/crop-suggestions", post(handlers::crop_suggestions))
        // Farm digital twin
        .nest("/farms", farm_routes())
        // Simulated tools
        .route("/tools", get(handlers::list_tools))
        .route("/tools/:tool_name", post(handlers::invoke_tool))
}

/// Farm state routes
fn farm_routes() -> Router<AppState> {
    Router::new().route(
        "/:session_id",
        get(handlers::get_farm_state).put(handlers::update_farm_state),
    )
}

