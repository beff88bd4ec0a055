//! Crop suggestion HTTP handlers

use axum::Json;
use serde::{Deserialize, Serialize};
use shared::{crop_suggestions as lookup_crop_suggestions, CropSuggestion};

fn default_season() -> String {
    "spring".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CropSuggestionsRequest {
    pub location: Option<String>,
    pub soil_type: Option<String>,
    #[serde(default = "default_season")]
    pub season: String,
}

#[derive(Debug, Serialize)]
pub struct CropSuggestionsResponse {
    pub suggestions: Vec<CropSuggestion>,
}

/// Planting windows and input guidance for a season and soil type
/// POST /api/crop-suggestions
pub async fn crop_suggestions(Json(request): Json<CropSuggestionsRequest>) -> Json<CropSuggestionsResponse> {
    let suggestions = lookup_crop_suggestions(
        request.location.as_deref(),
        request.soil_type.as_deref(),
        &request.season,
    );
    Json(CropSuggestionsResponse { suggestions })
}
