//! HTTP handlers for the simulated agronomy tools

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::error::AppResult;
use crate::services::tools::ToolInfo;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ToolListResponse {
    pub tools: Vec<ToolInfo>,
}

#[derive(Debug, Serialize)]
pub struct ToolOutputResponse {
    pub tool: String,
    pub output: String,
}

/// List available tools
/// GET /api/tools
pub async fn list_tools(State(state): State<AppState>) -> Json<ToolListResponse> {
    Json(ToolListResponse {
        tools: state.tools.list(),
    })
}

/// Run a tool with a JSON input
/// POST /api/tools/:tool_name
pub async fn invoke_tool(
    State(state): State<AppState>,
    Path(tool_name): Path<String>,
    Json(input): Json<Value>,
) -> AppResult<Json<ToolOutputResponse>> {
    let output = state.tools.invoke(&tool_name, input)?;
    Ok(Json(ToolOutputResponse {
        tool: tool_name,
        output,
    }))
}
