//! Simulated agronomy tools
//!
//! Each tool takes a JSON input, validates it and returns a short
//! human-readable text meant to be quoted to the language model. None of
//! them model anything numerically; they stand in for real weather, soil,
//! crop, yield, irrigation and vision services.

use std::collections::BTreeMap;

use chrono::{Duration, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::{AppError, AppResult};

pub const WEATHER_TOOL: &str = "Weather_API_Tool";
pub const SOIL_TOOL: &str = "Soil_Database_Tool";
pub const CROP_TOOL: &str = "Crop_Database_Tool";
pub const YIELD_TOOL: &str = "Yield_Prediction_Model";
pub const IRRIGATION_TOOL: &str = "Irrigation_Analysis_Tool";
pub const VISION_TOOL: &str = "Vision_Analysis_Tool";

/// Free-text inputs quoted back to the model are cut to this many characters
const QUOTED_TEXT_LIMIT: usize = 200;

/// A tool the assistant can consult
pub trait FarmTool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn run(&self, input: Value) -> AppResult<String>;
}

/// Name and description of a registered tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Tools keyed by name
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<&'static str, Box<dyn FarmTool>>,
}

impl ToolRegistry {
    /// A registry holding all six simulated tools
    pub fn with_default_tools() -> Self {
        let mut registry = Self::default();
        registry.register(WeatherTool);
        registry.register(SoilTool);
        registry.register(CropDatabaseTool);
        registry.register(YieldPredictionTool);
        registry.register(IrrigationTool);
        registry.register(VisionTool);
        registry
    }

    pub fn register<T>(&mut self, tool: T)
    where
        T: FarmTool + 'static,
    {
        self.tools.insert(tool.name(), Box::new(tool));
    }

    pub fn list(&self) -> Vec<ToolInfo> {
        self.tools
            .values()
            .map(|tool| ToolInfo {
                name: tool.name(),
                description: tool.description(),
            })
            .collect()
    }

    /// Run a tool by name
    pub fn invoke(&self, name: &str, input: Value) -> AppResult<String> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| AppError::NotFound(format!("Tool '{}'", name)))?;

        tracing::debug!(tool = name, "Invoking simulated tool");
        tool.run(input)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Deserialize and validate a tool input
fn parse_input<T>(input: Value) -> AppResult<T>
where
    T: DeserializeOwned + Validate,
{
    let parsed: T = serde_json::from_value(input)
        .map_err(|e| AppError::ValidationError(format!("Invalid tool input: {}", e)))?;
    parsed.validate()?;
    Ok(parsed)
}

/// Treat an empty or whitespace-only optional field as absent
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// ============================================================================
// Weather
// ============================================================================

fn default_days_ahead() -> u32 {
    7
}

#[derive(Debug, Deserialize, Validate)]
pub struct WeatherQuery {
    #[validate(length(min = 1))]
    pub location: String,
    #[serde(default = "default_days_ahead")]
    #[validate(range(min = 1, max = 30))]
    pub days_ahead: u32,
}

pub struct WeatherTool;

impl FarmTool for WeatherTool {
    fn name(&self) -> &'static str {
        WEATHER_TOOL
    }

    fn description(&self) -> &'static str {
        "Simulated weather outlook for a location over the next 1-30 days."
    }

    fn run(&self, input: Value) -> AppResult<String> {
        let query: WeatherQuery = parse_input(input)?;
        let today = Utc::now().date_naive();
        let end_date = today + Duration::days(i64::from(query.days_ahead));
        Ok(format!(
            "Simulated weather for {} from {} to {}. Expect moderate temperatures, \
             light rainfall on 2-3 days, and no extreme events.",
            query.location, today, end_date
        ))
    }
}

// ============================================================================
// Soil
// ============================================================================

fn default_depth_cm() -> u32 {
    30
}

#[derive(Debug, Deserialize, Validate)]
pub struct SoilQuery {
    #[validate(length(min = 1))]
    pub location: String,
    #[serde(default = "default_depth_cm")]
    #[validate(range(min = 5, max = 100))]
    pub depth_cm: u32,
}

pub struct SoilTool;

impl FarmTool for SoilTool {
    fn name(&self) -> &'static str {
        SOIL_TOOL
    }

    fn description(&self) -> &'static str {
        "Simulated regional soil properties to a given depth."
    }

    fn run(&self, input: Value) -> AppResult<String> {
        let query: SoilQuery = parse_input(input)?;
        Ok(format!(
            "Simulated soil data for {} to {} cm depth: loam texture, moderate organic \
             matter (~2.5%), good drainage, pH around 6.5.",
            query.location, query.depth_cm
        ))
    }
}

// ============================================================================
// Crop database
// ============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct CropQuery {
    #[validate(length(min = 1))]
    pub crop: String,
    pub region: Option<String>,
    pub growth_stage: Option<String>,
    pub info_type: Option<String>,
}

pub struct CropDatabaseTool;

impl FarmTool for CropDatabaseTool {
    fn name(&self) -> &'static str {
        CROP_TOOL
    }

    fn description(&self) -> &'static str {
        "Simulated agronomic and market guidance for a crop and region."
    }

    fn run(&self, input: Value) -> AppResult<String> {
        let query: CropQuery = parse_input(input)?;

        let mut base = format!("Simulated crop info for {}", query.crop);
        if let Some(region) = non_blank(query.region.as_deref()) {
            base.push_str(&format!(" in {}", region));
        }
        if let Some(stage) = non_blank(query.growth_stage.as_deref()) {
            base.push_str(&format!(" at the {} stage", stage));
        }

        let info = non_blank(query.info_type.as_deref()).map(str::to_lowercase);
        let wants = |topic: &str| info.as_deref().map_or(true, |i| i.contains(topic));

        let mut details = Vec::new();
        if wants("fertilizer") {
            details.push(
                "Typical N-P-K ratio for grain crops is around 120-60-40 kg/ha, adjusted for \
                 soil tests and yield goals.",
            );
        }
        if wants("planting") {
            details.push(
                "Plant during the recommended local window for frost-free conditions and \
                 adequate soil moisture.",
            );
        }
        if wants("market") {
            details.push(
                "Market prices vary; consider diversifying crops and checking local market \
                 bulletins weekly.",
            );
        }

        Ok(format!("{}. {}", base, details.join(" ")))
    }
}

// ============================================================================
// Yield prediction
// ============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct YieldPredictionInput {
    #[validate(length(min = 1))]
    pub crop: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub planting_date: Option<String>,
    pub management_notes: Option<String>,
    pub expected_weather_summary: Option<String>,
}

pub struct YieldPredictionTool;

impl FarmTool for YieldPredictionTool {
    fn name(&self) -> &'static str {
        YIELD_TOOL
    }

    fn description(&self) -> &'static str {
        "Simulated seasonal yield range with the assumptions behind it."
    }

    fn run(&self, input: Value) -> AppResult<String> {
        let query: YieldPredictionInput = parse_input(input)?;

        let mut parts = vec![
            format!(
                "Estimated yield range for {} in {} is approximately 55-75 bushels per acre.",
                query.crop, query.location
            ),
            "This estimate assumes average soil fertility and timely weed control.".to_string(),
            "Better-than-average rainfall and nutrient management could push yields to the upper end."
                .to_string(),
            "Drought, nutrient stress, or severe pests could reduce yields to the lower end or below."
                .to_string(),
        ];
        if let Some(date) = non_blank(query.planting_date.as_deref()) {
            parts.push(format!(
                "Planting date {} is assumed to be within the locally recommended window.",
                date
            ));
        }
        if let Some(notes) = non_blank(query.management_notes.as_deref()) {
            parts.push(format!(
                "Management notes considered: {}...",
                truncate(notes, QUOTED_TEXT_LIMIT)
            ));
        }
        if let Some(weather) = non_blank(query.expected_weather_summary.as_deref()) {
            parts.push(format!(
                "Expected weather summary considered: {}...",
                truncate(weather, QUOTED_TEXT_LIMIT)
            ));
        }

        Ok(parts.join(" "))
    }
}

// ============================================================================
// Irrigation
// ============================================================================

/// Rainfall over the last week above this suggests skipping irrigation
const HIGH_RAINFALL_MM: f64 = 30.0;
/// Rainfall below this suggests watching soil moisture closely
const LOW_RAINFALL_MM: f64 = 5.0;

#[derive(Debug, Deserialize, Validate)]
pub struct IrrigationAnalysisInput {
    #[validate(length(min = 1))]
    pub crop: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub soil_type: Option<String>,
    pub irrigation_method: Option<String>,
    #[serde(default)]
    pub schedule_description: String,
    #[validate(range(min = 0.0))]
    pub recent_rainfall_mm: Option<f64>,
}

pub struct IrrigationTool;

impl FarmTool for IrrigationTool {
    fn name(&self) -> &'static str {
        IRRIGATION_TOOL
    }

    fn description(&self) -> &'static str {
        "Simulated check of an irrigation schedule against recent rainfall."
    }

    fn run(&self, input: Value) -> AppResult<String> {
        let query: IrrigationAnalysisInput = parse_input(input)?;

        let mut assessment = format!(
            "For {} in {}, your current irrigation schedule ('{}') appears roughly \
             acceptable under average conditions.",
            query.crop, query.location, query.schedule_description
        );

        match query.recent_rainfall_mm {
            Some(rain) if rain > HIGH_RAINFALL_MM => assessment.push_str(
                " Recent rainfall is relatively high; consider skipping the next one or two \
                 irrigations to avoid over-watering and leaching.",
            ),
            Some(rain) if rain < LOW_RAINFALL_MM => assessment.push_str(
                " Recent rainfall is very low; monitor soil moisture closely and be prepared to \
                 increase irrigation frequency slightly if the top 5-10 cm are dry.",
            ),
            _ => {}
        }
        if let Some(soil) = non_blank(query.soil_type.as_deref()) {
            assessment.push_str(&format!(
                " Soil type '{}' has been noted when considering water-holding capacity.",
                soil
            ));
        }
        if let Some(method) = non_blank(query.irrigation_method.as_deref()) {
            assessment.push_str(&format!(
                " Irrigation method '{}' has been noted for efficiency assumptions.",
                method
            ));
        }

        Ok(assessment)
    }
}

// ============================================================================
// Vision
// ============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct VisionAnalysisInput {
    pub crop: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub image_reference: String,
}

pub struct VisionTool;

impl FarmTool for VisionTool {
    fn name(&self) -> &'static str {
        VISION_TOOL
    }

    fn description(&self) -> &'static str {
        "Simulated plant health diagnosis from an uploaded image reference."
    }

    fn run(&self, input: Value) -> AppResult<String> {
        let query: VisionAnalysisInput = parse_input(input)?;

        let crop = non_blank(query.crop.as_deref()).unwrap_or("the crop");
        let symptoms =
            non_blank(query.description.as_deref()).unwrap_or("visible leaf or stem symptoms");

        Ok(format!(
            "Based on the provided image reference '{}' and the description of {} on {}, \
             a common issue could be a foliar fungal disease or a nutrient deficiency. \
             This is a simulated diagnosis. \
             1) Remove and destroy the most heavily affected leaves to reduce spread where \
             practical. 2) Apply a locally approved fungicide or balanced fertilizer according \
             to label directions, and monitor new growth for improvement over the next 7-10 days.",
            query.image_reference, symptoms, crop
        ))
    }
}
