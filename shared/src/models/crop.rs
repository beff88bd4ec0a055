//! Static crop-suggestion table
//!
//! A small reference table of planting windows and input recommendations,
//! filtered by season and soil texture.

use serde::{Deserialize, Serialize};

use crate::types::Season;

/// Planting and input guidance for one crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropSuggestion {
    pub crop_name: String,
    pub planting_date: String,
    pub harvest_date: String,
    pub irrigation_schedule: String,
    pub fertilizer_recommendation: String,
    pub water_requirements_mm: f64,
    pub nitrogen_kg_per_ha: f64,
    pub phosphorus_kg_per_ha: f64,
    pub potassium_kg_per_ha: f64,
    pub expected_yield_per_ha: String,
    pub notes: String,
}

struct CropEntry {
    season: Season,
    crop_name: &'static str,
    planting_date: &'static str,
    harvest_date: &'static str,
    irrigation_schedule: &'static str,
    fertilizer_recommendation: &'static str,
    water_requirements_mm: f64,
    npk_kg_per_ha: (f64, f64, f64),
    expected_yield_per_ha: &'static str,
    notes: &'static str,
}

const CROP_TABLE: &[CropEntry] = &[
    CropEntry {
        season: Season::Spring,
        crop_name: "Corn",
        planting_date: "Late April to Early May",
        harvest_date: "Late September to Early October",
        irrigation_schedule: "25-30mm per week during growing season, increase to 40mm during tasseling",
        fertilizer_recommendation: "N-P-K: 120-60-40 kg/ha. Apply 60% at planting, 40% as side-dress at V6 stage",
        water_requirements_mm: 500.0,
        npk_kg_per_ha: (120.0, 60.0, 40.0),
        expected_yield_per_ha: "8-12 tons/ha",
        notes: "Requires well-drained soil. Monitor for corn borer and rootworm.",
    },
    CropEntry {
        season: Season::Spring,
        crop_name: "Soybeans",
        planting_date: "Early May to Mid-May",
        harvest_date: "Late September to Mid-October",
        irrigation_schedule: "20-25mm per week, critical during flowering and pod fill",
        fertilizer_recommendation: "N-P-K: 0-60-80 kg/ha. Soybeans fix nitrogen, focus on P and K",
        water_requirements_mm: 450.0,
        npk_kg_per_ha: (0.0, 60.0, 80.0),
        expected_yield_per_ha: "2.5-3.5 tons/ha",
        notes: "Good for crop rotation. Fixes nitrogen in soil.",
    },
    CropEntry {
        season: Season::Spring,
        crop_name: "Wheat",
        planting_date: "Early to Mid-April",
        harvest_date: "Late July to Early August",
        irrigation_schedule: "30-35mm per week during tillering and heading stages",
        fertilizer_recommendation: "N-P-K: 100-50-50 kg/ha. Split application: 50% at planting, 50% at tillering",
        water_requirements_mm: 400.0,
        npk_kg_per_ha: (100.0, 50.0, 50.0),
        expected_yield_per_ha: "4-6 tons/ha",
        notes: "Winter wheat planted in fall. Spring wheat planted in spring.",
    },
    CropEntry {
        season: Season::Summer,
        crop_name: "Tomatoes",
        planting_date: "Mid-May after last frost",
        harvest_date: "Mid-July to Early September",
        irrigation_schedule: "Drip irrigation: 20-25mm per week, increase during fruit set",
        fertilizer_recommendation: "N-P-K: 80-100-120 kg/ha. High potassium for fruit quality",
        water_requirements_mm: 600.0,
        npk_kg_per_ha: (80.0, 100.0, 120.0),
        expected_yield_per_ha: "60-80 tons/ha",
        notes: "Requires consistent moisture. Prone to blight - use resistant varieties.",
    },
    CropEntry {
        season: Season::Summer,
        crop_name: "Potatoes",
        planting_date: "Early to Mid-May",
        harvest_date: "Late August to Early October",
        irrigation_schedule: "30-40mm per week, critical during tuber formation",
        fertilizer_recommendation: "N-P-K: 100-80-150 kg/ha. High potassium for tuber quality",
        water_requirements_mm: 550.0,
        npk_kg_per_ha: (100.0, 80.0, 150.0),
        expected_yield_per_ha: "25-35 tons/ha",
        notes: "Requires loose, well-drained soil. Monitor for late blight.",
    },
];

/// Crops that do well on a soil texture; `None` for unknown textures
fn preferred_crops(soil_type: &str) -> Option<&'static [&'static str]> {
    match soil_type.trim().to_ascii_lowercase().as_str() {
        "loam" => Some(&["Corn", "Soybeans", "Wheat", "Tomatoes", "Potatoes"]),
        "sandy" => Some(&["Corn", "Soybeans", "Potatoes"]),
        "clay" => Some(&["Wheat", "Corn"]),
        "silt" => Some(&["Corn", "Soybeans", "Wheat", "Tomatoes"]),
        _ => None,
    }
}

impl From<&CropEntry> for CropSuggestion {
    fn from(entry: &CropEntry) -> Self {
        let (n, p, k) = entry.npk_kg_per_ha;
        CropSuggestion {
            crop_name: entry.crop_name.to_string(),
            planting_date: entry.planting_date.to_string(),
            harvest_date: entry.harvest_date.to_string(),
            irrigation_schedule: entry.irrigation_schedule.to_string(),
            fertilizer_recommendation: entry.fertilizer_recommendation.to_string(),
            water_requirements_mm: entry.water_requirements_mm,
            nitrogen_kg_per_ha: n,
            phosphorus_kg_per_ha: p,
            potassium_kg_per_ha: k,
            expected_yield_per_ha: entry.expected_yield_per_ha.to_string(),
            notes: entry.notes.to_string(),
        }
    }
}

/// Look up crop suggestions for a season and optional soil texture
///
/// `location` is accepted for future regional tables and currently has no
/// effect. A blank soil texture means no soil filter. An unknown season or
/// soil texture yields no suggestions.
pub fn crop_suggestions(
    _location: Option<&str>,
    soil_type: Option<&str>,
    season: &str,
) -> Vec<CropSuggestion> {
    let Some(season) = Season::from_label(season) else {
        return Vec::new();
    };

    let preferred = soil_type
        .map(str::trim)
        .filter(|soil| !soil.is_empty())
        .map(|soil| preferred_crops(soil).unwrap_or(&[]));

    CROP_TABLE
        .iter()
        .filter(|entry| season.includes(entry.season))
        .filter(|entry| preferred.map_or(true, |crops| crops.contains(&entry.crop_name)))
        .map(CropSuggestion::from)
        .collect()
}
