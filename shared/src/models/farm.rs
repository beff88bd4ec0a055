//! Farm digital twin models
//!
//! A [`FarmState`] is the per-session profile the assistant uses to
//! personalize advice. Updates arrive as partial profiles and are merged
//! field by field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label used in plan text when the farm has no declared crops
pub const DEFAULT_CROP_LABEL: &str = "the main crop";

/// The stored profile for one session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FarmState {
    pub session_id: String,
    pub name: Option<String>,
    pub location: Option<String>,
    /// Declared crops in priority order; the first one is the main crop
    #[serde(default)]
    pub primary_crops: Vec<String>,
    pub notes: Option<String>,
    /// Time of the last upsert, absent until the profile is first recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A partial farmer profile
///
/// Present fields replace the stored values, absent fields leave them alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct FarmProfileUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub primary_crops: Option<Vec<String>>,
    pub notes: Option<String>,
}

impl FarmState {
    /// The default state returned for a session that was never upserted
    pub fn empty(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            ..Default::default()
        }
    }

    /// Merge a partial profile into this state
    pub fn apply(&mut self, update: FarmProfileUpdate, now: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = Some(name);
        }
        if let Some(location) = update.location {
            self.location = Some(location);
        }
        if let Some(crops) = update.primary_crops {
            self.primary_crops = crops;
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        self.updated_at = Some(now);
    }

    /// The crop that plan descriptions refer to
    pub fn main_crop(&self) -> &str {
        self.primary_crops
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_CROP_LABEL)
    }

    /// Whether at least one upsert has been recorded
    pub fn is_recorded(&self) -> bool {
        self.updated_at.is_some()
    }
}

impl FarmProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.primary_crops.is_none()
            && self.notes.is_none()
    }
}

/// Render the set fields of a farm state as compact prompt text
pub fn summarize_farm_state(state: &FarmState) -> String {
    let mut parts = Vec::new();

    if let Some(name) = &state.name {
        parts.push(format!("Farm name: {}.", name));
    }
    if let Some(location) = &state.location {
        parts.push(format!("Location: {}.", location));
    }
    if !state.primary_crops.is_empty() {
        parts.push(format!("Primary crops: {}.", state.primary_crops.join(", ")));
    }
    if let Some(notes) = &state.notes {
        parts.push(format!("Notes: {}.", notes));
    }

    if parts.is_empty() {
        return "No farm profile details recorded yet.".to_string();
    }
    parts.join(" ")
}
