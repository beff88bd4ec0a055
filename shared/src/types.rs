//! Common types used across the platform

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How much downside a farmer is willing to accept this season
///
/// Deserialization is lenient: labels are trimmed and matched without regard
/// to case, and anything unrecognized becomes [`RiskTolerance::Medium`].
/// Use [`FromStr`] when an unknown label should be an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskTolerance {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Low => "low",
            RiskTolerance::Medium => "medium",
            RiskTolerance::High => "high",
        }
    }

    /// Parse a label, falling back to the default for unknown input
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned by strict parsing of a risk tolerance label
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized risk tolerance '{0}' (expected low, medium or high)")]
pub struct ParseRiskToleranceError(pub String);

impl FromStr for RiskTolerance {
    type Err = ParseRiskToleranceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskTolerance::Low),
            "medium" => Ok(RiskTolerance::Medium),
            "high" => Ok(RiskTolerance::High),
            _ => Err(ParseRiskToleranceError(s.to_string())),
        }
    }
}

impl From<String> for RiskTolerance {
    fn from(label: String) -> Self {
        RiskTolerance::from_label(&label)
    }
}

/// Growing season used by the crop-suggestion table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    /// Every season in the table
    All,
}

impl Season {
    /// Case-insensitive lookup; `None` for seasons the table does not cover
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "all" => Some(Season::All),
            _ => None,
        }
    }

    pub fn includes(&self, other: Season) -> bool {
        *self == Season::All || *self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_tolerance_strict_parse() {
        assert_eq!("low".parse::<RiskTolerance>(), Ok(RiskTolerance::Low));
        assert_eq!(" HIGH ".parse::<RiskTolerance>(), Ok(RiskTolerance::High));
        assert!("reckless".parse::<RiskTolerance>().is_err());
    }

    #[test]
    fn test_risk_tolerance_lenient_deserialize() {
        let low: RiskTolerance = serde_json::from_str("\"Low\"").unwrap();
        assert_eq!(low, RiskTolerance::Low);

        let unknown: RiskTolerance = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(unknown, RiskTolerance::Medium);
    }

    #[test]
    fn test_risk_tolerance_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RiskTolerance::High).unwrap(), "\"high\"");
    }

    #[test]
    fn test_season_lookup() {
        assert_eq!(Season::from_label("Summer"), Some(Season::Summer));
        assert_eq!(Season::from_label("winter"), None);
        assert!(Season::All.includes(Season::Spring));
        assert!(!Season::Spring.includes(Season::Summer));
    }
}
