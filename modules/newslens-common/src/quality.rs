use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Confidence thresholds for display tiers
pub const CONFIDENCE_BAND_HIGH: f64 = 0.9;
pub const CONFIDENCE_BAND_MEDIUM: f64 = 0.7;

/// Display tier for a confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfidenceBand::High => write!(f, "high"),
            ConfidenceBand::Medium => write!(f, "medium"),
            ConfidenceBand::Low => write!(f, "low"),
        }
    }
}

/// Band a confidence value for display: High above 0.9, Medium above 0.7.
pub fn confidence_band(confidence: f64) -> ConfidenceBand {
    if confidence > CONFIDENCE_BAND_HIGH {
        ConfidenceBand::High
    } else if confidence > CONFIDENCE_BAND_MEDIUM {
        ConfidenceBand::Medium
    } else {
        ConfidenceBand::Low
    }
}
