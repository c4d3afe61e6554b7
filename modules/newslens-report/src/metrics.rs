//! System-wide headline metrics and the model-comparison table. All values
//! are demo fixtures; nothing here is measured.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SystemMetrics {
    pub total_analyzed: u64,
    pub fake_detected: u64,
    pub real_detected: u64,
    pub average_confidence: f64,
    pub uptime: String,
    pub processing_speed: String,
}

/// Headline numbers the dashboard banner shows.
pub fn system_metrics() -> SystemMetrics {
    SystemMetrics {
        total_analyzed: 15_847,
        fake_detected: 3_924,
        real_detected: 11_923,
        average_confidence: 0.876,
        uptime: "99.9%".to_string(),
        processing_speed: "< 200ms".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ModelSpeed {
    Fast,
    Medium,
    Slow,
}

impl std::fmt::Display for ModelSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelSpeed::Fast => write!(f, "Fast"),
            ModelSpeed::Medium => write!(f, "Medium"),
            ModelSpeed::Slow => write!(f, "Slow"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ModelMetrics {
    pub name: String,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub speed: ModelSpeed,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ModelPerformance {
    /// Top-line figures mirror the best row (BERT).
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub models: Vec<ModelMetrics>,
}

/// The model-comparison fixture, best model first.
pub fn model_performance() -> ModelPerformance {
    ModelPerformance {
        accuracy: 0.943,
        precision: 0.912,
        recall: 0.897,
        f1_score: 0.904,
        models: vec![
            ModelMetrics {
                name: "BERT".to_string(),
                accuracy: 0.943,
                precision: 0.912,
                recall: 0.897,
                f1: 0.904,
                speed: ModelSpeed::Slow,
            },
            ModelMetrics {
                name: "LSTM".to_string(),
                accuracy: 0.891,
                precision: 0.854,
                recall: 0.878,
                f1: 0.866,
                speed: ModelSpeed::Medium,
            },
            ModelMetrics {
                name: "Random Forest".to_string(),
                accuracy: 0.876,
                precision: 0.842,
                recall: 0.863,
                f1: 0.852,
                speed: ModelSpeed::Fast,
            },
            ModelMetrics {
                name: "SVM".to_string(),
                accuracy: 0.823,
                precision: 0.798,
                recall: 0.834,
                f1: 0.816,
                speed: ModelSpeed::Fast,
            },
        ],
    }
}
