//! Dashboard summary: headline numbers plus the most recent results with
//! display-tier confidence bands.

use schemars::JsonSchema;
use serde::Serialize;

use newslens_common::{confidence_band, Article, ConfidenceBand, Label};

use crate::metrics::{model_performance, system_metrics};

/// How many articles the recent-results strip shows.
const RECENT_RESULT_COUNT: usize = 3;

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct RecentResult {
    pub title: String,
    pub label: Label,
    pub confidence: f64,
    pub band: ConfidenceBand,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct DashboardSummary {
    pub total_analyzed: u64,
    pub real_detected: u64,
    pub fake_detected: u64,
    pub model_accuracy: f64,
    pub recent: Vec<RecentResult>,
}

/// Build the dashboard view over the given article set (the first articles
/// are treated as most recent, matching seed order).
pub fn dashboard_summary(articles: &[Article]) -> DashboardSummary {
    let metrics = system_metrics();
    let recent = articles
        .iter()
        .take(RECENT_RESULT_COUNT)
        .map(|a| RecentResult {
            title: a.title.clone(),
            label: a.classification,
            confidence: a.confidence,
            band: confidence_band(a.confidence),
        })
        .collect();

    DashboardSummary {
        total_analyzed: metrics.total_analyzed,
        real_detected: metrics.real_detected,
        fake_detected: metrics.fake_detected,
        model_accuracy: model_performance().accuracy,
        recent,
    }
}
