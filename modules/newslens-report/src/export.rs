//! Point-in-time export of the aggregate datasets as a JSON document. The
//! only persistence in the system.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use newslens_common::NewsLensError;

use crate::analytics::{analytics, Analytics};
use crate::metrics::{model_performance, system_metrics, ModelPerformance, SystemMetrics};

#[derive(Debug, Clone, Serialize)]
pub struct ExportSnapshot {
    pub export_date: DateTime<Utc>,
    pub system_metrics: SystemMetrics,
    pub analytics: Analytics,
    pub model_performance: ModelPerformance,
}

impl ExportSnapshot {
    /// Capture the current aggregate state, stamped with `now`.
    pub fn capture(now: DateTime<Utc>) -> Self {
        Self {
            export_date: now,
            system_metrics: system_metrics(),
            analytics: analytics(),
            model_performance: model_performance(),
        }
    }
}

/// File name for a snapshot taken on `date`, e.g.
/// `fake-news-analytics-2025-08-23.json`.
pub fn export_file_name(date: DateTime<Utc>) -> String {
    format!("fake-news-analytics-{}.json", date.format("%Y-%m-%d"))
}

/// Write the snapshot into `dir` as pretty-printed JSON. Returns the path
/// written.
pub fn write_snapshot(snapshot: &ExportSnapshot, dir: &Path) -> Result<PathBuf, NewsLensError> {
    let path = dir.join(export_file_name(snapshot.export_date));
    let json = serde_json::to_string_pretty(snapshot)
        .context("serializing export snapshot")
        .map_err(NewsLensError::Anyhow)?;
    fs::write(&path, json)
        .map_err(|e| NewsLensError::Export(format!("writing {}: {e}", path.display())))?;
    info!(path = %path.display(), "wrote export snapshot");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn file_name_uses_the_snapshot_date() {
        let date = Utc.with_ymd_and_hms(2025, 8, 23, 12, 0, 0).unwrap();
        assert_eq!(export_file_name(date), "fake-news-analytics-2025-08-23.json");
    }

    #[test]
    fn snapshot_carries_all_three_datasets() {
        let snap = ExportSnapshot::capture(Utc::now());
        assert_eq!(snap.system_metrics.total_analyzed, 15_847);
        assert_eq!(snap.analytics.category_distribution.len(), 5);
        assert_eq!(snap.model_performance.models.len(), 4);
    }

    #[test]
    fn snapshot_serializes_with_expected_keys() {
        let snap = ExportSnapshot::capture(Utc::now());
        let value = serde_json::to_value(&snap).unwrap();
        for key in [
            "export_date",
            "system_metrics",
            "analytics",
            "model_performance",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn write_snapshot_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let snap = ExportSnapshot::capture(Utc::now());
        let path = write_snapshot(&snap, dir.path()).unwrap();
        assert!(path.exists());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("system_metrics"));
    }

    #[test]
    fn write_snapshot_into_missing_dir_is_an_export_error() {
        let snap = ExportSnapshot::capture(Utc::now());
        let err = write_snapshot(&snap, Path::new("/nonexistent/newslens")).unwrap_err();
        assert!(matches!(err, NewsLensError::Export(_)));
    }
}
