pub mod analytics;
pub mod dashboard;
pub mod export;
pub mod metrics;

pub use analytics::{analytics, Analytics, CategorySlice, RegionSlice, TimePoint};
pub use dashboard::{dashboard_summary, DashboardSummary, RecentResult};
pub use export::{export_file_name, write_snapshot, ExportSnapshot};
pub use metrics::{model_performance, system_metrics, ModelMetrics, ModelPerformance, ModelSpeed, SystemMetrics};
