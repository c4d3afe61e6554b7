use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use newslens_common::{Config, NewsLensError, Region};
use newslens_detector::{classify, EnhancedDetector};
use newslens_feed::{FeedAssembler, TokioDelay};
use newslens_report::{dashboard_summary, write_snapshot, ExportSnapshot};

#[derive(Parser)]
#[command(name = "newslens", about = "Rule-based fake news screening demo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single article
    Analyze {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        /// Source name, used only by the enhanced variant
        #[arg(long)]
        source: Option<String>,
        /// Run the corrected variant alongside the legacy heuristic
        #[arg(long)]
        enhanced: bool,
    },
    /// Assemble and print a region feed
    Feed {
        /// karnataka, india, or international (defaults to the configured region)
        #[arg(long)]
        region: Option<String>,
    },
    /// Print the dashboard summary
    Dashboard,
    /// Write an analytics snapshot to disk
    Export {
        /// Target directory (defaults to the configured export dir)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("newslens=info".parse()?))
        .init();

    let config = Config::from_env();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            title,
            body,
            source,
            enhanced,
        } => {
            validate_input(&title, &body)?;
            let source = source.unwrap_or_else(|| "Unknown Source".to_string());

            let analysis = classify(&title, &body);
            info!(label = %analysis.label, confidence = analysis.confidence, "analysis complete");
            println!("{}", serde_json::to_string_pretty(&analysis)?);

            if enhanced {
                let detector = EnhancedDetector::new(Utc::now().year());
                let result = detector.analyze(&title, &body, Some(&source));
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        }
        Commands::Feed { region } => {
            let region = match region {
                Some(s) => Region::from_str_loose(&s).ok_or_else(|| {
                    NewsLensError::Validation(format!(
                        "unknown region {s:?}; expected karnataka, india, or international"
                    ))
                })?,
                None => config.region,
            };
            let assembler = FeedAssembler::new(Arc::new(TokioDelay), config.fetch_delay_ms);
            let feed = assembler.assemble(region).await;
            println!("{}", serde_json::to_string_pretty(&feed)?);
        }
        Commands::Dashboard => {
            let articles = newslens_feed::sample_articles();
            let summary = dashboard_summary(&articles);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Export { dir } => {
            let dir = dir.unwrap_or(config.export_dir);
            let snapshot = ExportSnapshot::capture(Utc::now());
            let path = write_snapshot(&snapshot, &dir)?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

/// Boundary validation: the classifier itself accepts anything; empty
/// fields are refused here before it is invoked.
fn validate_input(title: &str, body: &str) -> Result<(), NewsLensError> {
    if title.trim().is_empty() {
        return Err(NewsLensError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    if body.trim().is_empty() {
        return Err(NewsLensError::Validation(
            "body must not be empty".to_string(),
        ));
    }
    Ok(())
}
