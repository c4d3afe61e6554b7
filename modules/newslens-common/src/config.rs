use std::env;
use std::path::PathBuf;

use crate::types::Region;

/// Application configuration loaded from environment variables.
/// Everything has a default; the tool runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default region for feed assembly.
    pub region: Region,

    /// Directory export snapshots are written into.
    pub export_dir: PathBuf,

    /// Simulated fetch latency for feed assembly, in milliseconds.
    pub fetch_delay_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if a set var fails to parse.
    pub fn from_env() -> Self {
        let region = env::var("NEWSLENS_REGION")
            .ok()
            .map(|s| {
                Region::from_str_loose(&s)
                    .unwrap_or_else(|| panic!("NEWSLENS_REGION must be karnataka, india, or international (got {s})"))
            })
            .unwrap_or(Region::Karnataka);

        Self {
            region,
            export_dir: env::var("NEWSLENS_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            fetch_delay_ms: env::var("NEWSLENS_FETCH_DELAY_MS")
                .unwrap_or_else(|_| "2000".to_string())
                .parse()
                .expect("NEWSLENS_FETCH_DELAY_MS must be a number"),
        }
    }
}
