pub mod delay;
pub mod fixtures;
pub mod simulated;

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use newslens_common::{Article, Region};

pub use delay::{Delay, NoopDelay, TokioDelay};
pub use fixtures::sample_articles;
pub use simulated::simulated_articles;

/// Simulated fetch latency the dashboard shipped with, in milliseconds.
pub const DEFAULT_LATENCY_MS: u64 = 2000;

/// Assembles region feeds from the fixture set plus simulated articles,
/// pausing behind the injected delay to mimic a network fetch.
pub struct FeedAssembler {
    delay: Arc<dyn Delay>,
    latency_ms: u64,
}

impl FeedAssembler {
    pub fn new(delay: Arc<dyn Delay>, latency_ms: u64) -> Self {
        Self { delay, latency_ms }
    }

    /// Fixture articles for the region, in seed order, followed by the
    /// region's two simulated articles stamped with the assembly time.
    pub async fn assemble(&self, region: Region) -> Vec<Article> {
        self.delay.wait(self.latency_ms).await;

        let mut feed: Vec<Article> = fixtures::sample_articles()
            .into_iter()
            .filter(|a| a.region == region)
            .collect();
        feed.extend(simulated::simulated_articles(region, Utc::now()));

        info!(region = %region, count = feed.len(), "assembled feed");
        feed
    }
}
