use std::time::Duration;

use async_trait::async_trait;

/// Pluggable delay capability for the simulated fetch latency.
/// The pause is cosmetic; nothing downstream depends on elapsed time.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, ms: u64);
}

/// Real delay backed by the tokio timer.
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

/// No-op delay for testing.
pub struct NoopDelay;

#[async_trait]
impl Delay for NoopDelay {
    async fn wait(&self, _ms: u64) {}
}
