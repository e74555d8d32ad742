//! Injectable latency for simulated network calls.
//!
//! # Responsibility
//! - Suspend the calling task for a configured duration.
//! - Let tests swap real timers for an immediate implementation.
//!
//! # Invariants
//! - Waiting never blocks an OS thread.
//! - Waiting always completes; there is no timeout or failure path.

use async_trait::async_trait;
use std::time::Duration;

/// Suspension point modeling network latency.
#[async_trait]
pub trait Latency: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Latency backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioLatency;

#[async_trait]
impl Latency for TokioLatency {
    async fn wait(&self, duration: Duration) {
        if duration > Duration::ZERO {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Latency that resolves immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn wait(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::{Latency, NoLatency, TokioLatency};
    use std::time::Duration;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn tokio_latency_waits_full_duration() {
        let started = Instant::now();
        TokioLatency.wait(Duration::from_millis(800)).await;
        assert!(started.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn no_latency_returns_immediately() {
        let started = Instant::now();
        NoLatency.wait(Duration::from_secs(10)).await;
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
