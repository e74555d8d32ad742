//! Composition root tying the session gate to the record store.
//!
//! # Invariants
//! - Both components share one latency source.
//! - Record access through `records()` requires an authenticated session.

use crate::config::CoreConfig;
use crate::latency::{Latency, TokioLatency};
use crate::model::user::User;
use crate::repo::record_repo::{InMemoryRecordRepository, RepoResult};
use crate::service::record_service::{in_memory_repository, RecordService};
use crate::service::session_service::SessionManager;
use std::sync::Arc;

/// Application state handed to presentation callers.
pub struct RecordBook {
    session: SessionManager,
    records: RecordService<InMemoryRecordRepository>,
}

impl RecordBook {
    /// Builds the context with real timers.
    pub fn from_config(config: &CoreConfig) -> RepoResult<Self> {
        Self::with_latency(config, Arc::new(TokioLatency))
    }

    /// Builds the context with a caller-provided latency source.
    pub fn with_latency(config: &CoreConfig, latency: Arc<dyn Latency>) -> RepoResult<Self> {
        let repo = in_memory_repository(config)?;

        Ok(Self {
            session: SessionManager::new(Arc::clone(&latency), &config.latency),
            records: RecordService::new(repo, latency, config.latency.clone()),
        })
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Record store, available only to an authenticated user.
    pub fn records(&self) -> Option<(User, &RecordService<InMemoryRecordRepository>)> {
        self.session
            .current_user()
            .map(|user| (user, &self.records))
    }
}
