//! Record use-case service.
//!
//! # Responsibility
//! - Provide the async CRUD entry points used by presentation callers.
//! - Apply simulated network latency before every repository call.
//! - Emit metadata-only diagnostics per operation.
//!
//! # Invariants
//! - Repository state is only touched after the delay completes, so a
//!   caller abandoning the future early leaves the store unchanged.
//! - No repository lock is held across an `.await`.
//! - Absence on read is `Ok(None)`; absence on update is `NotFound`.

use crate::config::{CoreConfig, LatencyProfile, Operation};
use crate::latency::{Latency, TokioLatency};
use crate::model::record::{seed_records, Record, RecordDraft};
use crate::repo::record_repo::{InMemoryRecordRepository, RecordRepository, RepoResult};
use log::{info, warn};
use std::sync::Arc;
use std::time::Instant;

/// Async record store over a repository implementation.
pub struct RecordService<R: RecordRepository> {
    repo: R,
    latency: Arc<dyn Latency>,
    profile: LatencyProfile,
}

impl RecordService<InMemoryRecordRepository> {
    /// Builds an in-memory store from configuration with real timers.
    pub fn from_config(config: &CoreConfig) -> RepoResult<Self> {
        Ok(Self::new(
            in_memory_repository(config)?,
            Arc::new(TokioLatency),
            config.latency.clone(),
        ))
    }
}

/// Builds the in-memory repository, seeded when `config.seed` is set.
pub(crate) fn in_memory_repository(config: &CoreConfig) -> RepoResult<InMemoryRecordRepository> {
    if config.seed {
        InMemoryRecordRepository::with_records(seed_records())
    } else {
        Ok(InMemoryRecordRepository::new())
    }
}

impl<R: RecordRepository> RecordService<R> {
    /// Creates a service using the provided repository and latency source.
    pub fn new(repo: R, latency: Arc<dyn Latency>, profile: LatencyProfile) -> Self {
        Self {
            repo,
            latency,
            profile,
        }
    }

    /// Borrow the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Returns a snapshot of all records in collection order.
    pub async fn list_all(&self) -> RepoResult<Vec<Record>> {
        let started_at = self.simulate(Operation::ListAll).await;
        let result = self.repo.list_records();
        match &result {
            Ok(records) => info!(
                "event=record_list module=service status=ok duration_ms={} count={}",
                started_at.elapsed().as_millis(),
                records.len()
            ),
            Err(err) => log_failure(Operation::ListAll, started_at, err),
        }
        result
    }

    /// Gets one record by id. Missing ids resolve to `None`.
    pub async fn get_by_id(&self, id: &str) -> RepoResult<Option<Record>> {
        let started_at = self.simulate(Operation::GetById).await;
        let result = self.repo.get_record(id);
        match &result {
            Ok(found) => info!(
                "event=record_get module=service status=ok duration_ms={} id={} found={}",
                started_at.elapsed().as_millis(),
                id,
                found.is_some()
            ),
            Err(err) => log_failure(Operation::GetById, started_at, err),
        }
        result
    }

    /// Creates a record and returns it with its generated id.
    pub async fn create(&self, draft: RecordDraft) -> RepoResult<Record> {
        let started_at = self.simulate(Operation::Create).await;
        let result = self.repo.create_record(draft);
        match &result {
            Ok(record) => info!(
                "event=record_create module=service status=ok duration_ms={} id={}",
                started_at.elapsed().as_millis(),
                record.id
            ),
            Err(err) => log_failure(Operation::Create, started_at, err),
        }
        result
    }

    /// Replaces an existing record wholesale.
    ///
    /// Returns `RepoError::NotFound` when no record has `record.id`.
    pub async fn update(&self, record: &Record) -> RepoResult<Record> {
        let started_at = self.simulate(Operation::Update).await;
        let result = self.repo.update_record(record);
        match &result {
            Ok(_) => info!(
                "event=record_update module=service status=ok duration_ms={} id={}",
                started_at.elapsed().as_millis(),
                record.id
            ),
            Err(err) => log_failure(Operation::Update, started_at, err),
        }
        result
    }

    /// Deletes by id. Returns whether a record was removed.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let started_at = self.simulate(Operation::Delete).await;
        let result = self.repo.delete_record(id);
        match &result {
            Ok(removed) => info!(
                "event=record_delete module=service status=ok duration_ms={} id={} removed={}",
                started_at.elapsed().as_millis(),
                id,
                removed
            ),
            Err(err) => log_failure(Operation::Delete, started_at, err),
        }
        result
    }

    async fn simulate(&self, operation: Operation) -> Instant {
        let started_at = Instant::now();
        self.latency.wait(self.profile.delay_for(operation)).await;
        started_at
    }
}

fn log_failure(operation: Operation, started_at: Instant, err: &dyn std::error::Error) {
    warn!(
        "event=record_{} module=service status=error duration_ms={} error={}",
        operation.as_str(),
        started_at.elapsed().as_millis(),
        err
    );
}
