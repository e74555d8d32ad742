//! Core domain logic for recordbook.
//! This crate is the single source of truth for record and session invariants.

pub mod config;
pub mod context;
pub mod latency;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{CoreConfig, LatencyProfile, Operation};
pub use context::RecordBook;
pub use latency::{Latency, NoLatency, TokioLatency};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::record::{seed_records, Record, RecordDraft, RecordId, RecordValidationError};
pub use model::user::{LoginCredentials, User, DEMO_EMAIL, DEMO_PASSWORD};
pub use repo::id::RecordIdGenerator;
pub use repo::record_repo::{InMemoryRecordRepository, RecordRepository, RepoError, RepoResult};
pub use service::record_service::RecordService;
pub use service::record_sort::{RecordSort, SortDirection, SortField};
pub use service::session_service::{
    SessionError, SessionManager, SessionState, INVALID_CREDENTIALS_MESSAGE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
