//! Core configuration.
//!
//! # Responsibility
//! - Describe simulated per-operation latency.
//! - Carry logging and seeding options for the composition root.
//!
//! # Invariants
//! - Every field has a default, so partial documents deserialize.

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Simulated operations with an associated delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListAll,
    GetById,
    Create,
    Update,
    Delete,
    Login,
}

impl Operation {
    /// Stable name used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ListAll => "list_all",
            Self::GetById => "get_by_id",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Login => "login",
        }
    }
}

/// Per-operation delays in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyProfile {
    pub list_all_ms: u64,
    pub get_by_id_ms: u64,
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
    pub login_ms: u64,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            list_all_ms: 800,
            get_by_id_ms: 600,
            create_ms: 1000,
            update_ms: 1000,
            delete_ms: 800,
            login_ms: 1000,
        }
    }
}

impl LatencyProfile {
    /// Profile with every delay disabled.
    pub fn zero() -> Self {
        Self {
            list_all_ms: 0,
            get_by_id_ms: 0,
            create_ms: 0,
            update_ms: 0,
            delete_ms: 0,
            login_ms: 0,
        }
    }

    /// Returns the configured delay for `operation`.
    pub fn delay_for(&self, operation: Operation) -> Duration {
        let millis = match operation {
            Operation::ListAll => self.list_all_ms,
            Operation::GetById => self.get_by_id_ms,
            Operation::Create => self.create_ms,
            Operation::Update => self.update_ms,
            Operation::Delete => self.delete_ms,
            Operation::Login => self.login_ms,
        };
        Duration::from_millis(millis)
    }
}

/// Top-level configuration consumed by the composition root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling logs. `None` disables file logging.
    pub log_dir: Option<String>,
    pub latency: LatencyProfile,
    /// Preload the five demo records.
    pub seed: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            latency: LatencyProfile::default(),
            seed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, LatencyProfile, Operation};
    use std::time::Duration;

    #[test]
    fn default_profile_matches_simulated_network() {
        let profile = LatencyProfile::default();
        assert_eq!(
            profile.delay_for(Operation::ListAll),
            Duration::from_millis(800)
        );
        assert_eq!(
            profile.delay_for(Operation::GetById),
            Duration::from_millis(600)
        );
        assert_eq!(profile.delay_for(Operation::Create), Duration::from_secs(1));
        assert_eq!(profile.delay_for(Operation::Update), Duration::from_secs(1));
        assert_eq!(
            profile.delay_for(Operation::Delete),
            Duration::from_millis(800)
        );
        assert_eq!(profile.delay_for(Operation::Login), Duration::from_secs(1));
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let config: CoreConfig =
            serde_json::from_str(r#"{"latency":{"login_ms":5},"seed":false}"#).unwrap();
        assert_eq!(config.latency.login_ms, 5);
        assert_eq!(config.latency.create_ms, 1000);
        assert!(!config.seed);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn zero_profile_disables_all_delays() {
        let profile = LatencyProfile::zero();
        for operation in [
            Operation::ListAll,
            Operation::GetById,
            Operation::Create,
            Operation::Update,
            Operation::Delete,
            Operation::Login,
        ] {
            assert_eq!(profile.delay_for(operation), Duration::ZERO);
        }
    }
}
