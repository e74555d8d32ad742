//! Domain model for records and the demo identity.
//!
//! # Responsibility
//! - Define canonical data structures shared by repository and services.
//! - Provide the fixed seed dataset and the demo account.
//!
//! # Invariants
//! - Every record is identified by a store-assigned `RecordId`.
//! - Credentials are transient and never persisted.

pub mod record;
pub mod user;
