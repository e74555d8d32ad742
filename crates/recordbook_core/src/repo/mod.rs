//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the synchronous data access contract for records.
//! - Keep collection bookkeeping out of the async service layer.
//!
//! # Invariants
//! - Repository writes must enforce `Record::validate()` before mutation.
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   transport errors.

pub mod id;
pub mod record_repo;
