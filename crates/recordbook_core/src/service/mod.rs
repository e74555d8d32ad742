//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into async use-case level APIs.
//! - Gate access behind the session manager.

pub mod record_service;
pub mod record_sort;
pub mod session_service;
