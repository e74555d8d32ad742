//! Record domain model.
//!
//! # Responsibility
//! - Define the canonical record managed by the store.
//! - Provide write-path validation and the initial dataset.
//!
//! # Invariants
//! - `id` is assigned by the store at creation time, never by callers.
//! - `id` is unique across the live collection.
//! - `title` is never empty for a persisted record.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque record identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = String;

/// Canonical persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Store-assigned unique identifier.
    pub id: RecordId,
    /// Display title. Must not be empty.
    pub title: String,
    /// Free-text body. May be empty.
    pub body: String,
}

/// Record payload without an identifier, used for creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub title: String,
    pub body: String,
}

/// Validation errors for record write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Record identifier is empty.
    EmptyId,
    /// Record title is empty.
    EmptyTitle,
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "record id cannot be empty"),
            Self::EmptyTitle => write!(f, "record title cannot be empty"),
        }
    }
}

impl Error for RecordValidationError {}

impl Record {
    /// Creates a record with an explicit identifier.
    ///
    /// Used for seed data and by the store once an id has been generated.
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }

    /// Checks write-path invariants.
    ///
    /// Duplicate titles and blank bodies are accepted.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.id.is_empty() {
            return Err(RecordValidationError::EmptyId);
        }
        validate_title(&self.title)
    }
}

impl RecordDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Validates the payload before an id is spent on it.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        validate_title(&self.title)
    }

    /// Attaches a store-generated id to this payload.
    pub fn into_record(self, id: RecordId) -> Record {
        Record {
            id,
            title: self.title,
            body: self.body,
        }
    }
}

fn validate_title(title: &str) -> Result<(), RecordValidationError> {
    if title.is_empty() {
        return Err(RecordValidationError::EmptyTitle);
    }
    Ok(())
}

/// Returns the initial dataset loaded into a fresh store.
pub fn seed_records() -> Vec<Record> {
    vec![
        Record::new(
            "1",
            "First Record",
            "This is the body of the first record in our database.",
        ),
        Record::new(
            "2",
            "Second Record",
            "The second record contains different information than the first one.",
        ),
        Record::new(
            "3",
            "Another Entry",
            "Here is another entry with some additional information for testing.",
        ),
        Record::new(
            "4",
            "Important Data",
            "This record contains important information that should not be lost.",
        ),
        Record::new(
            "5",
            "Final Example",
            "The last example record in our initial dataset.",
        ),
    ]
}
