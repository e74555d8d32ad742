//! Record repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the ordered record collection.
//! - Assign identifiers on create.
//!
//! # Invariants
//! - Write paths call `validate()` before mutating the collection.
//! - Each write completes under a single lock acquisition, so readers see
//!   either the whole change or none of it.
//! - Reads return owned snapshots, never references into the collection.

use crate::model::record::{Record, RecordDraft, RecordId, RecordValidationError};
use crate::repo::id::RecordIdGenerator;
use parking_lot::RwLock;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(RecordValidationError),
    /// Write targeted an id absent from the collection.
    NotFound(RecordId),
    /// Initial data contained the same id twice.
    DuplicateId(RecordId),
    /// Backend could not be reached. Callers should offer a retry.
    Transport(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::DuplicateId(id) => write!(f, "duplicate record id: {id}"),
            Self::Transport(message) => write!(f, "record backend unavailable: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) => None,
            Self::Transport(_) => None,
        }
    }
}

impl From<RecordValidationError> for RepoError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for record CRUD operations.
pub trait RecordRepository: Send + Sync {
    fn list_records(&self) -> RepoResult<Vec<Record>>;
    fn get_record(&self, id: &str) -> RepoResult<Option<Record>>;
    fn create_record(&self, draft: RecordDraft) -> RepoResult<Record>;
    fn update_record(&self, record: &Record) -> RepoResult<Record>;
    fn delete_record(&self, id: &str) -> RepoResult<bool>;
}

/// In-process record collection preserving insertion order.
#[derive(Debug, Default)]
pub struct InMemoryRecordRepository {
    records: RwLock<Vec<Record>>,
    ids: RecordIdGenerator,
}

impl InMemoryRecordRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository preloaded with `records`.
    ///
    /// # Errors
    /// - Any record failing validation.
    /// - Duplicate ids.
    pub fn with_records(records: Vec<Record>) -> RepoResult<Self> {
        for (index, record) in records.iter().enumerate() {
            record.validate()?;
            if records[..index].iter().any(|other| other.id == record.id) {
                return Err(RepoError::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self {
            records: RwLock::new(records),
            ids: RecordIdGenerator::new(),
        })
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl RecordRepository for InMemoryRecordRepository {
    fn list_records(&self) -> RepoResult<Vec<Record>> {
        Ok(self.records.read().clone())
    }

    fn get_record(&self, id: &str) -> RepoResult<Option<Record>> {
        Ok(self
            .records
            .read()
            .iter()
            .find(|record| record.id == id)
            .cloned())
    }

    fn create_record(&self, draft: RecordDraft) -> RepoResult<Record> {
        draft.validate()?;

        let mut records = self.records.write();
        let id = loop {
            let candidate = self.ids.next_id().to_string();
            if !records.iter().any(|record| record.id == candidate) {
                break candidate;
            }
        };

        let record = draft.into_record(id);
        records.push(record.clone());
        Ok(record)
    }

    fn update_record(&self, record: &Record) -> RepoResult<Record> {
        record.validate()?;

        let mut records = self.records.write();
        let slot = records
            .iter_mut()
            .find(|existing| existing.id == record.id)
            .ok_or_else(|| RepoError::NotFound(record.id.clone()))?;
        *slot = record.clone();
        Ok(record.clone())
    }

    fn delete_record(&self, id: &str) -> RepoResult<bool> {
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|record| record.id != id);
        Ok(records.len() < before)
    }
}
