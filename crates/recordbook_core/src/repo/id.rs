//! Record id generation.
//!
//! # Invariants
//! - Generated ids are strictly increasing epoch-millisecond values.
//! - Two calls within the same millisecond never yield the same id.

use parking_lot::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Time-derived, strictly monotonic id source.
#[derive(Debug, Default)]
pub struct RecordIdGenerator {
    last: Mutex<i64>,
}

impl RecordIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id using the current wall-clock time.
    pub fn next_id(&self) -> i64 {
        self.next_id_at(now_epoch_ms())
    }

    /// Returns the next id for a given clock reading.
    ///
    /// The result is `max(now_ms, last + 1)` so clock stalls and backwards
    /// jumps still produce fresh values.
    pub fn next_id_at(&self, now_ms: i64) -> i64 {
        let mut last = self.last.lock();
        let next = now_ms.max(last.saturating_add(1));
        *last = next;
        next
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
