//! Row identity generators.

use crate::models::row::RowId;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Source of fresh, strictly increasing row ids.
pub trait IdSource {
    fn next_id(&mut self) -> RowId;
}

/// Millisecond clock ids. Two rows created in the same millisecond still
/// get distinct, ordered values: the counter never goes backwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClockIds {
    last: RowId,
}

impl ClockIds {
    /// Make sure later ids sort after an id created elsewhere (e.g. a loaded row).
    pub fn observe(&mut self, id: RowId) {
        self.last = self.last.max(id);
    }

    pub fn last(&self) -> RowId {
        self.last
    }
}

impl IdSource for ClockIds {
    fn next_id(&mut self) -> RowId {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last
    }
}

/// Plain counter, handy where ids must be predictable.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: RowId,
}

impl SequentialIds {
    pub fn starting_at(first: RowId) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> RowId {
        let id = self.next;
        self.next += 1;
        id
    }
}
