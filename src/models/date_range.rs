use crate::core::calculator::duration::days_between_inclusive;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A closed range of calendar days. Ordering is by `start`, then `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Build a range only when it is countable (`start <= end`).
    pub fn checked(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Inclusive number of days covered.
    pub fn days(&self) -> i64 {
        days_between_inclusive(self.start, self.end)
    }
}
