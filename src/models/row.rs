use super::{date_range::DateRange, period::Period, table_kind::TableKind};
use crate::core::calculator::duration::days_to_ymd;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Row identity: a time-based, strictly increasing value (see `core::ids`).
pub type RowId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    pub kind: TableKind,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    /// false → derived (read-only) mirror of a specific row
    pub editable: bool,
    /// Own inclusive span, regardless of overlap with sibling rows.
    #[serde(default)]
    pub span: Period,
}

impl Row {
    pub fn new(
        id: RowId,
        kind: TableKind,
        editable: bool,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Self {
        let mut row = Self {
            id,
            kind,
            start,
            end,
            editable,
            span: Period::default(),
        };
        row.refresh_span();
        row
    }

    pub fn derived(id: RowId, range: DateRange) -> Self {
        Self::new(
            id,
            TableKind::General,
            false,
            Some(range.start),
            Some(range.end),
        )
    }

    /// At least one endpoint filled.
    pub fn has_data(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    pub fn is_derived(&self) -> bool {
        !self.editable
    }

    /// The countable range, if complete and `start <= end`.
    pub fn valid_range(&self) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(s), Some(e)) => DateRange::checked(s, e),
            _ => None,
        }
    }

    pub fn span_days(&self) -> i64 {
        self.valid_range().map(|r| r.days()).unwrap_or(0)
    }

    pub fn refresh_span(&mut self) {
        self.span = days_to_ymd(self.span_days());
    }

    pub fn start_str(&self) -> String {
        self.start
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    pub fn end_str(&self) -> String {
        self.end
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}
