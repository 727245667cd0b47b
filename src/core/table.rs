//! Ordered rows of one experience table, with their computed totals.

use crate::core::calculator::duration::days_to_ymd;
use crate::core::calculator::merge::{merge_ranges, total_days};
use crate::core::ids::IdSource;
use crate::models::date_range::DateRange;
use crate::models::period::Period;
use crate::models::row::{Row, RowId};
use crate::models::table_kind::TableKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Result of a row mutation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Applied,
    /// Target is a derived row: nothing changed.
    ReadOnly,
    NotFound,
    /// The confirmation prompt was dismissed: nothing changed.
    Declined,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    kind: TableKind,
    rows: Vec<Row>,
    #[serde(default)]
    total: Period,
    #[serde(default)]
    merged: Vec<DateRange>,
}

impl Table {
    pub fn new(kind: TableKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
            total: Period::default(),
            merged: Vec::new(),
        }
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Deduplicated total as of the last `recalculate`.
    pub fn total(&self) -> Period {
        self.total
    }

    /// Merged ranges behind `total`.
    pub fn merged(&self) -> &[DateRange] {
        &self.merged
    }

    /// Append a row with a fresh id. Its own span is computed right away.
    pub fn add_row(
        &mut self,
        ids: &mut impl IdSource,
        editable: bool,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> RowId {
        let id = ids.next_id();
        self.rows.push(Row::new(id, self.kind, editable, start, end));
        id
    }

    /// Append an already-identified row (loading from a saved record).
    pub(crate) fn push_row(&mut self, mut row: Row) {
        row.kind = self.kind;
        row.refresh_span();
        self.rows.push(row);
    }

    /// Insert a derived row after the existing derived ones, ahead of editable rows.
    pub(crate) fn insert_derived(&mut self, ids: &mut impl IdSource, range: DateRange) -> RowId {
        let id = ids.next_id();
        let at = self
            .rows
            .iter()
            .rposition(Row::is_derived)
            .map(|i| i + 1)
            .unwrap_or(0);
        self.rows.insert(at, Row::derived(id, range));
        id
    }

    /// Drop a derived row. Only reconciliation may call this.
    pub(crate) fn remove_derived(&mut self, id: RowId) {
        self.rows.retain(|r| !(r.id == id && r.is_derived()));
    }

    /// Remove an editable row. Derived rows are refused.
    ///
    /// A general table never ends up without an editable row: an empty one
    /// is appended when the last goes away.
    pub fn remove_row(&mut self, ids: &mut impl IdSource, id: RowId) -> Mutation {
        let Some(pos) = self.rows.iter().position(|r| r.id == id) else {
            return Mutation::NotFound;
        };

        if self.rows[pos].is_derived() {
            return Mutation::ReadOnly;
        }

        self.rows.remove(pos);

        if self.kind.is_general() {
            self.ensure_editable_row(ids);
        }

        Mutation::Applied
    }

    /// Replace both endpoints of an editable row.
    pub fn update_row(
        &mut self,
        id: RowId,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Mutation {
        let Some(row) = self.rows.iter_mut().find(|r| r.id == id) else {
            return Mutation::NotFound;
        };

        if row.is_derived() {
            return Mutation::ReadOnly;
        }

        row.start = start;
        row.end = end;
        row.refresh_span();
        Mutation::Applied
    }

    /// Ranges of every row (editable or not) that are complete and ordered.
    pub fn all_valid_ranges(&self) -> Vec<DateRange> {
        self.rows.iter().filter_map(Row::valid_range).collect()
    }

    /// Derived rows as (range, id) pairs, in table order.
    pub fn derived_ranges(&self) -> Vec<(DateRange, RowId)> {
        self.rows
            .iter()
            .filter(|r| r.is_derived())
            .filter_map(|r| r.valid_range().map(|range| (range, r.id)))
            .collect()
    }

    pub fn editable_count(&self) -> usize {
        self.rows.iter().filter(|r| r.editable).count()
    }

    /// True when some editable row has at least one date filled.
    pub fn has_editable_data(&self) -> bool {
        self.rows.iter().any(|r| r.editable && r.has_data())
    }

    /// Append an empty editable row if none is left.
    pub fn ensure_editable_row(&mut self, ids: &mut impl IdSource) -> Option<RowId> {
        if self.editable_count() > 0 {
            return None;
        }
        Some(self.add_row(ids, true, None, None))
    }

    /// Empty the dates of every editable row; rows stay in place.
    pub fn clear_editable(&mut self) {
        for row in self.rows.iter_mut().filter(|r| r.editable) {
            row.start = None;
            row.end = None;
            row.refresh_span();
        }
    }

    /// Recompute row spans, the merged ranges and the deduplicated total.
    pub fn recalculate(&mut self) -> Period {
        for row in self.rows.iter_mut() {
            row.refresh_span();
        }

        self.merged = merge_ranges(&self.all_valid_ranges());
        self.total = days_to_ymd(total_days(&self.merged));
        self.total
    }
}
