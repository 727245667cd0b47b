//! Worksheet state: both tables plus the recomputation cascade.

use crate::core::confirm::{Confirm, Prompt};
use crate::core::ids::{ClockIds, IdSource};
use crate::core::sync::{SyncReport, reconcile};
use crate::core::table::{Mutation, Table};
use crate::errors::{AppError, AppResult};
use crate::i18n::Translations;
use crate::models::calculation::{Calculation, RowRecord, RowType};
use crate::models::date_range::DateRange;
use crate::models::period::Period;
use crate::models::row::{Row, RowId};
use crate::models::table_kind::TableKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    pub language: String,
    specific: Table,
    general: Table,
    #[serde(default)]
    ids: ClockIds,
    /// Set while a loaded calculation is being edited: specific edits do
    /// not touch general's derived rows until the session ends.
    #[serde(default)]
    sync_suspended: bool,
}

impl AppState {
    /// Fresh worksheet: one empty specific row, one empty general row.
    pub fn new(language: &str) -> Self {
        let mut state = Self::empty(language);
        state.specific.add_row(&mut state.ids, true, None, None);
        state.calculate_total(TableKind::Specific);
        state
    }

    fn empty(language: &str) -> Self {
        Self {
            language: language.to_string(),
            specific: Table::new(TableKind::Specific),
            general: Table::new(TableKind::General),
            ids: ClockIds::default(),
            sync_suspended: false,
        }
    }

    pub fn specific(&self) -> &Table {
        &self.specific
    }

    pub fn general(&self) -> &Table {
        &self.general
    }

    pub fn table(&self, kind: TableKind) -> &Table {
        match kind {
            TableKind::Specific => &self.specific,
            TableKind::General => &self.general,
        }
    }

    fn table_mut(&mut self, kind: TableKind) -> &mut Table {
        match kind {
            TableKind::Specific => &mut self.specific,
            TableKind::General => &mut self.general,
        }
    }

    fn split(&mut self, kind: TableKind) -> (&mut Table, &mut ClockIds) {
        match kind {
            TableKind::Specific => (&mut self.specific, &mut self.ids),
            TableKind::General => (&mut self.general, &mut self.ids),
        }
    }

    pub fn find_row(&self, id: RowId) -> Option<&Row> {
        self.specific.row(id).or_else(|| self.general.row(id))
    }

    pub fn kind_of(&self, id: RowId) -> Option<TableKind> {
        self.find_row(id).map(|r| r.kind)
    }

    pub fn is_sync_suspended(&self) -> bool {
        self.sync_suspended
    }

    pub fn suspend_sync(&mut self) {
        self.sync_suspended = true;
    }

    /// Re-enable automatic reconciliation and catch up at once.
    pub fn resume_sync(&mut self) -> SyncReport {
        self.sync_suspended = false;
        let report = self.reconcile();
        self.general.recalculate();
        report
    }

    pub fn reconcile(&mut self) -> SyncReport {
        reconcile(&self.specific, &mut self.general, &mut self.ids)
    }

    /// Recompute one table's total; a specific change cascades to general.
    pub fn calculate_total(&mut self, kind: TableKind) -> Period {
        let total = self.table_mut(kind).recalculate();

        if kind.is_specific() {
            if !self.sync_suspended {
                self.reconcile();
            }
            self.general.recalculate();
        }

        total
    }

    pub fn add_row(
        &mut self,
        kind: TableKind,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> RowId {
        let (table, ids) = self.split(kind);
        let id = table.add_row(ids, true, start, end);
        self.calculate_total(kind);
        id
    }

    /// Replace a row's dates. Derived rows are refused without error.
    pub fn update_row(
        &mut self,
        id: RowId,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> AppResult<Mutation> {
        let kind = self.kind_of(id).ok_or(AppError::RowNotFound(id))?;

        let outcome = self.table_mut(kind).update_row(id, start, end);
        if outcome == Mutation::Applied {
            self.calculate_total(kind);
        }

        Ok(outcome)
    }

    /// Remove an editable row, asking first when it carries any date.
    pub fn remove_row(
        &mut self,
        id: RowId,
        confirm: &mut dyn Confirm,
        tr: &Translations,
    ) -> AppResult<Mutation> {
        let row = self.find_row(id).ok_or(AppError::RowNotFound(id))?;
        let kind = row.kind;

        if row.is_derived() {
            return Ok(Mutation::ReadOnly);
        }

        if row.has_data() && !confirm.confirm(&Prompt::remove_row(tr, kind)) {
            return Ok(Mutation::Declined);
        }

        let (table, ids) = self.split(kind);
        let outcome = table.remove_row(ids, id);
        if outcome == Mutation::Applied {
            self.calculate_total(kind);
        }

        Ok(outcome)
    }

    /// Empty every editable date of one table after confirmation.
    pub fn clear_fields(
        &mut self,
        kind: TableKind,
        confirm: &mut dyn Confirm,
        tr: &Translations,
    ) -> bool {
        if !confirm.confirm(&Prompt::clear_table(tr, kind)) {
            return false;
        }

        self.table_mut(kind).clear_editable();
        self.calculate_total(kind);
        true
    }

    /// Empty every editable date of both tables, no questions asked.
    pub fn clear_all(&mut self) {
        self.specific.clear_editable();
        self.general.clear_editable();
        self.calculate_total(TableKind::Specific);
    }

    /// Complete rows of both tables, oldest first.
    pub fn to_records(&self) -> Vec<RowRecord> {
        let mut records: Vec<RowRecord> = self
            .specific
            .rows()
            .iter()
            .chain(self.general.rows())
            .filter_map(|row| {
                let (start, end) = (row.start?, row.end?);
                let row_type = match (row.kind, row.editable) {
                    (TableKind::Specific, _) => RowType::Specific,
                    (TableKind::General, true) => RowType::General,
                    (TableKind::General, false) => RowType::Derived,
                };
                Some(RowRecord {
                    row_type,
                    start_date: start,
                    end_date: end,
                    timestamp: row.id,
                })
            })
            .collect();

        records.sort_by_key(|r| r.timestamp);
        records
    }

    /// Rebuild a worksheet from a saved calculation.
    ///
    /// Typed `rows` are restored verbatim; older records fall back to the
    /// `specificData` / `generalData` pair, whose general side also held the
    /// mirrors of the specific ranges.
    pub fn from_calculation(calc: &Calculation, fallback_language: &str) -> Self {
        let language = calc
            .language
            .as_deref()
            .filter(|l| Translations::is_supported(l))
            .unwrap_or(fallback_language);

        let mut state = Self::empty(language);

        if calc.is_legacy() {
            let specific_ranges: BTreeSet<DateRange> =
                calc.specific_data.iter().map(|r| r.range()).collect();

            for r in &calc.specific_data {
                state
                    .specific
                    .add_row(&mut state.ids, true, Some(r.start_date), Some(r.end_date));
            }

            for r in calc
                .general_data
                .iter()
                .filter(|r| !specific_ranges.contains(&r.range()))
            {
                state
                    .general
                    .add_row(&mut state.ids, true, Some(r.start_date), Some(r.end_date));
            }
        } else {
            let mut records = calc.rows.clone();
            records.sort_by_key(|r| r.timestamp);

            if let Some(max) = records.iter().map(|r| r.timestamp).max() {
                state.ids.observe(max);
            }

            let mut used: HashSet<RowId> = HashSet::new();
            for rec in records {
                let id = if used.insert(rec.timestamp) {
                    rec.timestamp
                } else {
                    state.ids.next_id()
                };
                let (start, end) = (Some(rec.start_date), Some(rec.end_date));

                match rec.row_type {
                    RowType::Specific => state
                        .specific
                        .push_row(Row::new(id, TableKind::Specific, true, start, end)),
                    RowType::General => state
                        .general
                        .push_row(Row::new(id, TableKind::General, true, start, end)),
                    RowType::Derived => state
                        .general
                        .push_row(Row::new(id, TableKind::General, false, start, end)),
                }
            }
        }

        if state.specific.is_empty() {
            state.specific.add_row(&mut state.ids, true, None, None);
        }

        state.calculate_total(TableKind::Specific);
        state
    }
}
