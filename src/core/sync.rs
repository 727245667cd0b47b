//! Keeps the general table's derived rows in step with the specific table.

use crate::core::ids::IdSource;
use crate::core::table::Table;
use crate::models::date_range::DateRange;
use crate::models::row::RowId;
use std::collections::BTreeSet;

/// What a reconciliation pass changed in the general table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub removed: Vec<RowId>,
    pub inserted: Vec<RowId>,
    pub editable_added: Option<RowId>,
}

impl SyncReport {
    pub fn is_noop(&self) -> bool {
        self.removed.is_empty() && self.inserted.is_empty() && self.editable_added.is_none()
    }
}

/// Make general's derived rows the exact image of specific's valid ranges.
///
/// Matching is by range value, not row identity: identical ranges are
/// interchangeable and map to a single derived row. Editable general rows
/// are never touched, except that one empty row is added when none exists.
pub fn reconcile(specific: &Table, general: &mut Table, ids: &mut impl IdSource) -> SyncReport {
    let mut report = SyncReport::default();

    let specific_valid: BTreeSet<DateRange> = specific.all_valid_ranges().into_iter().collect();

    // Stale or duplicated mirrors go away
    let mut represented: BTreeSet<DateRange> = BTreeSet::new();
    for (range, id) in general.derived_ranges() {
        if !specific_valid.contains(&range) || !represented.insert(range) {
            general.remove_derived(id);
            report.removed.push(id);
        }
    }

    // Derived rows that are incomplete or inverted cannot match anything
    let broken: Vec<RowId> = general
        .rows()
        .iter()
        .filter(|r| r.is_derived() && r.valid_range().is_none())
        .map(|r| r.id)
        .collect();
    for id in broken {
        general.remove_derived(id);
        report.removed.push(id);
    }

    for range in specific_valid.difference(&represented) {
        report.inserted.push(general.insert_derived(ids, *range));
    }

    report.editable_added = general.ensure_editable_row(ids);
    report
}
