//! Merge overlapping date ranges so shared days are counted once.

use crate::core::calculator::duration::days_between_inclusive;
use crate::models::date_range::DateRange;

/// Merge ranges into a minimal, start-ordered sequence.
///
/// Callers pass only valid ranges (`start <= end`). A range whose start
/// falls on or before the previous end is folded into it, so ranges that
/// share an endpoint day also collapse.
pub fn merge_ranges(ranges: &[DateRange]) -> Vec<DateRange> {
    let mut sorted = ranges.to_vec();
    sorted.sort_by_key(|r| r.start);

    let mut merged: Vec<DateRange> = Vec::with_capacity(sorted.len());

    for current in sorted {
        match merged.last_mut() {
            Some(last) if current.start <= last.end => {
                last.end = last.end.max(current.end);
            }
            _ => merged.push(current),
        }
    }

    merged
}

/// Sum of inclusive spans; meaningful only on merged ranges.
pub fn total_days(merged: &[DateRange]) -> i64 {
    merged
        .iter()
        .map(|r| days_between_inclusive(r.start, r.end))
        .sum()
}
