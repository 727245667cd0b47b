//! Day-count arithmetic for tenure totals.
//!
//! Conversions use fixed divisors (365-day year, 30-day month) rather than
//! real calendar math; saved totals depend on this exact breakdown.

use crate::models::period::Period;
use chrono::NaiveDate;

pub const DAYS_PER_YEAR: i64 = 365;
pub const DAYS_PER_MONTH: i64 = 30;

/// Absolute day distance between `a` and `b`, counting both endpoints.
pub fn days_between_inclusive(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs() + 1
}

/// Split a day count into years, months and days.
pub fn days_to_ymd(total_days: i64) -> Period {
    let total = total_days.max(0);
    let years = total / DAYS_PER_YEAR;
    let remaining = total % DAYS_PER_YEAR;

    Period {
        years,
        months: remaining / DAYS_PER_MONTH,
        days: remaining % DAYS_PER_MONTH,
    }
}
