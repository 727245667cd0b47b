mod common;
use common::d;

use std::cell::Cell;
use tenurecalc::core::confirm::{FixedAnswer, Prompt};
use tenurecalc::core::ids::{ClockIds, IdSource, SequentialIds};
use tenurecalc::core::state::AppState;
use tenurecalc::core::sync::reconcile;
use tenurecalc::core::table::{Mutation, Table};
use tenurecalc::errors::AppError;
use tenurecalc::i18n::Translations;
use tenurecalc::models::calculation::RowType;
use tenurecalc::models::date_range::DateRange;
use tenurecalc::models::period::Period;
use tenurecalc::models::table_kind::TableKind;

fn es() -> Translations {
    Translations::load("es").expect("built-in es")
}

/// Worksheet with the default empty specific row filled in.
fn with_specific(start: &str, end: &str) -> (AppState, i64) {
    let mut state = AppState::new("es");
    let id = state.specific().rows()[0].id;
    state
        .update_row(id, Some(d(start)), Some(d(end)))
        .expect("row exists");
    (state, id)
}

fn derived_count(state: &AppState) -> usize {
    state.general().rows().iter().filter(|r| r.is_derived()).count()
}

#[test]
fn test_new_worksheet_has_one_empty_row_per_table() {
    let state = AppState::new("es");

    assert_eq!(state.specific().len(), 1);
    assert_eq!(state.general().len(), 1);
    assert!(state.general().rows()[0].editable);
    assert!(!state.specific().rows()[0].has_data());
    assert!(state.specific().total().is_zero());
    assert!(state.general().total().is_zero());
}

#[test]
fn test_specific_range_is_mirrored_into_general() {
    let (state, _) = with_specific("2020-01-01", "2020-01-10");

    assert_eq!(state.specific().total(), Period::new(0, 0, 10));
    assert_eq!(state.general().total(), Period::new(0, 0, 10));

    let derived: Vec<_> = state
        .general()
        .rows()
        .iter()
        .filter(|r| r.is_derived())
        .collect();
    assert_eq!(derived.len(), 1);
    assert_eq!(derived[0].start, Some(d("2020-01-01")));
    assert_eq!(derived[0].end, Some(d("2020-01-10")));
}

#[test]
fn test_general_total_merges_mirrored_and_own_rows() {
    let (mut state, _) = with_specific("2020-01-01", "2020-01-10");
    state.add_row(
        TableKind::General,
        Some(d("2020-01-05")),
        Some(d("2020-01-20")),
    );

    assert_eq!(state.general().total(), Period::new(0, 0, 20));
    assert_eq!(state.specific().total(), Period::new(0, 0, 10));
    assert_eq!(
        state.general().merged(),
        &[DateRange::new(d("2020-01-01"), d("2020-01-20"))]
    );
}

#[test]
fn test_removing_specific_row_drops_its_mirror() {
    let tr = es();
    let (mut state, specific_id) = with_specific("2020-01-01", "2020-01-10");
    state.add_row(
        TableKind::General,
        Some(d("2020-01-05")),
        Some(d("2020-01-20")),
    );

    let outcome = state
        .remove_row(specific_id, &mut FixedAnswer(true), &tr)
        .expect("row exists");

    assert_eq!(outcome, Mutation::Applied);
    assert_eq!(derived_count(&state), 0);
    assert_eq!(state.general().total(), Period::new(0, 0, 16));
    assert!(state.specific().total().is_zero());
}

#[test]
fn test_derived_row_cannot_be_removed() {
    let tr = es();
    let (mut state, _) = with_specific("2020-01-01", "2020-01-10");
    let derived_id = state
        .general()
        .rows()
        .iter()
        .find(|r| r.is_derived())
        .map(|r| r.id)
        .expect("derived row");

    let before = state.general().rows().to_vec();
    let asked = Cell::new(0);
    let mut confirm = |_: &Prompt| {
        asked.set(asked.get() + 1);
        true
    };

    let outcome = state
        .remove_row(derived_id, &mut confirm, &tr)
        .expect("row exists");

    assert_eq!(outcome, Mutation::ReadOnly);
    assert_eq!(asked.get(), 0);
    assert_eq!(state.general().rows(), before.as_slice());
}

#[test]
fn test_derived_row_cannot_be_edited() {
    let (mut state, _) = with_specific("2020-01-01", "2020-01-10");
    let derived_id = state
        .general()
        .rows()
        .iter()
        .find(|r| r.is_derived())
        .map(|r| r.id)
        .expect("derived row");

    let outcome = state
        .update_row(derived_id, Some(d("2019-01-01")), Some(d("2019-12-31")))
        .expect("row exists");

    assert_eq!(outcome, Mutation::ReadOnly);
    assert_eq!(state.general().total(), Period::new(0, 0, 10));
}

#[test]
fn test_general_regains_an_editable_row() {
    let tr = es();
    let mut state = AppState::new("es");
    let only = state.general().rows()[0].id;

    let outcome = state
        .remove_row(only, &mut FixedAnswer(false), &tr)
        .expect("row exists");

    // empty row: no question asked, so the `false` answer is irrelevant
    assert_eq!(outcome, Mutation::Applied);
    assert_eq!(state.general().editable_count(), 1);
    let replacement = &state.general().rows()[0];
    assert_ne!(replacement.id, only);
    assert!(!replacement.has_data());
}

#[test]
fn test_declined_removal_keeps_row() {
    let tr = es();
    let (mut state, id) = with_specific("2020-01-01", "2020-01-10");

    let outcome = state
        .remove_row(id, &mut FixedAnswer(false), &tr)
        .expect("row exists");

    assert_eq!(outcome, Mutation::Declined);
    assert!(state.find_row(id).is_some());
    assert_eq!(state.specific().total(), Period::new(0, 0, 10));
}

#[test]
fn test_half_filled_row_asks_before_removal() {
    let tr = es();
    let mut state = AppState::new("es");
    let id = state.add_row(TableKind::Specific, Some(d("2020-01-01")), None);

    let asked = Cell::new(0);
    let mut confirm = |p: &Prompt| {
        asked.set(asked.get() + 1);
        assert!(p.text.contains("Experiencia Específica"));
        assert_eq!(p.confirm_label, "Sí, eliminar");
        true
    };

    let outcome = state.remove_row(id, &mut confirm, &tr).expect("row exists");
    assert_eq!(outcome, Mutation::Applied);
    assert_eq!(asked.get(), 1);
}

#[test]
fn test_unknown_row_is_an_error() {
    let mut state = AppState::new("es");
    let err = state.update_row(42, None, None).unwrap_err();
    assert!(matches!(err, AppError::RowNotFound(42)));
}

#[test]
fn test_inverted_range_is_not_counted_nor_mirrored() {
    let (state, id) = with_specific("2020-02-10", "2020-02-01");

    let row = state.find_row(id).expect("row");
    assert!(row.span.is_zero());
    assert!(state.specific().total().is_zero());
    assert_eq!(derived_count(&state), 0);
}

#[test]
fn test_overlapping_rows_keep_their_own_span() {
    let (mut state, first) = with_specific("2020-01-01", "2020-01-10");
    let second = state.add_row(
        TableKind::Specific,
        Some(d("2020-01-06")),
        Some(d("2020-01-15")),
    );

    assert_eq!(state.find_row(first).expect("row").span, Period::new(0, 0, 10));
    assert_eq!(state.find_row(second).expect("row").span, Period::new(0, 0, 10));
    assert_eq!(state.specific().total(), Period::new(0, 0, 15));
}

#[test]
fn test_identical_specific_ranges_share_one_mirror() {
    let (mut state, _) = with_specific("2020-01-01", "2020-01-10");
    state.add_row(
        TableKind::Specific,
        Some(d("2020-01-01")),
        Some(d("2020-01-10")),
    );

    assert_eq!(derived_count(&state), 1);
    assert_eq!(state.general().total(), Period::new(0, 0, 10));
}

#[test]
fn test_mirrors_are_listed_before_editable_rows() {
    let (mut state, _) = with_specific("2020-01-01", "2020-01-10");
    state.add_row(
        TableKind::Specific,
        Some(d("2021-01-01")),
        Some(d("2021-01-10")),
    );

    let editable_flags: Vec<bool> = state.general().rows().iter().map(|r| r.editable).collect();
    assert_eq!(editable_flags, vec![false, false, true]);
}

#[test]
fn test_reconcile_is_idempotent() {
    let mut ids = SequentialIds::default();
    let mut specific = Table::new(TableKind::Specific);
    specific.add_row(&mut ids, true, Some(d("2020-01-01")), Some(d("2020-01-10")));
    specific.add_row(&mut ids, true, Some(d("2020-03-01")), Some(d("2020-03-05")));
    specific.add_row(&mut ids, true, Some(d("2020-04-01")), None);

    let mut general = Table::new(TableKind::General);
    let first = reconcile(&specific, &mut general, &mut ids);
    assert_eq!(first.inserted.len(), 2);
    assert!(first.editable_added.is_some());

    let second = reconcile(&specific, &mut general, &mut ids);
    assert!(second.is_noop());
    assert_eq!(general.len(), 3);
}

#[test]
fn test_sync_waits_while_editing() {
    let (mut state, id) = with_specific("2020-01-01", "2020-01-10");
    state.suspend_sync();

    state
        .update_row(id, Some(d("2020-01-01")), Some(d("2020-01-31")))
        .expect("row exists");

    // specific follows at once, general still shows the old mirror
    assert_eq!(state.specific().total(), Period::new(0, 1, 1));
    assert_eq!(state.general().total(), Period::new(0, 0, 10));

    let report = state.resume_sync();
    assert!(!report.is_noop());
    assert!(!state.is_sync_suspended());
    assert_eq!(state.general().total(), Period::new(0, 1, 1));
    assert_eq!(derived_count(&state), 1);
}

#[test]
fn test_clear_fields_declined_changes_nothing() {
    let tr = es();
    let (mut state, _) = with_specific("2020-01-01", "2020-01-10");

    assert!(!state.clear_fields(TableKind::Specific, &mut FixedAnswer(false), &tr));
    assert_eq!(state.specific().total(), Period::new(0, 0, 10));
}

#[test]
fn test_clear_fields_empties_editable_rows_only() {
    let tr = es();
    let (mut state, id) = with_specific("2020-01-01", "2020-01-10");
    state.add_row(
        TableKind::General,
        Some(d("2020-05-01")),
        Some(d("2020-05-10")),
    );

    assert!(state.clear_fields(TableKind::General, &mut FixedAnswer(true), &tr));

    // the mirror survives, the general row keeps its place but loses its dates
    assert_eq!(derived_count(&state), 1);
    assert!(!state.general().has_editable_data());
    assert_eq!(state.general().total(), Period::new(0, 0, 10));
    assert!(state.find_row(id).expect("row").has_data());

    assert!(state.clear_fields(TableKind::Specific, &mut FixedAnswer(true), &tr));
    assert_eq!(derived_count(&state), 0);
    assert!(state.general().total().is_zero());
}

#[test]
fn test_records_keep_complete_rows_in_creation_order() {
    let (mut state, first) = with_specific("2020-01-01", "2020-01-10");
    let general = state.add_row(
        TableKind::General,
        Some(d("2020-05-01")),
        Some(d("2020-05-10")),
    );
    state.add_row(TableKind::General, Some(d("2020-06-01")), None);

    let records = state.to_records();
    let types: Vec<RowType> = records.iter().map(|r| r.row_type).collect();

    assert_eq!(records.len(), 3);
    assert!(types.contains(&RowType::Specific));
    assert!(types.contains(&RowType::Derived));
    assert!(types.contains(&RowType::General));
    assert!(records.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    assert_eq!(records[0].timestamp, first);
    assert!(records.iter().any(|r| r.timestamp == general));
}

#[test]
fn test_period_label_follows_language() {
    let p = Period::new(0, 0, 10);
    assert_eq!(es().period(&p), "0 años, 0 meses, 10 días");

    let en = Translations::load("en").expect("built-in en");
    assert_eq!(en.period(&p), "0 years, 0 months, 10 days");
}

#[test]
fn test_unknown_language_is_rejected() {
    assert!(matches!(
        Translations::load("fr"),
        Err(AppError::UnsupportedLanguage(_))
    ));
    assert_eq!(es().get("noSuchKey"), "noSuchKey");
}

#[test]
fn test_clock_ids_strictly_increase_within_one_millisecond() {
    let mut ids = ClockIds::default();
    let mut previous = ids.next_id();

    for _ in 0..10_000 {
        let next = ids.next_id();
        assert!(next > previous, "{next} after {previous}");
        previous = next;
    }
    assert_eq!(ids.last(), previous);
}

#[test]
fn test_clock_ids_jump_past_observed_id() {
    let mut ids = ClockIds::default();
    let far_future = ids.next_id() + 1_000_000_000;

    ids.observe(far_future);
    assert!(ids.next_id() > far_future);

    // an older id never pulls the counter back
    ids.observe(1);
    assert!(ids.next_id() > far_future + 1);
}
