//! Saved calculations, the edit hand-off slots and the stored worksheet.

use crate::core::state::AppState;
use crate::db::store::KvStore;
use crate::errors::{AppError, AppResult};
use crate::models::calculation::Calculation;
use chrono::Utc;

pub const SAVED_KEY: &str = "savedCalculations";
/// Filled by the listing view, consumed once by the worksheet.
pub const TRANSFER_KEY: &str = "loadCalculation";
/// Held for the whole edit session; cleared on save or cancel.
pub const EDITING_KEY: &str = "editingCalculation";
pub const WORKSHEET_KEY: &str = "worksheet";

/// A calculation currently loaded for editing.
#[derive(Debug, Clone, PartialEq)]
pub struct EditingSession {
    pub calculation: Calculation,
}

impl EditingSession {
    pub fn id(&self) -> i64 {
        self.calculation.id
    }
}

fn read_json<T, S>(store: &S, key: &str) -> AppResult<Option<T>>
where
    T: serde::de::DeserializeOwned,
    S: KvStore + ?Sized,
{
    match store.get(key)? {
        Some(raw) if !raw.trim().is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
        _ => Ok(None),
    }
}

fn write_json<T, S>(store: &mut S, key: &str, value: &T) -> AppResult<()>
where
    T: serde::Serialize,
    S: KvStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Every saved calculation; a missing collection is an empty one.
pub fn load_all<S: KvStore + ?Sized>(store: &S) -> AppResult<Vec<Calculation>> {
    Ok(read_json(store, SAVED_KEY)?.unwrap_or_default())
}

/// Rewrite the whole collection.
pub fn store_all<S: KvStore + ?Sized>(store: &mut S, all: &[Calculation]) -> AppResult<()> {
    write_json(store, SAVED_KEY, &all)
}

pub fn find<S: KvStore + ?Sized>(store: &S, id: i64) -> AppResult<Option<Calculation>> {
    Ok(load_all(store)?.into_iter().find(|c| c.id == id))
}

/// Append a new record.
pub fn insert<S: KvStore + ?Sized>(store: &mut S, calc: Calculation) -> AppResult<()> {
    let mut all = load_all(store)?;
    all.push(calc);
    store_all(store, &all)
}

/// Replace the record with the same id.
pub fn update<S: KvStore + ?Sized>(store: &mut S, calc: Calculation) -> AppResult<()> {
    let mut all = load_all(store)?;
    let slot = all
        .iter_mut()
        .find(|c| c.id == calc.id)
        .ok_or(AppError::CalculationNotFound(calc.id))?;
    *slot = calc;
    store_all(store, &all)
}

/// Remove a record; `false` when there was nothing to remove.
pub fn delete<S: KvStore + ?Sized>(store: &mut S, id: i64) -> AppResult<bool> {
    let mut all = load_all(store)?;
    let before = all.len();
    all.retain(|c| c.id != id);

    if all.len() == before {
        return Ok(false);
    }

    store_all(store, &all)?;
    Ok(true)
}

/// Time-based id, strictly greater than every id already in `existing`.
pub fn next_calculation_id(existing: &[Calculation]) -> i64 {
    let now = Utc::now().timestamp_millis();
    let max = existing.iter().map(|c| c.id).max().unwrap_or(0);
    now.max(max + 1)
}

/// Put a saved record in the transfer slot for the worksheet to pick up.
pub fn stage_for_edit<S: KvStore + ?Sized>(store: &mut S, id: i64) -> AppResult<Calculation> {
    let calc = find(store, id)?.ok_or(AppError::CalculationNotFound(id))?;
    write_json(store, TRANSFER_KEY, &calc)?;
    Ok(calc)
}

/// Consume the transfer slot. The record moves to the editing slot.
pub fn take_transfer<S: KvStore + ?Sized>(store: &mut S) -> AppResult<Option<EditingSession>> {
    let staged: Option<Calculation> = read_json(store, TRANSFER_KEY)?;
    let Some(calculation) = staged else {
        return Ok(None);
    };

    store.remove(TRANSFER_KEY)?;
    write_json(store, EDITING_KEY, &calculation)?;

    Ok(Some(EditingSession { calculation }))
}

pub fn editing<S: KvStore + ?Sized>(store: &S) -> AppResult<Option<EditingSession>> {
    let calc: Option<Calculation> = read_json(store, EDITING_KEY)?;
    Ok(calc.map(|calculation| EditingSession { calculation }))
}

pub fn end_editing<S: KvStore + ?Sized>(store: &mut S) -> AppResult<()> {
    store.remove(EDITING_KEY)
}

/// The stored worksheet, or a fresh one.
pub fn load_worksheet<S: KvStore + ?Sized>(store: &S, language: &str) -> AppResult<AppState> {
    Ok(read_json(store, WORKSHEET_KEY)?.unwrap_or_else(|| AppState::new(language)))
}

pub fn store_worksheet<S: KvStore + ?Sized>(store: &mut S, state: &AppState) -> AppResult<()> {
    write_json(store, WORKSHEET_KEY, state)
}
