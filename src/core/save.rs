//! Saving the worksheet as a named calculation.

use crate::core::confirm::{Confirm, Prompt};
use crate::core::persistence::{self, EditingSession};
use crate::core::state::AppState;
use crate::db::store::KvStore;
use crate::errors::{AppError, AppResult};
use crate::i18n::Translations;
use crate::models::calculation::Calculation;
use chrono::Utc;

/// Who the calculation belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveDetails {
    pub registro_number: String,
    pub first_name: String,
    pub last_name: String,
}

impl SaveDetails {
    pub fn new(registro_number: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            registro_number: registro_number.trim().to_string(),
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
        }
    }

    fn from_calculation(calc: &Calculation) -> Self {
        Self::new(&calc.registro_number, &calc.first_name, &calc.last_name)
    }

    /// Registration number must be a positive integer; names non-empty.
    pub fn validate(&self, tr: &Translations) -> AppResult<()> {
        if self.registro_number.is_empty() || self.first_name.is_empty() || self.last_name.is_empty()
        {
            return Err(AppError::Validation(tr.get("saveErrorText").to_string()));
        }

        // solo cifre: niente segno, spazi o separatori
        if !self.registro_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::Validation(
                tr.get("registroNumberInvalid").to_string(),
            ));
        }

        match self.registro_number.parse::<u64>() {
            Ok(n) if n > 0 => Ok(()),
            _ => Err(AppError::Validation(
                tr.get("registroNumberInvalid").to_string(),
            )),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(i64),
    Updated(i64),
    Cancelled,
}

fn snapshot(state: &AppState, id: i64, details: &SaveDetails) -> Calculation {
    Calculation {
        id,
        registro_number: details.registro_number.clone(),
        first_name: details.first_name.clone(),
        last_name: details.last_name.clone(),
        rows: state.to_records(),
        specific_data: Vec::new(),
        general_data: Vec::new(),
        total_specific: state.specific().total(),
        total_general: state.general().total(),
        saved_date: Utc::now(),
        language: Some(state.language.clone()),
    }
}

/// Save the worksheet.
///
/// - no edit session: `details` are required and a new record is appended;
/// - edit session: the loaded record is replaced in place (same id), or
///   copied under a fresh id when `as_new` is set. A loaded record that no
///   longer exists is reported instead of being silently recreated.
///
/// On success the edit session ends and every editable date is cleared.
pub fn save_calculation<S: KvStore + ?Sized>(
    state: &mut AppState,
    store: &mut S,
    confirm: &mut dyn Confirm,
    tr: &Translations,
    details: Option<SaveDetails>,
    as_new: bool,
) -> AppResult<SaveOutcome> {
    let session: Option<EditingSession> = persistence::editing(store)?;

    let details = match (&session, details) {
        (_, Some(d)) => d,
        (Some(s), None) => SaveDetails::from_calculation(&s.calculation),
        (None, None) => return Err(AppError::Validation(tr.get("saveErrorText").to_string())),
    };
    details.validate(tr)?;

    // The record open for editing may have been removed meanwhile
    if let Some(s) = &session
        && !as_new
        && persistence::find(store, s.id())?.is_none()
    {
        return Err(AppError::EditedCalculationMissing(s.id()));
    }

    if !confirm.confirm(&Prompt::save(tr, &details.full_name())) {
        return Ok(SaveOutcome::Cancelled);
    }

    // The session ends here: mirrors and general total must be current
    // before the snapshot is taken.
    state.resume_sync();

    let outcome = match session {
        Some(s) if !as_new => {
            let record = snapshot(state, s.id(), &details);
            persistence::update(store, record)?;
            SaveOutcome::Updated(s.id())
        }
        _ => {
            let id = persistence::next_calculation_id(&persistence::load_all(store)?);
            persistence::insert(store, snapshot(state, id, &details))?;
            SaveOutcome::Created(id)
        }
    };

    persistence::end_editing(store)?;
    state.clear_all();

    Ok(outcome)
}

/// Drop the edit session without saving; the worksheet keeps its rows.
pub fn cancel_editing<S: KvStore + ?Sized>(state: &mut AppState, store: &mut S) -> AppResult<bool> {
    let was_editing = persistence::editing(store)?.is_some();
    persistence::end_editing(store)?;
    state.resume_sync();
    Ok(was_editing)
}

/// Delete a saved record after confirmation. `Ok(false)` when declined.
pub fn delete_calculation<S: KvStore + ?Sized>(
    store: &mut S,
    confirm: &mut dyn Confirm,
    tr: &Translations,
    id: i64,
) -> AppResult<bool> {
    if persistence::find(store, id)?.is_none() {
        return Err(AppError::CalculationNotFound(id));
    }

    if !confirm.confirm(&Prompt::delete_calculation(tr)) {
        return Ok(false);
    }

    persistence::delete(store, id)
}
