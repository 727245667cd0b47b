//! Confirmation capability injected into destructive operations.

use crate::i18n::Translations;
use crate::models::table_kind::TableKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl Prompt {
    fn build(tr: &Translations, title: &str, text: String, action_key: &str) -> Self {
        Self {
            title: tr.get(title).to_string(),
            text,
            confirm_label: tr.fill(
                "confirmButton",
                "action",
                &tr.get(action_key).to_lowercase(),
            ),
            cancel_label: tr.get("cancelButton").to_string(),
        }
    }

    pub fn remove_row(tr: &Translations, kind: TableKind) -> Self {
        let text = tr.fill("confirmDeleteText", "tableName", tr.table_name(kind));
        Self::build(tr, "confirmDeleteTitle", text, "remove")
    }

    pub fn clear_table(tr: &Translations, kind: TableKind) -> Self {
        let text = tr.fill("confirmClearText", "tableName", tr.table_name(kind));
        Self::build(tr, "confirmClearTitle", text, "clearFields")
    }

    pub fn save(tr: &Translations, name: &str) -> Self {
        let text = tr.fill("confirmSaveText", "name", name);
        Self::build(tr, "saveDialogTitle", text, "saveCalculation")
    }

    pub fn delete_calculation(tr: &Translations) -> Self {
        let text = tr.get("confirmDeleteCalcText").to_string();
        Self::build(tr, "confirmDeleteCalcTitle", text, "delete")
    }
}

/// Answers a prompt. Returning `false` must leave every table untouched.
pub trait Confirm {
    fn confirm(&mut self, prompt: &Prompt) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&Prompt) -> bool,
{
    fn confirm(&mut self, prompt: &Prompt) -> bool {
        self(prompt)
    }
}

/// Fixed answer, for `--yes` and non-interactive callers.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, _prompt: &Prompt) -> bool {
        self.0
    }
}
