//! Built-in translation tables.
//!
//! Strings ship inside the binary (`lang/*.json`); the engine itself only
//! needs the lower-cased unit names appended to computed numbers.

use crate::errors::{AppError, AppResult};
use crate::models::period::Period;
use crate::models::table_kind::TableKind;
use std::collections::HashMap;

const ES: &str = include_str!("../lang/es.json");
const EN: &str = include_str!("../lang/en.json");

pub const DEFAULT_LANGUAGE: &str = "es";
pub const SUPPORTED_LANGUAGES: &[&str] = &["es", "en"];

#[derive(Debug, Clone)]
pub struct Translations {
    code: String,
    strings: HashMap<String, String>,
}

impl Translations {
    pub fn load(code: &str) -> AppResult<Self> {
        let code = code.trim().to_lowercase();
        let raw = match code.as_str() {
            "es" => ES,
            "en" => EN,
            _ => return Err(AppError::UnsupportedLanguage(code)),
        };

        let strings: HashMap<String, String> = serde_json::from_str(raw)?;
        Ok(Self { code, strings })
    }

    pub fn is_supported(code: &str) -> bool {
        SUPPORTED_LANGUAGES.contains(&code.trim().to_lowercase().as_str())
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Localized text for `key`; the key itself when missing.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Localized text with one `{placeholder}` substituted.
    pub fn fill(&self, key: &str, placeholder: &str, value: &str) -> String {
        self.get(key).replace(&format!("{{{placeholder}}}"), value)
    }

    pub fn table_name(&self, kind: TableKind) -> &str {
        self.get(kind.title_key())
    }

    /// "1 años, 2 meses, 3 días"
    pub fn period(&self, p: &Period) -> String {
        format!(
            "{} {}, {} {}, {} {}",
            p.years,
            self.get("years").to_lowercase(),
            p.months,
            self.get("months").to_lowercase(),
            p.days,
            self.get("days").to_lowercase()
        )
    }
}
