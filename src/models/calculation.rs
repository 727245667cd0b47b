use super::date_range::DateRange;
use super::period::Period;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Origin of a persisted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowType {
    Specific,
    General,
    /// Read-only general row mirrored from a specific one.
    Derived,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowRecord {
    #[serde(rename = "type")]
    pub row_type: RowType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub timestamp: i64,
}

/// Entry of the older `specificData` / `generalData` sequences (no type, no timestamp).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl LegacyRange {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// A saved, named snapshot of both tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub registro_number: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<RowRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specific_data: Vec<LegacyRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub general_data: Vec<LegacyRange>,
    #[serde(default)]
    pub total_specific: Period,
    #[serde(default)]
    pub total_general: Period,
    #[serde(default = "Utc::now")]
    pub saved_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Calculation {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Records written before typed rows existed only carry the legacy sequences.
    pub fn is_legacy(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Registration numbers were stored as text, but accept bare numbers too.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n.to_string(),
        Raw::Text(s) => s,
    })
}
