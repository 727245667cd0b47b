use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which of the two experience tables a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    #[value(alias = "s")]
    Specific,
    #[value(alias = "g")]
    General,
}

impl TableKind {
    /// Translation key of the table heading.
    pub fn title_key(&self) -> &'static str {
        match self {
            TableKind::Specific => "specificExperience",
            TableKind::General => "generalExperience",
        }
    }

    pub fn is_specific(&self) -> bool {
        matches!(self, TableKind::Specific)
    }

    pub fn is_general(&self) -> bool {
        matches!(self, TableKind::General)
    }
}
