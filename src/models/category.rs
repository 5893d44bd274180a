//! Expense categories
//!
//! The category set is closed: ten fixed values in a fixed display order.
//! Serialized with their French labels, which is also how they appear in
//! exports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::fold_accents;

/// One of the ten fixed expense categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Alimentation")]
    Alimentation,
    #[serde(rename = "Transport")]
    Transport,
    #[serde(rename = "Logement")]
    Logement,
    #[serde(rename = "Divertissement")]
    Divertissement,
    #[serde(rename = "Éducation")]
    Education,
    #[serde(rename = "Épargne")]
    Epargne,
    #[serde(rename = "Investissements")]
    Investissements,
    #[serde(rename = "Santé")]
    Sante,
    #[serde(rename = "Charges Fixes")]
    ChargesFixes,
    #[serde(rename = "Divers")]
    Divers,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 10] = [
        Category::Alimentation,
        Category::Transport,
        Category::Logement,
        Category::Divertissement,
        Category::Education,
        Category::Epargne,
        Category::Investissements,
        Category::Sante,
        Category::ChargesFixes,
        Category::Divers,
    ];

    /// French display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Alimentation => "Alimentation",
            Self::Transport => "Transport",
            Self::Logement => "Logement",
            Self::Divertissement => "Divertissement",
            Self::Education => "Éducation",
            Self::Epargne => "Épargne",
            Self::Investissements => "Investissements",
            Self::Sante => "Santé",
            Self::ChargesFixes => "Charges Fixes",
            Self::Divers => "Divers",
        }
    }

    /// ASCII slug accepted on the command line (`charges-fixes`, `education`)
    pub fn slug(&self) -> String {
        fold_accents(self.label()).replace(' ', "-")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Accepts the exact label, or any spelling that matches it once case,
    /// accents, spaces, dashes and underscores are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label() == s.trim() || normalize(c.label()) == wanted)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    fold_accents(s.trim())
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .collect()
}

/// Error for unknown category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for CategoryParseError {}
