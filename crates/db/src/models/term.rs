//! Term entity model, DTOs, and the supported-language set.

use std::fmt;
use std::str::FromStr;

use pricelist_core::error::CoreError;
use pricelist_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Languages a term can be stored and queried in.
///
/// This is the single source of truth for the allow-list: the `terms` table
/// CHECK constraint, the body deserializer, and the path-parameter parser all
/// derive from it, so the stored set and the queryable set cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum Language {
    En,
    Sv,
    Fr,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Sv => "sv",
            Language::Fr => "fr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "sv" => Ok(Language::Sv),
            "fr" => Ok(Language::Fr),
            _ => Err(CoreError::Validation("Invalid language parameter".into())),
        }
    }
}

/// A row from the `terms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Term {
    pub id: DbId,
    pub language: Language,
    pub section_key: String,
    pub title: String,
    pub content: String,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new term.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTerm {
    pub language: Language,
    pub section_key: String,
    pub title: String,
    pub content: String,
    /// Defaults to 0 if omitted.
    pub order_index: Option<i32>,
    /// Defaults to true if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating an existing term. All fields are optional.
///
/// The whitelist of updatable columns: `id` and the timestamps are
/// system-managed and cannot be written through it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTerm {
    pub language: Option<Language>,
    pub section_key: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_round_trips_through_str() {
        for lang in [Language::En, Language::Sv, Language::Fr] {
            assert_eq!(lang.as_str().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn unknown_language_is_rejected() {
        assert!("de".parse::<Language>().is_err());
        assert!("EN".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }
}
