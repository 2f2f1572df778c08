//! Loader for sets documents.
//!
//! # Format
//! ```json
//! [
//!     {
//!         "name": "capitals",
//!         "cards": [
//!             { "path": "img/france.png", "type": "IMAGE", "key": "Paris" },
//!             { "path": "img/peru.png", "type": "IMAGE", "key": "Lima", "hint": "South America" }
//!         ]
//!     }
//! ]
//! ```
//!
//! Shape errors are reported here; semantic checks (non-empty sets and keys,
//! unique names) are left to [`CardStore::new`](crate::store::CardStore::new).

use crate::error::{QuizError, Result};
use crate::types::{AssetType, Card, FlashcardSet};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct SetEntry {
    name: String,
    cards: Vec<CardEntry>,
}

#[derive(Debug, Deserialize)]
struct CardEntry {
    path: String,
    #[serde(rename = "type")]
    asset_type: AssetType,
    key: String,
    #[serde(default)]
    hint: Option<String>,
}

impl From<CardEntry> for Card {
    fn from(entry: CardEntry) -> Self {
        Self {
            key: entry.key,
            hint: entry.hint,
            asset_path: entry.path,
            asset_type: entry.asset_type,
        }
    }
}

impl From<SetEntry> for FlashcardSet {
    fn from(entry: SetEntry) -> Self {
        Self {
            name: entry.name,
            cards: entry.cards.into_iter().map(Card::from).collect(),
        }
    }
}

/// Parse a sets document.
pub fn parse_sets(content: &str) -> Result<Vec<FlashcardSet>> {
    let entries: Vec<SetEntry> = serde_json::from_str(content).map_err(invalid)?;
    Ok(entries.into_iter().map(FlashcardSet::from).collect())
}

/// Read and parse a sets document.
pub fn read_sets<R: Read>(reader: R) -> Result<Vec<FlashcardSet>> {
    let entries: Vec<SetEntry> = serde_json::from_reader(reader).map_err(invalid)?;
    Ok(entries.into_iter().map(FlashcardSet::from).collect())
}

fn invalid(err: serde_json::Error) -> QuizError {
    QuizError::InvalidConfiguration(format!("malformed sets document: {}", err))
}
