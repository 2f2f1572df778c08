//! Core types for the quiz engine.

use serde::{Deserialize, Serialize};

/// Kind of asset a card displays.
///
/// Only images are understood today. Unknown tags are kept verbatim so that
/// newer sets documents still load. The image tag is matched ignoring case and
/// always written back as `IMAGE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetType {
    Image,
    Other(String),
}

impl AssetType {
    /// Get the tag as written in a sets document.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Image => "IMAGE",
            Self::Other(tag) => tag.as_str(),
        }
    }
}

impl From<String> for AssetType {
    fn from(tag: String) -> Self {
        if tag.eq_ignore_ascii_case("image") {
            Self::Image
        } else {
            Self::Other(tag)
        }
    }
}

impl From<AssetType> for String {
    fn from(asset_type: AssetType) -> Self {
        match asset_type {
            AssetType::Image => "IMAGE".to_string(),
            AssetType::Other(tag) => tag,
        }
    }
}

/// A single question/answer unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// The accepted answer.
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub asset_path: String,
    pub asset_type: AssetType,
}

impl Card {
    /// Create an image card without a hint.
    pub fn image(key: impl Into<String>, asset_path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            hint: None,
            asset_path: asset_path.into(),
            asset_type: AssetType::Image,
        }
    }

    /// Attach a hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Named, ordered collection of cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashcardSet {
    pub name: String,
    pub cards: Vec<Card>,
}

impl FlashcardSet {
    pub fn new(name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }
}

/// Live counters of a session. Only the engine mutates this.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_set_name: Option<String>,
    pub card_index: usize,
    pub correct_streak: u32,
    pub num_correct: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_guess_correct: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_score: Option<f64>,
}

impl SessionState {
    /// Fresh counters for a newly selected set.
    pub fn started(set_name: &str) -> Self {
        Self {
            selected_set_name: Some(set_name.to_string()),
            ..Self::default()
        }
    }
}

/// Immutable copy of the session pushed to the change sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub selected_set_name: String,
    pub card_count: usize,
    pub card_index: usize,
    pub current_card: Card,
    pub correct_streak: u32,
    pub num_correct: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_guess_correct: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_score: Option<f64>,
    pub set_names: Vec<String>,
}

/// Result of judging one guess.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuessOutcome {
    /// Correctness score; negative when the guess is far off a short key.
    pub score: f64,
    pub is_correct: bool,
    /// Whether this guess finished a lap through the set.
    pub wrapped: bool,
}
