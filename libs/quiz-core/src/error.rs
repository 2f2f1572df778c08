//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors reported by the card store, the scorer and the session engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("set not found: {0}")]
    SetNotFound(String),

    #[error("set {0} has no cards")]
    EmptySet(String),

    #[error("card index {index} out of range for set {set} ({count} cards)")]
    IndexOutOfRange {
        set: String,
        index: usize,
        count: usize,
    },

    #[error("no set selected")]
    NoSetSelected,

    #[error("no change sink registered")]
    NotReady,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
