//! Flashcard quiz engine.
//!
//! Provides:
//! - Fuzzy answer matching (memoized Levenshtein distance, normalized score)
//! - Immutable card store with validation at load time
//! - Session state machine tracking streak and correct count
//! - Loader for JSON sets documents
//! - Change sink boundary for presentation layers

pub mod config;
pub mod error;
pub mod loader;
pub mod matching;
pub mod ordering;
pub mod session;
pub mod sink;
pub mod store;
pub mod types;

pub use config::QuizSettings;
pub use error::{QuizError, Result};
pub use matching::{correctness_score, edit_distance, EditDistanceScorer, DEFAULT_THRESHOLD};
pub use ordering::{get_ordering, CardOrdering, SequentialOrdering};
pub use session::SessionEngine;
pub use sink::ChangeSink;
pub use store::CardStore;
pub use types::{
    AssetType, Card, FlashcardSet, GuessOutcome, SessionSnapshot, SessionState,
};
