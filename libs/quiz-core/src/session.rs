//! Quiz session state machine.
//!
//! The engine starts with no set selected. Selecting a set resets every
//! counter and shows its first card; each guess is judged against the
//! current card's key and moves on to the next card, cycling back to the
//! first card after the last one. Every state change is pushed to the
//! registered [`ChangeSink`] as a [`SessionSnapshot`].

use crate::config::QuizSettings;
use crate::error::{QuizError, Result};
use crate::matching::EditDistanceScorer;
use crate::ordering::CardOrdering;
use crate::sink::ChangeSink;
use crate::store::CardStore;
use crate::types::{Card, GuessOutcome, SessionSnapshot, SessionState};

/// Owns the live session over a [`CardStore`].
///
/// The engine does no locking; callers sharing it between threads must
/// serialize access themselves.
pub struct SessionEngine {
    store: CardStore,
    scorer: EditDistanceScorer,
    ordering: Box<dyn CardOrdering>,
    reset_on_wrap: bool,
    sink: Option<Box<dyn ChangeSink>>,
    state: SessionState,
    /// Card positions of the selected set, in the order they are shown.
    sequence: Vec<usize>,
}

impl std::fmt::Debug for SessionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEngine")
            .field("ordering", &self.ordering.name())
            .field("threshold", &self.scorer.threshold())
            .field("reset_on_wrap", &self.reset_on_wrap)
            .field("sink_registered", &self.sink.is_some())
            .field("state", &self.state)
            .finish()
    }
}

impl SessionEngine {
    /// Create an engine, validating the settings.
    pub fn new(store: CardStore, settings: &QuizSettings) -> Result<Self> {
        let ordering = settings.validate()?;
        Ok(Self {
            store,
            scorer: EditDistanceScorer::new(settings.threshold),
            ordering,
            reset_on_wrap: settings.reset_on_wrap,
            sink: None,
            state: SessionState::default(),
            sequence: Vec::new(),
        })
    }

    /// Create an engine with [`QuizSettings::default`].
    pub fn with_defaults(store: CardStore) -> Result<Self> {
        Self::new(store, &QuizSettings::default())
    }

    /// Register the sink snapshots are pushed to, returning the one it replaces.
    pub fn register_sink<S>(&mut self, sink: S) -> Option<Box<dyn ChangeSink>>
    where
        S: ChangeSink + 'static,
    {
        self.sink.replace(Box::new(sink))
    }

    /// Start a fresh session on the named set.
    ///
    /// On failure the previous session is left untouched.
    pub fn select_set(&mut self, name: &str) -> Result<()> {
        self.ensure_ready()?;

        let set = self.store.get_set(name).inspect_err(|err| {
            tracing::warn!(%err, "set selection rejected");
        })?;
        let card_count = self.store.card_count(set);
        if card_count == 0 {
            tracing::warn!(set = name, "set selection rejected: no cards");
            return Err(QuizError::EmptySet(name.to_string()));
        }

        self.sequence = self.ordering.sequence(card_count);
        self.state = SessionState::started(name);
        tracing::debug!(set = name, cards = card_count, "set selected");

        self.notify()
    }

    /// Judge a guess against the current card and move to the next card.
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome> {
        self.ensure_ready()?;

        let key = self.current_card()?.key.clone();
        let card_count = self.sequence.len();
        let score = self.scorer.correctness_score(text, &key)?;
        let is_correct = self.scorer.is_correct(score);

        let mut next = self.state.clone();
        if is_correct {
            next.num_correct += 1;
            next.correct_streak += 1;
        } else {
            next.correct_streak = 0;
        }
        next.previous_guess_correct = Some(is_correct);
        next.last_score = Some(score);
        tracing::debug!(score, is_correct, card = next.card_index, "guess judged");

        next.card_index += 1;
        let wrapped = next.card_index >= card_count;
        if wrapped {
            next.card_index = 0;
            if self.reset_on_wrap {
                next.correct_streak = 0;
                next.num_correct = 0;
            }
            self.sequence = self.ordering.sequence(card_count);
            tracing::debug!(
                set = next.selected_set_name.as_deref().unwrap_or_default(),
                "session wrapped"
            );
        }
        self.state = next;

        self.notify()?;
        Ok(GuessOutcome {
            score,
            is_correct,
            wrapped,
        })
    }

    /// Card currently shown.
    pub fn current_card(&self) -> Result<&Card> {
        let name = self
            .state
            .selected_set_name
            .as_deref()
            .ok_or(QuizError::NoSetSelected)?;
        let set = self.store.get_set(name)?;
        let position = self
            .sequence
            .get(self.state.card_index)
            .copied()
            .ok_or_else(|| QuizError::IndexOutOfRange {
                set: name.to_string(),
                index: self.state.card_index,
                count: self.sequence.len(),
            })?;
        self.store.card_at(set, position)
    }

    /// Copy of the session as the sink would receive it.
    pub fn snapshot(&self) -> Result<SessionSnapshot> {
        let current_card = self.current_card()?.clone();
        Ok(SessionSnapshot {
            selected_set_name: self
                .state
                .selected_set_name
                .clone()
                .unwrap_or_default(),
            card_count: self.sequence.len(),
            card_index: self.state.card_index,
            current_card,
            correct_streak: self.state.correct_streak,
            num_correct: self.state.num_correct,
            previous_guess_correct: self.state.previous_guess_correct,
            last_score: self.state.last_score,
            set_names: self.store.set_names(),
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn set_names(&self) -> Vec<String> {
        self.store.set_names()
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.sink.is_none() {
            tracing::warn!("operation rejected: no change sink registered");
            return Err(QuizError::NotReady);
        }
        Ok(())
    }

    fn notify(&mut self) -> Result<()> {
        let snapshot = self.snapshot()?;
        if let Some(sink) = self.sink.as_mut() {
            sink.notify(snapshot);
        }
        Ok(())
    }
}
