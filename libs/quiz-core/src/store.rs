//! Immutable collection of flashcard sets.

use crate::error::{QuizError, Result};
use crate::loader;
use crate::types::{Card, FlashcardSet};
use std::collections::HashMap;

/// Loaded flashcard sets, validated once at construction.
///
/// Every set is non-empty, every card has a non-empty key and set names are
/// unique. Nothing mutates the store afterwards.
#[derive(Debug, Clone)]
pub struct CardStore {
    sets: Vec<FlashcardSet>,
    by_name: HashMap<String, usize>,
}

impl CardStore {
    /// Build a store, rejecting the whole collection if any set is invalid.
    pub fn new(sets: Vec<FlashcardSet>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(sets.len());

        for (idx, set) in sets.iter().enumerate() {
            if set.cards.is_empty() {
                return Err(QuizError::InvalidConfiguration(format!(
                    "set {} has no cards",
                    set.name
                )));
            }
            if let Some(pos) = set.cards.iter().position(|card| card.key.is_empty()) {
                return Err(QuizError::InvalidConfiguration(format!(
                    "card {} in set {} has an empty key",
                    pos, set.name
                )));
            }
            if by_name.insert(set.name.clone(), idx).is_some() {
                return Err(QuizError::InvalidConfiguration(format!(
                    "duplicate set name {}",
                    set.name
                )));
            }
        }

        tracing::debug!(sets = sets.len(), "card store loaded");
        Ok(Self { sets, by_name })
    }

    /// Parse a sets document and build a store from it.
    pub fn from_json(content: &str) -> Result<Self> {
        Self::new(loader::parse_sets(content)?)
    }

    /// Set names in load order.
    pub fn set_names(&self) -> Vec<String> {
        self.sets.iter().map(|set| set.name.clone()).collect()
    }

    pub fn get_set(&self, name: &str) -> Result<&FlashcardSet> {
        self.by_name
            .get(name)
            .map(|&idx| &self.sets[idx])
            .ok_or_else(|| QuizError::SetNotFound(name.to_string()))
    }

    pub fn card_count(&self, set: &FlashcardSet) -> usize {
        set.cards.len()
    }

    pub fn card_at<'a>(&self, set: &'a FlashcardSet, index: usize) -> Result<&'a Card> {
        set.cards.get(index).ok_or_else(|| QuizError::IndexOutOfRange {
            set: set.name.clone(),
            index,
            count: set.cards.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
