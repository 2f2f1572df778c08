//! Engine settings.

use crate::error::{QuizError, Result};
use crate::matching::DEFAULT_THRESHOLD;
use crate::ordering::{get_ordering, CardOrdering};
use serde::{Deserialize, Serialize};

/// Settings passed to the engine at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    /// Minimum correctness score for a guess to count as correct.
    pub threshold: f64,
    /// Reset streak and correct count whenever the last card is passed.
    pub reset_on_wrap: bool,
    /// Name of the card ordering, see [`get_ordering`].
    pub ordering: String,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            reset_on_wrap: true,
            ordering: "sequential".to_string(),
        }
    }
}

impl QuizSettings {
    /// Override the threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Override the wraparound policy.
    pub fn with_reset_on_wrap(mut self, reset_on_wrap: bool) -> Self {
        self.reset_on_wrap = reset_on_wrap;
        self
    }

    /// Check the settings and resolve the card ordering.
    pub fn validate(&self) -> Result<Box<dyn CardOrdering>> {
        if !self.threshold.is_finite() {
            return Err(QuizError::InvalidConfiguration(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }
        get_ordering(&self.ordering).ok_or_else(|| {
            QuizError::InvalidConfiguration(format!("unknown card ordering {}", self.ordering))
        })
    }
}
