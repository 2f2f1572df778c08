//! Fuzzy answer matching for typed guesses.
//!
//! A guess is scored by its Levenshtein distance to the accepted answer,
//! normalized by the answer length:
//!
//! ```text
//! score = (len(answer) - distance(lower(guess), lower(answer))) / len(answer)
//! ```
//!
//! and is correct when the score reaches the configured threshold.

use crate::error::{QuizError, Result};
use std::collections::HashMap;

/// Score a guess must reach to count as correct.
pub const DEFAULT_THRESHOLD: f64 = 0.90;

/// Upper bound on full-string results kept by a scorer between calls.
const RESULT_CACHE_CAPACITY: usize = 1024;

/// Memo of sub-results for one comparison, indexed by the start offsets of
/// the two remaining suffixes.
#[derive(Debug)]
struct SuffixMemo {
    width: usize,
    distances: Vec<usize>,
}

impl SuffixMemo {
    fn new(a_len: usize, b_len: usize) -> Self {
        let width = b_len + 1;
        Self {
            width,
            distances: vec![0; (a_len + 1) * width],
        }
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.distances[i * self.width + j]
    }

    fn set(&mut self, i: usize, j: usize, distance: usize) {
        self.distances[i * self.width + j] = distance;
    }
}

/// Minimum number of single-character insertions, deletions or substitutions
/// turning `a` into `b`.
///
/// Both inputs must already be normalized (lower-cased) by the caller.
///
/// Entry `(i, j)` of the memo holds the distance between `a[i..]` and
/// `b[j..]`. It is filled from the ends of both inputs towards the start, so
/// the three neighbours of an entry are always known before it.
pub fn edit_distance(a: &[char], b: &[char]) -> usize {
    let mut memo = SuffixMemo::new(a.len(), b.len());

    for i in (0..=a.len()).rev() {
        for j in (0..=b.len()).rev() {
            let distance = if i == a.len() {
                b.len() - j
            } else if j == b.len() {
                a.len() - i
            } else if a[i] == b[j] {
                memo.get(i + 1, j + 1)
            } else {
                let insertion = memo.get(i, j + 1);
                let deletion = memo.get(i + 1, j);
                let substitution = memo.get(i + 1, j + 1);
                1 + insertion.min(deletion).min(substitution)
            };
            memo.set(i, j, distance);
        }
    }

    memo.get(0, 0)
}

/// Lower-case a string into the character sequence the distance works on.
fn normalize(s: &str) -> Vec<char> {
    s.to_lowercase().chars().collect()
}

/// Correctness score of `guess` against `answer`, ignoring case.
///
/// The score is 1.0 for an exact match and may go negative when the distance
/// exceeds the answer length.
pub fn correctness_score(guess: &str, answer: &str) -> Result<f64> {
    let answer = normalize(answer);
    if answer.is_empty() {
        return Err(QuizError::InvalidInput("answer key is empty".to_string()));
    }
    let distance = edit_distance(&normalize(guess), &answer);
    Ok(score_from_distance(distance, answer.len()))
}

fn score_from_distance(distance: usize, answer_len: usize) -> f64 {
    (answer_len as f64 - distance as f64) / answer_len as f64
}

/// Scorer with a configurable threshold and a cache of full-string results.
///
/// Cache keys are the lower-cased strings, so guesses differing only in case
/// share an entry.
#[derive(Debug, Clone)]
pub struct EditDistanceScorer {
    threshold: f64,
    results: HashMap<(String, String), usize>,
}

impl Default for EditDistanceScorer {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl EditDistanceScorer {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            results: HashMap::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Same as [`correctness_score`], reusing results of earlier calls.
    pub fn correctness_score(&mut self, guess: &str, answer: &str) -> Result<f64> {
        let answer = answer.to_lowercase();
        if answer.is_empty() {
            return Err(QuizError::InvalidInput("answer key is empty".to_string()));
        }
        let guess = guess.to_lowercase();
        let answer_len = answer.chars().count();

        let key = (guess, answer);
        if let Some(&distance) = self.results.get(&key) {
            return Ok(score_from_distance(distance, answer_len));
        }

        let a: Vec<char> = key.0.chars().collect();
        let b: Vec<char> = key.1.chars().collect();
        let distance = edit_distance(&a, &b);
        if self.results.len() >= RESULT_CACHE_CAPACITY {
            self.results.clear();
        }
        self.results.insert(key, distance);

        Ok(score_from_distance(distance, answer_len))
    }

    /// Whether a score passes the threshold.
    pub fn is_correct(&self, score: f64) -> bool {
        score >= self.threshold
    }

    /// Number of full-string results currently cached.
    pub fn cached_results(&self) -> usize {
        self.results.len()
    }
}
