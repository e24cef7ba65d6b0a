//! Edit-distance accuracy scoring.
//!
//! A typed answer is scored against the reference answer by Levenshtein
//! distance over their normalized forms, turned into a 0–100 percentage
//! rounded to one decimal place.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::normalize::NormalizedText;

/// How an accuracy score was reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Levenshtein distance between the normalized answers.
    pub distance: usize,
    /// Length in characters of the longer normalized answer.
    pub max_len: usize,
    /// Accuracy in `[0, 100]`, one decimal place.
    pub accuracy: f64,
}

/// Accuracy of `user_answer` against `reference_answer`, in `[0, 100]`.
///
/// Symmetric in its arguments. Two answers that normalize to the same
/// text (including both empty) score exactly `100.0`.
pub fn accuracy(user_answer: &str, reference_answer: &str) -> f64 {
    score(user_answer, reference_answer).accuracy
}

/// Score two answers and keep the intermediate distance.
pub fn score(user_answer: &str, reference_answer: &str) -> ScoreBreakdown {
    let user = NormalizedText::new(user_answer);
    let reference = NormalizedText::new(reference_answer);
    let max_len = user.len().max(reference.len());

    if user == reference {
        return ScoreBreakdown {
            distance: 0,
            max_len,
            accuracy: 100.0,
        };
    }

    let distance = edit_distance(user.chars(), reference.chars());
    ScoreBreakdown {
        distance,
        max_len,
        accuracy: similarity_percent(distance, max_len),
    }
}

/// Levenshtein distance between two raw strings, counted in characters.
///
/// No normalization is applied; see [`score`] for the normalized variant.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance(&a, &b)
}

/// Classic `(m+1) x (n+1)` Levenshtein table; insert, delete and
/// substitute all cost 1.
pub(crate) fn edit_distance(a: &[char], b: &[char]) -> usize {
    let m = a.len();
    let n = b.len();
    let mut dp = Grid::new(m + 1, n + 1);

    for i in 0..=m {
        dp.set(i, 0, i);
    }
    for j in 0..=n {
        dp.set(0, j, j);
    }

    for i in 1..=m {
        for j in 1..=n {
            let value = if a[i - 1] == b[j - 1] {
                dp.get(i - 1, j - 1)
            } else {
                1 + dp
                    .get(i - 1, j) // deletion
                    .min(dp.get(i, j - 1)) // insertion
                    .min(dp.get(i - 1, j - 1)) // substitution
            };
            dp.set(i, j, value);
        }
    }

    dp.get(m, n)
}

/// `(max_len - distance) / max_len` as a percentage, floored at 0 and
/// rounded to one decimal.
fn similarity_percent(distance: usize, max_len: usize) -> f64 {
    if max_len == 0 {
        return 100.0;
    }
    let ratio = (max_len as f64 - distance as f64) / max_len as f64 * 100.0;
    round_to_tenth(ratio.max(0.0))
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
