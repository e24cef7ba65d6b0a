//! Attempt statistics over the answer history.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classify::AccuracyBand;
use crate::model::{Question, QuizResult};

/// Attempts and average accuracy for one question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionStats {
    /// Question identifier.
    pub question_id: u32,
    /// Question prompt.
    pub prompt: String,
    /// Number of recorded attempts.
    pub attempts: usize,
    /// Mean accuracy over all attempts, 0 when there are none.
    pub average_accuracy: f64,
    /// Best accuracy reached, if any attempt exists.
    pub best_accuracy: Option<f64>,
    /// The attempts themselves, oldest first.
    pub results: Vec<QuizResult>,
}

/// Totals over a set of results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistorySummary {
    /// Number of results summarized.
    pub total_attempts: usize,
    /// Mean accuracy over every result, 0 for an empty history.
    pub average_accuracy: f64,
    /// How many results fall in each band.
    pub per_band: BTreeMap<AccuracyBand, usize>,
}

/// Group `history` by question.
///
/// Every question gets an entry, attempted or not, ordered by id. Results
/// pointing at questions that no longer exist are left out.
pub fn compute_question_stats(questions: &[Question], history: &[QuizResult]) -> Vec<QuestionStats> {
    let mut per_question: BTreeMap<u32, QuestionStats> = questions
        .iter()
        .map(|q| {
            (
                q.id,
                QuestionStats {
                    question_id: q.id,
                    prompt: q.prompt.clone(),
                    attempts: 0,
                    average_accuracy: 0.0,
                    best_accuracy: None,
                    results: Vec::new(),
                },
            )
        })
        .collect();

    for result in history {
        match per_question.get_mut(&result.question_id) {
            Some(stats) => stats.results.push(result.clone()),
            None => tracing::debug!(
                question_id = result.question_id,
                "result for unknown question left out of statistics"
            ),
        }
    }

    per_question
        .into_values()
        .map(|mut stats| {
            stats.attempts = stats.results.len();
            stats.average_accuracy = mean_accuracy(&stats.results);
            stats.best_accuracy = stats
                .results
                .iter()
                .map(|r| r.accuracy)
                .fold(None, |best: Option<f64>, a| Some(best.map_or(a, |b| b.max(a))));
            stats
        })
        .collect()
}

/// Totals and band distribution over the whole history.
pub fn summarize_history(history: &[QuizResult]) -> HistorySummary {
    let mut per_band = BTreeMap::new();
    for result in history {
        *per_band
            .entry(AccuracyBand::from_score(result.accuracy))
            .or_insert(0) += 1;
    }

    HistorySummary {
        total_attempts: history.len(),
        average_accuracy: mean_accuracy(history),
        per_band,
    }
}

/// Totals and band distribution over the attempts in `stats`.
///
/// Only results grouped under a stored question are counted, so the totals
/// match a table built from the same `stats`.
pub fn summarize_question_stats(stats: &[QuestionStats]) -> HistorySummary {
    let results: Vec<QuizResult> = stats.iter().flat_map(|s| s.results.iter().cloned()).collect();
    summarize_history(&results)
}

fn mean_accuracy(results: &[QuizResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    results.iter().map(|r| r.accuracy).sum::<f64>() / results.len() as f64
}
