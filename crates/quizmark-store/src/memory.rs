//! In-memory stores for tests and embedding.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::Result;

use quizmark_core::model::{next_question_id, Question, QuizResult};
use quizmark_core::traits::{HistoryStore, QuestionStore};

use crate::error::StoreError;

/// Questions held in memory.
#[derive(Debug, Default)]
pub struct MemoryQuestionStore {
    questions: Mutex<Vec<Question>>,
}

impl MemoryQuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with questions.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: Mutex::new(questions),
        }
    }
}

impl QuestionStore for MemoryQuestionStore {
    fn list(&self) -> Result<Vec<Question>> {
        Ok(self.questions.lock().map_err(|_| StoreError::Poisoned)?.clone())
    }

    fn add(&self, prompt: &str, reference_answer: &str) -> Result<Question> {
        let mut questions = self.questions.lock().map_err(|_| StoreError::Poisoned)?;
        let question = Question::new(next_question_id(&questions)?, prompt, reference_answer);
        questions.push(question.clone());
        Ok(question)
    }

    fn remove(&self, id: u32) -> Result<bool> {
        let mut questions = self.questions.lock().map_err(|_| StoreError::Poisoned)?;
        let before = questions.len();
        questions.retain(|q| q.id != id);
        Ok(questions.len() != before)
    }

    fn clear(&self) -> Result<()> {
        self.questions
            .lock()
            .map_err(|_| StoreError::Poisoned)?
            .clear();
        Ok(())
    }
}

/// Answer history held in memory.
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    results: Mutex<Vec<QuizResult>>,
    /// Number of appends made.
    append_count: AtomicUsize,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of results appended to this store, including
    /// ones deleted since.
    pub fn append_count(&self) -> usize {
        self.append_count.load(Ordering::Relaxed)
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn append(&self, result: QuizResult) -> Result<()> {
        self.results
            .lock()
            .map_err(|_| StoreError::Poisoned)?
            .push(result);
        self.append_count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn list(&self) -> Result<Vec<QuizResult>> {
        Ok(self.results.lock().map_err(|_| StoreError::Poisoned)?.clone())
    }

    fn delete(&self, predicate: &dyn Fn(&QuizResult) -> bool) -> Result<usize> {
        let mut results = self.results.lock().map_err(|_| StoreError::Poisoned)?;
        let before = results.len();
        results.retain(|r| !predicate(r));
        Ok(before - results.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_ids_increase() {
        let store = MemoryQuestionStore::new();
        assert_eq!(store.add("a", "1").unwrap().id, 1);
        assert_eq!(store.add("b", "2").unwrap().id, 2);
        assert!(store.remove(1).unwrap());
        assert_eq!(store.add("c", "3").unwrap().id, 3);
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn prefilled_questions() {
        let store = MemoryQuestionStore::with_questions(vec![Question::new(5, "q", "a")]);
        assert_eq!(store.get(5).unwrap().map(|q| q.prompt), Some("q".to_string()));
        assert_eq!(store.add("r", "b").unwrap().id, 6);
        store.clear().unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn add_after_max_id_leaves_store_unchanged() {
        let store = MemoryQuestionStore::with_questions(vec![Question::new(u32::MAX, "q", "a")]);
        assert!(store.add("r", "b").is_err());
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn history_keeps_order_and_counts_appends() {
        let store = MemoryHistoryStore::new();
        for (i, answer) in ["one", "two", "three"].iter().enumerate() {
            store
                .append(QuizResult::new(1, *answer, i as f64 * 10.0))
                .unwrap();
        }
        assert_eq!(store.delete(&|r| r.user_answer == "two").unwrap(), 1);
        let answers: Vec<String> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|r| r.user_answer)
            .collect();
        assert_eq!(answers, vec!["one", "three"]);
        assert_eq!(store.append_count(), 3);

        store.clear().unwrap();
        assert!(store.list().unwrap().is_empty());
    }
}
