//! JSON-file stores.
//!
//! Each store is one JSON array in one file, rewritten whole on every
//! change. A missing file reads as an empty store. Writes within a process
//! are serialized by a lock; concurrent processes are not coordinated.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use quizmark_core::model::{next_question_id, Question, QuizResult};
use quizmark_core::traits::{HistoryStore, QuestionStore};

use crate::error::StoreError;

fn read_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        tracing::debug!("{} does not exist, treating as empty", path.display());
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read store file {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let items = serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(items)
}

fn write_array<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(items).context("failed to serialize store")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write store file {}", path.display()))?;
    tracing::debug!(count = items.len(), "wrote {}", path.display());
    Ok(())
}

/// Questions kept in a JSON file.
#[derive(Debug)]
pub struct JsonQuestionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonQuestionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }
}

impl QuestionStore for JsonQuestionStore {
    fn list(&self) -> Result<Vec<Question>> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        read_array(&self.path)
    }

    fn add(&self, prompt: &str, reference_answer: &str) -> Result<Question> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut questions: Vec<Question> = read_array(&self.path)?;
        let question = Question::new(next_question_id(&questions)?, prompt, reference_answer);
        questions.push(question.clone());
        write_array(&self.path, &questions)?;
        Ok(question)
    }

    fn remove(&self, id: u32) -> Result<bool> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut questions: Vec<Question> = read_array(&self.path)?;
        let before = questions.len();
        questions.retain(|q| q.id != id);
        if questions.len() == before {
            return Ok(false);
        }
        write_array(&self.path, &questions)?;
        Ok(true)
    }

    fn clear(&self) -> Result<()> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        write_array::<Question>(&self.path, &[])
    }
}

/// Answer history kept in a JSON file.
#[derive(Debug)]
pub struct JsonHistoryStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }
}

impl HistoryStore for JsonHistoryStore {
    fn append(&self, result: QuizResult) -> Result<()> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut history: Vec<QuizResult> = read_array(&self.path)?;
        history.push(result);
        write_array(&self.path, &history)
    }

    fn list(&self) -> Result<Vec<QuizResult>> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        read_array(&self.path)
    }

    fn delete(&self, predicate: &dyn Fn(&QuizResult) -> bool) -> Result<usize> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut history: Vec<QuizResult> = read_array(&self.path)?;
        let before = history.len();
        history.retain(|r| !predicate(r));
        let removed = before - history.len();
        if removed > 0 {
            write_array(&self.path, &history)?;
        }
        Ok(removed)
    }

    fn clear(&self) -> Result<()> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        write_array::<QuizResult>(&self.path, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizmark_core::QuizError;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let questions = JsonQuestionStore::new(dir.path().join("questions.json"));
        let history = JsonHistoryStore::new(dir.path().join("history.json"));
        assert!(questions.list().unwrap().is_empty());
        assert!(history.list().unwrap().is_empty());
    }

    #[test]
    fn questions_persist_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/questions.json");

        let store = JsonQuestionStore::new(&path);
        let first = store.add("What is 2+2?", "4").unwrap();
        let second = store.add("Capital of Vietnam?", "Hà Nội").unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let reopened = JsonQuestionStore::new(&path);
        let listed = reopened.list().unwrap();
        assert_eq!(listed, vec![first, second.clone()]);
        assert_eq!(reopened.get(2).unwrap(), Some(second));
        assert_eq!(reopened.get(9).unwrap(), None);
    }

    #[test]
    fn remove_and_id_reuse() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonQuestionStore::new(dir.path().join("questions.json"));
        store.add("a", "1").unwrap();
        store.add("b", "2").unwrap();
        store.add("c", "3").unwrap();

        assert!(store.remove(2).unwrap());
        assert!(!store.remove(2).unwrap());
        assert_eq!(store.add("d", "4").unwrap().id, 4);

        assert!(store.remove(4).unwrap());
        assert_eq!(store.add("e", "5").unwrap().id, 4);

        store.clear().unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn add_fails_when_ids_run_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        let content = r#"[{"id":4294967295,"question":"last","answer":"id"}]"#;
        std::fs::write(&path, content).unwrap();

        let store = JsonQuestionStore::new(&path);
        let err = store.add("one more", "answer").unwrap_err();
        assert_eq!(
            err.downcast_ref::<QuizError>(),
            Some(&QuizError::QuestionIdsExhausted)
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn history_append_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonHistoryStore::new(dir.path().join("history.json"));
        store.append(QuizResult::new(1, "cat", 100.0)).unwrap();
        store.append(QuizResult::new(2, "dog", 40.0)).unwrap();
        store.append(QuizResult::new(1, "bat", 66.7)).unwrap();

        assert_eq!(store.for_question(1).unwrap().len(), 2);
        assert_eq!(store.delete(&|r| r.accuracy < 50.0).unwrap(), 1);
        assert_eq!(store.delete(&|r| r.question_id == 9).unwrap(), 0);

        let remaining = store.list().unwrap();
        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[0].user_answer, "cat");
        assert_eq!(remaining[1].user_answer, "bat");

        store.clear().unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn reads_browser_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(
            &path,
            r#"[{"questionId":1,"userAnswer":"Paris","accuracy":100,"timestamp":"2025-03-01T08:30:00.000Z"}]"#,
        )
        .unwrap();
        let history = JsonHistoryStore::new(&path).list().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].user_answer, "Paris");
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(&path, "{ not an array").unwrap();
        let err = JsonQuestionStore::new(&path).list().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::Corrupt { .. })
        ));
    }
}
