//! TOML question-set parser.
//!
//! Loads question sets from TOML files and directories, and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::normalize::normalize;

/// A named collection of questions loaded from a file. Questions carry no
/// ids here; the question store assigns them on import.
#[derive(Debug, Clone)]
pub struct QuestionSet {
    pub name: String,
    pub description: String,
    pub questions: Vec<QuestionEntry>,
}

/// One question of a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionEntry {
    pub prompt: String,
    pub answer: String,
}

/// Intermediate TOML structure for parsing question set files.
#[derive(Debug, Deserialize)]
struct TomlQuestionFile {
    question_set: TomlQuestionSetHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestionSetHeader {
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    prompt: String,
    answer: String,
}

/// Parse a single TOML file into a `QuestionSet`.
pub fn parse_question_set(path: &Path) -> Result<QuestionSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question set file: {}", path.display()))?;

    parse_question_set_str(&content, path)
}

/// Parse a TOML string into a `QuestionSet` (useful for testing).
pub fn parse_question_set_str(content: &str, source_path: &Path) -> Result<QuestionSet> {
    let parsed: TomlQuestionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| QuestionEntry {
            prompt: q.prompt.trim().to_string(),
            answer: q.answer.trim().to_string(),
        })
        .collect();

    Ok(QuestionSet {
        name: parsed.question_set.name,
        description: parsed.question_set.description,
        questions,
    })
}

/// Recursively load all `.toml` question set files from a directory.
pub fn load_question_directory(dir: &Path) -> Result<Vec<QuestionSet>> {
    let mut sets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            sets.extend(load_question_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_question_set(&path) {
                Ok(set) => sets.push(set),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(sets)
}

/// Load a file, or every set under a directory.
pub fn load_question_sets(path: &Path) -> Result<Vec<QuestionSet>> {
    if path.is_dir() {
        load_question_directory(path)
    } else {
        Ok(vec![parse_question_set(path)?])
    }
}

/// A warning from question set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based position of the question in the set (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a question set for common issues.
///
/// `max_questions` is the store limit; a set larger than that can only be
/// imported partially.
pub fn validate_question_set(set: &QuestionSet, max_questions: usize) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if set.questions.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "question set has no questions".into(),
        });
    }

    if set.questions.len() > max_questions {
        warnings.push(ValidationWarning {
            question: None,
            message: format!(
                "{} questions exceed the limit of {max_questions}",
                set.questions.len()
            ),
        });
    }

    // Duplicate prompts compare on normalized text
    let mut seen = HashSet::new();
    for (idx, q) in set.questions.iter().enumerate() {
        if !seen.insert(normalize(&q.prompt)) {
            warnings.push(ValidationWarning {
                question: Some(idx + 1),
                message: format!("duplicate prompt: {}", q.prompt),
            });
        }
    }

    for (idx, q) in set.questions.iter().enumerate() {
        if q.prompt.is_empty() {
            warnings.push(ValidationWarning {
                question: Some(idx + 1),
                message: "prompt is empty".into(),
            });
        }
        if q.answer.is_empty() {
            warnings.push(ValidationWarning {
                question: Some(idx + 1),
                message: "answer is empty".into(),
            });
        } else if normalize(&q.answer).is_empty() {
            warnings.push(ValidationWarning {
                question: Some(idx + 1),
                message: "answer contains only punctuation and will match an empty reply".into(),
            });
        }
    }

    warnings
}
