//! quizmark configuration and store factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizmark_core::session::{SessionConfig, DEFAULT_MAX_QUESTIONS};
use quizmark_core::traits::{HistoryStore, QuestionStore};

use crate::json::{JsonHistoryStore, JsonQuestionStore};

/// Top-level quizmark configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizmarkConfig {
    /// Directory holding the store files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Question store file name, relative to `data_dir`.
    #[serde(default = "default_questions_file")]
    pub questions_file: String,
    /// History store file name, relative to `data_dir`.
    #[serde(default = "default_history_file")]
    pub history_file: String,
    /// Maximum number of stored questions.
    #[serde(default = "default_max_questions")]
    pub max_questions: usize,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./quizmark-data")
}
fn default_questions_file() -> String {
    "questions.json".to_string()
}
fn default_history_file() -> String {
    "history.json".to_string()
}
fn default_max_questions() -> usize {
    DEFAULT_MAX_QUESTIONS
}

impl Default for QuizmarkConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            questions_file: default_questions_file(),
            history_file: default_history_file(),
            max_questions: default_max_questions(),
        }
    }
}

impl QuizmarkConfig {
    pub fn questions_path(&self) -> PathBuf {
        self.data_dir.join(&self.questions_file)
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(&self.history_file)
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            max_questions: self.max_questions,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Each reference is expanded once; substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `quizmark.toml` in the current directory
/// 2. `~/.config/quizmark/config.toml`
///
/// Environment variable override: `QUIZMARK_DATA_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizmarkConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizmark.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match &config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let mut config = toml::from_str::<QuizmarkConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            // A relative data_dir is relative to the config file, not the cwd
            if config.data_dir.is_relative() {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    config.data_dir = parent.join(&config.data_dir);
                }
            }
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => QuizmarkConfig::default(),
    };

    // Apply env var overrides
    if let Ok(dir) = std::env::var("QUIZMARK_DATA_DIR") {
        if !dir.is_empty() {
            config.data_dir = PathBuf::from(dir);
        }
    }

    config.data_dir = PathBuf::from(resolve_env_vars(&config.data_dir.to_string_lossy()));

    anyhow::ensure!(
        config.max_questions >= 1,
        "max_questions must be at least 1"
    );

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizmark"))
}

/// Create the JSON stores described by a configuration.
pub fn open_stores(config: &QuizmarkConfig) -> (Arc<dyn QuestionStore>, Arc<dyn HistoryStore>) {
    let questions: Arc<dyn QuestionStore> = Arc::new(JsonQuestionStore::new(config.questions_path()));
    let history: Arc<dyn HistoryStore> = Arc::new(JsonHistoryStore::new(config.history_path()));
    (questions, history)
}
