//! Configuration handling for the composer

use crate::state::{QuizDraft, DEFAULT_DURATION_MINUTES};
use anyhow::Result;
use chrono::Utc;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration, stored as JSON in the platform config directory
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ComposerConfig {
    /// Duration given to every new quiz draft, in minutes
    pub default_duration_minutes: Option<u32>,
    /// Teacher name pre-filled on every new quiz draft
    pub default_teacher_name: Option<String>,
    /// Directory submitted quizzes are written to
    pub output_dir: Option<PathBuf>,
}

impl ComposerConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "quiz-composer", "quiz-composer")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: ComposerConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn duration_minutes(&self) -> u32 {
        self.default_duration_minutes
            .filter(|minutes| *minutes > 0)
            .unwrap_or(DEFAULT_DURATION_MINUTES)
    }

    /// Where submissions go: the configured directory, else the platform
    /// data directory, else `./quizzes`
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_dir().join("quizzes")))
            .unwrap_or_else(|| PathBuf::from("quizzes"))
    }

    /// A blank quiz draft scheduled for now, with configured defaults applied
    pub fn new_quiz_draft(&self) -> QuizDraft {
        let draft = QuizDraft::new(Utc::now(), self.duration_minutes());
        match self.default_teacher_name.as_deref() {
            Some(teacher) if !teacher.is_empty() => draft.with_teacher(teacher),
            _ => draft,
        }
    }
}
