//! Submission sink that writes each quiz as a pretty-printed JSON file

use super::SubmissionSink;
use crate::state::FinalQuiz;
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct JsonFileSink {
    dir: PathBuf,
    last_written: Option<PathBuf>,
}

impl JsonFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            last_written: None,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the most recent successful submission
    pub fn last_written(&self) -> Option<&Path> {
        self.last_written.as_deref()
    }

    /// `<slug>-<timestamp>-<tag>.json` with a random 8-hex-digit tag
    fn file_name(quiz: &FinalQuiz) -> String {
        let slug = slugify(quiz.name());
        let slug = if slug.is_empty() { "quiz" } else { slug.as_str() };
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%3f");
        let tag = Uuid::new_v4().simple().to_string();
        format!("{slug}-{stamp}-{}.json", &tag[..8])
    }
}

impl SubmissionSink for JsonFileSink {
    fn submit(&mut self, quiz: &FinalQuiz) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating {}", self.dir.display()))?;
        let path = self.dir.join(Self::file_name(quiz));
        let content = serde_json::to_string_pretty(quiz)?;
        // Never replace an earlier submission
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("writing {}", path.display()))?;

        tracing::info!("Wrote quiz {:?} to {}", quiz.name(), path.display());
        self.last_written = Some(path);
        Ok(())
    }
}

/// Lowercase ASCII alphanumerics joined by single dashes
fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        OptionField, QuestionDraftEditor, QuestionField, QuizDraftComposer, QuizField,
    };

    fn sample_quiz() -> FinalQuiz {
        let mut editor = QuestionDraftEditor::new();
        editor.edit_field(QuestionField::Text, "2+2=?");
        editor.edit_option(0, OptionField::Text, "4");
        editor.edit_option(0, OptionField::IsCorrect, true);

        let mut composer = QuizDraftComposer::new();
        composer.edit_field(QuizField::Name, "Algebra Quiz");
        composer.edit_field(QuizField::TeacherName, "Ms. Lee");
        composer.add_question(editor.validate_and_finalize().unwrap());
        composer.validate_and_submit().unwrap()
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Algebra Quiz #2"), "algebra-quiz-2");
        assert_eq!(slugify("  Ünïcode  "), "n-code");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_submit_writes_json_file() {
        let dir = std::env::temp_dir().join(format!("quiz-composer-{}", uuid::Uuid::new_v4()));
        let mut sink = JsonFileSink::new(&dir);

        sink.submit(&sample_quiz()).unwrap();

        let path = sink.last_written().unwrap().to_path_buf();
        assert!(path.starts_with(&dir));
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("algebra-quiz-"));

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["name"], "Algebra Quiz");
        assert_eq!(written["questions"][0]["options"][0]["text"], "4");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_back_to_back_submissions_get_separate_files() {
        let dir = std::env::temp_dir().join(format!("quiz-composer-{}", uuid::Uuid::new_v4()));
        let mut sink = JsonFileSink::new(&dir);
        let quiz = sample_quiz();

        sink.submit(&quiz).unwrap();
        let first = sink.last_written().unwrap().to_path_buf();
        sink.submit(&quiz).unwrap();
        let second = sink.last_written().unwrap().to_path_buf();

        assert_ne!(first, second);
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 2);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unnamed_slug_falls_back_to_quiz() {
        let mut composer = QuizDraftComposer::new();
        composer.edit_field(QuizField::Name, "!!!");
        composer.edit_field(QuizField::TeacherName, "Ms. Lee");
        composer.add_question(sample_quiz().questions()[0].clone());
        let quiz = composer.validate_and_submit().unwrap();

        assert!(JsonFileSink::file_name(&quiz).starts_with("quiz-"));
    }
}
