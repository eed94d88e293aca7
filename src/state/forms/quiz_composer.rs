//! Quiz draft composer

use super::field::{FieldValue, QuizField};
use crate::state::errors::QuizError;
use crate::state::ids::{DraftId, IdGenerator, UuidGenerator};
use crate::state::quiz::{FinalQuiz, Question, QuizDraft, QuizEntry};
use chrono::Utc;
use std::iter;
use std::sync::Arc;

pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Owns the quiz-level draft for one composition session.
///
/// The question list is copy-on-write: every add or delete installs a new
/// sequence, so snapshots obtained from [`QuizDraftComposer::questions`]
/// never change underneath their holder.
#[derive(Debug, Clone)]
pub struct QuizDraftComposer<G = UuidGenerator> {
    draft: QuizDraft,
    ids: G,
}

impl QuizDraftComposer<UuidGenerator> {
    pub fn new() -> Self {
        Self::with_draft(
            QuizDraft::new(Utc::now(), DEFAULT_DURATION_MINUTES),
            UuidGenerator,
        )
    }
}

impl Default for QuizDraftComposer<UuidGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> QuizDraftComposer<G> {
    /// Take over an existing draft. Entries already in it are re-keyed
    /// from `ids` so later appends cannot collide with them.
    pub fn with_draft(mut draft: QuizDraft, mut ids: G) -> Self {
        if !draft.questions.is_empty() {
            draft.questions = draft
                .questions
                .iter()
                .map(|entry| QuizEntry::new(ids.next_id(), entry.value.clone()))
                .collect();
        }
        Self { draft, ids }
    }

    pub fn draft(&self) -> &QuizDraft {
        &self.draft
    }

    /// Snapshot of the current question list
    pub fn questions(&self) -> Arc<[QuizEntry]> {
        Arc::clone(&self.draft.questions)
    }

    pub fn question_count(&self) -> usize {
        self.draft.questions.len()
    }

    /// Id of the entry at `index`, if any
    pub fn question_id_at(&self, index: usize) -> Option<DraftId> {
        self.draft.questions.get(index).map(|entry| entry.id)
    }

    /// Set one metadata field. Values that cannot be coerced are ignored.
    pub fn edit_field(&mut self, field: QuizField, value: impl Into<FieldValue>) {
        let value = value.into();
        let applied = match field {
            QuizField::Name => value.as_text().map(|name| self.draft.name = Some(name)),
            QuizField::TeacherName => value
                .as_text()
                .map(|teacher| self.draft.teacher_name = Some(teacher)),
            QuizField::ScheduledStart => value
                .as_timestamp()
                .map(|start| self.draft.scheduled_start = start),
            QuizField::Duration => value
                .as_positive_int()
                .map(|minutes| self.draft.duration_minutes = minutes),
        };
        if applied.is_none() {
            tracing::debug!("Ignoring {} value {value:?}", field.label());
        }
    }

    /// Append a finalized question and return its list id.
    ///
    /// No re-validation happens here and duplicates are allowed; each
    /// append gets its own id.
    pub fn add_question(&mut self, question: Question) -> DraftId {
        let entry = QuizEntry::new(self.ids.next_id(), question);
        let id = entry.id;
        self.draft.questions = self
            .draft
            .questions
            .iter()
            .cloned()
            .chain(iter::once(entry))
            .collect();
        id
    }

    /// Remove the question with the given id. Returns whether it existed.
    pub fn delete_question(&mut self, id: &DraftId) -> bool {
        if !self.draft.questions.iter().any(|entry| entry.id == *id) {
            tracing::debug!("No question with id {id}");
            return false;
        }
        self.draft.questions = self
            .draft
            .questions
            .iter()
            .filter(|entry| entry.id != *id)
            .cloned()
            .collect();
        true
    }

    /// Check the draft and build the final quiz with every id stripped.
    ///
    /// Name and teacher are checked before the question list. The
    /// composer keeps its state either way.
    pub fn validate_and_submit(&self) -> Result<FinalQuiz, QuizError> {
        let (Some(name), Some(teacher)) = (
            filled(self.draft.name.as_deref()),
            filled(self.draft.teacher_name.as_deref()),
        ) else {
            return Err(QuizError::MissingNameOrTeacher);
        };
        if self.draft.questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }

        let questions = self
            .draft
            .questions
            .iter()
            .map(|entry| entry.value.clone())
            .collect();
        Ok(FinalQuiz::new(
            name.to_string(),
            teacher.to_string(),
            self.draft.scheduled_start,
            self.draft.duration_minutes,
            questions,
        ))
    }
}

fn filled(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
