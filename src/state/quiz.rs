//! Quiz value types: drafts and their finalized shapes

use super::ids::DraftId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// A value still being drafted, tagged with its draft-scope id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft<T> {
    pub id: DraftId,
    pub value: T,
}

impl<T> Draft<T> {
    pub fn new(id: DraftId, value: T) -> Self {
        Self { id, value }
    }

    /// Drop the draft id and keep the value
    pub fn into_value(self) -> T {
        self.value
    }
}

/// One answer choice of a question
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }
}

/// Mutable contents of a question while it sits in the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub text: String,
    pub point_value: u32,
    pub options: Vec<Draft<AnswerOption>>,
}

/// A validated question, ready to be placed in a quiz.
///
/// Only the question editor can build one, which guarantees it has
/// non-empty text, one to five options with non-empty text, and at least
/// one option marked correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    text: String,
    point_value: u32,
    options: Vec<AnswerOption>,
}

impl Question {
    pub(crate) fn new(text: String, point_value: u32, options: Vec<AnswerOption>) -> Self {
        Self {
            text,
            point_value,
            options,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn point_value(&self) -> u32 {
        self.point_value
    }

    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Positions of the options marked correct
    pub fn correct_indices(&self) -> Vec<usize> {
        self.options
            .iter()
            .enumerate()
            .filter(|(_, o)| o.is_correct)
            .map(|(i, _)| i)
            .collect()
    }
}

/// A question in the composer's list. The id only exists so the author
/// can delete the entry again.
pub type QuizEntry = Draft<Question>;

/// Quiz-level draft state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDraft {
    pub name: Option<String>,
    pub teacher_name: Option<String>,
    pub scheduled_start: DateTime<Utc>,
    pub duration_minutes: u32,
    /// Shared snapshot, replaced wholesale on every add or delete. Only
    /// the composer writes it, so every entry id comes from its generator.
    pub(crate) questions: Arc<[QuizEntry]>,
}

impl QuizDraft {
    pub fn new(scheduled_start: DateTime<Utc>, duration_minutes: u32) -> Self {
        Self {
            name: None,
            teacher_name: None,
            scheduled_start,
            duration_minutes,
            questions: Arc::from(Vec::new()),
        }
    }

    /// Pre-fill the teacher name
    pub fn with_teacher(mut self, teacher_name: impl Into<String>) -> Self {
        self.teacher_name = Some(teacher_name.into());
        self
    }

    pub fn questions(&self) -> &[QuizEntry] {
        &self.questions
    }

    /// Total points across every question in the draft
    pub fn total_points(&self) -> u32 {
        self.questions
            .iter()
            .map(|entry| entry.value.point_value())
            .sum()
    }
}

/// A submitted quiz. Carries no draft ids anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalQuiz {
    name: String,
    teacher_name: String,
    scheduled_start: DateTime<Utc>,
    duration_minutes: u32,
    questions: Vec<Question>,
}

impl FinalQuiz {
    pub(crate) fn new(
        name: String,
        teacher_name: String,
        scheduled_start: DateTime<Utc>,
        duration_minutes: u32,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            name,
            teacher_name,
            scheduled_start,
            duration_minutes,
            questions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn teacher_name(&self) -> &str {
        &self.teacher_name
    }

    pub fn scheduled_start(&self) -> DateTime<Utc> {
        self.scheduled_start
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_points(&self) -> u32 {
        self.questions.iter().map(Question::point_value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ids::{IdGenerator, SequentialIds};
    use chrono::TimeZone;

    fn sample_question(points: u32) -> Question {
        Question::new(
            "2+2=?".to_string(),
            points,
            vec![AnswerOption::new("3", false), AnswerOption::new("4", true)],
        )
    }

    #[test]
    fn test_draft_into_value_drops_id() {
        let mut ids = SequentialIds::new();
        let draft = Draft::new(ids.next_id(), AnswerOption::new("4", true));
        assert_eq!(draft.into_value(), AnswerOption::new("4", true));
    }

    #[test]
    fn test_correct_indices() {
        assert_eq!(sample_question(1).correct_indices(), vec![1]);
    }

    #[test]
    fn test_new_quiz_draft_is_empty() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let draft = QuizDraft::new(start, 45);
        assert!(draft.name.is_none());
        assert!(draft.teacher_name.is_none());
        assert!(draft.questions().is_empty());
        assert_eq!(draft.duration_minutes, 45);
        assert_eq!(draft.total_points(), 0);
    }

    #[test]
    fn test_with_teacher_prefills_name() {
        let draft = QuizDraft::new(Utc::now(), 30).with_teacher("Ms. Lee");
        assert_eq!(draft.teacher_name.as_deref(), Some("Ms. Lee"));
    }

    #[test]
    fn test_final_quiz_serializes_without_ids() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let quiz = FinalQuiz::new(
            "Algebra Quiz".to_string(),
            "Ms. Lee".to_string(),
            start,
            30,
            vec![sample_question(2)],
        );

        let json = serde_json::to_value(&quiz).unwrap();
        assert_eq!(json["name"], "Algebra Quiz");
        assert_eq!(json["teacherName"], "Ms. Lee");
        assert_eq!(json["durationMinutes"], 30);
        assert_eq!(json["questions"][0]["pointValue"], 2);
        assert_eq!(json["questions"][0]["options"][1]["isCorrect"], true);
        assert!(json["questions"][0].get("id").is_none());
        assert!(json["questions"][0]["options"][0].get("id").is_none());
        assert_eq!(quiz.total_points(), 2);
    }
}
