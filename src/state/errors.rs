//! Validation failures raised by the two draft gates

use thiserror::Error;

/// Why a question draft cannot be finalized.
///
/// Variants are listed in the order they are checked; the first failing
/// check wins. `Display` yields the message shown to the author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("Please fill question Details")]
    MissingQuestionText,

    #[error("Please fill all options")]
    MissingOptionText,

    #[error("Please mark the correct answer")]
    NoCorrectOptionMarked,
}

impl QuestionError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            QuestionError::MissingQuestionText => "MISSING_QUESTION_TEXT",
            QuestionError::MissingOptionText => "MISSING_OPTION_TEXT",
            QuestionError::NoCorrectOptionMarked => "NO_CORRECT_OPTION_MARKED",
        }
    }
}

/// Why a quiz draft cannot be submitted, in check order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Please fill the required fields")]
    MissingNameOrTeacher,

    #[error("Please add Questions")]
    NoQuestions,
}

impl QuizError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            QuizError::MissingNameOrTeacher => "MISSING_NAME_OR_TEACHER",
            QuizError::NoQuestions => "NO_QUESTIONS",
        }
    }
}
