//! Quiz Composer - draft model and validation gates for multiple-choice quizzes
//!
//! An author edits a question in a [`state::QuestionDraftEditor`], moves it
//! into a [`state::QuizDraftComposer`], and finally submits the quiz. The
//! [`session::AuthoringSession`] wires both drafts to the message and
//! submission sinks supplied by the surrounding application.

pub mod config;
pub mod session;
pub mod shell;
pub mod sinks;
pub mod state;
