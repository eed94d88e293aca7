//! Trait abstraction for message display and quiz submission

use crate::state::FinalQuiz;
use anyhow::Result;

/// Surfaces a short message to the author (snackbar, status line, ...)
#[cfg_attr(test, mockall::automock)]
pub trait MessageSink {
    fn notify(&mut self, message: &str);
}

/// Receives a quiz once it has passed validation
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    /// Hand over the quiz. Transport and storage are up to the implementor.
    fn submit(&mut self, quiz: &FinalQuiz) -> Result<()>;
}

/// Collects messages in order
impl MessageSink for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Keeps every submitted quiz in memory
impl SubmissionSink for Vec<FinalQuiz> {
    fn submit(&mut self, quiz: &FinalQuiz) -> Result<()> {
        self.push(quiz.clone());
        Ok(())
    }
}
