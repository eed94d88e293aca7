//! Authoring session: one quiz draft, one question editor, and the sinks
//! that hear about what happens to them

use crate::config::ComposerConfig;
use crate::sinks::{MessageSink, SubmissionSink};
use crate::state::{
    DraftId, FinalQuiz, QuestionDraftEditor, QuizDraft, QuizDraftComposer, UuidGenerator,
};

pub const QUESTION_ADDED: &str = "Question added successfully!";
pub const QUESTION_DELETED: &str = "Question deleted successfully!";
pub const QUIZ_SUBMITTED: &str = "Quiz created successfully!";
pub const SUBMISSION_FAILED: &str = "Failed to submit quiz";

/// Drives the two draft state machines the way the authoring screen does.
///
/// Validation failures are reported through the message sink and leave
/// the drafts untouched. After a successful submission the session starts
/// over with a fresh quiz draft; the question editor keeps whatever the
/// author is writing.
pub struct AuthoringSession<M, S> {
    editor: QuestionDraftEditor,
    composer: QuizDraftComposer,
    config: ComposerConfig,
    messages: M,
    submissions: S,
}

impl<M: MessageSink, S: SubmissionSink> AuthoringSession<M, S> {
    pub fn new(config: ComposerConfig, messages: M, submissions: S) -> Self {
        let composer = QuizDraftComposer::with_draft(config.new_quiz_draft(), UuidGenerator);
        Self {
            editor: QuestionDraftEditor::new(),
            composer,
            config,
            messages,
            submissions,
        }
    }

    pub fn editor(&self) -> &QuestionDraftEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut QuestionDraftEditor {
        &mut self.editor
    }

    pub fn composer(&self) -> &QuizDraftComposer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut QuizDraftComposer {
        &mut self.composer
    }

    pub fn quiz_draft(&self) -> &QuizDraft {
        self.composer.draft()
    }

    pub fn question_count(&self) -> usize {
        self.composer.question_count()
    }

    pub fn messages(&self) -> &M {
        &self.messages
    }

    pub fn submissions(&self) -> &S {
        &self.submissions
    }

    /// Move the editor's question into the quiz and start a blank one
    pub fn add_question(&mut self) -> Option<DraftId> {
        match self.editor.validate_and_finalize() {
            Ok(question) => {
                let id = self.composer.add_question(question);
                self.editor.reset();
                tracing::info!(
                    "Added question {id} ({} in quiz)",
                    self.composer.question_count()
                );
                self.messages.notify(QUESTION_ADDED);
                Some(id)
            }
            Err(err) => {
                tracing::debug!("Question rejected: {}", err.code());
                self.messages.notify(&err.to_string());
                None
            }
        }
    }

    /// Throw away the question being written
    pub fn clear_question(&mut self) {
        self.editor.reset();
    }

    pub fn delete_question(&mut self, id: &DraftId) -> bool {
        let deleted = self.composer.delete_question(id);
        if deleted {
            tracing::info!("Deleted question {id}");
            self.messages.notify(QUESTION_DELETED);
        }
        deleted
    }

    /// Validate the quiz and hand it to the submission sink.
    ///
    /// Returns the submitted quiz. On any failure the draft is kept so the
    /// author can fix it and try again.
    pub fn submit_quiz(&mut self) -> Option<FinalQuiz> {
        let quiz = match self.composer.validate_and_submit() {
            Ok(quiz) => quiz,
            Err(err) => {
                tracing::debug!("Quiz rejected: {}", err.code());
                self.messages.notify(&err.to_string());
                return None;
            }
        };

        if let Err(err) = self.submissions.submit(&quiz) {
            tracing::warn!("Submission of {:?} failed: {err:#}", quiz.name());
            self.messages.notify(SUBMISSION_FAILED);
            return None;
        }

        tracing::info!(
            "Submitted quiz {:?} with {} questions",
            quiz.name(),
            quiz.questions().len()
        );
        self.messages.notify(QUIZ_SUBMITTED);
        self.composer = QuizDraftComposer::with_draft(self.config.new_quiz_draft(), UuidGenerator);
        Some(quiz)
    }
}
