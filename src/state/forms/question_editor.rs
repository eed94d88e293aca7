//! Question draft editor

use super::field::{FieldValue, OptionField, QuestionField};
use crate::state::errors::QuestionError;
use crate::state::ids::{DraftId, IdGenerator, UuidGenerator};
use crate::state::quiz::{AnswerOption, Draft, Question, QuestionDraft};

/// Most answer choices a question may carry
pub const MAX_OPTIONS: usize = 5;
/// Fewest answer choices a question may carry
pub const MIN_OPTIONS: usize = 1;
pub const DEFAULT_POINT_VALUE: u32 = 1;

/// Owns the single question currently being authored.
///
/// The option count stays within `MIN_OPTIONS..=MAX_OPTIONS` after every
/// operation; requests that would leave that range are ignored.
#[derive(Debug, Clone)]
pub struct QuestionDraftEditor<G = UuidGenerator> {
    draft: Draft<QuestionDraft>,
    ids: G,
}

impl QuestionDraftEditor<UuidGenerator> {
    pub fn new() -> Self {
        Self::with_ids(UuidGenerator)
    }
}

impl Default for QuestionDraftEditor<UuidGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> QuestionDraftEditor<G> {
    pub fn with_ids(mut ids: G) -> Self {
        let draft = blank_question(&mut ids);
        Self { draft, ids }
    }

    pub fn draft(&self) -> &Draft<QuestionDraft> {
        &self.draft
    }

    pub fn options(&self) -> &[Draft<AnswerOption>] {
        &self.draft.value.options
    }

    pub fn option_count(&self) -> usize {
        self.draft.value.options.len()
    }

    pub fn can_add_option(&self) -> bool {
        self.option_count() < MAX_OPTIONS
    }

    pub fn can_delete_option(&self) -> bool {
        self.option_count() > MIN_OPTIONS
    }

    /// Set the question text or point value.
    ///
    /// A point value that does not coerce to a positive integer is ignored.
    pub fn edit_field(&mut self, field: QuestionField, value: impl Into<FieldValue>) {
        let value = value.into();
        match field {
            QuestionField::Text => match value.as_text() {
                Some(text) => self.draft.value.text = text,
                None => tracing::debug!("Ignoring non-text question value {value:?}"),
            },
            QuestionField::PointValue => match value.as_positive_int() {
                Some(points) => self.draft.value.point_value = points,
                None => tracing::debug!("Ignoring invalid point value {value:?}"),
            },
        }
    }

    /// Edit the option at `index`. Out-of-range indices are ignored.
    pub fn edit_option(&mut self, index: usize, field: OptionField, value: impl Into<FieldValue>) {
        let value = value.into();
        let Some(option) = self.draft.value.options.get_mut(index) else {
            tracing::debug!("Ignoring edit of missing option #{index}");
            return;
        };

        match field {
            OptionField::Text => match value.as_text() {
                Some(text) => option.value.text = text,
                None => tracing::debug!("Ignoring non-text option value {value:?}"),
            },
            OptionField::IsCorrect => match value.as_flag() {
                Some(flag) => option.value.is_correct = flag,
                None => tracing::debug!("Ignoring non-flag option value {value:?}"),
            },
        }
    }

    /// Append a blank option. Returns its id, or `None` at the ceiling.
    pub fn add_option(&mut self) -> Option<DraftId> {
        if !self.can_add_option() {
            tracing::debug!("Option ceiling of {MAX_OPTIONS} reached");
            return None;
        }
        let option = blank_option(&mut self.ids);
        let id = option.id;
        self.draft.value.options.push(option);
        Some(id)
    }

    /// Remove the option with the given id.
    ///
    /// Returns whether anything was removed. Unknown ids and the last
    /// remaining option are left alone.
    pub fn delete_option(&mut self, id: &DraftId) -> bool {
        if !self.can_delete_option() {
            tracing::debug!("Keeping the last remaining option");
            return false;
        }
        let options = &mut self.draft.value.options;
        match options.iter().position(|o| o.id == *id) {
            Some(index) => {
                options.remove(index);
                true
            }
            None => {
                tracing::debug!("No option with id {id}");
                false
            }
        }
    }

    /// Discard the current draft and start a blank one
    pub fn reset(&mut self) {
        self.draft = blank_question(&mut self.ids);
    }

    /// Check the draft and copy it out as a finalized question.
    ///
    /// Checks run in order: question text, option text, correct option.
    /// The draft itself is never modified.
    pub fn validate_and_finalize(&self) -> Result<Question, QuestionError> {
        let draft = &self.draft.value;

        if draft.text.is_empty() {
            return Err(QuestionError::MissingQuestionText);
        }
        if draft.options.iter().any(|o| o.value.text.is_empty()) {
            return Err(QuestionError::MissingOptionText);
        }
        if !draft.options.iter().any(|o| o.value.is_correct) {
            return Err(QuestionError::NoCorrectOptionMarked);
        }

        let options = draft.options.iter().map(|o| o.value.clone()).collect();
        Ok(Question::new(draft.text.clone(), draft.point_value, options))
    }
}

fn blank_option<G: IdGenerator>(ids: &mut G) -> Draft<AnswerOption> {
    Draft::new(ids.next_id(), AnswerOption::default())
}

fn blank_question<G: IdGenerator>(ids: &mut G) -> Draft<QuestionDraft> {
    let id = ids.next_id();
    let options = vec![blank_option(ids)];
    Draft::new(
        id,
        QuestionDraft {
            text: String::new(),
            point_value: DEFAULT_POINT_VALUE,
            options,
        },
    )
}
