//! Draft editing layer
//!
//! The two state machines that back the quiz authoring screens: one for the
//! question currently being written and one for the quiz it will join.
//! Both are plain data plus transitions with no I/O.

mod field;
mod question_editor;
mod quiz_composer;

pub use field::{FieldValue, OptionField, QuestionField, QuizField};
pub use question_editor::{QuestionDraftEditor, DEFAULT_POINT_VALUE, MAX_OPTIONS, MIN_OPTIONS};
pub use quiz_composer::{QuizDraftComposer, DEFAULT_DURATION_MINUTES};
