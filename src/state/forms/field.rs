//! Field names and field value objects for draft edits

use chrono::{DateTime, Utc};

/// Raw value coming from an input widget.
///
/// Each draft coerces the value into the type its field needs and leaves
/// the field untouched when the coercion fails.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
    Flag(bool),
    Timestamp(DateTime<Utc>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Text content. Numbers are rendered, flags and timestamps are rejected.
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Number(n) => Some(n.to_string()),
            FieldValue::Flag(_) | FieldValue::Timestamp(_) => None,
        }
    }

    /// Strictly positive integer that fits in a `u32`
    pub fn as_positive_int(&self) -> Option<u32> {
        match self {
            FieldValue::Text(s) => s.trim().parse::<u32>().ok().filter(|n| *n > 0),
            FieldValue::Number(n) => u32::try_from(*n).ok().filter(|n| *n > 0),
            FieldValue::Flag(_) | FieldValue::Timestamp(_) => None,
        }
    }

    /// Checkbox state. Accepts "true"/"false" text in any case.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            FieldValue::Text(s) => match s.trim().to_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            FieldValue::Number(_) | FieldValue::Timestamp(_) => None,
        }
    }

    /// Point in time. Text must be RFC 3339, numbers are Unix milliseconds.
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Timestamp(ts) => Some(*ts),
            FieldValue::Text(s) => DateTime::parse_from_rfc3339(s.trim())
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            FieldValue::Number(ms) => DateTime::from_timestamp_millis(*ms),
            FieldValue::Flag(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

/// Editable fields of a question draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionField {
    Text,
    PointValue,
}

/// Editable fields of one answer option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionField {
    Text,
    IsCorrect,
}

/// Editable fields of the quiz draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizField {
    Name,
    TeacherName,
    ScheduledStart,
    Duration,
}

impl QuizField {
    pub fn label(&self) -> &'static str {
        match self {
            QuizField::Name => "Quiz Name",
            QuizField::TeacherName => "Teacher Name",
            QuizField::ScheduledStart => "Quiz Date and Time",
            QuizField::Duration => "Quiz Duration",
        }
    }
}
