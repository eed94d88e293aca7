//! Line-oriented command shell over an authoring session
//!
//! Positions typed by the author are 1-based; they are resolved to draft
//! ids before reaching the session.

use crate::session::AuthoringSession;
use crate::sinks::{MessageSink, SubmissionSink};
use crate::state::{FieldValue, OptionField, QuestionField, QuizField};
use std::io::{self, Write};
use thiserror::Error;

pub const HELP: &str = "\
Quiz
  name <text>               set the quiz name
  teacher <text>            set the teacher name
  start <rfc3339>           set the scheduled start, e.g. 2026-03-01T09:00:00Z
  duration <minutes>        set the quiz duration
  list                      show the quiz and the question being written
  delete <n>                delete question n from the quiz
  submit                    validate and submit the quiz
Question
  question <text>           set the question text
  points <n>                set the point value
  option add                add a blank option (up to 5)
  option delete <n>         delete option n (at least one stays)
  option text <n> <text>    set the text of option n
  option correct <n> <y|n>  mark option n right or wrong
  add                       add the question to the quiz
  clear                     discard the question
Other
  help                      show this help
  quit                      leave without submitting
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    EditQuiz(QuizField, FieldValue),
    EditQuestion(QuestionField, FieldValue),
    AddOption,
    DeleteOption(usize),
    EditOption(usize, OptionField, FieldValue),
    AddQuestion,
    ClearQuestion,
    DeleteQuestion(usize),
    List,
    Submit,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command: {0} (try `help`)")]
    UnknownCommand(String),

    #[error("`{0}` needs {1}")]
    MissingArgument(&'static str, &'static str),

    #[error("Not a position: {0}")]
    InvalidPosition(String),

    #[error("Expected yes or no, got {0}")]
    InvalidFlag(String),
}

/// Whether the shell should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Parse one input line
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (word, rest) = split_word(line);

    match word {
        "name" => Ok(Command::EditQuiz(QuizField::Name, rest.into())),
        "teacher" => Ok(Command::EditQuiz(QuizField::TeacherName, rest.into())),
        "start" => Ok(Command::EditQuiz(
            QuizField::ScheduledStart,
            required(rest, "start", "a date and time")?.into(),
        )),
        "duration" => Ok(Command::EditQuiz(
            QuizField::Duration,
            required(rest, "duration", "a number of minutes")?.into(),
        )),
        "question" => Ok(Command::EditQuestion(QuestionField::Text, rest.into())),
        "points" => Ok(Command::EditQuestion(
            QuestionField::PointValue,
            required(rest, "points", "a number")?.into(),
        )),
        "option" => parse_option(rest),
        "add" => Ok(Command::AddQuestion),
        "clear" => Ok(Command::ClearQuestion),
        "delete" => Ok(Command::DeleteQuestion(position(required(
            rest,
            "delete",
            "a question number",
        )?)?)),
        "list" | "ls" => Ok(Command::List),
        "submit" => Ok(Command::Submit),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_option(rest: &str) -> Result<Command, ParseError> {
    let (action, rest) = split_word(rest);
    match action {
        "add" => Ok(Command::AddOption),
        "delete" | "del" => Ok(Command::DeleteOption(position(required(
            rest,
            "option delete",
            "an option number",
        )?)?)),
        "text" => {
            let (n, text) = split_word(required(rest, "option text", "an option number")?);
            Ok(Command::EditOption(position(n)?, OptionField::Text, text.into()))
        }
        "correct" => {
            let (n, flag) = split_word(required(rest, "option correct", "an option number")?);
            Ok(Command::EditOption(
                position(n)?,
                OptionField::IsCorrect,
                FieldValue::Flag(yes_no(flag)?),
            ))
        }
        "" => Err(ParseError::MissingArgument(
            "option",
            "add, delete, text or correct",
        )),
        other => Err(ParseError::UnknownCommand(format!("option {other}"))),
    }
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    what: &'static str,
) -> Result<&'a str, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument(command, what))
    } else {
        Ok(rest)
    }
}

/// 1-based position typed by the author, returned 0-based
fn position(word: &str) -> Result<usize, ParseError> {
    match word.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(ParseError::InvalidPosition(word.to_string())),
    }
}

fn yes_no(word: &str) -> Result<bool, ParseError> {
    match word.to_lowercase().as_str() {
        "y" | "yes" | "true" => Ok(true),
        "n" | "no" | "false" => Ok(false),
        _ => Err(ParseError::InvalidFlag(word.to_string())),
    }
}

/// Apply a command to the session, writing any listing to `out`
pub fn dispatch<M, S, W>(
    session: &mut AuthoringSession<M, S>,
    command: Command,
    out: &mut W,
) -> io::Result<Flow>
where
    M: MessageSink,
    S: SubmissionSink,
    W: Write,
{
    match command {
        Command::EditQuiz(field, value) => session.composer_mut().edit_field(field, value),
        Command::EditQuestion(field, value) => session.editor_mut().edit_field(field, value),
        Command::AddOption => {
            session.editor_mut().add_option();
        }
        Command::DeleteOption(index) => {
            let id = session.editor().options().get(index).map(|o| o.id);
            if let Some(id) = id {
                session.editor_mut().delete_option(&id);
            }
        }
        Command::EditOption(index, field, value) => {
            session.editor_mut().edit_option(index, field, value)
        }
        Command::AddQuestion => {
            session.add_question();
        }
        Command::ClearQuestion => session.clear_question(),
        Command::DeleteQuestion(index) => {
            if let Some(id) = session.composer().question_id_at(index) {
                session.delete_question(&id);
            }
        }
        Command::List => render(session, out)?,
        Command::Submit => {
            session.submit_quiz();
        }
        Command::Help => out.write_all(HELP.as_bytes())?,
        Command::Quit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

/// Write a plain-text view of the quiz draft and the question being written
pub fn render<M, S, W>(session: &AuthoringSession<M, S>, out: &mut W) -> io::Result<()>
where
    M: MessageSink,
    S: SubmissionSink,
    W: Write,
{
    let quiz = session.quiz_draft();

    writeln!(out, "Quiz:     {}", quiz.name.as_deref().unwrap_or("-"))?;
    writeln!(
        out,
        "Teacher:  {}",
        quiz.teacher_name.as_deref().unwrap_or("-")
    )?;
    writeln!(out, "Starts:   {}", quiz.scheduled_start.to_rfc3339())?;
    writeln!(out, "Duration: {} min", quiz.duration_minutes)?;
    writeln!(
        out,
        "Questions added - {} ({} points)",
        quiz.questions().len(),
        quiz.total_points()
    )?;
    for (i, entry) in quiz.questions().iter().enumerate() {
        let question = &entry.value;
        writeln!(
            out,
            "  {}. {} [{} pt]",
            i + 1,
            question.text(),
            question.point_value()
        )?;
        for option in question.options() {
            let mark = if option.is_correct { '*' } else { ' ' };
            writeln!(out, "     {mark} {}", option.text)?;
        }
    }

    let draft = &session.editor().draft().value;
    writeln!(
        out,
        "Writing:  {} [{} pt]",
        if draft.text.is_empty() { "-" } else { &draft.text },
        draft.point_value
    )?;
    for (i, option) in draft.options.iter().enumerate() {
        let mark = if option.value.is_correct { 'x' } else { ' ' };
        writeln!(out, "  [{mark}] {}. {}", i + 1, option.value.text)?;
    }
    Ok(())
}
