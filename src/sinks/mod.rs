//! Collaborators the authoring session reports to

mod console;
mod json_file;
mod traits;

pub use console::ConsoleMessageSink;
pub use json_file::JsonFileSink;
pub use traits::{MessageSink, SubmissionSink};

#[cfg(test)]
pub use traits::{MockMessageSink, MockSubmissionSink};
