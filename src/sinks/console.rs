//! Message sink that writes one line per message

use super::MessageSink;
use std::io::Write;

#[derive(Debug)]
pub struct ConsoleMessageSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleMessageSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MessageSink for ConsoleMessageSink<W> {
    fn notify(&mut self, message: &str) {
        // Nothing sensible to do if the terminal is gone
        if let Err(err) = writeln!(self.out, "» {message}") {
            tracing::warn!("Failed to display message {message:?}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_prefixed_lines() {
        let mut sink = ConsoleMessageSink::new(Vec::new());
        sink.notify("Please add Questions");
        sink.notify("Question added successfully!");

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            written,
            "» Please add Questions\n» Question added successfully!\n"
        );
    }
}
