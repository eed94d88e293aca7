//! Quiz Composer - compose a quiz from the terminal
//!
//! Reads one command per line from stdin, reports validation messages on
//! stderr and writes submitted quizzes as JSON files.

use anyhow::Result;
use quiz_composer::config::ComposerConfig;
use quiz_composer::session::AuthoringSession;
use quiz_composer::shell::{self, Flow};
use quiz_composer::sinks::{ConsoleMessageSink, JsonFileSink};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quiz_composer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ComposerConfig::load().unwrap_or_else(|err| {
        tracing::warn!("Ignoring unreadable config: {err:#}");
        ComposerConfig::default()
    });
    let submissions = JsonFileSink::new(config.output_dir());
    tracing::info!("Submitted quizzes go to {}", submissions.dir().display());

    let messages = ConsoleMessageSink::new(io::stderr());
    let mut session = AuthoringSession::new(config, messages, submissions);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Compose a quiz. Type `help` for commands.")?;

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            // Undecodable input drops that line only
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                tracing::warn!("Skipping unreadable input line: {err}");
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        if line.trim().is_empty() {
            continue;
        }
        match shell::parse(&line) {
            Ok(command) => {
                if shell::dispatch(&mut session, command, &mut stdout)? == Flow::Exit {
                    break;
                }
            }
            Err(err) => eprintln!("{err}"),
        }
        stdout.flush()?;
    }

    Ok(())
}
