//! Interactive shell
//!
//! Reads one command per line and runs it against the same service, so
//! todos survive from one line to the next until the session ends. Errors
//! are reported per line and never end the session.

use std::io::{BufRead, Write};

use anyhow::Context;
use clap::Parser;
use todo_core::task::TaskRepository;

use crate::cli::{lowercase_command_word, Command, ShellLine};
use crate::commands::{CommandRunner, ExitStatus};

const PROMPT: &str = "todo> ";
const BANNER: &str = "Todo shell. Type 'help' for available commands, 'exit' to quit.";

#[derive(Debug)]
enum ShellInput {
    Blank,
    Exit,
    Run(Command),
    /// Help or version text requested by the line
    Info(String),
    Invalid(String),
}

fn interpret(line: &str) -> ShellInput {
    let Some(words) = shlex::split(line) else {
        return ShellInput::Invalid("Error: unbalanced quotes in command".to_string());
    };

    let words = lowercase_command_word(words, 0);
    match words.first().and_then(|word| word.to_str()) {
        None if words.is_empty() => ShellInput::Blank,
        Some("exit" | "quit") if words.len() == 1 => ShellInput::Exit,
        _ => match ShellLine::try_parse_from(words) {
            Ok(parsed) => ShellInput::Run(parsed.command),
            Err(e) if !e.use_stderr() => ShellInput::Info(e.render().to_string()),
            Err(e) => ShellInput::Invalid(e.render().to_string()),
        },
    }
}

pub fn run_shell<R: TaskRepository>(
    runner: &CommandRunner<'_, R>,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<ExitStatus> {
    tracing::debug!("shell session started");
    writeln!(out, "{BANNER}")?;

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("failed to read command from stdin")?;
        if read == 0 {
            writeln!(out)?;
            break;
        }

        match interpret(&line) {
            ShellInput::Blank => {}
            ShellInput::Exit => break,
            ShellInput::Run(command) => {
                let status = runner.run(&command, out, err)?;
                tracing::debug!(code = status.code(), "shell command finished");
            }
            ShellInput::Info(text) => writeln!(out, "{}", text.trim_end())?,
            ShellInput::Invalid(text) => writeln!(err, "{}", text.trim_end())?,
        }
    }

    writeln!(out, "Goodbye!")?;
    tracing::debug!("shell session ended");
    Ok(ExitStatus::Success)
}
