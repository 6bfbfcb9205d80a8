//! `todo` command-line tool
//!
//! Every invocation starts from an empty in-memory store. Use `todo shell`
//! to keep todos across several commands in one session.
//!
//! # Usage
//!
//! ```bash
//! todo add Buy milk
//! todo list --pending
//! todo shell
//! ```

mod cli;
mod commands;
mod config;
mod output;
mod shell;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use todo_core::task::{InMemoryTaskStore, TaskService};

use crate::cli::{Cli, Command};
use crate::commands::{CommandRunner, ExitStatus};
use crate::config::CliConfig;

fn main() -> ExitCode {
    let cli = Cli::parse_from(cli::lowercase_command_word(std::env::args_os(), 1));

    let config = CliConfig::from_cli(&cli);
    config.init_tracing();

    let service = TaskService::new(InMemoryTaskStore::new());
    let runner = CommandRunner::new(&service, config.format);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let result = match &cli.command {
        Command::Shell => shell::run_shell(&runner, &mut io::stdin().lock(), &mut out, &mut err),
        command => runner.run(command, &mut out, &mut err),
    };

    match result {
        Ok(status) => status.into(),
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            let _ = writeln!(err, "Error: {e:#}");
            ExitStatus::Failure.into()
        }
    }
}
