//! Command execution against a [`TaskService`]
//!
//! Turns parsed commands into service calls and service results into
//! output and exit statuses. Business failures are reported on the error
//! stream; the process itself is never terminated here.

use std::io::Write;
use std::process::ExitCode;

use serde_json::json;
use todo_core::task::{Task, TaskId, TaskPatch, TaskRepository, TaskService};

use crate::cli::{join_title, Command, ListArgs};
use crate::config::OutputFormat;
use crate::output;

/// Process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// Validation, duplicate title, or missing todo
    Failure,
    /// Bad arguments, rejected before reaching the service
    Usage,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
            Self::Usage => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

pub struct CommandRunner<'a, R> {
    service: &'a TaskService<R>,
    format: OutputFormat,
}

impl<'a, R: TaskRepository> CommandRunner<'a, R> {
    pub fn new(service: &'a TaskService<R>, format: OutputFormat) -> Self {
        Self { service, format }
    }

    pub fn run(
        &self,
        command: &Command,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> anyhow::Result<ExitStatus> {
        tracing::debug!(?command, "running command");

        match command {
            Command::Add { title } => self.add(&join_title(title), out, err),
            Command::List(args) => self.list(args, out),
            Command::Show { id } => {
                let result = self.service.get_todo(*id);
                self.single(*id, result, out, err, |out, task| {
                    output::write_task_details(out, task)
                })
            }
            Command::Complete { id } => {
                let result = self.service.complete_todo(*id);
                self.single(*id, result, out, err, |out, task| {
                    writeln!(out, "Todo #{} marked as completed", task.id)
                })
            }
            Command::Reopen { id } => {
                let result = self.service.reopen_todo(*id);
                self.single(*id, result, out, err, |out, task| {
                    writeln!(out, "Todo #{} marked as pending", task.id)
                })
            }
            Command::Update { id, title } => {
                let patch = TaskPatch::new().with_title(join_title(title));
                let result = self.service.update_todo(*id, patch);
                self.single(*id, result, out, err, |out, task| {
                    writeln!(out, "Todo #{} updated", task.id)
                })
            }
            Command::Delete { id } => self.delete(*id, out, err),
            Command::Clear => {
                self.service.clear_todos();
                match self.format {
                    OutputFormat::Text => writeln!(out, "All todos cleared")?,
                    OutputFormat::Json => output::write_json(out, &json!({ "cleared": true }))?,
                }
                Ok(ExitStatus::Success)
            }
            Command::Shell => {
                writeln!(err, "Error: the interactive shell is already running")?;
                Ok(ExitStatus::Usage)
            }
        }
    }

    fn add(&self, title: &str, out: &mut dyn Write, err: &mut dyn Write) -> anyhow::Result<ExitStatus> {
        match self.service.add_todo(title) {
            Ok(task) => {
                match self.format {
                    OutputFormat::Text => {
                        writeln!(out, "Added todo: \"{}\" (ID: {})", task.title, task.id)?
                    }
                    OutputFormat::Json => output::write_json(out, &task)?,
                }
                Ok(ExitStatus::Success)
            }
            Err(e) => report_error(err, &e),
        }
    }

    fn list(&self, args: &ListArgs, out: &mut dyn Write) -> anyhow::Result<ExitStatus> {
        let (tasks, header, empty) = if args.completed {
            (
                self.service.get_completed_todos(),
                "Completed todos:",
                "No completed todos found",
            )
        } else if args.pending {
            (
                self.service.get_pending_todos(),
                "Pending todos:",
                "No pending todos found",
            )
        } else {
            (self.service.get_all_todos(), "Todos:", "No todos found")
        };

        match self.format {
            OutputFormat::Text => output::write_task_list(out, &tasks, header, empty)?,
            OutputFormat::Json => output::write_json(out, &tasks)?,
        }
        Ok(ExitStatus::Success)
    }

    fn delete(&self, id: TaskId, out: &mut dyn Write, err: &mut dyn Write) -> anyhow::Result<ExitStatus> {
        match self.service.delete_todo(id) {
            Ok(true) => {
                match self.format {
                    OutputFormat::Text => writeln!(out, "Todo #{id} deleted")?,
                    OutputFormat::Json => {
                        output::write_json(out, &json!({ "id": id, "deleted": true }))?
                    }
                }
                Ok(ExitStatus::Success)
            }
            Ok(false) => report_not_found(err, id),
            Err(e) => report_error(err, &e),
        }
    }

    /// Shared handling for commands that act on one task
    fn single(
        &self,
        id: TaskId,
        result: todo_core::Result<Option<Task>>,
        out: &mut dyn Write,
        err: &mut dyn Write,
        render: impl FnOnce(&mut dyn Write, &Task) -> std::io::Result<()>,
    ) -> anyhow::Result<ExitStatus> {
        match result {
            Ok(Some(task)) => {
                match self.format {
                    OutputFormat::Text => render(out, &task)?,
                    OutputFormat::Json => output::write_json(out, &task)?,
                }
                Ok(ExitStatus::Success)
            }
            Ok(None) => report_not_found(err, id),
            Err(e) => report_error(err, &e),
        }
    }
}

fn report_error(err: &mut dyn Write, error: &todo_core::Error) -> anyhow::Result<ExitStatus> {
    tracing::debug!(%error, "command rejected");
    writeln!(err, "Error: {error}")?;
    Ok(ExitStatus::Failure)
}

fn report_not_found(err: &mut dyn Write, id: TaskId) -> anyhow::Result<ExitStatus> {
    writeln!(err, "Error: Todo #{id} not found")?;
    Ok(ExitStatus::Failure)
}
