//! Rendering of tasks for the terminal

use std::io::{self, Write};

use serde::Serialize;
use todo_core::task::Task;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn checkbox(task: &Task) -> &'static str {
    if task.completed {
        "[x]"
    } else {
        "[ ]"
    }
}

pub fn status_label(task: &Task) -> &'static str {
    if task.completed {
        "Completed"
    } else {
        "Pending"
    }
}

/// `<id>. [x] <title>`
pub fn write_task_line(out: &mut dyn Write, task: &Task) -> io::Result<()> {
    writeln!(out, "{}. {} {}", task.id, checkbox(task), task.title)
}

/// Header followed by one line per task, or `empty` when there are none
pub fn write_task_list(
    out: &mut dyn Write,
    tasks: &[Task],
    header: &str,
    empty: &str,
) -> io::Result<()> {
    if tasks.is_empty() {
        return writeln!(out, "{empty}");
    }
    writeln!(out, "{header}")?;
    for task in tasks {
        write_task_line(out, task)?;
    }
    Ok(())
}

pub fn write_task_details(out: &mut dyn Write, task: &Task) -> io::Result<()> {
    writeln!(out, "Todo #{}", task.id)?;
    writeln!(out, "Title: {}", task.title)?;
    writeln!(out, "Status: {}", status_label(task))?;
    writeln!(out, "Created: {}", task.created_at.format(TIMESTAMP_FORMAT))?;
    writeln!(out, "Updated: {}", task.updated_at.format(TIMESTAMP_FORMAT))
}

pub fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
