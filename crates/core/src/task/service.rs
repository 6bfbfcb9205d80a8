//! Task service
//!
//! Business rules on top of a [`TaskRepository`]: id and title validation,
//! title uniqueness, and the compound operations built from partial updates.
//! Every check runs before the repository is touched, so a failed call never
//! leaves a partial write behind.

use tracing::debug;

use super::model::{Task, TaskId, TaskPatch};
use super::repository::TaskRepository;
use super::validation::{validate_id, validate_title};
use crate::{Error, Result};

/// Business operations over a [`TaskRepository`]
///
/// Title uniqueness is checked and the write made under separate repository
/// calls, so the service expects one caller at a time. Hosts that share it
/// across threads must serialize calls themselves.
pub struct TaskService<R> {
    repository: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Access the underlying repository
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Create a pending task with the given title
    ///
    /// Fails when the title is malformed or already held by any task,
    /// completed or not.
    pub fn add_todo(&self, title: &str) -> Result<Task> {
        validate_title(title)?;
        self.ensure_title_available(title, None)?;

        let task = self.repository.create(Task::new(title))?;
        debug!(id = task.id, title = %task.title, "todo added");
        Ok(task)
    }

    pub fn get_all_todos(&self) -> Vec<Task> {
        self.repository.get_all()
    }

    pub fn get_todo(&self, id: TaskId) -> Result<Option<Task>> {
        validate_id(id)?;
        Ok(self.repository.get_by_id(id))
    }

    /// Apply a partial update
    ///
    /// Returns `Ok(None)` when no task has this id. Renaming a task to its
    /// own current title is allowed; renaming it to another task's title is
    /// a [`Error::DuplicateTitle`].
    pub fn update_todo(&self, id: TaskId, patch: TaskPatch) -> Result<Option<Task>> {
        validate_id(id)?;

        let Some(existing) = self.repository.get_by_id(id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title.as_deref() {
            validate_title(title)?;
            if title != existing.title {
                self.ensure_title_available(title, Some(id))?;
            }
        }

        let merged = patch.apply(existing);
        let updated = self.repository.update(id, merged);
        if let Some(task) = &updated {
            debug!(id = task.id, completed = task.completed, "todo updated");
        }
        Ok(updated)
    }

    pub fn complete_todo(&self, id: TaskId) -> Result<Option<Task>> {
        self.update_todo(id, TaskPatch::new().with_completed(true))
    }

    /// Mark a task as pending again
    pub fn reopen_todo(&self, id: TaskId) -> Result<Option<Task>> {
        self.update_todo(id, TaskPatch::new().with_completed(false))
    }

    pub fn delete_todo(&self, id: TaskId) -> Result<bool> {
        validate_id(id)?;
        let deleted = self.repository.delete(id);
        debug!(id, deleted, "todo delete requested");
        Ok(deleted)
    }

    pub fn get_completed_todos(&self) -> Vec<Task> {
        self.get_all_todos()
            .into_iter()
            .filter(|t| t.completed)
            .collect()
    }

    pub fn get_pending_todos(&self) -> Vec<Task> {
        self.get_all_todos()
            .into_iter()
            .filter(|t| !t.completed)
            .collect()
    }

    /// Drop every task and restart id allocation
    pub fn clear_todos(&self) {
        self.repository.clear();
        debug!("todos cleared");
    }

    fn ensure_title_available(&self, title: &str, except: Option<TaskId>) -> Result<()> {
        let taken = self
            .repository
            .get_all()
            .iter()
            .any(|t| Some(t.id) != except && t.title == title);
        if taken {
            return Err(Error::DuplicateTitle {
                title: title.to_string(),
            });
        }
        Ok(())
    }
}
