//! Task repository trait
//!
//! Defines the interface for task storage operations.

use std::sync::Arc;

use super::model::{Task, TaskId};
use crate::Result;

/// Repository interface for task CRUD operations
///
/// Implementations own the canonical collection and allocate ids. They do
/// not validate content; that is the service's job.
pub trait TaskRepository: Send + Sync {
    /// Get all tasks in insertion order
    fn get_all(&self) -> Vec<Task>;

    /// Get a task by ID
    fn get_by_id(&self, id: TaskId) -> Option<Task>;

    /// Store a new task, allocating an id when it has none
    ///
    /// Fails with [`crate::Error::IdsExhausted`] when an id is needed and
    /// the counter has no values left.
    fn create(&self, task: Task) -> Result<Task>;

    /// Replace the task stored under `id`, keeping its original id
    fn update(&self, id: TaskId, task: Task) -> Option<Task>;

    /// Delete a task by ID
    fn delete(&self, id: TaskId) -> bool;

    /// Remove every task and reset id allocation
    fn clear(&self);

    fn len(&self) -> usize {
        self.get_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R: TaskRepository + ?Sized> TaskRepository for Arc<R> {
    fn get_all(&self) -> Vec<Task> {
        (**self).get_all()
    }

    fn get_by_id(&self, id: TaskId) -> Option<Task> {
        (**self).get_by_id(id)
    }

    fn create(&self, task: Task) -> Result<Task> {
        (**self).create(task)
    }

    fn update(&self, id: TaskId, task: Task) -> Option<Task> {
        (**self).update(id, task)
    }

    fn delete(&self, id: TaskId) -> bool {
        (**self).delete(id)
    }

    fn clear(&self) {
        (**self).clear()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
