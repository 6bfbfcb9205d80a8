//! In-memory task storage implementation
//!
//! Keeps tasks in insertion order for the lifetime of the process.

use chrono::Utc;
use parking_lot::Mutex;

use super::model::{Task, TaskId};
use super::repository::TaskRepository;
use crate::{Error, Result};

const FIRST_ID: TaskId = 1;

/// In-memory task store
///
/// The collection and the id counter share one lock, so every operation is
/// a single critical section.
pub struct InMemoryTaskStore {
    inner: Mutex<StoreState>,
}

struct StoreState {
    tasks: Vec<Task>,
    /// Next id to hand out; never decremented except by `clear`.
    /// `None` once an id of `TaskId::MAX` has been stored.
    next_id: Option<TaskId>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreState {
                tasks: Vec::new(),
                next_id: Some(FIRST_ID),
            }),
        }
    }

    #[cfg(test)]
    fn next_id(&self) -> Option<TaskId> {
        self.inner.lock().next_id
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRepository for InMemoryTaskStore {
    fn get_all(&self) -> Vec<Task> {
        self.inner.lock().tasks.clone()
    }

    fn get_by_id(&self, id: TaskId) -> Option<Task> {
        let state = self.inner.lock();
        state.tasks.iter().find(|t| t.id == id).cloned()
    }

    fn create(&self, mut task: Task) -> Result<Task> {
        let mut state = self.inner.lock();
        if !task.has_id() {
            let id = state.next_id.ok_or(Error::IdsExhausted)?;
            task.id = id;
            state.next_id = id.checked_add(1);
        } else if state.next_id.is_some_and(|next| task.id >= next) {
            state.next_id = task.id.checked_add(1);
        }
        state.tasks.push(task.clone());
        tracing::debug!(id = task.id, next_id = ?state.next_id, "task stored");
        Ok(task)
    }

    fn update(&self, id: TaskId, mut task: Task) -> Option<Task> {
        let mut state = self.inner.lock();
        let slot = state.tasks.iter_mut().find(|t| t.id == id)?;
        task.id = slot.id;
        task.updated_at = Utc::now();
        *slot = task.clone();
        Some(task)
    }

    fn delete(&self, id: TaskId) -> bool {
        let mut state = self.inner.lock();
        match state.tasks.iter().position(|t| t.id == id) {
            Some(index) => {
                state.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    fn clear(&self) {
        let mut state = self.inner.lock();
        state.tasks.clear();
        state.next_id = Some(FIRST_ID);
    }

    fn len(&self) -> usize {
        self.inner.lock().tasks.len()
    }
}
