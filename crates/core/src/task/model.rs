//! Task model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a task, allocated by the repository
pub type TaskId = i64;

/// Placeholder id for a task the repository has not stored yet
pub const UNASSIGNED_ID: TaskId = 0;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new pending task with an unassigned id
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: UNASSIGNED_ID,
            title: title.into(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set a pre-assigned id
    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = id;
        self
    }

    /// Set the completion flag
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Whether the repository has allocated an id for this task
    pub fn has_id(&self) -> bool {
        self.id > UNASSIGNED_ID
    }
}

/// Partial update of a task
///
/// A `None` field leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the new title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the new completion flag
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Merge the present fields into `task`, returning the merged copy
    pub fn apply(self, mut task: Task) -> Task {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        task
    }
}
