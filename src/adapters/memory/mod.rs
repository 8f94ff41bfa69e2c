//! In-memory historical task store
//!
//! Implements `HistoricalStore` over a fixed list of past tasks, most
//! recent first. Loaded from a JSON snapshot by the CLI.

use crate::core::error::CapabilityError;
use crate::core::models::{HistoricalTask, TaskStatus};
use crate::core::ports::HistoricalStore;

/// Read-only store backed by a vector
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Vec<HistoricalTask>,
}

impl InMemoryTaskStore {
    /// Create a store over `tasks`, in store order
    #[must_use]
    pub const fn new(tasks: Vec<HistoricalTask>) -> Self {
        Self { tasks }
    }

    /// Number of stored tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl FromIterator<HistoricalTask> for InMemoryTaskStore {
    fn from_iter<I: IntoIterator<Item = HistoricalTask>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl HistoricalStore for InMemoryTaskStore {
    fn list_tasks_except(
        &self,
        task_id: &str,
        limit: usize,
    ) -> Result<Vec<HistoricalTask>, CapabilityError> {
        Ok(self.tasks.iter().filter(|t| t.id != task_id).take(limit).cloned().collect())
    }

    fn count_tasks_by_assignee_and_status(
        &self,
        assignee: &str,
        status: TaskStatus,
    ) -> Result<usize, CapabilityError> {
        Ok(self
            .tasks
            .iter()
            .filter(|t| t.status == status && t.assignee.as_deref().map(str::trim) == Some(assignee))
            .count())
    }
}
