//! Historical task store port
//!
//! Read-only view into previously persisted tasks.

use crate::core::error::CapabilityError;
use crate::core::models::{HistoricalTask, TaskStatus};

/// Read-only source of past task records
///
/// Implementations may serve a stale snapshot. Callers bound every call
/// with a timeout and treat failures as "no history".
#[cfg_attr(test, mockall::automock)]
pub trait HistoricalStore: Send + Sync {
    /// Up to `limit` tasks other than `task_id`, in store order
    fn list_tasks_except(
        &self,
        task_id: &str,
        limit: usize,
    ) -> Result<Vec<HistoricalTask>, CapabilityError>;

    /// Number of tasks owned by `assignee` with the given status
    fn count_tasks_by_assignee_and_status(
        &self,
        assignee: &str,
        status: TaskStatus,
    ) -> Result<usize, CapabilityError>;
}
