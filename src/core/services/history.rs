//! Repetition detection and historical delay analysis
//!
//! Both helpers read the historical store under a timeout and fail open:
//! any store problem contributes zero points.

use std::sync::Arc;
use std::time::Duration;

use similar::TextDiff;

use crate::core::models::TaskStatus;
use crate::core::ports::HistoricalStore;

use super::bounded::call_with_timeout;

/// Points for a repeated open topic
pub const REPETITION_POINTS: u32 = 15;

/// Points for three or more overdue tasks
pub const HEAVY_DELAY_POINTS: u32 = 10;

/// Points for one or two overdue tasks
pub const LIGHT_DELAY_POINTS: u32 = 5;

/// Symmetric similarity ratio in [0, 1] between two descriptions
///
/// Matched characters over total length (`2 * M / T`), compared
/// case-insensitively. Inserting a word into an otherwise identical
/// description keeps the ratio high.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let (a, b) = (a.to_lowercase(), b.to_lowercase());
    let forward = TextDiff::from_chars(a.as_str(), b.as_str()).ratio();
    let backward = TextDiff::from_chars(b.as_str(), a.as_str()).ratio();
    f64::from(forward.max(backward))
}

/// An earlier open task that looks like the one being assessed
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatedTopic {
    /// Id of the matching task
    pub task_id: String,
    /// Its similarity to the assessed description
    pub similarity: f64,
}

/// Scans recent tasks for an open one with a near-identical description
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepetitionDetector {
    /// Similarity that must be exceeded
    pub threshold: f64,
    /// Maximum number of comparisons
    pub limit: usize,
    /// Upper bound for the store query
    pub timeout: Duration,
}

impl RepetitionDetector {
    /// First open task among the next `limit` others that exceeds the threshold
    ///
    /// Scanning stops at the first hit. A similar task that is already
    /// closed does not count and scanning continues.
    #[must_use]
    pub fn find_repeat(
        &self,
        store: &Arc<dyn HistoricalStore>,
        task_id: &str,
        description: &str,
    ) -> Option<RepeatedTopic> {
        if description.trim().is_empty() {
            return None;
        }

        let store = Arc::clone(store);
        let own_id = task_id.to_string();
        let limit = self.limit;
        let others = match call_with_timeout(self.timeout, move || {
            store.list_tasks_except(&own_id, limit)
        }) {
            Ok(others) => others,
            Err(e) => {
                log::warn!("repetition check skipped for {task_id}: {e}");
                return None;
            },
        };

        others
            .iter()
            .filter(|other| other.id != task_id)
            .take(self.limit)
            .find_map(|other| {
                let ratio = similarity(description, &other.description);
                (ratio > self.threshold && other.status.is_open()).then(|| RepeatedTopic {
                    task_id: other.id.clone(),
                    similarity: ratio,
                })
            })
    }
}

/// Counts an assignee's overdue tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayAnalyzer {
    /// Upper bound for the store query
    pub timeout: Duration,
}

impl DelayAnalyzer {
    /// Number of overdue tasks on record for `assignee`, `None` on store failure
    #[must_use]
    pub fn overdue_count(&self, store: &Arc<dyn HistoricalStore>, assignee: &str) -> Option<usize> {
        let store = Arc::clone(store);
        let who = assignee.to_string();
        match call_with_timeout(self.timeout, move || {
            store.count_tasks_by_assignee_and_status(&who, TaskStatus::Overdue)
        }) {
            Ok(count) => Some(count),
            Err(e) => {
                log::warn!("delay history skipped for {assignee}: {e}");
                None
            },
        }
    }
}

/// Points for an overdue count: 3+ → 10, 1-2 → 5, 0 → 0
#[must_use]
pub const fn delay_points(overdue: usize) -> u32 {
    match overdue {
        0 => 0,
        1 | 2 => LIGHT_DELAY_POINTS,
        _ => HEAVY_DELAY_POINTS,
    }
}
