//! Task records used by risk assessment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Candidate;

/// Lifecycle status of a persisted task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started
    #[default]
    Pending,
    /// Being worked on
    InProgress,
    /// Done
    Completed,
    /// Deadline elapsed before completion
    Overdue,
    /// Dropped
    Cancelled,
}

impl TaskStatus {
    /// Pending or in progress
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Completed => write!(f, "completed"),
            Self::Overdue => write!(f, "overdue"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" | "done" => Ok(Self::Completed),
            "overdue" => Ok(Self::Overdue),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            _ => Err(format!(
                "Invalid status: {s}. Use: pending, in_progress, completed, overdue, cancelled"
            )),
        }
    }
}

/// A task handed to the risk assessor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task identifier
    pub id: String,
    /// What has to be done
    pub description: String,
    /// Responsible person, if known
    #[serde(default)]
    pub assignee: Option<String>,
    /// Due date, if known
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    /// When the task was recorded
    pub created_at: DateTime<Utc>,
}

impl TaskRecord {
    /// Build a record for a freshly extracted task candidate
    #[must_use]
    pub fn from_candidate(id: impl Into<String>, candidate: &Candidate, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            description: candidate.text.clone(),
            assignee: candidate.assignee.clone(),
            deadline: candidate.deadline,
            created_at,
        }
    }

    /// Assignee that actually names someone
    ///
    /// Blank values and the literal "none" count as unassigned.
    #[must_use]
    pub fn effective_assignee(&self) -> Option<&str> {
        self.assignee
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty() && !a.eq_ignore_ascii_case("none"))
    }
}

/// A task as seen through the historical store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalTask {
    /// Task identifier
    pub id: String,
    /// Task description
    pub description: String,
    /// Current status
    #[serde(default)]
    pub status: TaskStatus,
    /// Assignee, if any
    #[serde(default)]
    pub assignee: Option<String>,
}
