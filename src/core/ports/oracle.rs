//! Validation oracle port

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::error::CapabilityError;
use crate::core::models::{CandidateKind, OracleVerdict};

/// What the oracle is asked to judge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationRequest {
    /// Task or decision
    pub kind: CandidateKind,
    /// Candidate text
    pub text: String,
    /// Extracted assignee
    pub assignee: Option<String>,
    /// Extracted deadline
    pub deadline: Option<DateTime<Utc>>,
}

impl ValidationRequest {
    /// Render the request as an instruction prompt asking for a JSON verdict
    #[must_use]
    pub fn prompt(&self) -> String {
        let schema = "Return JSON only: {\"valid\": true/false, \"confidence\": 0.0-1.0, \"reason\": \"...\"}";
        match self.kind {
            CandidateKind::Task => format!(
                "Validate this task extraction. {schema}\n\nTask: {}\nAssignee: {}\nDeadline: {}\n",
                self.text,
                self.assignee.as_deref().unwrap_or("None"),
                self.deadline.map_or_else(|| "None".to_string(), |d| d.to_rfc3339()),
            ),
            CandidateKind::Decision => format!(
                "Validate this decision extraction. {schema}\n\nDecision: {}\n",
                self.text
            ),
        }
    }
}

/// External judge refining extraction confidence
#[cfg_attr(test, mockall::automock)]
pub trait ValidationOracle: Send + Sync {
    /// Judge one candidate, giving up after `timeout`
    fn validate(
        &self,
        request: &ValidationRequest,
        timeout: Duration,
    ) -> Result<OracleVerdict, CapabilityError>;
}
