//! Candidate model
//!
//! A candidate is an extracted task or decision. Drafts carry everything
//! except the confidence score; a [`Candidate`] only exists once confidence
//! has been resolved by the oracle or the fallback heuristic.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of work item a candidate represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    /// Something someone has to do
    Task,
    /// Something the group settled on
    Decision,
}

impl std::fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Task => write!(f, "task"),
            Self::Decision => write!(f, "decision"),
        }
    }
}

/// Verdict returned by the validation oracle for one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleVerdict {
    /// Whether the oracle considers the extraction a genuine item
    pub valid: bool,
    /// Oracle confidence in [0, 1]
    pub confidence: f64,
    /// Free-form justification, empty when the oracle gives none
    #[serde(default)]
    pub reason: String,
}

impl OracleVerdict {
    /// Confidence is finite and inside [0, 1]
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.confidence.is_finite() && (0.0..=1.0).contains(&self.confidence)
    }
}

/// Oracle outcome kept on the candidate for traceability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    /// Oracle's validity flag
    pub valid: bool,
    /// Oracle's reason
    pub reason: String,
}

/// A candidate whose confidence has not been resolved yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDraft {
    /// Task or decision
    pub kind: CandidateKind,
    /// Captured text
    pub text: String,
    /// Sentence the text was captured from
    pub source_sentence: String,
    /// Id of the trigger pattern that matched
    pub pattern_id: &'static str,
    /// Extracted assignee, tasks only
    pub assignee: Option<String>,
    /// Normalized deadline, tasks only
    pub deadline: Option<DateTime<Utc>>,
    /// Entity annotations (type → text)
    pub entities: BTreeMap<String, String>,
}

impl CandidateDraft {
    /// Create a bare draft straight out of the pattern matcher
    #[must_use]
    pub fn new(
        kind: CandidateKind,
        text: impl Into<String>,
        source_sentence: impl Into<String>,
        pattern_id: &'static str,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            source_sentence: source_sentence.into(),
            pattern_id,
            assignee: None,
            deadline: None,
            entities: BTreeMap::new(),
        }
    }

    /// Seal the draft with its resolved confidence
    #[must_use]
    pub fn resolve(self, confidence_score: f64, validation: Option<Validation>) -> Candidate {
        Candidate {
            kind: self.kind,
            text: self.text,
            source_sentence: self.source_sentence,
            pattern_id: self.pattern_id.to_string(),
            assignee: self.assignee,
            deadline: self.deadline,
            entities: self.entities,
            confidence_score,
            validation,
        }
    }
}

/// An extracted task or decision with resolved confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Task or decision
    pub kind: CandidateKind,
    /// Captured text
    pub text: String,
    /// Sentence the text was captured from
    pub source_sentence: String,
    /// Id of the trigger pattern that matched
    pub pattern_id: String,
    /// Extracted assignee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Normalized deadline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    /// Entity annotations (type → text)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub entities: BTreeMap<String, String>,
    /// Confidence in [0, 1]
    pub confidence_score: f64,
    /// Oracle outcome, when the oracle answered for this candidate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<Validation>,
}
