//! Extraction output contract

use serde::{Deserialize, Serialize};

use super::Candidate;

/// Counters describing one extraction run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Number of input segments (transcript segments or document sections)
    pub segment_count: usize,
    /// Task candidates surviving deduplication
    pub rule_based_task_count: usize,
    /// Decision candidates surviving deduplication
    pub rule_based_decision_count: usize,
    /// Whether a validation oracle was configured for the run
    pub oracle_used: bool,
}

/// Result of one extraction run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Task candidates in extraction order
    pub tasks: Vec<Candidate>,
    /// Decision candidates in extraction order
    pub decisions: Vec<Candidate>,
    /// The concatenated input text
    pub raw_text: String,
    /// Run counters
    pub metadata: ExtractionMetadata,
}

impl ExtractionResult {
    /// True when neither tasks nor decisions were found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.decisions.is_empty()
    }
}
