//! Trigger pattern tables
//!
//! Two ordered, immutable tables of trigger expressions, compiled once.
//! Table order is significant: it fixes candidate order within a sentence.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::CandidateKind;

/// One trigger expression with its capture rule
///
/// The candidate text is capture group 1 when the expression has one,
/// otherwise the whole match.
#[derive(Debug)]
pub struct TriggerPattern {
    /// Stable identifier reported on candidates
    pub id: &'static str,
    expression: Regex,
}

impl TriggerPattern {
    fn new(id: &'static str, expression: &str) -> Self {
        Self {
            id,
            expression: Regex::new(expression).expect("trigger table pattern"),
        }
    }

    /// The raw expression
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.expression.as_str()
    }

    /// Captured texts for every match in `sentence`, in match order
    pub fn captures<'s>(&'s self, sentence: &'s str) -> impl Iterator<Item = &'s str> + 's {
        self.expression.captures_iter(sentence).filter_map(|caps| {
            caps.get(1).or_else(|| caps.get(0)).map(|m| m.as_str())
        })
    }
}

/// Ordered trigger table for one candidate kind
#[derive(Debug)]
pub struct PatternTable {
    kind: CandidateKind,
    patterns: Vec<TriggerPattern>,
}

static TASK_TABLE: LazyLock<PatternTable> = LazyLock::new(|| PatternTable {
    kind: CandidateKind::Task,
    patterns: vec![
        TriggerPattern::new("task.will", r"(?im)\b(?:will|gonna)\s+(\w.*?)(?:[.,]|$)"),
        TriggerPattern::new("task.lets", r"(?im)\blet['’]?s\s+(\w.*?)(?:[.,]|$)"),
        TriggerPattern::new("task.assigned", r"(?im)\bassigned(?:\s+to|:)\s+(\w+)"),
        TriggerPattern::new(
            "task.should",
            r"(?im)\b(?:should|must)\s+(\w.*?)(?:[.,]|\s+by\b|$)",
        ),
        TriggerPattern::new("task.need", r"(?im)\bneeds?(?:\s+to)?\s+(\w.*?)(?:[.,]|$)"),
    ],
});

static DECISION_TABLE: LazyLock<PatternTable> = LazyLock::new(|| PatternTable {
    kind: CandidateKind::Decision,
    patterns: vec![
        TriggerPattern::new(
            "decision.decided",
            r"(?im)\b(?:we\s+)?decided\s+((?:to|that)\s+.*?)(?:\s+going forward|\s+from now on|[.,]|$)",
        ),
        TriggerPattern::new(
            "decision.agreed",
            r"(?im)\bagreed(?:\s+(?:to|that|on))?\s+(.*?)(?:[.,]|$)",
        ),
        TriggerPattern::new(
            "decision.we_will",
            r"(?im)\bwe\s+will\s+(.*?)(?:\s+going forward|\s+from now on|\.?$)",
        ),
        TriggerPattern::new(
            "decision.moving_forward",
            r"(?im)\b(?:moving forward|henceforth),?\s+(.*?)(?:\.|$)",
        ),
    ],
});

impl PatternTable {
    /// Task trigger table
    #[must_use]
    pub fn tasks() -> &'static Self {
        &TASK_TABLE
    }

    /// Decision trigger table
    #[must_use]
    pub fn decisions() -> &'static Self {
        &DECISION_TABLE
    }

    /// Kind of candidate this table produces
    #[must_use]
    pub const fn kind(&self) -> CandidateKind {
        self.kind
    }

    /// Patterns in table order
    #[must_use]
    pub fn patterns(&self) -> &[TriggerPattern] {
        &self.patterns
    }
}
