//! Fallback confidence heuristic
//!
//! Used whenever the validation oracle is absent or fails for a candidate.

use crate::core::models::{CandidateDraft, CandidateKind};

const BASE: f64 = 0.6;
const TASK_ASSIGNEE_BONUS: f64 = 0.15;
const TASK_DEADLINE_BONUS: f64 = 0.15;
const TASK_LENGTH_BONUS: f64 = 0.1;
const TASK_MIN_LENGTH: usize = 10;
const DECISION_LENGTH_BONUS: f64 = 0.2;
const DECISION_MIN_LENGTH: usize = 15;

/// Heuristic confidence for a draft, in [0.6, 1.0]
#[must_use]
pub fn fallback_confidence(draft: &CandidateDraft) -> f64 {
    let length = draft.text.chars().count();
    let mut score = BASE;

    match draft.kind {
        CandidateKind::Task => {
            if draft.assignee.is_some() {
                score += TASK_ASSIGNEE_BONUS;
            }
            if draft.deadline.is_some() {
                score += TASK_DEADLINE_BONUS;
            }
            if length > TASK_MIN_LENGTH {
                score += TASK_LENGTH_BONUS;
            }
        },
        CandidateKind::Decision => {
            if length > DECISION_MIN_LENGTH {
                score += DECISION_LENGTH_BONUS;
            }
        },
    }

    score.min(1.0)
}
