//! Lexicon sentiment classifier
//!
//! Counts hits against small negative and positive word lists. Text is
//! Negative when negative hits outnumber positive ones.

use crate::core::error::CapabilityError;
use crate::core::ports::{Sentiment, SentimentClassifier, SentimentLabel};

const NEGATIVE: &[&str] = &[
    "angry", "bad", "behind", "blocked", "blocker", "broken", "can't", "cannot", "concern",
    "concerned", "concerns", "conflict", "delay", "delayed", "difficult", "disagree",
    "disagreement", "fail", "failed", "failing", "frustrated", "frustrating", "impossible",
    "issue", "issues", "late", "never", "overdue", "problem", "problems", "pushback", "risky",
    "slipping", "struggle", "struggling", "stuck", "terrible", "unclear", "unhappy", "upset",
    "won't", "worried", "worse", "wrong",
];

const POSITIVE: &[&str] = &[
    "agree", "agreed", "ahead", "clear", "confident", "done", "easy", "excellent", "glad",
    "good", "great", "happy", "love", "nice", "progress", "ready", "resolved", "smooth",
    "success", "thanks",
];

/// Word-list sentiment classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    /// Create a classifier
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SentimentClassifier for LexiconClassifier {
    fn classify(&self, text: &str) -> Result<Sentiment, CapabilityError> {
        let lowered = text.to_lowercase().replace('\u{2019}', "'");
        let (mut negative, mut positive) = (0u32, 0u32);
        for word in lowered.split(|c: char| !(c.is_alphanumeric() || c == '\'')) {
            if NEGATIVE.contains(&word) {
                negative += 1;
            } else if POSITIVE.contains(&word) {
                positive += 1;
            }
        }

        let total = negative + positive;
        if total == 0 {
            return Ok(Sentiment {
                label: SentimentLabel::Positive,
                score: 0.5,
            });
        }

        let (label, hits) = if negative > positive {
            (SentimentLabel::Negative, negative)
        } else {
            (SentimentLabel::Positive, positive)
        };
        Ok(Sentiment {
            label,
            score: f64::from(hits) / f64::from(total),
        })
    }
}
