//! Per-candidate metadata: deadline normalization and assignee extraction
//!
//! Both scan the candidate's source sentence with a fixed keyword order.
//! The first keyword (in that order) present in the sentence decides; later
//! keywords are never tried, even when the first one yields nothing.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::core::ports::DateParser;

/// Deadline keywords in priority order
pub const DEADLINE_KEYWORDS: [&str; 7] = ["by", "due", "deadline", "until", "before", "on", "next"];

/// Assignee keywords in priority order
pub const ASSIGNEE_KEYWORDS: [&str; 5] =
    ["assigned to", "assign to", "owner:", "responsible:", "lead:"];

static DEADLINE_RULES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    DEADLINE_KEYWORDS
        .iter()
        .map(|kw| {
            let expression = format!(r"(?i)\b{kw}\b[:\s]\s*([^,.\n]+)");
            (*kw, Regex::new(&expression).expect("deadline keyword pattern"))
        })
        .collect()
});

static ASSIGNEE_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ASSIGNEE_KEYWORDS
        .iter()
        .map(|kw| {
            let expression = format!(r"(?i)\b{}\s+(\w+)", regex::escape(kw));
            Regex::new(&expression).expect("assignee keyword pattern")
        })
        .collect()
});

/// Find and normalize a deadline in `sentence`
///
/// The phrase after the winning keyword runs up to the next comma, period
/// or newline. For `next` the keyword itself belongs to the phrase
/// ("next Friday"). Returns `None` when no keyword occurs or the phrase
/// does not parse.
#[must_use]
pub fn extract_deadline(
    sentence: &str,
    parser: &dyn DateParser,
    locale: &str,
) -> Option<DateTime<Utc>> {
    let (keyword, phrase) = DEADLINE_RULES.iter().find_map(|(keyword, rule)| {
        rule.captures(sentence)
            .and_then(|caps| caps.get(1))
            .map(|m| (*keyword, m.as_str().trim()))
    })?;

    let expression = if keyword == "next" {
        format!("next {phrase}")
    } else {
        phrase.to_string()
    };

    let parsed = parser.parse(&expression, locale);
    if parsed.is_none() {
        log::debug!("deadline phrase {expression:?} after {keyword:?} did not parse");
    }
    parsed
}

/// Find the assignee named right after an assignee keyword
#[must_use]
pub fn extract_assignee(sentence: &str) -> Option<String> {
    ASSIGNEE_RULES.iter().find_map(|rule| {
        rule.captures(sentence)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}
