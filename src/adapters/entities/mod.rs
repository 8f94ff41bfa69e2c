//! Pattern-based entity annotator
//!
//! Finds dates, times, money amounts, percentages and person names with
//! regular expressions. The first hit per entity type is kept.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{Month, Weekday};
use regex::Regex;

use crate::core::ports::EntityAnnotator;

struct EntityRule {
    label: &'static str,
    regex: Regex,
}

static RULES: LazyLock<Vec<EntityRule>> = LazyLock::new(|| {
    [
        (
            "DATE",
            r"(?i)\b(?:\d{4}-\d{2}-\d{2}|\d{1,2}/\d{1,2}/\d{2,4}|(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{1,2}(?:st|nd|rd|th)?|(?:mon|tues|wednes|thurs|fri|satur|sun)day|today|tomorrow|next\s+(?:week|month|year))\b",
        ),
        ("TIME", r"(?i)\b\d{1,2}(?::\d{2})?\s?(?:am|pm)\b|\b\d{1,2}:\d{2}\b"),
        (
            "MONEY",
            r"(?i)[$€£]\s?\d[\d,]*(?:\.\d+)?(?:\s?(?:k|m|bn|million|billion)\b)?|\b\d[\d,]*(?:\.\d+)?\s?(?:dollars|usd|euros|eur)\b",
        ),
        ("PERCENT", r"(?i)\b\d+(?:\.\d+)?\s?(?:%|percent\b)"),
        ("PERSON", r"\b(?:[Ww]ith|[Tt]o|[Bb]y|[Aa]sk(?:ed)?)\s+([A-Z][a-z]+)\b"),
    ]
    .into_iter()
    .map(|(label, pattern)| EntityRule {
        label,
        regex: Regex::new(pattern).expect("entity pattern"),
    })
    .collect()
});

/// Regex entity annotator
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternAnnotator;

impl PatternAnnotator {
    /// Create an annotator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EntityAnnotator for PatternAnnotator {
    fn annotate(&self, text: &str) -> BTreeMap<String, String> {
        let mut entities = BTreeMap::new();
        for rule in RULES.iter() {
            let found = rule.regex.captures_iter(text).find_map(|caps| {
                let m = caps.get(1).or_else(|| caps.get(0))?;
                let value = m.as_str().trim();
                (rule.label != "PERSON" || !is_calendar_word(value)).then(|| value.to_string())
            });
            if let Some(value) = found {
                entities.insert(rule.label.to_string(), value);
            }
        }
        entities
    }
}

/// Capitalised weekday and month names are not people
fn is_calendar_word(word: &str) -> bool {
    word.parse::<Weekday>().is_ok() || word.parse::<Month>().is_ok()
}
