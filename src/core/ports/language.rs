//! Language capability ports
//!
//! Stateless inference capabilities: entity annotation, sentiment
//! classification and natural-language date parsing. Each is constructed
//! once and shared read-only.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::CapabilityError;

/// Locale passed to date parsers
pub const DEFAULT_LOCALE: &str = "en";

/// Sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    /// Positive or neutral
    Positive,
    /// Negative
    Negative,
}

/// Classifier output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Winning label
    pub label: SentimentLabel,
    /// Classifier confidence for the label
    pub score: f64,
}

/// Named-entity annotation
#[cfg_attr(test, mockall::automock)]
pub trait EntityAnnotator: Send + Sync {
    /// Entity type → entity text found in `text`
    fn annotate(&self, text: &str) -> BTreeMap<String, String>;
}

/// Binary sentiment classification
#[cfg_attr(test, mockall::automock)]
pub trait SentimentClassifier: Send + Sync {
    /// Classify `text`
    fn classify(&self, text: &str) -> Result<Sentiment, CapabilityError>;
}

/// Natural-language date parsing
#[cfg_attr(test, mockall::automock)]
pub trait DateParser: Send + Sync {
    /// Parse a date expression into an absolute timestamp
    fn parse(&self, expression: &str, locale: &str) -> Option<DateTime<Utc>>;
}
