//! Port traits (interfaces) for external capabilities
//!
//! These traits define the boundaries between core logic and the optional
//! collaborators it consults: the historical task store, the validation
//! oracle, and the language capabilities.
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on concrete
//! implementations. Every capability is optional except date parsing, and
//! every call site has a deterministic fallback.

mod history;
mod language;
mod oracle;

pub use history::HistoricalStore;
pub use language::{
    DEFAULT_LOCALE, DateParser, EntityAnnotator, Sentiment, SentimentClassifier, SentimentLabel,
};
pub use oracle::{ValidationOracle, ValidationRequest};

#[cfg(test)]
pub use history::MockHistoricalStore;
#[cfg(test)]
pub use language::{MockDateParser, MockEntityAnnotator, MockSentimentClassifier};
#[cfg(test)]
pub use oracle::MockValidationOracle;
