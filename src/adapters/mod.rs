//! Adapter implementations for port traits
//!
//! This module contains concrete implementations of the capabilities the
//! core consults:
//!
//! - `dates/` - Rule-based English date parser
//! - `lexicon/` - Word-list sentiment classifier
//! - `entities/` - Regex entity annotator
//! - `memory/` - In-memory historical task store
//! - `json/` - JSON snapshot and report loading
//! - `ollama/` - HTTP validation oracle (feature `llm`)

pub mod dates;
pub mod entities;
pub mod json;
pub mod lexicon;
pub mod memory;
#[cfg(feature = "llm")]
pub mod ollama;

pub use dates::EnglishDateParser;
pub use entities::PatternAnnotator;
pub use lexicon::LexiconClassifier;
pub use memory::InMemoryTaskStore;
#[cfg(feature = "llm")]
pub use ollama::OllamaOracle;
