//! tasklens - Turn meeting and document text into accountable work items
//!
//! This library provides the hybrid extraction pipeline (tasks and
//! decisions with confidence scores) and the deterministic risk engine
//! (explainable, point-traceable risk scores), plus the default adapters
//! and configuration used by the `tasklens` CLI.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    unsafe_code
)]
#![warn(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod capabilities;
pub mod config;
pub mod core;
pub mod output;
