//! Core domain logic for tasklens
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Candidate, TaskRecord, RiskAssessment)
//! - `services/` - Extraction pipeline, risk assessor, reporting
//! - `ports/` - Trait definitions for optional capabilities
//! - `error` - Configuration and capability error taxonomy

pub mod error;
pub mod models;
pub mod ports;
pub mod services;
