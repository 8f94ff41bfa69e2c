//! Business logic services
//!
//! Pure orchestration logic over domain models. Capabilities arrive as
//! port trait objects; nothing here touches files or the network.
//!
//! - [`pipeline`] - Hybrid extraction of tasks and decisions
//! - [`risk`] - Deterministic, explainable risk scoring
//! - [`report`] - Aggregates over assessed tasks

pub mod bounded;
pub mod confidence;
pub mod dedup;
pub mod history;
pub mod matcher;
pub mod metadata;
pub mod patterns;
pub mod pipeline;
pub mod report;
pub mod risk;
pub mod segmenter;

pub use pipeline::{DEFAULT_ORACLE_TIMEOUT, ExtractionPipeline, ExtractionSettings};
pub use report::{AssigneeRisk, LevelShare, RiskSummary, TimelineDay, by_assignee, summarize, timeline};
pub use risk::{RiskAssessor, RiskSettings};
