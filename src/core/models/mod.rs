//! Domain models for tasklens
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Candidate`] - An extracted task or decision with resolved confidence
//! - [`TextSource`] - Transcript, document or raw text fed to extraction
//! - [`ExtractionResult`] - Output contract of one extraction run
//! - [`TaskRecord`] / [`HistoricalTask`] - Tasks as assessed and as stored
//! - [`RiskAssessment`] - Explainable, point-traceable risk score

mod candidate;
mod extraction;
mod risk;
mod source;
mod task;

pub use candidate::{Candidate, CandidateDraft, CandidateKind, OracleVerdict, Validation};
pub use extraction::{ExtractionMetadata, ExtractionResult};
pub use risk::{
    AssessedTask, MAX_SCORE, RiskAssessment, RiskBreakdown, RiskCategory, RiskFactor, RiskLevel,
};
pub use source::{DocumentSection, DocumentText, TextSource, TranscriptSegment};
pub use task::{HistoricalTask, TaskRecord, TaskStatus};
