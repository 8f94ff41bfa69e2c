//! Hybrid extraction pipeline
//!
//! text → sentences → trigger matches → dedup → enrichment (deadline,
//! assignee, entities) → confidence (oracle or fallback).
//!
//! Capabilities are injected at construction. Each one is optional and its
//! absence or failure degrades to a documented fallback; nothing here
//! returns an error once the pipeline is built.

use std::sync::Arc;
use std::time::Duration;

use crate::core::error::{CapabilityError, ConfigError};
use crate::core::models::{
    Candidate, CandidateDraft, CandidateKind, ExtractionMetadata, ExtractionResult, TextSource,
    Validation,
};
use crate::core::ports::{
    DEFAULT_LOCALE, DateParser, EntityAnnotator, ValidationOracle, ValidationRequest,
};

use super::bounded::call_with_timeout;
use super::confidence::fallback_confidence;
use super::dedup::dedup_drafts;
use super::matcher::match_sentences;
use super::metadata::{extract_assignee, extract_deadline};
use super::patterns::PatternTable;
use super::segmenter::split_sentences;

/// Default per-candidate oracle timeout
pub const DEFAULT_ORACLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Tunables for extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionSettings {
    /// Locale handed to the date parser
    pub locale: String,
    /// Upper bound for one oracle call
    pub oracle_timeout: Duration,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            oracle_timeout: DEFAULT_ORACLE_TIMEOUT,
        }
    }
}

/// Converts free text into task and decision candidates
pub struct ExtractionPipeline {
    settings: ExtractionSettings,
    date_parser: Option<Arc<dyn DateParser>>,
    annotator: Option<Arc<dyn EntityAnnotator>>,
    oracle: Option<Arc<dyn ValidationOracle>>,
}

impl std::fmt::Debug for ExtractionPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractionPipeline")
            .field("settings", &self.settings)
            .field("date_parser", &self.date_parser.is_some())
            .field("annotator", &self.annotator.is_some())
            .field("oracle", &self.oracle.is_some())
            .finish()
    }
}

impl ExtractionPipeline {
    /// Create a pipeline with no optional capabilities
    pub fn new(settings: ExtractionSettings) -> Result<Self, ConfigError> {
        if settings.oracle_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout("oracle"));
        }
        Ok(Self {
            settings,
            date_parser: None,
            annotator: None,
            oracle: None,
        })
    }

    /// Use `parser` to normalize deadlines
    #[must_use]
    pub fn with_date_parser(mut self, parser: Arc<dyn DateParser>) -> Self {
        self.date_parser = Some(parser);
        self
    }

    /// Attach entity annotations with `annotator`
    #[must_use]
    pub fn with_annotator(mut self, annotator: Arc<dyn EntityAnnotator>) -> Self {
        self.annotator = Some(annotator);
        self
    }

    /// Resolve confidence through `oracle` before falling back
    #[must_use]
    pub fn with_oracle(mut self, oracle: Arc<dyn ValidationOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Whether an oracle is configured
    #[must_use]
    pub const fn oracle_enabled(&self) -> bool {
        self.oracle.is_some()
    }

    /// Run the pipeline over raw text
    #[must_use]
    pub fn extract_text(&self, text: &str) -> ExtractionResult {
        self.extract(&TextSource::Raw(text.to_string()))
    }

    /// Run the pipeline over any text source
    #[must_use]
    pub fn extract(&self, source: &TextSource) -> ExtractionResult {
        let raw_text = source.full_text();
        let sentences = split_sentences(&raw_text);
        log::debug!("segmented input into {} sentence(s)", sentences.len());

        let task_drafts = dedup_drafts(match_sentences(PatternTable::tasks(), &sentences));
        let decision_drafts = dedup_drafts(match_sentences(PatternTable::decisions(), &sentences));

        let metadata = ExtractionMetadata {
            segment_count: source.segment_count(),
            rule_based_task_count: task_drafts.len(),
            rule_based_decision_count: decision_drafts.len(),
            oracle_used: self.oracle_enabled(),
        };

        let tasks = task_drafts
            .into_iter()
            .map(|d| self.resolve(self.enrich(d)))
            .collect::<Vec<_>>();
        let decisions = decision_drafts
            .into_iter()
            .map(|d| self.resolve(self.enrich(d)))
            .collect::<Vec<_>>();

        log::info!(
            "extracted {} task(s) and {} decision(s) from {} segment(s)",
            tasks.len(),
            decisions.len(),
            metadata.segment_count
        );

        ExtractionResult {
            tasks,
            decisions,
            raw_text,
            metadata,
        }
    }

    /// Attach deadline, assignee and entities. Never touches the text.
    fn enrich(&self, mut draft: CandidateDraft) -> CandidateDraft {
        if draft.kind == CandidateKind::Task {
            draft.deadline = self.date_parser.as_deref().and_then(|parser| {
                extract_deadline(&draft.source_sentence, parser, &self.settings.locale)
            });
            draft.assignee = extract_assignee(&draft.source_sentence);
        }
        if let Some(annotator) = &self.annotator {
            draft.entities = annotator.annotate(&draft.text);
        }
        draft
    }

    /// Settle confidence: oracle verdict when it answers sensibly, else fallback
    fn resolve(&self, draft: CandidateDraft) -> Candidate {
        let Some(oracle) = &self.oracle else {
            let confidence = fallback_confidence(&draft);
            return draft.resolve(confidence, None);
        };

        let request = ValidationRequest {
            kind: draft.kind,
            text: draft.text.clone(),
            assignee: draft.assignee.clone(),
            deadline: draft.deadline,
        };
        let oracle = Arc::clone(oracle);
        let timeout = self.settings.oracle_timeout;
        let verdict = call_with_timeout(timeout, move || oracle.validate(&request, timeout))
            .and_then(|verdict| {
                if verdict.is_well_formed() {
                    Ok(verdict)
                } else {
                    Err(CapabilityError::Malformed(format!(
                        "confidence {} outside [0, 1]",
                        verdict.confidence
                    )))
                }
            });

        match verdict {
            Ok(verdict) => {
                let validation = Validation {
                    valid: verdict.valid,
                    reason: verdict.reason,
                };
                draft.resolve(verdict.confidence, Some(validation))
            },
            Err(e) => {
                log::debug!("oracle fallback for {:?}: {e}", draft.text);
                let confidence = fallback_confidence(&draft);
                draft.resolve(confidence, None)
            },
        }
    }
}
