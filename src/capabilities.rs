//! Capability wiring
//!
//! Builds the extraction pipeline and the risk assessor from a [`Config`],
//! attaching the default adapters. A capability that cannot be loaded is
//! logged and left out; the run continues on its fallback.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::{EnglishDateParser, LexiconClassifier, PatternAnnotator, json};
use crate::config::Config;
use crate::core::error::ConfigError;
use crate::core::ports::HistoricalStore;
use crate::core::services::{ExtractionPipeline, RiskAssessor};

/// Build the extraction pipeline described by `config`
pub fn extraction_pipeline(config: &Config) -> Result<ExtractionPipeline, ConfigError> {
    let mut pipeline = ExtractionPipeline::new(config.extraction_settings())?
        .with_date_parser(Arc::new(EnglishDateParser::new()));

    if config.extraction.entities {
        pipeline = pipeline.with_annotator(Arc::new(PatternAnnotator::new()));
    }
    if config.oracle.enabled {
        pipeline = attach_oracle(pipeline, config);
    }
    Ok(pipeline)
}

#[cfg(feature = "llm")]
fn attach_oracle(pipeline: ExtractionPipeline, config: &Config) -> ExtractionPipeline {
    use crate::adapters::OllamaOracle;

    let oracle = OllamaOracle::new(&config.oracle.base_url, &config.oracle.model);
    match oracle.probe() {
        Ok(()) => {
            log::info!("validation oracle {} at {}", config.oracle.model, config.oracle.base_url);
            pipeline.with_oracle(Arc::new(oracle))
        },
        Err(e) => {
            log::warn!("validation oracle disabled: {e}");
            pipeline
        },
    }
}

#[cfg(not(feature = "llm"))]
fn attach_oracle(pipeline: ExtractionPipeline, _config: &Config) -> ExtractionPipeline {
    log::warn!("validation oracle disabled: built without the `llm` feature");
    pipeline
}

/// Build the risk assessor described by `config`
///
/// `history` overrides `[history] path`.
pub fn risk_assessor(config: &Config, history: Option<&Path>) -> Result<RiskAssessor, ConfigError> {
    let mut assessor = RiskAssessor::new(config.risk_settings())?;

    if config.risk.sentiment {
        assessor = assessor.with_sentiment(Arc::new(LexiconClassifier::new()));
    }
    if let Some(store) = history_store(history.or(config.history.path.as_deref())) {
        assessor = assessor.with_history(store);
    }
    Ok(assessor)
}

fn history_store(path: Option<&Path>) -> Option<Arc<dyn HistoricalStore>> {
    let path = path?;
    match json::load_snapshot(path) {
        Ok(store) => Some(Arc::new(store)),
        Err(e) => {
            log::warn!("historical store disabled: {e:#}");
            None
        },
    }
}
