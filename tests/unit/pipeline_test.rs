//! Extraction pipeline tests through the public API

use std::sync::Arc;
use std::time::Duration;

use tasklens::core::models::{
    CandidateKind, DocumentSection, DocumentText, OracleVerdict, TextSource, TranscriptSegment,
};
use tasklens::core::services::{ExtractionPipeline, ExtractionSettings};

use crate::common::{FixedDateParser, FixedOracle, SlowOracle, fixed_now};

fn pipeline() -> ExtractionPipeline {
    ExtractionPipeline::new(ExtractionSettings::default()).unwrap()
}

fn segment(speaker: &str, text: &str) -> TranscriptSegment {
    TranscriptSegment {
        speaker: speaker.to_string(),
        start_time: 0.0,
        end_time: 1.0,
        text: text.to_string(),
    }
}

// =============================================================================
// DECISIONS
// =============================================================================

#[test]
fn test_decision_going_forward_is_single_candidate() {
    let result = pipeline().extract_text("We decided to migrate to the new vendor going forward.");
    assert_eq!(result.decisions.len(), 1);
    assert_eq!(result.decisions[0].text, "to migrate to the new vendor");
    assert_eq!(result.decisions[0].kind, CandidateKind::Decision);
    assert!(result.tasks.is_empty());
}

#[test]
fn test_decision_confidence_uses_length_bonus() {
    let result = pipeline().extract_text("We decided to migrate to the new vendor going forward.");
    assert!((result.decisions[0].confidence_score - 0.8).abs() < 1e-9);
    assert!(result.decisions[0].validation.is_none());
}

// =============================================================================
// TASKS
// =============================================================================

#[test]
fn test_task_with_deadline_and_fallback_confidence() {
    let due = fixed_now();
    let result = pipeline()
        .with_date_parser(Arc::new(FixedDateParser(Some(due))))
        .extract_text("Alice will send the deck by Friday.");

    assert_eq!(result.tasks.len(), 1);
    let task = &result.tasks[0];
    assert_eq!(task.text, "send the deck by Friday");
    assert_eq!(task.deadline, Some(due));
    assert_eq!(task.assignee, None);
    assert!((task.confidence_score - 0.85).abs() < 1e-9);
}

#[test]
fn test_unparseable_deadline_is_none() {
    let result = pipeline()
        .with_date_parser(Arc::new(FixedDateParser(None)))
        .extract_text("Alice will send the deck by whenever.");
    assert_eq!(result.tasks[0].deadline, None);
}

#[test]
fn test_case_insensitive_duplicates_collapse() {
    let result = pipeline().extract_text("We need to call Dan. WE NEED TO CALL DAN.");
    assert_eq!(result.tasks.len(), 1);
    assert_eq!(result.tasks[0].text, "call Dan");
    assert_eq!(result.metadata.rule_based_task_count, 1);
}

#[test]
fn test_extraction_is_idempotent() {
    let text = "Priya will book the venue. Let's review the budget, then we decided that Q3 ships.";
    let first = pipeline().extract_text(text);
    let second = pipeline().extract_text(text);
    assert_eq!(first, second);
}

#[test]
fn test_confidence_always_in_unit_interval() {
    let text = "Bob should fix the build by Monday. Assigned to Carol. Agreed on the scope. \
                We will ship weekly from now on. Gonna write docs.";
    let result = pipeline()
        .with_date_parser(Arc::new(FixedDateParser(Some(fixed_now()))))
        .extract_text(text);
    assert!(!result.is_empty());
    for candidate in result.tasks.iter().chain(&result.decisions) {
        assert!((0.0..=1.0).contains(&candidate.confidence_score), "{candidate:?}");
    }
}

// =============================================================================
// SOURCES
// =============================================================================

#[test]
fn test_transcript_segments_joined_and_counted() {
    let source = TextSource::Transcript(vec![
        segment("A", "Maya will draft the plan."),
        segment("B", "We agreed to weekly syncs."),
    ]);
    let result = pipeline().extract(&source);
    assert_eq!(result.raw_text, "Maya will draft the plan. We agreed to weekly syncs.");
    assert_eq!(result.metadata.segment_count, 2);
    assert_eq!(result.tasks.len(), 1);
    assert_eq!(result.decisions.len(), 1);
}

#[test]
fn test_document_segment_count_is_section_count() {
    let source = TextSource::Document(DocumentText {
        text: "Minutes. The team will publish the notes.".to_string(),
        sections: vec![
            DocumentSection {
                title: "Intro".to_string(),
                content: "Minutes.".to_string(),
            },
            DocumentSection {
                title: "Actions".to_string(),
                content: "The team will publish the notes.".to_string(),
            },
            DocumentSection {
                title: "Appendix".to_string(),
                content: String::new(),
            },
        ],
    });
    let result = pipeline().extract(&source);
    assert_eq!(result.metadata.segment_count, 3);
    assert_eq!(result.tasks[0].text, "publish the notes");
}

#[test]
fn test_empty_input_gives_empty_lists() {
    let result = pipeline().extract(&TextSource::Transcript(Vec::new()));
    assert!(result.tasks.is_empty());
    assert!(result.decisions.is_empty());
    assert_eq!(result.metadata.segment_count, 0);
}

// =============================================================================
// ORACLE
// =============================================================================

#[test]
fn test_oracle_invalid_verdict_keeps_candidate() {
    let oracle = FixedOracle(OracleVerdict {
        valid: false,
        confidence: 0.1,
        reason: "not an action".to_string(),
    });
    let result = pipeline().with_oracle(Arc::new(oracle)).extract_text("We need to call Dan.");
    assert_eq!(result.tasks.len(), 1);
    assert!((result.tasks[0].confidence_score - 0.1).abs() < 1e-9);
    let validation = result.tasks[0].validation.as_ref().unwrap();
    assert!(!validation.valid);
    assert_eq!(validation.reason, "not an action");
}

#[test]
fn test_non_finite_oracle_confidence_falls_back() {
    let oracle = FixedOracle(OracleVerdict {
        valid: true,
        confidence: f64::NAN,
        reason: String::new(),
    });
    let result = pipeline().with_oracle(Arc::new(oracle)).extract_text("We need to call Dan.");
    assert!((result.tasks[0].confidence_score - 0.6).abs() < 1e-9);
}

#[test]
fn test_slow_oracle_times_out_to_fallback() {
    let settings = ExtractionSettings {
        oracle_timeout: Duration::from_millis(50),
        ..ExtractionSettings::default()
    };
    let result = ExtractionPipeline::new(settings)
        .unwrap()
        .with_oracle(Arc::new(SlowOracle(Duration::from_secs(2))))
        .extract_text("We need to call Dan.");

    assert!(result.metadata.oracle_used);
    assert!((result.tasks[0].confidence_score - 0.6).abs() < 1e-9);
    assert!(result.tasks[0].validation.is_none());
}
