//! Risk assessor tests through the public API

use std::sync::Arc;
use std::time::Duration;

use chrono::Duration as Days;

use tasklens::adapters::InMemoryTaskStore;
use tasklens::core::models::{RiskLevel, TaskStatus};
use tasklens::core::ports::SentimentLabel;
use tasklens::core::services::{RiskAssessor, RiskSettings};

use crate::common::{
    FailingSentiment, FailingStore, SlowStore, StubSentiment, fixed_now, past, task,
};

fn assessor() -> RiskAssessor {
    RiskAssessor::new(RiskSettings::default()).unwrap()
}

fn factor_names(assessment: &tasklens::core::models::RiskAssessment) -> Vec<(&str, u32)> {
    assessment.factors.iter().map(|f| (f.name.as_str(), f.points)).collect()
}

fn overdue_store(assignee: &str, count: usize) -> InMemoryTaskStore {
    let descriptions = ["Migrate the billing database", "Renew TLS certificates", "Write onboarding guide"];
    (0..count)
        .map(|i| {
            past(
                &format!("OLD-{i}"),
                descriptions[i % descriptions.len()],
                TaskStatus::Overdue,
                Some(assignee),
            )
        })
        .collect()
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_unowned_undated_task_is_medium() {
    let assessment = assessor().assess_at(&task("TSK-1", "Finish the report", None, None), fixed_now());

    assert_eq!(factor_names(&assessment), vec![("No Assignee", 30), ("No Deadline", 25)]);
    assert_eq!(assessment.score, 55);
    assert_eq!(assessment.level, RiskLevel::Medium);
    assert_eq!(assessment.breakdown.assignee_risk, 30);
    assert_eq!(assessment.breakdown.deadline_risk, 25);
}

#[test]
fn test_elapsed_deadline_is_medium() {
    let due = fixed_now() - Days::days(2);
    let assessment =
        assessor().assess_at(&task("TSK-1", "Finish the report", Some("Alice"), Some(due)), fixed_now());

    assert_eq!(factor_names(&assessment), vec![("Deadline Passed", 35)]);
    assert_eq!(assessment.score, 35);
    assert_eq!(assessment.level, RiskLevel::Medium);
    assert_eq!(assessment.factors[0].explanation, "Task deadline 2026-10-14 has already elapsed.");
}

#[test]
fn test_assignee_with_three_overdue_tasks_is_low() {
    let due = fixed_now() + Days::days(7);
    let assessment = assessor()
        .with_history(Arc::new(overdue_store("Alice", 3)))
        .assess_at(&task("TSK-1", "Finish the report", Some("Alice"), Some(due)), fixed_now());

    assert_eq!(factor_names(&assessment), vec![("Assignee History of Delays", 10)]);
    assert_eq!(assessment.score, 10);
    assert_eq!(assessment.level, RiskLevel::Low);
    assert_eq!(
        assessment.factors[0].explanation,
        "Alice has missed deadlines on 3 previous task(s)."
    );
}

#[test]
fn test_one_overdue_task_earns_five() {
    let due = fixed_now() + Days::days(7);
    let assessment = assessor()
        .with_history(Arc::new(overdue_store("Alice", 1)))
        .assess_at(&task("TSK-1", "Finish the report", Some("Alice"), Some(due)), fixed_now());
    assert_eq!(factor_names(&assessment), vec![("Assignee History of Delays", 5)]);
}

#[test]
fn test_deadline_exactly_now_is_not_passed() {
    let assessment = assessor()
        .assess_at(&task("TSK-1", "Finish the report", Some("Alice"), Some(fixed_now())), fixed_now());
    assert!(assessment.factors.is_empty());
    assert_eq!(assessment.score, 0);
}

#[test]
fn test_none_literal_counts_as_unassigned() {
    let assessment = assessor()
        .with_history(Arc::new(overdue_store("none", 5)))
        .assess_at(&task("TSK-1", "Finish the report", Some("None"), None), fixed_now());
    assert_eq!(factor_names(&assessment), vec![("No Assignee", 30), ("No Deadline", 25)]);
}

// =============================================================================
// SENTIMENT
// =============================================================================

#[test]
fn test_negative_sentiment_adds_twenty() {
    let assessment = assessor()
        .with_sentiment(Arc::new(StubSentiment(SentimentLabel::Negative)))
        .assess_at(&task("TSK-1", "Fix the broken mess again", None, None), fixed_now());
    assert_eq!(assessment.score, 75);
    assert_eq!(assessment.level, RiskLevel::High);
    assert!(assessment.has_factor("Negative Sentiment Detected"));
}

#[test]
fn test_positive_sentiment_adds_nothing() {
    let assessment = assessor()
        .with_sentiment(Arc::new(StubSentiment(SentimentLabel::Positive)))
        .assess_at(&task("TSK-1", "Celebrate the launch", None, None), fixed_now());
    assert_eq!(assessment.score, 55);
}

#[test]
fn test_failing_sentiment_is_skipped() {
    let assessment = assessor()
        .with_sentiment(Arc::new(FailingSentiment))
        .assess_at(&task("TSK-1", "Fix the broken mess again", None, None), fixed_now());
    assert_eq!(assessment.score, 55);
    assert!(!assessment.has_factor("Negative Sentiment Detected"));
}

// =============================================================================
// HISTORY
// =============================================================================

#[test]
fn test_open_similar_task_is_repeat() {
    let store = InMemoryTaskStore::new(vec![
        past("OLD-1", "Renew TLS certificates", TaskStatus::Pending, None),
        past("OLD-2", "Finish the quarterly report", TaskStatus::InProgress, None),
    ]);
    let due = fixed_now() + Days::days(1);
    let assessment = assessor()
        .with_history(Arc::new(store))
        .assess_at(&task("TSK-9", "finish the quarterly report", Some("Bo"), Some(due)), fixed_now());

    assert_eq!(factor_names(&assessment), vec![("Topic Repeated", 15)]);
    assert_eq!(
        assessment.factors[0].explanation,
        "Similar task OLD-2 (100% match) was discussed before and is still open."
    );
    assert_eq!(assessment.breakdown.repetition_risk, 15);
}

#[test]
fn test_reworded_open_task_is_repeat() {
    let store = InMemoryTaskStore::new(vec![past(
        "OLD-1",
        "Finish the quarterly report",
        TaskStatus::Pending,
        None,
    )]);
    let due = fixed_now() + Days::days(1);
    let assessment = assessor()
        .with_history(Arc::new(store))
        .assess_at(&task("TSK-9", "Finish the report", Some("Bo"), Some(due)), fixed_now());

    assert_eq!(factor_names(&assessment), vec![("Topic Repeated", 15)]);
    assert_eq!(
        assessment.factors[0].explanation,
        "Similar task OLD-1 (77% match) was discussed before and is still open."
    );
}

#[test]
fn test_closed_similar_task_is_not_repeat() {
    let store = InMemoryTaskStore::new(vec![past(
        "OLD-1",
        "Finish the quarterly report",
        TaskStatus::Completed,
        None,
    )]);
    let due = fixed_now() + Days::days(1);
    let assessment = assessor()
        .with_history(Arc::new(store))
        .assess_at(&task("TSK-9", "Finish the quarterly report", Some("Bo"), Some(due)), fixed_now());
    assert!(assessment.factors.is_empty());
}

#[test]
fn test_task_never_repeats_itself() {
    let store = InMemoryTaskStore::new(vec![past(
        "TSK-9",
        "Finish the quarterly report",
        TaskStatus::Pending,
        None,
    )]);
    let due = fixed_now() + Days::days(1);
    let assessment = assessor()
        .with_history(Arc::new(store))
        .assess_at(&task("TSK-9", "Finish the quarterly report", Some("Bo"), Some(due)), fixed_now());
    assert!(!assessment.has_factor("Topic Repeated"));
}

#[test]
fn test_failing_store_contributes_nothing() {
    let due = fixed_now() + Days::days(1);
    let assessment = assessor()
        .with_history(Arc::new(FailingStore))
        .assess_at(&task("TSK-1", "Finish the report", Some("Alice"), Some(due)), fixed_now());
    assert!(assessment.factors.is_empty());
}

#[test]
fn test_slow_store_times_out() {
    let settings = RiskSettings {
        store_timeout: Duration::from_millis(50),
        ..RiskSettings::default()
    };
    let due = fixed_now() + Days::days(1);
    let assessment = RiskAssessor::new(settings)
        .unwrap()
        .with_history(Arc::new(SlowStore(Duration::from_millis(500))))
        .assess_at(&task("TSK-1", "anything", Some("Alice"), Some(due)), fixed_now());
    assert!(assessment.factors.is_empty());
    assert_eq!(assessment.score, 0);
}

// =============================================================================
// SCORING
// =============================================================================

#[test]
fn test_every_factor_at_once_reaches_critical() {
    let store = InMemoryTaskStore::new(vec![past(
        "OLD-1",
        "Fix the broken deploy again",
        TaskStatus::Pending,
        Some("Alice"),
    )]);
    let due = fixed_now() - Days::days(1);
    let assessment = assessor()
        .with_sentiment(Arc::new(StubSentiment(SentimentLabel::Negative)))
        .with_history(Arc::new(store))
        .assess_at(&task("TSK-1", "Fix the broken deploy again", None, Some(due)), fixed_now());

    assert_eq!(
        factor_names(&assessment),
        vec![
            ("No Assignee", 30),
            ("Deadline Passed", 35),
            ("Negative Sentiment Detected", 20),
            ("Topic Repeated", 15),
        ]
    );
    assert_eq!(assessment.score, 100);
    assert_eq!(assessment.level, RiskLevel::Critical);
    assert_eq!(assessment.breakdown.total(), assessment.raw_total);
}

#[test]
fn test_assessment_is_deterministic() {
    let store = overdue_store("Alice", 2);
    let assessor = assessor()
        .with_sentiment(Arc::new(StubSentiment(SentimentLabel::Negative)))
        .with_history(Arc::new(store));
    let record = task("TSK-1", "Write onboarding guide", Some("Alice"), None);

    let first = assessor.assess_at(&record, fixed_now());
    let second = assessor.assess_at(&record, fixed_now());
    assert_eq!(first, second);
}

#[test]
fn test_batch_keeps_input_order() {
    let due = fixed_now() + Days::days(3);
    let tasks = vec![
        task("TSK-1", "Finish the report", None, None),
        task("TSK-2", "Ship the build", Some("Bo"), Some(due)),
        task("TSK-3", "Book the venue", Some("Cy"), None),
    ];
    let results = assessor().assess_batch(&tasks, fixed_now());

    let ids: Vec<_> = results.iter().map(|a| a.task_id.as_str()).collect();
    assert_eq!(ids, vec!["TSK-1", "TSK-2", "TSK-3"]);
    let scores: Vec<_> = results.iter().map(|a| a.score).collect();
    assert_eq!(scores, vec![55, 0, 25]);
}

#[test]
fn test_batch_far_larger_than_core_count() {
    let cores = std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
    let due = fixed_now() + Days::days(3);
    let tasks: Vec<_> = (0..cores * 50 + 7)
        .map(|i| {
            if i % 2 == 0 {
                task(&format!("TSK-{i}"), "Finish the report", None, None)
            } else {
                task(&format!("TSK-{i}"), "Ship the build", Some("Bo"), Some(due))
            }
        })
        .collect();
    let assessor = assessor().with_history(Arc::new(InMemoryTaskStore::new(Vec::new())));

    let results = assessor.assess_batch(&tasks, fixed_now());

    assert_eq!(results.len(), tasks.len());
    for (i, (record, result)) in tasks.iter().zip(&results).enumerate() {
        assert_eq!(result.task_id, record.id);
        assert_eq!(result.score, if i % 2 == 0 { 55 } else { 0 });
    }
}
