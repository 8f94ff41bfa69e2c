//! Deterministic risk assessor
//!
//! Five factors, always evaluated in this order:
//!
//! 1. No Assignee (+30)
//! 2. No Deadline (+25) or Deadline Passed (+35), mutually exclusive
//! 3. Negative Sentiment Detected (+20)
//! 4. Topic Repeated (+15)
//! 5. Assignee History of Delays (+5 / +10)
//!
//! Factors 3-5 depend on optional capabilities. A missing or failing
//! capability contributes zero points; assessment itself never fails.

use std::num::NonZeroUsize;
use std::panic;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::core::error::ConfigError;
use crate::core::models::{RiskAssessment, RiskCategory, RiskFactor, TaskRecord};
use crate::core::ports::{HistoricalStore, SentimentClassifier, SentimentLabel};

use super::history::{DelayAnalyzer, REPETITION_POINTS, RepetitionDetector, delay_points};

/// Factor name: missing owner
pub const NO_ASSIGNEE: &str = "No Assignee";
/// Factor name: missing deadline
pub const NO_DEADLINE: &str = "No Deadline";
/// Factor name: elapsed deadline
pub const DEADLINE_PASSED: &str = "Deadline Passed";
/// Factor name: negative tone
pub const NEGATIVE_SENTIMENT: &str = "Negative Sentiment Detected";
/// Factor name: repeated open topic
pub const TOPIC_REPEATED: &str = "Topic Repeated";
/// Factor name: overdue history
pub const DELAY_HISTORY: &str = "Assignee History of Delays";

const NO_ASSIGNEE_POINTS: u32 = 30;
const NO_DEADLINE_POINTS: u32 = 25;
const DEADLINE_PASSED_POINTS: u32 = 35;
const NEGATIVE_SENTIMENT_POINTS: u32 = 20;

/// Characters of the description handed to the sentiment classifier
pub const SENTIMENT_WINDOW: usize = 512;

/// Tunables for risk assessment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskSettings {
    /// Similarity a past task must exceed to count as a repeat
    pub similarity_threshold: f64,
    /// Maximum past tasks compared per assessment
    pub history_limit: usize,
    /// Upper bound for each historical store query
    pub store_timeout: Duration,
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.7,
            history_limit: 10,
            store_timeout: Duration::from_secs(5),
        }
    }
}

impl RiskSettings {
    /// Reject settings that would make assessments meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.similarity_threshold;
        if !(t > 0.0 && t < 1.0) {
            return Err(ConfigError::InvalidThreshold(t));
        }
        if self.history_limit == 0 {
            return Err(ConfigError::InvalidHistoryLimit);
        }
        if self.store_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout("store"));
        }
        Ok(())
    }
}

/// Scores tasks against the five risk factors
pub struct RiskAssessor {
    settings: RiskSettings,
    sentiment: Option<Arc<dyn SentimentClassifier>>,
    history: Option<Arc<dyn HistoricalStore>>,
}

impl std::fmt::Debug for RiskAssessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiskAssessor")
            .field("settings", &self.settings)
            .field("sentiment", &self.sentiment.is_some())
            .field("history", &self.history.is_some())
            .finish()
    }
}

impl RiskAssessor {
    /// Create an assessor with no optional capabilities
    pub fn new(settings: RiskSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            settings,
            sentiment: None,
            history: None,
        })
    }

    /// Enable the sentiment factor
    #[must_use]
    pub fn with_sentiment(mut self, classifier: Arc<dyn SentimentClassifier>) -> Self {
        self.sentiment = Some(classifier);
        self
    }

    /// Enable the repetition and delay-history factors
    #[must_use]
    pub fn with_history(mut self, store: Arc<dyn HistoricalStore>) -> Self {
        self.history = Some(store);
        self
    }

    /// Assess `task` as of now
    #[must_use]
    pub fn assess(&self, task: &TaskRecord) -> RiskAssessment {
        self.assess_at(task, Utc::now())
    }

    /// Assess `task` as of `now`
    ///
    /// Deterministic for a fixed `now`, fixed capabilities and a fixed
    /// store snapshot.
    #[must_use]
    pub fn assess_at(&self, task: &TaskRecord, now: DateTime<Utc>) -> RiskAssessment {
        let assignee = task.effective_assignee();

        let factors = [
            Self::assignee_factor(assignee),
            Self::deadline_factor(task.deadline, now),
            self.sentiment_factor(&task.description),
            self.repetition_factor(task),
            self.delay_factor(assignee),
        ]
        .into_iter()
        .flatten()
        .collect();

        let assessment = RiskAssessment::from_factors(task.id.clone(), factors, now);
        log::debug!(
            "task {} scored {} ({}) from {} factor(s)",
            assessment.task_id,
            assessment.score,
            assessment.level,
            assessment.factors.len()
        );
        assessment
    }

    /// Assess independent tasks in parallel, results in input order
    ///
    /// At most `available_parallelism` tasks run at once. A task whose
    /// thread cannot be spawned is assessed on the calling thread. A panic
    /// inside an assessment propagates to the caller.
    #[must_use]
    pub fn assess_batch(&self, tasks: &[TaskRecord], now: DateTime<Utc>) -> Vec<RiskAssessment> {
        let workers = thread::available_parallelism().map_or(1, NonZeroUsize::get);
        let mut results = Vec::with_capacity(tasks.len());
        for chunk in tasks.chunks(workers) {
            thread::scope(|scope| {
                let slots: Vec<_> = chunk
                    .iter()
                    .map(|task| {
                        thread::Builder::new()
                            .name("tasklens-assess".into())
                            .spawn_scoped(scope, move || self.assess_at(task, now))
                            .map_err(|e| {
                                log::debug!("assessing {} inline: {e}", task.id);
                                task
                            })
                    })
                    .collect();
                for slot in slots {
                    let assessment = match slot {
                        Ok(handle) => handle
                            .join()
                            .unwrap_or_else(|payload| panic::resume_unwind(payload)),
                        Err(task) => self.assess_at(task, now),
                    };
                    results.push(assessment);
                }
            });
        }
        results
    }

    fn assignee_factor(assignee: Option<&str>) -> Option<RiskFactor> {
        assignee.is_none().then(|| {
            RiskFactor::new(
                NO_ASSIGNEE,
                RiskCategory::Assignee,
                NO_ASSIGNEE_POINTS,
                "Task ownership is unclear. No one is explicitly responsible.",
            )
        })
    }

    fn deadline_factor(deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<RiskFactor> {
        match deadline {
            None => Some(RiskFactor::new(
                NO_DEADLINE,
                RiskCategory::Deadline,
                NO_DEADLINE_POINTS,
                "Urgency and completion target undefined.",
            )),
            Some(due) if due < now => Some(RiskFactor::new(
                DEADLINE_PASSED,
                RiskCategory::Deadline,
                DEADLINE_PASSED_POINTS,
                format!("Task deadline {} has already elapsed.", due.format("%Y-%m-%d")),
            )),
            Some(_) => None,
        }
    }

    fn sentiment_factor(&self, description: &str) -> Option<RiskFactor> {
        let classifier = self.sentiment.as_ref()?;
        if description.trim().is_empty() {
            return None;
        }

        let window: String = description.chars().take(SENTIMENT_WINDOW).collect();
        match classifier.classify(&window) {
            Ok(sentiment) if sentiment.label == SentimentLabel::Negative => Some(RiskFactor::new(
                NEGATIVE_SENTIMENT,
                RiskCategory::Sentiment,
                NEGATIVE_SENTIMENT_POINTS,
                "Task description contains language suggesting friction or disagreement.",
            )),
            Ok(_) => None,
            Err(e) => {
                log::debug!("sentiment classification failed: {e}");
                None
            },
        }
    }

    fn repetition_factor(&self, task: &TaskRecord) -> Option<RiskFactor> {
        let store = self.history.as_ref()?;
        let detector = RepetitionDetector {
            threshold: self.settings.similarity_threshold,
            limit: self.settings.history_limit,
            timeout: self.settings.store_timeout,
        };
        let repeat = detector.find_repeat(store, &task.id, &task.description)?;

        Some(RiskFactor::new(
            TOPIC_REPEATED,
            RiskCategory::Repetition,
            REPETITION_POINTS,
            format!(
                "Similar task {} ({:.0}% match) was discussed before and is still open.",
                repeat.task_id,
                repeat.similarity * 100.0
            ),
        ))
    }

    fn delay_factor(&self, assignee: Option<&str>) -> Option<RiskFactor> {
        let store = self.history.as_ref()?;
        let assignee = assignee?;
        let analyzer = DelayAnalyzer {
            timeout: self.settings.store_timeout,
        };
        let overdue = analyzer.overdue_count(store, assignee)?;
        let points = delay_points(overdue);

        (points > 0).then(|| {
            RiskFactor::new(
                DELAY_HISTORY,
                RiskCategory::History,
                points,
                format!("{assignee} has missed deadlines on {overdue} previous task(s)."),
            )
        })
    }
}
