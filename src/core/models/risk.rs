//! Risk assessment model
//!
//! Every point in a score is traceable to a named factor. The breakdown
//! always sums to the raw (pre-clamp) total; the score is that total capped
//! at [`MAX_SCORE`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TaskRecord;

/// Upper bound of a risk score
pub const MAX_SCORE: u32 = 100;

/// Scoring category a factor contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    /// Ownership
    Assignee,
    /// Due date
    Deadline,
    /// Tone of the description
    Sentiment,
    /// Similar open work already exists
    Repetition,
    /// Assignee's track record
    History,
}

/// Severity band derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// 0-30
    Low,
    /// 31-60
    Medium,
    /// 61-85
    High,
    /// 86-100
    Critical,
}

impl RiskLevel {
    /// Map a clamped score to its level (inclusive upper bounds)
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        match score {
            0..=30 => Self::Low,
            31..=60 => Self::Medium,
            61..=85 => Self::High,
            _ => Self::Critical,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// One point-valued reason contributing to a score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    /// Human-readable factor name, e.g. "No Assignee"
    pub name: String,
    /// Category the points are booked under
    pub category: RiskCategory,
    /// Points awarded (never zero in an assessment)
    pub points: u32,
    /// Why the points were awarded
    pub explanation: String,
}

impl RiskFactor {
    /// Create a factor
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: RiskCategory,
        points: u32,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            points,
            explanation: explanation.into(),
        }
    }
}

/// Points per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RiskBreakdown {
    /// Missing owner
    pub assignee_risk: u32,
    /// Missing or elapsed deadline
    pub deadline_risk: u32,
    /// Negative tone
    pub sentiment_risk: u32,
    /// Repeated open topic
    pub repetition_risk: u32,
    /// Assignee's overdue history
    pub historical_risk: u32,
}

impl RiskBreakdown {
    /// Book points under a category
    pub fn add(&mut self, category: RiskCategory, points: u32) {
        let slot = match category {
            RiskCategory::Assignee => &mut self.assignee_risk,
            RiskCategory::Deadline => &mut self.deadline_risk,
            RiskCategory::Sentiment => &mut self.sentiment_risk,
            RiskCategory::Repetition => &mut self.repetition_risk,
            RiskCategory::History => &mut self.historical_risk,
        };
        *slot += points;
    }

    /// Sum over all categories
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.assignee_risk
            + self.deadline_risk
            + self.sentiment_risk
            + self.repetition_risk
            + self.historical_risk
    }
}

/// Explainable risk score for one task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Assessed task
    pub task_id: String,
    /// Clamped score in [0, 100]
    pub score: u32,
    /// Sum of factor points before clamping
    pub raw_total: u32,
    /// Band derived from `score`
    pub level: RiskLevel,
    /// Nonzero factors in evaluation order
    pub factors: Vec<RiskFactor>,
    /// Points per category
    pub breakdown: RiskBreakdown,
    /// When the assessment ran
    pub assessed_at: DateTime<Utc>,
}

impl RiskAssessment {
    /// Assemble an assessment from evaluated factors
    ///
    /// Zero-point factors are dropped; score and level are derived.
    #[must_use]
    pub fn from_factors(
        task_id: impl Into<String>,
        factors: Vec<RiskFactor>,
        assessed_at: DateTime<Utc>,
    ) -> Self {
        let factors: Vec<RiskFactor> = factors.into_iter().filter(|f| f.points > 0).collect();
        let mut breakdown = RiskBreakdown::default();
        for factor in &factors {
            breakdown.add(factor.category, factor.points);
        }
        let raw_total = breakdown.total();
        let score = raw_total.min(MAX_SCORE);

        Self {
            task_id: task_id.into(),
            score,
            raw_total,
            level: RiskLevel::from_score(score),
            factors,
            breakdown,
            assessed_at,
        }
    }

    /// Whether a factor with the given name was awarded
    #[must_use]
    pub fn has_factor(&self, name: &str) -> bool {
        self.factors.iter().any(|f| f.name == name)
    }
}

/// A task together with its assessment, as consumed by reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessedTask {
    /// The task
    pub task: TaskRecord,
    /// Its risk assessment
    pub assessment: RiskAssessment,
}
