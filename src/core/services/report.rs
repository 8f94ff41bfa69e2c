//! Risk reporting aggregates
//!
//! Read-only rollups over already-assessed tasks: an overall summary, a
//! per-assignee breakdown and a per-day timeline.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::{AssessedTask, RiskLevel};

use super::risk::DEADLINE_PASSED;

/// Share of tasks per level, in percent with one decimal
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LevelShare {
    /// Critical share
    pub critical: f64,
    /// High share
    pub high: f64,
    /// Medium share
    pub medium: f64,
    /// Low share
    pub low: f64,
}

/// Overall risk picture for a set of tasks
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskSummary {
    /// Number of tasks
    pub total_tasks: usize,
    /// Tasks at Critical
    pub critical_count: usize,
    /// Tasks at High
    pub high_count: usize,
    /// Tasks at Medium
    pub medium_count: usize,
    /// Tasks at Low
    pub low_count: usize,
    /// Mean score, two decimals
    pub average_risk_score: f64,
    /// Percentage per level
    pub risk_breakdown_percentage: LevelShare,
    /// Tasks nobody owns
    pub unassigned_count: usize,
    /// Tasks without a due date
    pub undated_count: usize,
    /// Tasks whose deadline had passed when assessed
    pub overdue_count: usize,
}

/// Risk rollup for one assignee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssigneeRisk {
    /// Assignee name
    pub assignee: String,
    /// Tasks owned
    pub task_count: usize,
    /// Mean score, two decimals
    pub average_risk_score: f64,
    /// Owned tasks at Critical
    pub critical_count: usize,
    /// Owned tasks at High
    pub high_count: usize,
}

/// Risk rollup for one creation day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineDay {
    /// Creation date (UTC)
    pub date: NaiveDate,
    /// Tasks created that day
    pub task_count: usize,
    /// Mean score, two decimals
    pub average_risk_score: f64,
    /// Tasks at Critical
    pub critical_count: usize,
    /// Tasks at High
    pub high_count: usize,
}

#[derive(Default)]
struct Tally {
    count: usize,
    score_sum: u64,
    critical: usize,
    high: usize,
}

impl Tally {
    fn add(&mut self, item: &AssessedTask) {
        self.count += 1;
        self.score_sum += u64::from(item.assessment.score);
        match item.assessment.level {
            RiskLevel::Critical => self.critical += 1,
            RiskLevel::High => self.high += 1,
            RiskLevel::Medium | RiskLevel::Low => {},
        }
    }

    fn average(&self) -> f64 {
        round_to(ratio(self.score_sum, self.count as u64), 2)
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn percent(part: usize, total: usize) -> f64 {
    round_to(ratio(part as u64 * 100, total as u64), 1)
}

/// Summarize a set of assessed tasks; empty input yields all zeros
#[must_use]
pub fn summarize(tasks: &[AssessedTask]) -> RiskSummary {
    let total = tasks.len();
    let count = |level: RiskLevel| tasks.iter().filter(|t| t.assessment.level == level).count();

    let critical_count = count(RiskLevel::Critical);
    let high_count = count(RiskLevel::High);
    let medium_count = count(RiskLevel::Medium);
    let low_count = count(RiskLevel::Low);
    let score_sum: u64 = tasks.iter().map(|t| u64::from(t.assessment.score)).sum();

    RiskSummary {
        total_tasks: total,
        critical_count,
        high_count,
        medium_count,
        low_count,
        average_risk_score: round_to(ratio(score_sum, total as u64), 2),
        risk_breakdown_percentage: LevelShare {
            critical: percent(critical_count, total),
            high: percent(high_count, total),
            medium: percent(medium_count, total),
            low: percent(low_count, total),
        },
        unassigned_count: tasks.iter().filter(|t| t.task.effective_assignee().is_none()).count(),
        undated_count: tasks.iter().filter(|t| t.task.deadline.is_none()).count(),
        overdue_count: tasks.iter().filter(|t| t.assessment.has_factor(DEADLINE_PASSED)).count(),
    }
}

/// Per-assignee rollup, riskiest first (ties broken by name)
///
/// Unassigned tasks are left out.
#[must_use]
pub fn by_assignee(tasks: &[AssessedTask]) -> Vec<AssigneeRisk> {
    let mut groups: BTreeMap<&str, Tally> = BTreeMap::new();
    for item in tasks {
        if let Some(assignee) = item.task.effective_assignee() {
            groups.entry(assignee).or_default().add(item);
        }
    }

    let mut rows: Vec<AssigneeRisk> = groups
        .into_iter()
        .map(|(assignee, tally)| AssigneeRisk {
            assignee: assignee.to_string(),
            task_count: tally.count,
            average_risk_score: tally.average(),
            critical_count: tally.critical,
            high_count: tally.high,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.average_risk_score
            .total_cmp(&a.average_risk_score)
            .then_with(|| a.assignee.cmp(&b.assignee))
    });
    rows
}

/// Per-day rollup of tasks created at or after `since`, oldest day first
#[must_use]
pub fn timeline(tasks: &[AssessedTask], since: DateTime<Utc>) -> Vec<TimelineDay> {
    let mut days: BTreeMap<NaiveDate, Tally> = BTreeMap::new();
    for item in tasks.iter().filter(|t| t.task.created_at >= since) {
        days.entry(item.task.created_at.date_naive()).or_default().add(item);
    }

    days.into_iter()
        .map(|(date, tally)| TimelineDay {
            date,
            task_count: tally.count,
            average_risk_score: tally.average(),
            critical_count: tally.critical,
            high_count: tally.high,
        })
        .collect()
}
