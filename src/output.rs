//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::{AssessedTask, Candidate, ExtractionResult, RiskLevel};
use crate::core::services::{AssigneeRisk, RiskSummary, TimelineDay};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Risk level painted for terminals
#[must_use]
pub fn paint_level(level: RiskLevel) -> ColoredString {
    let label = level.to_string();
    match level {
        RiskLevel::Low => label.green(),
        RiskLevel::Medium => label.yellow(),
        RiskLevel::High => label.bright_red(),
        RiskLevel::Critical => label.red().bold(),
    }
}

fn format_deadline(deadline: Option<DateTime<Utc>>) -> String {
    deadline.map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d %H:%M").to_string())
}

/// Result of the extract command
#[derive(Debug, Serialize)]
pub struct ExtractReport {
    /// Pipeline output
    #[serde(flatten)]
    pub result: ExtractionResult,
    /// Assessed tasks, when assessment was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessed_tasks: Option<Vec<AssessedTask>>,
}

impl ExtractReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let meta = &self.result.metadata;
        println!(
            "Processed {} segment(s){}\n",
            meta.segment_count,
            if meta.oracle_used { " with oracle validation" } else { "" }
        );

        if self.result.is_empty() {
            println!("No tasks or decisions found.");
            return;
        }

        if !self.result.tasks.is_empty() {
            println!("Tasks ({}):", self.result.tasks.len());
            for (i, task) in self.result.tasks.iter().enumerate() {
                print_candidate(i + 1, task);
                println!(
                    "      assignee: {}  deadline: {}",
                    task.assignee.as_deref().unwrap_or("-"),
                    format_deadline(task.deadline)
                );
                if let Some(assessed) = self.assessed_tasks.as_ref().and_then(|all| all.get(i)) {
                    println!(
                        "      risk: {} ({})",
                        assessed.assessment.score,
                        paint_level(assessed.assessment.level)
                    );
                }
            }
            println!();
        }

        if !self.result.decisions.is_empty() {
            println!("Decisions ({}):", self.result.decisions.len());
            for (i, decision) in self.result.decisions.iter().enumerate() {
                print_candidate(i + 1, decision);
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

fn print_candidate(index: usize, candidate: &Candidate) {
    println!(
        "  {index:>2}. {}  [{:.2}]",
        candidate.text,
        candidate.confidence_score
    );
    if !candidate.entities.is_empty() {
        let entities: Vec<String> =
            candidate.entities.iter().map(|(kind, text)| format!("{kind}={text}")).collect();
        println!("      entities: {}", entities.join(", "));
    }
}

/// Result of the assess command
#[derive(Debug, Serialize)]
pub struct AssessReport {
    /// The assessed task
    #[serde(flatten)]
    pub assessed: AssessedTask,
}

impl AssessReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let task = &self.assessed.task;
        let assessment = &self.assessed.assessment;

        println!("[{}] {}", task.id, task.description);
        println!(
            "  assignee: {}  deadline: {}",
            task.assignee.as_deref().unwrap_or("-"),
            format_deadline(task.deadline)
        );
        println!("\nRisk: {}/100 ({})", assessment.score, paint_level(assessment.level));

        if assessment.factors.is_empty() {
            println!("No risk factors.");
            return;
        }
        for factor in &assessment.factors {
            println!("  +{:<3} {}", factor.points, factor.name);
            println!("        {}", factor.explanation);
        }
        if assessment.raw_total > assessment.score {
            println!("\n(raw total {} capped at 100)", assessment.raw_total);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of the report command
#[derive(Debug, Serialize)]
pub struct RiskReport {
    /// Overall summary
    pub summary: RiskSummary,
    /// Per-assignee rollup
    pub by_assignee: Vec<AssigneeRisk>,
    /// Days covered by the timeline
    pub period_days: u32,
    /// Per-day rollup
    pub timeline: Vec<TimelineDay>,
}

impl RiskReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let s = &self.summary;
        if s.total_tasks == 0 {
            println!("No assessed tasks.");
            return;
        }

        println!("{} task(s), average risk {:.2}\n", s.total_tasks, s.average_risk_score);
        let shares = &s.risk_breakdown_percentage;
        for (level, count, share) in [
            (RiskLevel::Critical, s.critical_count, shares.critical),
            (RiskLevel::High, s.high_count, shares.high),
            (RiskLevel::Medium, s.medium_count, shares.medium),
            (RiskLevel::Low, s.low_count, shares.low),
        ] {
            println!("  {:<18} {count:>4}  ({share:.1}%)", paint_level(level).to_string());
        }
        println!(
            "\n  unassigned: {}  no deadline: {}  overdue: {}",
            s.unassigned_count, s.undated_count, s.overdue_count
        );

        if !self.by_assignee.is_empty() {
            println!("\nBy assignee:");
            for row in &self.by_assignee {
                println!(
                    "  {:<16} {:>3} task(s)  avg {:>6.2}  critical {}  high {}",
                    row.assignee, row.task_count, row.average_risk_score, row.critical_count, row.high_count
                );
            }
        }

        println!("\nLast {} day(s):", self.period_days);
        if self.timeline.is_empty() {
            println!("  no tasks in this period");
        }
        for day in &self.timeline {
            println!(
                "  {}  {:>3} task(s)  avg {:>6.2}  critical {}  high {}",
                day.date, day.task_count, day.average_risk_score, day.critical_count, day.high_count
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
