//! Assess command - score a single task

use std::path::Path;

use anyhow::Context;
use chrono::Utc;

use tasklens::adapters::EnglishDateParser;
use tasklens::capabilities;
use tasklens::config::Config;
use tasklens::core::models::{AssessedTask, TaskRecord};
use tasklens::core::ports::DateParser;
use tasklens::output::{AssessReport, OutputMode};

/// A task as given on the command line
#[derive(Debug, Clone)]
pub struct TaskInput {
    /// Task identifier
    pub id: String,
    /// What has to be done
    pub description: String,
    /// Who owns it
    pub assignee: Option<String>,
    /// Deadline expression, parsed with the English date parser
    pub deadline: Option<String>,
}

/// Assess one task and print the explanation
pub fn assess(
    config: &Config,
    input: TaskInput,
    history: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let now = Utc::now();

    let deadline = match input.deadline.as_deref() {
        None => None,
        Some(expression) => Some(
            EnglishDateParser::anchored(now)
                .parse(expression, &config.extraction.locale)
                .with_context(|| format!("cannot understand deadline {expression:?}"))?,
        ),
    };

    let task = TaskRecord {
        id: input.id,
        description: input.description,
        assignee: input.assignee,
        deadline,
        created_at: now,
    };

    let assessor = capabilities::risk_assessor(config, history)?;
    let assessment = assessor.assess_at(&task, now);

    AssessReport {
        assessed: AssessedTask { task, assessment },
    }
    .render(mode);
    Ok(())
}
