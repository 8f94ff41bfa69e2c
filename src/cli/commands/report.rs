//! Report command - aggregate assessed tasks

use std::path::Path;

use chrono::{Duration, Utc};

use tasklens::adapters::json;
use tasklens::core::services::{by_assignee, summarize, timeline};
use tasklens::output::{OutputMode, RiskReport};

/// Print summary, per-assignee and timeline rollups for a file of assessed tasks
pub fn report(file: &Path, days: u32, mode: OutputMode) -> anyhow::Result<()> {
    let tasks = json::load_assessed(file)?;
    let since = Utc::now() - Duration::days(i64::from(days));

    RiskReport {
        summary: summarize(&tasks),
        by_assignee: by_assignee(&tasks),
        period_days: days,
        timeline: timeline(&tasks, since),
    }
    .render(mode);
    Ok(())
}
