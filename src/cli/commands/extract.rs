//! Extract command - run the pipeline over a file

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use clap::ValueEnum;

use tasklens::capabilities;
use tasklens::config::Config;
use tasklens::core::models::{AssessedTask, Candidate, TaskRecord, TextSource};
use tasklens::output::{ExtractReport, OutputMode};

/// How the input file is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Plain text
    Text,
    /// JSON array of transcript segments
    Segments,
    /// JSON parsed document ({ text, sections })
    Document,
}

/// Extract tasks and decisions, optionally assessing each task
pub fn extract(
    config: &Config,
    file: &Path,
    format: InputFormat,
    assess: bool,
    history: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let content = read_input(file)?;
    let source = match format {
        InputFormat::Text => TextSource::Raw(content),
        InputFormat::Segments => TextSource::Transcript(
            serde_json::from_str(&content)
                .with_context(|| format!("{} is not a JSON array of segments", file.display()))?,
        ),
        InputFormat::Document => TextSource::Document(
            serde_json::from_str(&content)
                .with_context(|| format!("{} is not a JSON document", file.display()))?,
        ),
    };

    let pipeline = capabilities::extraction_pipeline(config)?;
    let result = pipeline.extract(&source);

    let assessed_tasks = if assess {
        Some(assess_all(config, &result.tasks, history)?)
    } else {
        None
    };

    ExtractReport {
        result,
        assessed_tasks,
    }
    .render(mode);
    Ok(())
}

fn assess_all(
    config: &Config,
    tasks: &[Candidate],
    history: Option<&Path>,
) -> anyhow::Result<Vec<AssessedTask>> {
    let assessor = capabilities::risk_assessor(config, history)?;
    let now = Utc::now();

    let records: Vec<TaskRecord> = tasks
        .iter()
        .enumerate()
        .map(|(i, candidate)| TaskRecord::from_candidate(format!("TSK-{}", i + 1), candidate, now))
        .collect();
    let assessments = assessor.assess_batch(&records, now);

    Ok(records
        .into_iter()
        .zip(assessments)
        .map(|(task, assessment)| AssessedTask { task, assessment })
        .collect())
}

fn read_input(file: &Path) -> anyhow::Result<String> {
    if file.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content).context("cannot read stdin")?;
        return Ok(content);
    }
    fs::read_to_string(file).with_context(|| format!("cannot read {}", file.display()))
}
