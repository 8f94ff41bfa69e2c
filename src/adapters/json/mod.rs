//! JSON file loading
//!
//! Historical snapshots are a JSON array of past tasks. Reports read either a
//! JSON array of assessed tasks or the object written by
//! `tasklens extract --assess --json`.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::core::models::{AssessedTask, HistoricalTask};

use super::memory::InMemoryTaskStore;

/// Load a historical store from a JSON snapshot file
pub fn load_snapshot(path: &Path) -> anyhow::Result<InMemoryTaskStore> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read history snapshot {}", path.display()))?;
    let tasks: Vec<HistoricalTask> = serde_json::from_str(&content)
        .with_context(|| format!("invalid history snapshot {}", path.display()))?;
    log::debug!("loaded {} historical task(s) from {}", tasks.len(), path.display());
    Ok(InMemoryTaskStore::new(tasks))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AssessedFile {
    List(Vec<AssessedTask>),
    Extraction { assessed_tasks: Vec<AssessedTask> },
}

/// Load assessed tasks from a JSON file
pub fn load_assessed(path: &Path) -> anyhow::Result<Vec<AssessedTask>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read assessed tasks {}", path.display()))?;
    let file: AssessedFile = serde_json::from_str(&content)
        .with_context(|| format!("invalid assessed tasks file {}", path.display()))?;
    Ok(match file {
        AssessedFile::List(tasks) | AssessedFile::Extraction { assessed_tasks: tasks } => tasks,
    })
}
