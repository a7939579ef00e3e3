use crate::error::{MetricsError, Result};
use crate::model::Sprint;
use indexmap::IndexMap;
use log::debug;
use serde_json::from_str;
use std::fs;
use std::path::{Path, PathBuf};

/// Source of fully hydrated sprint graphs.
pub trait SprintRepository {
    fn sprints(&self) -> Result<Vec<Sprint>>;
}

/// Reads sprints from a JSON snapshot shaped as `{ "<slug>": { ...sprint... } }`.
#[derive(Debug, Clone)]
pub struct JsonSnapshotLoader {
    path: PathBuf,
}

impl JsonSnapshotLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SprintRepository for JsonSnapshotLoader {
    fn sprints(&self) -> Result<Vec<Sprint>> {
        let json_str = fs::read_to_string(&self.path).map_err(|source| MetricsError::ReadFile {
            path: self.path.clone(),
            source,
        })?;
        let sprints = parse(&json_str).map_err(|source| MetricsError::ParseSnapshot {
            path: self.path.clone(),
            source,
        })?;
        debug!(
            "Read {} sprints from {}",
            sprints.len(),
            self.path.display()
        );
        Ok(sprints)
    }
}

// Parser
fn parse(json_str: &str) -> serde_json::Result<Vec<Sprint>> {
    let elements: IndexMap<String, Sprint> = from_str(json_str)?;
    let sprints = elements
        .into_iter()
        .map(|(slug, mut sprint)| {
            sprint.slug = slug;
            sprint.issues.sort_by_key(|issue| issue.position);
            sprint
        })
        .collect();
    Ok(sprints)
}
