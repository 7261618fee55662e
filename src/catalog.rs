use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::TaskDescriptor;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    tasks: Vec<TaskDescriptor>,
}

/// Read-only task lookup, loaded once before the first submission is served
/// and shared across concurrent grading calls.
#[derive(Debug, Default)]
pub struct TaskCatalog {
    tasks: HashMap<u32, TaskDescriptor>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read task catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed task catalog: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl TaskCatalog {
    /// Loads a `tasks.json` catalog. A missing file is not an error: the
    /// grader then serves every submission without auxiliary data.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("task catalog {} not found, starting empty", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&raw)?;
        tracing::info!("loaded {} tasks from {}", file.tasks.len(), path.display());
        Ok(Self::from_tasks(file.tasks))
    }

    pub fn from_tasks(tasks: Vec<TaskDescriptor>) -> Self {
        Self {
            tasks: tasks.into_iter().map(|t| (t.id, t)).collect(),
        }
    }

    /// Unknown task ids are not an error; such submissions run without
    /// auxiliary data.
    pub fn get(&self, task_id: u32) -> Option<&TaskDescriptor> {
        self.tasks.get(&task_id)
    }

    pub fn tasks(&self) -> impl Iterator<Item = &TaskDescriptor> {
        self.tasks.values()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
