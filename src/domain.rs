use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A learner's code together with the declared language and target task.
/// Immutable once received; one instance lives for one grading call.
#[derive(Clone, Debug)]
pub struct Submission {
    pub task_id: u32,
    pub code: String,
    pub language: Language,
    pub received_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(task_id: u32, code: impl Into<String>, language: Language) -> Self {
        Self {
            task_id,
            code: code.into(),
            language,
            received_at: Utc::now(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Octave,
}

/// One entry of the task catalog. The presentation fields ride along from
/// `tasks.json` untouched; the harness only cares about the asset pair.
#[derive(Clone, Debug, Deserialize)]
pub struct TaskDescriptor {
    pub id: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub asset_text: Option<String>,
    #[serde(default)]
    pub asset_filename: Option<String>,
}

impl TaskDescriptor {
    /// Auxiliary data is provisioned only when both the content and the
    /// filename are present.
    pub fn asset(&self) -> Option<(&str, &str)> {
        match (&self.asset_filename, &self.asset_text) {
            (Some(name), Some(text)) => Some((name.as_str(), text.as_str())),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    ValidationFailed,
    Timeout,
    InternalError,
}

/// The verdict for one submission: exactly one is produced per call.
#[derive(Clone, Debug)]
pub struct ExecutionResult {
    pub outcome: Outcome,
    pub message: String,
    pub details: String,
}
