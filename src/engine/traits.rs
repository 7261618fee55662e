use std::path::PathBuf;
use std::time::Duration;

use crate::adapter::Invocation;

/// What happened to the child process.
#[derive(Clone, Debug)]
pub enum Execution {
    Exited {
        status_code: i32,
        stdout: String,
        stderr: String,
    },
    /// The wall-clock deadline fired. The child was terminated; no partial
    /// output of a still-running process is ever reported.
    TimedOut,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    #[error("failed to launch interpreter: {msg}")]
    FailedToLaunch { msg: String },
}

#[mockall::automock]
#[async_trait::async_trait]
pub trait Engine: std::fmt::Debug + Send + Sync {
    /// Runs one child process to completion or to the deadline, whichever
    /// comes first, capturing stdout and stderr. Exactly one child is
    /// spawned per call; there are no retries.
    async fn run(
        &self,
        invocation: Invocation,
        working_dir: Option<PathBuf>,
        time_limit: Duration,
    ) -> Result<Execution, EngineError>;
}
