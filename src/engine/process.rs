use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;

use crate::adapter::Invocation;
use crate::engine::traits::{Engine, EngineError, Execution};

/// Spawns the interpreter as a plain child process. No sandboxing beyond
/// the wall-clock deadline.
#[derive(Clone, Debug, Default)]
pub struct ProcessEngine;

#[async_trait]
impl Engine for ProcessEngine {
    #[tracing::instrument(skip(self))]
    async fn run(
        &self,
        invocation: Invocation,
        working_dir: Option<PathBuf>,
        time_limit: Duration,
    ) -> Result<Execution, EngineError> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Dropping the timed-out wait future drops the child handle,
            // which kills and reaps the process.
            .kill_on_drop(true);
        if let Some(dir) = &working_dir {
            cmd.current_dir(dir);
        }

        let child = cmd.spawn().map_err(|e| EngineError::FailedToLaunch {
            msg: format!("failed to spawn {}: {}", invocation.program.display(), e),
        })?;

        match timeout(time_limit, child.wait_with_output()).await {
            Ok(waited) => {
                let output = waited.map_err(|e| EngineError::FailedToLaunch {
                    msg: format!("failed to wait for child: {e}"),
                })?;
                let status_code = output.status.code().unwrap_or(-1);
                tracing::debug!("child exited with status {}", status_code);
                Ok(Execution::Exited {
                    status_code,
                    stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                })
            }
            Err(_) => {
                tracing::debug!("child exceeded the {:?} deadline", time_limit);
                Ok(Execution::TimedOut)
            }
        }
    }
}
