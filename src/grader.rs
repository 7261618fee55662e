use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapter::LanguageAdapter;
use crate::adapter::octave::OctaveAdapter;
use crate::adapter::python::PythonAdapter;
use crate::catalog::TaskCatalog;
use crate::classify::classify;
use crate::constants::RUN_TIMEOUT;
use crate::domain::{ExecutionResult, Language, Submission};
use crate::engine::traits::{Engine, EngineError, Execution};
use crate::registry;
use crate::workspace::Workspace;

/// Harness-side faults. Expected run outcomes (validation failure, timeout)
/// are classifier values, not errors; only problems outside the child
/// process land here.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("workspace error: {0}")]
    Workspace(#[from] std::io::Error),
    #[error("{0}")]
    Engine(#[from] EngineError),
}

/// The execution-and-validation harness. Holds only read-only state, so one
/// instance serves unlimited concurrent grading calls.
#[derive(Debug)]
pub struct Grader {
    catalog: Arc<TaskCatalog>,
    engine: Arc<dyn Engine>,
    python: PythonAdapter,
    octave: OctaveAdapter,
    scratch_base: PathBuf,
}

impl Grader {
    pub fn new(
        catalog: Arc<TaskCatalog>,
        engine: Arc<dyn Engine>,
        scratch_base: impl AsRef<Path>,
    ) -> Self {
        Self {
            catalog,
            engine,
            python: PythonAdapter::default(),
            octave: OctaveAdapter::default(),
            scratch_base: scratch_base.as_ref().into(),
        }
    }

    pub fn with_interpreters(
        mut self,
        python: impl AsRef<Path>,
        octave: impl AsRef<Path>,
    ) -> Self {
        self.python = PythonAdapter::new(python);
        self.octave = OctaveAdapter::new(octave);
        self
    }

    fn adapter(&self, language: Language) -> &dyn LanguageAdapter {
        match language {
            Language::Python => &self.python,
            Language::Octave => &self.octave,
        }
    }

    /// Grades one submission. Exactly one outcome comes back, and the
    /// workspace created for the run is gone again by the time this
    /// returns, whichever way the run ended.
    #[tracing::instrument(
        skip(self, submission),
        fields(task_id = submission.task_id, language = ?submission.language)
    )]
    pub async fn execute(&self, submission: &Submission) -> ExecutionResult {
        let result = classify(self.run_submission(submission).await);
        tracing::info!("submission graded: {:?}", result.outcome);
        result
    }

    async fn run_submission(&self, submission: &Submission) -> Result<Execution, HarnessError> {
        tracing::debug!("grading submission: {:?}", submission);

        let task = self.catalog.get(submission.task_id);
        let validator = registry::snippet(submission.task_id, submission.language);
        let adapter = self.adapter(submission.language);
        let program = adapter.assemble(submission, validator);

        // The workspace guards cleanup: dropping it on any exit path below
        // removes the scratch file tree.
        let workspace = Workspace::provision(
            &self.scratch_base,
            submission.language,
            task,
            adapter.extension(),
        )
        .await?;

        for file in &program.files {
            workspace.write_file(&file.name, &file.contents).await?;
        }

        // Directory workspaces run with the directory as cwd and a relative
        // entrypoint, so Octave's by-name function discovery and relative
        // asset reads both resolve there. A lone scratch file is addressed
        // by its path directly.
        let entrypoint = if workspace.is_dir() {
            program.entrypoint
        } else {
            workspace.root().to_string_lossy().into_owned()
        };
        let invocation = adapter.command(&entrypoint);
        let working_dir = workspace.working_dir().map(Path::to_path_buf);

        let run = self.engine.run(invocation, working_dir, RUN_TIMEOUT).await?;
        Ok(run)
    }
}
