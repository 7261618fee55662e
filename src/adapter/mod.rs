pub mod octave;
pub mod python;

use std::path::PathBuf;

use crate::domain::Submission;

/// One source file the adapter wants materialized in the workspace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub contents: String,
}

/// A fully assembled program: the files to write plus the one the
/// interpreter is pointed at.
#[derive(Clone, Debug)]
pub struct AssembledProgram {
    pub files: Vec<SourceFile>,
    pub entrypoint: String,
}

/// The exact command line to execute against the workspace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

/// Deterministically turns a submission plus its validator snippet into
/// runnable source files and the command line for them.
pub trait LanguageAdapter: std::fmt::Debug + Send + Sync {
    fn assemble(&self, submission: &Submission, validator: &str) -> AssembledProgram;

    /// Command line executing `entrypoint`. For directory workspaces the
    /// entrypoint is a file name resolved against the working directory;
    /// for lone scratch files it is the file's path.
    fn command(&self, entrypoint: &str) -> Invocation;

    /// Source-file extension for scratch files of this language.
    fn extension(&self) -> &'static str;
}
