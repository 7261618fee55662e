//! End-to-end runs against a real Python interpreter, in the spirit of the
//! unit tests but exercising the whole harness: assemble, provision, run,
//! classify, clean up.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::catalog::TaskCatalog;
use crate::domain::{Language, Outcome, Submission, TaskDescriptor};
use crate::engine::process::ProcessEngine;
use crate::grader::Grader;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

fn python3_path() -> String {
    std::env::var("PYTHON3_PATH").unwrap_or_else(|_| "python3".to_string())
}

fn unique_base() -> PathBuf {
    std::env::temp_dir().join(format!("gradebox_it_{}", Uuid::new_v4()))
}

fn grader(catalog: TaskCatalog, base: &Path) -> Grader {
    Grader::new(Arc::new(catalog), Arc::new(ProcessEngine), base)
        .with_interpreters(python3_path(), "octave")
}

fn assert_base_empty(base: &Path) {
    let leftovers: Vec<_> = std::fs::read_dir(base)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert!(leftovers.is_empty(), "workspace leaked: {leftovers:?}");
}

#[tokio::test]
async fn clean_submission_without_validator_succeeds() {
    init_tracing();
    let base = unique_base();
    let grader = grader(TaskCatalog::default(), &base);

    let submission = Submission::new(999, "print('hello grader')", Language::Python);
    let result = grader.execute(&submission).await;

    assert_eq!(result.outcome, Outcome::Success);
    assert!(result.details.contains("hello grader"));
    assert_base_empty(&base);
    std::fs::remove_dir_all(&base).unwrap();
}

#[tokio::test]
async fn failing_assertion_is_a_validation_failure() {
    init_tracing();
    let base = unique_base();
    let grader = grader(TaskCatalog::default(), &base);

    let submission = Submission::new(999, "assert False, 'y-axis label missing'", Language::Python);
    let result = grader.execute(&submission).await;

    assert_eq!(result.outcome, Outcome::ValidationFailed);
    assert!(result.details.contains("y-axis label missing"));
    assert_base_empty(&base);
    std::fs::remove_dir_all(&base).unwrap();
}

#[tokio::test]
async fn classification_is_idempotent() {
    init_tracing();
    let base = unique_base();
    let grader = grader(TaskCatalog::default(), &base);

    let submission = Submission::new(999, "assert 1 == 2", Language::Python);
    let first = grader.execute(&submission).await;
    let second = grader.execute(&submission).await;

    assert_eq!(first.outcome, Outcome::ValidationFailed);
    assert_eq!(first.outcome, second.outcome);
    assert_base_empty(&base);
    std::fs::remove_dir_all(&base).unwrap();
}

#[tokio::test]
async fn asset_is_readable_by_relative_path_and_gone_afterwards() {
    init_tracing();
    let base = unique_base();
    let catalog = TaskCatalog::from_tasks(vec![TaskDescriptor {
        id: 7,
        title: None,
        description: None,
        asset_text: Some("alpha,beta,gamma".to_string()),
        asset_filename: Some("data.csv".to_string()),
    }]);
    let grader = grader(catalog, &base);

    let submission = Submission::new(
        7,
        "print(open('data.csv').read())",
        Language::Python,
    );
    let result = grader.execute(&submission).await;

    assert_eq!(result.outcome, Outcome::Success);
    assert!(result.details.contains("alpha,beta,gamma"));
    assert_base_empty(&base);
    std::fs::remove_dir_all(&base).unwrap();
}

#[tokio::test]
async fn infinite_loop_times_out() {
    init_tracing();
    let base = unique_base();
    let grader = grader(TaskCatalog::default(), &base);

    let submission = Submission::new(999, "while True:\n    pass", Language::Python);
    let result = grader.execute(&submission).await;

    assert_eq!(result.outcome, Outcome::Timeout);
    assert_base_empty(&base);
    std::fs::remove_dir_all(&base).unwrap();
}

#[tokio::test]
async fn missing_interpreter_is_an_internal_error() {
    init_tracing();
    let base = unique_base();
    let grader = Grader::new(Arc::new(TaskCatalog::default()), Arc::new(ProcessEngine), &base)
        .with_interpreters("/nonexistent/python3", "/nonexistent/octave");

    let submission = Submission::new(999, "print('unreachable')", Language::Python);
    let result = grader.execute(&submission).await;

    assert_eq!(result.outcome, Outcome::InternalError);
    assert_base_empty(&base);
    std::fs::remove_dir_all(&base).unwrap();
}

#[tokio::test]
async fn stdout_only_failure_is_still_diagnosed() {
    init_tracing();
    let base = unique_base();
    let grader = grader(TaskCatalog::default(), &base);

    // Prints the diagnostic to stdout and exits nonzero without touching
    // stderr.
    let submission = Submission::new(
        999,
        "print('check failed: wrong shape')\nsys.exit(2)",
        Language::Python,
    );
    let result = grader.execute(&submission).await;

    assert_eq!(result.outcome, Outcome::ValidationFailed);
    assert!(result.details.contains("check failed: wrong shape"));
    assert_base_empty(&base);
    std::fs::remove_dir_all(&base).unwrap();
}
