use crate::constants::{
    FAILURE_MESSAGE, SERVER_ERROR_MESSAGE, SUCCESS_EXIT_CODE, SUCCESS_MESSAGE, TIMEOUT_DETAILS,
    TIMEOUT_MESSAGE,
};
use crate::domain::{ExecutionResult, Outcome};
use crate::engine::traits::Execution;
use crate::grader::HarnessError;

/// Maps one raw run observation onto exactly one user-facing outcome.
///
/// Priority: deadline first, then the canonical success exit code, then
/// validation failure. Interpreter-level errors usually land on stderr, but
/// script-level assertion failures can print to stdout only, so the failure
/// diagnostic falls back to stdout when stderr is empty.
pub fn classify(run: Result<Execution, HarnessError>) -> ExecutionResult {
    match run {
        Ok(Execution::TimedOut) => ExecutionResult {
            outcome: Outcome::Timeout,
            message: TIMEOUT_MESSAGE.to_string(),
            details: TIMEOUT_DETAILS.to_string(),
        },
        Ok(Execution::Exited {
            status_code,
            stdout,
            ..
        }) if status_code == SUCCESS_EXIT_CODE => ExecutionResult {
            outcome: Outcome::Success,
            message: SUCCESS_MESSAGE.to_string(),
            details: stdout,
        },
        Ok(Execution::Exited { stdout, stderr, .. }) => ExecutionResult {
            outcome: Outcome::ValidationFailed,
            message: FAILURE_MESSAGE.to_string(),
            details: if stderr.is_empty() { stdout } else { stderr },
        },
        Err(e) => ExecutionResult {
            outcome: Outcome::InternalError,
            message: SERVER_ERROR_MESSAGE.to_string(),
            details: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::traits::EngineError;

    fn exited(status_code: i32, stdout: &str, stderr: &str) -> Result<Execution, HarnessError> {
        Ok(Execution::Exited {
            status_code,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        })
    }

    #[test]
    fn zero_exit_is_success_with_stdout_details() {
        let result = classify(exited(0, "all good\n", ""));
        assert_eq!(result.outcome, Outcome::Success);
        assert_eq!(result.message, SUCCESS_MESSAGE);
        assert_eq!(result.details, "all good\n");
    }

    #[test]
    fn nonzero_exit_prefers_stderr_details() {
        let result = classify(exited(1, "partial output\n", "AssertionError: nope\n"));
        assert_eq!(result.outcome, Outcome::ValidationFailed);
        assert_eq!(result.message, FAILURE_MESSAGE);
        assert_eq!(result.details, "AssertionError: nope\n");
    }

    #[test]
    fn nonzero_exit_falls_back_to_stdout() {
        let result = classify(exited(1, "assertion failed on line 3\n", ""));
        assert_eq!(result.outcome, Outcome::ValidationFailed);
        assert_eq!(result.details, "assertion failed on line 3\n");
    }

    #[test]
    fn timeout_wins_and_needs_no_output() {
        let result = classify(Ok(Execution::TimedOut));
        assert_eq!(result.outcome, Outcome::Timeout);
        assert_eq!(result.message, TIMEOUT_MESSAGE);
        assert_eq!(result.details, TIMEOUT_DETAILS);
    }

    #[test]
    fn harness_fault_is_an_internal_error() {
        let result = classify(Err(HarnessError::Engine(EngineError::FailedToLaunch {
            msg: "no such interpreter".to_string(),
        })));
        assert_eq!(result.outcome, Outcome::InternalError);
        assert_eq!(result.message, SERVER_ERROR_MESSAGE);
        assert!(result.details.contains("no such interpreter"));
    }
}
