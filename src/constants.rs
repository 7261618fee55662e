use std::time::Duration;

/// Wall-clock deadline for one submission run.
pub const RUN_TIMEOUT: Duration = Duration::from_secs(10);

/// Exit code the interpreter returns when the submission and the appended
/// validator both ran to completion.
pub const SUCCESS_EXIT_CODE: i32 = 0;

pub const SUCCESS_MESSAGE: &str = "✅ Validation Passed!";
pub const FAILURE_MESSAGE: &str = "❌ Validation Failed";
pub const TIMEOUT_MESSAGE: &str = "❌ Execution Timed Out";
pub const TIMEOUT_DETAILS: &str = "Code took too long to run.";
pub const SERVER_ERROR_MESSAGE: &str = "❌ Server Error";
