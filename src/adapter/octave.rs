use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::adapter::{AssembledProgram, Invocation, LanguageAdapter, SourceFile};
use crate::domain::Submission;

/// Driver file name. Not `test.m`: that would shadow Octave's built-in
/// `test` function.
pub const DRIVER_NAME: &str = "run_test.m";

pub const SCRIPT_NAME: &str = "script.m";

static FUNCTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"function\s+(?:\w+\s*=\s*)?(\w+)\s*\(").unwrap());

/// Extracts the function name when the submission is a function definition;
/// returns `None` for plain scripts.
pub fn extract_function_name(code: &str) -> Option<&str> {
    FUNCTION_HEADER
        .captures(code)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[derive(Clone, Debug)]
pub struct OctaveAdapter {
    interpreter: PathBuf,
}

impl OctaveAdapter {
    pub fn new(interpreter: impl AsRef<Path>) -> Self {
        Self {
            interpreter: interpreter.as_ref().into(),
        }
    }
}

impl Default for OctaveAdapter {
    fn default() -> Self {
        Self::new("octave")
    }
}

/// Octave single-quoted string escaping: apostrophes doubled, embedded
/// newlines literalized to the two-character `\n` sequence.
fn escape(code: &str) -> String {
    code.replace('\'', "''").replace('\n', "\\n")
}

/// Binds the original submission text to a `code` variable for validators
/// that inspect the source.
fn code_variable(code: &str) -> String {
    format!("\ncode = '{}';\n", escape(code))
}

impl LanguageAdapter for OctaveAdapter {
    fn assemble(&self, submission: &Submission, validator: &str) -> AssembledProgram {
        let code_var = code_variable(&submission.code);

        if let Some(name) = extract_function_name(&submission.code) {
            // Octave resolves functions by matching file name to function
            // name in the working directory, so the function file must be
            // named after the function. The driver never sources it
            // explicitly; the interpreter discovers it.
            let function_file = SourceFile {
                name: format!("{name}.m"),
                contents: format!("{}\n", submission.code.trim_end()),
            };
            let driver = SourceFile {
                name: DRIVER_NAME.to_string(),
                contents: format!("{code_var}{validator}"),
            };
            AssembledProgram {
                files: vec![function_file, driver],
                entrypoint: DRIVER_NAME.to_string(),
            }
        } else {
            let script = SourceFile {
                name: SCRIPT_NAME.to_string(),
                contents: format!("{}{code_var}{validator}", submission.code),
            };
            AssembledProgram {
                files: vec![script],
                entrypoint: SCRIPT_NAME.to_string(),
            }
        }
    }

    fn command(&self, entrypoint: &str) -> Invocation {
        Invocation {
            program: self.interpreter.clone(),
            args: vec![
                "--quiet".to_string(),
                "--no-gui".to_string(),
                entrypoint.to_string(),
            ],
        }
    }

    fn extension(&self) -> &'static str {
        "m"
    }
}
