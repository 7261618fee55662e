use std::path::{Path, PathBuf};

use crate::adapter::{AssembledProgram, Invocation, LanguageAdapter, SourceFile};
use crate::domain::Submission;

/// Fixed header forcing matplotlib into a headless backend so plotting
/// submissions never block waiting on a display. The import is guarded:
/// a submission that never plots must not fail just because the plotting
/// stack is absent from the interpreter environment.
pub const HEADLESS_PREFIX: &str = "try:\n    import matplotlib\n    matplotlib.use('Agg')\nexcept ImportError:\n    pass\nimport sys\n";

pub const SCRIPT_NAME: &str = "script.py";

#[derive(Clone, Debug)]
pub struct PythonAdapter {
    interpreter: PathBuf,
}

impl PythonAdapter {
    pub fn new(interpreter: impl AsRef<Path>) -> Self {
        Self {
            interpreter: interpreter.as_ref().into(),
        }
    }
}

impl Default for PythonAdapter {
    fn default() -> Self {
        Self::new("python3")
    }
}

/// Binds the original, unmodified submission text to a `code` variable so
/// self-inspecting validators can reason about the source text.
///
/// The text is spliced verbatim between triple quotes. A submission that
/// itself contains `"""` corrupts the assembled program; known limitation
/// of this embedding.
fn code_variable(code: &str) -> String {
    format!("\ncode = \"\"\"{code}\"\"\"\n")
}

impl LanguageAdapter for PythonAdapter {
    fn assemble(&self, submission: &Submission, validator: &str) -> AssembledProgram {
        let mut program = String::with_capacity(
            HEADLESS_PREFIX.len() + submission.code.len() * 2 + validator.len() + 16,
        );
        program.push_str(HEADLESS_PREFIX);
        program.push_str(&submission.code);
        program.push_str(&code_variable(&submission.code));
        program.push_str(validator);

        AssembledProgram {
            files: vec![SourceFile {
                name: SCRIPT_NAME.to_string(),
                contents: program,
            }],
            entrypoint: SCRIPT_NAME.to_string(),
        }
    }

    fn command(&self, entrypoint: &str) -> Invocation {
        Invocation {
            program: self.interpreter.clone(),
            args: vec![entrypoint.to_string()],
        }
    }

    fn extension(&self) -> &'static str {
        "py"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Language;

    fn submission(code: &str) -> Submission {
        Submission::new(1, code, Language::Python)
    }

    #[test]
    fn headless_prefix_comes_first() {
        let program = PythonAdapter::default().assemble(&submission("print(1)"), "");
        assert!(program.files[0].contents.starts_with(HEADLESS_PREFIX));
    }

    #[test]
    fn code_variable_embeds_submission_verbatim() {
        let code = "x = 'quoted'\nprint(x)";
        let program = PythonAdapter::default().assemble(&submission(code), "");
        let expected = format!("\ncode = \"\"\"{code}\"\"\"\n");
        assert!(program.files[0].contents.contains(&expected));
    }

    #[test]
    fn no_validator_appends_only_boilerplate() {
        let code = "y = 1 + 1";
        let program = PythonAdapter::default().assemble(&submission(code), "");
        let expected = format!("{HEADLESS_PREFIX}{code}\ncode = \"\"\"{code}\"\"\"\n");
        assert_eq!(program.files[0].contents, expected);
    }

    #[test]
    fn validator_is_appended_last() {
        let program =
            PythonAdapter::default().assemble(&submission("y = 1"), "\nassert y == 1\n");
        assert!(program.files[0].contents.ends_with("\nassert y == 1\n"));
    }

    #[test]
    fn single_script_file_is_produced() {
        let program = PythonAdapter::default().assemble(&submission("pass"), "");
        assert_eq!(program.files.len(), 1);
        assert_eq!(program.entrypoint, SCRIPT_NAME);
    }

    #[test]
    fn command_runs_the_entrypoint() {
        let adapter = PythonAdapter::new("/usr/bin/python3");
        let invocation = adapter.command("script.py");
        assert_eq!(invocation.program, PathBuf::from("/usr/bin/python3"));
        assert_eq!(invocation.args, vec!["script.py".to_string()]);
    }
}
