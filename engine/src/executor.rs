//! Scenario executors.
//!
//! The runner asks an [`Executor`] to run one named scenario and gets back a
//! [`Report`]: whatever the scenario wrote, plus a typed [`Outcome`]. The
//! in-process executor never parses text. The subprocess executor launches the
//! `law-scenario` binary and recovers the result from the `SSM:` line it
//! prints, so a scenario that panics cannot take the batch down.

use std::env;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use bounded_types::{ResultLine, ResultLineError};

use crate::catalog;

/// How one scenario run ended, from the runner's point of view.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A result was obtained.
    Parsed(ResultLine),
    /// The scenario ran but produced no result line.
    NoResultLine,
    /// A result line was present but could not be parsed.
    Malformed { line: String, error: ResultLineError },
    /// No scenario answers to the requested name.
    NotFound,
    /// The scenario process could not be started.
    LaunchFailed { program: PathBuf, message: String },
}

impl Outcome {
    /// Recover an outcome from captured stdout. The first `SSM:` line wins.
    #[must_use]
    pub fn from_stdout(stdout: &str) -> Self {
        let Some(line) = stdout.lines().find(|line| ResultLine::is_result_line(line)) else {
            return Outcome::NoResultLine;
        };
        match line.parse::<ResultLine>() {
            Ok(result) => Outcome::Parsed(result),
            Err(error) => Outcome::Malformed {
                line: line.trim().to_string(),
                error,
            },
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<ResultLine> {
        match self {
            Outcome::Parsed(result) => Some(*result),
            _ => None,
        }
    }

    /// Short machine-readable status.
    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Outcome::Parsed(_) => "ok",
            Outcome::NoResultLine => "no-result-line",
            Outcome::Malformed { .. } => "malformed",
            Outcome::NotFound => "not-found",
            Outcome::LaunchFailed { .. } => "launch-failed",
        }
    }
}

/// Everything one scenario run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub stdout: String,
    pub stderr: String,
    pub outcome: Outcome,
}

impl Report {
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            outcome: Outcome::NotFound,
        }
    }
}

pub trait Executor {
    fn execute(&self, name: &str) -> Report;
}

/// Evaluates scenarios from the catalog in the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct InProcess;

impl Executor for InProcess {
    fn execute(&self, name: &str) -> Report {
        let Some(scenario) = catalog::find(name) else {
            return Report::not_found();
        };
        match scenario.evaluate() {
            Ok(evaluation) => Report {
                stdout: evaluation.render(),
                stderr: String::new(),
                outcome: Outcome::Parsed(evaluation.result_line()),
            },
            Err(err) => {
                tracing::warn!(scenario = scenario.id, "Scenario evaluation failed: {err}");
                Report {
                    stdout: String::new(),
                    stderr: format!("error: {err}\n"),
                    outcome: Outcome::NoResultLine,
                }
            }
        }
    }
}

/// Runs each scenario as a separate `law-scenario` process.
#[derive(Debug, Clone)]
pub struct Subprocess {
    program: PathBuf,
}

impl Subprocess {
    pub const BINARY: &'static str = "law-scenario";

    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The `law-scenario` binary installed next to the running executable.
    #[must_use]
    pub fn beside_current_exe() -> Self {
        let file_name = format!("{}{}", Self::BINARY, env::consts::EXE_SUFFIX);
        let program = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(&file_name)))
            .unwrap_or_else(|| PathBuf::from(file_name));
        Self { program }
    }
}

impl Executor for Subprocess {
    fn execute(&self, name: &str) -> Report {
        // Unknown names never reach a child process.
        let Some(scenario) = catalog::find(name) else {
            return Report::not_found();
        };

        let output = Command::new(&self.program)
            .arg(scenario.name())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output();

        let output = match output {
            Ok(output) => output,
            Err(err) => {
                tracing::warn!(
                    program = %self.program.display(),
                    "Failed to launch scenario process: {err}"
                );
                return Report {
                    stdout: String::new(),
                    stderr: String::new(),
                    outcome: Outcome::LaunchFailed {
                        program: self.program.clone(),
                        message: err.to_string(),
                    },
                };
            }
        };

        if !output.status.success() {
            tracing::warn!(
                scenario = scenario.id,
                status = %output.status,
                "Scenario process exited unsuccessfully"
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        let outcome = Outcome::from_stdout(&stdout);
        Report {
            stdout,
            stderr,
            outcome,
        }
    }
}
