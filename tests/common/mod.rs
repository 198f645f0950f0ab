//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::io::Write;

use bounded_engine::{Executor, RunRecord, Runner};
use tempfile::NamedTempFile;

/// Path of the `law-scenario` binary built for this test run.
pub const LAW_SCENARIO_BIN: &str = env!("CARGO_BIN_EXE_law-scenario");

/// Path of the `run-all-laws` binary built for this test run.
pub const RUN_ALL_LAWS_BIN: &str = env!("CARGO_BIN_EXE_run-all-laws");

/// Run a batch and capture everything the runner printed.
pub fn run_capture<E: Executor>(runner: &Runner<E>, names: &[&str]) -> (String, Vec<RunRecord>) {
    let names: Vec<String> = names.iter().map(ToString::to_string).collect();
    let mut out = Vec::new();
    let records = runner.run(&names, &mut out).expect("writing to a Vec cannot fail");
    (String::from_utf8(out).expect("runner output is UTF-8"), records)
}

/// Write a config file to a temp location.
pub fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

/// The block of runner output belonging to one scenario, header included.
pub fn block_for<'a>(output: &'a str, name: &str) -> &'a str {
    let header = format!("--- {name} ---\n");
    let start = output.find(&header).expect("scenario header present");
    let rest = &output[start..];
    let end = rest.find("\n\n").map_or(rest.len(), |i| i + 2);
    &rest[..end]
}
