//! Batch runner: execute scenarios one after another and summarize each.
//!
//! Output for one scenario:
//!
//! ```text
//! --- scenario_L01_ohms_law ---
//! <scenario stdout>
//! [runner] STDERR:          (only when stderr is non-empty)
//! <scenario stderr>
//! [runner] summary: m=11.8950, a=+0.5173 [A- (stressed)]
//!
//! ```
//!
//! Nothing a scenario does aborts the batch.

use std::io::{self, Write};

use bounded_config::OutputFormat;
use bounded_types::{Band, BandPolicy};
use serde::Serialize;

use crate::catalog;
use crate::executor::{Executor, Outcome, Report};

pub const BANNER: &str = "Running bounded classical law scenarios...";
const UNPARSED_SUMMARY: &str = "could not parse";

/// Name and outcome of one scenario in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub name: String,
    pub outcome: Outcome,
}

#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    name: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    magnitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alignment: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    band: Option<Band>,
}

#[derive(Debug, Serialize)]
struct JsonSummary<'a> {
    scenarios: Vec<JsonEntry<'a>>,
}

pub struct Runner<E> {
    executor: E,
    policy: BandPolicy,
    format: OutputFormat,
}

impl<E: Executor> Runner<E> {
    #[must_use]
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            policy: BandPolicy::default(),
            format: OutputFormat::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: BandPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Run `names` in order, or every catalog scenario when `names` is empty.
    ///
    /// Only write errors on `out` are returned; scenario failures end up in
    /// the records.
    pub fn run(&self, names: &[String], out: &mut impl Write) -> io::Result<Vec<RunRecord>> {
        let names = if names.is_empty() {
            catalog::default_names()
        } else {
            names.to_vec()
        };

        writeln!(out, "{BANNER}")?;
        writeln!(out)?;

        let mut records = Vec::with_capacity(names.len());
        for name in names {
            let outcome = self.run_one(&name, out)?;
            records.push(RunRecord { name, outcome });
        }

        if self.format == OutputFormat::Json {
            self.write_json(&records, out)?;
        }
        Ok(records)
    }

    /// Run and print a single scenario block.
    pub fn run_one(&self, name: &str, out: &mut impl Write) -> io::Result<Outcome> {
        writeln!(out, "--- {name} ---")?;

        let Report {
            stdout,
            stderr,
            outcome,
        } = self.executor.execute(name);

        if outcome == Outcome::NotFound {
            tracing::warn!(scenario = name, "Scenario not found");
            writeln!(out, "[runner] ERROR: scenario not found: {name}")?;
            writeln!(out)?;
            return Ok(outcome);
        }

        if let Outcome::LaunchFailed { program, message } = &outcome {
            writeln!(
                out,
                "[runner] ERROR: could not launch {}: {message}",
                program.display()
            )?;
        }

        if !stdout.is_empty() {
            writeln!(out, "{}", stdout.trim_end())?;
        }
        if !stderr.is_empty() {
            writeln!(out, "[runner] STDERR:")?;
            writeln!(out, "{}", stderr.trim_end())?;
        }

        match &outcome {
            Outcome::Parsed(result) => {
                let band = self.policy.classify(result.alignment);
                writeln!(
                    out,
                    "[runner] summary: m={:.4}, a={:+.4} [{}]",
                    result.magnitude,
                    result.alignment,
                    band.label()
                )?;
            }
            Outcome::NoResultLine => {
                tracing::warn!(scenario = name, "No result line in scenario output");
                writeln!(out, "[runner] summary: {UNPARSED_SUMMARY}")?;
            }
            Outcome::Malformed { line, error } => {
                tracing::warn!(scenario = name, line = %line, "Malformed result line: {error}");
                writeln!(out, "[runner] summary: {UNPARSED_SUMMARY}")?;
            }
            Outcome::LaunchFailed { .. } | Outcome::NotFound => {
                writeln!(out, "[runner] summary: {UNPARSED_SUMMARY}")?;
            }
        }
        writeln!(out)?;
        Ok(outcome)
    }

    fn write_json(&self, records: &[RunRecord], out: &mut impl Write) -> io::Result<()> {
        let scenarios = records
            .iter()
            .map(|record| {
                let result = record.outcome.result();
                JsonEntry {
                    name: &record.name,
                    status: record.outcome.status(),
                    magnitude: result.map(|r| r.magnitude),
                    alignment: result.map(|r| r.alignment),
                    band: result.map(|r| self.policy.classify(r.alignment)),
                }
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &JsonSummary { scenarios })?;
        writeln!(out)
    }
}
