//! `run-all-laws`: run the bounded classical law scenarios and summarize each.
//!
//! Positional arguments name scenarios (id, slug or full name). With none,
//! all ten run in order. The batch always completes; per-scenario failures
//! show up in the output, not in the exit code.

use std::env;
use std::io::{self, Write};

use anyhow::{Context, Result};
use bounded_laws::{Settings, init_tracing, run_batch};

fn main() -> Result<()> {
    init_tracing();

    let settings = Settings::load();
    let names: Vec<String> = env::args().skip(1).collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let records = run_batch(&settings, &names, &mut out).context("failed to write runner output")?;
    out.flush().context("failed to flush runner output")?;

    tracing::debug!(scenarios = records.len(), "Batch complete");
    Ok(())
}
