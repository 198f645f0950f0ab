//! `law-scenario <SCENARIO>`: evaluate one scenario and print its block.
//!
//! The last stdout line is the `SSM:` result line. Exit status is 0 on
//! success, 1 when evaluation fails and 2 for a missing or unknown name.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use bounded_engine::catalog;
use bounded_laws::init_tracing;

const USAGE_EXIT: u8 = 2;

fn main() -> Result<ExitCode> {
    init_tracing();

    let Some(name) = env::args().nth(1) else {
        eprintln!("usage: law-scenario <SCENARIO>");
        return Ok(ExitCode::from(USAGE_EXIT));
    };

    let Some(scenario) = catalog::find(&name) else {
        eprintln!("error: unknown scenario: {name}");
        return Ok(ExitCode::from(USAGE_EXIT));
    };

    let evaluation = match scenario.evaluate() {
        Ok(evaluation) => evaluation,
        Err(err) => {
            tracing::warn!(scenario = scenario.id, "Evaluation failed: {err}");
            eprintln!("error: {}: {err}", scenario.name());
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut out = io::stdout().lock();
    out.write_all(evaluation.render().as_bytes())
        .and_then(|()| out.flush())
        .context("failed to write scenario output")?;
    Ok(ExitCode::SUCCESS)
}
