//! The one-line result format scenarios print for the runner.
//!
//! ```text
//! SSM: m=11.8950, a=+0.5173
//! ```
//!
//! Fields are comma separated and found by prefix, so their order and any
//! extra fields do not matter.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

pub const RESULT_PREFIX: &str = "SSM:";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResultLineError {
    #[error("result line has no `{0}=` field")]
    MissingField(&'static str),
    #[error("field `{field}` is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// A scenario's reported result: classical magnitude plus composite alignment.
///
/// The alignment is kept as the raw number that was reported; a malformed
/// producer can print values outside (-1, 1) and the runner displays them as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultLine {
    pub magnitude: f64,
    pub alignment: f64,
}

impl ResultLine {
    #[must_use]
    pub const fn new(magnitude: f64, alignment: f64) -> Self {
        Self {
            magnitude,
            alignment,
        }
    }

    /// Render with the magnitude at `precision` decimals.
    #[must_use]
    pub fn render(&self, precision: usize) -> String {
        format!("{RESULT_PREFIX} {}", self.render_fields(precision))
    }

    /// Just the `m=..., a=...` part.
    #[must_use]
    pub fn render_fields(&self, precision: usize) -> String {
        format!("m={:.precision$}, a={:+.4}", self.magnitude, self.alignment)
    }

    /// Whether `line` is a candidate result line.
    #[must_use]
    pub fn is_result_line(line: &str) -> bool {
        line.starts_with(RESULT_PREFIX)
    }
}

impl fmt::Display for ResultLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(4))
    }
}

impl FromStr for ResultLine {
    type Err = ResultLineError;

    /// Parse `SSM: m=<float>, a=<float>`. The prefix is optional.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let body = line.strip_prefix(RESULT_PREFIX).unwrap_or(line).trim();
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();

        let magnitude = field(&parts, "m")?;
        let alignment = field(&parts, "a")?;
        Ok(Self {
            magnitude,
            alignment,
        })
    }
}

fn field(parts: &[&str], name: &'static str) -> Result<f64, ResultLineError> {
    let raw = parts
        .iter()
        .find_map(|part| part.strip_prefix(name)?.strip_prefix('='))
        .ok_or(ResultLineError::MissingField(name))?;
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ResultLineError::InvalidNumber {
            field: name,
            value: raw.to_string(),
        })
}
