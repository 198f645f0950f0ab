//! Scenario model: fixed inputs, a classical formula, and an alignment lane.
//!
//! A scenario is data. Its classical function sees magnitudes only; its lane
//! sees alignments only (plus magnitudes where a pool needs weights). Neither
//! reads anything outside the scenario's own input table.

use std::fmt::{self, Write};
use std::iter;
use std::path::Path;

use bounded_core::{Input, Lane, LaneError, Readings};
use bounded_types::{Alignment, ResultLine};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScenarioError {
    #[error(transparent)]
    Lane(#[from] LaneError),
    #[error("{quantity} is zero; the classical formula divides by it")]
    ZeroDivisor { quantity: &'static str },
}

/// A classical value with its display unit and precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub precision: usize,
}

impl Quantity {
    #[must_use]
    pub const fn new(label: &'static str, value: f64, unit: &'static str, precision: usize) -> Self {
        Self {
            label,
            value,
            unit,
            precision,
        }
    }

    fn formatted_value(&self) -> String {
        format!("{:.*}", self.precision, self.value)
    }
}

/// Classical side of an evaluation: the reported quantity plus the
/// intermediate values worth showing.
#[derive(Debug, Clone, PartialEq)]
pub struct Classical {
    pub steps: Vec<Quantity>,
    pub headline: Quantity,
}

impl Classical {
    #[must_use]
    pub fn new(steps: Vec<Quantity>, headline: Quantity) -> Self {
        Self { steps, headline }
    }

    /// Look up a step or the headline by label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Quantity> {
        self.steps
            .iter()
            .chain(iter::once(&self.headline))
            .find(|q| q.label == label)
    }
}

/// Result a scenario declares for itself, with the tolerance it accepts.
///
/// `tolerance` bounds the alignment error absolutely and the magnitude error
/// relative to `max(1, |magnitude|)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reference {
    pub magnitude: f64,
    pub alignment: f64,
    pub tolerance: f64,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error(
    "{scenario}: expected m={expected_magnitude}, a={expected_alignment:+}, got m={magnitude}, a={alignment:+} (tolerance {tolerance})"
)]
pub struct ReferenceMismatch {
    pub scenario: &'static str,
    pub expected_magnitude: f64,
    pub expected_alignment: f64,
    pub magnitude: f64,
    pub alignment: f64,
    pub tolerance: f64,
}

pub type ClassicalFn = fn(&Readings<'_>) -> Result<Classical, ScenarioError>;

/// One fixed worked example of a classical law.
pub struct Scenario {
    /// Short identifier, `L01`..`L10`.
    pub id: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
    pub formula: &'static str,
    pub inputs: &'static [Input],
    pub classical: ClassicalFn,
    pub lane: fn() -> Lane,
    /// Name of the alignment lane in rendered output, e.g. "loss lane".
    pub lane_name: &'static str,
    pub reference: Reference,
}

impl Scenario {
    /// Full name, e.g. `scenario_L01_ohms_law`.
    #[must_use]
    pub fn name(&self) -> String {
        format!("scenario_{}_{}", self.id, self.slug)
    }

    /// Whether `requested` names this scenario.
    ///
    /// Accepts the id, the slug, or the full name, case-insensitively. A
    /// leading directory and a trailing extension are ignored, so
    /// `scripts/scenario_L01_ohms_law.py` still resolves.
    #[must_use]
    pub fn matches(&self, requested: &str) -> bool {
        let path = Path::new(requested.trim());
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            return false;
        };
        stem.eq_ignore_ascii_case(self.id)
            || stem.eq_ignore_ascii_case(self.slug)
            || stem.eq_ignore_ascii_case(&self.name())
    }

    pub fn readings(&self) -> Result<Readings<'static>, ScenarioError> {
        Ok(Readings::new(self.inputs)?)
    }

    pub fn evaluate(&'static self) -> Result<Evaluation, ScenarioError> {
        let readings = self.readings()?;
        let classical = (self.classical)(&readings)?;
        let lane = (self.lane)();
        let alignment = lane.eval(&readings)?;
        tracing::debug!(
            scenario = self.id,
            magnitude = classical.headline.value,
            alignment = alignment.value(),
            lane = %lane,
            "Evaluated scenario"
        );
        Ok(Evaluation {
            scenario: self,
            classical,
            lane,
            alignment,
        })
    }
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("id", &self.id)
            .field("slug", &self.slug)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Output of one scenario: classical result plus composite alignment.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub scenario: &'static Scenario,
    pub classical: Classical,
    pub lane: Lane,
    pub alignment: Alignment,
}

impl Evaluation {
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.classical.headline.value
    }

    #[must_use]
    pub fn result_line(&self) -> ResultLine {
        ResultLine::new(self.magnitude(), self.alignment.value())
    }

    pub fn check_reference(&self) -> Result<(), ReferenceMismatch> {
        let reference = self.scenario.reference;
        let magnitude_slack = reference.tolerance * reference.magnitude.abs().max(1.0);
        let magnitude_ok = (self.magnitude() - reference.magnitude).abs() <= magnitude_slack;
        let alignment_ok =
            (self.alignment.value() - reference.alignment).abs() <= reference.tolerance;
        if magnitude_ok && alignment_ok {
            return Ok(());
        }
        Err(ReferenceMismatch {
            scenario: self.scenario.id,
            expected_magnitude: reference.magnitude,
            expected_alignment: reference.alignment,
            magnitude: self.magnitude(),
            alignment: self.alignment.value(),
            tolerance: reference.tolerance,
        })
    }

    /// Human-readable block ending in the canonical result line.
    #[must_use]
    pub fn render(&self) -> String {
        let scenario = self.scenario;
        let headline = &self.classical.headline;
        let mut out = String::new();

        let _ = writeln!(out, "Law {}: {}", scenario.id, scenario.title);

        out.push_str("Inputs:\n");
        let symbol_width = scenario
            .inputs
            .iter()
            .map(|input| input.symbol.len())
            .max()
            .unwrap_or(0);
        for input in scenario.inputs {
            let _ = write!(
                out,
                "  {:<symbol_width$} = {}",
                input.symbol, input.reading.magnitude
            );
            if !input.unit.is_empty() {
                let _ = write!(out, " {}", input.unit);
            }
            let _ = write!(out, ", a={:+.2}", input.reading.alignment);
            if !input.note.is_empty() {
                let _ = write!(out, " ({})", input.note);
            }
            out.push('\n');
        }

        let _ = writeln!(out, "Classical: {}", scenario.formula);
        let label_width = self
            .classical
            .steps
            .iter()
            .chain(iter::once(headline))
            .map(|q| q.label.len())
            .max()
            .unwrap_or(0);
        for quantity in self.classical.steps.iter().chain(iter::once(headline)) {
            let _ = write!(
                out,
                "  {:<label_width$} = {}",
                quantity.label,
                quantity.formatted_value()
            );
            if !quantity.unit.is_empty() {
                let _ = write!(out, " {}", quantity.unit);
            }
            out.push('\n');
        }

        let line = self.result_line();
        let _ = writeln!(out, "SSM ({}): {}", scenario.lane_name, self.lane);
        let _ = writeln!(
            out,
            "  {} = {}",
            headline.label,
            line.render_fields(headline.precision)
        );
        let _ = writeln!(out, "{}", line.render(headline.precision));
        out
    }
}

/// Guard a classical denominator.
pub(crate) fn nonzero(value: f64, quantity: &'static str) -> Result<f64, ScenarioError> {
    if value == 0.0 {
        Err(ScenarioError::ZeroDivisor { quantity })
    } else {
        Ok(value)
    }
}
