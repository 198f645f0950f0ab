//! Lane expressions: the composition graph of a scenario's alignment.
//!
//! A scenario declares its named inputs once and describes how their
//! alignments combine as a [`Lane`] tree. Evaluation walks the tree against the
//! inputs and applies the operators from [`crate::compose`].
//!
//! ```text
//! Ohm's law, V = avg(I) * R:
//!
//!   product(pool(I1, I2), R)
//! ```

use std::collections::HashSet;
use std::fmt;

use bounded_types::{Alignment, Reading};
use thiserror::Error;

use crate::alignment::{DEFAULT_CLAMP_EPS, clamp};
use crate::compose::{PoolOptions, division_chain, product_chain, sum_chain, weighted_pool};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LaneError {
    #[error("unknown input `{0}`")]
    UnknownInput(String),
    #[error("input `{0}` is declared more than once")]
    DuplicateInput(&'static str),
}

/// A named scenario input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    pub symbol: &'static str,
    pub unit: &'static str,
    pub note: &'static str,
    pub reading: Reading,
}

impl Input {
    #[must_use]
    pub const fn new(
        symbol: &'static str,
        magnitude: f64,
        alignment: f64,
        unit: &'static str,
        note: &'static str,
    ) -> Self {
        Self {
            symbol,
            unit,
            note,
            reading: Reading::new(magnitude, alignment),
        }
    }
}

/// Validated view over a scenario's inputs. Symbols are unique.
#[derive(Debug, Clone, Copy)]
pub struct Readings<'a> {
    inputs: &'a [Input],
}

impl<'a> Readings<'a> {
    pub fn new(inputs: &'a [Input]) -> Result<Self, LaneError> {
        let mut seen = HashSet::with_capacity(inputs.len());
        for input in inputs {
            if !seen.insert(input.symbol) {
                return Err(LaneError::DuplicateInput(input.symbol));
            }
        }
        Ok(Self { inputs })
    }

    pub fn get(&self, symbol: &str) -> Result<&'a Input, LaneError> {
        self.inputs
            .iter()
            .find(|input| input.symbol == symbol)
            .ok_or_else(|| LaneError::UnknownInput(symbol.to_string()))
    }

    pub fn magnitude(&self, symbol: &str) -> Result<f64, LaneError> {
        Ok(self.get(symbol)?.reading.magnitude)
    }

    pub fn alignment(&self, symbol: &str) -> Result<f64, LaneError> {
        Ok(self.get(symbol)?.reading.alignment)
    }
}

/// Function computing a derived pool weight from the inputs.
pub type DerivedWeight = fn(&Readings<'_>) -> Result<f64, LaneError>;

/// Magnitude used to weight one term of a pool.
#[derive(Debug, Clone)]
pub enum Weight {
    /// The magnitude of one input.
    Magnitude(&'static str),
    /// The product of several inputs' magnitudes.
    Product(Vec<&'static str>),
    /// Any other function of the inputs.
    Derived {
        label: &'static str,
        weight: DerivedWeight,
    },
}

impl Weight {
    pub fn resolve(&self, readings: &Readings<'_>) -> Result<f64, LaneError> {
        match self {
            Weight::Magnitude(symbol) => readings.magnitude(symbol),
            Weight::Product(symbols) => symbols
                .iter()
                .try_fold(1.0, |acc, symbol| -> Result<f64, LaneError> {
                    Ok(acc * readings.magnitude(symbol)?)
                }),
            Weight::Derived { weight, .. } => weight(readings),
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Magnitude(symbol) => write!(f, "|{symbol}|"),
            Weight::Product(symbols) => write!(f, "|{}|", symbols.join("*")),
            Weight::Derived { label, .. } => write!(f, "|{label}|"),
        }
    }
}

/// A node of the alignment composition graph.
#[derive(Debug, Clone)]
pub enum Lane {
    /// Raw alignment of a named input.
    Input(&'static str),
    /// Weighted pool of sub-lanes.
    Pool {
        terms: Vec<(Lane, Weight)>,
        options: PoolOptions,
    },
    /// Sum-chain of sub-lanes.
    Chain(Vec<Lane>),
    /// Product-chain of exactly two sub-lanes.
    Product(Box<Lane>, Box<Lane>),
    /// Division-chain.
    Ratio { num: Box<Lane>, den: Box<Lane> },
}

impl Lane {
    #[must_use]
    pub fn input(symbol: &'static str) -> Self {
        Lane::Input(symbol)
    }

    /// Pool inputs weighted by their own magnitudes, the common case for
    /// repeated samples of one quantity.
    #[must_use]
    pub fn samples(symbols: &[&'static str]) -> Self {
        Lane::Pool {
            terms: symbols
                .iter()
                .map(|&symbol| (Lane::Input(symbol), Weight::Magnitude(symbol)))
                .collect(),
            options: PoolOptions::default(),
        }
    }

    #[must_use]
    pub fn pool(terms: Vec<(Lane, Weight)>) -> Self {
        Lane::Pool {
            terms,
            options: PoolOptions::default(),
        }
    }

    #[must_use]
    pub fn chain(lanes: Vec<Lane>) -> Self {
        Lane::Chain(lanes)
    }

    #[must_use]
    pub fn inputs(symbols: &[&'static str]) -> Self {
        Lane::Chain(symbols.iter().map(|&symbol| Lane::Input(symbol)).collect())
    }

    #[must_use]
    pub fn product(a: Lane, b: Lane) -> Self {
        Lane::Product(Box::new(a), Box::new(b))
    }

    #[must_use]
    pub fn ratio(num: Lane, den: Lane) -> Self {
        Lane::Ratio {
            num: Box::new(num),
            den: Box::new(den),
        }
    }

    /// Evaluate the lane to a composite alignment.
    ///
    /// Leaf inputs are clamped; operators clamp again on the way in, which is
    /// idempotent.
    pub fn eval(&self, readings: &Readings<'_>) -> Result<Alignment, LaneError> {
        match self {
            Lane::Input(symbol) => {
                let raw = readings.alignment(symbol)?;
                Ok(Alignment::saturating(clamp(raw, DEFAULT_CLAMP_EPS)))
            }
            Lane::Pool { terms, options } => {
                let pairs = terms
                    .iter()
                    .map(|(lane, weight)| -> Result<(f64, f64), LaneError> {
                        Ok((lane.eval(readings)?.value(), weight.resolve(readings)?))
                    })
                    .collect::<Result<Vec<_>, LaneError>>()?;
                Ok(weighted_pool(pairs, *options))
            }
            Lane::Chain(lanes) => {
                let values = lanes
                    .iter()
                    .map(|lane| lane.eval(readings).map(Alignment::value))
                    .collect::<Result<Vec<_>, LaneError>>()?;
                Ok(sum_chain(values, DEFAULT_CLAMP_EPS))
            }
            Lane::Product(a, b) => Ok(product_chain(
                a.eval(readings)?.value(),
                b.eval(readings)?.value(),
                DEFAULT_CLAMP_EPS,
            )),
            Lane::Ratio { num, den } => Ok(division_chain(
                num.eval(readings)?.value(),
                den.eval(readings)?.value(),
                DEFAULT_CLAMP_EPS,
            )),
        }
    }

    /// Every input symbol the lane references, in first-use order.
    #[must_use]
    pub fn symbols(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        self.collect_symbols(&mut out);
        out
    }

    fn collect_symbols(&self, out: &mut Vec<&'static str>) {
        match self {
            Lane::Input(symbol) => {
                if !out.contains(symbol) {
                    out.push(*symbol);
                }
            }
            Lane::Pool { terms, .. } => {
                for (lane, _) in terms {
                    lane.collect_symbols(out);
                }
            }
            Lane::Chain(lanes) => {
                for lane in lanes {
                    lane.collect_symbols(out);
                }
            }
            Lane::Product(a, b) => {
                a.collect_symbols(out);
                b.collect_symbols(out);
            }
            Lane::Ratio { num, den } => {
                num.collect_symbols(out);
                den.collect_symbols(out);
            }
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lane::Input(symbol) => f.write_str(symbol),
            Lane::Pool { terms, .. } => {
                f.write_str("pool(")?;
                for (i, (lane, weight)) in terms.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match (lane, weight) {
                        (Lane::Input(symbol), Weight::Magnitude(weighted)) if symbol == weighted => {
                            write!(f, "{lane}")?;
                        }
                        _ => write!(f, "{lane} @ {weight}")?,
                    }
                }
                f.write_str(")")
            }
            Lane::Chain(lanes) => {
                f.write_str("chain(")?;
                for (i, lane) in lanes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{lane}")?;
                }
                f.write_str(")")
            }
            Lane::Product(a, b) => write!(f, "product({a}, {b})"),
            Lane::Ratio { num, den } => write!(f, "ratio({num}, {den})"),
        }
    }
}
