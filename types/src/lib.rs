//! Core domain values for bounded laws.
//!
//! This crate contains pure values with no IO and minimal dependencies:
//! alignments, rapidities, raw readings, bands, and the result line a
//! scenario reports. Everything here can be used from any layer.

#![allow(clippy::missing_errors_doc)]

mod band;
mod protocol;

pub use band::{Band, BandPolicy, BandPolicyError};
pub use protocol::{RESULT_PREFIX, ResultLine, ResultLineError};

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

use serde::Serialize;

// ============================================================================
// Alignment
// ============================================================================

/// Largest `f64` strictly below 1.0.
const INTERIOR_MAX: f64 = 1.0 - f64::EPSILON / 2.0;

/// A bounded drift/uncertainty score, guaranteed to lie strictly inside (-1, 1).
///
/// Raw alignments attached to measurements are plain `f64` and may fall
/// outside the interval; they are clamped by the algebra before use. Every
/// value the algebra hands back is an `Alignment`.
///
/// # Invariants
///
/// - `-1.0 < value < 1.0`
/// - never NaN
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Alignment(f64);

impl Alignment {
    pub const ZERO: Alignment = Alignment(0.0);

    /// Build an alignment, pulling `value` onto the nearest representable
    /// interior point. NaN maps to zero.
    ///
    /// `tanh` rounds to exactly +/-1.0 once |u| exceeds about 19; those
    /// results land on the largest interior value instead.
    #[must_use]
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(-INTERIOR_MAX, INTERIOR_MAX))
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<Alignment> for f64 {
    fn from(value: Alignment) -> Self {
        value.0
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.4}", self.0)
    }
}

// ============================================================================
// Rapidity
// ============================================================================

/// Unbounded image of an alignment under `atanh`.
///
/// Rapidities add where alignments would compose non-linearly.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Rapidity(f64);

impl Rapidity {
    pub const ZERO: Rapidity = Rapidity(0.0);

    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }
}

impl Add for Rapidity {
    type Output = Rapidity;

    fn add(self, rhs: Rapidity) -> Rapidity {
        Rapidity(self.0 + rhs.0)
    }
}

impl Sub for Rapidity {
    type Output = Rapidity;

    fn sub(self, rhs: Rapidity) -> Rapidity {
        Rapidity(self.0 - rhs.0)
    }
}

impl Neg for Rapidity {
    type Output = Rapidity;

    fn neg(self) -> Rapidity {
        Rapidity(-self.0)
    }
}

impl Sum for Rapidity {
    fn sum<I: Iterator<Item = Rapidity>>(iter: I) -> Rapidity {
        iter.fold(Rapidity::ZERO, Add::add)
    }
}

// ============================================================================
// Readings
// ============================================================================

/// One raw measurement: a classical magnitude and its unclamped alignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub magnitude: f64,
    pub alignment: f64,
}

impl Reading {
    #[must_use]
    pub const fn new(magnitude: f64, alignment: f64) -> Self {
        Self {
            magnitude,
            alignment,
        }
    }
}
