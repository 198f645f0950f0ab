//! Qualitative bands for alignment magnitudes.

use serde::Serialize;
use thiserror::Error;

/// Qualitative classification of |alignment|.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Calm,
    Borderline,
    Stressed,
}

impl Band {
    /// Label used in runner summaries.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Band::Calm => "A+ (calm)",
            Band::Borderline => "A0 (borderline)",
            Band::Stressed => "A- (stressed)",
        }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error(
    "band thresholds must satisfy 0 < calm_below ({calm_below}) < borderline_below ({borderline_below}) <= 1"
)]
pub struct BandPolicyError {
    pub calm_below: f64,
    pub borderline_below: f64,
}

/// Thresholds on |a| separating the bands.
///
/// `|a| < calm_below` is calm, `|a| < borderline_below` is borderline,
/// anything else is stressed. Ordering is checked at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandPolicy {
    calm_below: f64,
    borderline_below: f64,
}

impl BandPolicy {
    pub const DEFAULT_CALM_BELOW: f64 = 0.20;
    pub const DEFAULT_BORDERLINE_BELOW: f64 = 0.50;

    pub fn new(calm_below: f64, borderline_below: f64) -> Result<Self, BandPolicyError> {
        let ordered = calm_below > 0.0 && calm_below < borderline_below && borderline_below <= 1.0;
        if !ordered {
            return Err(BandPolicyError {
                calm_below,
                borderline_below,
            });
        }
        Ok(Self {
            calm_below,
            borderline_below,
        })
    }

    #[must_use]
    pub const fn calm_below(&self) -> f64 {
        self.calm_below
    }

    #[must_use]
    pub const fn borderline_below(&self) -> f64 {
        self.borderline_below
    }

    /// Classify a signed alignment. Only its magnitude matters.
    #[must_use]
    pub fn classify(&self, alignment: f64) -> Band {
        let x = alignment.abs();
        if x < self.calm_below {
            Band::Calm
        } else if x < self.borderline_below {
            Band::Borderline
        } else {
            Band::Stressed
        }
    }
}

impl Default for BandPolicy {
    fn default() -> Self {
        Self {
            calm_below: Self::DEFAULT_CALM_BELOW,
            borderline_below: Self::DEFAULT_BORDERLINE_BELOW,
        }
    }
}
