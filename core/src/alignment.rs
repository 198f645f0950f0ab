//! Alignment primitives: clamp, rapidity, and its inverse.

use bounded_types::{Alignment, Rapidity};

/// Margin kept between a clamped alignment and +/-1.
pub const DEFAULT_CLAMP_EPS: f64 = 1e-6;

/// Restrict a raw alignment to `[-1 + eps, 1 - eps]`.
///
/// Total: out-of-range inputs saturate silently and NaN becomes 0.0, so every
/// downstream `atanh` is finite. Genuinely invalid inputs (|a| >= 1) are masked.
/// An `eps` outside (0, 1), NaN included, falls back to [`DEFAULT_CLAMP_EPS`].
#[must_use]
pub fn clamp(a: f64, eps: f64) -> f64 {
    if a.is_nan() {
        return 0.0;
    }
    let eps = if eps > 0.0 && eps < 1.0 {
        eps
    } else {
        DEFAULT_CLAMP_EPS
    };
    a.min(1.0 - eps).max(-1.0 + eps)
}

/// `atanh(a) = 0.5 * ln((1 + a) / (1 - a))`.
///
/// Callers pass a pre-clamped value; see [`clamped_rapidity`].
#[must_use]
pub fn rapidity(a: f64) -> Rapidity {
    Rapidity::new(0.5 * ((1.0 + a) / (1.0 - a)).ln())
}

/// Clamp a raw alignment and map it to rapidity space.
#[must_use]
pub fn clamped_rapidity(raw: f64, eps: f64) -> Rapidity {
    rapidity(clamp(raw, eps))
}

/// `tanh(u)`, saturated onto the open interval.
#[must_use]
pub fn unrapidity(u: Rapidity) -> Alignment {
    Alignment::saturating(u.value().tanh())
}
