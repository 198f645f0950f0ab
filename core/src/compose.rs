//! Composition operators.
//!
//! Every operator takes raw alignments, clamps them, moves to rapidity space,
//! combines linearly and maps back with `tanh`:
//!
//! | Operator | Rapidity combination | Models |
//! |----------|----------------------|--------|
//! | [`weighted_pool`] | `Σ w·u / max(Σ w, eps)` | repeated noisy samples of one quantity |
//! | [`sum_chain`] | `Σ u` | products of independent factors, combined postures |
//! | [`product_chain`] | `u1 + u2` | exactly two factors |
//! | [`division_chain`] | `u_num - u_den` | a quotient |

use bounded_types::{Alignment, Rapidity};

use crate::alignment::{DEFAULT_CLAMP_EPS, clamped_rapidity, unrapidity};

/// Floor on the pooled weight sum.
pub const DEFAULT_POOL_EPS: f64 = 1e-12;

/// Parameters of [`weighted_pool`].
///
/// `gamma` is the exponent applied to `|magnitude|` to form each weight. It is
/// left free; 1.0 weights linearly by magnitude and 0.0 gives a plain mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolOptions {
    pub gamma: f64,
    pub eps: f64,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            gamma: 1.0,
            eps: DEFAULT_POOL_EPS,
        }
    }
}

/// Pool `(alignment, magnitude)` pairs into one alignment.
///
/// Each rapidity is weighted by `|magnitude|^gamma`. When every weight is zero
/// the denominator falls back to `eps` and the result is whatever rounding
/// leaves of the numerator (zero for exactly-zero magnitudes).
///
/// Order-independent: only the multiset of pairs matters.
#[must_use]
pub fn weighted_pool<I>(pairs: I, options: PoolOptions) -> Alignment
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (numerator, total_weight) = pairs.into_iter().fold(
        (Rapidity::ZERO, 0.0_f64),
        |(numerator, total_weight), (raw, magnitude)| {
            let weight = magnitude.abs().powf(options.gamma);
            let u = clamped_rapidity(raw, DEFAULT_CLAMP_EPS);
            (numerator + u.scale(weight), total_weight + weight)
        },
    );
    if total_weight < options.eps {
        tracing::debug!(total_weight, eps = options.eps, "Pool weights vanish, dividing by eps");
    }
    unrapidity(numerator.scale(1.0 / total_weight.max(options.eps)))
}

/// `tanh(Σ atanh(clamp(a_i)))`. An empty chain is zero.
#[must_use]
pub fn sum_chain<I>(alignments: I, eps: f64) -> Alignment
where
    I: IntoIterator<Item = f64>,
{
    unrapidity(
        alignments
            .into_iter()
            .map(|raw| clamped_rapidity(raw, eps))
            .sum(),
    )
}

/// Two-factor [`sum_chain`].
#[must_use]
pub fn product_chain(a1: f64, a2: f64, eps: f64) -> Alignment {
    unrapidity(clamped_rapidity(a1, eps) + clamped_rapidity(a2, eps))
}

/// `tanh(atanh(clamp(num)) - atanh(clamp(den)))`.
#[must_use]
pub fn division_chain(num: f64, den: f64, eps: f64) -> Alignment {
    unrapidity(clamped_rapidity(num, eps) - clamped_rapidity(den, eps))
}
