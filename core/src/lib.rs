//! Alignment algebra for bounded laws.
//!
//! Alignments live in (-1, 1). Composition happens in rapidity space, where
//! `u = atanh(a)` turns the bounded interval into the real line and products
//! and quotients of the underlying magnitudes become sums and differences:
//!
//! ```text
//! raw a ──clamp──> a' ──atanh──> u ──(linear combination)──> u* ──tanh──> a*
//! ```
//!
//! - [`alignment`]: clamp, rapidity and its inverse
//! - [`compose`]: weighted pool, sum-chain, product-chain, division-chain
//! - [`lane`]: composition graphs over named scenario inputs

pub mod alignment;
pub mod compose;
pub mod lane;

pub use alignment::{DEFAULT_CLAMP_EPS, clamp, clamped_rapidity, rapidity, unrapidity};
pub use compose::{
    DEFAULT_POOL_EPS, PoolOptions, division_chain, product_chain, sum_chain, weighted_pool,
};
pub use lane::{DerivedWeight, Input, Lane, LaneError, Readings, Weight};
