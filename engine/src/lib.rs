//! Scenario catalog and batch runner for the bounded classical laws.
//!
//! Each [`Scenario`] pairs a classical formula with an alignment lane over the
//! same inputs. The [`Runner`] executes scenarios through an [`Executor`],
//! either in process or as isolated `law-scenario` children, and prints a
//! banded summary per scenario.

pub mod catalog;
mod executor;
mod runner;
mod scenario;

pub use executor::{Executor, InProcess, Outcome, Report, Subprocess};
pub use runner::{BANNER, RunRecord, Runner};
pub use scenario::{
    Classical, ClassicalFn, Evaluation, Quantity, Reference, ReferenceMismatch, Scenario,
    ScenarioError,
};
