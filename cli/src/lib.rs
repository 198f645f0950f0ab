//! Shared wiring for the `run-all-laws` and `law-scenario` binaries.
//!
//! ```text
//! run-all-laws [SCENARIO...]
//!     Settings::load() -> Runner<InProcess | Subprocess> -> stdout
//!
//! law-scenario <SCENARIO>
//!     catalog::find() -> Scenario::evaluate() -> render() -> stdout
//! ```
//!
//! Logs go to stderr so stdout carries nothing but scenario output and the
//! `SSM:` result lines.

use std::io::{self, Write};
use std::path::PathBuf;

use bounded_config::{Isolation, LawsConfig, OutputFormat};
use bounded_engine::{Executor, InProcess, RunRecord, Runner, Subprocess};
use bounded_types::BandPolicy;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .try_init();
}

/// Effective runner settings after applying the config file to the defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub isolation: Isolation,
    pub format: OutputFormat,
    pub policy: BandPolicy,
    pub scenario_bin: Option<PathBuf>,
}

impl Settings {
    /// Load from the config file. Any problem with the file is logged and the
    /// defaults are used instead.
    #[must_use]
    pub fn load() -> Self {
        match LawsConfig::load() {
            Ok(Some(config)) => Self::from_config(&config),
            Ok(None) => Self::default(),
            Err(err) => {
                tracing::warn!("Ignoring config, using defaults: {err}");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn from_config(config: &LawsConfig) -> Self {
        let policy = config.band_policy().unwrap_or_else(|err| {
            tracing::warn!("Ignoring band thresholds: {err}");
            BandPolicy::default()
        });
        Self {
            isolation: config.isolation(),
            format: config.format(),
            policy,
            scenario_bin: config.scenario_bin().map(PathBuf::from),
        }
    }

    fn subprocess(&self) -> Subprocess {
        self.scenario_bin
            .clone()
            .map_or_else(Subprocess::beside_current_exe, Subprocess::new)
    }
}

/// Run a batch with the executor the settings select.
pub fn run_batch(
    settings: &Settings,
    names: &[String],
    out: &mut impl Write,
) -> io::Result<Vec<RunRecord>> {
    tracing::debug!(
        isolation = settings.isolation.as_str(),
        scenarios = names.len(),
        "Starting batch"
    );
    match settings.isolation {
        Isolation::InProcess => run_with(InProcess, settings, names, out),
        Isolation::Process => run_with(settings.subprocess(), settings, names, out),
    }
}

fn run_with<E: Executor>(
    executor: E,
    settings: &Settings,
    names: &[String],
    out: &mut impl Write,
) -> io::Result<Vec<RunRecord>> {
    Runner::new(executor)
        .with_policy(settings.policy)
        .with_format(settings.format)
        .run(names, out)
}
