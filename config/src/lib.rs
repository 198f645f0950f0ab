//! Configuration for the bounded-laws runner.
//!
//! Everything is optional. A missing file means defaults:
//!
//! ```toml
//! [runner]
//! isolation = "in-process"   # or "process"
//! format = "text"            # or "json"
//! scenario_bin = "/opt/bounded-laws/law-scenario"
//!
//! [bands]
//! calm_below = 0.20
//! borderline_below = 0.50
//! ```
//!
//! The file lives at `~/.bounded-laws/config.toml` unless
//! `BOUNDED_LAWS_CONFIG` points elsewhere.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bounded_types::{BandPolicy, BandPolicyError};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "BOUNDED_LAWS_CONFIG";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LawsConfig {
    pub runner: Option<RunnerConfig>,
    pub bands: Option<BandsConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid [bands] section: {0}")]
    InvalidBands(#[from] BandPolicyError),
}

impl ConfigError {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => {
                Some(path.as_path())
            }
            ConfigError::InvalidBands(_) => None,
        }
    }
}

/// How the runner executes each scenario.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Isolation {
    /// Evaluate from the catalog in this process; results stay typed.
    #[default]
    InProcess,
    /// Launch one `law-scenario` child per scenario and parse its stdout.
    Process,
}

impl Isolation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProcess => "in-process",
            Self::Process => "process",
        }
    }
}

/// Shape of the runner's final output.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    /// Text blocks followed by one JSON summary document.
    Json,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    #[serde(default)]
    pub isolation: Isolation,
    #[serde(default)]
    pub format: OutputFormat,
    /// Explicit path to the `law-scenario` binary for process isolation.
    /// Defaults to the binary next to the running executable.
    pub scenario_bin: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BandsConfig {
    pub calm_below: Option<f64>,
    pub borderline_below: Option<f64>,
}

impl BandsConfig {
    /// Build the band policy, filling unset thresholds from the defaults.
    pub fn policy(&self) -> Result<BandPolicy, ConfigError> {
        let calm = self.calm_below.unwrap_or(BandPolicy::DEFAULT_CALM_BELOW);
        let borderline = self.borderline_below.unwrap_or(BandPolicy::DEFAULT_BORDERLINE_BELOW);
        Ok(BandPolicy::new(calm, borderline)?)
    }
}

impl LawsConfig {
    /// Load from the default location. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        let config: LawsConfig = match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                return Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        // Surface bad thresholds at load time rather than on first use.
        config.band_policy()?;
        Ok(config)
    }

    pub fn band_policy(&self) -> Result<BandPolicy, ConfigError> {
        self.bands
            .as_ref()
            .map_or_else(|| Ok(BandPolicy::default()), BandsConfig::policy)
    }

    #[must_use]
    pub fn isolation(&self) -> Isolation {
        self.runner.as_ref().map(|r| r.isolation).unwrap_or_default()
    }

    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.runner.as_ref().map(|r| r.format).unwrap_or_default()
    }

    #[must_use]
    pub fn scenario_bin(&self) -> Option<&Path> {
        self.runner.as_ref()?.scenario_bin.as_deref()
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|home| home.join(".bounded-laws").join("config.toml"))
}
