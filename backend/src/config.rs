//! Planner configuration file and environment support.
//!
//! Settings are read from an `arcade.toml` file when one is present and can be
//! overridden through `ARCADE_*` environment variables:
//!
//! ```toml
//! [counting]
//! strategy = "pairwise"   # or "sweep"
//! inverted = "reject"     # or "tolerate"
//!
//! [output]
//! overwrite = false
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::parsing::InvertedPolicy;
use crate::services::{CountStrategy, PlanOptions};

/// Error raised while loading or resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("no arcade.toml found in standard locations")]
    NotFound,

    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Planner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ArcadeConfig {
    #[serde(default)]
    pub counting: CountingSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// How sessions are counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountingSettings {
    #[serde(default = "default_strategy")]
    pub strategy: String,
    #[serde(default = "default_inverted")]
    pub inverted: String,
}

/// Output file handling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub overwrite: bool,
}

fn default_strategy() -> String {
    CountStrategy::default().to_string()
}

fn default_inverted() -> String {
    InvertedPolicy::default().to_string()
}

impl Default for CountingSettings {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            inverted: default_inverted(),
        }
    }
}

impl ArcadeConfig {
    /// Parse configuration from TOML text.
    ///
    /// `origin` only labels errors (typically the file path).
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: ArcadeConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        config.plan_options()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ArcadeConfig)` if the file was read, parsed and holds valid values
    /// * `Err(ConfigError)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `arcade.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("arcade.toml"),
            PathBuf::from("backend/arcade.toml"),
            PathBuf::from("../arcade.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::debug!("Using configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Load configuration for a run, then apply environment overrides.
    ///
    /// An explicit path must exist. Without one the default locations are
    /// searched and built-in defaults are used when nothing is found.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::from_default_location() {
                Ok(config) => config,
                Err(ConfigError::NotFound) => {
                    log::debug!("No arcade.toml found, using defaults");
                    Self::default()
                }
                Err(e) => return Err(e),
            },
        };

        config.apply_env()
    }

    /// Override settings from environment variables.
    ///
    /// # Environment Variables
    /// - `ARCADE_STRATEGY` (optional): `pairwise` | `sweep`
    /// - `ARCADE_INVERTED` (optional): `reject` | `tolerate`
    /// - `ARCADE_OVERWRITE` (optional): `true` | `false`
    pub fn apply_env(mut self) -> Result<Self, ConfigError> {
        if let Ok(strategy) = env::var("ARCADE_STRATEGY") {
            self.counting.strategy = strategy;
        }
        if let Ok(inverted) = env::var("ARCADE_INVERTED") {
            self.counting.inverted = inverted;
        }
        if let Ok(overwrite) = env::var("ARCADE_OVERWRITE") {
            self.output.overwrite = overwrite.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "ARCADE_OVERWRITE",
                value: overwrite.clone(),
                reason: "expected true or false".to_string(),
            })?;
        }

        self.plan_options()?;
        Ok(self)
    }

    /// Resolve the string settings into typed run options.
    pub fn plan_options(&self) -> Result<PlanOptions, ConfigError> {
        let strategy = self
            .counting
            .strategy
            .parse::<CountStrategy>()
            .map_err(|reason| ConfigError::InvalidValue {
                key: "counting.strategy",
                value: self.counting.strategy.clone(),
                reason,
            })?;
        let inverted = self
            .counting
            .inverted
            .parse::<InvertedPolicy>()
            .map_err(|reason| ConfigError::InvalidValue {
                key: "counting.inverted",
                value: self.counting.inverted.clone(),
                reason,
            })?;

        Ok(PlanOptions {
            strategy,
            inverted,
            overwrite: self.output.overwrite,
        })
    }
}
