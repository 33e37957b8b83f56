//! Configuration system for voltlock.
//!
//! Load solver and display settings from TOML or YAML files to adjust the
//! match tolerance and output formatting without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use voltlock_config::SolverConfig;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     [solver]
//!     tolerance = 0.001
//!
//!     [display]
//!     decimals = 3
//! "#).unwrap();
//!
//! assert_eq!(config.solver.tolerance, 0.001);
//! assert_eq!(config.display.decimals, 3);
//! ```
//!
//! Use default config when the file is missing:
//!
//! ```
//! use voltlock_config::SolverConfig;
//!
//! let config = SolverConfig::load("voltlock.toml").unwrap_or_default();
//! assert_eq!(config.solver.tolerance, 0.01);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default absolute match tolerance, chosen to absorb floating-point drift.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Default number of decimal places for displayed wire values.
pub const DEFAULT_DECIMALS: u8 = 2;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main voltlock configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Solver settings.
    #[serde(default)]
    pub solver: SolverSection,

    /// Display settings.
    #[serde(default)]
    pub display: DisplaySection,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SolverConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SolverConfig = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the match tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.solver.tolerance = tolerance;
        self
    }

    /// Sets the number of displayed decimal places.
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.display.decimals = decimals;
        self
    }

    /// Checks the configuration for invalid values.
    ///
    /// The tolerance must be a finite, strictly positive number; a zero
    /// tolerance would make every float comparison fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.solver.tolerance.is_finite() || self.solver.tolerance <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tolerance must be a positive number, got {}",
                self.solver.tolerance
            )));
        }
        Ok(())
    }
}

/// Solver settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverSection {
    /// Maximum absolute difference between a computed and target value for a
    /// match to count as exact.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for SolverSection {
    fn default() -> Self {
        SolverSection {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Display settings for the presentation layer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DisplaySection {
    /// Decimal places for wire output values.
    #[serde(default = "default_decimals")]
    pub decimals: u8,

    /// Whether to colorize terminal output.
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for DisplaySection {
    fn default() -> Self {
        DisplaySection {
            decimals: DEFAULT_DECIMALS,
            color: true,
        }
    }
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_decimals() -> u8 {
    DEFAULT_DECIMALS
}

fn default_color() -> bool {
    true
}
