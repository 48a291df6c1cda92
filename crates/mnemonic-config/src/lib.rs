//! Configuration system for mnemonic assignment.
//!
//! Load the menu and encoding options from TOML or YAML files so a menu can be
//! re-solved without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use mnemonic_config::MnemonicConfig;
//!
//! let config = MnemonicConfig::from_toml_str(r#"
//!     entries = ["undo", "copy", "mod"]
//!     enforce_cross_entry_uniqueness = true
//!     variable_prefix = "U"
//! "#).unwrap();
//!
//! assert_eq!(config.entries.len(), 3);
//! assert!(config.enforce_cross_entry_uniqueness);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use mnemonic_config::MnemonicConfig;
//!
//! let config = MnemonicConfig::load("mnemonic.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use mnemonic_core::DEFAULT_VARIABLE_PREFIX;
use serde::{Deserialize, Serialize};
use thiserror::Error;


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

/// Main mnemonic configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct MnemonicConfig {
    /// Menu entry labels solved when none are given on the command line.
    pub entries: Vec<String>,

    /// Emit the constraint forbidding one character for two entries.
    ///
    /// Disabling it lets several entries share a mnemonic.
    pub enforce_cross_entry_uniqueness: bool,

    /// Prefix of candidate variable names.
    pub variable_prefix: String,

    /// Output format of the command-line report.
    pub output: OutputFormat,
}

impl Default for MnemonicConfig {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            enforce_cross_entry_uniqueness: true,
            variable_prefix: DEFAULT_VARIABLE_PREFIX.to_string(),
            output: OutputFormat::default(),
        }
    }
}

impl MnemonicConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
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
        let config: Self = toml::from_str(s)?;
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
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.variable_prefix.is_empty() {
            return Err(ConfigError::Invalid(
                "variable_prefix must not be empty".to_string(),
            ));
        }
        if self.variable_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!(
                "variable_prefix {:?} must not contain whitespace",
                self.variable_prefix
            )));
        }
        Ok(())
    }

    /// Sets the menu entries.
    pub fn with_entries<I, L>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.entries = entries.into_iter().map(Into::into).collect();
        self
    }

    /// Enables or disables cross-entry exclusion.
    pub fn with_cross_entry_uniqueness(mut self, enforce: bool) -> Self {
        self.enforce_cross_entry_uniqueness = enforce;
        self
    }

    /// Sets the variable name prefix.
    pub fn with_variable_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.variable_prefix = prefix.into();
        self
    }

    /// Sets the output format.
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }
}

/// Output format of a solve report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One `label [c]` line per entry.
    #[default]
    Text,

    /// A JSON document.
    Json,
}
