//! Command-line interface.

use std::path::{Path, PathBuf};

use clap::Parser;
use mnemonic_config::{ConfigError, MnemonicConfig, OutputFormat};
use mnemonic_core::MnemonicError;
use mnemonic_solver::MnemonicSolver;
use thiserror::Error;
use tracing::debug;

use crate::report::{render_json, render_text};

/// Configuration file read from the working directory when present.
pub const DEFAULT_CONFIG_PATH: &str = "mnemonic.toml";

/// Menu solved when neither arguments nor configuration name any entries.
pub const DEFAULT_MENU: [&str; 3] = ["undo", "copy", "mod"];

/// Assign a unique keyboard mnemonic to every menu entry.
#[derive(Debug, Parser)]
#[command(name = "mnemonic", version, about)]
pub struct Args {
    /// Menu entry labels, in menu order.
    pub labels: Vec<String>,

    /// Configuration file (TOML, or YAML with a .yaml/.yml extension).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Allow two entries to share a mnemonic.
    #[arg(long)]
    pub no_cross_entry: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Print every generated formula before the result.
    #[arg(long)]
    pub explain: bool,

    /// Suppress the banner and progress output.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Errors reported by the command line.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Solve(#[from] MnemonicError),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rendered output of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliReport {
    pub output: String,
    pub satisfiable: bool,
}

impl Args {
    /// Builds the effective configuration: file first, then flags.
    pub fn load_config(&self) -> Result<MnemonicConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => load_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_file(DEFAULT_CONFIG_PATH)?,
            None => MnemonicConfig::default(),
        };

        if self.no_cross_entry {
            config.enforce_cross_entry_uniqueness = false;
        }
        if self.json {
            config.output = OutputFormat::Json;
        }
        if !self.labels.is_empty() {
            config.entries = self.labels.clone();
        } else if config.entries.is_empty() {
            config.entries = DEFAULT_MENU.iter().map(|s| s.to_string()).collect();
        }
        Ok(config)
    }
}

fn load_file(path: impl AsRef<Path>) -> Result<MnemonicConfig, ConfigError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading configuration");
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => MnemonicConfig::from_yaml_file(path),
        _ => MnemonicConfig::load(path),
    }
}

/// Solves the configured menu and renders the result.
///
/// An unsatisfiable menu is a successful run with `satisfiable == false`.
pub async fn run(config: MnemonicConfig, explain: bool) -> Result<CliReport, CliError> {
    let output_format = config.output;
    let solver = MnemonicSolver::new(config);

    let labels = solver.config().entries.clone();

    let (result, formulas) = if explain {
        let (result, formulas) = solver.explain_async(labels).await?;
        (result, Some(formulas))
    } else {
        (solver.solve_async(labels).await?, None)
    };

    let output = match output_format {
        OutputFormat::Text => render_text(&result, formulas.as_deref()),
        OutputFormat::Json => render_json(&result, formulas.as_deref())?,
    };
    Ok(CliReport {
        output,
        satisfiable: result.outcome.is_satisfiable(),
    })
}
