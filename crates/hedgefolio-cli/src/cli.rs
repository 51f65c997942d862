//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{ConfigArgs, HedgeArgs, PortfolioArgs};

/// Hedgefolio - hedge ratios and two-asset minimum-variance portfolios
#[derive(Parser)]
#[command(name = "hedgefolio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Log computation details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "HEDGEFOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory of <SYMBOL>.csv price files; overrides the configuration
    #[arg(long, global = true, env = "HEDGEFOLIO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Minimum-variance hedge ratio between two instruments
    Hedge(HedgeArgs),

    /// Two-asset portfolio statistics and efficient frontier
    Portfolio(PortfolioArgs),

    /// List the configured instrument universes
    Universe,

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline value)
    Minimal,
}
