//! Hedgefolio CLI - hedge ratios and two-asset portfolio analytics.
//!
//! # Usage
//!
//! ```bash
//! # Hedge ratio of AAPL against KO over 2021
//! hedgefolio hedge --base AAPL --hedge KO --start 2021-01-01 --end 2021-12-31
//!
//! # Two-asset portfolio over the last two years
//! hedgefolio portfolio --first AAPL --second JNJ --period 2y --weight 0.6
//!
//! # Write a default configuration file
//! hedgefolio config init
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hedgefolio_config::Validate;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = cli.format;
    let explicit = cli.config.as_deref();

    match cli.command {
        Commands::Hedge(args) => {
            commands::hedge::execute(args, format, &context(explicit, cli.data_dir)?)?;
        }
        Commands::Portfolio(args) => {
            commands::portfolio::execute(args, format, &context(explicit, cli.data_dir)?)?;
        }
        Commands::Universe => commands::universe::execute(format, &context(explicit, cli.data_dir)?)?,
        Commands::Config(args) => commands::config::execute(args, format, explicit)?,
    }

    Ok(())
}

/// Loads and validates the configuration for an analytics command.
fn context(explicit: Option<&Path>, data_dir: Option<PathBuf>) -> Result<Context> {
    let config = commands::config::load_config(explicit)?;
    config.validate_or_error()?;
    Ok(Context::new(config, data_dir))
}

/// Logs go to stderr so they never mix with command output.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
