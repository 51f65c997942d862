//! Config command implementation.
//!
//! Manages the TOML configuration file.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};

use hedgefolio_config::{AppConfig, Validate};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{print_header, print_info, print_json_value, print_success, print_warning};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show configuration file location
    Path,

    /// Write a configuration file with default settings
    Init(InitArgs),

    /// Check the configuration for invalid settings
    Validate,
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Default configuration file location.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hedgefolio").join("config.toml"))
}

/// Loads the configuration.
///
/// An explicit path must exist. Otherwise the default location is used when
/// present, and built-in defaults when not.
pub fn load_config(explicit: Option<&Path>) -> CliResult<AppConfig> {
    if let Some(path) = explicit {
        return Ok(AppConfig::from_file(path)?);
    }
    match default_config_path().filter(|p| p.exists()) {
        Some(path) => Ok(AppConfig::from_file(path)?),
        None => {
            tracing::debug!("no configuration file, using defaults");
            Ok(AppConfig::default())
        }
    }
}

fn target_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(default_config_path)
        .ok_or(CliError::NoConfigDir)
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, format: OutputFormat, explicit: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(format, explicit),
        ConfigCommand::Path => execute_path(explicit),
        ConfigCommand::Init(init_args) => execute_init(init_args, explicit),
        ConfigCommand::Validate => execute_validate(explicit),
    }
}

/// Show the effective configuration.
fn execute_show(format: OutputFormat, explicit: Option<&Path>) -> Result<()> {
    let config = load_config(explicit)?;
    match format {
        OutputFormat::Json => print_json_value(&config)?,
        OutputFormat::Table => {
            print_header("Current Configuration");
            print!("{}", config.to_toml_string()?);
        }
        OutputFormat::Csv | OutputFormat::Minimal => {
            print!("{}", config.to_toml_string()?);
        }
    }
    Ok(())
}

/// Show configuration file path.
fn execute_path(explicit: Option<&Path>) -> Result<()> {
    let path = target_path(explicit)?;
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

/// Write the default configuration.
fn execute_init(args: InitArgs, explicit: Option<&Path>) -> Result<()> {
    let path = target_path(explicit)?;
    if path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }
    AppConfig::default().write_to_file(&path)?;
    print_success(&format!("Wrote default configuration to {}", path.display()));
    Ok(())
}

/// Validate the configuration.
fn execute_validate(explicit: Option<&Path>) -> Result<()> {
    let config = load_config(explicit)?;
    let errors = config.validate();
    if errors.is_empty() {
        print_success("Configuration is valid");
        return Ok(());
    }
    for error in &errors {
        print_warning(&error.to_string());
    }
    anyhow::bail!("{} invalid setting(s)", errors.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("hedgefolio/config.toml"));
        }
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            load_config(Some(&missing)),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analytics]\nfrontier_steps = 10\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.analytics.frontier_steps, 10);
    }
}
