//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Warehouse Compare using clap.

pub mod commands;

use crate::config::{load_config, load_config_or_default, WarehouseConfig};
use crate::domain::Result;
use clap::{Parser, Subcommand};

/// Configuration file used when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "warehouse.toml";

/// Warehouse Compare - build and export warehouse comparison sheets
#[derive(Parser, Debug)]
#[command(name = "warehouse-compare")]
#[command(version, about, long_about = None)]
#[command(author = "Warehouse Compare Contributors")]
pub struct Cli {
    /// Path to configuration file [default: warehouse.toml, optional]
    #[arg(short, long, env = "WAREHOUSE_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "WAREHOUSE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay an intake file and export the table and/or visual report
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Write a blank intake file to fill in
    Template(commands::template::TemplateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

/// Load the configuration named on the command line
///
/// An explicit path must exist. Without one, `warehouse.toml` is used when
/// present and defaults otherwise.
pub fn load_cli_config(path: Option<&str>) -> Result<WarehouseConfig> {
    match path {
        Some(path) => load_config(path),
        None => load_config_or_default(DEFAULT_CONFIG_PATH),
    }
}
