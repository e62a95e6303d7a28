//! CLI argument parsing for psicat
//!
//! Supports global flags: --data, --brew, --config, --state, --format,
//! --quiet, --verbose

pub mod commands;
pub mod parse;

use clap::Parser;
use std::path::PathBuf;

pub use commands::Commands;
use parse::parse_output_format;
pub use psicat_core::format::OutputFormat;

/// Psicat - browse, filter and pin a psionics catalog
#[derive(Parser, Debug)]
#[command(name = "psicat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base dataset (JSON object with a `psionic` array)
    #[arg(long, global = true, env = "PSICAT_DATA")]
    pub data: Option<PathBuf>,

    /// Supplemental dataset merged after the base (repeatable)
    #[arg(long, global = true, action = clap::ArgAction::Append)]
    pub brew: Vec<PathBuf>,

    /// Configuration file (default: config.toml in the psicat config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Sublist state file (default: pins.json in the psicat config directory)
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    /// Output format [human, json, records]
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or directive (e.g. `debug`, `psicat_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
