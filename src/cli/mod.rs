//! Command-line surface for hms-smoke.

pub mod colors;
pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub use commands::Commands;

#[derive(Parser, Debug)]
#[command(name = "hms-smoke", version)]
#[command(about = "End-to-end appointment workflow check for the hospital management API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the API gateway (overrides config and HMS_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path to a config file (default: $HMS_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,
}
