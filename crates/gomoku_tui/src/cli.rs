//! Command-line interface for the gomoku terminal client.

use clap::Parser;
use std::path::PathBuf;

/// Gomoku - five in a row for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "gomoku_tui")]
#[command(about = "Two-player five-in-a-row in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length (overrides the config file)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "gomoku.toml")]
    pub config: PathBuf,

    /// Log file path (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
