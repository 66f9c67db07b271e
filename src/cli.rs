//! Command-line interface for tictactoe_history.

use std::path::PathBuf;

use clap::Parser;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Terminal tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to tictactoe_history.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show the move list newest first
    #[arg(long)]
    pub reverse: bool,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
