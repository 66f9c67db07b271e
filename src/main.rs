//! tictactoe_history - terminal entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe_history::{AppConfig, Cli, init_logging, run};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::resolve(&cli)?;
    init_logging(&config)?;

    info!(
        reverse_moves = config.reverse_moves(),
        log_file = %config.log_file().display(),
        "Configuration resolved"
    );
    run(&config)
}
