//! Tracing setup.
//!
//! The terminal belongs to the UI, so events go to a log file with ANSI
//! colours disabled.

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Installs the global subscriber. `RUST_LOG` wins over the configured filter.
///
/// Does nothing if a subscriber is already installed.
pub fn init(config: &AppConfig) -> Result<()> {
    let log_file = File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
