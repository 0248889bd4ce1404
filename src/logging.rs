//! File logging using tracing
//!
//! The terminal belongs to the UI, so everything goes to
//! `<data_local_dir>/devvault/logs/devvault.log`, rotated daily.
//! The filter is controlled by the `DEVVAULT_LOG` environment variable:
//!
//! ```bash
//! DEVVAULT_LOG=debug devvault
//! ```

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "devvault.log");

    let env_filter = EnvFilter::try_from_env("DEVVAULT_LOG")
        .unwrap_or_else(|_| EnvFilter::new("devvault=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("DevVault starting, logging to {}", log_dir.display());

    Ok(log_dir)
}

fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("devvault")
        .join("logs")
}
