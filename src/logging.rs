//! Tracing subscriber setup.
//!
//! Headless commands log to stderr. The TUI owns the terminal, so it logs to
//! a file in the config directory instead. `RUST_LOG` overrides the default
//! level in both cases.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error (headless commands)
    Stderr,
    /// Append to a file (TUI)
    File(PathBuf),
}

/// Installs the global subscriber.
pub fn init(target: &LogTarget, verbose: bool) -> Result<()> {
    let default_level = match (target, verbose) {
        (_, true) => "debug",
        (LogTarget::Stderr, false) => "warn",
        (LogTarget::File(_), false) => "info",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into());

    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to initialize logging")?,
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).context(format!(
                    "Failed to create log directory: {}",
                    parent.display()
                ))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .context(format!("Failed to open log file: {}", path.display()))?;

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .context("Failed to initialize logging")?;
        }
    }

    Ok(())
}
