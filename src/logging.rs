//! Diagnostic tracing
//!
//! Filtered by `RUST_LOG`, defaulting to `warn`. Line-based commands log to
//! stderr; the TUI owns the terminal, so it only logs when given a file.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where tracing output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Disabled,
}

/// Initialize the global tracing subscriber
///
/// # Errors
/// Returns an error if the log file cannot be created.
///
/// # Example
/// ```bash
/// RUST_LOG=hintle=debug hintle simple
/// ```
pub fn init(target: &LogTarget) -> io::Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter())
                .with(fmt::layer().with_writer(io::stderr).compact())
                .init();
        }
        LogTarget::File(path) => {
            let file = File::create(path)?;
            tracing_subscriber::registry()
                .with(filter())
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .init();
        }
        LogTarget::Disabled => {}
    }
    Ok(())
}
