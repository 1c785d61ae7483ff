//! Logging setup
//!
//! The form owns the terminal, so it only logs when a log file is given.
//! Headless runs log to stderr and keep stdout for passwords.

use crate::error::{PassgenError, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Default filter for the form's log file
const INTERACTIVE_FILTER: &str = "info";

/// Default filter for headless runs
const HEADLESS_FILTER: &str = "warn";

/// Build the filter, letting `RUST_LOG` override the default
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global tracing subscriber
pub fn init(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let default = if interactive {
        INTERACTIVE_FILTER
    } else {
        HEADLESS_FILTER
    };

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(default))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| PassgenError::logging(e.to_string()))
        }
        None if interactive => Ok(()),
        None => tracing_subscriber::fmt()
            .with_env_filter(env_filter(default))
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| PassgenError::logging(e.to_string())),
    }
}
