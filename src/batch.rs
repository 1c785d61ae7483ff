//! Headless generation for the `generate` subcommand

use crate::clipboard::Clipboard;
use crate::config::Configuration;
use crate::error::Result;
use crate::generator::{self, Alphabet};
use rand::Rng;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, warn};

/// Passwords generated from one configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub configuration: Configuration,
    pub alphabet_size: usize,
    pub passwords: Vec<String>,
}

impl GenerationReport {
    /// One password per line
    pub fn to_lines(&self) -> String {
        self.passwords.join("\n")
    }

    /// Pretty-printed JSON document
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Generate `count` independent passwords for `config`
pub fn generate_batch<R: Rng + ?Sized>(
    config: Configuration,
    count: usize,
    rng: &mut R,
) -> GenerationReport {
    let passwords = (0..count)
        .map(|_| generator::generate(&config, rng))
        .collect();

    GenerationReport {
        configuration: config,
        alphabet_size: Alphabet::for_config(&config).len(),
        passwords,
    }
}

/// Write `report` to `out` and optionally copy its first password.
///
/// `out` only ever receives the passwords (or the JSON document). Copy
/// failures are logged and do not fail the run.
pub fn write_report<W: Write>(
    report: &GenerationReport,
    json: bool,
    out: &mut W,
    clipboard: Option<&mut dyn Clipboard>,
) -> Result<()> {
    if json {
        writeln!(out, "{}", report.to_json()?)?;
    } else if !report.passwords.is_empty() {
        writeln!(out, "{}", report.to_lines())?;
    }
    out.flush()?;

    if let (Some(clipboard), Some(first)) = (clipboard, report.passwords.first()) {
        match clipboard.write_text(first) {
            Ok(()) => debug!("Copied first password to clipboard"),
            Err(e) => warn!("Failed to copy password: {}", e),
        }
    }

    Ok(())
}
