//! Clipboard service
//!
//! Copying is fire-and-forget from the form's point of view: callers get a
//! `Result` so the failure can be logged, but nothing is shown to the user.

use crate::error::{PassgenError, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::fmt;
use std::io::{Stderr, Stdout, Write};

/// Something that can receive copied text
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// OSC 52 "set clipboard" escape sequence.
///
/// Understood by most modern terminal emulators and forwarded over SSH, so it
/// needs no display server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetClipboard<'a>(pub &'a str);

impl crossterm::Command for SetClipboard<'_> {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b]52;c;{}\x07", STANDARD.encode(self.0))
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Err(std::io::Error::other(
            "OSC 52 clipboard requires an ANSI terminal",
        ))
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        true
    }
}

/// Clipboard backed by the terminal through OSC 52
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl Osc52Clipboard<Stdout> {
    /// Clipboard that writes to the process's stdout
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl Osc52Clipboard<Stderr> {
    /// Clipboard that writes to stderr, leaving stdout for program output
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<()> {
        crossterm::execute!(self.out, SetClipboard(text))
            .map_err(|e| PassgenError::clipboard(format!("OSC 52 write failed: {}", e)))
    }
}

/// In-process clipboard that remembers every write
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    history: Vec<String>,
    failing: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail
    pub fn failing() -> Self {
        Self {
            history: Vec::new(),
            failing: true,
        }
    }

    /// Most recently copied text
    pub fn contents(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    /// Every successful write, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.failing {
            return Err(PassgenError::clipboard("clipboard unavailable"));
        }
        self.history.push(text.to_string());
        Ok(())
    }
}
