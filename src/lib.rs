//! passgen library
//!
//! Random password generation with a configurable length and optional digit
//! and symbol sets, a change-driven controller that keeps the password in
//! sync with its configuration, and the terminal form built on top of it.

pub mod app;
pub mod batch;
pub mod cli;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod generator;
pub mod logging;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppState, FormField};
pub use batch::{GenerationReport, generate_batch, write_report};
pub use cli::{Cli, Commands};
pub use clipboard::{Clipboard, MemoryClipboard, Osc52Clipboard};
pub use config::{Configuration, DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};
pub use controller::PasswordController;
pub use error::{PassgenError, Result};
pub use generator::{Alphabet, generate, generate_password};
