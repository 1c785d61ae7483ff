//! passgen - Main entry point
//!
//! Parses the command line, sets up logging, then either runs the terminal
//! form or prints passwords headlessly.

use anyhow::{Context, Result};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use passgen::{
    App, Cli, Clipboard, Commands, Configuration, Osc52Clipboard, generate_batch, logging,
    write_report,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;
use tracing::{debug, info};

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();

    logging::init(cli.log_file.as_deref(), cli.is_interactive())
        .context("Failed to initialize logging")?;
    info!("passgen starting up");
    debug!("CLI arguments parsed: {:?}", cli.command);

    let config = Configuration::new(usize::from(cli.length), cli.digits, cli.symbols)?;

    match cli.command {
        Some(Commands::Generate { count, json, copy }) => {
            info!("Running headless generation of {} password(s)", count);
            run_generate(config, count, json, copy)
        }
        Some(Commands::Tui) | None => {
            info!("Launching password form");
            run_tui(config)
        }
    }
}

/// Print passwords without the form
fn run_generate(config: Configuration, count: usize, json: bool, copy: bool) -> Result<()> {
    let report = generate_batch(config, count, &mut rand::thread_rng());

    // The escape sequence goes to stderr so stdout stays pipeable
    let mut terminal = Osc52Clipboard::stderr();
    let clipboard = copy.then_some(&mut terminal as &mut dyn Clipboard);

    write_report(&report, json, &mut stdout().lock(), clipboard)
        .context("Failed to write passwords")
}

/// Run the interactive form
fn run_tui(config: Configuration) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode().context("Failed to enable raw mode")?;
    if let Err(e) = crossterm::execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .context("Failed to create terminal")
        .and_then(|mut terminal| {
            let mut app = App::new(config);
            let result = app.run(&mut terminal).context("Password form failed");
            let _ = terminal.show_cursor();
            result
        });

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);

    result
}
