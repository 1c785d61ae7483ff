//! Application module
//!
//! Contains the event loop, key dispatch and the glue between the form state,
//! the renderer and the clipboard.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, FormField)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppState, FormField};

use crate::clipboard::{Clipboard, Osc52Clipboard};
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config::{Configuration, MAX_LENGTH, MIN_LENGTH};
use crate::error::Result;
use crate::theme::{UiConstants, UiText};
use crate::ui::UiRenderer;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use rand::Rng;
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::Backend};
use std::io::Stdout;
use std::time::Duration;
use tracing::{debug, info};

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main application struct
pub struct App<R = ThreadRng, C = Osc52Clipboard<Stdout>> {
    state: AppState<R>,
    ui_renderer: UiRenderer,
    /// Keybinding context for dispatch, nav bar and help
    keybinding_context: KeybindingContext,
    clipboard: C,
}

impl App {
    /// Create the interactive application for `config`
    pub fn new(config: Configuration) -> Self {
        info!(
            length = config.length(),
            digits = config.include_digits(),
            symbols = config.include_symbols(),
            "Creating new App instance"
        );
        Self::with_parts(AppState::new(config), Osc52Clipboard::stdout())
    }
}

impl<R: Rng, C: Clipboard> App<R, C> {
    /// Assemble an application from an existing state and clipboard
    pub fn with_parts(state: AppState<R>, clipboard: C) -> Self {
        Self {
            state,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            clipboard,
        }
    }

    pub fn state(&self) -> &AppState<R> {
        &self.state
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Draw one frame
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| {
            self.ui_renderer
                .render(f, &self.state, &self.keybinding_context)
        })?;
        Ok(())
    }

    /// Run the event loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Entering event loop");
        while !self.state.should_quit {
            self.draw(terminal)?;
            if event::poll(POLL_INTERVAL)? {
                self.handle_event(event::read()?);
            }
        }
        info!("Event loop finished");
        Ok(())
    }

    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event) {
        // Resize needs no handling: the next draw picks up the new size
        if let Event::Key(key) = event {
            self.handle_key(key);
        }
    }

    /// Resolve a key press against the focused control and apply it
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(action) =
            self.keybinding_context
                .resolve(&self.state.focus, key.code, key.modifiers)
        {
            self.apply_action(action);
        }
    }

    /// Apply an action to the form
    pub fn apply_action(&mut self, action: KeyAction) {
        debug!(?action, focus = %self.state.focus, "key action");

        if self.state.help_visible {
            match action {
                KeyAction::Help | KeyAction::Dismiss => self.state.help_visible = false,
                KeyAction::Quit => self.state.should_quit = true,
                _ => {}
            }
            return;
        }

        let controller = &mut self.state.controller;
        let changed = match action {
            KeyAction::FocusNext => {
                self.state.focus = self.state.focus.next();
                false
            }
            KeyAction::FocusPrevious => {
                self.state.focus = self.state.focus.previous();
                false
            }
            KeyAction::Decrease => controller.adjust_length(-1),
            KeyAction::Increase => controller.adjust_length(1),
            KeyAction::DecreaseMore => controller.adjust_length(-UiConstants::LENGTH_PAGE_STEP),
            KeyAction::IncreaseMore => controller.adjust_length(UiConstants::LENGTH_PAGE_STEP),
            KeyAction::Minimum => controller.set_length(MIN_LENGTH),
            KeyAction::Maximum => controller.set_length(MAX_LENGTH),
            KeyAction::Toggle => match self.state.focus {
                FormField::Digits => controller.toggle_digits(),
                FormField::Symbols => controller.toggle_symbols(),
                _ => false,
            },
            KeyAction::Regenerate => {
                controller.regenerate();
                true
            }
            KeyAction::Copy => {
                self.copy_password();
                false
            }
            KeyAction::Help => {
                self.state.help_visible = true;
                false
            }
            KeyAction::Dismiss | KeyAction::Quit => {
                self.state.should_quit = true;
                false
            }
        };

        if changed {
            self.state.password_changed();
        }
    }

    /// Select the password and hand it to the clipboard
    fn copy_password(&mut self) {
        self.state.controller.copy_to(&mut self.clipboard);
        self.state.password_selected = true;
        self.state.status_message = UiText::COPIED.to_string();
    }
}
