//! Application state definitions
//!
//! Contains the form state: the password controller, which control has focus,
//! and the transient UI flags (help overlay, selection highlight, quit).

use crate::config::Configuration;
use crate::controller::PasswordController;
use rand::Rng;
use rand::rngs::ThreadRng;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Focusable controls on the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum FormField {
    /// Length slider
    #[default]
    #[strum(serialize = "Length")]
    Length,
    /// "Numbers" checkbox
    #[strum(serialize = "Numbers")]
    Digits,
    /// "Characters" checkbox
    #[strum(serialize = "Characters")]
    Symbols,
    /// Copy button
    #[strum(serialize = "Copy")]
    Copy,
}

impl FormField {
    /// Next control in tab order, wrapping around
    pub fn next(self) -> Self {
        let fields: Vec<Self> = Self::iter().collect();
        let idx = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(idx + 1) % fields.len()]
    }

    /// Previous control in tab order, wrapping around
    pub fn previous(self) -> Self {
        let fields: Vec<Self> = Self::iter().collect();
        let idx = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(idx + fields.len() - 1) % fields.len()]
    }
}

/// Main application state
pub struct AppState<R = ThreadRng> {
    /// Live configuration and password
    pub controller: PasswordController<R>,
    /// Control that receives field-specific keys
    pub focus: FormField,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Password text is highlighted after a copy
    pub password_selected: bool,
    /// Set when the event loop should stop
    pub should_quit: bool,
}

impl AppState<ThreadRng> {
    pub fn new(config: Configuration) -> Self {
        Self::with_controller(PasswordController::new(config))
    }
}

impl Default for AppState<ThreadRng> {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl<R: Rng> AppState<R> {
    pub fn with_rng(config: Configuration, rng: R) -> Self {
        Self::with_controller(PasswordController::with_rng(config, rng))
    }
}

impl<R> AppState<R> {
    pub fn with_controller(controller: PasswordController<R>) -> Self {
        Self {
            controller,
            focus: FormField::default(),
            status_message: String::new(),
            help_visible: false,
            password_selected: false,
            should_quit: false,
        }
    }

    /// Forget the copy highlight and status after the password changed
    pub fn password_changed(&mut self) {
        self.password_selected = false;
        self.status_message.clear();
    }
}
