//! User interface rendering module
//!
//! - `header` - Title, navigation bar and help overlay
//! - `form` - The password form card

pub mod form;
mod header;

use crate::app::AppState;
use crate::components::keybindings::KeybindingContext;
use crate::theme::UiConstants;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

pub use header::HeaderRenderer;

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to the form
/// and header submodules.
pub struct UiRenderer {
    /// Header renderer instance
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI with keybinding context
    pub fn render<R>(&self, f: &mut Frame, state: &AppState<R>, keybinding_ctx: &KeybindingContext) {
        let [content_area, nav_bar_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
        ])
        .areas(f.area());

        form::render_form(f, state, content_area, &self.header);
        header::render_nav_bar(f, state, keybinding_ctx, nav_bar_area);

        // Help overlay goes on top of everything
        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }
}
