//! Title, navigation bar and help overlay rendering

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::theme::{Styles, UiText};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Header renderer containing the form title
pub struct HeaderRenderer {
    title: Line<'static>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            title: Line::from(Span::styled(UiText::TITLE, Styles::title())),
        }
    }

    /// Render the title line
    pub fn render_title(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let title = Paragraph::new(self.title.clone()).alignment(Alignment::Center);
        f.render_widget(title, area);
    }
}

/// Render the navigation bar
pub fn render_nav_bar<R>(
    f: &mut Frame,
    state: &AppState<R>,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let nav_items = keybinding_ctx.get_nav_items(&state.focus);
    NavBar::new(nav_items).render(f, area);
}

/// Render the help overlay
pub fn render_help_overlay<R>(
    f: &mut Frame,
    state: &AppState<R>,
    keybinding_ctx: &KeybindingContext,
) {
    let help_overlay = HelpOverlay::new(&state.focus, keybinding_ctx);
    help_overlay.render(f, f.area());
}
