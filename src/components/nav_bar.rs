//! Bottom navigation bar showing the keys for the focused control

use super::keybindings::NavBarItem;
use crate::theme::Styles;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Single-line key hint bar
pub struct NavBar {
    items: Vec<NavBarItem>,
}

impl NavBar {
    pub fn new(items: Vec<NavBarItem>) -> Self {
        Self { items }
    }

    /// Build the styled line, items separated by a divider
    pub fn line(&self) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  |  ", Styles::nav_hint()));
            }
            spans.push(Span::styled(item.key_display.clone(), Styles::nav_key()));
            spans.push(Span::styled(
                format!(" {}", item.action_label),
                Styles::nav_hint(),
            ));
        }
        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let bar = Paragraph::new(self.line()).alignment(Alignment::Center);
        f.render_widget(bar, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_contains_items() {
        let bar = NavBar::new(vec![
            NavBarItem {
                key_display: "Tab".to_string(),
                action_label: "Next control".to_string(),
            },
            NavBarItem {
                key_display: "Q".to_string(),
                action_label: "Quit".to_string(),
            },
        ]);
        let text: String = bar
            .line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "Tab Next control  |  Q Quit");
    }
}
