//! Password form rendering
//!
//! Draws the card with the read-only password field, the copy button, the
//! length slider, the two checkboxes and the status line.

use super::header::HeaderRenderer;
use crate::app::{AppState, FormField};
use crate::theme::{Styles, UiConstants, UiText};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph, Wrap},
};

/// Rows needed to show `len` characters in a field `inner_width` wide
pub fn password_rows(len: usize, inner_width: u16) -> u16 {
    if inner_width == 0 {
        return 1;
    }
    let rows = len.div_ceil(usize::from(inner_width)).max(1);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Render the whole form card centered in `area`
pub fn render_form<R>(f: &mut Frame, state: &AppState<R>, area: Rect, header: &HeaderRenderer) {
    let width = area.width.min(UiConstants::CARD_MAX_WIDTH);
    // card borders (2) + field borders (2) + copy button
    let field_inner = width.saturating_sub(4 + UiConstants::COPY_BUTTON_WIDTH);
    let field_height = password_rows(state.controller.password().len(), field_inner) + 2;
    let height = (2 + 1 + 1 + field_height + 3 + 1 + 1 + 1).min(area.height);

    let [card] = Layout::horizontal([Constraint::Length(width)])
        .flex(ratatui::layout::Flex::Center)
        .areas(area);
    let [card] = Layout::vertical([Constraint::Length(height)])
        .flex(ratatui::layout::Flex::Center)
        .areas(card);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border_inactive())
        .style(Styles::card());
    let inner = block.inner(card);
    f.render_widget(block, card);

    let [title, _, password_row, slider, checkboxes, _, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(field_height),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    header.render_title(f, title);
    render_password_row(f, state, password_row);
    render_slider(f, state, slider);
    render_checkboxes(f, state, checkboxes);
    render_status(f, state, status);
}

/// Read-only password field plus the copy button
fn render_password_row<R>(f: &mut Frame, state: &AppState<R>, area: Rect) {
    let [field, button] = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(UiConstants::COPY_BUTTON_WIDTH),
    ])
    .areas(area);

    let password = state.controller.password();
    let text = if password.is_empty() {
        Line::from(Span::styled(UiText::PLACEHOLDER, Styles::text_muted()))
    } else if state.password_selected {
        Line::from(Span::styled(password.to_string(), Styles::password_selected()))
    } else {
        Line::from(Span::styled(password.to_string(), Styles::password_field()))
    };

    let field_widget = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_inactive()),
        );
    f.render_widget(field_widget, field);

    let focused = state.focus == FormField::Copy;
    let button_widget = Paragraph::new(UiText::COPY)
        .alignment(Alignment::Center)
        .style(if focused {
            Styles::button_focused()
        } else {
            Styles::button()
        })
        .block(Block::default().borders(Borders::ALL).border_style(if focused {
            Styles::border_active()
        } else {
            Styles::border_inactive()
        }));
    f.render_widget(button_widget, button);
}

/// Length slider with its "Length: N" label
fn render_slider<R>(f: &mut Frame, state: &AppState<R>, area: Rect) {
    let config = state.controller.config();
    let focused = state.focus == FormField::Length;

    let label_style = if focused {
        Styles::focused()
    } else {
        Styles::label()
    };

    let gauge = LineGauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if focused {
                    Styles::border_active()
                } else {
                    Styles::border_inactive()
                })
                .title(Span::styled(format!(" Length: {} ", config.length()), label_style)),
        )
        .filled_style(Styles::slider_filled())
        .unfilled_style(Styles::slider_track())
        .line_set(symbols::line::THICK)
        .label("")
        .ratio(config.length_ratio());
    f.render_widget(gauge, area);
}

/// The "Numbers" and "Characters" checkboxes on one line
fn render_checkboxes<R>(f: &mut Frame, state: &AppState<R>, area: Rect) {
    let config = state.controller.config();
    let boxes = [
        (FormField::Digits, config.include_digits(), UiText::NUMBERS),
        (FormField::Symbols, config.include_symbols(), UiText::CHARACTERS),
    ];

    let mut spans: Vec<Span> = Vec::new();
    for (field, checked, label) in boxes {
        if !spans.is_empty() {
            spans.push(Span::raw("    "));
        }
        let style = if state.focus == field {
            Styles::focused()
        } else {
            Styles::label()
        };
        let mark = if checked { "[x]" } else { "[ ]" };
        spans.push(Span::styled(format!("{} {}", mark, label), style));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Status message, or the alphabet size when there is nothing to report
fn render_status<R>(f: &mut Frame, state: &AppState<R>, area: Rect) {
    let line = if state.status_message.is_empty() {
        Line::from(Span::styled(
            format!("Alphabet: {} characters", state.controller.alphabet().len()),
            Styles::text_muted(),
        ))
    } else {
        Line::from(Span::styled(state.status_message.clone(), Styles::success()))
    };
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_rows() {
        assert_eq!(password_rows(8, 50), 1);
        assert_eq!(password_rows(50, 50), 1);
        assert_eq!(password_rows(51, 50), 2);
        assert_eq!(password_rows(100, 30), 4);
        assert_eq!(password_rows(0, 50), 1);
        assert_eq!(password_rows(10, 0), 1);
    }
}
