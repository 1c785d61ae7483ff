//! Rendering tests for the password form
//!
//! Draws the form into ratatui's TestBackend and checks the visible text.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use passgen::{App, AppState, Configuration, MemoryClipboard};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::TestBackend};

fn app(config: Configuration) -> App<StdRng, MemoryClipboard> {
    App::with_parts(
        AppState::with_rng(config, StdRng::seed_from_u64(5)),
        MemoryClipboard::new(),
    )
}

/// Render one frame and return the screen as text, one line per row
fn render(app: &App<StdRng, MemoryClipboard>, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    app.draw(&mut terminal).unwrap();
    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    screen
}

#[test]
fn test_form_shows_title_and_password() {
    let app = app(Configuration::default());
    let screen = render(&app, 80, 24);
    assert!(screen.contains("Password Generator"));
    assert!(screen.contains(app.state().controller.password()));
    assert!(screen.contains("copy"));
}

#[test]
fn test_form_shows_length_and_checkboxes() {
    let app = app(Configuration::new(12, true, false).unwrap());
    let screen = render(&app, 80, 24);
    assert!(screen.contains("Length: 12"));
    assert!(screen.contains("[x] Numbers"));
    assert!(screen.contains("[ ] Characters"));
    assert!(screen.contains("Alphabet: 62 characters"));
}

#[test]
fn test_nav_bar_follows_focus() {
    let mut app = app(Configuration::default());
    let screen = render(&app, 100, 24);
    assert!(screen.contains("Left/Right"));

    app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    let screen = render(&app, 100, 24);
    assert!(screen.contains("Space Toggle"));
}

#[test]
fn test_status_after_copy() {
    let mut app = app(Configuration::default());
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
    let screen = render(&app, 80, 24);
    assert!(screen.contains("Copied to clipboard"));
}

#[test]
fn test_long_password_wraps_inside_field() {
    let app = app(Configuration::new(100, true, true).unwrap());
    let screen = render(&app, 80, 30);
    let password = app.state().controller.password();
    // The first and last chunks of the password are both visible
    assert!(screen.contains(&password[..20]));
    assert!(screen.contains(&password[90..]));
}

#[test]
fn test_help_overlay_renders() {
    let mut app = app(Configuration::default());
    app.handle_key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE));
    let screen = render(&app, 80, 30);
    assert!(screen.contains("Help"));
    assert!(screen.contains("Focused: Length"));
    assert!(screen.contains("Press ? or Esc to close"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let app = app(Configuration::default());
    let _ = render(&app, 10, 3);
}
