//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors and styles used by the password
//! form. Components should pull from here rather than hardcoding colors.
//!
//! # Usage
//! ```rust
//! use passgen::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::ACCENT);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Card background behind the form
    pub const BG_CARD: Color = Color::Rgb(31, 41, 55);

    /// Background of the read-only password field
    pub const BG_FIELD: Color = Color::Rgb(243, 244, 246);

    /// Password text on the field background
    pub const FG_FIELD: Color = Color::Rgb(17, 24, 39);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Labels and slider fill
    pub const ACCENT: Color = Color::Rgb(249, 115, 22);

    /// Copy button background
    pub const BUTTON: Color = Color::Rgb(29, 78, 216);

    /// Focus border and keys in the help overlay
    pub const PRIMARY: Color = Color::Cyan;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    /// Success/positive feedback
    pub const SUCCESS: Color = Color::Green;

    /// Highlight for the selected password text
    pub const SELECTION_BG: Color = Color::Rgb(147, 197, 253);

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;

    /// Unfilled part of the slider
    pub const SLIDER_TRACK: Color = Color::Rgb(75, 85, 99);
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Main title style
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Orange form label
    pub fn label() -> Style {
        Style::default().fg(Colors::ACCENT)
    }

    /// Card background
    pub fn card() -> Style {
        Style::default().bg(Colors::BG_CARD).fg(Colors::ACCENT)
    }

    /// Border of the focused control
    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    /// Border of an unfocused control
    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Password text in the read-only field
    pub fn password_field() -> Style {
        Style::default().fg(Colors::FG_FIELD).bg(Colors::BG_FIELD)
    }

    /// Password text after it was selected for copying
    pub fn password_selected() -> Style {
        Style::default()
            .fg(Colors::FG_FIELD)
            .bg(Colors::SELECTION_BG)
    }

    /// Copy button
    pub fn button() -> Style {
        Style::default().fg(Colors::FG_PRIMARY).bg(Colors::BUTTON)
    }

    /// Copy button while focused
    pub fn button_focused() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .bg(Colors::BUTTON)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    /// Focused checkbox or slider label
    pub fn focused() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Filled part of the slider
    pub fn slider_filled() -> Style {
        Style::default().fg(Colors::ACCENT)
    }

    /// Unfilled part of the slider
    pub fn slider_track() -> Style {
        Style::default().fg(Colors::SLIDER_TRACK)
    }

    /// Success message style
    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }

    /// Key name in the navigation bar and help overlay
    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Widest the form card grows
    pub const CARD_MAX_WIDTH: u16 = 64;

    /// Copy button width including borders
    pub const COPY_BUTTON_WIDTH: u16 = 10;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Slider step for PageUp/PageDown
    pub const LENGTH_PAGE_STEP: isize = 10;
}

/// Common UI text strings
pub struct UiText;

impl UiText {
    pub const TITLE: &'static str = "Password Generator";
    pub const COPY: &'static str = "copy";
    pub const NUMBERS: &'static str = "Numbers";
    pub const CHARACTERS: &'static str = "Characters";
    pub const PLACEHOLDER: &'static str = "Password";
    pub const COPIED: &'static str = "Copied to clipboard";
}
