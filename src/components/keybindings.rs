//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the focused form
//! control, plus global bindings available everywhere.

use crate::app::FormField;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    FocusNext,
    FocusPrevious,
    Decrease,
    Increase,
    DecreaseMore,
    IncreaseMore,
    Minimum,
    Maximum,
    Toggle,
    Copy,
    Regenerate,
    Help,
    Dismiss,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether a key press triggers this binding.
    ///
    /// Letters match in either case so Caps Lock does not disable them.
    /// Bindings without modifiers ignore Shift (terminals report it for `?`
    /// and Shift+Tab) but never fire with Ctrl or Alt held.
    pub fn matches(&self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        let same_key = match (self.key, key) {
            (KeyCode::Char(bound), KeyCode::Char(pressed)) => {
                bound.eq_ignore_ascii_case(&pressed)
            }
            (bound, pressed) => bound == pressed,
        };
        if !same_key {
            return false;
        }
        if self.modifiers.is_empty() {
            !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        } else {
            modifiers.contains(self.modifiers)
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Bindings active while a given control has focus
    field_bindings: HashMap<FormField, Vec<Keybinding>>,
    /// Global keybindings (available for every control)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            field_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all controls
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Tab, KeyAction::FocusNext, "Tab", "Next control"),
            Keybinding::new(KeyCode::BackTab, KeyAction::FocusPrevious, "S-Tab", "Previous control"),
            Keybinding::new(KeyCode::Down, KeyAction::FocusNext, "Down", "Next control"),
            Keybinding::new(KeyCode::Up, KeyAction::FocusPrevious, "Up", "Previous control"),
            Keybinding::new(KeyCode::Char('c'), KeyAction::Copy, "C", "Copy password"),
            Keybinding::new(KeyCode::Char('r'), KeyAction::Regenerate, "R", "New password"),
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Close help / quit"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        // Length slider
        self.field_bindings.insert(
            FormField::Length,
            vec![
                Keybinding::new(KeyCode::Left, KeyAction::Decrease, "Left", "Shorter by 1"),
                Keybinding::new(KeyCode::Right, KeyAction::Increase, "Right", "Longer by 1"),
                Keybinding::new(KeyCode::PageDown, KeyAction::DecreaseMore, "PgDn", "Shorter by 10"),
                Keybinding::new(KeyCode::PageUp, KeyAction::IncreaseMore, "PgUp", "Longer by 10"),
                Keybinding::new(KeyCode::Home, KeyAction::Minimum, "Home", "Shortest"),
                Keybinding::new(KeyCode::End, KeyAction::Maximum, "End", "Longest"),
            ],
        );

        // Checkboxes
        let checkbox_bindings = vec![
            Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", "Toggle"),
            Keybinding::new(KeyCode::Enter, KeyAction::Toggle, "Enter", "Toggle"),
        ];
        self.field_bindings
            .insert(FormField::Digits, checkbox_bindings.clone());
        self.field_bindings
            .insert(FormField::Symbols, checkbox_bindings);

        // Copy button
        self.field_bindings.insert(
            FormField::Copy,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Copy, "Enter", "Copy password"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Copy, "Space", "Copy password"),
            ],
        );
    }

    /// Get keybindings for a control (field bindings first, then global)
    pub fn get_bindings(&self, field: &FormField) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(field_bindings) = self.field_bindings.get(field) {
            bindings.extend(field_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key press to an action for the focused control.
    ///
    /// Bindings with modifiers win over plain ones so that Ctrl+C quits
    /// rather than copying.
    pub fn resolve(
        &self,
        field: &FormField,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<KeyAction> {
        let bindings = self.get_bindings(field);
        bindings
            .iter()
            .filter(|b| !b.modifiers.is_empty())
            .chain(bindings.iter().filter(|b| b.modifiers.is_empty()))
            .find(|b| b.matches(key, modifiers))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, field: &FormField) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(field);

        let priority_actions = match field {
            FormField::Length => vec![
                KeyAction::Decrease,
                KeyAction::IncreaseMore,
                KeyAction::FocusNext,
                KeyAction::Copy,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            FormField::Digits | FormField::Symbols => vec![
                KeyAction::Toggle,
                KeyAction::FocusNext,
                KeyAction::Copy,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            FormField::Copy => vec![
                KeyAction::Copy,
                KeyAction::Regenerate,
                KeyAction::FocusNext,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            match action {
                // Slider steps read better as pairs
                KeyAction::Decrease => items.push(NavBarItem {
                    key_display: "Left/Right".to_string(),
                    action_label: "Length".to_string(),
                }),
                KeyAction::IncreaseMore => items.push(NavBarItem {
                    key_display: "PgUp/PgDn".to_string(),
                    action_label: "Length x10".to_string(),
                }),
                _ => {
                    if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                        items.push(NavBarItem {
                            key_display: binding.display.clone(),
                            action_label: binding.description.clone(),
                        });
                    }
                }
            }
        }

        items
    }

    /// Get full help content for a control (for help overlay)
    pub fn get_help_content(&self, field: &FormField) -> Vec<HelpSection> {
        let groups: [(&str, &[KeyAction]); 3] = [
            ("Navigation", &[KeyAction::FocusNext, KeyAction::FocusPrevious]),
            (
                "Controls",
                &[
                    KeyAction::Decrease,
                    KeyAction::Increase,
                    KeyAction::DecreaseMore,
                    KeyAction::IncreaseMore,
                    KeyAction::Minimum,
                    KeyAction::Maximum,
                    KeyAction::Toggle,
                    KeyAction::Copy,
                    KeyAction::Regenerate,
                ],
            ),
            ("General", &[KeyAction::Help, KeyAction::Dismiss, KeyAction::Quit]),
        ];

        let bindings = self.get_bindings(field);
        let mut sections = Vec::new();
        for (title, actions) in groups {
            let items: Vec<(String, String)> = bindings
                .iter()
                .filter(|b| actions.contains(&b.action))
                .map(|b| (b.display.clone(), b.description.clone()))
                .collect();
            if !items.is_empty() {
                sections.push(HelpSection {
                    title: title.to_string(),
                    items,
                });
            }
        }

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
