//! Reusable UI components
//!
//! - `keybindings` - Focus-aware key registry, nav bar items and help sections
//! - `nav_bar` - Bottom key hint bar
//! - `help_overlay` - Floating help window

pub mod help_overlay;
pub mod keybindings;
pub mod nav_bar;
