//! Configuration controller
//!
//! Owns the live [`Configuration`] and the password generated from it. Every
//! setter that changes the configuration regenerates the password before
//! returning, so the two never drift apart.

use crate::clipboard::Clipboard;
use crate::config::Configuration;
use crate::generator::{self, Alphabet};
use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{debug, warn};

/// Live configuration plus the password generated from it
pub struct PasswordController<R = ThreadRng> {
    config: Configuration,
    password: String,
    rng: R,
}

impl PasswordController<ThreadRng> {
    /// Controller using the thread-local random source
    pub fn new(config: Configuration) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl Default for PasswordController<ThreadRng> {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl<R> PasswordController<R> {
    pub fn config(&self) -> Configuration {
        self.config
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Alphabet of the current configuration
    pub fn alphabet(&self) -> Alphabet {
        Alphabet::for_config(&self.config)
    }
}

impl<R: Rng> PasswordController<R> {
    /// Controller with an injected random source; generates the first password
    pub fn with_rng(config: Configuration, rng: R) -> Self {
        let mut controller = Self {
            config,
            password: String::new(),
            rng,
        };
        controller.regenerate();
        controller
    }

    /// Set the length (clamped to the supported range)
    ///
    /// Returns `true` if the configuration changed and a new password was drawn.
    pub fn set_length(&mut self, length: usize) -> bool {
        self.apply(self.config.with_length(length))
    }

    pub fn set_include_digits(&mut self, include_digits: bool) -> bool {
        self.apply(self.config.with_digits(include_digits))
    }

    pub fn set_include_symbols(&mut self, include_symbols: bool) -> bool {
        self.apply(self.config.with_symbols(include_symbols))
    }

    /// Move the length by `delta`, saturating at the range bounds
    pub fn adjust_length(&mut self, delta: isize) -> bool {
        let length = self.config.length().saturating_add_signed(delta);
        self.set_length(length)
    }

    pub fn toggle_digits(&mut self) -> bool {
        self.set_include_digits(!self.config.include_digits())
    }

    pub fn toggle_symbols(&mut self) -> bool {
        self.set_include_symbols(!self.config.include_symbols())
    }

    /// Draw a fresh password for the unchanged configuration
    pub fn regenerate(&mut self) {
        self.password = generator::generate(&self.config, &mut self.rng);
    }

    fn apply(&mut self, next: Configuration) -> bool {
        if next == self.config {
            return false;
        }
        debug!(
            length = next.length(),
            digits = next.include_digits(),
            symbols = next.include_symbols(),
            "configuration changed"
        );
        self.config = next;
        self.regenerate();
        true
    }
}

impl<R> PasswordController<R> {
    /// Send the current password to the clipboard.
    ///
    /// Failures are logged and otherwise ignored.
    pub fn copy_to<C: Clipboard + ?Sized>(&self, clipboard: &mut C) {
        match clipboard.write_text(&self.password) {
            Ok(()) => debug!(length = self.password.len(), "password copied"),
            Err(e) => warn!("clipboard write failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::config::{MAX_LENGTH, MIN_LENGTH};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn controller() -> PasswordController<StdRng> {
        PasswordController::with_rng(Configuration::default(), StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_initial_password_matches_default() {
        let ctl = controller();
        assert_eq!(ctl.config(), Configuration::default());
        assert_eq!(ctl.password().len(), 8);
        assert!(ctl.password().chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_length_change_regenerates() {
        let mut ctl = controller();
        assert!(ctl.set_length(16));
        assert_eq!(ctl.config().length(), 16);
        assert_eq!(ctl.password().len(), 16);
    }

    #[test]
    fn test_unchanged_setter_keeps_password() {
        let mut ctl = controller();
        let before = ctl.password().to_string();
        assert!(!ctl.set_length(8));
        assert!(!ctl.set_include_digits(false));
        assert!(!ctl.set_include_symbols(false));
        assert_eq!(ctl.password(), before);
    }

    #[test]
    fn test_toggles_extend_alphabet() {
        let mut ctl = controller();
        assert!(ctl.toggle_digits());
        assert_eq!(ctl.alphabet().len(), 62);
        assert!(ctl.toggle_symbols());
        assert_eq!(ctl.alphabet().len(), 80);
        let alphabet = ctl.alphabet();
        assert!(ctl.password().chars().all(|c| alphabet.contains(c)));
        assert!(ctl.toggle_digits());
        assert_eq!(ctl.alphabet().len(), 70);
    }

    #[test]
    fn test_adjust_length_saturates() {
        let mut ctl = controller();
        assert!(ctl.adjust_length(-100));
        assert_eq!(ctl.config().length(), MIN_LENGTH);
        assert!(!ctl.adjust_length(-1));
        assert!(ctl.adjust_length(1000));
        assert_eq!(ctl.config().length(), MAX_LENGTH);
        assert_eq!(ctl.password().len(), MAX_LENGTH);
    }

    #[test]
    fn test_regenerate_keeps_config() {
        let mut ctl = controller();
        let config = ctl.config();
        ctl.regenerate();
        assert_eq!(ctl.config(), config);
        assert_eq!(ctl.password().len(), config.length());
    }

    #[test]
    fn test_copy_writes_current_password() {
        let ctl = controller();
        let mut clipboard = MemoryClipboard::new();
        ctl.copy_to(&mut clipboard);
        assert_eq!(clipboard.contents(), Some(ctl.password()));
    }

    #[test]
    fn test_copy_failure_is_swallowed() {
        let ctl = controller();
        let mut clipboard = MemoryClipboard::failing();
        ctl.copy_to(&mut clipboard);
        assert!(clipboard.contents().is_none());
    }
}
