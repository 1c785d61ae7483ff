//! Password generation
//!
//! Builds the alphabet for a [`Configuration`] and draws each character
//! independently and uniformly from it. The random source is injected so that
//! a seeded generator reproduces the same password.

use crate::config::Configuration;
use rand::Rng;

/// Upper- then lowercase letters, always part of the alphabet
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Appended when digits are enabled
pub const DIGITS: &str = "0123456789";

/// Appended when symbols are enabled
pub const SYMBOLS: &str = "!@#$%^&*-_+=[]{}~`";

/// The ordered set of characters a password is drawn from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: String,
}

impl Alphabet {
    /// Build the alphabet implied by a configuration
    pub fn for_config(config: &Configuration) -> Self {
        let mut chars = String::with_capacity(LETTERS.len() + DIGITS.len() + SYMBOLS.len());
        chars.push_str(LETTERS);
        if config.include_digits() {
            chars.push_str(DIGITS);
        }
        if config.include_symbols() {
            chars.push_str(SYMBOLS);
        }
        Self { chars }
    }

    /// Number of characters (all entries are ASCII)
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(c)
    }

    pub fn as_str(&self) -> &str {
        &self.chars
    }

    /// Draw one character uniformly at random
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        let bytes = self.chars.as_bytes();
        char::from(bytes[rng.gen_range(0..bytes.len())])
    }
}

/// Generate a password for `config` using the given random source.
///
/// The result always has exactly `config.length()` characters, each taken
/// from [`Alphabet::for_config`]. Repeats are allowed.
pub fn generate<R: Rng + ?Sized>(config: &Configuration, rng: &mut R) -> String {
    let alphabet = Alphabet::for_config(config);
    (0..config.length()).map(|_| alphabet.sample(rng)).collect()
}

/// Generate a password with the thread-local random source
pub fn generate_password(config: &Configuration) -> String {
    generate(config, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_alphabet_sizes() {
        let base = Configuration::default();
        assert_eq!(Alphabet::for_config(&base).len(), 52);
        assert_eq!(Alphabet::for_config(&base.with_digits(true)).len(), 62);
        assert_eq!(Alphabet::for_config(&base.with_symbols(true)).len(), 70);
        assert_eq!(
            Alphabet::for_config(&base.with_digits(true).with_symbols(true)).len(),
            80
        );
    }

    #[test]
    fn test_alphabet_order_is_fixed() {
        let config = Configuration::default().with_digits(true).with_symbols(true);
        let alphabet = Alphabet::for_config(&config);
        assert_eq!(
            alphabet.as_str(),
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*-_+=[]{}~`"
        );
    }

    #[test]
    fn test_symbols_without_digits_follow_letters() {
        let config = Configuration::default().with_symbols(true);
        let alphabet = Alphabet::for_config(&config);
        assert!(alphabet.as_str().ends_with(SYMBOLS));
        assert!(!alphabet.contains('0'));
    }

    #[test]
    fn test_default_scenario_letters_only() {
        let mut rng = StdRng::seed_from_u64(7);
        let password = generate(&Configuration::default(), &mut rng);
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_full_alphabet_scenario() {
        let config = Configuration::new(12, true, true).unwrap();
        let alphabet = Alphabet::for_config(&config);
        let mut rng = StdRng::seed_from_u64(99);
        let password = generate(&config, &mut rng);
        assert_eq!(password.chars().count(), 12);
        assert!(password.chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn test_same_trace_same_password() {
        let config = Configuration::new(32, true, true).unwrap();
        let first = generate(&config, &mut StdRng::seed_from_u64(2024));
        let second = generate(&config, &mut StdRng::seed_from_u64(2024));
        assert_eq!(first, second);
    }

    #[test]
    fn test_constant_source_repeats_characters() {
        // A source that never advances keeps drawing the same index
        let mut rng = StepRng::new(0, 0);
        let password = generate(&Configuration::default(), &mut rng);
        assert_eq!(password.len(), 8);
        let first = password.chars().next().unwrap();
        assert!(password.chars().all(|c| c == first));
    }

    #[test]
    fn test_thread_rng_entry_point() {
        let config = Configuration::new(100, false, true).unwrap();
        let password = generate_password(&config);
        assert_eq!(password.len(), 100);
    }
}
