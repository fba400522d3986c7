//! Repeating cipher key.

use std::fmt;
use std::str::FromStr;

use crate::error::VigenereError;
use crate::text::Symbol;

/// A non-empty sequence of symbols applied cyclically by the cipher.
///
/// # Examples
///
/// ```
/// use vigenere::Key;
///
/// let key = Key::new("lemon").unwrap();
/// assert_eq!(key.to_string(), "LEMON");
/// assert!(Key::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    symbols: Vec<Symbol>,
}

impl Key {
    /// Parses a key string. Letters of either case are accepted.
    ///
    /// # Errors
    /// Returns [`VigenereError::InvalidKey`] if `key` is empty and
    /// [`VigenereError::InvalidKeyCharacter`] if it contains a non-letter.
    pub fn new(key: &str) -> Result<Self, VigenereError> {
        let symbols = key
            .chars()
            .map(|c| Symbol::from_char(c).ok_or(VigenereError::InvalidKeyCharacter(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_symbols(symbols)
    }

    /// Wraps a symbol vector.
    ///
    /// # Errors
    /// Returns [`VigenereError::InvalidKey`] if `symbols` is empty.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self, VigenereError> {
        if symbols.is_empty() {
            return Err(VigenereError::InvalidKey);
        }
        Ok(Key { symbols })
    }

    /// Number of symbols in the key, always at least 1.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The key symbols in order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Key symbol applied at letter position `i`.
    pub fn at(&self, i: usize) -> Symbol {
        self.symbols[i % self.symbols.len()]
    }
}

impl FromStr for Key {
    type Err = VigenereError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::new(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
