//! Vigenère encryption and decryption.
//!
//! Each letter is shifted by the alphabet index of the key letter at the
//! same letter position (A=0 .. Z=25), the key repeating as needed.
//! Characters that are not ASCII letters are copied through unchanged and
//! do not advance the key. Letters keep their case.

use crate::error::VigenereError;
use crate::key::Key;
use crate::text::{Symbol, Text};

/// Shift direction of a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Vigenère cipher bound to a validated [`Key`].
///
/// # Examples
///
/// ```
/// use vigenere::Vigenere;
///
/// let cipher = Vigenere::new("LEMON").unwrap();
/// let ciphertext = cipher.encrypt("Attack at dawn!");
/// assert_eq!(ciphertext, "Lxfopv ef rnhr!");
/// assert_eq!(cipher.decrypt(&ciphertext), "Attack at dawn!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    key: Key,
}

impl Vigenere {
    /// Creates a cipher from a key string.
    ///
    /// # Errors
    /// Returns [`VigenereError::InvalidKey`] if `key` is empty and
    /// [`VigenereError::InvalidKeyCharacter`] if it contains a non-letter.
    pub fn new(key: &str) -> Result<Self, VigenereError> {
        Ok(Self::with_key(Key::new(key)?))
    }

    /// Creates a cipher from an already validated key.
    pub fn with_key(key: Key) -> Self {
        Vigenere { key }
    }

    /// The key this cipher applies.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Encrypts arbitrary text, passing non-letters through.
    pub fn encrypt(&self, plaintext: &str) -> String {
        self.apply(plaintext, Direction::Encrypt)
    }

    /// Decrypts arbitrary text, passing non-letters through.
    pub fn decrypt(&self, ciphertext: &str) -> String {
        self.apply(ciphertext, Direction::Decrypt)
    }

    /// Encrypts normalized text.
    pub fn encrypt_text(&self, plaintext: &Text) -> Text {
        plaintext
            .iter()
            .enumerate()
            .map(|(i, s)| s.shift(self.key.at(i)))
            .collect()
    }

    /// Decrypts normalized text.
    pub fn decrypt_text(&self, ciphertext: &Text) -> Text {
        ciphertext
            .iter()
            .enumerate()
            .map(|(i, s)| s.unshift(self.key.at(i)))
            .collect()
    }

    fn apply(&self, input: &str, direction: Direction) -> String {
        let mut out = String::with_capacity(input.len());
        let mut key_index = 0usize;
        for c in input.chars() {
            let Some(symbol) = Symbol::from_char(c) else {
                out.push(c);
                continue;
            };
            let shift = self.key.at(key_index);
            let shifted = match direction {
                Direction::Encrypt => symbol.shift(shift),
                Direction::Decrypt => symbol.unshift(shift),
            };
            let letter = shifted.to_char();
            out.push(if c.is_ascii_lowercase() {
                letter.to_ascii_lowercase()
            } else {
                letter
            });
            key_index += 1;
        }
        out
    }
}

/// Encrypts `text` with the repeating `key`.
///
/// # Errors
/// Returns [`VigenereError::InvalidKey`] if `key` is empty and
/// [`VigenereError::InvalidKeyCharacter`] if it contains a non-letter.
///
/// # Examples
///
/// ```
/// let ciphertext = vigenere::encrypt("ATTACKATDAWN", "LEMON").unwrap();
/// assert_eq!(ciphertext, "LXFOPVEFRNHR");
/// assert!(vigenere::encrypt("ATTACK", "").is_err());
/// ```
pub fn encrypt(text: &str, key: &str) -> Result<String, VigenereError> {
    Ok(Vigenere::new(key)?.encrypt(text))
}

/// Decrypts `text` with the repeating `key`.
///
/// # Errors
/// Same as [`encrypt`].
pub fn decrypt(text: &str, key: &str) -> Result<String, VigenereError> {
    Ok(Vigenere::new(key)?.decrypt(text))
}
