//! Error types for the vigenere library.

use thiserror::Error;

/// Errors produced by the vigenere library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VigenereError {
    /// Key has no letters.
    #[error("Key must be at least 1 letter long")]
    InvalidKey,
    /// Key string contains something other than an ASCII letter.
    #[error("Key contains a non-alphabetic character: {0:?}")]
    InvalidKeyCharacter(char),
    /// Text parsed strictly contains something other than an ASCII letter.
    #[error("Text contains a non-alphabetic character: {0:?}")]
    InvalidCharacter(char),
    /// A key length or maximum key length of zero was requested.
    #[error("Key length must be at least 1")]
    InvalidKeyLength,
    /// A coset selected for key recovery has no symbols.
    #[error("Coset {offset} of {key_len} is empty; the text is shorter than the key length")]
    EmptyCoset {
        /// Offset of the empty coset.
        offset: usize,
        /// Key length the text was partitioned by.
        key_len: usize,
    },
}
