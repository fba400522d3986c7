//! Vigenère cipher and statistical cryptanalysis.
//!
//! The Vigenère cipher shifts each letter of the plaintext by the alphabet
//! index of the corresponding letter of a repeating key. This crate
//! encrypts and decrypts with it, and attacks it without the key:
//!
//! - the key length is estimated by maximizing the mean index of
//!   coincidence over the ciphertext's cosets (Friedman-style attack);
//! - the key is then recovered column by column, either from each column's
//!   most frequent letter or by chi-squared fit against English.
//!
//! All operations are pure functions over immutable values.
//!
//! # Architecture
//!
//! ```text
//! Text / Symbol / Coset        (normalized A–Z stream, residue-class views)
//!     ↓
//! FrequencyTable ─→ index_of_coincidence
//!     ↓                    ↓
//! recover_key        probable_key_length
//!     ↘                  ↙
//!        break_cipher ─→ Vigenere (encrypt / decrypt)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt:
//!
//! ```
//! let ciphertext = vigenere::encrypt("ATTACKATDAWN", "LEMON").unwrap();
//! assert_eq!(ciphertext, "LXFOPVEFRNHR");
//! assert_eq!(vigenere::decrypt(&ciphertext, "LEMON").unwrap(), "ATTACKATDAWN");
//! ```
//!
//! Recover a key of known length:
//!
//! ```
//! use vigenere::{encrypt, recover_key, Text};
//!
//! let plaintext = "Every evening the eleven elderly members of the village \
//!     reading society met beneath the green trees near the edge of the meadow. \
//!     There they debated whether the presence of the stranger who had entered \
//!     the valley seven weeks before was merely the result of chance, or whether \
//!     he meant to settle here forever.";
//! let ciphertext = Text::normalize(&encrypt(plaintext, "LEMON").unwrap());
//! assert_eq!(recover_key(&ciphertext, 5).unwrap().to_string(), "LEMON");
//! ```

#![deny(clippy::all)]

pub mod error;

mod analysis;
mod cipher;
mod coincidence;
mod frequency;
mod key;
mod key_length;
mod recover;
mod text;

pub use analysis::{break_cipher, AnalysisConfig, Breakdown};
pub use cipher::{decrypt, encrypt, Vigenere};
pub use coincidence::{index_of_coincidence, ENGLISH_IC, RANDOM_IC};
pub use error::VigenereError;
pub use frequency::FrequencyTable;
pub use key::Key;
pub use key_length::{
    key_length_scores, probable_key_length, KeyLengthScore, DEFAULT_MAX_KEY_LENGTH,
};
pub use recover::{
    recover_key, recover_key_chi_squared, recover_key_with_reference, RecoveryMethod,
    ENGLISH_FREQUENCIES,
};
pub use text::{Coset, Symbol, Text, ALPHABET_LEN};
