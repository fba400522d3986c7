//! Key recovery for a known key length.
//!
//! The ciphertext is split into one coset per key position. Every coset was
//! shifted by a single key letter, so each can be attacked as a Caesar
//! cipher:
//!
//! - [`recover_key`] assumes the most frequent ciphertext letter of a coset
//!   is the encryption of a fixed reference letter (`E` by default).
//! - [`recover_key_chi_squared`] tries all 26 shifts and keeps the one
//!   whose decrypted letter distribution is closest to English, measured
//!   by the chi-squared statistic.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::VigenereError;
use crate::frequency::FrequencyTable;
use crate::key::Key;
use crate::text::{Coset, Symbol, Text, ALPHABET_LEN};

/// Relative letter frequencies of English text, A through Z.
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_LEN] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, 0.06966, 0.00153,
    0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056,
    0.02758, 0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
];

/// Strategy for deriving one key letter from its coset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryMethod {
    /// Most frequent letter minus the reference letter.
    #[default]
    MostFrequent,
    /// Shift minimizing chi-squared distance to English frequencies.
    ChiSquared,
}

impl RecoveryMethod {
    /// Recovers a key of `key_len` letters from `text` with this method.
    ///
    /// `reference` is only consulted by [`RecoveryMethod::MostFrequent`].
    ///
    /// # Errors
    /// See [`recover_key`].
    pub fn recover(
        self,
        text: &Text,
        key_len: usize,
        reference: Symbol,
    ) -> Result<Key, VigenereError> {
        match self {
            RecoveryMethod::MostFrequent => recover_key_with_reference(text, key_len, reference),
            RecoveryMethod::ChiSquared => recover_key_chi_squared(text, key_len),
        }
    }
}

/// Recovers a key of `key_len` letters assuming the plaintext's most
/// frequent letter is `E`.
///
/// # Errors
/// Returns [`VigenereError::InvalidKeyLength`] if `key_len == 0` and
/// [`VigenereError::EmptyCoset`] if the text is too short to give every
/// key position at least one symbol.
///
/// # Examples
///
/// ```
/// use vigenere::{recover_key, Text};
///
/// // Every column's most frequent letter is `E`, so the key is all `A`.
/// let text = Text::normalize("EEEEEEXYZ");
/// assert_eq!(recover_key(&text, 3).unwrap().to_string(), "AAA");
/// ```
pub fn recover_key(text: &Text, key_len: usize) -> Result<Key, VigenereError> {
    recover_key_with_reference(text, key_len, Symbol::E)
}

/// Recovers a key of `key_len` letters assuming the plaintext's most
/// frequent letter is `reference`.
///
/// Each key letter is `(most frequent coset letter - reference) mod 26`;
/// ties between equally frequent letters go to the one seen first.
///
/// # Errors
/// Same as [`recover_key`].
pub fn recover_key_with_reference(
    text: &Text,
    key_len: usize,
    reference: Symbol,
) -> Result<Key, VigenereError> {
    recover_with(text, key_len, |coset| {
        FrequencyTable::from_symbols(coset.iter())
            .most_frequent()
            .map(|top| top.unshift(reference))
    })
}

/// Recovers a key of `key_len` letters by chi-squared fit of each coset
/// against [`ENGLISH_FREQUENCIES`].
///
/// Ties between shifts resolve to the smallest shift.
///
/// # Errors
/// Same as [`recover_key`].
pub fn recover_key_chi_squared(text: &Text, key_len: usize) -> Result<Key, VigenereError> {
    recover_with(text, key_len, |coset| {
        let table = FrequencyTable::from_symbols(coset.iter());
        if table.is_empty() {
            return None;
        }
        let mut best_shift = 0usize;
        let mut best_score = f64::INFINITY;
        for shift in 0..ALPHABET_LEN {
            let score = chi_squared(&table, shift);
            if score < best_score {
                best_score = score;
                best_shift = shift;
            }
        }
        Some(Symbol::from_index_wrapping(best_shift))
    })
}

/// Chi-squared statistic of `table` decrypted by `shift` against English.
fn chi_squared(table: &FrequencyTable, shift: usize) -> f64 {
    let n = table.total() as f64;
    let counts = table.counts();
    ENGLISH_FREQUENCIES
        .iter()
        .enumerate()
        .map(|(plain, &freq)| {
            let observed = counts[(plain + shift) % ALPHABET_LEN] as f64;
            let expected = freq * n;
            let diff = observed - expected;
            diff * diff / expected
        })
        .sum()
}

/// Applies `derive` to every coset of `text`, one key letter per coset.
fn recover_with<F>(text: &Text, key_len: usize, derive: F) -> Result<Key, VigenereError>
where
    F: Fn(&Coset<'_>) -> Option<Symbol>,
{
    let letters = text
        .cosets(key_len)?
        .map(|coset| {
            derive(&coset).ok_or(VigenereError::EmptyCoset {
                offset: coset.offset(),
                key_len,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let key = Key::from_symbols(letters)?;
    debug!(key_len, key = %key, "recovered key");
    Ok(key)
}
