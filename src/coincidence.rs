//! Index of coincidence.
//!
//! The index of coincidence is the probability that two symbols drawn
//! without replacement from a text are equal. Monoalphabetic text keeps the
//! skewed letter distribution of its language and scores high; text mixed
//! under several shifts flattens toward the uniform baseline.

use crate::frequency::FrequencyTable;
use crate::text::{Text, ALPHABET_LEN};

/// Typical index of coincidence of English plaintext.
pub const ENGLISH_IC: f64 = 0.0667;

/// Index of coincidence of uniformly random letters.
pub const RANDOM_IC: f64 = 1.0 / ALPHABET_LEN as f64;

/// Index of coincidence of `text`, in `[0, 1]`.
///
/// Returns `0.0` for texts of length 0 or 1.
///
/// # Examples
///
/// ```
/// use vigenere::{index_of_coincidence, Text};
///
/// assert_eq!(index_of_coincidence(&Text::normalize("AAAA")), 1.0);
/// assert_eq!(index_of_coincidence(&Text::normalize("ABCD")), 0.0);
/// assert_eq!(index_of_coincidence(&Text::normalize("A")), 0.0);
/// ```
pub fn index_of_coincidence(text: &Text) -> f64 {
    FrequencyTable::from_symbols(text).index_of_coincidence()
}
