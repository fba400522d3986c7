//! End-to-end cryptanalysis: estimate the key length, recover the key and
//! decrypt.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cipher::Vigenere;
use crate::error::VigenereError;
use crate::key::Key;
use crate::key_length::{best_score, key_length_scores, DEFAULT_MAX_KEY_LENGTH};
use crate::recover::RecoveryMethod;
use crate::text::{Symbol, Text};

/// Parameters of [`break_cipher`].
///
/// # Examples
///
/// ```
/// use vigenere::{AnalysisConfig, RecoveryMethod};
///
/// let config = AnalysisConfig::default()
///     .with_max_key_length(12)
///     .with_method(RecoveryMethod::ChiSquared);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Largest key length considered by the estimator.
    pub max_key_length: usize,
    /// Assumed most frequent plaintext letter.
    pub reference_letter: char,
    /// How each key letter is derived from its coset.
    pub method: RecoveryMethod,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            reference_letter: 'E',
            method: RecoveryMethod::MostFrequent,
        }
    }
}

impl AnalysisConfig {
    /// Sets the largest key length considered.
    pub fn with_max_key_length(mut self, max_key_length: usize) -> Self {
        self.max_key_length = max_key_length;
        self
    }

    /// Sets the assumed most frequent plaintext letter.
    pub fn with_reference_letter(mut self, reference_letter: char) -> Self {
        self.reference_letter = reference_letter;
        self
    }

    /// Sets the key recovery method.
    pub fn with_method(mut self, method: RecoveryMethod) -> Self {
        self.method = method;
        self
    }

    /// Checks that the configuration can drive an analysis.
    ///
    /// # Errors
    /// Returns [`VigenereError::InvalidKeyLength`] if `max_key_length == 0`
    /// and [`VigenereError::InvalidCharacter`] if `reference_letter` is not
    /// an ASCII letter.
    pub fn validate(&self) -> Result<(), VigenereError> {
        self.reference_symbol()?;
        if self.max_key_length == 0 {
            return Err(VigenereError::InvalidKeyLength);
        }
        Ok(())
    }

    fn reference_symbol(&self) -> Result<Symbol, VigenereError> {
        Symbol::try_from(self.reference_letter)
    }
}

/// Outcome of [`break_cipher`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Estimated key length.
    pub key_length: usize,
    /// Recovered key.
    pub key: String,
    /// Ciphertext decrypted with the recovered key.
    pub plaintext: String,
    /// Mean coset index of coincidence at the estimated key length.
    pub score: f64,
}

/// Breaks a Vigenère ciphertext without the key.
///
/// Estimates the key length within `config.max_key_length`, recovers the
/// key with `config.method`, and decrypts. This is a statistical estimate:
/// short or unusual texts may yield a wrong key.
///
/// # Errors
/// Returns the errors of [`AnalysisConfig::validate`], and
/// [`VigenereError::EmptyCoset`] if `text` is empty.
///
/// # Examples
///
/// ```
/// use vigenere::{break_cipher, encrypt, AnalysisConfig, Text};
///
/// let plaintext = "Every evening the eleven elderly members of the village \
///     reading society met beneath the green trees near the edge of the meadow. \
///     There they debated whether the presence of the stranger who had entered \
///     the valley seven weeks before was merely the result of chance.";
/// let ciphertext = Text::normalize(&encrypt(plaintext, "KEY").unwrap());
///
/// let config = AnalysisConfig::default().with_max_key_length(5);
/// let breakdown = break_cipher(&ciphertext, &config).unwrap();
/// assert_eq!(breakdown.key_length, 3);
/// assert_eq!(breakdown.key, "KEY");
/// ```
pub fn break_cipher(text: &Text, config: &AnalysisConfig) -> Result<Breakdown, VigenereError> {
    config.validate()?;
    let reference = config.reference_symbol()?;

    let best = best_score(&key_length_scores(text, config.max_key_length)?);
    let key: Key = config.method.recover(text, best.key_length, reference)?;
    let plaintext = Vigenere::with_key(key.clone()).decrypt_text(text);

    debug!(
        key_length = best.key_length,
        score = best.score,
        key = %key,
        method = ?config.method,
        "broke cipher"
    );

    Ok(Breakdown {
        key_length: best.key_length,
        key: key.to_string(),
        plaintext: plaintext.to_string(),
        score: best.score,
    })
}
