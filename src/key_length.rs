//! Key-length estimation by average coset index of coincidence.
//!
//! For the right key length every coset was shifted by a single key letter,
//! so each one keeps the letter distribution of the plaintext language and
//! the mean coset IC approaches the language IC. Wrong lengths mix several
//! shifts per coset and pull the mean toward the random baseline.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::VigenereError;
use crate::text::Text;

/// Upper bound on candidate key lengths used when none is given.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 20;

/// Score of one candidate key length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyLengthScore {
    /// Candidate key length.
    pub key_length: usize,
    /// Mean index of coincidence over its cosets, or `0.0` if any coset
    /// has fewer than two symbols.
    pub score: f64,
}

/// Scores every candidate key length from 1 to `max_len`, in ascending
/// order of key length.
///
/// # Errors
/// Returns [`VigenereError::InvalidKeyLength`] if `max_len == 0`.
pub fn key_length_scores(
    text: &Text,
    max_len: usize,
) -> Result<Vec<KeyLengthScore>, VigenereError> {
    if max_len == 0 {
        return Err(VigenereError::InvalidKeyLength);
    }
    (1..=max_len)
        .map(|key_length| {
            let score = candidate_score(text, key_length)?;
            trace!(key_length, score, "scored candidate key length");
            Ok(KeyLengthScore { key_length, score })
        })
        .collect()
}

/// Mean coset IC for one key length, floored to `0.0` when a coset is too
/// short to estimate from.
fn candidate_score(text: &Text, key_length: usize) -> Result<f64, VigenereError> {
    let mut sum = 0.0;
    for coset in text.cosets(key_length)? {
        if coset.len() <= 1 {
            return Ok(0.0);
        }
        sum += coset.index_of_coincidence();
    }
    Ok(sum / key_length as f64)
}

/// Most probable key length in `1..=max_len`.
///
/// Ties resolve to the shortest candidate.
///
/// # Errors
/// Returns [`VigenereError::InvalidKeyLength`] if `max_len == 0`.
///
/// # Examples
///
/// ```
/// use vigenere::{probable_key_length, Text};
///
/// // Lengths 3 and 6 both make every coset constant; the shorter wins.
/// let text = Text::normalize("ABCABCABCABCABCABC");
/// assert_eq!(probable_key_length(&text, 6).unwrap(), 3);
/// ```
pub fn probable_key_length(text: &Text, max_len: usize) -> Result<usize, VigenereError> {
    let best = best_score(&key_length_scores(text, max_len)?);
    debug!(
        key_length = best.key_length,
        score = best.score,
        max_len,
        "estimated key length"
    );
    Ok(best.key_length)
}

/// First candidate with the maximal score. `scores` must be non-empty.
pub(crate) fn best_score(scores: &[KeyLengthScore]) -> KeyLengthScore {
    let mut best = KeyLengthScore {
        key_length: 1,
        score: 0.0,
    };
    for (i, candidate) in scores.iter().enumerate() {
        if i == 0 || candidate.score > best.score {
            best = *candidate;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::encrypt;

    const PANGRAM: &str = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";

    fn ciphertext(plain: &str, key: &str) -> Text {
        Text::normalize(&encrypt(plain, key).unwrap())
    }

    #[test]
    fn test_zero_max_len_rejected() {
        let text = Text::normalize("ABCDEF");
        assert_eq!(
            probable_key_length(&text, 0),
            Err(VigenereError::InvalidKeyLength)
        );
        assert_eq!(
            key_length_scores(&text, 0),
            Err(VigenereError::InvalidKeyLength)
        );
    }

    #[test]
    fn test_scores_cover_every_candidate() {
        let text = ciphertext(&PANGRAM.repeat(3), "KEY");
        let scores = key_length_scores(&text, 7).unwrap();
        let lengths: Vec<usize> = scores.iter().map(|s| s.key_length).collect();
        assert_eq!(lengths, vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(scores.iter().all(|s| (0.0..=1.0).contains(&s.score)));
    }

    #[test]
    fn test_short_cosets_floor_to_zero() {
        // 5 symbols: k=3 gives cosets of 2,2,1 -> floored.
        let text = Text::normalize("AAAAA");
        let scores = key_length_scores(&text, 4).unwrap();
        assert_eq!(scores[0].score, 1.0);
        assert_eq!(scores[1].score, 1.0);
        assert_eq!(scores[2].score, 0.0);
        assert_eq!(scores[3].score, 0.0);
    }

    #[test]
    fn test_tie_prefers_shorter() {
        // Every candidate with full cosets scores 1.0; k=1 must win.
        let text = Text::normalize(&"A".repeat(40));
        assert_eq!(probable_key_length(&text, 10).unwrap(), 1);
    }

    #[test]
    fn test_all_zero_scores_yield_one() {
        let text = Text::normalize("AB");
        assert_eq!(probable_key_length(&text, 5).unwrap(), 1);
        let empty = Text::default();
        assert_eq!(probable_key_length(&empty, 5).unwrap(), 1);
    }

    #[test]
    fn test_periodic_text() {
        let text = Text::normalize(&"ABCDE".repeat(8));
        assert_eq!(probable_key_length(&text, 12).unwrap(), 5);
    }

    #[test]
    fn test_repeated_plaintext_period_dominates() {
        // The pangram is 35 letters long, so a repeated pangram is itself
        // periodic and length 7 cosets collapse onto repeated letters.
        let text = ciphertext(&PANGRAM.repeat(6), "KEY");
        assert_eq!(text.len(), 210);
        assert_eq!(probable_key_length(&text, 10).unwrap(), 7);
    }

    #[test]
    fn test_deterministic() {
        let text = ciphertext(&PANGRAM.repeat(6), "KEY");
        assert_eq!(
            probable_key_length(&text, 10).unwrap(),
            probable_key_length(&text, 10).unwrap()
        );
    }

    #[test]
    fn test_best_score_first_maximum() {
        let scores = [
            KeyLengthScore {
                key_length: 1,
                score: 0.04,
            },
            KeyLengthScore {
                key_length: 2,
                score: 0.07,
            },
            KeyLengthScore {
                key_length: 3,
                score: 0.07,
            },
        ];
        assert_eq!(best_score(&scores).key_length, 2);
    }
}
