//! Regression tests for the public cipher and text API.
//!
//! Coverage:
//! - `encrypt` / `decrypt` / `Vigenere`
//! - `Key`
//! - `Text`, `Symbol`, `Coset`
//! - `index_of_coincidence`
//! - `error::VigenereError`

use vigenere::error::VigenereError;
use vigenere::{decrypt, encrypt, index_of_coincidence, Key, Symbol, Text, Vigenere};

/// Plaintexts used across the cipher tests.
const PLAINTEXTS: [&str; 5] = [
    "ATTACKATDAWN",
    "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG",
    "Z",
    "",
    "Mixed case, punctuation & digits 0123 survive!",
];

/// Keys used across the cipher tests.
const KEYS: [&str; 5] = ["A", "LEMON", "KEY", "z", "ThisIsALongerKeyThanSomeTexts"];

// ═══════════════════════════════════════════════════════════════════════
// Cipher engine
// ═══════════════════════════════════════════════════════════════════════

/// `decrypt(encrypt(t, k), k) == t` for every plaintext and key.
#[test]
fn roundtrip_all_vectors() {
    for plaintext in PLAINTEXTS {
        for key in KEYS {
            let ciphertext = encrypt(plaintext, key).unwrap();
            assert_eq!(
                decrypt(&ciphertext, key).unwrap(),
                plaintext,
                "Roundtrip failed for key '{}', plaintext '{}'",
                key,
                plaintext
            );
        }
    }
}

/// A key of only `A` leaves text unchanged.
#[test]
fn identity_key_is_noop() {
    for plaintext in PLAINTEXTS {
        assert_eq!(encrypt(plaintext, "A").unwrap(), plaintext);
        assert_eq!(encrypt(plaintext, "AAAA").unwrap(), plaintext);
        assert_eq!(decrypt(plaintext, "A").unwrap(), plaintext);
    }
}

/// Empty keys fail in both directions, for every input.
#[test]
fn empty_key_fails() {
    for plaintext in PLAINTEXTS {
        assert_eq!(encrypt(plaintext, ""), Err(VigenereError::InvalidKey));
        assert_eq!(decrypt(plaintext, ""), Err(VigenereError::InvalidKey));
    }
    assert_eq!(Vigenere::new(""), Err(VigenereError::InvalidKey));
}

/// Non-letters in the key are rejected rather than mapped to odd shifts.
#[test]
fn key_with_non_letter_fails() {
    assert_eq!(
        encrypt("HELLO", "LE-MON"),
        Err(VigenereError::InvalidKeyCharacter('-'))
    );
}

/// Frozen ciphertext for the classic LEMON example.
#[test]
fn lemon_known_answer() {
    let cipher = Vigenere::new("LEMON").unwrap();
    assert_eq!(cipher.encrypt("ATTACKATDAWN"), "LXFOPVEFRNHR");
    assert_eq!(cipher.encrypt("attack at dawn"), "lxfopv ef rnhr");
}

/// Only letters consume key positions.
#[test]
fn separators_do_not_shift_key() {
    let letters_only = encrypt("WEAREDISCOVERED", "LEMON").unwrap();
    let spaced = encrypt("WE ARE DISCOVERED", "LEMON").unwrap();
    assert_eq!(Text::normalize(&spaced).to_string(), letters_only);
}

/// Typed and string APIs agree on normalized text.
#[test]
fn typed_api_matches_string_api() {
    let key = Key::new("KEY").unwrap();
    let cipher = Vigenere::with_key(key);
    let text = Text::normalize(PLAINTEXTS[1]);
    let encrypted = cipher.encrypt_text(&text);
    assert_eq!(
        encrypted.to_string(),
        encrypt(PLAINTEXTS[1], "KEY").unwrap()
    );
    assert_eq!(cipher.decrypt_text(&encrypted), text);
}

// ═══════════════════════════════════════════════════════════════════════
// Text, symbols and cosets
// ═══════════════════════════════════════════════════════════════════════

/// Normalization keeps letters only, upper-cased.
#[test]
fn normalize_strips_non_letters() {
    let text = Text::normalize("Über 9 lives? No: nine!");
    assert_eq!(text.to_string(), "BERLIVESNONINE");
}

/// Cosets are disjoint and reassemble the text in index order.
#[test]
fn cosets_partition_text() {
    let text = Text::normalize(PLAINTEXTS[1]);
    for k in 1..=12 {
        let cosets: Vec<Text> = text.cosets(k).unwrap().map(|c| c.to_text()).collect();
        assert_eq!(cosets.len(), k);
        assert_eq!(
            cosets.iter().map(Text::len).sum::<usize>(),
            text.len(),
            "coset sizes do not add up for k={}",
            k
        );
        let rebuilt: Text = (0..text.len())
            .map(|i| cosets[i % k].symbols()[i / k])
            .collect();
        assert_eq!(rebuilt, text, "reassembly failed for k={}", k);
    }
}

/// Symbol arithmetic is modulo 26.
#[test]
fn symbol_shift_is_modular() {
    let y = Symbol::from_char('Y').unwrap();
    let d = Symbol::from_char('D').unwrap();
    assert_eq!(y.shift(d).to_char(), 'B');
    assert_eq!(y.shift(d).unshift(d), y);
}

// ═══════════════════════════════════════════════════════════════════════
// Index of coincidence
// ═══════════════════════════════════════════════════════════════════════

/// IC stays in [0, 1], is 0 for length ≤ 1 and 1 for a repeated symbol.
#[test]
fn ic_bounds() {
    assert_eq!(index_of_coincidence(&Text::default()), 0.0);
    assert_eq!(index_of_coincidence(&Text::normalize("K")), 0.0);
    assert_eq!(index_of_coincidence(&Text::normalize("AAAA")), 1.0);
    for plaintext in PLAINTEXTS {
        let ic = index_of_coincidence(&Text::normalize(plaintext));
        assert!((0.0..=1.0).contains(&ic), "IC {} out of range", ic);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════

/// Errors render a message a presentation layer can show directly.
#[test]
fn error_messages() {
    assert_eq!(
        VigenereError::InvalidKey.to_string(),
        "Key must be at least 1 letter long"
    );
    let err: Box<dyn std::error::Error> = Box::new(VigenereError::InvalidKeyLength);
    assert_eq!(err.to_string(), "Key length must be at least 1");
}
