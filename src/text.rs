//! Alphabet symbols, normalized text and coset partitioning.
//!
//! Every analysis in the crate runs over [`Text`], a sequence of
//! [`Symbol`]s drawn from the fixed 26-letter Latin alphabet. Raw input is
//! brought into that form with [`Text::normalize`], which drops every
//! non-letter and upper-cases the rest.

use std::fmt;
use std::iter::{Copied, StepBy};
use std::slice;
use std::str::FromStr;

use crate::error::VigenereError;
use crate::frequency::FrequencyTable;

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// A single uppercase letter, stored as its alphabet index (A=0 .. Z=25).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u8);

impl Symbol {
    /// The letter `A`, the identity shift.
    pub const A: Symbol = Symbol(0);

    /// The letter `E`, the most common letter of English plaintext.
    pub const E: Symbol = Symbol(4);

    /// Builds a symbol from its alphabet index.
    ///
    /// Returns `None` if `index >= 26`.
    pub fn from_index(index: u8) -> Option<Symbol> {
        if (index as usize) < ALPHABET_LEN {
            Some(Symbol(index))
        } else {
            None
        }
    }

    /// Builds a symbol from any index, reducing it modulo 26.
    pub(crate) fn from_index_wrapping(index: usize) -> Symbol {
        Symbol((index % ALPHABET_LEN) as u8)
    }

    /// Builds a symbol from an ASCII letter of either case.
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    pub fn from_char(c: char) -> Option<Symbol> {
        if c.is_ascii_alphabetic() {
            Some(Symbol(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    /// Alphabet index of this symbol (A=0 .. Z=25).
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Uppercase letter of this symbol.
    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Shifts forward by the alphabet index of `by`, modulo 26.
    pub fn shift(self, by: Symbol) -> Symbol {
        Symbol((self.0 + by.0) % ALPHABET_LEN as u8)
    }

    /// Shifts backward by the alphabet index of `by`, modulo 26.
    pub fn unshift(self, by: Symbol) -> Symbol {
        Symbol((self.0 + ALPHABET_LEN as u8 - by.0) % ALPHABET_LEN as u8)
    }
}

impl TryFrom<char> for Symbol {
    type Error = VigenereError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Symbol::from_char(c).ok_or(VigenereError::InvalidCharacter(c))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// An immutable sequence of alphabet symbols.
///
/// # Examples
///
/// ```
/// use vigenere::Text;
///
/// let text = Text::normalize("Attack at dawn!");
/// assert_eq!(text.to_string(), "ATTACKATDAWN");
/// assert_eq!(text.len(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Text {
    symbols: Vec<Symbol>,
}

impl Text {
    /// Normalizes raw input: non-letters are discarded, letters upper-cased.
    pub fn normalize(raw: &str) -> Self {
        raw.chars().filter_map(Symbol::from_char).collect()
    }

    /// Wraps an existing symbol vector.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        Text { symbols }
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the text has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The underlying symbols in order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Iterates over the symbols in order.
    pub fn iter(&self) -> Copied<slice::Iter<'_, Symbol>> {
        self.symbols.iter().copied()
    }

    /// Partitions the text into `k` cosets by residue class of the index
    /// modulo `k`, yielded in offset order.
    ///
    /// Coset `i` holds the symbols at positions `i, i + k, i + 2k, ...`.
    /// When `k` exceeds the text length the trailing cosets are empty.
    ///
    /// # Errors
    /// Returns [`VigenereError::InvalidKeyLength`] if `k == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vigenere::Text;
    ///
    /// let text = Text::normalize("ABCDEFG");
    /// let cosets: Vec<String> = text
    ///     .cosets(3)
    ///     .unwrap()
    ///     .map(|c| c.to_text().to_string())
    ///     .collect();
    /// assert_eq!(cosets, ["ADG", "BE", "CF"]);
    /// ```
    pub fn cosets(
        &self,
        k: usize,
    ) -> Result<impl ExactSizeIterator<Item = Coset<'_>> + '_, VigenereError> {
        if k == 0 {
            return Err(VigenereError::InvalidKeyLength);
        }
        Ok((0..k).map(move |offset| Coset {
            symbols: &self.symbols,
            offset,
            stride: k,
        }))
    }
}

impl FromStr for Text {
    type Err = VigenereError;

    /// Strict parse: every character must be an ASCII letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().map(Symbol::try_from).collect()
    }
}

impl FromIterator<Symbol> for Text {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Text {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Text {
    type Item = Symbol;
    type IntoIter = Copied<slice::Iter<'a, Symbol>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AsRef<[Symbol]> for Text {
    fn as_ref(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// Read-only view of every `stride`-th symbol of a [`Text`] starting at
/// `offset`.
#[derive(Debug, Clone, Copy)]
pub struct Coset<'a> {
    symbols: &'a [Symbol],
    offset: usize,
    stride: usize,
}

impl<'a> Coset<'a> {
    /// Position of the first symbol of this coset in the parent text.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of symbols in this coset.
    pub fn len(&self) -> usize {
        if self.offset >= self.symbols.len() {
            0
        } else {
            (self.symbols.len() - self.offset - 1) / self.stride + 1
        }
    }

    /// Returns `true` if the coset selects no symbols.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the selected symbols in parent-text order.
    pub fn iter(&self) -> StepBy<Copied<slice::Iter<'a, Symbol>>> {
        let tail = self.symbols.get(self.offset..).unwrap_or(&[]);
        tail.iter().copied().step_by(self.stride)
    }

    /// Copies the selected symbols into a standalone [`Text`].
    pub fn to_text(&self) -> Text {
        self.iter().collect()
    }

    /// Index of coincidence of the symbols in this coset.
    pub fn index_of_coincidence(&self) -> f64 {
        FrequencyTable::from_symbols(self.iter()).index_of_coincidence()
    }
}

impl<'a> IntoIterator for Coset<'a> {
    type Item = Symbol;
    type IntoIter = StepBy<Copied<slice::Iter<'a, Symbol>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
