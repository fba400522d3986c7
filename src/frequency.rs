//! Symbol frequency counting.
//!
//! Besides the per-letter counts, the table remembers where each letter was
//! first seen so that the most frequent letter is well defined when several
//! letters share the top count: the earliest-seen one wins.

use crate::text::{Symbol, ALPHABET_LEN};

/// Occurrence counts of every alphabet symbol over a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [usize; ALPHABET_LEN],
    first_seen: [Option<usize>; ALPHABET_LEN],
    total: usize,
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        FrequencyTable {
            counts: [0; ALPHABET_LEN],
            first_seen: [None; ALPHABET_LEN],
            total: 0,
        }
    }

    /// Counts every symbol of `symbols` in order.
    pub fn from_symbols<I: IntoIterator<Item = Symbol>>(symbols: I) -> Self {
        let mut table = Self::new();
        for symbol in symbols {
            table.record(symbol);
        }
        table
    }

    /// Records one more occurrence of `symbol`.
    pub fn record(&mut self, symbol: Symbol) {
        let i = symbol.index();
        if self.first_seen[i].is_none() {
            self.first_seen[i] = Some(self.total);
        }
        self.counts[i] += 1;
        self.total += 1;
    }

    /// Occurrences of `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.counts[symbol.index()]
    }

    /// Per-letter counts indexed by alphabet position.
    pub fn counts(&self) -> &[usize; ALPHABET_LEN] {
        &self.counts
    }

    /// Total number of symbols recorded.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The most frequent symbol, or `None` for an empty table.
    ///
    /// Among symbols sharing the highest count, the one that occurred
    /// first in the recorded sequence is returned.
    pub fn most_frequent(&self) -> Option<Symbol> {
        (0..ALPHABET_LEN)
            .filter_map(|i| self.first_seen[i].map(|seen| (i, seen)))
            .min_by(|&(a, seen_a), &(b, seen_b)| {
                self.counts[b]
                    .cmp(&self.counts[a])
                    .then(seen_a.cmp(&seen_b))
            })
            .map(|(i, _)| Symbol::from_index_wrapping(i))
    }

    /// Index of coincidence of the recorded sequence.
    ///
    /// Defined as `0.0` when fewer than two symbols were recorded.
    pub fn index_of_coincidence(&self) -> f64 {
        let n = self.total;
        if n <= 1 {
            return 0.0;
        }
        let pairs: usize = self.counts.iter().map(|&f| f * f.saturating_sub(1)).sum();
        pairs as f64 / (n * (n - 1)) as f64
    }
}
