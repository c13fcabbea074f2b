//! Per-search transposition table keyed by canonical position.
//!
//! Symmetric positions share one entry. Values are stored with the kind of
//! bound the search window allowed, so a cached value is only reused where
//! it is guaranteed to produce the same result as searching the subtree.

use rustc_hash::FxHashMap;

/// How a stored value relates to the true minimax value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// The value is exact.
    Exact,
    /// The true value is at least the stored value.
    Lower,
    /// The true value is at most the stored value.
    Upper,
}

impl Bound {
    /// Classify a node value against the window it was searched with.
    #[must_use]
    pub fn classify(value: i32, alpha: i32, beta: i32) -> Self {
        if value <= alpha {
            Bound::Upper
        } else if value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct TableEntry {
    value: i32,
    bound: Bound,
}

/// Subtree values cached for the duration of one search.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: FxHashMap<u32, TableEntry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value usable inside the window `(alpha, beta)`.
    #[must_use]
    pub fn lookup(&self, key: u32, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entries.get(&key)?;
        match entry.bound {
            Bound::Exact => Some(entry.value),
            Bound::Lower if entry.value >= beta => Some(entry.value),
            Bound::Upper if entry.value <= alpha => Some(entry.value),
            _ => None,
        }
    }

    /// Record the value of a node searched with the window `(alpha, beta)`.
    pub fn store(&mut self, key: u32, value: i32, alpha: i32, beta: i32) {
        let bound = Bound::classify(value, alpha, beta);
        self.entries.insert(key, TableEntry { value, bound });
    }

    /// Number of positions stored.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
