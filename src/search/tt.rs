//! Transposition Table for caching search results
//!
//! The transposition table stores search results indexed by board hash,
//! enabling reuse of previous search results for positions we've seen before.
//!
//! # Example
//!
//! ```
//! use breakthru::search::{EntryType, TranspositionTable};
//!
//! let mut tt = TranspositionTable::new(10); // 1024 slots
//!
//! let hash = 0x1234_5678_9ABC_DEF0;
//! tt.store(hash, 3, 42, EntryType::Exact, None);
//!
//! let entry = tt.retrieve(hash).expect("stored entry");
//! assert_eq!(entry.score, 42);
//! assert_eq!(entry.depth, 3);
//! ```

use crate::board::Turn;

/// Default table size: 2^20 slots
pub const DEFAULT_INDEX_BITS: u32 = 20;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the search completed normally
    Exact,
    /// Lower bound - score >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - score <= stored value (alpha fail-low)
    UpperBound,
}

impl EntryType {
    /// Classify a finished node's score against the window it was searched
    /// with (`alpha` before any improvement).
    #[inline]
    pub fn classify(score: i32, alpha: i32, beta: i32) -> Self {
        if score <= alpha {
            EntryType::UpperBound
        } else if score >= beta {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        }
    }
}

/// Transposition table entry
#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    /// Zobrist hash of the position
    pub hash: u64,
    /// Search depth for this entry
    pub depth: i8,
    /// Evaluation score
    pub score: i32,
    /// Type of score (exact, lower bound, upper bound)
    pub entry_type: EntryType,
    /// Best turn found for this position
    pub best_turn: Option<Turn>,
}

/// Transposition table for caching search results.
///
/// Direct-mapped: the low hash bits select exactly one slot. Collisions are
/// resolved by a depth-preferred replacement policy.
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    mask: u64,
}

impl TranspositionTable {
    /// Create a table with `2^index_bits` slots.
    #[must_use]
    pub fn new(index_bits: u32) -> Self {
        let size = 1usize << index_bits;
        Self {
            entries: vec![None; size],
            mask: size as u64 - 1,
        }
    }

    #[inline]
    fn index(&self, hash: u64) -> usize {
        (hash & self.mask) as usize
    }

    /// Look up the entry stored for exactly this hash.
    ///
    /// Returns `None` for an empty slot or a slot holding another position.
    #[must_use]
    pub fn retrieve(&self, hash: u64) -> Option<&TTEntry> {
        self.entries[self.index(hash)]
            .as_ref()
            .filter(|entry| entry.hash == hash)
    }

    /// Store a position in the table.
    ///
    /// An entry is replaced if the slot is empty or the new search is at
    /// least as deep as the existing entry.
    pub fn store(
        &mut self,
        hash: u64,
        depth: i8,
        score: i32,
        entry_type: EntryType,
        best_turn: Option<Turn>,
    ) {
        let idx = self.index(hash);

        let should_replace = match &self.entries[idx] {
            None => true,
            Some(e) => e.depth <= depth,
        };

        if should_replace {
            self.entries[idx] = Some(TTEntry {
                hash,
                depth,
                score,
                entry_type,
                best_turn,
            });
        }
    }

    /// Clear all entries in the table.
    pub fn clear(&mut self) {
        self.entries.fill(None);
    }

    /// Get statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        let size = self.entries.len();
        let used = self.entries.iter().filter(|e| e.is_some()).count();
        TTStats {
            size,
            used,
            usage_percent: (used as f64 / size as f64 * 100.0) as u8,
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_BITS)
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy)]
pub struct TTStats {
    /// Total number of slots in the table
    pub size: usize,
    /// Number of slots currently occupied
    pub used: usize,
    /// Percentage of table in use (0-100)
    pub usage_percent: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Move, Piece, Pos};

    fn sample_turn() -> Turn {
        Turn::single(Move::new(
            Pos::new(5, 5),
            Pos::new(5, 0),
            Piece::Flagship,
            None,
            true,
        ))
    }

    #[test]
    fn test_tt_store_retrieve_exact() {
        let mut tt = TranspositionTable::new(10);
        tt.store(0xABCD, 4, 17, EntryType::Exact, Some(sample_turn()));

        let entry = tt.retrieve(0xABCD).unwrap();
        assert_eq!(entry.entry_type, EntryType::Exact);
        assert_eq!(entry.score, 17);
        assert_eq!(entry.depth, 4);
        assert_eq!(entry.best_turn, Some(sample_turn()));
    }

    #[test]
    fn test_tt_hash_mismatch() {
        let mut tt = TranspositionTable::new(10);
        tt.store(0x0001, 2, 5, EntryType::Exact, None);
        // Same slot (low bits), different position
        assert!(tt.retrieve(0x1_0000_0001).is_none());
        assert!(tt.retrieve(0x0002).is_none());
    }

    #[test]
    fn test_tt_replacement_deeper() {
        let mut tt = TranspositionTable::new(4);
        tt.store(0x10, 2, 1, EntryType::Exact, None);
        tt.store(0x20, 5, 2, EntryType::Exact, None);
        // 0x10 and 0x20 share slot 0
        assert!(tt.retrieve(0x10).is_none());
        assert_eq!(tt.retrieve(0x20).unwrap().score, 2);
    }

    #[test]
    fn test_tt_replacement_same_depth() {
        let mut tt = TranspositionTable::new(4);
        tt.store(0x10, 3, 1, EntryType::Exact, None);
        tt.store(0x20, 3, 2, EntryType::LowerBound, None);
        assert_eq!(tt.retrieve(0x20).unwrap().entry_type, EntryType::LowerBound);
    }

    #[test]
    fn test_tt_no_replacement_shallower() {
        let mut tt = TranspositionTable::new(4);
        tt.store(0x10, 5, 1, EntryType::Exact, None);
        tt.store(0x20, 2, 2, EntryType::Exact, None);
        assert_eq!(tt.retrieve(0x10).unwrap().score, 1);
        assert!(tt.retrieve(0x20).is_none());
    }

    #[test]
    fn test_classify_against_window() {
        let (alpha, beta) = (-10, 10);
        assert_eq!(EntryType::classify(0, alpha, beta), EntryType::Exact);
        assert_eq!(EntryType::classify(-10, alpha, beta), EntryType::UpperBound);
        assert_eq!(EntryType::classify(-50, alpha, beta), EntryType::UpperBound);
        assert_eq!(EntryType::classify(10, alpha, beta), EntryType::LowerBound);
        assert_eq!(EntryType::classify(99, alpha, beta), EntryType::LowerBound);
    }

    #[test]
    fn test_stored_bounds_consistent_with_window() {
        let mut tt = TranspositionTable::new(8);
        let (alpha, beta) = (-20, 20);

        for (hash, score) in [(1u64, 5), (2, 20), (3, -20), (4, 300)] {
            tt.store(hash, 1, score, EntryType::classify(score, alpha, beta), None);
        }

        for hash in 1..=4u64 {
            let entry = tt.retrieve(hash).unwrap();
            match entry.entry_type {
                EntryType::Exact => assert!(alpha < entry.score && entry.score < beta),
                EntryType::LowerBound => assert!(entry.score >= beta),
                EntryType::UpperBound => assert!(entry.score <= alpha),
            }
        }
    }

    #[test]
    fn test_tt_clear_and_stats() {
        let mut tt = TranspositionTable::new(4);
        tt.store(1, 1, 0, EntryType::Exact, None);
        tt.store(2, 1, 0, EntryType::Exact, None);

        let stats = tt.stats();
        assert_eq!(stats.size, 16);
        assert_eq!(stats.used, 2);
        assert_eq!(stats.usage_percent, 12);

        tt.clear();
        assert_eq!(tt.stats().used, 0);
        assert!(tt.retrieve(1).is_none());
    }

    #[test]
    fn test_default_size() {
        let tt = TranspositionTable::default();
        assert_eq!(tt.stats().size, 1 << 20);
    }
}
