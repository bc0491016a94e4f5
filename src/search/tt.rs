//! Transposition Table for caching search results
//!
//! The transposition table stores search results indexed by board hash,
//! enabling reuse of previous search results for positions reached through a
//! different move order.
//!
//! # Example
//!
//! ```
//! use reversi::search::{EntryType, TranspositionTable};
//!
//! let mut tt = TranspositionTable::new(1024);
//!
//! // Store a search result
//! let hash = 0x123456789ABCDEF0;
//! tt.store(hash, 5, 100.0, EntryType::Exact);
//!
//! // Probe for the result
//! if let Some(score) = tt.probe(hash, 5, -1000.0, 1000.0) {
//!     println!("Found cached result: score={}", score);
//! }
//! ```

use std::collections::{HashMap, VecDeque};

/// Default number of entries before FIFO eviction starts
pub const DEFAULT_TT_CAPACITY: usize = 1_000_000;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the search completed inside the window
    Exact,
    /// Lower bound - true score >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - true score <= stored value (alpha fail-low)
    UpperBound,
}

/// Transposition table entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTEntry {
    /// Remaining depth the score was searched to
    pub depth: u8,
    /// Evaluation score, from the root player's side
    pub score: f64,
    /// Type of score (exact, lower bound, upper bound)
    pub entry_type: EntryType,
}

/// Transposition table for caching search results.
///
/// Keyed by full 64-bit hash. An entry is only replaced by a strictly deeper
/// result. Keys are remembered in insertion order and the oldest is evicted
/// once the table grows past its capacity.
pub struct TranspositionTable {
    entries: HashMap<u64, TTEntry>,
    order: VecDeque<u64>,
    capacity: usize,
}

impl TranspositionTable {
    /// Create a table holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Probe the table for a position.
    ///
    /// Returns the cached score when the stored search was at least `depth`
    /// deep and its bound type settles the current `[alpha, beta]` window.
    ///
    /// # Arguments
    ///
    /// * `hash` - Zobrist hash of the position
    /// * `depth` - Remaining depth of the current node
    /// * `alpha` - Current alpha bound
    /// * `beta` - Current beta bound
    #[must_use]
    pub fn probe(&self, hash: u64, depth: u8, alpha: f64, beta: f64) -> Option<f64> {
        let entry = self.entries.get(&hash)?;

        if entry.depth < depth {
            return None;
        }

        match entry.entry_type {
            EntryType::Exact => Some(entry.score),
            EntryType::LowerBound if entry.score >= beta => Some(entry.score),
            EntryType::UpperBound if entry.score <= alpha => Some(entry.score),
            _ => None,
        }
    }

    /// Raw entry lookup, regardless of depth or bounds
    #[must_use]
    pub fn get(&self, hash: u64) -> Option<&TTEntry> {
        self.entries.get(&hash)
    }

    /// Store a position in the table.
    ///
    /// An existing entry is overwritten only by a strictly deeper search.
    /// Returns whether the entry was written.
    pub fn store(&mut self, hash: u64, depth: u8, score: f64, entry_type: EntryType) -> bool {
        let entry = TTEntry {
            depth,
            score,
            entry_type,
        };

        if let Some(existing) = self.entries.get_mut(&hash) {
            if existing.depth >= depth {
                return false;
            }
            *existing = entry;
            return true;
        }

        self.entries.insert(hash, entry);
        self.order.push_back(hash);

        if self.entries.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        true
    }

    /// Clear all entries in the table.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        let used = self.entries.len();
        TTStats {
            size: self.capacity,
            used,
            usage_percent: (used as f64 / self.capacity as f64 * 100.0) as u8,
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_TT_CAPACITY)
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy)]
pub struct TTStats {
    /// Maximum number of entries
    pub size: usize,
    /// Number of entries currently stored
    pub used: usize,
    /// Percentage of table in use (0-100)
    pub usage_percent: u8,
}
