//! Search module for the Reversi engine
//!
//! Contains:
//! - Zobrist hashing for position identification
//! - Transposition table for caching search results
//! - Killer, history and static move ordering
//! - Alpha-Beta search with iterative deepening under a deadline

pub mod alphabeta;
pub mod ordering;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{Deadline, RootResult, SearchResult, SearchStats, Searcher};
pub use ordering::{HistoryTable, KillerTable, MoveOrderer, DEFAULT_HISTORY_CAPACITY, MAX_PLY};
pub use tt::{EntryType, TTEntry, TTStats, TranspositionTable, DEFAULT_TT_CAPACITY};
pub use zobrist::ZobristTable;
