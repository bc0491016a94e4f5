//! Zobrist hashing for position identification
//!
//! Each (cell, color) pair gets a fixed pseudo-random key; a position hashes
//! to the XOR of the keys of its occupied cells plus a side-to-move key. Keys
//! are laid out on a 12x12 grid so one table serves every supported board
//! size.
//!
//! # Example
//!
//! ```
//! use reversi::board::{Board, Disc};
//! use reversi::search::ZobristTable;
//!
//! let zt = ZobristTable::new();
//! let board = Board::initial(8).unwrap();
//!
//! // Same discs, different side to move: different keys
//! assert_ne!(zt.hash(&board, Disc::Black), zt.hash(&board, Disc::White));
//! ```

use crate::board::{Board, Disc, Pos, MAX_CELLS, MAX_SIZE};

/// Zobrist hash table for position hashing.
pub struct ZobristTable {
    /// Random values for black discs at each cell
    black: [u64; MAX_CELLS],
    /// Random values for white discs at each cell
    white: [u64; MAX_CELLS],
    /// Random value XORed when black is to move
    black_to_move: u64,
}

impl ZobristTable {
    /// Create a new Zobrist table with deterministic random values.
    ///
    /// Uses a linear congruential generator (LCG) with a fixed seed
    /// to ensure reproducible hashes across different runs.
    #[must_use]
    pub fn new() -> Self {
        // Constants from Knuth's MMIX LCG
        let mut seed: u64 = 0x1234_5678_9ABC_DEF0;
        let mut next_rand = || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            // Mix the high bits down; raw LCG low bits are weak
            seed ^ (seed >> 29)
        };

        let mut black = [0u64; MAX_CELLS];
        let mut white = [0u64; MAX_CELLS];

        for i in 0..MAX_CELLS {
            black[i] = next_rand();
            white[i] = next_rand();
        }

        Self {
            black,
            white,
            black_to_move: next_rand(),
        }
    }

    #[inline]
    fn slot(pos: Pos) -> usize {
        pos.row as usize * MAX_SIZE + pos.col as usize
    }

    /// Compute the full hash for a board position.
    #[must_use]
    pub fn hash(&self, board: &Board, side_to_move: Disc) -> u64 {
        let mut h = 0u64;

        for (pos, disc) in board.iter() {
            match disc {
                Disc::Black => h ^= self.black[Self::slot(pos)],
                Disc::White => h ^= self.white[Self::slot(pos)],
                Disc::Empty => {}
            }
        }

        if side_to_move == Disc::Black {
            h ^= self.black_to_move;
        }

        h
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::make_move;

    #[test]
    fn test_zobrist_empty_board() {
        let zt = ZobristTable::new();
        let board = Board::new(8).unwrap();

        assert_eq!(zt.hash(&board, Disc::White), 0);
        assert_ne!(zt.hash(&board, Disc::Black), 0);
    }

    #[test]
    fn test_zobrist_deterministic() {
        let zt1 = ZobristTable::new();
        let zt2 = ZobristTable::new();
        let board = Board::initial(10).unwrap();
        assert_eq!(zt1.hash(&board, Disc::Black), zt2.hash(&board, Disc::Black));
    }

    #[test]
    fn test_zobrist_transposition() {
        // Two move orders reaching the same position hash the same
        let zt = ZobristTable::new();
        let start = Board::initial(8).unwrap();

        let a = make_move(&start, Pos::new(2, 3), Disc::Black);
        let a = make_move(&a, Pos::new(2, 2), Disc::White);
        let a = make_move(&a, Pos::new(3, 2), Disc::Black);

        let b = make_move(&start, Pos::new(3, 2), Disc::Black);
        let b = make_move(&b, Pos::new(2, 2), Disc::White);
        let b = make_move(&b, Pos::new(2, 3), Disc::Black);

        assert_eq!(a, b);
        assert_eq!(zt.hash(&a, Disc::White), zt.hash(&b, Disc::White));
    }

    #[test]
    fn test_zobrist_distinguishes_color() {
        let zt = ZobristTable::new();
        let mut b1 = Board::new(6).unwrap();
        let mut b2 = Board::new(6).unwrap();
        b1.place(Pos::new(2, 2), Disc::Black);
        b2.place(Pos::new(2, 2), Disc::White);
        assert_ne!(zt.hash(&b1, Disc::Black), zt.hash(&b2, Disc::Black));
    }
}
