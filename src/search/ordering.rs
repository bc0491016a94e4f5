//! Move ordering: killer moves, history heuristic and static signals
//!
//! Trying strong moves first is what makes alpha-beta prune. Each candidate
//! gets a composite score and the list is sorted best-first; equal scores keep
//! their enumeration order.

use std::collections::HashMap;

use crate::board::{Board, Disc, Pos};
use crate::eval::{stable_discs, PositionalWeights};
use crate::rules::{flip_count, make_move};

/// Plies tracked by the killer table
pub const MAX_PLY: usize = 64;

/// Default number of moves the history table remembers
pub const DEFAULT_HISTORY_CAPACITY: usize = 1_000_000;

const KILLER_BONUS: i64 = 1000;
const CORNER_BONUS: i64 = 1000;
const STABILITY_FACTOR: i64 = 20;
const HISTORY_FACTOR: i64 = 20;
const POSITION_FACTOR: i64 = 10;
const CAPTURE_FACTOR: i64 = 5;

/// Up to two cutoff moves per ply, oldest first.
#[derive(Debug, Clone)]
pub struct KillerTable {
    slots: [[Option<Pos>; 2]; MAX_PLY],
}

impl KillerTable {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: [[None; 2]; MAX_PLY],
        }
    }

    /// Remember `mov` as a cutoff move at `ply`.
    ///
    /// Already-known moves are left in place; a third move pushes out the
    /// oldest.
    pub fn record(&mut self, ply: usize, mov: Pos) {
        let Some(slot) = self.slots.get_mut(ply) else {
            return;
        };
        if slot.contains(&Some(mov)) {
            return;
        }
        *slot = match *slot {
            [None, newer] => [Some(mov), newer],
            [older, None] => [older, Some(mov)],
            [_, newer] => [newer, Some(mov)],
        };
    }

    #[inline]
    #[must_use]
    pub fn is_killer(&self, ply: usize, mov: Pos) -> bool {
        self.slots
            .get(ply)
            .is_some_and(|slot| slot.contains(&Some(mov)))
    }

    /// Killer moves at `ply`, oldest first
    #[must_use]
    pub fn get(&self, ply: usize) -> Vec<Pos> {
        self.slots
            .get(ply)
            .map(|slot| slot.iter().flatten().copied().collect())
            .unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.slots = [[None; 2]; MAX_PLY];
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot == &[None, None])
    }
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulated 2^depth credit for moves that improved a node's best score.
///
/// Keyed by square only, shared by both colors and all plies.
#[derive(Debug, Clone)]
pub struct HistoryTable {
    scores: HashMap<Pos, u64>,
    capacity: usize,
}

impl HistoryTable {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            scores: HashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Credit `mov` with 2^depth.
    ///
    /// When the table is full and `mov` is new, the lowest-scored entry
    /// (lowest row, then column, on ties) is dropped first.
    pub fn add(&mut self, mov: Pos, depth: u8) {
        if !self.scores.contains_key(&mov) && self.scores.len() >= self.capacity {
            let weakest = self
                .scores
                .iter()
                .min_by_key(|(p, &v)| (v, p.row, p.col))
                .map(|(&p, _)| p);
            if let Some(p) = weakest {
                self.scores.remove(&p);
            }
        }
        let bonus = 1u64 << u32::from(depth).min(63);
        let entry = self.scores.entry(mov).or_insert(0);
        *entry = entry.saturating_add(bonus);
    }

    #[inline]
    #[must_use]
    pub fn get(&self, mov: Pos) -> u64 {
        self.scores.get(&mov).copied().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.scores.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

/// Borrowed view of everything the orderer reads
pub struct MoveOrderer<'a> {
    pub killers: &'a KillerTable,
    pub history: &'a HistoryTable,
    pub positional: &'a PositionalWeights,
}

impl MoveOrderer<'_> {
    /// Composite ordering score for playing `mov` as `color` at `ply`.
    #[must_use]
    pub fn score_move(&self, board: &Board, mov: Pos, color: Disc, ply: usize) -> i64 {
        let size = board.size();
        let mut score = 0i64;

        if self.killers.is_killer(ply, mov) {
            score += KILLER_BONUS;
        }

        if mov.is_corner(size) {
            score += CORNER_BONUS;
        }

        let after = make_move(board, mov, color);
        let stable = i64::try_from(stable_discs(&after, color)).unwrap_or(i64::MAX);
        score = score.saturating_add(stable.saturating_mul(STABILITY_FACTOR));

        let history = i64::try_from(self.history.get(mov)).unwrap_or(i64::MAX);
        score = score.saturating_add(history.saturating_mul(HISTORY_FACTOR));

        score += i64::from(self.positional.get(mov)) * POSITION_FACTOR;

        let flips = i64::try_from(flip_count(board, mov, color)).unwrap_or(0);
        score = score.saturating_add(flips * CAPTURE_FACTOR);

        score
    }

    /// Sort `moves` best-first. Off-board candidates are dropped.
    #[must_use]
    pub fn order(&self, board: &Board, moves: &[Pos], color: Disc, ply: usize) -> Vec<Pos> {
        let size = board.size();
        let mut scored: Vec<(i64, Pos)> = moves
            .iter()
            .filter(|m| (m.row as usize) < size && (m.col as usize) < size)
            .map(|&m| (self.score_move(board, m, color, ply), m))
            .collect();

        // Stable sort keeps enumeration order among equal scores
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, m)| m).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_killer_keeps_two_newest() {
        let mut k = KillerTable::new();
        let (a, b, c) = (Pos::new(0, 1), Pos::new(2, 3), Pos::new(4, 5));

        k.record(3, a);
        k.record(3, b);
        assert_eq!(k.get(3), vec![a, b]);

        // Re-recording a known killer changes nothing
        k.record(3, a);
        assert_eq!(k.get(3), vec![a, b]);

        k.record(3, c);
        assert_eq!(k.get(3), vec![b, c]);
        assert!(!k.is_killer(3, a));
        assert!(k.is_killer(3, c));
        assert!(!k.is_killer(2, c), "killers are per ply");
    }

    #[test]
    fn test_killer_out_of_range_ply_ignored() {
        let mut k = KillerTable::new();
        k.record(MAX_PLY + 5, Pos::new(1, 1));
        assert!(k.is_empty());
        assert!(!k.is_killer(MAX_PLY + 5, Pos::new(1, 1)));
        assert!(k.get(MAX_PLY + 5).is_empty());
    }

    #[test]
    fn test_killer_clear() {
        let mut k = KillerTable::new();
        k.record(0, Pos::new(1, 1));
        assert!(!k.is_empty());
        k.clear();
        assert!(k.is_empty());
    }

    #[test]
    fn test_history_accumulates_powers_of_two() {
        let mut h = HistoryTable::new(10);
        let m = Pos::new(2, 2);
        h.add(m, 3);
        h.add(m, 1);
        assert_eq!(h.get(m), 8 + 2);
        assert_eq!(h.get(Pos::new(0, 0)), 0);
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn test_history_evicts_weakest_when_full() {
        let mut h = HistoryTable::new(2);
        h.add(Pos::new(0, 0), 4);
        h.add(Pos::new(1, 1), 1);
        // Existing key at capacity: no eviction
        h.add(Pos::new(0, 0), 1);
        assert_eq!(h.len(), 2);

        h.add(Pos::new(2, 2), 2);
        assert_eq!(h.len(), 2);
        assert_eq!(h.get(Pos::new(1, 1)), 0, "lowest entry should be dropped");
        assert_eq!(h.get(Pos::new(0, 0)), 18);
        assert_eq!(h.get(Pos::new(2, 2)), 4);

        h.clear();
        assert!(h.is_empty());
    }

    fn corner_and_edge_board() -> Board {
        // Black can take the corner (0,0) or play (2,2); both flip one disc
        Board::from_rows(&[
            ".WB...",
            "..W...",
            "......",
            "......",
            "......",
            "......",
        ])
        .unwrap()
    }

    #[test]
    fn test_corner_move_ordered_first() {
        let board = corner_and_edge_board();
        let killers = KillerTable::new();
        let history = HistoryTable::new(16);
        let positional = PositionalWeights::for_size(6).unwrap();
        let orderer = MoveOrderer {
            killers: &killers,
            history: &history,
            positional: &positional,
        };

        let corner = Pos::new(0, 0);
        let other = Pos::new(2, 2);
        assert_eq!(flip_count(&board, corner, Disc::Black), 1);
        assert_eq!(flip_count(&board, other, Disc::Black), 1);

        let ordered = orderer.order(&board, &[other, corner], Disc::Black, 0);
        assert_eq!(ordered, vec![corner, other]);
    }

    #[test]
    fn test_killer_lifts_move() {
        let board = corner_and_edge_board();
        let mut killers = KillerTable::new();
        let history = HistoryTable::new(16);
        let positional = PositionalWeights::for_size(6).unwrap();
        let other = Pos::new(2, 2);

        let base = MoveOrderer {
            killers: &killers,
            history: &history,
            positional: &positional,
        }
        .score_move(&board, other, Disc::Black, 1);

        killers.record(1, other);
        let orderer = MoveOrderer {
            killers: &killers,
            history: &history,
            positional: &positional,
        };
        assert_eq!(orderer.score_move(&board, other, Disc::Black, 1), base + 1000);
        // Other plies unaffected
        assert_eq!(orderer.score_move(&board, other, Disc::Black, 2), base);
    }

    #[test]
    fn test_ties_keep_enumeration_order_and_skip_off_board() {
        let board = Board::initial(8).unwrap();
        let killers = KillerTable::new();
        let history = HistoryTable::new(16);
        let positional = PositionalWeights::for_size(8).unwrap();
        let orderer = MoveOrderer {
            killers: &killers,
            history: &history,
            positional: &positional,
        };

        // The four opening moves are symmetric and score the same
        let moves = vec![
            Pos::new(2, 3),
            Pos::new(3, 2),
            Pos::new(9, 9),
            Pos::new(4, 5),
            Pos::new(5, 4),
        ];
        let ordered = orderer.order(&board, &moves, Disc::Black, 0);
        assert_eq!(
            ordered,
            vec![
                Pos::new(2, 3),
                Pos::new(3, 2),
                Pos::new(4, 5),
                Pos::new(5, 4)
            ]
        );
    }
}
