//! Heuristic evaluation function for Reversi board positions
//!
//! This module provides the static evaluation used at the leaves of the
//! minimax search. It scores positions on:
//! - Material (disc difference)
//! - Corner ownership
//! - Mobility (legal-move differential, as a percentage)
//! - Stability (corner-anchored discs)
//! - Frontier discs (discs touching an empty cell)
//! - Empty-cell parity
//! - Square values from the positional table
//! - Potential mobility (empty cells next to opponent discs)
//!
//! Scores are always from the perspective of the player passed in; the
//! search evaluates every leaf for the root player.

use crate::board::{corners, Board, Disc, Pos};
use crate::error::EngineResult;
use crate::rules::{legal_moves, DIRECTIONS};

use super::stability::stable_discs;
use super::weights::{EvalWeights, GamePhase, PositionalWeights};

/// Bonus when the opponent is left without a legal move
pub const NO_MOVE_BONUS: f64 = 1000.0;

/// Raw factor values before weighting, all from the evaluated player's side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalFactors {
    pub phase: GamePhase,
    pub pieces: f64,
    pub corners: f64,
    pub mobility: f64,
    pub stability: f64,
    pub frontier: f64,
    pub parity: f64,
    pub position: f64,
    pub potential_mobility: f64,
    /// Legal moves available to the opponent
    pub opponent_moves: usize,
}

/// Position evaluator bound to one board size.
#[derive(Debug, Clone)]
pub struct Evaluator {
    weights: EvalWeights,
    positional: PositionalWeights,
}

impl Evaluator {
    /// Evaluator for boards of side `board_size`
    pub fn new(weights: EvalWeights, board_size: usize) -> EngineResult<Self> {
        Ok(Self {
            weights,
            positional: PositionalWeights::for_size(board_size)?,
        })
    }

    #[inline]
    pub fn positional(&self) -> &PositionalWeights {
        &self.positional
    }

    #[inline]
    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Evaluate the board from the perspective of `player`.
    ///
    /// Positive values favour `player`. There is no fixed range.
    #[must_use]
    pub fn evaluate(&self, board: &Board, player: Disc) -> f64 {
        let f = self.factors(board, player);
        let (w, potential_weight) = self.weights.resolve(f.phase, board.size());

        let mut score = w.pieces * f.pieces
            + w.corners * f.corners
            + w.mobility * f.mobility
            + w.stability * f.stability
            + w.frontier * f.frontier
            + w.parity * f.parity
            + w.position * f.position
            + potential_weight * f.potential_mobility;

        if f.opponent_moves == 0 {
            score += NO_MOVE_BONUS;
        }

        score
    }

    /// Compute every unweighted factor for `player`
    #[must_use]
    pub fn factors(&self, board: &Board, player: Disc) -> EvalFactors {
        let opponent = player.opponent();
        let size = board.size();

        let player_discs = board.count(player);
        let opponent_discs = board.count(opponent);

        let corner_diff = corners(size)
            .iter()
            .map(|&c| match board.get(c) {
                d if d == player => 1i32,
                d if d == opponent => -1,
                _ => 0,
            })
            .sum::<i32>();

        let player_moves = legal_moves(board, player).len();
        let opponent_moves = legal_moves(board, opponent).len();
        let mobility = if player_moves + opponent_moves > 0 {
            100.0 * (player_moves as f64 - opponent_moves as f64)
                / (player_moves + opponent_moves) as f64
        } else {
            0.0
        };

        let stability =
            stable_discs(board, player) as f64 - stable_discs(board, opponent) as f64;
        let frontier =
            frontier_discs(board, player) as f64 - frontier_discs(board, opponent) as f64;
        let parity = if board.empty_count() % 2 == 0 { 1.0 } else { -1.0 };

        let mut position = 0i32;
        for (pos, disc) in board.iter() {
            if disc == player {
                position += self.positional.get(pos);
            } else if disc == opponent {
                position -= self.positional.get(pos);
            }
        }

        EvalFactors {
            phase: GamePhase::of(board),
            pieces: player_discs as f64 - opponent_discs as f64,
            corners: f64::from(corner_diff),
            mobility,
            stability,
            frontier,
            parity,
            position: f64::from(position),
            potential_mobility: potential_mobility(board, opponent) as f64,
            opponent_moves,
        }
    }
}

/// True if any of the eight neighbours of `pos` holds `target`
#[inline]
fn touches(board: &Board, pos: Pos, target: Disc) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        pos.offset(dr, dc, board.size())
            .is_some_and(|n| board.get(n) == target)
    })
}

/// Discs of `color` adjacent to at least one empty cell (each counted once)
#[must_use]
pub fn frontier_discs(board: &Board, color: Disc) -> usize {
    board
        .iter()
        .filter(|&(pos, d)| d == color && touches(board, pos, Disc::Empty))
        .count()
}

/// Empty cells adjacent to at least one `opponent` disc
#[must_use]
pub fn potential_mobility(board: &Board, opponent: Disc) -> usize {
    board
        .iter()
        .filter(|&(pos, d)| d == Disc::Empty && touches(board, pos, opponent))
        .count()
}
