//! Alpha-Beta search with iterative deepening and transposition table
//!
//! This module implements the core search algorithm for the Reversi engine:
//! minimax with alpha-beta pruning, where the root player maximizes and the
//! opponent minimizes. Every leaf is scored from the root player's side.
//!
//! # Features
//!
//! - Iterative deepening under a wall-clock deadline
//! - Transposition table with bound-typed entries
//! - Killer-move and history heuristics for move ordering
//! - Forced passes that do not consume search depth
//!
//! # Example
//!
//! ```
//! use reversi::board::{Board, Disc};
//! use reversi::eval::{EvalWeights, Evaluator};
//! use reversi::search::Searcher;
//!
//! let mut searcher = Searcher::new(1 << 16, 1 << 10);
//! let evaluator = Evaluator::new(EvalWeights::default(), 8).unwrap();
//! let board = Board::initial(8).unwrap();
//!
//! let result = searcher.search(&evaluator, &board, Disc::Black, 3);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Disc, Pos};
use crate::error::SearchError;
use crate::eval::Evaluator;
use crate::rules::{has_legal_move, legal_moves, make_move};

use super::ordering::{HistoryTable, KillerTable, MoveOrderer};
use super::{EntryType, TTStats, TranspositionTable, ZobristTable};

/// Infinity score for alpha-beta bounds
const INF: f64 = f64::INFINITY;

/// Wall-clock cut-off for one turn.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    limit: Option<Duration>,
}

impl Deadline {
    /// Deadline `limit` from now
    #[must_use]
    pub fn after(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit: Some(limit),
        }
    }

    /// A deadline that never expires (fixed-depth searches)
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            start: Instant::now(),
            limit: None,
        }
    }

    /// True once the budget is spent; never true for an unlimited deadline.
    #[inline]
    pub fn expired(&self) -> bool {
        self.limit.is_some_and(|limit| self.start.elapsed() >= limit)
    }

    /// Cancellation point: fails once the budget is spent.
    #[inline]
    pub fn check(&self) -> Result<(), SearchError> {
        if self.expired() {
            Err(SearchError::DeadlineExceeded)
        } else {
            Ok(())
        }
    }

    /// Wall-clock time since the deadline was created
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Interior and leaf nodes entered
    pub nodes: u64,
    /// Static evaluations performed
    pub leaves: u64,
    /// Total beta cutoffs
    pub beta_cutoffs: u64,
    /// Total TT probes
    pub tt_probes: u64,
    /// TT probes that returned a usable score
    pub tt_hits: u64,
}

impl SearchStats {
    /// TT score hit rate
    pub fn tt_hit_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_hits as f64 / self.tt_probes as f64 * 100.0
        }
    }
}

/// Outcome of one complete root iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct RootResult {
    /// Best root move, None only when the root player has no move
    pub best_move: Option<Pos>,
    /// Score of the best move, root player's perspective
    pub score: f64,
    pub depth: u8,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move from the deepest completed iteration, if any
    pub best_move: Option<Pos>,
    /// Evaluation score of the best move
    pub score: f64,
    /// Depth completed in iterative deepening (0 if none completed)
    pub depth: u8,
    /// True if the deadline cut an iteration short
    pub timed_out: bool,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Read-only inputs shared by every node of one search
struct SearchContext<'a> {
    evaluator: &'a Evaluator,
    deadline: &'a Deadline,
    /// Root player; the maximizing side
    player: Disc,
}

/// Alpha-beta search engine with per-turn killer, history and TT state.
///
/// All tables belong to the current turn. Call [`Searcher::reset`] before
/// searching a new position.
pub struct Searcher {
    zobrist: ZobristTable,
    tt: TranspositionTable,
    killers: KillerTable,
    history: HistoryTable,
    stats: SearchStats,
}

impl Searcher {
    /// Create a new searcher.
    ///
    /// # Arguments
    ///
    /// * `tt_capacity` - Maximum transposition table entries
    /// * `history_capacity` - Maximum history table entries
    #[must_use]
    pub fn new(tt_capacity: usize, history_capacity: usize) -> Self {
        Self {
            zobrist: ZobristTable::new(),
            tt: TranspositionTable::new(tt_capacity),
            killers: KillerTable::new(),
            history: HistoryTable::new(history_capacity),
            stats: SearchStats::default(),
        }
    }

    /// Clear every per-turn table and counter.
    pub fn reset(&mut self) {
        self.tt.clear();
        self.killers.clear();
        self.history.clear();
        self.stats = SearchStats::default();
    }

    #[must_use]
    pub fn killers(&self) -> &KillerTable {
        &self.killers
    }

    #[must_use]
    pub fn history(&self) -> &HistoryTable {
        &self.history
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get statistics about the transposition table.
    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.tt.stats()
    }

    /// Fixed-depth iterative deepening with no deadline.
    ///
    /// Used by tests and benchmarks when deterministic behavior is needed.
    /// Tables are reset first, so repeated calls are independent.
    #[must_use]
    pub fn search(
        &mut self,
        evaluator: &Evaluator,
        board: &Board,
        player: Disc,
        max_depth: u8,
    ) -> SearchResult {
        self.reset();
        self.search_timed(evaluator, board, player, max_depth, &Deadline::unlimited())
    }

    /// Iterative deepening until `max_depth` or the deadline.
    ///
    /// Keeps the result of the deepest iteration whose root loop finished.
    /// An iteration cut off by the deadline is discarded. Tables are NOT
    /// reset here; the caller owns the turn boundary.
    #[must_use]
    pub fn search_timed(
        &mut self,
        evaluator: &Evaluator,
        board: &Board,
        player: Disc,
        max_depth: u8,
        deadline: &Deadline,
    ) -> SearchResult {
        let mut best_result = SearchResult {
            best_move: None,
            score: 0.0,
            depth: 0,
            timed_out: false,
            stats: SearchStats::default(),
        };

        for depth in 1..=max_depth {
            if deadline.expired() {
                best_result.timed_out = true;
                break;
            }

            match self.search_root(evaluator, board, player, depth, deadline) {
                Ok(root) => {
                    debug!(
                        "depth {} done at {:?}: best {:?} score {:.2} nodes {} leaves {}",
                        depth,
                        deadline.elapsed(),
                        root.best_move,
                        root.score,
                        self.stats.nodes,
                        self.stats.leaves
                    );
                    best_result.best_move = root.best_move;
                    best_result.score = root.score;
                    best_result.depth = depth;
                }
                Err(SearchError::DeadlineExceeded) => {
                    debug!(
                        "depth {} abandoned at {:?}, keeping depth {}",
                        depth,
                        deadline.elapsed(),
                        best_result.depth
                    );
                    best_result.timed_out = true;
                    break;
                }
            }
        }

        best_result.stats = self.stats.clone();
        best_result
    }

    /// One root iteration at `depth` (>= 1).
    ///
    /// Alpha rises as each root move completes. A deadline hit anywhere below
    /// aborts the whole iteration.
    pub fn search_root(
        &mut self,
        evaluator: &Evaluator,
        board: &Board,
        player: Disc,
        depth: u8,
        deadline: &Deadline,
    ) -> Result<RootResult, SearchError> {
        let ctx = SearchContext {
            evaluator,
            deadline,
            player,
        };
        let depth = depth.max(1);

        let moves = legal_moves(board, player);
        if moves.is_empty() {
            self.stats.leaves += 1;
            return Ok(RootResult {
                best_move: None,
                score: evaluator.evaluate(board, player),
                depth,
            });
        }
        let ordered = self.order_moves(&ctx, board, &moves, player, 0);

        let mut alpha = -INF;
        let beta = INF;
        let mut best_score = -INF;
        let mut best_move = None;

        for mov in ordered {
            deadline.check()?;

            let child = make_move(board, mov, player);
            let score = self.alpha_beta(&ctx, &child, depth - 1, false, alpha, beta, 1)?;

            if score > best_score || best_move.is_none() {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(best_score);
        }

        Ok(RootResult {
            best_move,
            score: best_score,
            depth,
        })
    }

    fn order_moves(
        &self,
        ctx: &SearchContext<'_>,
        board: &Board,
        moves: &[Pos],
        color: Disc,
        ply: usize,
    ) -> Vec<Pos> {
        MoveOrderer {
            killers: &self.killers,
            history: &self.history,
            positional: ctx.evaluator.positional(),
        }
        .order(board, moves, color, ply)
    }

    /// Recursive minimax with alpha-beta pruning.
    ///
    /// `depth` is the remaining depth, `ply` the distance from the root.
    /// Returns Err as soon as the deadline passes; nothing is cached for a
    /// node whose subtree was cut short.
    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &mut self,
        ctx: &SearchContext<'_>,
        board: &Board,
        depth: u8,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
        ply: usize,
    ) -> Result<f64, SearchError> {
        self.stats.nodes += 1;
        ctx.deadline.check()?;

        if depth == 0 || board.is_full() {
            self.stats.leaves += 1;
            return Ok(ctx.evaluator.evaluate(board, ctx.player));
        }

        let to_move = if maximizing {
            ctx.player
        } else {
            ctx.player.opponent()
        };

        // TT probe
        let hash = self.zobrist.hash(board, to_move);
        self.stats.tt_probes += 1;
        if let Some(score) = self.tt.probe(hash, depth, alpha, beta) {
            self.stats.tt_hits += 1;
            return Ok(score);
        }

        let moves = legal_moves(board, to_move);
        if moves.is_empty() {
            if !has_legal_move(board, to_move.opponent()) {
                // Neither side can move: game over
                self.stats.leaves += 1;
                return Ok(ctx.evaluator.evaluate(board, ctx.player));
            }
            // Forced pass costs no depth
            return self.alpha_beta(ctx, board, depth, !maximizing, alpha, beta, ply + 1);
        }

        let ordered = self.order_moves(ctx, board, &moves, to_move, ply);
        let (alpha_orig, beta_orig) = (alpha, beta);
        let mut best = if maximizing { -INF } else { INF };

        for mov in ordered {
            let child = make_move(board, mov, to_move);
            let score = self.alpha_beta(ctx, &child, depth - 1, !maximizing, alpha, beta, ply + 1)?;

            if maximizing {
                if score > best {
                    best = score;
                    self.history.add(mov, depth);
                }
                alpha = alpha.max(score);
            } else {
                if score < best {
                    best = score;
                    self.history.add(mov, depth);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.beta_cutoffs += 1;
                self.killers.record(ply, mov);
                break;
            }
        }

        let entry_type = if best <= alpha_orig {
            EntryType::UpperBound
        } else if best >= beta_orig {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        };
        self.tt.store(hash, depth, best, entry_type);

        Ok(best)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(super::DEFAULT_TT_CAPACITY, super::DEFAULT_HISTORY_CAPACITY)
    }
}
