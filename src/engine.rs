//! Main engine: one time-bounded move decision per call
//!
//! The engine resolves a turn in this order:
//!
//! 1. **Reset**: per-turn killer, history and transposition tables are cleared
//! 2. **Opening**: on the untouched starting position, a random legal move
//! 3. **Pass / forced**: no legal move, or exactly one
//! 4. **Search**: iterative-deepening alpha-beta until the deadline
//! 5. **Fallback**: the first legal move if no depth completed
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use reversi::{Board, Disc, Engine, EngineConfig};
//!
//! let config = EngineConfig {
//!     time_limit: Duration::from_millis(100),
//!     max_depth: 3,
//!     seed: Some(7),
//!     ..EngineConfig::default()
//! };
//! let mut engine = Engine::with_config(config);
//! let board = Board::initial(8).unwrap();
//!
//! let result = engine.select_move_with_stats(&board, Disc::Black, Disc::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Selected by: {:?}", result.kind);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Duration;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Disc, Pos};
use crate::eval::{EvalWeights, Evaluator};
use crate::rules::legal_moves;
use crate::search::{Deadline, Searcher, DEFAULT_HISTORY_CAPACITY, DEFAULT_TT_CAPACITY};

/// Default per-move budget
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_millis(1950);

/// Default iterative-deepening ceiling
pub const DEFAULT_MAX_DEPTH: u8 = 25;

/// Disc count of the untouched starting position
const OPENING_DISCS: usize = 4;

/// Which path of the turn produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// Random move on the starting position
    Opening,
    /// No legal move; the player passes
    Pass,
    /// Exactly one legal move
    Forced,
    /// Result of the deepest completed search iteration
    Search,
    /// First legal move; no iteration finished in time
    Fallback,
}

/// Result of a move decision with search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move, `None` for a pass
    pub best_move: Option<Pos>,
    /// Score of the chosen move (0 when no search ran)
    pub score: f64,
    /// Deepest completed iteration
    pub depth: u8,
    /// Nodes visited
    pub nodes: u64,
    /// Static evaluations performed
    pub leaves: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    pub kind: SelectionKind,
}

impl MoveResult {
    #[inline]
    fn immediate(best_move: Option<Pos>, kind: SelectionKind, time_ms: u64) -> Self {
        Self {
            best_move,
            score: 0.0,
            depth: 0,
            nodes: 0,
            leaves: 0,
            time_ms,
            kind,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Wall-clock budget per move
    pub time_limit: Duration,
    /// Maximum iterative-deepening depth
    pub max_depth: u8,
    /// Transposition table entries before FIFO eviction
    pub tt_capacity: usize,
    /// History table entries before the weakest is evicted
    pub history_capacity: usize,
    pub weights: EvalWeights,
    /// Seed for the opening move; entropy when `None`
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            max_depth: DEFAULT_MAX_DEPTH,
            tt_capacity: DEFAULT_TT_CAPACITY,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            weights: EvalWeights::default(),
            seed: None,
        }
    }
}

/// Reversi engine.
///
/// Owns the search session, whose tables live for exactly one call to
/// [`Engine::select_move`]. The evaluator is rebuilt whenever the board size
/// changes between calls.
///
/// # Example
///
/// ```
/// use reversi::{Board, Disc, Engine};
///
/// let mut engine = Engine::new();
/// engine.set_time_limit(50);
/// engine.set_max_depth(2);
///
/// let board = Board::initial(6).unwrap();
/// if let Some(pos) = engine.select_move(&board, Disc::White, Disc::Black) {
///     println!("Play at {}", pos);
/// }
/// ```
pub struct Engine {
    searcher: Searcher,
    evaluator: Option<Evaluator>,
    config: EngineConfig,
    rng: StdRng,
}

impl Engine {
    /// Create an engine with default settings.
    ///
    /// Default configuration:
    /// - 1950 ms per move
    /// - Maximum depth of 25
    /// - 1,000,000 transposition and history entries
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            searcher: Searcher::new(config.tt_capacity, config.history_capacity),
            evaluator: None,
            config,
            rng,
        }
    }

    /// Choose a move for `player`; `None` means pass.
    ///
    /// `opponent` should be the other color. The minimizing side is always
    /// `player.opponent()`; a mismatched pair is logged and ignored.
    #[must_use]
    pub fn select_move(&mut self, board: &Board, player: Disc, opponent: Disc) -> Option<Pos> {
        self.select_move_with_stats(board, player, opponent).best_move
    }

    /// Choose a move and report how it was found.
    ///
    /// Never fails and never overruns the budget by more than one node's
    /// worth of work.
    pub fn select_move_with_stats(
        &mut self,
        board: &Board,
        player: Disc,
        opponent: Disc,
    ) -> MoveResult {
        let deadline = Deadline::after(self.config.time_limit);
        if opponent != player.opponent() {
            warn!(
                "opponent {:?} does not match player {:?}; searching against {:?}",
                opponent,
                player,
                player.opponent()
            );
        }
        let opponent = player.opponent();

        // Per-turn state must not leak across turns, whatever path we take
        self.searcher.reset();

        let moves = legal_moves(board, player);
        let elapsed_ms = |d: &Deadline| d.elapsed().as_millis() as u64;

        if board.disc_count() == OPENING_DISCS {
            if let Some(&mov) = moves.choose(&mut self.rng) {
                info!("{:?} opens with {}", player, mov);
                let time_ms = elapsed_ms(&deadline);
                return MoveResult::immediate(Some(mov), SelectionKind::Opening, time_ms);
            }
        }

        match moves.as_slice() {
            [] => {
                info!("{:?} has no legal move and passes to {:?}", player, opponent);
                return MoveResult::immediate(None, SelectionKind::Pass, elapsed_ms(&deadline));
            }
            [only] => {
                info!("{:?} plays forced move {}", player, only);
                let time_ms = elapsed_ms(&deadline);
                return MoveResult::immediate(Some(*only), SelectionKind::Forced, time_ms);
            }
            _ => {}
        }

        self.refresh_evaluator(board.size());
        let Some(evaluator) = self.evaluator.as_ref() else {
            return MoveResult::immediate(
                moves.first().copied(),
                SelectionKind::Fallback,
                elapsed_ms(&deadline),
            );
        };

        let result = self.searcher.search_timed(
            evaluator,
            board,
            player,
            self.config.max_depth,
            &deadline,
        );

        let (best_move, kind) = match result.best_move {
            Some(mov) if result.depth > 0 => (Some(mov), SelectionKind::Search),
            _ => (moves.first().copied(), SelectionKind::Fallback),
        };

        let time_ms = elapsed_ms(&deadline);
        info!(
            "{:?} plays {:?} ({:?}, depth {}, score {:.2}, {} nodes, {}ms)",
            player, best_move, kind, result.depth, result.score, result.stats.nodes, time_ms
        );

        MoveResult {
            best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.stats.nodes,
            leaves: result.stats.leaves,
            time_ms,
            kind,
        }
    }

    /// Rebuild the evaluator when the board size changes.
    fn refresh_evaluator(&mut self, size: usize) {
        let stale = self
            .evaluator
            .as_ref()
            .map_or(true, |e| e.positional().size() != size);
        if stale {
            match Evaluator::new(self.config.weights.clone(), size) {
                Ok(evaluator) => {
                    debug!("built evaluator for {}x{}", size, size);
                    self.evaluator = Some(evaluator);
                }
                Err(e) => {
                    warn!("cannot evaluate board: {}", e);
                    self.evaluator = None;
                }
            }
        }
    }

    /// Set the time budget per move.
    ///
    /// # Arguments
    ///
    /// * `time_ms` - Time limit in milliseconds
    pub fn set_time_limit(&mut self, time_ms: u64) {
        self.config.time_limit = Duration::from_millis(time_ms);
    }

    /// Set the maximum iterative-deepening depth.
    pub fn set_max_depth(&mut self, depth: u8) {
        self.config.max_depth = depth;
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The search session, for inspecting per-turn tables
    #[must_use]
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
