//! Reversi engine with time-bounded iterative-deepening search
//!
//! A move-selection engine for Reversi (Othello) on square boards of side
//! 6, 8, 10 or 12:
//! - Standard opening with four center discs
//! - A move must flip at least one line of opponent discs
//! - A player with no legal move passes
//! - The game ends when neither player can move
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and coordinates
//! - [`rules`]: Move generation, flipping and end-of-game detection
//! - [`eval`]: Phase-weighted position evaluation
//! - [`search`]: Alpha-beta search, transposition table and move ordering
//! - [`engine`]: Per-turn driver integrating all components
//! - [`error`]: Error types
//!
//! # Quick Start
//!
//! ```
//! use reversi::{Board, Disc, Engine, Pos};
//! use reversi::rules::make_move;
//!
//! let mut engine = Engine::new();
//! engine.set_time_limit(100);
//! engine.set_max_depth(3);
//!
//! // Past the opening, so the engine searches
//! let board = Board::initial(8).unwrap();
//! let board = make_move(&board, Pos::new(2, 3), Disc::Black);
//!
//! if let Some(pos) = engine.select_move(&board, Disc::White, Disc::Black) {
//!     println!("White plays at {}", pos);
//! }
//! ```
//!
//! # Search Order
//!
//! Each call to [`Engine::select_move`]:
//! 1. Clears the per-turn tables
//! 2. Plays a random move on the untouched starting position
//! 3. Passes or plays the only legal move without searching
//! 4. Deepens alpha-beta one ply at a time until the time budget runs out

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Disc, Pos, SUPPORTED_SIZES};
pub use engine::{Engine, EngineConfig, MoveResult, SelectionKind};
pub use error::{EngineError, EngineResult, SearchError};
