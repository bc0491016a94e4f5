//! Evaluation module for Reversi positions
//!
//! This module provides static scoring for board positions.
//! The evaluation considers:
//! - Material, corners and mobility
//! - Corner-anchored stability
//! - Frontier discs and potential mobility
//! - Parity and positional square values

pub mod heuristic;
pub mod stability;
pub mod weights;

pub use heuristic::{frontier_discs, potential_mobility, EvalFactors, Evaluator, NO_MOVE_BONUS};
pub use stability::stable_discs;
pub use weights::{
    EvalWeights, GamePhase, PhaseWeights, PositionalWeights, SizeAdjustments,
    DEFAULT_WEIGHT_VECTOR, WEIGHT_VECTOR_LEN,
};
