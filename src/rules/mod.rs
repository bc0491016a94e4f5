//! Game rules for Reversi
//!
//! This module implements the rule set the search consumes:
//! - Legal move enumeration
//! - Flip counting and move application
//! - End-of-game detection

pub mod moves;

// Re-exports for convenient access
pub use moves::{
    flip_count, flipped_positions, has_legal_move, is_terminal, legal_moves, make_move,
    DIRECTIONS, ORTHOGONAL,
};
