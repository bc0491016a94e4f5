//! Evaluation weights and positional tables
//!
//! Everything the evaluator multiplies by lives here: the seven per-phase
//! factor weights (21 numbers in total), the potential-mobility weight per
//! phase, board-size corrections, and the square-value tables for each
//! supported board size.

use crate::board::{Board, Pos};
use crate::error::{EngineError, EngineResult};

/// Number of factor weights per phase
pub const FACTORS_PER_PHASE: usize = 7;

/// Length of the flat phase-weight vector (7 factors x 3 phases)
pub const WEIGHT_VECTOR_LEN: usize = FACTORS_PER_PHASE * 3;

/// Game phase, chosen from the fraction of occupied cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// At most a quarter of the board filled
    Early,
    /// At most three quarters filled
    Mid,
    Late,
}

impl GamePhase {
    #[must_use]
    pub fn of(board: &Board) -> Self {
        Self::from_counts(board.disc_count(), board.total_cells())
    }

    /// Phase from raw disc / cell counts. Boundaries are inclusive.
    #[must_use]
    pub fn from_counts(discs: usize, cells: usize) -> Self {
        // discs <= cells * 0.25 and discs <= cells * 0.75, in integers
        if discs * 4 <= cells {
            GamePhase::Early
        } else if discs * 4 <= cells * 3 {
            GamePhase::Mid
        } else {
            GamePhase::Late
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            GamePhase::Early => 0,
            GamePhase::Mid => 1,
            GamePhase::Late => 2,
        }
    }
}

/// Weights of the seven phase-dependent factors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseWeights {
    pub pieces: f64,
    pub corners: f64,
    pub mobility: f64,
    pub stability: f64,
    pub frontier: f64,
    pub parity: f64,
    pub position: f64,
}

impl PhaseWeights {
    fn from_slice(w: &[f64]) -> Self {
        Self {
            pieces: w[0],
            corners: w[1],
            mobility: w[2],
            stability: w[3],
            frontier: w[4],
            parity: w[5],
            position: w[6],
        }
    }
}

/// Board-size corrections applied on top of the phase weights.
///
/// Small boards reach the edges quickly, so corners, stability and (outside
/// the endgame) mobility matter more; large boards reward keeping options
/// open and punish loose frontiers harder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeAdjustments {
    /// 6x6, early and mid game only
    pub small_mobility: f64,
    /// 6x6
    pub small_corners: f64,
    /// 6x6
    pub small_stability: f64,
    /// 10x10 and 12x12
    pub large_potential_mobility: f64,
    /// 12x12
    pub xl_frontier: f64,
}

impl Default for SizeAdjustments {
    fn default() -> Self {
        Self {
            small_mobility: 15.0,
            small_corners: 30.0,
            small_stability: 10.0,
            large_potential_mobility: 5.0,
            xl_frontier: -5.0,
        }
    }
}

/// Full evaluation weight set
#[derive(Debug, Clone, PartialEq)]
pub struct EvalWeights {
    /// Early, mid, late
    pub phases: [PhaseWeights; 3],
    /// Potential-mobility weight for early, mid, late
    pub potential_mobility: [f64; 3],
    pub size: SizeAdjustments,
}

/// Tuned phase weights: pieces, corners, mobility, stability, frontier,
/// parity, position for early / mid / late game.
pub const DEFAULT_WEIGHT_VECTOR: [f64; WEIGHT_VECTOR_LEN] = [
    5.0, 40.0, 10.0, 15.0, -5.0, 0.0, 15.0, // early
    10.0, 60.0, 15.0, 20.0, -10.0, 0.0, 10.0, // mid
    20.0, 50.0, 5.0, 30.0, -15.0, 10.0, 5.0, // late: parity only counts here
];

const DEFAULT_POTENTIAL_MOBILITY: [f64; 3] = [7.0, 5.0, 2.0];

impl Default for EvalWeights {
    fn default() -> Self {
        // DEFAULT_WEIGHT_VECTOR has the right length by construction
        Self::build(&DEFAULT_WEIGHT_VECTOR)
    }
}

impl EvalWeights {
    /// Build from a flat 21-entry vector, keeping the default
    /// potential-mobility weights and size adjustments.
    pub fn from_vector(vector: &[f64]) -> EngineResult<Self> {
        if vector.len() != WEIGHT_VECTOR_LEN {
            return Err(EngineError::WeightVectorLength {
                expected: WEIGHT_VECTOR_LEN,
                got: vector.len(),
            });
        }
        Ok(Self::build(vector))
    }

    /// `vector` must hold WEIGHT_VECTOR_LEN entries
    fn build(vector: &[f64]) -> Self {
        let n = FACTORS_PER_PHASE;
        Self {
            phases: [
                PhaseWeights::from_slice(&vector[..n]),
                PhaseWeights::from_slice(&vector[n..2 * n]),
                PhaseWeights::from_slice(&vector[2 * n..3 * n]),
            ],
            potential_mobility: DEFAULT_POTENTIAL_MOBILITY,
            size: SizeAdjustments::default(),
        }
    }

    /// Flatten back into the 21-entry vector layout
    #[must_use]
    pub fn to_vector(&self) -> Vec<f64> {
        self.phases
            .iter()
            .flat_map(|p| {
                [
                    p.pieces,
                    p.corners,
                    p.mobility,
                    p.stability,
                    p.frontier,
                    p.parity,
                    p.position,
                ]
            })
            .collect()
    }

    /// Effective weights for a phase on a board of side `board_size`.
    ///
    /// Returns the seven factor weights and the potential-mobility weight.
    #[must_use]
    pub fn resolve(&self, phase: GamePhase, board_size: usize) -> (PhaseWeights, f64) {
        let mut w = self.phases[phase.index()];
        let mut potential = self.potential_mobility[phase.index()];
        let adj = &self.size;

        match board_size {
            6 => {
                if phase != GamePhase::Late {
                    w.mobility += adj.small_mobility;
                }
                w.corners += adj.small_corners;
                w.stability += adj.small_stability;
            }
            10 => {
                potential += adj.large_potential_mobility;
            }
            12 => {
                potential += adj.large_potential_mobility;
                w.frontier += adj.xl_frontier;
            }
            _ => {}
        }

        (w, potential)
    }
}

// Square values: corners 120, X-squares -40, C-squares -20, the square
// diagonally past an X-square 15, the rest of the second ring -5, edges 5
// (20 next to a C-square), interior 3.

const POS_WEIGHTS_6: [[i32; 6]; 6] = [
    [120, -20, 20, 20, -20, 120],
    [-20, -40, 3, 3, -40, -20],
    [20, 3, 15, 15, 3, 20],
    [20, 3, 15, 15, 3, 20],
    [-20, -40, 3, 3, -40, -20],
    [120, -20, 20, 20, -20, 120],
];

const POS_WEIGHTS_8: [[i32; 8]; 8] = [
    [120, -20, 20, 5, 5, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [120, -20, 20, 5, 5, 20, -20, 120],
];

// Edge cells between the 20s are 5 on all four sides, (3, 9) included.
const POS_WEIGHTS_10: [[i32; 10]; 10] = [
    [120, -20, 20, 5, 5, 5, 5, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -5, -5, -40, -20],
    [20, -5, 15, 3, 3, 3, 3, 15, -5, 20],
    [5, -5, 3, 3, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, 3, 3, -5, 5],
    [20, -5, 15, 3, 3, 3, 3, 15, -5, 20],
    [-20, -40, -5, -5, -5, -5, -5, -5, -40, -20],
    [120, -20, 20, 5, 5, 5, 5, 20, -20, 120],
];

const POS_WEIGHTS_12: [[i32; 12]; 12] = [
    [120, -20, 20, 5, 5, 5, 5, 5, 5, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -5, -5, -5, -5, -40, -20],
    [20, -5, 15, 3, 3, 3, 3, 3, 3, 15, -5, 20],
    [5, -5, 3, 3, 3, 3, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, 3, 3, 3, 3, -5, 5],
    [20, -5, 15, 3, 3, 3, 3, 3, 3, 15, -5, 20],
    [-20, -40, -5, -5, -5, -5, -5, -5, -5, -5, -40, -20],
    [120, -20, 20, 5, 5, 5, 5, 5, 5, 20, -20, 120],
];

fn flatten<const N: usize>(table: &[[i32; N]; N]) -> Vec<i32> {
    table.iter().flat_map(|row| row.iter().copied()).collect()
}

/// Read-only square-value table for one board size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalWeights {
    size: usize,
    weights: Vec<i32>,
}

impl PositionalWeights {
    /// Table for a supported board size
    pub fn for_size(size: usize) -> EngineResult<Self> {
        let weights = match size {
            6 => flatten(&POS_WEIGHTS_6),
            8 => flatten(&POS_WEIGHTS_8),
            10 => flatten(&POS_WEIGHTS_10),
            12 => flatten(&POS_WEIGHTS_12),
            other => return Err(EngineError::UnsupportedBoardSize(other)),
        };
        Ok(Self { size, weights })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Weight at `pos`; 0 for positions outside the table
    #[inline]
    pub fn get(&self, pos: Pos) -> i32 {
        if (pos.row as usize) < self.size && (pos.col as usize) < self.size {
            self.weights[pos.to_index(self.size)]
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::corners;

    #[test]
    fn test_phase_boundaries() {
        // 36 cells: early up to 9 discs, mid up to 27
        assert_eq!(GamePhase::from_counts(4, 36), GamePhase::Early);
        assert_eq!(GamePhase::from_counts(9, 36), GamePhase::Early);
        assert_eq!(GamePhase::from_counts(10, 36), GamePhase::Mid);
        assert_eq!(GamePhase::from_counts(27, 36), GamePhase::Mid);
        assert_eq!(GamePhase::from_counts(28, 36), GamePhase::Late);
        assert_eq!(GamePhase::from_counts(64, 64), GamePhase::Late);
    }

    #[test]
    fn test_default_vector_layout() {
        let w = EvalWeights::default();
        assert_eq!(w.phases[0].corners, 40.0);
        assert_eq!(w.phases[1].frontier, -10.0);
        assert_eq!(w.phases[2].parity, 10.0);
        assert_eq!(w.to_vector(), DEFAULT_WEIGHT_VECTOR.to_vec());
    }

    #[test]
    fn test_from_vector_length_checked() {
        let err = EvalWeights::from_vector(&[1.0; 20]).unwrap_err();
        assert_eq!(
            err,
            EngineError::WeightVectorLength {
                expected: 21,
                got: 20
            }
        );

        let custom: Vec<f64> = (0..21).map(f64::from).collect();
        let w = EvalWeights::from_vector(&custom).unwrap();
        assert_eq!(w.phases[1].pieces, 7.0);
        assert_eq!(w.phases[2].position, 20.0);
    }

    #[test]
    fn test_size_adjustments() {
        let w = EvalWeights::default();

        let (p, pot) = w.resolve(GamePhase::Mid, 6);
        assert_eq!(p.mobility, 30.0);
        assert_eq!(p.corners, 90.0);
        assert_eq!(p.stability, 30.0);
        assert_eq!(pot, 5.0);

        // No mobility bump in the endgame on 6x6
        let (p, _) = w.resolve(GamePhase::Late, 6);
        assert_eq!(p.mobility, 5.0);

        let (p, pot) = w.resolve(GamePhase::Early, 8);
        assert_eq!(p, w.phases[0]);
        assert_eq!(pot, 7.0);

        let (_, pot) = w.resolve(GamePhase::Early, 10);
        assert_eq!(pot, 12.0);

        let (p, pot) = w.resolve(GamePhase::Late, 12);
        assert_eq!(p.frontier, -20.0);
        assert_eq!(pot, 7.0);
    }

    #[test]
    fn test_positional_tables_symmetric() {
        for size in [6, 8, 10, 12] {
            let table = PositionalWeights::for_size(size).unwrap();
            let last = (size - 1) as u8;
            for c in corners(size) {
                assert_eq!(table.get(c), 120);
            }
            assert_eq!(table.get(Pos::new(1, 1)), -40);
            assert_eq!(table.get(Pos::new(0, 1)), -20);
            for r in 0..size as u8 {
                for c in 0..size as u8 {
                    let v = table.get(Pos::new(r, c));
                    assert_eq!(v, table.get(Pos::new(c, r)), "transpose at ({}, {})", r, c);
                    assert_eq!(v, table.get(Pos::new(last - r, c)), "mirror at ({}, {})", r, c);
                }
            }
        }
        assert!(PositionalWeights::for_size(9).is_err());
    }

    #[test]
    fn test_10x10_edge_band_uniform() {
        let table = PositionalWeights::for_size(10).unwrap();
        for r in 3..=6u8 {
            assert_eq!(table.get(Pos::new(r, 0)), 5);
            assert_eq!(table.get(Pos::new(r, 9)), 5, "right edge at row {}", r);
        }
        assert_eq!(table.get(Pos::new(2, 9)), 20);
        assert_eq!(table.get(Pos::new(7, 9)), 20);
    }
}
