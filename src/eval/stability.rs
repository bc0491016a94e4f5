//! Corner-anchored disc stability
//!
//! A disc counts as stable when it is orthogonally connected, through discs of
//! the same color, to a corner that color owns. This is an approximation: it
//! does not prove the disc can never flip, it only tracks connectivity to an
//! anchored corner.

use crate::board::{corners, Board, Disc, MAX_CELLS};
use crate::rules::ORTHOGONAL;

/// Count of `color` discs reachable from an owned corner.
#[must_use]
pub fn stable_discs(board: &Board, color: Disc) -> usize {
    if color == Disc::Empty {
        return 0;
    }

    let size = board.size();
    let mut stable = [false; MAX_CELLS];
    let mut stack = Vec::with_capacity(size * size);
    let mut count = 0usize;

    for corner in corners(size) {
        let idx = corner.to_index(size);
        if board.get(corner) != color || stable[idx] {
            continue;
        }
        stable[idx] = true;
        count += 1;
        stack.push(corner);

        while let Some(pos) = stack.pop() {
            for &(dr, dc) in &ORTHOGONAL {
                if let Some(next) = pos.offset(dr, dc, size) {
                    let nidx = next.to_index(size);
                    if !stable[nidx] && board.get(next) == color {
                        stable[nidx] = true;
                        count += 1;
                        stack.push(next);
                    }
                }
            }
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_corner_no_stability() {
        let board = Board::initial(8).unwrap();
        assert_eq!(stable_discs(&board, Disc::Black), 0);
        assert_eq!(stable_discs(&board, Disc::White), 0);
        assert_eq!(stable_discs(&board, Disc::Empty), 0);
    }

    #[test]
    fn test_edge_run_from_corner() {
        let board = Board::from_rows(&[
            "BBB.BW",
            "B.....",
            "......",
            "......",
            "......",
            "......",
        ])
        .unwrap();
        // (0,0),(0,1),(0,2),(1,0); (0,4) is cut off by the gap
        assert_eq!(stable_discs(&board, Disc::Black), 4);
        assert_eq!(stable_discs(&board, Disc::White), 1);
    }

    #[test]
    fn test_diagonal_does_not_propagate() {
        let board = Board::from_rows(&[
            "B.....",
            ".B....",
            "..B...",
            "......",
            "......",
            "......",
        ])
        .unwrap();
        assert_eq!(stable_discs(&board, Disc::Black), 1);
    }

    #[test]
    fn test_two_corners_same_region_counted_once() {
        let board = Board::from_rows(&[
            "BBBBBB",
            "......",
            "......",
            "......",
            "......",
            "W....W",
        ])
        .unwrap();
        assert_eq!(stable_discs(&board, Disc::Black), 6);
        assert_eq!(stable_discs(&board, Disc::White), 2);
    }
}
