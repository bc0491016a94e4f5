//! Move legality and disc flipping
//!
//! A move is legal when the target cell is empty and at least one of the
//! eight principal directions holds a contiguous run of opponent discs
//! closed off by one of the mover's own discs.

use crate::board::{Board, Disc, Pos};

/// The eight principal directions (dr, dc)
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Orthogonal directions, used by the stability flood fill
pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Length of the opponent run captured in one direction (0 if not bracketed)
#[inline]
fn run_length(board: &Board, pos: Pos, dr: i8, dc: i8, color: Disc) -> usize {
    let opponent = color.opponent();
    let size = board.size();
    let mut count = 0;
    let mut cur = pos.offset(dr, dc, size);

    while let Some(p) = cur {
        let cell = board.get(p);
        if cell == opponent {
            count += 1;
            cur = p.offset(dr, dc, size);
        } else if cell == color {
            return count;
        } else {
            return 0;
        }
    }
    0
}

/// Number of opponent discs captured by playing `pos`.
///
/// Returns 0 for occupied cells and for moves that bracket nothing.
#[must_use]
pub fn flip_count(board: &Board, pos: Pos, color: Disc) -> usize {
    if !board.is_empty(pos) {
        return 0;
    }
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| run_length(board, pos, dr, dc, color))
        .sum()
}

/// Positions that flip when `color` plays at `pos`
#[must_use]
pub fn flipped_positions(board: &Board, pos: Pos, color: Disc) -> Vec<Pos> {
    let size = board.size();
    let mut flips = Vec::new();
    if !board.is_empty(pos) {
        return flips;
    }
    for &(dr, dc) in &DIRECTIONS {
        let n = run_length(board, pos, dr, dc, color);
        let mut cur = pos;
        for _ in 0..n {
            // run_length only counts on-board cells
            match cur.offset(dr, dc, size) {
                Some(p) => {
                    flips.push(p);
                    cur = p;
                }
                None => break,
            }
        }
    }
    flips
}

#[inline]
fn is_legal(board: &Board, pos: Pos, color: Disc) -> bool {
    board.is_empty(pos)
        && DIRECTIONS
            .iter()
            .any(|&(dr, dc)| run_length(board, pos, dr, dc, color) > 0)
}

/// All legal moves for `color`, row-major order. Empty if none.
#[must_use]
pub fn legal_moves(board: &Board, color: Disc) -> Vec<Pos> {
    if color == Disc::Empty {
        return Vec::new();
    }
    board
        .iter()
        .filter(|&(pos, d)| d == Disc::Empty && is_legal(board, pos, color))
        .map(|(pos, _)| pos)
        .collect()
}

/// True if `color` has at least one legal move
#[must_use]
pub fn has_legal_move(board: &Board, color: Disc) -> bool {
    color != Disc::Empty
        && board
            .iter()
            .any(|(pos, d)| d == Disc::Empty && is_legal(board, pos, color))
}

/// Play a move on a copy of the board and return the copy.
///
/// The input board is left untouched, so sibling search branches never see
/// each other's flips.
#[must_use]
pub fn make_move(board: &Board, pos: Pos, color: Disc) -> Board {
    let mut next = board.clone();
    for p in flipped_positions(board, pos, color) {
        next.place(p, color);
    }
    next.place(pos, color);
    next
}

/// Game over: board full or neither side can move
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    board.is_full()
        || (!has_legal_move(board, Disc::Black) && !has_legal_move(board, Disc::White))
}
