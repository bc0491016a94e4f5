//! Board representation for Reversi

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Board side lengths the engine has positional tables for
pub const SUPPORTED_SIZES: [usize; 4] = [6, 8, 10, 12];
pub const MAX_SIZE: usize = 12;
pub const MAX_CELLS: usize = MAX_SIZE * MAX_SIZE; // 144

/// Cell occupancy / player identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Empty,
    Black,
    White,
}

impl Disc {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Disc {
        match self {
            Disc::Black => Disc::White,
            Disc::White => Disc::Black,
            Disc::Empty => Disc::Empty,
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Disc::Empty => '.',
            Disc::Black => 'B',
            Disc::White => 'W',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_SIZE && (col as usize) < MAX_SIZE);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }

    /// Step one cell in direction (dr, dc), or None when leaving the board
    #[inline]
    pub fn offset(self, dr: i8, dc: i8, size: usize) -> Option<Pos> {
        let r = i32::from(self.row) + i32::from(dr);
        let c = i32::from(self.col) + i32::from(dc);
        if Pos::is_valid(r, c, size) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }

    /// True for the four corner cells of a board of side `size`
    #[inline]
    pub fn is_corner(self, size: usize) -> bool {
        let last = (size - 1) as u8;
        (self.row == 0 || self.row == last) && (self.col == 0 || self.col == last)
    }
}

/// The four corners of a board of side `size`
#[inline]
pub fn corners(size: usize) -> [Pos; 4] {
    let last = (size - 1) as u8;
    [
        Pos::new(0, 0),
        Pos::new(0, last),
        Pos::new(last, 0),
        Pos::new(last, last),
    ]
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
