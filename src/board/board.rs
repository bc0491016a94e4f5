//! Board structure with disc counting

use std::fmt;

use super::{Disc, Pos, SUPPORTED_SIZES};
use crate::error::{EngineError, EngineResult};

/// Square Reversi board.
///
/// Cells are stored row-major. Search code never mutates a board it was
/// handed; it clones one per move application (see `rules::make_move`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Disc>,
}

impl Board {
    /// Empty board of side `size`.
    pub fn new(size: usize) -> EngineResult<Self> {
        if !SUPPORTED_SIZES.contains(&size) {
            return Err(EngineError::UnsupportedBoardSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Disc::Empty; size * size],
        })
    }

    /// Standard opening: four discs in the centre, White on the main diagonal.
    pub fn initial(size: usize) -> EngineResult<Self> {
        let mut board = Self::new(size)?;
        let mid = (size / 2) as u8;
        board.place(Pos::new(mid - 1, mid - 1), Disc::White);
        board.place(Pos::new(mid, mid), Disc::White);
        board.place(Pos::new(mid - 1, mid), Disc::Black);
        board.place(Pos::new(mid, mid - 1), Disc::Black);
        Ok(board)
    }

    /// Parse a board from text rows.
    ///
    /// `.` or `-` is empty, `B`/`X` is Black, `W`/`O` is White. Whitespace
    /// inside a row is ignored so boards can be written column-aligned.
    pub fn from_rows(rows: &[&str]) -> EngineResult<Self> {
        let size = rows.len();
        let mut board = Self::new(size)?;
        for (r, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != size {
                return Err(EngineError::MalformedBoard {
                    row: r,
                    message: format!("expected {} cells, found {}", size, cells.len()),
                });
            }
            for (c, ch) in cells.into_iter().enumerate() {
                let disc = match ch {
                    '.' | '-' => Disc::Empty,
                    'B' | 'b' | 'X' | 'x' => Disc::Black,
                    'W' | 'w' | 'O' | 'o' => Disc::White,
                    other => {
                        return Err(EngineError::MalformedBoard {
                            row: r,
                            message: format!("unknown cell character '{}'", other),
                        })
                    }
                };
                board.cells[r * size + c] = disc;
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get disc at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Disc {
        self.cells[pos.to_index(self.size)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Disc::Empty
    }

    /// Set a cell without flipping anything.
    /// Use `rules::make_move` for game moves.
    #[inline]
    pub fn place(&mut self, pos: Pos, disc: Disc) {
        let idx = pos.to_index(self.size);
        self.cells[idx] = disc;
    }

    /// Iterate over every position together with its occupant, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Disc)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &d)| (Pos::from_index(i, size), d))
    }

    /// Number of discs of one color
    #[inline]
    pub fn count(&self, disc: Disc) -> usize {
        self.cells.iter().filter(|&&d| d == disc).count()
    }

    /// Total discs on board
    #[inline]
    pub fn disc_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        self.count(Disc::Empty)
    }

    #[inline]
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Disc::Empty)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: String = row.iter().map(|d| d.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
