//! Board square representation.

use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// A (row, column) coordinate.
///
/// Row 0 is Black's back rank (rank 8), row 7 is White's back rank (rank 1).
/// Column 0 is the a-file.
///
/// Coordinates outside `0..8` are representable so that move generation can
/// step off the edge and ask [`Square::is_on_board`] afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: i8,
    col: i8,
}

impl Square {
    /// Creates a square from row and column.
    #[inline]
    pub const fn at(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    /// Returns the row.
    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    /// Returns the column.
    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Returns true if both coordinates lie in `0..8`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Returns the square shifted by the given deltas.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Square {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// Grid indices for an on-board square.
    #[inline]
    pub const fn indices(self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    /// Iterates over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::at(row, col)))
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Square::at(
            BOARD_SIZE - 1 - (rank - b'1') as i8,
            (file - b'a') as i8,
        ))
    }

    /// Returns the algebraic name for an on-board square.
    pub fn to_algebraic(self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'1' + (BOARD_SIZE - 1 - self.row) as u8) as char;
        Some(format!("{}{}", file, rank))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}
