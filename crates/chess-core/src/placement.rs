//! Piece-placement diagrams.
//!
//! A diagram is the first field of a FEN record: eight `/`-separated rows,
//! digits for runs of empty squares, uppercase letters for White and
//! lowercase for Black. Rows are listed from row 0 (Black's back rank) to
//! row 7, matching [`Square`](crate::Square) numbering.

use crate::{PieceKind, Player, Square, BOARD_SIZE};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a placement diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid character '{character}' in row {row}")]
    InvalidCharacter { character: char, row: usize },

    #[error("row {row} has {squares} squares, expected 8")]
    InvalidRowLength { row: usize, squares: u32 },
}

/// A parsed diagram: what stands on each square, without any game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    cells: [[Option<(PieceKind, Player)>; 8]; 8],
}

impl Placement {
    /// The standard starting layout.
    pub const STANDARD: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Creates an empty placement.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a placement diagram.
    pub fn parse(diagram: &str) -> Result<Self, PlacementError> {
        let rows: Vec<&str> = diagram.trim().split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(PlacementError::InvalidRowCount(rows.len()));
        }

        let mut placement = Placement::empty();
        for (row, text) in rows.iter().enumerate() {
            let mut squares = 0u32;
            for c in text.chars() {
                if let Some(run) = c.to_digit(10) {
                    squares += run;
                } else if let Some(piece) = PieceKind::from_char(c) {
                    if let Some(cell) = placement.cells[row].get_mut(squares as usize) {
                        *cell = Some(piece);
                    }
                    squares += 1;
                } else {
                    return Err(PlacementError::InvalidCharacter { character: c, row });
                }
            }
            if squares != BOARD_SIZE as u32 {
                return Err(PlacementError::InvalidRowLength { row, squares });
            }
        }

        Ok(placement)
    }

    /// Returns what stands on the given square.
    pub fn get(&self, square: Square) -> Option<(PieceKind, Player)> {
        let (row, col) = square.indices()?;
        self.cells[row][col]
    }

    /// Puts a piece on (or clears) the given square. Off-board squares are
    /// ignored.
    pub fn set(&mut self, square: Square, piece: Option<(PieceKind, Player)>) {
        if let Some((row, col)) = square.indices() {
            self.cells[row][col] = piece;
        }
    }

    /// Iterates over occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, PieceKind, Player)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|(kind, player)| (sq, kind, player)))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Some((kind, player)) => {
                        if empty > 0 {
                            write!(f, "{}", empty)?;
                            empty = 0;
                        }
                        write!(f, "{}", kind.to_char(*player))?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{}", empty)?;
            }
        }
        Ok(())
    }
}
