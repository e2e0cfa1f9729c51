//! Move generation.
//!
//! Each piece kind has one generator. Sliders and steppers share the ray
//! and offset walkers in [`geometry`]; pawns have their own module; the king
//! filters its steps through the check evaluator.
//!
//! Generation only reads the board and never fails: a piece with nowhere to
//! go yields an empty [`SquareList`].

mod geometry;
mod pawn;

use crate::{check, Board};
use chess_core::{PieceKind, Player, Square};

pub use geometry::{
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};
pub(crate) use geometry::ray_is_clear;

/// A list of destination squares with a fixed maximum capacity.
///
/// No piece has more than 27 destinations (a centralised queen), so a
/// fixed-size array avoids heap allocations during move generation.
#[derive(Clone)]
pub struct SquareList {
    squares: [Square; Self::MAX_SQUARES],
    len: usize,
}

impl SquareList {
    /// Capacity of the list.
    pub const MAX_SQUARES: usize = 32;

    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        SquareList {
            squares: [Square::at(0, 0); Self::MAX_SQUARES],
            len: 0,
        }
    }

    /// Adds a square to the list.
    #[inline]
    pub fn push(&mut self, square: Square) {
        debug_assert!(self.len < Self::MAX_SQUARES);
        self.squares[self.len] = square;
        self.len += 1;
    }

    /// Returns the number of squares.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the squares.
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len]
    }

    /// Returns true if the list holds `square`.
    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        self.as_slice().contains(&square)
    }

    /// Iterates over the squares in generation order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }

    /// Returns the squares sorted in row-major order.
    pub fn sorted(&self) -> Vec<Square> {
        let mut squares = self.as_slice().to_vec();
        squares.sort();
        squares
    }

    /// Retains only squares for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Square) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.squares[read]) {
                self.squares[write] = self.squares[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for SquareList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for SquareList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for SquareList {}

impl std::ops::Index<usize> for SquareList {
    type Output = Square;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.squares[index]
    }
}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for SquareList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates the destinations available to the piece on `from`.
///
/// An empty or off-board origin yields an empty list.
pub fn available_moves(board: &Board, from: Square) -> SquareList {
    let mut moves = SquareList::new();
    let Some(piece) = board.piece_at(from) else {
        return moves;
    };
    let player = piece.player();

    match piece.kind() {
        PieceKind::Pawn => pawn::generate(board, from, piece, &mut moves),
        PieceKind::Knight => geometry::step(board, from, player, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::Bishop => geometry::slide(board, from, player, &BISHOP_DIRECTIONS, &mut moves),
        PieceKind::Rook => geometry::slide(board, from, player, &ROOK_DIRECTIONS, &mut moves),
        PieceKind::Queen => geometry::slide(board, from, player, &QUEEN_DIRECTIONS, &mut moves),
        PieceKind::King => generate_king_moves(board, from, player, &mut moves),
    }

    moves
}

/// King steps, minus squares attacked by an enemy piece.
///
/// Attacks are evaluated on the board as it stands, with the king still on
/// `from`.
fn generate_king_moves(board: &Board, from: Square, player: Player, moves: &mut SquareList) {
    geometry::step(board, from, player, &KING_OFFSETS, moves);
    moves.retain(|&square| !check::is_in_check_at_position(board, player, square));
}
