//! Board errors.

use crate::PieceId;
use chess_core::{PlacementError, Player, Square};
use thiserror::Error;

/// Errors returned by board operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The piece on `square` does not belong to the player to move.
    #[error("the piece on {square} does not belong to the current player ({player})")]
    NotYourTurn { square: Square, player: Player },

    /// The piece is not on the board (captured, promoted away, or never
    /// placed). Indicates a stale reference held by the caller.
    #[error("piece {0} is not on the board")]
    PieceNotFound(PieceId),

    /// The square lies outside the 8×8 grid.
    #[error("square {0} is off the board")]
    OffBoard(Square),

    /// Strict moves only: there is nothing to move on the origin square.
    #[error("there is no piece on {0}")]
    EmptySquare(Square),

    /// Strict moves only: the destination is not one of the piece's
    /// available moves.
    #[error("illegal move from {from} to {to}")]
    IllegalDestination { from: Square, to: Square },

    #[error("invalid placement: {0}")]
    InvalidPlacement(#[from] PlacementError),
}
