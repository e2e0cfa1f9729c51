//! Player (side) representation.

use serde::{Deserialize, Serialize};

/// The two players in chess.
///
/// Rows are numbered from Black's side of the board: row 0 is Black's back
/// rank and row 7 is White's, so White advances toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    /// Both players, White first.
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    /// Returns the opposing player.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row delta of a pawn advance (-1 for White, +1 for Black).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }

    /// Returns this player's back rank (7 for White, 0 for Black).
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Player::White => 7,
            Player::Black => 0,
        }
    }

    /// Row on which this player's pawns promote: the opponent's back rank.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        self.opponent().back_rank()
    }

    /// Row from which this player's pawns may capture en passant.
    ///
    /// This is the row an enemy pawn lands on after a double step.
    #[inline]
    pub const fn en_passant_row(self) -> i8 {
        match self {
            Player::White => 3,
            Player::Black => 4,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}
