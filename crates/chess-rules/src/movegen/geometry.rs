//! Movement geometry shared by sliding and stepping pieces.

use super::SquareList;
use crate::Board;
use chess_core::{Player, Square, BOARD_SIZE};

/// (row, col) unit steps along ranks and files.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// (row, col) unit steps along diagonals.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

/// (row, col) unit steps in all eight directions.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// (row, col) knight jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

/// (row, col) king steps.
pub const KING_OFFSETS: [(i8, i8); 8] = QUEEN_DIRECTIONS;

/// True if `square` is on the board and holds a piece not owned by `player`.
#[inline]
pub(crate) fn is_capturable(board: &Board, square: Square, player: Player) -> bool {
    board
        .piece_at(square)
        .is_some_and(|occupant| occupant.player() != player)
}

/// Walks each direction outward from `from`, stopping at the first
/// obstruction. An enemy-occupied obstruction is included as a capture.
pub(crate) fn slide(
    board: &Board,
    from: Square,
    player: Player,
    directions: &[(i8, i8)],
    moves: &mut SquareList,
) {
    for &(d_row, d_col) in directions {
        let mut square = from;
        for _ in 1..BOARD_SIZE {
            square = square.offset(d_row, d_col);
            if board.is_obstructed(square) {
                if is_capturable(board, square, player) {
                    moves.push(square);
                }
                break;
            }
            moves.push(square);
        }
    }
}

/// Lands on each offset from `from`, skipping squares off the board or held
/// by a friendly piece.
pub(crate) fn step(
    board: &Board,
    from: Square,
    player: Player,
    offsets: &[(i8, i8)],
    moves: &mut SquareList,
) {
    for &(d_row, d_col) in offsets {
        let square = from.offset(d_row, d_col);
        if !board.is_obstructed(square) || is_capturable(board, square, player) {
            moves.push(square);
        }
    }
}

/// True if every square strictly between `from` and `to` is empty.
///
/// The two squares must share a rank, file or diagonal.
pub(crate) fn ray_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let d_row = (to.row() - from.row()).signum();
    let d_col = (to.col() - from.col()).signum();
    let mut square = from.offset(d_row, d_col);
    while square != to {
        if board.is_obstructed(square) {
            return false;
        }
        square = square.offset(d_row, d_col);
    }
    true
}
