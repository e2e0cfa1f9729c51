//! Pawn move generation.

use super::geometry::is_capturable;
use super::SquareList;
use crate::{Board, Piece};
use chess_core::{PieceKind, Square};

pub(super) fn generate(board: &Board, from: Square, pawn: &Piece, moves: &mut SquareList) {
    let player = pawn.player();
    let direction = player.pawn_direction();

    // Pushes
    let single = from.offset(direction, 0);
    if !board.is_obstructed(single) {
        moves.push(single);

        let double = from.offset(2 * direction, 0);
        if pawn.number_of_moves() == 0 && !board.is_obstructed(double) {
            moves.push(double);
        }
    }

    // Captures
    for d_col in [-1, 1] {
        let diagonal = from.offset(direction, d_col);
        if is_capturable(board, diagonal, player) {
            moves.push(diagonal);
        }
    }

    // En passant
    if from.row() != player.en_passant_row() {
        return;
    }
    for d_col in [-1, 1] {
        let beside = from.offset(0, d_col);
        let vulnerable = board.piece_at(beside).is_some_and(|victim| {
            victim.kind() == PieceKind::Pawn
                && victim.player() != player
                && victim.is_vulnerable_to_en_passant()
        });
        let target = from.offset(direction, d_col);
        if vulnerable && !moves.contains(target) && !board.is_obstructed(target) {
            moves.push(target);
        }
    }
}
