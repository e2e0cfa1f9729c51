//! Check detection.
//!
//! A square is attacked when an enemy piece could capture something standing
//! on it. Enemy kings are left out of the scan.

use crate::movegen::ray_is_clear;
use crate::{Board, Piece};
use chess_core::{PieceKind, Player, Square};

/// Returns true if a king of `player` standing on `square` would be in
/// check.
///
/// The board is read as it stands: pieces are not moved out of the way, so a
/// king probing its own escape squares still blocks rays through its current
/// square.
pub fn is_in_check_at_position(board: &Board, player: Player, square: Square) -> bool {
    if !square.is_on_board() {
        return false;
    }
    board
        .occupied()
        .filter(|(_, piece)| piece.player() != player && piece.kind() != PieceKind::King)
        .any(|(from, piece)| attacks(board, from, piece, square))
}

/// Returns true if `piece`, standing on `from`, could capture on `target`.
///
/// `target` is treated as holding an enemy of `piece` whatever is actually
/// there, so defended pieces count as attacked.
pub fn attacks(board: &Board, from: Square, piece: &Piece, target: Square) -> bool {
    if from == target || !target.is_on_board() {
        return false;
    }
    let d_row = target.row() - from.row();
    let d_col = target.col() - from.col();
    let straight = d_row == 0 || d_col == 0;
    let diagonal = d_row.abs() == d_col.abs();

    match piece.kind() {
        PieceKind::Pawn => d_row == piece.player().pawn_direction() && d_col.abs() == 1,
        PieceKind::Knight => {
            matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
        }
        PieceKind::Bishop => diagonal && ray_is_clear(board, from, target),
        PieceKind::Rook => straight && ray_is_clear(board, from, target),
        PieceKind::Queen => (straight || diagonal) && ray_is_clear(board, from, target),
        PieceKind::King => d_row.abs() <= 1 && d_col.abs() <= 1,
    }
}

/// Returns true if some king of `player` stands on an attacked square.
///
/// A board without a king of that player is never in check.
pub fn is_in_check(board: &Board, player: Player) -> bool {
    board
        .occupied()
        .filter(|(_, piece)| piece.player() == player && piece.kind() == PieceKind::King)
        .any(|(square, _)| is_in_check_at_position(board, player, square))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(pieces: &[(Square, Piece)]) -> Board {
        let mut board = Board::new(Player::White);
        for &(square, piece) in pieces {
            board.place_piece(square, piece).unwrap();
        }
        board
    }

    #[test]
    fn rook_gives_check_along_a_file() {
        let board = board_with(&[
            (Square::at(2, 2), Piece::king(Player::Black)),
            (Square::at(6, 2), Piece::rook(Player::White)),
        ]);
        assert!(is_in_check_at_position(&board, Player::Black, Square::at(2, 2)));
        assert!(is_in_check(&board, Player::Black));
        assert!(!is_in_check(&board, Player::White));
    }

    #[test]
    fn blocked_ray_is_not_check() {
        let board = board_with(&[
            (Square::at(2, 2), Piece::king(Player::Black)),
            (Square::at(4, 2), Piece::pawn(Player::Black)),
            (Square::at(6, 2), Piece::rook(Player::White)),
        ]);
        assert!(!is_in_check(&board, Player::Black));
    }

    #[test]
    fn pawns_attack_diagonally_only() {
        let board = board_with(&[(Square::at(6, 4), Piece::pawn(Player::White))]);
        assert!(is_in_check_at_position(&board, Player::Black, Square::at(5, 3)));
        assert!(is_in_check_at_position(&board, Player::Black, Square::at(5, 5)));
        assert!(!is_in_check_at_position(&board, Player::Black, Square::at(5, 4)));
        assert!(!is_in_check_at_position(&board, Player::Black, Square::at(4, 4)));
        assert!(!is_in_check_at_position(&board, Player::Black, Square::at(7, 3)));
    }

    #[test]
    fn knight_attacks() {
        let board = board_with(&[(Square::at(4, 4), Piece::knight(Player::Black))]);
        assert!(is_in_check_at_position(&board, Player::White, Square::at(2, 5)));
        assert!(is_in_check_at_position(&board, Player::White, Square::at(5, 2)));
        assert!(!is_in_check_at_position(&board, Player::White, Square::at(3, 3)));
    }

    #[test]
    fn enemy_king_is_ignored() {
        let board = board_with(&[
            (Square::at(4, 4), Piece::king(Player::White)),
            (Square::at(2, 4), Piece::king(Player::Black)),
        ]);
        assert!(!is_in_check_at_position(&board, Player::Black, Square::at(3, 4)));
    }

    #[test]
    fn own_pieces_never_give_check() {
        let board = board_with(&[
            (Square::at(2, 2), Piece::king(Player::Black)),
            (Square::at(6, 2), Piece::rook(Player::Black)),
        ]);
        assert!(!is_in_check(&board, Player::Black));
    }

    #[test]
    fn defended_pieces_count_as_attacked() {
        let board = board_with(&[
            (Square::at(4, 5), Piece::pawn(Player::Black)),
            (Square::at(0, 5), Piece::rook(Player::Black)),
        ]);
        assert!(is_in_check_at_position(&board, Player::White, Square::at(4, 5)));
    }

    #[test]
    fn king_attack_geometry() {
        let king = Piece::king(Player::White);
        let board = board_with(&[(Square::at(4, 4), king)]);
        assert!(attacks(&board, Square::at(4, 4), &king, Square::at(3, 3)));
        assert!(!attacks(&board, Square::at(4, 4), &king, Square::at(2, 4)));
        assert!(!attacks(&board, Square::at(4, 4), &king, Square::at(4, 4)));
    }
}
