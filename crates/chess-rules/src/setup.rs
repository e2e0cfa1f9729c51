//! Board setup helpers.
//!
//! The engine itself never assumes a starting layout; these helpers build
//! the usual ones.

use crate::{Board, BoardError, RulesConfig};
use chess_core::{PieceKind, Placement, Player, Square};

/// Back-rank order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Creates a board in the standard starting position, White to move.
pub fn standard_board() -> Board {
    standard_board_with(RulesConfig::default())
}

/// Creates a board in the standard starting position with the given rules.
pub fn standard_board_with(config: RulesConfig) -> Board {
    let mut board = Board::with_config(config);
    board.place_all(&standard_placement());
    board
}

/// The standard starting layout.
pub fn standard_placement() -> Placement {
    let mut placement = Placement::empty();
    for player in Player::ALL {
        let back = player.back_rank();
        let pawns = back + player.pawn_direction();
        for (col, kind) in (0i8..).zip(BACK_RANK) {
            placement.set(Square::at(back, col), Some((kind, player)));
            placement.set(Square::at(pawns, col), Some((PieceKind::Pawn, player)));
        }
    }
    placement
}

/// Creates a board from a placement diagram.
///
/// ```
/// use chess_rules::setup::board_from_placement;
/// use chess_rules::RulesConfig;
/// use chess_core::Square;
///
/// let board = board_from_placement("4k3/8/8/8/8/8/8/4K3", RulesConfig::default()).unwrap();
/// assert!(board.piece_at(Square::at(0, 4)).is_some());
/// ```
pub fn board_from_placement(diagram: &str, config: RulesConfig) -> Result<Board, BoardError> {
    let placement = Placement::parse(diagram)?;
    let mut board = Board::with_config(config);
    board.place_all(&placement);
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_placement_matches_diagram() {
        assert_eq!(
            standard_placement(),
            Placement::parse(Placement::STANDARD).unwrap()
        );
    }

    #[test]
    fn standard_layout_matches_diagram() {
        let board = standard_board();
        assert_eq!(board.placement().to_string(), Placement::STANDARD);
        assert_eq!(board.current_player(), Player::White);
        assert_eq!(board.all_pieces().count(), 32);
    }

    #[test]
    fn standard_layout_has_twenty_opening_moves() {
        let board = standard_board();
        let total: usize = board
            .occupied()
            .filter(|(_, piece)| piece.player() == Player::White)
            .map(|(square, _)| board.moves_from(square).len())
            .sum();
        assert_eq!(total, 20);
        assert!(!board.is_in_check(Player::White));
        assert!(!board.is_in_check(Player::Black));
    }

    #[test]
    fn config_is_applied() {
        let board = standard_board_with(RulesConfig::default().with_starting_player(Player::Black));
        assert_eq!(board.current_player(), Player::Black);
    }

    #[test]
    fn invalid_diagram_is_rejected() {
        let result = board_from_placement("8/8/8", RulesConfig::default());
        assert!(matches!(result, Err(BoardError::InvalidPlacement(_))));
    }
}
