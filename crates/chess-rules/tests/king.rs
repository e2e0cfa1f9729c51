//! King movement and check detection.

use chess_rules::{is_in_check_at_position, Board, Piece, Player, Square};

fn place(board: &mut Board, row: i8, col: i8, piece: Piece) -> Piece {
    board.place_piece(Square::at(row, col), piece).unwrap();
    piece
}

fn moves_of(board: &Board, piece: &Piece) -> Vec<Square> {
    board.available_moves(piece.id()).unwrap().sorted()
}

#[test]
fn kings_can_move_to_adjacent_squares() {
    let mut board = Board::new(Player::White);
    let king = place(&mut board, 4, 4, Piece::king(Player::White));

    let expected = vec![
        Square::at(3, 3),
        Square::at(3, 4),
        Square::at(3, 5),
        Square::at(4, 3),
        Square::at(4, 5),
        Square::at(5, 3),
        Square::at(5, 4),
        Square::at(5, 5),
    ];
    assert_eq!(moves_of(&board, &king), expected);
}

#[test]
fn kings_cannot_leave_the_board() {
    let mut board = Board::new(Player::White);
    let king = place(&mut board, 0, 0, Piece::king(Player::White));

    assert_eq!(
        moves_of(&board, &king),
        vec![Square::at(0, 1), Square::at(1, 0), Square::at(1, 1)]
    );
}

#[test]
fn kings_can_take_opposing_pieces() {
    let mut board = Board::new(Player::White);
    let king = place(&mut board, 4, 4, Piece::king(Player::White));
    place(&mut board, 4, 5, Piece::pawn(Player::Black));

    assert!(moves_of(&board, &king).contains(&Square::at(4, 5)));
}

#[test]
fn kings_cannot_take_friendly_pieces() {
    let mut board = Board::new(Player::White);
    let king = place(&mut board, 4, 4, Piece::king(Player::White));
    place(&mut board, 4, 5, Piece::pawn(Player::White));

    assert!(!moves_of(&board, &king).contains(&Square::at(4, 5)));
}

#[test]
fn kings_can_detect_when_in_check() {
    let mut board = Board::new(Player::White);
    let king = place(&mut board, 2, 2, Piece::king(Player::Black));
    place(&mut board, 6, 2, Piece::rook(Player::White));

    let square = board.locate(king.id()).unwrap();
    assert!(is_in_check_at_position(&board, Player::Black, square));
    assert!(board.is_in_check(Player::Black));
    assert!(!board.is_in_check(Player::White));
}

#[test]
fn kings_cannot_move_into_check() {
    let mut board = Board::new(Player::White);
    let king = place(&mut board, 2, 3, Piece::king(Player::Black));
    place(&mut board, 6, 2, Piece::rook(Player::White));

    let moves = moves_of(&board, &king);
    assert!(!moves.contains(&Square::at(2, 2)));
    assert!(!moves.contains(&Square::at(1, 2)));
    assert!(!moves.contains(&Square::at(3, 2)));
}

#[test]
fn kings_in_check_cannot_step_toward_the_attacker() {
    let mut board = Board::new(Player::White);
    let king = place(&mut board, 2, 2, Piece::king(Player::Black));
    place(&mut board, 6, 2, Piece::rook(Player::White));

    let moves = moves_of(&board, &king);
    assert!(!moves.contains(&Square::at(3, 2)));
    assert!(!moves.contains(&Square::at(5, 2)));
}

#[test]
fn king_still_shields_its_own_retreat_square() {
    // Attacks are evaluated with the king on its current square.
    let mut board = Board::new(Player::White);
    let king = place(&mut board, 2, 2, Piece::king(Player::Black));
    place(&mut board, 6, 2, Piece::rook(Player::White));

    assert!(moves_of(&board, &king).contains(&Square::at(1, 2)));
}

#[test]
fn defended_pieces_cannot_be_taken_by_the_king() {
    let mut board = Board::new(Player::White);
    let king = place(&mut board, 4, 4, Piece::king(Player::White));
    place(&mut board, 3, 4, Piece::pawn(Player::Black));
    place(&mut board, 2, 3, Piece::pawn(Player::Black));

    // The pawn on (2, 3) covers (3, 4).
    assert!(!moves_of(&board, &king).contains(&Square::at(3, 4)));
}

#[test]
fn pawns_attack_only_forward_diagonals() {
    let mut board = Board::new(Player::White);
    place(&mut board, 1, 4, Piece::pawn(Player::Black));

    assert!(is_in_check_at_position(&board, Player::White, Square::at(2, 3)));
    assert!(is_in_check_at_position(&board, Player::White, Square::at(2, 5)));
    assert!(!is_in_check_at_position(&board, Player::White, Square::at(2, 4)));
    assert!(!is_in_check_at_position(&board, Player::White, Square::at(0, 3)));
}

#[test]
fn enemy_kings_are_ignored_by_the_check_scan() {
    let mut board = Board::new(Player::White);
    let king = place(&mut board, 4, 4, Piece::king(Player::White));
    place(&mut board, 2, 4, Piece::king(Player::Black));

    assert!(!is_in_check_at_position(&board, Player::White, Square::at(3, 4)));
    assert!(moves_of(&board, &king).contains(&Square::at(3, 4)));
}

#[test]
fn knight_check_ignores_blockers() {
    let mut board = Board::new(Player::White);
    place(&mut board, 7, 4, Piece::king(Player::White));
    place(&mut board, 6, 3, Piece::pawn(Player::White));
    place(&mut board, 6, 4, Piece::pawn(Player::White));
    place(&mut board, 6, 5, Piece::pawn(Player::White));
    place(&mut board, 5, 3, Piece::knight(Player::Black));

    assert!(board.is_in_check(Player::White));
}

#[test]
fn checkmated_king_has_no_moves() {
    let mut board = Board::new(Player::Black);
    let king = place(&mut board, 0, 7, Piece::king(Player::Black));
    place(&mut board, 1, 6, Piece::pawn(Player::Black));
    place(&mut board, 1, 7, Piece::pawn(Player::Black));
    place(&mut board, 0, 0, Piece::rook(Player::White));

    assert!(board.is_in_check(Player::Black));
    assert!(moves_of(&board, &king).is_empty());
}
