//! Pieces on the board.

use chess_core::{PieceKind, Player, Square};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Identity of a piece.
///
/// Every [`Piece::new`] call mints a fresh id, so two pieces of the same
/// kind and owner are still distinguishable. The board indexes pieces by id
/// to answer "where is this piece" without scanning the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u32);

impl PieceId {
    fn fresh() -> Self {
        PieceId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece owned by one player.
///
/// The board stores pieces by value; a copy obtained from a query is a
/// snapshot and does not track later moves. Use its [`id`](Piece::id) to ask
/// the board again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    player: Player,
    number_of_moves: u32,
    vulnerable_to_en_passant: bool,
}

impl Piece {
    /// Creates a piece that has never moved.
    pub fn new(kind: PieceKind, player: Player) -> Self {
        Piece {
            id: PieceId::fresh(),
            kind,
            player,
            number_of_moves: 0,
            vulnerable_to_en_passant: false,
        }
    }

    pub fn pawn(player: Player) -> Self {
        Self::new(PieceKind::Pawn, player)
    }

    pub fn knight(player: Player) -> Self {
        Self::new(PieceKind::Knight, player)
    }

    pub fn bishop(player: Player) -> Self {
        Self::new(PieceKind::Bishop, player)
    }

    pub fn rook(player: Player) -> Self {
        Self::new(PieceKind::Rook, player)
    }

    pub fn queen(player: Player) -> Self {
        Self::new(PieceKind::Queen, player)
    }

    pub fn king(player: Player) -> Self {
        Self::new(PieceKind::King, player)
    }

    #[inline]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn player(&self) -> Player {
        self.player
    }

    /// Number of moves this piece has made.
    #[inline]
    pub const fn number_of_moves(&self) -> u32 {
        self.number_of_moves
    }

    /// True for a pawn whose last move was a two-row advance, while the
    /// opponent may still capture it en passant. Always false for other
    /// kinds.
    #[inline]
    pub const fn is_vulnerable_to_en_passant(&self) -> bool {
        self.vulnerable_to_en_passant
    }

    /// Returns true if `other` belongs to the opposing player.
    #[inline]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.player != other.player
    }

    /// Returns the diagram character (uppercase for White).
    #[inline]
    pub const fn to_char(&self) -> char {
        self.kind.to_char(self.player)
    }

    /// Bookkeeping for a move from `from` to `to`.
    pub(crate) fn record_move(&mut self, from: Square, to: Square) {
        self.number_of_moves += 1;
        if self.kind == PieceKind::Pawn {
            self.vulnerable_to_en_passant = (to.row() - from.row()).abs() == 2;
        }
    }

    pub(crate) fn clear_en_passant(&mut self) {
        self.vulnerable_to_en_passant = false;
    }

    /// The queen that replaces this pawn on promotion. It is a new piece
    /// with its own identity, carrying over the move count.
    pub(crate) fn promoted(&self) -> Piece {
        Piece {
            number_of_moves: self.number_of_moves,
            ..Piece::queen(self.player)
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.player, self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_pieces_have_distinct_ids() {
        let a = Piece::pawn(Player::White);
        let b = Piece::pawn(Player::White);
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
        assert_eq!(a, a);
    }

    #[test]
    fn new_piece_has_not_moved() {
        let rook = Piece::rook(Player::Black);
        assert_eq!(rook.kind(), PieceKind::Rook);
        assert_eq!(rook.player(), Player::Black);
        assert_eq!(rook.number_of_moves(), 0);
        assert!(!rook.is_vulnerable_to_en_passant());
    }

    #[test]
    fn record_move_flags_double_step() {
        let mut pawn = Piece::pawn(Player::Black);
        pawn.record_move(Square::at(1, 3), Square::at(3, 3));
        assert_eq!(pawn.number_of_moves(), 1);
        assert!(pawn.is_vulnerable_to_en_passant());

        pawn.record_move(Square::at(3, 3), Square::at(4, 3));
        assert_eq!(pawn.number_of_moves(), 2);
        assert!(!pawn.is_vulnerable_to_en_passant());
    }

    #[test]
    fn record_move_never_flags_other_kinds() {
        let mut rook = Piece::rook(Player::White);
        rook.record_move(Square::at(7, 0), Square::at(5, 0));
        assert!(!rook.is_vulnerable_to_en_passant());
    }

    #[test]
    fn promotion_keeps_owner_and_move_count() {
        let mut pawn = Piece::pawn(Player::White);
        pawn.record_move(Square::at(2, 4), Square::at(1, 4));
        let queen = pawn.promoted();
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert_eq!(queen.player(), Player::White);
        assert_eq!(queen.number_of_moves(), 1);
        assert_ne!(queen.id(), pawn.id());
    }

    #[test]
    fn display() {
        let knight = Piece::knight(Player::Black);
        assert_eq!(
            knight.to_string(),
            format!("Black Knight #{}", knight.id().get())
        );
        assert_eq!(knight.to_char(), 'n');
    }
}
