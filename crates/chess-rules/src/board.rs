//! Board state and move application.

use crate::config::{EnPassantWindow, RulesConfig};
use crate::events::{Observers, SubscriptionId};
use crate::movegen::{available_moves, SquareList};
use crate::{check, BoardError, Piece, PieceId};
use chess_core::{PieceKind, Placement, Player, Square};
use std::collections::HashMap;
use std::fmt;

/// An 8×8 board with the side to move and the pieces captured so far.
///
/// The board owns its pieces. Each piece on the board stands on exactly one
/// square; the board keeps an index from [`PieceId`] to square so that
/// [`locate`](Board::locate) does not scan the grid.
///
/// All mutation goes through `&mut self`. Sharing a board between threads
/// therefore means wrapping it in a lock, which also keeps each
/// [`apply_move`](Board::apply_move) atomic.
#[derive(Debug)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    locations: HashMap<PieceId, Square>,
    current_player: Player,
    captured: Vec<Piece>,
    config: RulesConfig,
    observers: Observers,
}

impl Default for Board {
    fn default() -> Self {
        Self::with_config(RulesConfig::default())
    }
}

impl Board {
    /// Creates an empty board with `current_player` to move and default
    /// rules.
    pub fn new(current_player: Player) -> Self {
        Self::with_config(RulesConfig::default().with_starting_player(current_player))
    }

    /// Creates an empty board using the given rules.
    pub fn with_config(config: RulesConfig) -> Self {
        Board {
            grid: [[None; 8]; 8],
            locations: HashMap::new(),
            current_player: config.starting_player,
            captured: Vec::new(),
            config,
            observers: Observers::default(),
        }
    }

    /// Returns the rules this board plays by.
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Returns the player whose move is next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the captured pieces in the order they were taken.
    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured
    }
}

/// Setup.
impl Board {
    /// Puts `piece` on `square`, returning whatever stood there before.
    ///
    /// This is a setup operation: the displaced piece is not recorded as
    /// captured and no notification fires. If the same piece is already on
    /// the board it is lifted from its old square first.
    pub fn place_piece(&mut self, square: Square, piece: Piece) -> Result<Option<Piece>, BoardError> {
        if !square.is_on_board() {
            return Err(BoardError::OffBoard(square));
        }
        if let Some(&old) = self.locations.get(&piece.id()) {
            self.take(old);
        }
        Ok(self.put(square, piece))
    }

    /// Removes and returns the piece on `square`, without capture
    /// bookkeeping.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.take(square)
    }

    /// Places a fresh piece for every occupied square of a diagram.
    pub fn place_all(&mut self, placement: &Placement) {
        for (square, kind, player) in placement.occupied() {
            self.put(square, Piece::new(kind, player));
        }
    }

    /// Returns a diagram of the current layout.
    pub fn placement(&self) -> Placement {
        let mut placement = Placement::empty();
        for (square, piece) in self.occupied() {
            placement.set(square, Some((piece.kind(), piece.player())));
        }
        placement
    }
}

/// Queries.
impl Board {
    /// Returns the piece on `square`. Off-board squares are always empty.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        let (row, col) = square.indices()?;
        self.grid[row][col].as_ref()
    }

    /// Returns the piece with the given id, if it is on the board.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.locations
            .get(&id)
            .and_then(|&square| self.piece_at(square))
    }

    /// Returns true if `square` lies outside the 8×8 grid.
    #[inline]
    pub fn is_out_of_bounds(square: Square) -> bool {
        !square.is_on_board()
    }

    /// Returns true if a piece cannot pass through `square`: it is off the
    /// board or occupied.
    #[inline]
    pub fn is_obstructed(&self, square: Square) -> bool {
        Self::is_out_of_bounds(square) || self.piece_at(square).is_some()
    }

    /// Iterates over occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Iterates over all pieces on the board in row-major order.
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.occupied().map(|(_, piece)| piece)
    }

    /// Iterates over `player`'s pieces in row-major order.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = &Piece> + '_ {
        self.all_pieces().filter(move |piece| piece.player() == player)
    }

    /// Returns the square the piece stands on.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PieceNotFound`] if the piece has been captured,
    /// promoted away, or was never placed.
    pub fn locate(&self, id: PieceId) -> Result<Square, BoardError> {
        self.locations.get(&id).copied().ok_or_else(|| {
            tracing::warn!(piece = %id, "lookup of a piece that is not on the board");
            BoardError::PieceNotFound(id)
        })
    }

    /// Returns the destinations available to the piece on `from`.
    pub fn moves_from(&self, from: Square) -> SquareList {
        available_moves(self, from)
    }

    /// Returns the destinations available to the given piece.
    pub fn available_moves(&self, id: PieceId) -> Result<SquareList, BoardError> {
        Ok(self.moves_from(self.locate(id)?))
    }

    /// Returns true if a king of `player` is attacked.
    pub fn is_in_check(&self, player: Player) -> bool {
        check::is_in_check(self, player)
    }
}

/// Move application.
impl Board {
    /// Moves the given piece to `to`. See [`apply_move`](Board::apply_move).
    pub fn move_to(&mut self, id: PieceId, to: Square) -> Result<(), BoardError> {
        let from = self.locate(id)?;
        self.apply_move(from, to)
    }

    /// Like [`apply_move`](Board::apply_move), but rejects an empty origin and
    /// any destination the piece cannot reach.
    pub fn play(&mut self, from: Square, to: Square) -> Result<(), BoardError> {
        let piece = self.piece_at(from).ok_or(BoardError::EmptySquare(from))?;
        self.ensure_turn(from, piece)?;
        if !self.moves_from(from).contains(to) {
            return Err(BoardError::IllegalDestination { from, to });
        }
        self.apply_move(from, to)
    }

    /// Moves the piece on `from` to `to`.
    ///
    /// Moving from an empty square does nothing. Otherwise the piece must
    /// belong to the player to move. The destination is not checked against
    /// the piece's available moves; use [`play`](Board::play) for that.
    ///
    /// A piece on `to` is captured. A pawn moving diagonally past an enemy
    /// pawn that is vulnerable to en passant captures that pawn. A pawn
    /// reaching the far row becomes a queen. Finally the turn passes to the
    /// opponent.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotYourTurn`] if the piece belongs to the other
    /// player, [`BoardError::OffBoard`] if `to` is off the board, and
    /// [`BoardError::IllegalDestination`] if `to` equals `from`.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<(), BoardError> {
        let Some(&mover) = self.piece_at(from) else {
            tracing::trace!(%from, "move from an empty square ignored");
            return Ok(());
        };
        self.ensure_turn(from, &mover)?;
        if !to.is_on_board() {
            return Err(BoardError::OffBoard(to));
        }
        if from == to {
            return Err(BoardError::IllegalDestination { from, to });
        }

        let player = self.current_player;
        let is_pawn = mover.kind() == PieceKind::Pawn;

        let direct_capture = self.take(to);
        if let Some(victim) = direct_capture {
            self.capture(victim);
        }

        let mut moved = self.take(from).unwrap_or(mover);
        moved.record_move(from, to);
        tracing::debug!(piece = %moved, %from, %to, "move applied");

        if is_pawn && direct_capture.is_none() && from.col() != to.col() {
            self.try_en_passant(&moved, Square::at(from.row(), to.col()));
        }

        if is_pawn && to.row() == player.promotion_row() {
            let queen = moved.promoted();
            tracing::debug!(pawn = %moved, queen = %queen, square = %to, "pawn promoted");
            moved = queen;
        }

        self.put(to, moved);

        if self.config.en_passant == EnPassantWindow::NextTurn {
            self.expire_en_passant(player.opponent());
        }

        self.current_player = player.opponent();
        tracing::debug!(player = %self.current_player, "turn passed");
        self.observers.current_player_changed(self.current_player);

        Ok(())
    }

    fn ensure_turn(&self, from: Square, piece: &Piece) -> Result<(), BoardError> {
        if piece.player() != self.current_player {
            tracing::warn!(piece = %piece, %from, to_move = %self.current_player, "move out of turn rejected");
            return Err(BoardError::NotYourTurn {
                square: from,
                player: self.current_player,
            });
        }
        Ok(())
    }

    /// Captures the enemy pawn on `beside` if it may be taken en passant.
    fn try_en_passant(&mut self, mover: &Piece, beside: Square) {
        let vulnerable = self.piece_at(beside).is_some_and(|victim| {
            victim.kind() == PieceKind::Pawn
                && victim.is_enemy_of(mover)
                && victim.is_vulnerable_to_en_passant()
        });
        if vulnerable {
            if let Some(victim) = self.take(beside) {
                tracing::debug!(pawn = %mover, victim = %victim, square = %beside, "en passant");
                self.capture(victim);
            }
        }
    }

    /// Ends the en passant window of `player`'s pawns.
    fn expire_en_passant(&mut self, player: Player) {
        for piece in self.grid.iter_mut().flatten().flatten() {
            if piece.player() == player && piece.is_vulnerable_to_en_passant() {
                tracing::trace!(pawn = %piece, "en passant window closed");
                piece.clear_en_passant();
            }
        }
    }

    fn capture(&mut self, victim: Piece) {
        tracing::debug!(piece = %victim, "piece captured");
        self.captured.push(victim);
        self.observers.piece_captured(&victim);
    }

    /// Clears `square`, keeping the location index in step.
    fn take(&mut self, square: Square) -> Option<Piece> {
        let (row, col) = square.indices()?;
        let piece = self.grid[row][col].take()?;
        self.locations.remove(&piece.id());
        Some(piece)
    }

    /// Writes `piece` to an on-board `square`, returning the displaced
    /// occupant.
    fn put(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        let displaced = self.take(square);
        if let Some((row, col)) = square.indices() {
            self.grid[row][col] = Some(piece);
            self.locations.insert(piece.id(), square);
        }
        displaced
    }
}

/// Notifications.
impl Board {
    /// Registers a handler called with every captured piece.
    pub fn on_piece_captured<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&Piece) + Send + 'static,
    {
        self.observers.on_piece_captured(Box::new(handler))
    }

    /// Registers a handler called with the new player to move after every
    /// move.
    pub fn on_current_player_changed<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(Player) + Send + 'static,
    {
        self.observers.on_current_player_changed(Box::new(handler))
    }

    /// Removes a handler. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            let line: String = row
                .iter()
                .map(|cell| cell.map_or('.', |piece| piece.to_char()))
                .collect();
            writeln!(f, "{}", line)?;
        }
        write!(f, "{} to move", self.current_player)
    }
}
