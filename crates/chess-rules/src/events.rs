//! Board notifications.
//!
//! The board owns one observer list per channel. Handlers run synchronously
//! inside [`Board::apply_move`](crate::Board::apply_move), in registration
//! order. Because the board is mutably borrowed for the whole move, a
//! handler cannot reach back into it.

use crate::Piece;
use chess_core::Player;
use std::fmt;

/// Handle returned when registering an observer; pass it to
/// [`Board::unsubscribe`](crate::Board::unsubscribe) to stop receiving
/// notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type CaptureHandler = Box<dyn FnMut(&Piece) + Send>;
type PlayerHandler = Box<dyn FnMut(Player) + Send>;

#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    piece_captured: Vec<(SubscriptionId, CaptureHandler)>,
    player_changed: Vec<(SubscriptionId, PlayerHandler)>,
}

impl Observers {
    fn next_id(&mut self) -> SubscriptionId {
        self.next_id += 1;
        SubscriptionId(self.next_id)
    }

    pub(crate) fn on_piece_captured(&mut self, handler: CaptureHandler) -> SubscriptionId {
        let id = self.next_id();
        self.piece_captured.push((id, handler));
        id
    }

    pub(crate) fn on_current_player_changed(&mut self, handler: PlayerHandler) -> SubscriptionId {
        let id = self.next_id();
        self.player_changed.push((id, handler));
        id
    }

    /// Removes the observer with the given id from whichever list holds it.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.piece_captured.len() + self.player_changed.len();
        self.piece_captured.retain(|(sub, _)| *sub != id);
        self.player_changed.retain(|(sub, _)| *sub != id);
        before != self.piece_captured.len() + self.player_changed.len()
    }

    pub(crate) fn piece_captured(&mut self, piece: &Piece) {
        for (_, handler) in &mut self.piece_captured {
            handler(piece);
        }
    }

    pub(crate) fn current_player_changed(&mut self, player: Player) {
        for (_, handler) in &mut self.player_changed {
            handler(player);
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("piece_captured", &self.piece_captured.len())
            .field("player_changed", &self.player_changed.len())
            .finish()
    }
}
