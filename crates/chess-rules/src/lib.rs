//! Chess rules engine on an 8×8 grid.
//!
//! This crate provides:
//! - [`Board`] - the grid, side to move, capture log and notifications
//! - [`Piece`] - a piece with identity, owner, move count and en passant state
//! - Move generation for every piece kind ([`movegen`])
//! - Check detection ([`check`])
//! - Move application with capture, en passant and promotion
//! - [`RulesConfig`] - rule options, loadable from TOML
//!
//! Castling, move notation and game-over adjudication are left to callers.
//! A king with no available moves while [`Board::is_in_check`] is true is
//! checkmated; without check it is stalemated.
//!
//! # Example
//!
//! ```
//! use chess_rules::{Board, Piece, Player, Square};
//!
//! let mut board = Board::new(Player::White);
//! let pawn = Piece::pawn(Player::White);
//! board.place_piece(Square::at(6, 4), pawn).unwrap();
//!
//! let moves = board.available_moves(pawn.id()).unwrap();
//! assert!(moves.contains(Square::at(4, 4)));
//!
//! board.move_to(pawn.id(), Square::at(4, 4)).unwrap();
//! assert_eq!(board.current_player(), Player::Black);
//! ```

mod board;
pub mod check;
mod config;
mod error;
mod events;
pub mod movegen;
mod piece;
pub mod setup;

pub use board::Board;
pub use check::is_in_check_at_position;
pub use config::{ConfigError, EnPassantWindow, RulesConfig};
pub use error::BoardError;
pub use events::SubscriptionId;
pub use movegen::{available_moves, SquareList};
pub use piece::{Piece, PieceId};

pub use chess_core::{PieceKind, Placement, PlacementError, Player, Square};
