//! Core types for the chess rules engine.
//!
//! This crate provides the value types shared across the workspace:
//! - [`Player`] for the two sides
//! - [`Square`] for (row, column) board coordinates
//! - [`PieceKind`] for the six kinds of pieces
//! - [`Placement`] diagrams for describing a layout in text

mod piece;
mod placement;
mod player;
mod square;

pub use piece::PieceKind;
pub use placement::{Placement, PlacementError};
pub use player::Player;
pub use square::{Square, BOARD_SIZE};
