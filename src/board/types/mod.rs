//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `Piece` and `Color` - chess piece kinds and colors
//! - `Square` - a playable square, stored as a padded-grid index
//! - `Cell` - one packed byte of the padded grid
//! - `Move`, `MoveKind`, `MoveList` and `SquareList` - move representation
//! - `CastlingRights` and `CastleType` - castling state and geometry

mod castling;
mod cell;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use castling::{CastleType, CastlingRights};
pub use cell::Cell;
pub use moves::{Move, MoveKind, MoveList, MoveListIntoIter, SquareList};
pub use piece::{Color, Piece};
pub use square::Square;

// Re-export internal utilities
pub(crate) use castling::castle_from_char;
pub(crate) use piece::{Movement, PROMOTION_PIECES};
pub(crate) use square::{grid_step, EAST, GRID_SIZE, WEST};
