//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use mailbox_chess::board::prelude::*;
//!
//! let mut position = Position::from_fen(START_FEN);
//! assert_eq!(position.game_status(), GameStatus::Ongoing);
//! ```

pub use super::{
    find_best_move, CastleType, CastlingRights, Color, FenError, GameStatus, Move, MoveKind,
    MoveList, MoveParseError, Piece, Position, PositionBuilder, SearchLimits, SearchParams,
    SearchResult, Square, SquareError, START_FEN,
};
