//! Chess position representation and rules.
//!
//! Uses a padded 12x12 mailbox grid so that knight jumps and ray scans stop
//! on off-board sentinel cells instead of bounds checks. Supports full chess
//! rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use mailbox_chess::board::Position;
//!
//! let mut position = Position::new();
//! let moves = position.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! assert_eq!(position.perft(3), vec![20, 400, 8902]);
//! ```

mod builder;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod perft;
pub mod prelude;
mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::{BuilderError, FenError, MoveParseError, SquareError};
pub use fen::START_FEN;
pub use movegen::GameStatus;
pub use state::{Position, UnmakeInfo};
pub use types::{
    CastleType, CastlingRights, Cell, Color, Move, MoveKind, MoveList, MoveListIntoIter, Piece,
    Square, SquareList,
};

// Public API - search functions and configuration
pub use search::{find_best_move, find_best_move_with, SearchLimits, SearchParams, SearchResult};
