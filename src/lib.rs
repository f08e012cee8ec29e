pub mod board;

pub use board::{find_best_move, Color, Move, Piece, Position, Square};
