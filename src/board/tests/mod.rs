//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Successor tallies for move generation correctness
//! - `attacks.rs` - Attack detection per attacker kind
//! - `castling.rs` - Castling preconditions and rights bookkeeping
//! - `en_passant.rs` - En passant targets and captures
//! - `promotion.rs` - Promotion choices and material
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `movegen.rs` - Destinations of single pieces
//! - `edge_cases.rs` - Special positions and edge cases
//! - `search.rs` - Best-move search behavior
//! - `proptest.rs` - Property-based tests

mod promotion;
mod search;

use crate::board::{Move, Piece, Position, Square};

/// Parse algebraic square notation, panicking on bad input.
pub(super) fn sq(notation: &str) -> Square {
    notation.parse().expect("valid square")
}

/// The legal move from `from` to `to` with the given promotion.
pub(super) fn find_move(
    position: &mut Position,
    from: &str,
    to: &str,
    promotion: Option<Piece>,
) -> Move {
    let (from, to) = (sq(from), sq(to));
    position
        .legal_moves()
        .into_iter()
        .find(|m| m.from() == from && m.to() == to && m.promotion() == promotion)
        .unwrap_or_else(|| panic!("expected move {from}{to} not found"))
}
