//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{Color, Piece, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square::E1, Color::White, Piece::King)
//!     .piece(Square::E8, Color::Black, Piece::King)
//!     .piece(Square::new(1, 0).unwrap(), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(position.king_square(Color::Black), Some(Square::E8));
//! ```

use super::error::BuilderError;
use super::{CastleType, CastlingRights, Color, Piece, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty position builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let start = Position::new();
        PositionBuilder {
            pieces: start.pieces().collect(),
            castling_rights: start.castling_rights(),
            ..Self::new()
        }
    }

    /// Place a piece, replacing whatever stood on `square`.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Grant a single castling right.
    #[must_use]
    pub fn castle(mut self, castle: CastleType) -> Self {
        self.castling_rights.set(castle);
        self
    }

    /// Enable all castling rights.
    #[must_use]
    pub const fn all_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::all();
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Set the halfmove clock.
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Set the fullmove number (starts at 1).
    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the position, rejecting layouts no game can reach.
    ///
    /// Castling rights whose king or rook is missing from its home square
    /// are dropped, as with FEN import.
    pub fn try_build(self) -> Result<Position, BuilderError> {
        if self.fullmove_number == 0 {
            return Err(BuilderError::InvalidFullmoveNumber);
        }

        let mut position = Position::empty();
        for (square, color, piece) in self.pieces {
            if piece == Piece::King && position.king_square(color).is_some() {
                return Err(BuilderError::DuplicateKing { color });
            }
            if piece == Piece::Pawn && (square.rank() == 0 || square.rank() == 7) {
                return Err(BuilderError::PawnOnBackRank {
                    square: square.to_string(),
                });
            }
            position.put(square, color, piece);
        }

        position.side_to_move = self.side_to_move;
        position.castling_rights = self.castling_rights;
        position.drop_unsupported_castling();
        if let Some(target) = self.en_passant_target {
            if !position.en_passant_target_is_plausible(target) {
                return Err(BuilderError::InvalidEnPassant {
                    square: target.to_string(),
                });
            }
        }
        position.en_passant_target = self.en_passant_target;
        position.halfmove_clock = self.halfmove_clock;
        position.fullmove_number = self.fullmove_number;

        Ok(position)
    }

    /// Build the position.
    ///
    /// # Panics
    /// Panics on the layouts `try_build` rejects.
    #[must_use]
    pub fn build(self) -> Position {
        self.try_build().expect("Invalid position")
    }
}
