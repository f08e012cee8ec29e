//! Castling rights and castle geometry.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// The four ways to castle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleType {
    WhiteKingside,
    WhiteQueenside,
    BlackKingside,
    BlackQueenside,
}

impl CastleType {
    pub const ALL: [CastleType; 4] = [
        CastleType::WhiteKingside,
        CastleType::WhiteQueenside,
        CastleType::BlackKingside,
        CastleType::BlackQueenside,
    ];

    /// Both castle types available to `color`, kingside first.
    #[must_use]
    pub const fn for_color(color: Color) -> [CastleType; 2] {
        match color {
            Color::White => [CastleType::WhiteKingside, CastleType::WhiteQueenside],
            Color::Black => [CastleType::BlackKingside, CastleType::BlackQueenside],
        }
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            CastleType::WhiteKingside | CastleType::WhiteQueenside => Color::White,
            CastleType::BlackKingside | CastleType::BlackQueenside => Color::Black,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_kingside(self) -> bool {
        matches!(self, CastleType::WhiteKingside | CastleType::BlackKingside)
    }

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            CastleType::WhiteKingside => CASTLE_WHITE_K,
            CastleType::WhiteQueenside => CASTLE_WHITE_Q,
            CastleType::BlackKingside => CASTLE_BLACK_K,
            CastleType::BlackQueenside => CASTLE_BLACK_Q,
        }
    }

    #[must_use]
    pub const fn king_from(self) -> Square {
        Square::at(self.color().back_rank(), 4)
    }

    #[must_use]
    pub const fn king_to(self) -> Square {
        let file = if self.is_kingside() { 6 } else { 2 };
        Square::at(self.color().back_rank(), file)
    }

    #[must_use]
    pub const fn rook_from(self) -> Square {
        let file = if self.is_kingside() { 7 } else { 0 };
        Square::at(self.color().back_rank(), file)
    }

    #[must_use]
    pub const fn rook_to(self) -> Square {
        let file = if self.is_kingside() { 5 } else { 3 };
        Square::at(self.color().back_rank(), file)
    }

    /// Squares strictly between king and rook; all must be empty.
    #[must_use]
    pub fn between(self) -> &'static [Square] {
        match self {
            CastleType::WhiteKingside => &[Square::F1, Square::G1],
            CastleType::WhiteQueenside => &[Square::B1, Square::C1, Square::D1],
            CastleType::BlackKingside => &[Square::F8, Square::G8],
            CastleType::BlackQueenside => &[Square::B8, Square::C8, Square::D8],
        }
    }

    /// Squares the king transits or lands on; none may be attacked.
    #[must_use]
    pub fn king_path(self) -> &'static [Square] {
        match self {
            CastleType::WhiteKingside => &[Square::F1, Square::G1],
            CastleType::WhiteQueenside => &[Square::D1, Square::C1],
            CastleType::BlackKingside => &[Square::F8, Square::G8],
            CastleType::BlackQueenside => &[Square::D8, Square::C8],
        }
    }
}

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    #[inline]
    #[must_use]
    pub const fn has(self, castle: CastleType) -> bool {
        self.0 & castle.bit() != 0
    }

    #[inline]
    pub fn set(&mut self, castle: CastleType) {
        self.0 |= castle.bit();
    }

    #[inline]
    pub fn remove(&mut self, castle: CastleType) {
        self.0 &= !castle.bit();
    }

    /// Drop both rights of `color`.
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        for castle in CastleType::for_color(color) {
            self.remove(castle);
        }
    }

    /// Drop the right tied to a rook home corner, if `square` is one.
    #[inline]
    pub(crate) fn remove_corner(&mut self, square: Square) {
        for castle in CastleType::ALL {
            if castle.rook_from() == square {
                self.remove(castle);
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & ALL_CASTLING_RIGHTS)
    }

    /// FEN castling field: a subset of `KQkq`, or `-`.
    #[must_use]
    pub fn to_fen(self) -> String {
        let flags: String = CastleType::ALL
            .iter()
            .filter(|castle| self.has(**castle))
            .map(|castle| castle_char(*castle))
            .collect();
        if flags.is_empty() {
            "-".to_string()
        } else {
            flags
        }
    }
}

fn castle_char(castle: CastleType) -> char {
    match castle {
        CastleType::WhiteKingside => 'K',
        CastleType::WhiteQueenside => 'Q',
        CastleType::BlackKingside => 'k',
        CastleType::BlackQueenside => 'q',
    }
}

pub(crate) fn castle_from_char(c: char) -> Option<CastleType> {
    CastleType::ALL
        .iter()
        .copied()
        .find(|castle| castle_char(*castle) == c)
}
