//! Packed grid cell.
//!
//! Bits 0-2 hold the piece kind, bits 3-4 the color, bit 7 marks the
//! off-board border. An empty cell is all zeroes.

use super::piece::{Color, Piece};

const KIND_MASK: u8 = 0b0000_0111;
const WHITE_BIT: u8 = 0b0000_1000;
const BLACK_BIT: u8 = 0b0001_0000;
const COLOR_MASK: u8 = WHITE_BIT | BLACK_BIT;
const OFF_BOARD_BIT: u8 = 0b1000_0000;

#[inline]
const fn color_bit(color: Color) -> u8 {
    match color {
        Color::White => WHITE_BIT,
        Color::Black => BLACK_BIT,
    }
}

/// Contents of one cell of the padded grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell(u8);

impl Cell {
    pub const EMPTY: Cell = Cell(0);
    pub const OFF_BOARD: Cell = Cell(OFF_BOARD_BIT);

    #[inline]
    #[must_use]
    pub const fn new(color: Color, piece: Piece) -> Self {
        Cell(color_bit(color) | piece.bits())
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_off_board(self) -> bool {
        self.0 & OFF_BOARD_BIT != 0
    }

    /// True when the cell holds a piece of either color.
    #[inline]
    #[must_use]
    pub const fn is_piece(self) -> bool {
        self.0 & COLOR_MASK != 0
    }

    #[inline]
    #[must_use]
    pub const fn has_color(self, color: Color) -> bool {
        self.0 & color_bit(color) != 0
    }

    #[inline]
    #[must_use]
    pub fn color(self) -> Option<Color> {
        match self.0 & COLOR_MASK {
            WHITE_BIT => Some(Color::White),
            BLACK_BIT => Some(Color::Black),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece(self) -> Option<Piece> {
        if self.is_off_board() {
            return None;
        }
        Piece::from_bits(self.0 & KIND_MASK)
    }

    /// True when the cell holds exactly `piece` of `color`.
    #[inline]
    #[must_use]
    pub const fn is(self, color: Color, piece: Piece) -> bool {
        self.0 == Cell::new(color, piece).0
    }

    #[inline]
    #[must_use]
    pub fn decode(self) -> Option<(Color, Piece)> {
        Some((self.color()?, self.piece()?))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::EMPTY
    }
}
