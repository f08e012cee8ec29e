//! Piece-square tables.
//!
//! Source tables are written the way a board is printed: rank 8 first, from
//! White's side. The lazily built grid tables index them by padded-grid
//! cell for each color, mirroring ranks for Black.

use once_cell::sync::Lazy;

use super::types::GRID_SIZE;
use super::{Color, Piece, Square};

#[rustfmt::skip]
const PAWN: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
     50,  50,  50,  50,  50,  50,  50,  50,
     10,  10,  20,  30,  30,  20,  10,  10,
      5,   5,  10,  25,  25,  10,   5,   5,
      0,   0,   0,  20,  20,   0,   0,   0,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      5,  10,  10, -20, -20,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10,  10,  10,  10,  10,   5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      0,   0,   0,   5,   5,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,   5,   5,   5,   0, -10,
     -5,   0,   5,   5,   5,   5,   0,  -5,
      0,   0,   5,   5,   5,   5,   0,  -5,
    -10,   5,   5,   5,   5,   5,   0, -10,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_MIDDLEGAME: [i32; 64] = [
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -10, -20, -20, -20, -20, -20, -20, -10,
     20,  20,   0,   0,   0,   0,  20,  20,
     20,  30,  10,   0,   0,  10,  30,  20,
];

#[rustfmt::skip]
const KING_ENDGAME: [i32; 64] = [
    -50, -40, -30, -20, -20, -30, -40, -50,
    -30, -20, -10,   0,   0, -10, -20, -30,
    -30, -10,  20,  30,  30,  20, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -10,  20,  30,  30,  20, -10, -30,
    -30, -30,   0,   0,   0,   0, -30, -30,
    -50, -30, -30, -30, -30, -30, -30, -50,
];

/// Which king table applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    Middlegame,
    Endgame,
}

const TABLE_COUNT: usize = 7;
const KING_ENDGAME_TABLE: usize = 6;

const SOURCE_TABLES: [&[i32; 64]; TABLE_COUNT] = [
    &PAWN,
    &KNIGHT,
    &BISHOP,
    &ROOK,
    &QUEEN,
    &KING_MIDDLEGAME,
    &KING_ENDGAME,
];

/// [color][table][grid cell]; border cells stay zero.
static GRID_TABLES: Lazy<Box<[[[i32; GRID_SIZE]; TABLE_COUNT]; 2]>> = Lazy::new(|| {
    let mut tables = Box::new([[[0; GRID_SIZE]; TABLE_COUNT]; 2]);
    for (table, source) in SOURCE_TABLES.iter().enumerate() {
        for sq in Square::all() {
            let white_row = 7 - sq.rank();
            let black_row = sq.rank();
            tables[Color::White.index()][table][sq.grid_index()] =
                source[white_row * 8 + sq.file()];
            tables[Color::Black.index()][table][sq.grid_index()] =
                source[black_row * 8 + sq.file()];
        }
    }
    tables
});

/// Positional bonus for `piece` of `color` standing on `sq`.
#[inline]
pub(crate) fn square_bonus(color: Color, piece: Piece, sq: Square, phase: Phase) -> i32 {
    let table = match (piece, phase) {
        (Piece::King, Phase::Endgame) => KING_ENDGAME_TABLE,
        _ => piece.index(),
    };
    GRID_TABLES[color.index()][table][sq.grid_index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_black_mirrors_white() {
        for piece in Piece::ALL {
            for square in Square::all() {
                for phase in [Phase::Middlegame, Phase::Endgame] {
                    assert_eq!(
                        square_bonus(Color::White, piece, square, phase),
                        square_bonus(Color::Black, piece, square.flip_vertical(), phase)
                    );
                }
            }
        }
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(square_bonus(Color::White, Piece::Pawn, sq("e2"), Phase::Middlegame), -20);
        assert_eq!(square_bonus(Color::White, Piece::Pawn, sq("e7"), Phase::Middlegame), 50);
        assert_eq!(square_bonus(Color::Black, Piece::Pawn, sq("e2"), Phase::Middlegame), 50);
        assert_eq!(square_bonus(Color::White, Piece::Knight, sq("a1"), Phase::Middlegame), -50);
        assert_eq!(square_bonus(Color::White, Piece::King, sq("g1"), Phase::Middlegame), 30);
        assert_eq!(square_bonus(Color::White, Piece::King, sq("g1"), Phase::Endgame), -30);
        assert_eq!(square_bonus(Color::Black, Piece::King, sq("e5"), Phase::Endgame), 40);
    }
}
