use super::types::{Cell, GRID_SIZE};
use super::{CastleType, CastlingRights, Color, Piece, Square};

/// Undo record returned by [`Position::make_move`].
///
/// Holds exactly what `unmake_move` cannot recompute from the move itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) captured: Cell,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
    pub(crate) previous_material: [i32; 2],
    pub(crate) previous_king_square: [Option<Square>; 2],
}

/// A chess position on a padded 12x12 mailbox grid.
///
/// The 64 playable cells sit in rows and columns 2..=9; every other cell is
/// permanently [`Cell::OFF_BOARD`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) grid: [Cell; GRID_SIZE],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) king_square: [Option<Square>; 2],
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    // [white, black] sum of piece values, kings included
    pub(crate) material: [i32; 2],
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            position.put(Square::at(0, file), Color::White, *piece);
            position.put(Square::at(1, file), Color::White, Piece::Pawn);
            position.put(Square::at(6, file), Color::Black, Piece::Pawn);
            position.put(Square::at(7, file), Color::Black, *piece);
        }
        position.castling_rights = CastlingRights::all();
        position
    }

    /// An empty board, White to move, no rights.
    pub(crate) fn empty() -> Self {
        let mut grid = [Cell::OFF_BOARD; GRID_SIZE];
        for sq in Square::all() {
            grid[sq.grid_index()] = Cell::EMPTY;
        }
        Position {
            grid,
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            king_square: [None, None],
            halfmove_clock: 0,
            fullmove_number: 1,
            material: [0, 0],
        }
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Location of `color`'s king, `None` only for kingless fixtures.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_square[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Running material total of `color` in centipawns.
    #[inline]
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        self.material[color.index()]
    }

    #[inline]
    pub(crate) fn cell(&self, sq: Square) -> Cell {
        self.grid[sq.grid_index()]
    }

    /// Raw grid read; `idx` may name a border cell.
    #[inline]
    pub(crate) fn cell_at(&self, idx: usize) -> Cell {
        self.grid[idx]
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.cell(sq).decode()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cell(sq).is_empty()
    }

    /// Every occupied square, a1 through h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.piece_at(sq)
                .map(|(color, piece)| (sq, color, piece))
        })
    }

    /// Clear every castling right whose king or rook is not on its home square.
    pub(crate) fn drop_unsupported_castling(&mut self) {
        for castle in CastleType::ALL {
            let color = castle.color();
            let supported = self.cell(castle.king_from()).is(color, Piece::King)
                && self.cell(castle.rook_from()).is(color, Piece::Rook);
            if !supported {
                self.castling_rights.remove(castle);
            }
        }
    }

    /// Whether `target` could follow an opponent double push: right rank, empty
    /// target and origin, and an opponent pawn on the square beyond.
    pub(crate) fn en_passant_target_is_plausible(&self, target: Square) -> bool {
        let them = self.side_to_move.opponent();
        let push = them.pawn_push();
        let expected_rank = match self.side_to_move {
            Color::White => 5,
            Color::Black => 2,
        };
        target.rank() == expected_rank
            && self.cell(target).is_empty()
            && self.cell_at(target.offset(-push)).is_empty()
            && self.cell_at(target.offset(push)).is(them, Piece::Pawn)
    }

    /// Material and king squares recomputed from the grid alone.
    #[cfg(test)]
    pub(crate) fn derived_from_grid(&self) -> ([i32; 2], [Option<Square>; 2]) {
        let mut material = [0, 0];
        let mut kings = [None, None];
        for (sq, color, piece) in self.pieces() {
            material[color.index()] += piece.value();
            if piece == Piece::King {
                kings[color.index()] = Some(sq);
            }
        }
        (material, kings)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
