use super::super::types::{grid_step, Movement, EAST, WEST};
use super::super::{Color, Piece, Position, Square};

/// Kinds probed outward from the target square; queens ride along with
/// both slider probes.
const PROBES: [Piece; 4] = [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::King];

impl Position {
    /// Is `square` attacked by any piece of `by`?
    ///
    /// Probes outward from `square` using the same movement table as the
    /// move generator. Rays stop at the first occupied or off-board cell.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        // An attacking pawn sits one step behind `square` from its own side.
        let behind = -by.pawn_push();
        for side in [EAST, WEST] {
            if self.cell_at(square.offset(behind + side)).is(by, Piece::Pawn) {
                return true;
            }
        }

        for piece in PROBES {
            match piece.movement() {
                Movement::Leaper(offsets) => {
                    if offsets
                        .iter()
                        .any(|delta| self.cell_at(square.offset(*delta)).is(by, piece))
                    {
                        return true;
                    }
                }
                Movement::Slider(directions) => {
                    for delta in directions {
                        let mut idx = square.offset(*delta);
                        let mut cell = self.cell_at(idx);
                        while cell.is_empty() {
                            idx = grid_step(idx, *delta);
                            cell = self.cell_at(idx);
                        }
                        if cell.is(by, piece) || cell.is(by, Piece::Queen) {
                            return true;
                        }
                    }
                }
                Movement::Pawn => unreachable!("pawns are probed separately"),
            }
        }

        false
    }

    /// Is `color`'s king attacked? A side without a king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// Is the side to move in check?
    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }
}
