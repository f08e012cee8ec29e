use super::super::types::{grid_step, EAST, WEST};
use super::super::{Color, Piece, Position, Square, SquareList};

impl Position {
    /// Pushes, the double push from the start rank, and diagonal captures.
    /// En passant is handled by [`Position::en_passant_capture`].
    pub(crate) fn pawn_destinations(&self, from: Square, color: Color, out: &mut SquareList) {
        let push = color.pawn_push();

        let one = from.offset(push);
        if self.cell_at(one).is_empty() {
            if let Some(to) = Square::from_grid(one) {
                out.push(to);
            }
            if from.rank() == color.pawn_start_rank() {
                let two = grid_step(one, push);
                if self.cell_at(two).is_empty() {
                    if let Some(to) = Square::from_grid(two) {
                        out.push(to);
                    }
                }
            }
        }

        for side in [EAST, WEST] {
            let idx = from.offset(push + side);
            let cell = self.cell_at(idx);
            if cell.is_piece() && !cell.has_color(color) {
                if let Some(to) = Square::from_grid(idx) {
                    out.push(to);
                }
            }
        }
    }

    /// The en-passant destination available to the pawn on `from`, if any.
    ///
    /// Only a pawn of the side to move qualifies, and only when the current
    /// en-passant target is one of the two squares diagonally ahead of it.
    #[must_use]
    pub fn en_passant_capture(&self, from: Square) -> Option<Square> {
        let target = self.en_passant_target?;
        let color = self.side_to_move;
        if !self.cell(from).is(color, Piece::Pawn) {
            return None;
        }
        let push = color.pawn_push();
        [EAST, WEST]
            .iter()
            .any(|side| from.offset(push + side) == target.grid_index())
            .then_some(target)
    }
}
