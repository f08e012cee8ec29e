use super::super::types::grid_step;
use super::super::{Color, Position, Square, SquareList};

impl Position {
    /// Bishop, rook and queen destinations: every empty square along each
    /// direction, then the blocker if it belongs to the opponent.
    pub(crate) fn slider_destinations(
        &self,
        from: Square,
        color: Color,
        directions: &[isize],
        out: &mut SquareList,
    ) {
        for delta in directions {
            let mut idx = from.offset(*delta);
            loop {
                let cell = self.cell_at(idx);
                if cell.is_off_board() {
                    break;
                }
                let Some(to) = Square::from_grid(idx) else {
                    unreachable!("grid cell {idx} is neither border nor square");
                };
                if cell.is_empty() {
                    out.push(to);
                    idx = grid_step(idx, *delta);
                    continue;
                }
                if !cell.has_color(color) {
                    out.push(to);
                }
                break;
            }
        }
    }
}
