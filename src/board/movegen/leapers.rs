use super::super::{Color, Position, Square, SquareList};

impl Position {
    /// Knight and king destinations: one hop per offset onto an empty or
    /// enemy-occupied square.
    pub(crate) fn leaper_destinations(
        &self,
        from: Square,
        color: Color,
        offsets: &[isize],
        out: &mut SquareList,
    ) {
        for delta in offsets {
            let idx = from.offset(*delta);
            let cell = self.cell_at(idx);
            if cell.is_off_board() || cell.has_color(color) {
                continue;
            }
            if let Some(to) = Square::from_grid(idx) {
                out.push(to);
            }
        }
    }
}
