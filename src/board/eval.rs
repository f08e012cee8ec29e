use super::pst::{square_bonus, Phase};
use super::{Position, SearchParams};

impl Position {
    /// Static score from the side to move's point of view, default tuning.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.evaluate_with(&SearchParams::default())
    }

    /// Material difference plus piece-square bonuses, from the side to
    /// move's point of view.
    #[must_use]
    pub fn evaluate_with(&self, params: &SearchParams) -> i32 {
        let us = self.side_to_move;
        let phase = if self.fullmove_number > params.endgame_fullmove {
            Phase::Endgame
        } else {
            Phase::Middlegame
        };

        let mut score = self.material(us) - self.material(us.opponent());
        for (sq, color, piece) in self.pieces() {
            let bonus = square_bonus(color, piece, sq, phase);
            if color == us {
                score += bonus;
            } else {
                score -= bonus;
            }
        }
        score
    }
}
