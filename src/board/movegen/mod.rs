mod attacks;
mod leapers;
mod pawns;
mod sliders;

use super::types::{Movement, PROMOTION_PIECES};
use super::{CastleType, Move, MoveKind, MoveList, Piece, Position, Square, SquareList};

/// Outcome of the side to move's situation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

impl Position {
    /// Candidate destinations of the piece on `from`, ignoring check.
    ///
    /// Uses the color of the piece standing there, not the side to move.
    /// An empty square yields an empty list. En passant and castling are not
    /// included.
    #[must_use]
    pub fn pseudo_destinations(&self, from: Square) -> SquareList {
        let mut out = SquareList::new();
        let Some((color, piece)) = self.piece_at(from) else {
            return out;
        };
        match piece.movement() {
            Movement::Pawn => self.pawn_destinations(from, color, &mut out),
            Movement::Leaper(offsets) => self.leaper_destinations(from, color, offsets, &mut out),
            Movement::Slider(directions) => {
                self.slider_destinations(from, color, directions, &mut out);
            }
        }
        out
    }

    /// Every pseudo-legal move of the side to move except castling.
    pub(crate) fn pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move;
        let promotion_rank = color.pawn_promotion_rank();

        for from in Square::all() {
            let cell = self.cell(from);
            if !cell.has_color(color) {
                continue;
            }
            let Some(piece) = cell.piece() else {
                unreachable!("colored cell without a kind on {from}");
            };

            for &to in &self.pseudo_destinations(from) {
                let captured = self.piece_at(to).map(|(_, victim)| victim);
                if piece == Piece::Pawn && to.rank() == promotion_rank {
                    for promo in PROMOTION_PIECES {
                        moves.push(Move::new(
                            from,
                            to,
                            MoveKind::Promotion {
                                piece: promo,
                                captured,
                            },
                        ));
                    }
                    continue;
                }
                let kind = match captured {
                    Some(victim) => MoveKind::Capture(victim),
                    None if piece == Piece::Pawn && from.rank().abs_diff(to.rank()) == 2 => {
                        MoveKind::DoublePush
                    }
                    None => MoveKind::Quiet,
                };
                moves.push(Move::new(from, to, kind));
            }

            if piece == Piece::Pawn {
                if let Some(to) = self.en_passant_capture(from) {
                    moves.push(Move::new(from, to, MoveKind::EnPassant));
                }
            }
        }

        moves
    }

    /// Can the side owning `castle` castle that way right now?
    ///
    /// Requires the right flag, king and rook on their home squares, empty
    /// squares between them, the king not in check, and no attacked square
    /// on the king's path.
    #[must_use]
    pub fn can_castle(&self, castle: CastleType) -> bool {
        let color = castle.color();
        let enemy = color.opponent();

        self.castling_rights.has(castle)
            && self.cell(castle.king_from()).is(color, Piece::King)
            && self.cell(castle.rook_from()).is(color, Piece::Rook)
            && castle.between().iter().all(|sq| self.is_empty(*sq))
            && !self.is_square_attacked(castle.king_from(), enemy)
            && !castle
                .king_path()
                .iter()
                .any(|sq| self.is_square_attacked(*sq, enemy))
    }

    /// All fully legal moves of the side to move.
    ///
    /// Each pseudo move is made, checked against the mover's king and
    /// unmade, so `self` is unchanged on return.
    pub fn legal_moves(&mut self) -> MoveList {
        let color = self.side_to_move;
        let mut legal = MoveList::new();

        for mv in self.pseudo_moves() {
            let info = self.make_move(mv);
            if !self.is_in_check(color) {
                legal.push(mv);
            }
            self.unmake_move(mv, info);
        }

        for castle in CastleType::for_color(color) {
            if self.can_castle(castle) {
                legal.push(Move::castle(castle));
            }
        }

        legal
    }

    /// Every position one legal move away, as independent copies.
    #[must_use]
    pub fn successors(&self) -> Vec<Position> {
        let mut scratch = self.clone();
        scratch
            .legal_moves()
            .iter()
            .map(|mv| self.apply(*mv))
            .collect()
    }

    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        self.in_check() && self.legal_moves().is_empty()
    }

    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        !self.in_check() && self.legal_moves().is_empty()
    }

    #[must_use]
    pub fn game_status(&mut self) -> GameStatus {
        if !self.legal_moves().is_empty() {
            GameStatus::Ongoing
        } else if self.in_check() {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }
}
