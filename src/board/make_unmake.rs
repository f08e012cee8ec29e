use super::types::Cell;
use super::{Color, Move, MoveKind, Piece, Position, Square, UnmakeInfo};

/// Square of the pawn removed by an en-passant capture from `from` to `to`.
#[inline]
pub(crate) fn en_passant_victim(from: Square, to: Square) -> Square {
    Square::at(from.rank(), to.file())
}

impl Position {
    /// Write `cell` onto an empty square, keeping material and king squares current.
    fn put_cell(&mut self, sq: Square, cell: Cell) {
        debug_assert!(
            self.cell(sq).is_empty(),
            "put onto occupied square {sq}"
        );
        if let Some((color, piece)) = cell.decode() {
            self.material[color.index()] += piece.value();
            if piece == Piece::King {
                self.king_square[color.index()] = Some(sq);
            }
        }
        self.grid[sq.grid_index()] = cell;
    }

    #[inline]
    pub(crate) fn put(&mut self, sq: Square, color: Color, piece: Piece) {
        self.put_cell(sq, Cell::new(color, piece));
    }

    /// Empty `sq`, returning what stood there.
    pub(crate) fn take(&mut self, sq: Square) -> Cell {
        let cell = self.cell(sq);
        if let Some((color, piece)) = cell.decode() {
            self.material[color.index()] -= piece.value();
            if piece == Piece::King && self.king_square[color.index()] == Some(sq) {
                self.king_square[color.index()] = None;
            }
        }
        self.grid[sq.grid_index()] = Cell::EMPTY;
        cell
    }

    /// Apply a fully specified move for the side to move.
    ///
    /// No legality check is made; `mv` must come from this position's move
    /// generator (or be known pseudo-legal). The returned record undoes the
    /// move exactly via [`Position::unmake_move`].
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let color = self.side_to_move;
        let from = mv.from();
        let to = mv.to();

        let mut info = UnmakeInfo {
            captured: Cell::EMPTY,
            previous_castling_rights: self.castling_rights,
            previous_en_passant_target: self.en_passant_target,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
            previous_material: self.material,
            previous_king_square: self.king_square,
        };

        let Some((mover_color, mover)) = self.piece_at(from) else {
            unreachable!("make_move {mv} from an empty square");
        };
        debug_assert_eq!(mover_color, color, "make_move {mv} moves an enemy piece");

        match mv.kind() {
            MoveKind::Castle(castle) => {
                self.take(castle.king_from());
                let rook = self.take(castle.rook_from());
                debug_assert!(rook.is(color, Piece::Rook), "castling without rook");
                self.put(castle.king_to(), color, Piece::King);
                self.put(castle.rook_to(), color, Piece::Rook);
            }
            MoveKind::EnPassant => {
                info.captured = self.take(en_passant_victim(from, to));
                let pawn = self.take(from);
                self.put_cell(to, pawn);
            }
            MoveKind::Promotion { piece, .. } => {
                info.captured = self.take(to);
                self.take(from);
                self.put(to, color, piece);
            }
            MoveKind::Quiet | MoveKind::DoublePush | MoveKind::Capture(_) => {
                info.captured = self.take(to);
                let moving = self.take(from);
                self.put_cell(to, moving);
            }
        }

        if mover == Piece::King {
            self.castling_rights.remove_color(color);
        }
        self.castling_rights.remove_corner(from);
        self.castling_rights.remove_corner(to);

        self.en_passant_target = if mv.is_double_pawn_push() {
            Some(Square::at((from.rank() + to.rank()) / 2, from.file()))
        } else {
            None
        };

        if mover == Piece::Pawn || info.captured.is_piece() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = color.opponent();

        info
    }

    /// Revert `mv`, which must be the last move made on this position.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        let color = self.side_to_move.opponent();
        let from = mv.from();
        let to = mv.to();

        match mv.kind() {
            MoveKind::Castle(castle) => {
                self.take(castle.king_to());
                self.take(castle.rook_to());
                self.put(castle.king_from(), color, Piece::King);
                self.put(castle.rook_from(), color, Piece::Rook);
            }
            MoveKind::EnPassant => {
                let pawn = self.take(to);
                self.put_cell(from, pawn);
                self.put_cell(en_passant_victim(from, to), info.captured);
            }
            MoveKind::Promotion { .. } => {
                self.take(to);
                self.put(from, color, Piece::Pawn);
                self.put_cell(to, info.captured);
            }
            MoveKind::Quiet | MoveKind::DoublePush | MoveKind::Capture(_) => {
                let moving = self.take(to);
                self.put_cell(from, moving);
                self.put_cell(to, info.captured);
            }
        }

        self.side_to_move = color;
        self.castling_rights = info.previous_castling_rights;
        self.en_passant_target = info.previous_en_passant_target;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;
        self.material = info.previous_material;
        self.king_square = info.previous_king_square;
    }

    /// The position after `mv`, leaving `self` untouched.
    #[must_use]
    pub fn apply(&self, mv: Move) -> Position {
        let mut child = self.clone();
        child.make_move(mv);
        child
    }
}
