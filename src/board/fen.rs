use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::types::castle_from_char;
use super::{CastleType, CastlingRights, Color, Move, Piece, Position, Square};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// All six fields are required. Castling flags whose king or rook is not
    /// on its home square are dropped.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let [placement, side, castling, en_passant, halfmove, fullmove] = fields[..] else {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        };

        let mut position = Position::empty();
        parse_placement(&mut position, placement)?;

        position.side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        position.castling_rights = parse_castling(castling)?;
        position.drop_unsupported_castling();

        position.en_passant_target = if en_passant == "-" {
            None
        } else {
            let invalid = || FenError::InvalidEnPassant {
                found: en_passant.to_string(),
            };
            let target: Square = en_passant.parse().map_err(|_| invalid())?;
            if !position.en_passant_target_is_plausible(target) {
                return Err(invalid());
            }
            Some(target)
        };

        position.halfmove_clock = halfmove
            .parse()
            .map_err(|_| FenError::InvalidHalfmoveClock {
                found: halfmove.to_string(),
            })?;

        position.fullmove_number = match fullmove.parse::<u32>() {
            Ok(n) if n >= 1 => n,
            _ => {
                return Err(FenError::InvalidFullmoveNumber {
                    found: fullmove.to_string(),
                })
            }
        };

        Ok(position)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::at(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights.to_fen(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (e.g., "e2e4", "e7e8q", "e1g1").
    ///
    /// Returns the matching legal move if found, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use mailbox_chess::board::Position;
    ///
    /// let mut position = Position::new();
    /// let mv = position.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let len = notation.chars().count();
        if !(4..=5).contains(&len) {
            return Err(MoveParseError::InvalidLength { len });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = notation
            .get(0..2)
            .and_then(|s| s.parse().ok())
            .ok_or_else(invalid_square)?;
        let to: Square = notation
            .get(2..4)
            .and_then(|s| s.parse().ok())
            .ok_or_else(invalid_square)?;

        let promotion = match notation.chars().nth(4) {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(piece) if !matches!(piece, Piece::Pawn | Piece::King) => Some(piece),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        self.legal_moves()
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promotion() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }

    /// Parse a coordinate-notation move and make it in one call.
    ///
    /// # Example
    /// ```
    /// use mailbox_chess::board::{Color, Position};
    ///
    /// let mut position = Position::new();
    /// position.play_move("e2e4").unwrap();
    /// position.play_move("e7e5").unwrap();
    /// assert_eq!(position.side_to_move(), Color::White);
    /// ```
    pub fn play_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(notation)?;
        self.make_move(mv);
        Ok(mv)
    }
}

fn parse_placement(position: &mut Position, placement: &str) -> Result<(), FenError> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::WrongRankCount { found: rows.len() });
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let rank = 7 - row_idx;
        let overflow = |files: usize| FenError::SquareOutOfRange {
            rank: rank + 1,
            files,
        };
        let mut file = 0;
        for c in row.chars() {
            if let '1'..='8' = c {
                file += c as usize - '0' as usize;
                if file > 8 {
                    return Err(overflow(file));
                }
                continue;
            }

            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            if file >= 8 {
                return Err(overflow(file + 1));
            }
            if piece == Piece::King && position.king_square(color).is_some() {
                return Err(FenError::DuplicateKing { color });
            }
            let square = Square::at(rank, file);
            if piece == Piece::Pawn && (rank == 0 || rank == 7) {
                return Err(FenError::PawnOnBackRank {
                    square: square.to_string(),
                });
            }
            position.put(square, color, piece);
            file += 1;
        }
        if file != 8 {
            return Err(overflow(file));
        }
    }

    Ok(())
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }

    let invalid = || FenError::InvalidCastling {
        found: field.to_string(),
    };
    for c in field.chars() {
        let castle: CastleType = castle_from_char(c).ok_or_else(invalid)?;
        if rights.has(castle) {
            return Err(invalid());
        }
        rights.set(castle);
    }
    Ok(rights)
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_round_trip() {
        let fens = [
            START_FEN,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 7 31",
        ];
        for fen in fens {
            assert_eq!(Position::from_fen(fen).to_fen(), fen);
        }
    }

    #[test]
    fn test_start_fen_matches_new() {
        assert_eq!(Position::from_fen(START_FEN), Position::new());
    }

    #[test]
    fn test_fen_black_to_move() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let position = Position::try_from_fen(fen).unwrap();
        assert_eq!(position.side_to_move(), Color::Black);
        assert_eq!(position.en_passant_target(), Some("e3".parse().unwrap()));
    }

    #[test]
    fn test_fen_error_field_count() {
        let result = Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -");
        assert_eq!(result, Err(FenError::WrongFieldCount { found: 4 }));
    }

    #[test]
    fn test_fen_error_rank_count() {
        let result = Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::WrongRankCount { found: 7 }));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result =
            Position::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::InvalidPiece { char: 'x' }));
    }

    #[test]
    fn test_fen_error_rank_overflow_and_underfill() {
        let overflow =
            Position::try_from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(overflow, Err(FenError::InvalidPiece { char: '9' })));

        let overflow =
            Position::try_from_fen("rnbqkbnrp/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(overflow, Err(FenError::SquareOutOfRange { rank: 8, files: 9 }));

        let overflow =
            Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKB4 w KQkq - 0 1");
        assert_eq!(overflow, Err(FenError::SquareOutOfRange { rank: 1, files: 10 }));

        let underfill =
            Position::try_from_fen("rnbqkbnr/pppppppp/7/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(underfill, Err(FenError::SquareOutOfRange { rank: 6, files: 7 }));
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result =
            Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_invalid_castling() {
        for field in ["XQkq", "KK", "K-"] {
            let fen = format!("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w {field} - 0 1");
            assert!(
                matches!(Position::try_from_fen(&fen), Err(FenError::InvalidCastling { .. })),
                "{field} should be rejected"
            );
        }
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        let result =
            Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));

        // White to move: the target must be on the sixth rank
        let result =
            Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e3 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));

        // Right rank, but no black pawn on e5 to capture
        let result =
            Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e6 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn test_fen_error_pawn_on_back_rank() {
        let result = Position::try_from_fen("4k2P/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(
            result,
            Err(FenError::PawnOnBackRank {
                square: "h8".to_string()
            })
        );

        let result = Position::try_from_fen("4k3/8/8/8/8/8/8/p3K3 b - - 0 1");
        assert!(matches!(result, Err(FenError::PawnOnBackRank { .. })));
    }

    #[test]
    fn test_fen_error_clocks() {
        let result = Position::try_from_fen("8/8/8/8/8/8/8/K1k5 w - - -3 1");
        assert!(matches!(result, Err(FenError::InvalidHalfmoveClock { .. })));

        let result = Position::try_from_fen("8/8/8/8/8/8/8/K1k5 w - - 0 0");
        assert!(matches!(result, Err(FenError::InvalidFullmoveNumber { .. })));

        let result = Position::try_from_fen("8/8/8/8/8/8/8/K1k5 w - - 0 x");
        assert!(matches!(result, Err(FenError::InvalidFullmoveNumber { .. })));
    }

    #[test]
    fn test_fen_error_duplicate_king() {
        let result = Position::try_from_fen("8/8/8/8/8/8/8/K1K1k3 w - - 0 1");
        assert_eq!(
            result,
            Err(FenError::DuplicateKing {
                color: Color::White
            })
        );
    }

    #[test]
    fn test_fen_drops_unsupported_castling() {
        // White king is off e1 and the black h8 rook is missing.
        let position =
            Position::try_from_fen("rnbqkbn1/pppppppp/8/8/8/8/PPPPPPPP/RNBQ1KNR w KQkq - 0 1")
                .unwrap();
        assert_eq!(position.castling_rights().to_fen(), "q");
    }

    #[test]
    fn test_fen_kingless_fixture() {
        let position = Position::try_from_fen("8/8/8/8/3N4/8/8/8 w - - 0 1").unwrap();
        assert_eq!(position.king_square(Color::White), None);
        assert_eq!(position.king_square(Color::Black), None);
        assert_eq!(position.material(Color::White), 320);
    }

    #[test]
    fn test_halfmove_and_fullmove_parsing() {
        let position = Position::try_from_fen("8/8/8/8/8/8/8/K1k5 w - - 42 17").unwrap();
        assert_eq!(position.halfmove_clock(), 42);
        assert_eq!(position.fullmove_number(), 17);
    }

    #[test]
    fn test_parse_move_e2e4() {
        let mut position = Position::new();
        let mv = position.parse_move("e2e4").unwrap();
        assert_eq!(mv.from(), Square::new(1, 4).unwrap());
        assert_eq!(mv.to(), Square::new(3, 4).unwrap());
        assert!(mv.is_double_pawn_push());
    }

    #[test]
    fn test_parse_move_promotion() {
        let mut position = Position::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let mv = position.parse_move("a7a8q").unwrap();
        assert_eq!(mv.promotion(), Some(Piece::Queen));
    }

    #[test]
    fn test_parse_move_castle() {
        let mut position = Position::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let mv = position.parse_move("e1c1").unwrap();
        assert!(mv.is_castling());
    }

    #[test]
    fn test_parse_move_errors() {
        let mut position = Position::new();
        assert!(matches!(
            position.parse_move("e2"),
            Err(MoveParseError::InvalidLength { len: 2 })
        ));
        assert!(matches!(
            position.parse_move("z9z9"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            position.parse_move("e2e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));

        let mut promo = Position::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        assert!(matches!(
            promo.parse_move("a7a8p"),
            Err(MoveParseError::InvalidPromotion { char: 'p' })
        ));
        assert!(matches!(
            promo.parse_move("a7a8"),
            Err(MoveParseError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_from_str_trait() {
        let position: Position = START_FEN.parse().unwrap();
        assert_eq!(position.side_to_move(), Color::White);
    }

    #[test]
    fn test_play_move() {
        let mut position = Position::new();
        position.play_move("e2e4").unwrap();
        assert_eq!(position.side_to_move(), Color::Black);
        assert_eq!(
            position.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }
}
