use std::str::FromStr;

use log::debug;

use super::error::{FenError, MoveParseError};
use super::movegen::MoveGen;
use super::types::{CastlingRights, CastlingSide, Color, Move, Piece, Square};
use super::Position;

impl Position {
    /// Parse a position from FEN notation.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut pos = Position::new();
        pos.set_from_fen(fen)?;
        Ok(pos)
    }

    /// Replace this position with the one described by `fen`.
    ///
    /// The half-move clock and full-move number may be omitted and default to
    /// `0` and `1`. On error the position is left reset.
    pub fn set_from_fen(&mut self, fen: &str) -> Result<(), FenError> {
        self.reset();
        if let Err(err) = self.read_fen(fen) {
            self.reset();
            return Err(err);
        }
        self.seed_hashes();
        debug!("loaded FEN {fen}");
        Ok(())
    }

    fn read_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        self.read_placement(parts[0])?;

        self.side_to_move = match parts[1] {
            "w" | "W" => Color::White,
            "b" | "B" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => rights.set(CastlingSide::WhiteShort),
                'Q' => rights.set(CastlingSide::WhiteLong),
                'k' => rights.set(CastlingSide::BlackShort),
                'q' => rights.set(CastlingSide::BlackLong),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        self.castling_rights = rights;

        self.en_passant = match parts[3] {
            "-" => None,
            text => Some(text.parse::<Square>().map_err(|_| FenError::InvalidEnPassant {
                found: text.to_string(),
            })?),
        };

        let fifty = parse_counter(parts.get(4).copied(), 0)?;
        let fullmove = parse_counter(parts.get(5).copied(), 1)?;
        self.fifty_move_counter = fifty;
        // Half-move 0 is White's first move.
        let white = u32::from(self.side_to_move == Color::White);
        let plies = fullmove.checked_mul(2).ok_or_else(|| FenError::InvalidCounter {
            found: fullmove.to_string(),
        })?;
        self.halfmove_counter = plies.saturating_sub(1 + white);
        Ok(())
    }

    fn read_placement(&mut self, placement: &str) -> Result<(), FenError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::InvalidRank { rank: rows.len() });
        }
        for (rank_idx, row) in rows.iter().enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file = 0usize;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let sq = Square::new(rank, file as u8).ok_or(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file + 1,
                    })?;
                    self.add_piece(piece, color, sq);
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file,
                    });
                }
            }
        }
        Ok(())
    }

    /// Convert the position to FEN notation. The full-move number is derived
    /// from the half-move counter.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8u8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8u8 {
                let placed = Square::new(rank, file)
                    .and_then(|sq| Some((self.piece_on(sq)?, self.color_on(sq)?)));
                if let Some((piece, color)) = placed {
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
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights,
            ep,
            self.fifty_move_counter,
            self.halfmove_counter / 2 + 1
        )
    }

    /// Find the legal move written in protocol notation (`e2e4`, `e7e8q`,
    /// `e1g1` for castling).
    pub fn parse_protocol_move(
        &mut self,
        movegen: &MoveGen<'_>,
        text: &str,
    ) -> Result<Move, MoveParseError> {
        if text.len() < 4 || text.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: text.len() });
        }
        let invalid_square = || MoveParseError::InvalidSquare {
            notation: text.to_string(),
        };
        let squares = text.get(0..4).ok_or_else(invalid_square)?;
        squares
            .get(0..2)
            .and_then(|s| s.parse::<Square>().ok())
            .zip(squares.get(2..4).and_then(|s| s.parse::<Square>().ok()))
            .ok_or_else(invalid_square)?;

        if let Some(c) = text[4..].chars().next() {
            match Piece::from_char(c) {
                Some(Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen) => {}
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            }
        }

        let wanted = text.to_ascii_lowercase();
        movegen
            .legal_moves(self)
            .into_iter()
            .find(|mv| mv.to_protocol() == wanted)
            .ok_or(MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }

    /// Parse a protocol move and make it in one call.
    pub fn make_protocol_move(
        &mut self,
        movegen: &MoveGen<'_>,
        text: &str,
    ) -> Result<Move, MoveParseError> {
        let mv = self.parse_protocol_move(movegen, text)?;
        self.make_move(mv);
        Ok(mv)
    }
}

fn parse_counter(field: Option<&str>, default: u32) -> Result<u32, FenError> {
    match field {
        None => Ok(default),
        Some(text) => text.parse().map_err(|_| FenError::InvalidCounter {
            found: text.to_string(),
        }),
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}
