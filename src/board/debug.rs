use std::fmt;

use super::types::Square;
use super::Position;

/// Renders the board (rank 8 first, uppercase White, lowercase Black, `.`
/// for empty) between `+--------+` rules, followed by the state fields.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+--------+")?;
        for rank in (0..8u8).rev() {
            let mut row = String::with_capacity(8);
            for file in 0..8u8 {
                let placed = Square::new(rank, file)
                    .and_then(|sq| Some((self.piece_on(sq)?, self.color_on(sq)?)));
                row.push(placed.map_or('.', |(piece, color)| piece.to_fen_char(color)));
            }
            writeln!(f, "{row}")?;
        }
        writeln!(f, "+--------+")?;
        writeln!(f, "side to move: {}", self.side_to_move)?;
        writeln!(f, "castling rights: {}", self.castling_rights)?;
        match self.en_passant {
            Some(sq) => writeln!(f, "en passant: {sq}")?,
            None => writeln!(f, "en passant: -")?,
        }
        writeln!(f, "fifty-move counter: {}", self.fifty_move_counter)?;
        writeln!(f, "half-move counter: {}", self.halfmove_counter)
    }
}
