//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_core::board::{Color, Piece, PositionBuilder, Square};
//!
//! let pos = PositionBuilder::new()
//!     .piece(Square::E1, Color::White, Piece::King)
//!     .piece(Square::E8, Color::Black, Piece::King)
//!     .piece("a2".parse().unwrap(), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(pos.occupancy().popcount(), 3);
//! ```

use super::state::BACK_RANK;
use super::types::{CastlingRights, CastlingSide, Color, Piece, Square};
use super::Position;

/// A fluent builder for constructing [`Position`] values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant: Option<Square>,
    fifty_move_counter: u32,
    halfmove_counter: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant: None,
            fifty_move_counter: 0,
            halfmove_counter: 0,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (file, piece) in (0u8..).zip(BACK_RANK) {
            for (rank, color, kind) in [
                (0, Color::White, piece),
                (1, Color::White, Piece::Pawn),
                (6, Color::Black, Piece::Pawn),
                (7, Color::Black, piece),
            ] {
                if let Some(sq) = Square::new(rank, file) {
                    builder.pieces.push((sq, color, kind));
                }
            }
        }
        builder.castling_rights = CastlingRights::all();
        builder
    }

    /// Place a piece, replacing whatever stood on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Replace all castling rights.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Grant one castling right.
    #[must_use]
    pub fn castle(mut self, side: CastlingSide) -> Self {
        self.castling_rights.set(side);
        self
    }

    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant = Some(target);
        self
    }

    #[must_use]
    pub const fn fifty_move_counter(mut self, count: u32) -> Self {
        self.fifty_move_counter = count;
        self
    }

    /// Plies since the start of the game (0 = White's first move).
    #[must_use]
    pub const fn halfmove_counter(mut self, count: u32) -> Self {
        self.halfmove_counter = count;
        self
    }

    /// Build the position and seed its hash sequence, as FEN loading does.
    #[must_use]
    pub fn build(self) -> Position {
        let mut pos = Position::new();
        for (square, color, piece) in self.pieces {
            pos.add_piece(piece, color, square);
        }
        pos.side_to_move = self.side_to_move;
        pos.castling_rights = self.castling_rights;
        pos.en_passant = self.en_passant;
        pos.fifty_move_counter = self.fifty_move_counter;
        pos.halfmove_counter = self.halfmove_counter;
        pos.seed_hashes();
        pos
    }
}
