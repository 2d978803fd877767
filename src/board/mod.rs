//! Chess position representation and rules.
//!
//! Uses bitboards for both the position and attack generation. Supports the
//! full rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use chess_core::board::{AttackTables, MoveGen, Position};
//!
//! let tables = AttackTables::new();
//! let movegen = MoveGen::new(&tables);
//! let mut pos = Position::startpos();
//! let moves = movegen.legal_moves(&mut pos);
//! assert_eq!(moves.len(), 20);
//! ```

mod attack_tables;
mod builder;
mod debug;
mod error;
mod fen;
mod hash;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use attack_tables::AttackTables;
pub use builder::PositionBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use hash::murmur64;
pub use movegen::MoveGen;
pub use state::{Position, UndoRecord, START_FEN};
pub use types::{
    least_significant_bit, most_significant_bit, Bitboard, BitboardIter, CastlingRights,
    CastlingSide, Color, Move, MoveKind, MoveList, MoveListIntoIter, Piece, Square, NO_SQUARE,
};
