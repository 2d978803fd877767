//! Core chess types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - compact board square representation (u8)
//! - `Bitboard` - 64-bit board representation plus bit scans
//! - `Move` and `MoveList` - packed 16-bit moves
//! - `CastlingRights` - castling state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{least_significant_bit, most_significant_bit, Bitboard, BitboardIter};
pub use castling::{CastlingRights, CastlingSide};
pub use moves::{Move, MoveKind, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::{Square, NO_SQUARE};

pub(crate) use piece::PROMOTION_PIECES;
