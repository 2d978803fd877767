//! Bitboard chess position core: attack tables, make/unmake, legal move
//! generation and perft.

pub mod board;
mod perft;

pub use board::{AttackTables, Color, Move, MoveGen, Piece, Position, Square};
