//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts for move generation correctness
//! - `draw.rs` - Repetition detection and the terminal flag
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `attacks.rs` - Attack tables against a ray-cast reference
//! - `proptest.rs` - Property-based tests

mod attacks;
mod draw;
mod perft;

use once_cell::sync::Lazy;

use crate::board::{AttackTables, Bitboard, MoveGen, Square};

/// Attack tables shared by every test in this module.
pub(super) static TABLES: Lazy<AttackTables> = Lazy::new(AttackTables::new);

pub(super) fn movegen() -> MoveGen<'static> {
    MoveGen::new(&TABLES)
}

pub(super) fn sq(notation: &str) -> Square {
    notation.parse().unwrap()
}

/// Slider attacks by stepping along each direction until the edge or the
/// first occupied square, which is included.
pub(super) fn ray_attacks(sq: Square, occupancy: Bitboard, directions: &[(i8, i8)]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &(dr, df) in directions {
        let (mut rank, mut file) = (sq.rank() as i8, sq.file() as i8);
        loop {
            rank += dr;
            file += df;
            if !(0..8).contains(&rank) || !(0..8).contains(&file) {
                break;
            }
            let target = Square::new(rank as u8, file as u8).unwrap();
            attacks |= Bitboard::from_square(target);
            if occupancy.contains(target) {
                break;
            }
        }
    }
    attacks
}

pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
