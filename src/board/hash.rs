//! Position hashing for repetition detection.

use super::types::{Piece, NO_SQUARE};
use super::Position;

/// 64-bit finalizer from MurmurHash3.
#[inline]
#[must_use]
pub fn murmur64(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    h ^= h >> 33;
    h
}

impl Position {
    /// Hash of the board and rights.
    ///
    /// The pawn bitboard goes in raw: pawns never stand on the first or last
    /// rank, which leaves the low byte free for the castling mask and the top
    /// byte for the en passant index (64 when absent). The other five type
    /// boards are mixed with [`murmur64`]. Colours and side to move are not
    /// part of the hash.
    #[must_use]
    pub fn calculate_hash(&self) -> u64 {
        let ep = self.en_passant.map_or(NO_SQUARE, |sq| sq.index());
        let mut hash = self.by_piece[Piece::Pawn.index()].0
            | u64::from(self.castling_rights.as_u8())
            | (u64::from(ep) << 56);
        for piece in &Piece::ALL[1..] {
            hash ^= murmur64(self.by_piece[piece.index()].0);
        }
        hash
    }
}
