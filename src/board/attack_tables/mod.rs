//! Attack tables for move generation.
//!
//! Sliding attacks use first-rank/first-file lookup: the occupancy of the
//! slider's line is masked out of the board, compacted into a 6-bit index of
//! the interior squares by a single multiply-shift, and used to read a
//! precomputed line of attacks. Edge squares never block anything beyond
//! themselves, so only the six interior squares matter.

mod tables;

use crate::board::types::{Bitboard, Color, Piece, Square};

const FILE_A: u64 = Bitboard::FILE_A.0;

/// Gathers the interior a-file bits (a2..a7) into the top six bits.
const FILE_COMPACT: u64 = 0x0080_4020_1008_0400;
/// Gathers one bit per file (b..g) into the top six bits.
const LINE_COMPACT: u64 = 0x0202_0202_0202_0202;

/// Precomputed, read-only attack tables.
///
/// Built once with [`AttackTables::new`] and shared by reference; nothing in
/// it changes after construction, so it can be used from many threads at once.
#[derive(Clone)]
pub struct AttackTables {
    first_rank: [[u64; 64]; 8],
    first_file: [[u64; 64]; 8],
    diag_masks: [u64; 15],
    antidiag_masks: [u64; 15],
    knight: [u64; 64],
    king: [u64; 64],
    pawn: [[u64; 64]; 2],
}

impl AttackTables {
    #[must_use]
    pub fn new() -> Self {
        let (first_rank, first_file) = tables::first_rank_and_file();
        let (diag_masks, antidiag_masks) = tables::diagonal_masks();
        AttackTables {
            first_rank,
            first_file,
            diag_masks,
            antidiag_masks,
            knight: tables::knight_attacks(),
            king: tables::king_attacks(),
            pawn: tables::pawn_attacks(),
        }
    }

    /// Full a1-h8 direction diagonal through `sq`.
    #[inline]
    #[must_use]
    pub fn diag_mask(&self, sq: Square) -> Bitboard {
        Bitboard(self.diag_masks[(7 - sq.file() + sq.rank()) as usize])
    }

    /// Full h1-a8 direction diagonal through `sq`.
    #[inline]
    #[must_use]
    pub fn antidiag_mask(&self, sq: Square) -> Bitboard {
        Bitboard(self.antidiag_masks[(sq.file() + sq.rank()) as usize])
    }

    #[inline]
    #[must_use]
    pub fn rank_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        let line = Bitboard::rank_mask(sq.rank()).0;
        let idx = ((occupancy.0 & line).wrapping_mul(LINE_COMPACT) >> 58) as usize;
        Bitboard(line & self.first_rank[sq.file() as usize][idx])
    }

    #[inline]
    #[must_use]
    pub fn file_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        let on_a_file = (occupancy.0 >> sq.file()) & FILE_A;
        let idx = (on_a_file.wrapping_mul(FILE_COMPACT) >> 58) as usize;
        Bitboard(self.first_file[sq.rank() as usize][idx] & (FILE_A << sq.file()))
    }

    #[inline]
    #[must_use]
    pub fn diag_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        let line = self.diag_mask(sq).0;
        self.line_lookup(sq, occupancy.0 & line, line)
    }

    #[inline]
    #[must_use]
    pub fn antidiag_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        let line = self.antidiag_mask(sq).0;
        self.line_lookup(sq, occupancy.0 & line, line)
    }

    // A diagonal holds at most one square per file, so the rank table indexed
    // by file works once the diagonal's bits are collapsed onto one byte.
    #[inline]
    fn line_lookup(&self, sq: Square, line_occ: u64, line: u64) -> Bitboard {
        let idx = (line_occ.wrapping_mul(LINE_COMPACT) >> 58) as usize;
        Bitboard(line & self.first_rank[sq.file() as usize][idx])
    }

    #[inline]
    #[must_use]
    pub fn bishop_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.diag_attacks(sq, occupancy) | self.antidiag_attacks(sq, occupancy)
    }

    #[inline]
    #[must_use]
    pub fn rook_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.rank_attacks(sq, occupancy) | self.file_attacks(sq, occupancy)
    }

    #[inline]
    #[must_use]
    pub fn queen_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.bishop_attacks(sq, occupancy) | self.rook_attacks(sq, occupancy)
    }

    #[inline]
    #[must_use]
    pub fn knight_attacks(&self, sq: Square) -> Bitboard {
        Bitboard(self.knight[sq.as_usize()])
    }

    #[inline]
    #[must_use]
    pub fn king_attacks(&self, sq: Square) -> Bitboard {
        Bitboard(self.king[sq.as_usize()])
    }

    /// Squares a pawn of `color` standing on `sq` captures on.
    #[inline]
    #[must_use]
    pub fn pawn_attacks(&self, color: Color, sq: Square) -> Bitboard {
        Bitboard(self.pawn[color.index()][sq.as_usize()])
    }

    /// Attack set of `piece` from `sq`. Pawns report capture squares only.
    #[must_use]
    pub fn piece_attacks(&self, piece: Piece, color: Color, sq: Square, occupancy: Bitboard) -> Bitboard {
        match piece {
            Piece::Pawn => self.pawn_attacks(color, sq),
            Piece::Knight => self.knight_attacks(sq),
            Piece::Bishop => self.bishop_attacks(sq, occupancy),
            Piece::Rook => self.rook_attacks(sq, occupancy),
            Piece::Queen => self.queen_attacks(sq, occupancy),
            Piece::King => self.king_attacks(sq),
        }
    }
}

impl Default for AttackTables {
    fn default() -> Self {
        AttackTables::new()
    }
}
