//! Bitboard type, bit scans and operations.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use super::square::Square;

const DEBRUIJN64: u64 = 0x03f7_9d71_b4cb_0a89;

#[rustfmt::skip]
const DEBRUIJN_INDEX64: [u8; 64] = [
     0, 47,  1, 56, 48, 27,  2, 60,
    57, 49, 41, 37, 28, 16,  3, 61,
    54, 58, 35, 52, 50, 42, 21, 44,
    38, 32, 29, 23, 17, 11,  4, 62,
    46, 55, 26, 59, 40, 36, 15, 53,
    34, 51, 20, 43, 31, 22, 10, 45,
    25, 39, 14, 33, 19, 30,  9, 24,
    13, 18,  8, 12,  7,  6,  5, 63,
];

/// Index of the lowest set bit, via de Bruijn multiplication on the
/// isolated low-bit mask. `None` for 0.
#[inline]
#[must_use]
pub const fn least_significant_bit(bb: u64) -> Option<u8> {
    if bb == 0 {
        return None;
    }
    let low = bb ^ (bb - 1);
    Some(DEBRUIJN_INDEX64[(low.wrapping_mul(DEBRUIJN64) >> 58) as usize])
}

/// Index of the highest set bit, scanning down from bit 63. `None` for 0.
#[must_use]
pub const fn most_significant_bit(bb: u64) -> Option<u8> {
    let mut i = 63;
    loop {
        if bb & (1u64 << i) != 0 {
            return Some(i);
        }
        if i == 0 {
            return None;
        }
        i -= 1;
    }
}

/// A 64-bit bitboard, bit `i` set for square `i` (a1 = 0, h8 = 63).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

// File masks (columns)
impl Bitboard {
    pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    pub const FILE_H: Bitboard = Bitboard(0x8080_8080_8080_8080);
    pub const NOT_FILE_A: Bitboard = Bitboard(0xFEFE_FEFE_FEFE_FEFE);
    pub const NOT_FILE_H: Bitboard = Bitboard(0x7F7F_7F7F_7F7F_7F7F);
    pub const NOT_FILE_AB: Bitboard = Bitboard(0xFCFC_FCFC_FCFC_FCFC);
    pub const NOT_FILE_GH: Bitboard = Bitboard(0x3F3F_3F3F_3F3F_3F3F);

    pub const RANK_1: Bitboard = Bitboard(0x0000_0000_0000_00FF);
    pub const RANK_8: Bitboard = Bitboard(0xFF00_0000_0000_0000);

    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);
}

impl Bitboard {
    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(sq.bit())
    }

    /// Returns an iterator over the squares set in this bitboard, lowest first
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & sq.bit() != 0
    }

    #[inline]
    #[must_use]
    pub const fn lsb(self) -> Option<Square> {
        match least_significant_bit(self.0) {
            Some(idx) => Some(Square::from_index_unchecked(idx)),
            None => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn msb(self) -> Option<Square> {
        match most_significant_bit(self.0) {
            Some(idx) => Some(Square::from_index_unchecked(idx)),
            None => None,
        }
    }

    /// Get the file mask for a given file index (0-7)
    #[inline]
    #[must_use]
    pub const fn file_mask(file: u8) -> Self {
        Bitboard(Self::FILE_A.0 << file)
    }

    /// Get the rank mask for a given rank index (0-7)
    #[inline]
    #[must_use]
    pub const fn rank_mask(rank: u8) -> Self {
        Bitboard(Self::RANK_1.0 << (rank * 8))
    }

    /// Multi-line rendering: rank 8 first, files a to h, `X` for a set bit and
    /// `.` otherwise, framed by `+--------+`.
    #[must_use]
    pub fn pretty(self) -> String {
        let mut out = String::with_capacity(10 * 11);
        out.push_str("+--------+\n");
        for rank in (0..8u8).rev() {
            out.push('|');
            for file in 0..8u8 {
                let bit = 1u64 << (rank * 8 + file);
                out.push(if self.0 & bit != 0 { 'X' } else { '.' });
            }
            out.push_str("|\n");
        }
        out.push_str("+--------+\n");
        out
    }
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        let sq = self.0.lsb()?;
        self.0 .0 &= self.0 .0 - 1;
        Some(sq)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.popcount() as usize;
        (n, Some(n))
    }
}
