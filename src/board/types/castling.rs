//! Castling rights type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// One of the four castling rights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingSide {
    WhiteShort,
    WhiteLong,
    BlackShort,
    BlackLong,
}

impl CastlingSide {
    pub const ALL: [CastlingSide; 4] = [
        CastlingSide::WhiteShort,
        CastlingSide::WhiteLong,
        CastlingSide::BlackShort,
        CastlingSide::BlackLong,
    ];

    #[must_use]
    pub const fn new(color: Color, kingside: bool) -> Self {
        match (color, kingside) {
            (Color::White, true) => CastlingSide::WhiteShort,
            (Color::White, false) => CastlingSide::WhiteLong,
            (Color::Black, true) => CastlingSide::BlackShort,
            (Color::Black, false) => CastlingSide::BlackLong,
        }
    }

    #[inline]
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            CastlingSide::WhiteShort => CASTLE_WHITE_K,
            CastlingSide::WhiteLong => CASTLE_WHITE_Q,
            CastlingSide::BlackShort => CASTLE_BLACK_K,
            CastlingSide::BlackLong => CASTLE_BLACK_Q,
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            CastlingSide::WhiteShort | CastlingSide::WhiteLong => Color::White,
            CastlingSide::BlackShort | CastlingSide::BlackLong => Color::Black,
        }
    }

    #[must_use]
    pub const fn is_kingside(self) -> bool {
        matches!(self, CastlingSide::WhiteShort | CastlingSide::BlackShort)
    }

    /// Original king square.
    #[must_use]
    pub const fn king_from(self) -> Square {
        match self.color() {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        }
    }

    /// Original rook square.
    #[must_use]
    pub const fn rook_from(self) -> Square {
        match self {
            CastlingSide::WhiteShort => Square::H1,
            CastlingSide::WhiteLong => Square::A1,
            CastlingSide::BlackShort => Square::H8,
            CastlingSide::BlackLong => Square::A8,
        }
    }

    /// King destination (g- or c-file).
    #[must_use]
    pub const fn king_to(self) -> Square {
        match self {
            CastlingSide::WhiteShort => Square::G1,
            CastlingSide::WhiteLong => Square::C1,
            CastlingSide::BlackShort => Square::G8,
            CastlingSide::BlackLong => Square::C8,
        }
    }

    /// Rook destination (f- or d-file).
    #[must_use]
    pub const fn rook_to(self) -> Square {
        match self {
            CastlingSide::WhiteShort => Square::F1,
            CastlingSide::WhiteLong => Square::D1,
            CastlingSide::BlackShort => Square::F8,
            CastlingSide::BlackLong => Square::D8,
        }
    }

    /// The right lost when a piece leaves or lands on `sq`, if `sq` is a rook corner.
    #[must_use]
    pub(crate) const fn for_corner(sq: Square) -> Option<Self> {
        match sq.index() {
            0 => Some(CastlingSide::WhiteLong),
            7 => Some(CastlingSide::WhiteShort),
            56 => Some(CastlingSide::BlackLong),
            63 => Some(CastlingSide::BlackShort),
            _ => None,
        }
    }
}

/// Castling rights represented as a 4-bit mask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, side: CastlingSide) -> bool {
        self.0 & side.bit() != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, side: CastlingSide) {
        self.0 |= side.bit();
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, side: CastlingSide) {
        self.0 &= !side.bit();
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(CastlingSide::new(color, true));
        self.remove(CastlingSide::new(color, false));
    }

    /// Get the raw bitmask value (folded into the position hash)
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Create from raw bitmask value; bits above the low four are dropped.
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & ALL_CASTLING_RIGHTS)
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "-");
        }
        for (side, c) in CastlingSide::ALL.iter().zip(['K', 'Q', 'k', 'q']) {
            if self.has(*side) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rights_mask_layout() {
        assert_eq!(CastlingSide::WhiteShort.bit(), 1);
        assert_eq!(CastlingSide::WhiteLong.bit(), 2);
        assert_eq!(CastlingSide::BlackShort.bit(), 4);
        assert_eq!(CastlingSide::BlackLong.bit(), 8);
        assert_eq!(CastlingRights::all().as_u8(), 15);
    }

    #[test]
    fn test_remove_color() {
        let mut rights = CastlingRights::all();
        rights.remove_color(Color::White);
        assert!(!rights.has(CastlingSide::WhiteShort));
        assert!(!rights.has(CastlingSide::WhiteLong));
        assert!(rights.has(CastlingSide::BlackShort));
        assert_eq!(rights.to_string(), "kq");
        assert_eq!(CastlingRights::none().to_string(), "-");
    }

    #[test]
    fn test_corner_mapping() {
        assert_eq!(CastlingSide::for_corner(Square::A1), Some(CastlingSide::WhiteLong));
        assert_eq!(CastlingSide::for_corner(Square::H8), Some(CastlingSide::BlackShort));
        assert_eq!(CastlingSide::for_corner(Square::E1), None);
    }
}
