//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastlingSide;
use super::piece::{Color, Piece};
use super::square::Square;

const SPECIAL_NORMAL: u16 = 0;
const SPECIAL_PROMOTION: u16 = 1;
const SPECIAL_CASTLING: u16 = 2;
const SPECIAL_EN_PASSANT: u16 = 3;

/// What a move does beyond relocating one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    Promotion,
    Castling,
    EnPassant,
}

/// Compact 16-bit move representation.
///
/// Encoding:
/// - bits 0-5:   from square (0-63)
/// - bits 6-11:  to square (0-63)
/// - bits 12-13: special kind (normal, promotion, castling, en passant)
/// - bits 14-15: promotion piece (knight, bishop, rook, queen)
///
/// Castling stores the king's and rook's original squares as from/to, so
/// `e1h1` is white short castling and `e8a8` black long castling.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u16);

impl Move {
    #[inline]
    const fn pack(from: Square, to: Square, special: u16, promo: u16) -> Self {
        Move(from.index() as u16 | ((to.index() as u16) << 6) | (special << 12) | (promo << 14))
    }

    /// A plain move or capture (including double pawn pushes).
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move::pack(from, to, SPECIAL_NORMAL, 0)
    }

    /// A promotion to `piece`. Anything other than knight, bishop or rook
    /// promotes to a queen.
    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, piece: Piece) -> Self {
        let promo = match piece {
            Piece::Knight => 0,
            Piece::Bishop => 1,
            Piece::Rook => 2,
            _ => 3,
        };
        Move::pack(from, to, SPECIAL_PROMOTION, promo)
    }

    /// Castling, encoded from the king's to the rook's original square.
    #[inline]
    #[must_use]
    pub const fn castling(king_from: Square, rook_from: Square) -> Self {
        Move::pack(king_from, rook_from, SPECIAL_CASTLING, 0)
    }

    #[inline]
    #[must_use]
    pub const fn castling_for(side: CastlingSide) -> Self {
        Move::castling(side.king_from(), side.rook_from())
    }

    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move::pack(from, to, SPECIAL_EN_PASSANT, 0)
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index_unchecked((self.0 & 0x3F) as u8)
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index_unchecked(((self.0 >> 6) & 0x3F) as u8)
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> MoveKind {
        match (self.0 >> 12) & 3 {
            SPECIAL_PROMOTION => MoveKind::Promotion,
            SPECIAL_CASTLING => MoveKind::Castling,
            SPECIAL_EN_PASSANT => MoveKind::EnPassant,
            _ => MoveKind::Normal,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(self.kind(), MoveKind::Castling)
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind(), MoveKind::EnPassant)
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion_piece(self) -> Option<Piece> {
        if !matches!(self.kind(), MoveKind::Promotion) {
            return None;
        }
        Some(match self.0 >> 14 {
            0 => Piece::Knight,
            1 => Piece::Bishop,
            2 => Piece::Rook,
            _ => Piece::Queen,
        })
    }

    /// The castling right this move exercises, if it is a castling move.
    ///
    /// The colour is read from the king's rank, which is all the move itself
    /// carries; this is what the text forms use. Making and unmaking a
    /// castling move take the colour from the position's side to move.
    #[must_use]
    pub const fn castling_side(self) -> Option<CastlingSide> {
        if !self.is_castling() {
            return None;
        }
        let color = if self.from().rank() == 0 {
            Color::White
        } else {
            Color::Black
        };
        // King east of the rook means the a-side rook: long castling.
        Some(CastlingSide::new(color, self.from().index() < self.to().index()))
    }

    /// Get the raw 16-bit value
    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn from_u16(value: u16) -> Self {
        Move(value)
    }

    /// Debug text: `e2e4`, `e7e8=Q`, `e1h1csl`, `e5d6en_pas`.
    #[must_use]
    pub fn debug_string(self) -> String {
        let mut out = format!("{}{}", self.from(), self.to());
        match self.kind() {
            MoveKind::Promotion => {
                if let Some(piece) = self.promotion_piece() {
                    out.push('=');
                    out.push(piece.to_char().to_ascii_uppercase());
                }
            }
            MoveKind::Castling => out.push_str("csl"),
            MoveKind::EnPassant => out.push_str("en_pas"),
            MoveKind::Normal => {}
        }
        out
    }

    /// Protocol text: `e2e4`, `e7e8q`; castling is written as the king's
    /// two-square step (`e1g1`, `e1c1`, `e8g8`, `e8c8`).
    #[must_use]
    pub fn to_protocol(self) -> String {
        match self.castling_side() {
            Some(side) => format!("{}{}", side.king_from(), side.king_to()),
            None => {
                let mut out = format!("{}{}", self.from(), self.to());
                if let Some(piece) = self.promotion_piece() {
                    out.push(piece.to_char());
                }
                out
            }
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.debug_string())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_protocol())
    }
}

pub(crate) const MAX_MOVES: usize = 256;

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [Move(0); MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    /// Keep only the moves for which `keep` returns true, preserving order.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(Move) -> bool) {
        let mut write = 0;
        for read in 0..self.len {
            let mv = self.moves[read];
            if keep(mv) {
                self.moves[write] = mv;
                write += 1;
            }
        }
        self.len = write;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}
