use super::{push_targets, MoveGen};
use crate::board::types::{Bitboard, CastlingSide, Color, Move, MoveList, Piece, Square};
use crate::board::Position;

/// Squares from `a` to `b` inclusive, both on the same rank.
fn span(a: Square, b: Square) -> Bitboard {
    let (lo, hi) = if a.index() <= b.index() {
        (a.index(), b.index())
    } else {
        (b.index(), a.index())
    };
    Bitboard((u64::MAX >> (63 - hi)) & (u64::MAX << lo))
}

impl MoveGen<'_> {
    pub(super) fn king_moves(&self, pos: &Position, moves: &mut MoveList) {
        let us = pos.side_to_move;
        let own = pos.color_bb(us);
        for from in pos.pieces(us, Piece::King) {
            push_targets(from, self.tables.king_attacks(from) & !own, moves);
        }
    }

    pub(super) fn castling_moves(&self, pos: &Position, moves: &mut MoveList) {
        let us = pos.side_to_move;
        for kingside in [true, false] {
            let side = CastlingSide::new(us, kingside);
            if self.is_castling_valid(side, pos) {
                moves.push(Move::castling_for(side));
            }
        }
    }

    /// Whether `side` may castle right now: the right is held, king and rook
    /// stand on their original squares, every square between them is empty,
    /// and none of the squares the king stands on, crosses or lands on is
    /// attacked.
    #[must_use]
    pub fn is_castling_valid(&self, side: CastlingSide, pos: &Position) -> bool {
        if !pos.castling_rights.has(side) {
            return false;
        }
        let color: Color = side.color();
        if !pos.pieces(color, Piece::King).contains(side.king_from())
            || !pos.pieces(color, Piece::Rook).contains(side.rook_from())
        {
            return false;
        }

        let ends = Bitboard::from_square(side.king_from()) | Bitboard::from_square(side.rook_from());
        let between = span(side.king_from(), side.rook_from()) & !ends;
        if !(pos.occupancy & between).is_empty() {
            return false;
        }

        span(side.king_from(), side.king_to())
            .into_iter()
            .all(|sq| !self.is_attacked(sq, !color, pos))
    }
}
