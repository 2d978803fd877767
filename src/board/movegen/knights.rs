use super::{push_targets, MoveGen};
use crate::board::types::{MoveList, Piece};
use crate::board::Position;

impl MoveGen<'_> {
    pub(super) fn knight_moves(&self, pos: &Position, moves: &mut MoveList) {
        let us = pos.side_to_move;
        let own = pos.color_bb(us);
        for from in pos.pieces(us, Piece::Knight) {
            push_targets(from, self.tables.knight_attacks(from) & !own, moves);
        }
    }
}
