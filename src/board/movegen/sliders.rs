use super::{push_targets, MoveGen};
use crate::board::types::{MoveList, Piece};
use crate::board::Position;

impl MoveGen<'_> {
    /// Moves of every `piece` (bishop, rook or queen) of the side to move.
    pub(super) fn slider_moves(&self, pos: &Position, piece: Piece, moves: &mut MoveList) {
        debug_assert!(piece.is_slider());
        let us = pos.side_to_move;
        let own = pos.color_bb(us);
        for from in pos.pieces(us, piece) {
            let targets = self.tables.piece_attacks(piece, us, from, pos.occupancy) & !own;
            push_targets(from, targets, moves);
        }
    }
}
