//! Legal move generation and attack queries.
//!
//! Moves are generated pseudo-legally per piece type (king, knight, bishop,
//! rook, queen, pawn pushes, pawn captures, castling) and then filtered by
//! making each one and asking whether the mover's king is attacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

use log::trace;

use super::attack_tables::AttackTables;
use super::types::{Bitboard, Color, Move, MoveList, Piece, Square};
use super::Position;

/// Move generator bound to a set of attack tables.
///
/// Holds no position state, so one generator can serve any number of
/// positions and threads.
#[derive(Clone, Copy)]
pub struct MoveGen<'a> {
    tables: &'a AttackTables,
}

impl<'a> MoveGen<'a> {
    #[must_use]
    pub fn new(tables: &'a AttackTables) -> Self {
        MoveGen { tables }
    }

    #[must_use]
    pub fn tables(&self) -> &'a AttackTables {
        self.tables
    }

    /// All legal moves for the side to move.
    ///
    /// Returns an empty list for a position already flagged terminal. When no
    /// legal move exists the position is flagged terminal.
    pub fn legal_moves(&self, pos: &mut Position) -> MoveList {
        if pos.terminal {
            return MoveList::new();
        }
        let us = pos.side_to_move;
        let mut moves = self.pseudo_legal_moves(pos);
        moves.retain(|mv| {
            pos.make_move(mv);
            let safe = !self.is_in_check(us, pos);
            pos.unmake_move(mv);
            safe
        });
        if moves.is_empty() {
            trace!("no legal moves for {us}");
            pos.terminal = true;
        }
        moves
    }

    fn pseudo_legal_moves(&self, pos: &Position) -> MoveList {
        let mut moves = MoveList::new();
        self.king_moves(pos, &mut moves);
        self.knight_moves(pos, &mut moves);
        self.slider_moves(pos, Piece::Bishop, &mut moves);
        self.slider_moves(pos, Piece::Rook, &mut moves);
        self.slider_moves(pos, Piece::Queen, &mut moves);
        self.pawn_pushes(pos, &mut moves);
        self.pawn_captures(pos, &mut moves);
        self.castling_moves(pos, &mut moves);
        moves
    }

    /// True if `mv` does not leave the mover's king attacked. The position is
    /// restored before returning.
    pub fn is_legal(&self, mv: Move, pos: &mut Position) -> bool {
        let us = pos.side_to_move;
        pos.make_move(mv);
        let safe = !self.is_in_check(us, pos);
        pos.unmake_move(mv);
        safe
    }

    /// Pieces of `color` that attack `sq`.
    #[must_use]
    pub fn attacks_to(&self, sq: Square, color: Color, pos: &Position) -> Bitboard {
        let occ = pos.occupancy;
        let t = self.tables;
        let queens = pos.pieces(color, Piece::Queen);
        (t.pawn_attacks(!color, sq) & pos.pieces(color, Piece::Pawn))
            | (t.knight_attacks(sq) & pos.pieces(color, Piece::Knight))
            | (t.king_attacks(sq) & pos.pieces(color, Piece::King))
            | (t.bishop_attacks(sq, occ) & (pos.pieces(color, Piece::Bishop) | queens))
            | (t.rook_attacks(sq, occ) & (pos.pieces(color, Piece::Rook) | queens))
    }

    #[must_use]
    pub fn is_attacked(&self, sq: Square, by: Color, pos: &Position) -> bool {
        !self.attacks_to(sq, by, pos).is_empty()
    }

    /// Squares attacked by a `color` `piece` standing on `sq`, given the
    /// current occupancy. Pawns report capture squares only.
    #[must_use]
    pub fn attacks_from(&self, sq: Square, color: Color, piece: Piece, pos: &Position) -> Bitboard {
        self.tables.piece_attacks(piece, color, sq, pos.occupancy)
    }

    /// True if `color` has a king and it is attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color, pos: &Position) -> bool {
        pos.king_square(color)
            .is_some_and(|king| self.is_attacked(king, !color, pos))
    }
}

/// Push a plain move from `from` to every square in `targets`.
#[inline]
fn push_targets(from: Square, targets: Bitboard, moves: &mut MoveList) {
    for to in targets {
        moves.push(Move::new(from, to));
    }
}
