use log::trace;

use super::state::UndoRecord;
use super::types::{Bitboard, CastlingSide, Color, Move, Piece, Square};
use super::Position;

/// Square of the pawn taken en passant by a `color` pawn landing on `to`.
#[inline]
fn en_passant_victim(color: Color, to: Square) -> Option<Square> {
    to.offset(-color.pawn_push())
}

/// The right `mover` exercises with castling move `mv`: long when the king
/// starts east of the rook.
#[inline]
fn castling_side_for(mv: Move, mover: Color) -> Option<CastlingSide> {
    mv.is_castling()
        .then(|| CastlingSide::new(mover, mv.from().index() < mv.to().index()))
}

impl Position {
    fn push_undo(&mut self, captured: Option<Piece>) {
        self.undo_stack.push(UndoRecord {
            captured,
            castling_rights: self.castling_rights,
            en_passant: self.en_passant,
            fifty_move_counter: self.fifty_move_counter,
            hashes: self.hashes.clone(),
        });
    }

    fn restore(&mut self, undo: UndoRecord) {
        self.castling_rights = undo.castling_rights;
        self.en_passant = undo.en_passant;
        self.fifty_move_counter = undo.fifty_move_counter;
        self.hashes = undo.hashes;
        self.halfmove_counter = self.halfmove_counter.saturating_sub(1);
        self.terminal = false;
    }

    /// Relocate king and rook for `side`; applying it twice is a no-op.
    fn toggle_castling_pieces(&mut self, side: CastlingSide) {
        let king = side.king_from().bit() | side.king_to().bit();
        let rook = side.rook_from().bit() | side.rook_to().bit();
        self.by_color[side.color().index()] ^= Bitboard(king | rook);
        self.occupancy ^= Bitboard(king | rook);
        self.by_piece[Piece::King.index()] ^= Bitboard(king);
        self.by_piece[Piece::Rook.index()] ^= Bitboard(rook);
    }

    /// Apply a move for the side to move. Castling moves are forwarded to
    /// [`Position::make_castling_move`].
    ///
    /// The move is not checked for legality.
    ///
    /// # Panics
    ///
    /// Panics if the origin square is empty.
    pub fn make_move(&mut self, mv: Move) {
        if mv.is_castling() {
            self.make_castling_move(mv);
            return;
        }

        let (from, to) = (mv.from(), mv.to());
        let us = self.side_to_move;
        let Some(piece) = self.piece_on(from) else {
            panic!("make_move {}: no piece on {from}", mv.debug_string());
        };

        self.remove_piece_of(from, piece);
        let captured = self.piece_on(to);
        if let Some(victim) = captured {
            self.remove_piece_of(to, victim);
        } else if mv.is_en_passant() {
            if let Some(victim_sq) = en_passant_victim(us, to) {
                self.remove_piece_of(victim_sq, Piece::Pawn);
            }
        }
        self.add_piece(mv.promotion_piece().unwrap_or(piece), us, to);

        self.push_undo(captured);

        self.en_passant = None;
        if piece == Piece::Pawn && from.index().abs_diff(to.index()) == 16 {
            self.en_passant = Square::from_index((from.index() + to.index()) / 2);
        }

        if piece == Piece::King {
            self.castling_rights.remove_color(us);
        }
        for sq in [from, to] {
            if let Some(side) = CastlingSide::for_corner(sq) {
                self.castling_rights.remove(side);
            }
        }

        self.side_to_move = !us;

        if captured.is_some() || piece == Piece::Pawn {
            self.fifty_move_counter = 0;
            self.hashes.clear();
        } else {
            let hash = self.calculate_hash();
            self.hashes.push(hash);
            if self.is_repetition() {
                trace!("threefold repetition after {}", mv.debug_string());
                self.terminal = true;
            }
            self.fifty_move_counter += 1;
        }
        self.halfmove_counter += 1;
    }

    /// Apply a castling move: king two squares towards the rook, rook to the
    /// square the king crossed. Castling counts towards the fifty-move
    /// counter but still resets the hash sequence.
    ///
    /// The side is chosen by the side to move and by which of the two squares
    /// lies further east, not by the squares' rank.
    ///
    /// # Panics
    ///
    /// Panics if `mv` is not a castling move.
    pub fn make_castling_move(&mut self, mv: Move) {
        let Some(side) = castling_side_for(mv, self.side_to_move) else {
            panic!("make_castling_move called with non-castling move {}", mv.debug_string());
        };

        self.toggle_castling_pieces(side);
        self.push_undo(None);

        self.en_passant = None;
        self.castling_rights.remove_color(side.color());
        self.hashes.clear();
        self.side_to_move = !self.side_to_move;
        self.fifty_move_counter += 1;
        self.halfmove_counter += 1;
    }

    /// Retract `mv`, which must be the most recent move made.
    ///
    /// # Panics
    ///
    /// Panics if no move is outstanding or the destination square is empty.
    pub fn unmake_move(&mut self, mv: Move) {
        if mv.is_castling() {
            self.unmake_castling_move(mv);
            return;
        }

        let (from, to) = (mv.from(), mv.to());
        let Some(piece) = self.piece_on(to) else {
            panic!("unmake_move {}: no piece on {to}", mv.debug_string());
        };
        let Some(undo) = self.undo_stack.pop() else {
            panic!("unmake_move {}: no move to retract", mv.debug_string());
        };

        self.side_to_move = !self.side_to_move;
        let us = self.side_to_move;

        self.remove_piece_of(to, piece);
        let original = if mv.promotion_piece().is_some() {
            Piece::Pawn
        } else {
            piece
        };
        self.add_piece(original, us, from);

        if let Some(victim) = undo.captured {
            self.add_piece(victim, !us, to);
        } else if mv.is_en_passant() {
            if let Some(victim_sq) = en_passant_victim(us, to) {
                self.add_piece(Piece::Pawn, !us, victim_sq);
            }
        }

        self.restore(undo);
    }

    /// Retract a castling move made by [`Position::make_castling_move`].
    ///
    /// # Panics
    ///
    /// Panics if `mv` is not a castling move or no move is outstanding.
    pub fn unmake_castling_move(&mut self, mv: Move) {
        let Some(side) = castling_side_for(mv, !self.side_to_move) else {
            panic!("unmake_castling_move called with non-castling move {}", mv.debug_string());
        };
        let Some(undo) = self.undo_stack.pop() else {
            panic!("unmake_castling_move {}: no move to retract", mv.debug_string());
        };

        self.side_to_move = !self.side_to_move;
        self.toggle_castling_pieces(side);
        self.restore(undo);
    }
}
