use super::MoveGen;
use crate::board::types::{Move, MoveList, Piece, Square, PROMOTION_PIECES};
use crate::board::Position;

/// Push `from`-`to`, expanded into the four promotions on the last rank.
fn push_pawn_move(from: Square, to: Square, promotion_rank: u8, moves: &mut MoveList) {
    if to.rank() == promotion_rank {
        for piece in PROMOTION_PIECES {
            moves.push(Move::promotion(from, to, piece));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

impl MoveGen<'_> {
    /// Single pushes (with promotions) and double pushes from the start rank.
    pub(super) fn pawn_pushes(&self, pos: &Position, moves: &mut MoveList) {
        let us = pos.side_to_move;
        let step = us.pawn_push();
        let promotion_rank = us.pawn_promotion_rank();
        for from in pos.pieces(us, Piece::Pawn) {
            let Some(one) = from.offset(step) else {
                continue;
            };
            if pos.occupancy.contains(one) {
                continue;
            }
            push_pawn_move(from, one, promotion_rank, moves);
            if from.rank() == us.pawn_start_rank() {
                if let Some(two) = one.offset(step) {
                    if !pos.occupancy.contains(two) {
                        moves.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    /// Diagonal captures (with promotions), then en passant, per pawn.
    pub(super) fn pawn_captures(&self, pos: &Position, moves: &mut MoveList) {
        let us = pos.side_to_move;
        let enemies = pos.color_bb(!us);
        let promotion_rank = us.pawn_promotion_rank();
        // The target only counts when the double-pushed pawn is really there.
        let en_passant = pos.en_passant.filter(|ep| {
            ep.offset(-us.pawn_push())
                .is_some_and(|victim| pos.pieces(!us, Piece::Pawn).contains(victim))
        });
        for from in pos.pieces(us, Piece::Pawn) {
            let attacks = self.tables.pawn_attacks(us, from);
            for to in attacks & enemies {
                push_pawn_move(from, to, promotion_rank, moves);
            }
            if let Some(ep) = en_passant {
                if attacks.contains(ep) {
                    moves.push(Move::en_passant(from, ep));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::attack_tables::AttackTables;
    use crate::board::types::MoveKind;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_pushes_from_start() {
        let tables = AttackTables::new();
        let movegen = MoveGen::new(&tables);
        let pos = Position::startpos();
        let mut moves = MoveList::new();
        movegen.pawn_pushes(&pos, &mut moves);
        assert_eq!(moves.len(), 16);
        assert!(moves.contains(Move::new(sq("e2"), sq("e4"))));
    }

    #[test]
    fn test_blocked_double_push() {
        let tables = AttackTables::new();
        let movegen = MoveGen::new(&tables);
        let pos = Position::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").unwrap();
        let mut moves = MoveList::new();
        movegen.pawn_pushes(&pos, &mut moves);
        assert_eq!(moves.as_slice(), &[Move::new(sq("e2"), sq("e3"))]);
    }

    #[test]
    fn test_promotion_order() {
        let tables = AttackTables::new();
        let movegen = MoveGen::new(&tables);
        let pos = Position::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mut moves = MoveList::new();
        movegen.pawn_pushes(&pos, &mut moves);
        movegen.pawn_captures(&pos, &mut moves);
        let pieces: Vec<Option<Piece>> = moves.iter().map(|mv| mv.promotion_piece()).collect();
        let order = [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen].map(Some);
        assert_eq!(pieces[..4], order);
        assert_eq!(pieces[4..], order);
        assert_eq!(moves[4].to(), sq("b8"));
    }

    #[test]
    fn test_en_passant_capture() {
        let tables = AttackTables::new();
        let movegen = MoveGen::new(&tables);
        let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        let mut moves = MoveList::new();
        movegen.pawn_captures(&pos, &mut moves);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].kind(), MoveKind::EnPassant);
        assert_eq!(moves[0].to(), sq("d6"));
    }

    #[test]
    fn test_en_passant_needs_victim_pawn() {
        let tables = AttackTables::new();
        let movegen = MoveGen::new(&tables);
        let pos = Position::from_fen("4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1").unwrap();
        let mut moves = MoveList::new();
        movegen.pawn_captures(&pos, &mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_black_pawns_move_down() {
        let tables = AttackTables::new();
        let movegen = MoveGen::new(&tables);
        let pos = Position::from_fen("4k3/3p4/2N5/8/8/8/8/4K3 b - - 0 1").unwrap();
        let mut moves = MoveList::new();
        movegen.pawn_pushes(&pos, &mut moves);
        movegen.pawn_captures(&pos, &mut moves);
        assert_eq!(
            moves.as_slice(),
            &[
                Move::new(sq("d7"), sq("d6")),
                Move::new(sq("d7"), sq("d5")),
                Move::new(sq("d7"), sq("c6")),
            ]
        );
    }
}
