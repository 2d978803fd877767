//! Perft: exhaustive leaf counting used to verify the move generator.

use std::thread;

use log::debug;

use crate::board::{Move, MoveGen, Position};

impl MoveGen<'_> {
    /// Number of leaf nodes `depth` plies below `pos`.
    pub fn perft(&self, depth: u32, pos: &mut Position) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(pos);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            pos.make_move(mv);
            nodes += self.perft(depth - 1, pos);
            pos.unmake_move(mv);
        }
        nodes
    }

    /// Leaf count below each root move, in generation order.
    pub fn perft_divide(&self, depth: u32, pos: &mut Position) -> Vec<(Move, u64)> {
        debug!("perft_divide depth {depth}");
        if depth == 0 {
            return Vec::new();
        }
        let moves = self.legal_moves(pos);
        let mut counts = Vec::with_capacity(moves.len());
        for mv in moves {
            pos.make_move(mv);
            counts.push((mv, self.perft(depth - 1, pos)));
            pos.unmake_move(mv);
        }
        counts
    }

    /// Same count as [`MoveGen::perft`], with each root move's subtree
    /// walked on its own scoped thread. `pos` is left untouched.
    ///
    /// # Panics
    ///
    /// Re-raises the panic of any worker thread.
    #[must_use]
    pub fn perft_parallel(&self, depth: u32, pos: &Position) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut root = pos.clone();
        let moves = self.legal_moves(&mut root);
        debug!("perft_parallel depth {depth}: {} workers", moves.len());

        let nodes = thread::scope(|scope| {
            let workers: Vec<_> = moves
                .into_iter()
                .map(|mv| {
                    let mut child = root.clone();
                    let movegen = *self;
                    scope.spawn(move || {
                        child.make_move(mv);
                        movegen.perft(depth - 1, &mut child)
                    })
                })
                .collect();

            workers
                .into_iter()
                .map(|worker| match worker.join() {
                    Ok(count) => count,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .sum::<u64>()
        });

        debug!("perft_parallel depth {depth}: {nodes} nodes");
        nodes
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{AttackTables, MoveGen, Position};

    #[test]
    fn test_depth_zero_is_one() {
        let tables = AttackTables::new();
        let movegen = MoveGen::new(&tables);
        let mut pos = Position::startpos();
        assert_eq!(movegen.perft(0, &mut pos), 1);
        assert_eq!(movegen.perft_parallel(0, &pos), 1);
        assert!(movegen.perft_divide(0, &mut pos).is_empty());
    }

    #[test]
    fn test_parallel_matches_serial() {
        let tables = AttackTables::new();
        let movegen = MoveGen::new(&tables);
        let mut pos = Position::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .unwrap();
        let before = pos.clone();
        let serial = movegen.perft(2, &mut pos);
        assert_eq!(serial, 2039);
        assert_eq!(movegen.perft_parallel(2, &pos), serial);
        assert_eq!(pos, before);
    }

    #[test]
    fn test_divide_sums_to_perft() {
        let tables = AttackTables::new();
        let movegen = MoveGen::new(&tables);
        let mut pos = Position::startpos();
        let divide = movegen.perft_divide(3, &mut pos);
        assert_eq!(divide.len(), 20);
        assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 8902);
        let e2e4 = divide
            .iter()
            .find(|(mv, _)| mv.to_protocol() == "e2e4")
            .map(|(_, n)| *n);
        assert_eq!(e2e4, Some(600));
    }
}
