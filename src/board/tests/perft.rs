//! Perft (performance test) for move generation correctness.

use std::time::Instant;

use super::movegen;
use crate::board::Position;

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(u32, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8902), (4, 197_281)],
    },
    TestPosition {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2039), (3, 97_862)],
    },
    TestPosition {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2812), (4, 43_238)],
    },
    TestPosition {
        name: "Position 4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        depths: &[(1, 6), (2, 264), (3, 9467)],
    },
    TestPosition {
        name: "Position 5",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        depths: &[(1, 44), (2, 1486), (3, 62_379)],
    },
    TestPosition {
        name: "Position 6",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        depths: &[(1, 46), (2, 2079)],
    },
    TestPosition {
        name: "En Passant Capture",
        fen: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        depths: &[(1, 31), (2, 707), (3, 21_637)],
    },
    TestPosition {
        name: "Promotion",
        fen: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        depths: &[(1, 24), (2, 496), (3, 9483)],
    },
    TestPosition {
        name: "Castling",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        depths: &[(1, 26), (2, 568), (3, 13_744)],
    },
];

#[test]
fn test_all_perft_positions() {
    let movegen = movegen();
    for position in TEST_POSITIONS {
        let mut pos = Position::from_fen(position.fen).unwrap();
        let before = pos.clone();

        for &(depth, expected) in position.depths {
            let start = Instant::now();
            let nodes = movegen.perft(depth, &mut pos);
            let duration = start.elapsed();

            println!("  {} depth {}: {} nodes in {:?}", position.name, depth, nodes, duration);

            assert_eq!(
                nodes, expected,
                "Perft failed for position '{}' at depth {}. Expected: {}, Got: {}",
                position.name, depth, expected, nodes
            );
        }
        assert_eq!(pos, before, "perft left '{}' modified", position.name);
    }
}

#[test]
fn test_parallel_perft_matches() {
    let movegen = movegen();
    for position in &TEST_POSITIONS[..4] {
        let mut pos = Position::from_fen(position.fen).unwrap();
        let serial = movegen.perft(3, &mut pos);
        assert_eq!(movegen.perft_parallel(3, &pos), serial, "{}", position.name);
    }
}

#[test]
fn test_divide_kiwipete() {
    let movegen = movegen();
    let mut pos = Position::from_fen(TEST_POSITIONS[1].fen).unwrap();
    let divide = movegen.perft_divide(2, &mut pos);
    assert_eq!(divide.len(), 48);
    assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 2039);

    // Castling moves come last and use the king/rook origin encoding.
    let names: Vec<String> = divide.iter().map(|(mv, _)| mv.debug_string()).collect();
    assert_eq!(names[46], "e1h1csl");
    assert_eq!(names[47], "e1a1csl");
}

#[test]
fn test_perft_from_terminal_position() {
    let movegen = movegen();
    // Black is checkmated.
    let mut pos = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert_eq!(movegen.perft(1, &mut pos), 0);
    assert_eq!(movegen.perft(3, &mut pos), 0);
    assert!(pos.is_terminal());
}
