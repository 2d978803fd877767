//! Repetition detection and the terminal flag.

use super::movegen;
use crate::board::{Color, Position};

fn apply_protocol(pos: &mut Position, text: &str) {
    pos.make_protocol_move(&movegen(), text)
        .expect("protocol move not legal");
}

const KNIGHT_SHUFFLE: [&str; 4] = ["g1f3", "g8f6", "f3g1", "f6g8"];

#[test]
fn test_fen_counter_parsing() {
    let pos = Position::from_fen("8/8/8/8/8/8/8/K1k5 w - - 57 1").unwrap();
    assert_eq!(pos.fifty_move_counter(), 57);
    assert_eq!(pos.halfmove_counter(), 0);
}

#[test]
fn test_fifty_move_counter_resets_on_pawn_move() {
    let mut pos = Position::from_fen("8/8/8/8/8/8/4P3/K1k5 w - - 99 1").unwrap();
    apply_protocol(&mut pos, "e2e4");
    assert_eq!(pos.fifty_move_counter(), 0);
    assert!(pos.hashes().is_empty());
    apply_protocol(&mut pos, "c1d1");
    assert_eq!(pos.fifty_move_counter(), 1);
    assert_eq!(pos.hashes().len(), 1);
}

#[test]
fn test_threefold_repetition() {
    let mut pos = Position::startpos();
    for text in KNIGHT_SHUFFLE {
        apply_protocol(&mut pos, text);
    }
    // The start position has now occurred twice.
    assert!(!pos.is_repetition());
    assert!(!pos.is_terminal());

    for text in &KNIGHT_SHUFFLE[..3] {
        apply_protocol(&mut pos, text);
    }
    assert!(!pos.is_terminal());

    apply_protocol(&mut pos, KNIGHT_SHUFFLE[3]);
    assert!(pos.is_repetition());
    assert!(pos.is_terminal());
    assert_eq!(pos.hashes().len(), 9);
    assert!(movegen().legal_moves(&mut pos).is_empty());
    // Repetition, not mate: the side to move is not in check.
    assert!(!movegen().is_in_check(Color::White, &pos));
}

#[test]
fn test_unmake_leaves_repetition() {
    let mut pos = Position::startpos();
    let mut played = Vec::new();
    for _ in 0..2 {
        for text in KNIGHT_SHUFFLE {
            let mv = pos.make_protocol_move(&movegen(), text).unwrap();
            played.push(mv);
        }
    }
    assert!(pos.is_terminal());

    let last = played.pop().unwrap();
    pos.unmake_move(last);
    assert!(!pos.is_terminal());
    assert!(!pos.is_repetition());
    assert_eq!(movegen().legal_moves(&mut pos).len(), 22);
}

#[test]
fn test_pawn_move_breaks_repetition() {
    let mut pos = Position::startpos();
    for text in KNIGHT_SHUFFLE {
        apply_protocol(&mut pos, text);
    }
    apply_protocol(&mut pos, "e2e3");
    apply_protocol(&mut pos, "e7e6");
    assert!(pos.hashes().is_empty());

    // The position after e7e6 is not itself in the restarted sequence, so
    // two more shuffles only bring it back twice.
    for text in KNIGHT_SHUFFLE.iter().chain(KNIGHT_SHUFFLE.iter()) {
        apply_protocol(&mut pos, text);
    }
    assert!(!pos.is_terminal());
    for text in KNIGHT_SHUFFLE {
        apply_protocol(&mut pos, text);
    }
    assert!(pos.is_terminal());
}

#[test]
fn test_castling_clears_hashes_but_counts_towards_fifty() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 4 10").unwrap();
    apply_protocol(&mut pos, "a1b1");
    assert_eq!(pos.hashes().len(), 2);
    apply_protocol(&mut pos, "e8g8");
    assert!(pos.hashes().is_empty());
    assert_eq!(pos.fifty_move_counter(), 6);
}
