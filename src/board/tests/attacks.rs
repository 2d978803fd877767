//! Attack tables checked square by square against a ray-cast reference.

use rand::prelude::*;

use super::{ray_attacks, sq, BISHOP_DIRECTIONS, ROOK_DIRECTIONS, TABLES};
use crate::board::{Bitboard, Color, Square};

#[test]
fn test_sliders_match_ray_cast() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        // Sparse and dense boards both.
        let occupancy = Bitboard(rng.gen::<u64>() & rng.gen::<u64>());
        for s in Square::all() {
            assert_eq!(
                TABLES.rook_attacks(s, occupancy),
                ray_attacks(s, occupancy, &ROOK_DIRECTIONS),
                "rook on {s} with {:#018x}",
                occupancy.0
            );
            assert_eq!(
                TABLES.bishop_attacks(s, occupancy),
                ray_attacks(s, occupancy, &BISHOP_DIRECTIONS),
                "bishop on {s} with {:#018x}",
                occupancy.0
            );
        }
    }
}

#[test]
fn test_slider_ignores_own_square() {
    for s in Square::all() {
        let alone = Bitboard::from_square(s);
        assert_eq!(
            TABLES.queen_attacks(s, alone),
            TABLES.queen_attacks(s, Bitboard::EMPTY)
        );
    }
}

#[test]
fn test_full_board_attacks_only_neighbours() {
    let e4 = sq("e4");
    assert_eq!(TABLES.rook_attacks(e4, Bitboard::ALL).popcount(), 4);
    assert_eq!(TABLES.bishop_attacks(e4, Bitboard::ALL).popcount(), 4);
    assert_eq!(TABLES.queen_attacks(Square::A1, Bitboard::ALL).popcount(), 3);
}

#[test]
fn test_leaper_counts() {
    let knight_total: u32 = Square::all().map(|s| TABLES.knight_attacks(s).popcount()).sum();
    let king_total: u32 = Square::all().map(|s| TABLES.king_attacks(s).popcount()).sum();
    assert_eq!(knight_total, 336);
    assert_eq!(king_total, 420);
    assert_eq!(TABLES.knight_attacks(Square::A1).popcount(), 2);
    assert_eq!(TABLES.king_attacks(Square::H8).popcount(), 3);
}

#[test]
fn test_pawn_attacks_do_not_wrap() {
    assert_eq!(
        TABLES.pawn_attacks(Color::White, sq("a2")),
        Bitboard::from_square(sq("b3"))
    );
    assert_eq!(
        TABLES.pawn_attacks(Color::Black, sq("h7")),
        Bitboard::from_square(sq("g6"))
    );
    assert_eq!(TABLES.pawn_attacks(Color::White, sq("d4")).popcount(), 2);
    assert!(TABLES.pawn_attacks(Color::White, sq("e8")).is_empty());
    assert!(TABLES.pawn_attacks(Color::Black, sq("e1")).is_empty());
}
