//! Builders for the precomputed tables: first-rank/first-file slider lines,
//! diagonal masks, and the leaper jump tables.

#![allow(clippy::needless_range_loop)] // Index loops are clearer for board coordinates

use crate::board::types::{least_significant_bit, most_significant_bit, Bitboard};

const FILE_A: u64 = Bitboard::FILE_A.0;
const NOT_A: u64 = Bitboard::NOT_FILE_A.0;
const NOT_H: u64 = Bitboard::NOT_FILE_H.0;
const NOT_AB: u64 = Bitboard::NOT_FILE_AB.0;
const NOT_GH: u64 = Bitboard::NOT_FILE_GH.0;

/// Maps bit `i` of the low byte onto the h-file at rank `7 - i`.
const ROTATE_TO_H_FILE: u64 = 0x8040_2010_0804_0201;

/// Attacked squares on an 8-square line for a slider at `slider`, given the
/// full 8-bit line occupancy (edge bits always set). The slider bit is excluded.
fn line_attacks(line_occ: u64, slider: u8) -> u64 {
    let bit = 1u64 << slider;
    let left = if slider != 0 {
        most_significant_bit(line_occ & (bit - 1)).unwrap_or(0)
    } else {
        0
    };
    let right = if slider != 7 {
        least_significant_bit(line_occ & !((bit << 1) - 1)).unwrap_or(7)
    } else {
        7
    };
    ((1u64 << (right + 1)) - (1u64 << left)) ^ bit
}

/// First-rank and first-file lookup tables, indexed `[slider][interior occupancy]`.
///
/// Rank entries are replicated onto all eight ranks so a lookup only needs
/// masking. File entries are filled across every rank, so masking with the
/// a-to-h file of the query square recovers the attacks on that file; they
/// are indexed by the slider's rank.
pub(crate) fn first_rank_and_file() -> ([[u64; 64]; 8], [[u64; 64]; 8]) {
    let mut first_rank = [[0u64; 64]; 8];
    let mut first_file = [[0u64; 64]; 8];
    for ioc in 0..64usize {
        let line_occ = ((ioc as u64) << 1) | 0x81;
        for slider in 0..8u8 {
            let line = line_attacks(line_occ, slider);
            first_rank[slider as usize][ioc] = line.wrapping_mul(FILE_A);

            let mut file = line.wrapping_mul(ROTATE_TO_H_FILE) & (FILE_A << 7);
            file |= file >> 1;
            file |= file >> 2;
            file |= file >> 4;
            first_file[7 - slider as usize][ioc] = file;
        }
    }
    (first_rank, first_file)
}

/// Diagonal (a1-h8 direction) and antidiagonal (h1-a8 direction) line masks.
///
/// Diagonal index is `7 - file + rank`, so index 0 is the lone h1 square;
/// antidiagonal index is `file + rank`, so index 0 is the lone a1 square.
pub(crate) fn diagonal_masks() -> ([u64; 15], [u64; 15]) {
    let mut diag = [0u64; 15];
    let mut anti = [0u64; 15];
    diag[0] = 0x80;
    anti[0] = 0x01;
    for i in 1..8 {
        diag[i] = (diag[i - 1] >> 1) ^ (1u64 << (8 * i + 7));
        anti[i] = (anti[i - 1] << 1) ^ (1u64 << (8 * i));
    }
    // Past the long diagonals the lines lose their lowest square instead.
    diag[8] = diag[7] >> 1;
    anti[8] = (anti[7] << 1) ^ (1u64 << 8);
    for i in 9..15 {
        diag[i] = (diag[i - 1] >> 1) ^ (1u64 << (8 * ((i & 7) - 1) + 7));
        anti[i] = (anti[i - 1] << 1) ^ (1u64 << (8 * ((i & 7) + 1)));
    }
    (diag, anti)
}

pub(crate) fn knight_attacks() -> [u64; 64] {
    let mut attacks = [0u64; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        let b = 1u64 << sq;
        *slot = ((b << 17) & NOT_A)
            | ((b << 15) & NOT_H)
            | ((b << 10) & NOT_AB)
            | ((b << 6) & NOT_GH)
            | ((b >> 17) & NOT_H)
            | ((b >> 15) & NOT_A)
            | ((b >> 10) & NOT_GH)
            | ((b >> 6) & NOT_AB);
    }
    attacks
}

pub(crate) fn king_attacks() -> [u64; 64] {
    let mut attacks = [0u64; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        let b = 1u64 << sq;
        let sideways = ((b << 1) & NOT_A) | ((b >> 1) & NOT_H);
        let row = b | sideways;
        *slot = sideways | (row << 8) | (row >> 8);
    }
    attacks
}

/// Pawn capture targets, indexed `[color][square]` (White = 0).
pub(crate) fn pawn_attacks() -> [[u64; 64]; 2] {
    let mut attacks = [[0u64; 64]; 2];
    for sq in 0..64 {
        let b = 1u64 << sq;
        attacks[0][sq] = ((b << 9) & NOT_A) | ((b << 7) & NOT_H);
        attacks[1][sq] = ((b >> 7) & NOT_A) | ((b >> 9) & NOT_H);
    }
    attacks
}
