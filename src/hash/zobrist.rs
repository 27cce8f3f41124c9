// Zobrist key table: one random u64 per (square, color, piece kind) plus one
// side-to-move random. The table is built once, with a fixed seed, so that
// keys are reproducible across runs and processes.
use crate::board::{Board, Color, Piece, ROWS, COLS};
use once_cell::sync::OnceCell;
use rand::{RngCore, SeedableRng, rngs::StdRng};

const ZOBRIST_SEED: u64 = 0x9E37_79B9_AAAC_5C87;

pub struct ZobristKeys {
    /// [color][piece][square]
    piece: [[[u64; ROWS * COLS]; 7]; 2],
    side_to_move: u64,
}

fn non_zero(rng: &mut StdRng) -> u64 {
    let mut v = rng.next_u64();
    while v == 0 {
        v = rng.next_u64();
    }
    v
}

fn generate_zobrist_keys() -> ZobristKeys {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
    let mut keys = ZobristKeys {
        piece: [[[0u64; ROWS * COLS]; 7]; 2],
        side_to_move: 0,
    };
    for color in 0..2 {
        for piece in 0..7 {
            for sq in 0..ROWS * COLS {
                keys.piece[color][piece][sq] = non_zero(&mut rng);
            }
        }
    }
    keys.side_to_move = non_zero(&mut rng);
    keys
}

pub fn zobrist_keys() -> &'static ZobristKeys {
    static KEYS: OnceCell<ZobristKeys> = OnceCell::new();
    KEYS.get_or_init(generate_zobrist_keys)
}

#[inline(always)]
fn color_index(color: Color) -> usize {
    match color {
        Color::Red => 0,
        Color::Black => 1,
    }
}

#[inline(always)]
pub fn piece_key(color: Color, piece: Piece, square_index: usize) -> u64 {
    zobrist_keys().piece[color_index(color)][piece.index()][square_index]
}

#[inline(always)]
pub fn side_to_move_key() -> u64 {
    zobrist_keys().side_to_move
}

/// Recomputes a position's key from scratch. Used once at construction;
/// incremental updates during search happen via `piece_key`/`side_to_move_key`.
pub fn hash_position(board: &Board) -> u64 {
    let mut h = 0u64;
    for (sq, occ) in board.iter_occupied() {
        h ^= piece_key(occ.color, occ.piece, sq.index());
    }
    if board.side_to_move == Color::Red {
        h ^= side_to_move_key();
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_deterministic_across_calls() {
        let a = generate_zobrist_keys();
        let b = generate_zobrist_keys();
        assert_eq!(a.piece[0][0][0], b.piece[0][0][0]);
        assert_eq!(a.side_to_move, b.side_to_move);
    }

    #[test]
    fn distinct_squares_get_distinct_keys() {
        let k = zobrist_keys();
        assert_ne!(k.piece[0][0][0], k.piece[0][0][1]);
    }

    #[test]
    fn starting_position_hash_matches_recompute() {
        let b = Board::starting_position();
        assert_eq!(b.hash, hash_position(&b));
    }
}
