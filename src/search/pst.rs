//! Piece-square tables, Red's perspective, row 0 = Red's back rank.
//! Black's contribution is the same table read with the row mirrored
//! (`ROWS - 1 - row`), per `eval::evaluate`.
use crate::board::{ROWS, COLS};

pub type Table = [[i32; COLS]; ROWS];

pub const KING: Table = [
    [0, 0, 0, 5, 8, 5, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 5, 10, 5, 0, 0, 0],
    [0; 9],
    [0; 9],
    [0; 9],
    [0; 9],
    [0; 9],
    [0; 9],
    [0; 9],
];

pub const ADVISOR: Table = [
    [0, 0, 0, 5, 0, 5, 0, 0, 0],
    [0, 0, 0, 0, 8, 0, 0, 0, 0],
    [0, 0, 0, 5, 0, 5, 0, 0, 0],
    [0; 9],
    [0; 9],
    [0; 9],
    [0; 9],
    [0; 9],
    [0; 9],
    [0; 9],
];

pub const ELEPHANT: Table = [
    [0, 0, 4, 0, 0, 0, 4, 0, 0],
    [0; 9],
    [2, 0, 0, 0, 6, 0, 0, 0, 2],
    [0; 9],
    [0, 0, 4, 0, 0, 0, 4, 0, 0],
    [0; 9],
    [0; 9],
    [0; 9],
    [0; 9],
    [0; 9],
];

pub const KNIGHT: Table = [
    [0, 2, 4, 3, 2, 3, 4, 2, 0],
    [2, 0, 6, 4, 8, 4, 6, 0, 2],
    [4, 6, 8, 7, 10, 7, 8, 6, 4],
    [3, 4, 7, 9, 12, 9, 7, 4, 3],
    [2, 8, 10, 12, 14, 12, 10, 8, 2],
    [2, 8, 10, 12, 14, 12, 10, 8, 2],
    [3, 4, 7, 9, 12, 9, 7, 4, 3],
    [4, 6, 8, 7, 10, 7, 8, 6, 4],
    [2, 0, 6, 4, 8, 4, 6, 0, 2],
    [0, 2, 4, 3, 2, 3, 4, 2, 0],
];

/// Rook values rise with advancement toward the opponent: rows 0-1 (behind
/// own lines) are worth less than rows 8-9 (deep in enemy territory).
pub const ROOK: Table = [
    [0, 2, 4, 5, 6, 5, 4, 2, 0],
    [0, 2, 4, 5, 6, 5, 4, 2, 0],
    [2, 4, 6, 7, 8, 7, 6, 4, 2],
    [2, 4, 6, 7, 8, 7, 6, 4, 2],
    [4, 6, 8, 9, 10, 9, 8, 6, 4],
    [4, 6, 8, 9, 10, 9, 8, 6, 4],
    [6, 8, 10, 11, 12, 11, 10, 8, 6],
    [8, 10, 12, 13, 14, 13, 12, 10, 8],
    [10, 12, 14, 15, 16, 15, 14, 12, 10],
    [12, 12, 14, 15, 16, 15, 14, 12, 12],
];

pub const CANNON: Table = [
    [6, 8, 7, 6, 5, 6, 7, 8, 6],
    [4, 5, 6, 5, 4, 5, 6, 5, 4],
    [2, 4, 5, 4, 3, 4, 5, 4, 2],
    [0, 2, 3, 2, 1, 2, 3, 2, 0],
    [0, 0, 1, 0, 0, 0, 1, 0, 0],
    [0, 0, 1, 0, 0, 0, 1, 0, 0],
    [0, 2, 3, 2, 1, 2, 3, 2, 0],
    [2, 4, 5, 4, 3, 4, 5, 4, 2],
    [4, 5, 6, 5, 4, 5, 6, 5, 4],
    [6, 8, 7, 6, 5, 6, 7, 8, 6],
];

/// Pawns are worth little before crossing the river (rows 0-3) and gain
/// value as they advance into enemy territory (row 9 = deepest advance).
pub const PAWN: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 2, 4, 2, 0, 0, 0],
    [0, 0, 2, 4, 6, 4, 2, 0, 0],
    [0, 2, 4, 6, 8, 6, 4, 2, 0],
    [2, 4, 6, 8, 10, 8, 6, 4, 2],
    [4, 6, 8, 10, 12, 10, 8, 6, 4],
    [6, 8, 10, 12, 14, 12, 10, 8, 6],
    [8, 10, 12, 14, 16, 14, 12, 10, 8],
    [10, 12, 14, 16, 18, 16, 14, 12, 10],
];

pub fn table_for(piece: crate::board::Piece) -> &'static Table {
    use crate::board::Piece::*;
    match piece {
        King => &KING,
        Advisor => &ADVISOR,
        Elephant => &ELEPHANT,
        Knight => &KNIGHT,
        Rook => &ROOK,
        Cannon => &CANNON,
        Pawn => &PAWN,
    }
}
