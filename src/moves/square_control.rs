//! Attack detection: is a square attacked, is a side in check, and the
//! "flying general" rule (two Kings facing each other on an open file).
use crate::board::{Board, Color, Square};
use crate::moves::movegen::generate_pseudo_legal;
use crate::moves::types::Move;

/// True if any piece of `attacker` pseudo-legally reaches `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    let mut buf: Vec<Move> = Vec::with_capacity(64);
    generate_pseudo_legal(board, attacker, &mut buf);
    buf.iter().any(|m| m.to == square)
}

/// True if the two Kings sit on the same column with nothing between them.
/// An illegal position in Xiangqi regardless of whose turn it is.
pub fn kings_facing(board: &Board) -> bool {
    let red_king = match board.king_square(Color::Red) {
        Some(sq) => sq,
        None => return false,
    };
    let black_king = match board.king_square(Color::Black) {
        Some(sq) => sq,
        None => return false,
    };
    if red_king.col != black_king.col {
        return false;
    }
    let (lo, hi) = if red_king.row < black_king.row {
        (red_king.row, black_king.row)
    } else {
        (black_king.row, red_king.row)
    };
    for row in (lo + 1)..hi {
        if board.piece_at(Square::new(row, red_king.col)).is_some() {
            return false;
        }
    }
    true
}

/// A side is "in check" if its King is attacked, or if the position has
/// fallen into flying general (which this engine treats as check on the
/// side to move, since it is never a legal resting state).
pub fn in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king_sq) => is_square_attacked(board, king_sq, color.opposite()) || kings_facing(board),
        None => false,
    }
}

pub fn is_in_check(board: &Board, color: Color) -> bool {
    in_check(board, color)
}
