//! Pseudo-legal move generation, one function per piece kind. Legality
//! (check, flying general) is filtered afterward in `execute::generate_legal`.
use crate::board::{Board, Color, Occupant, Piece, Square, COLS, ROWS, in_palace, on_own_side};
use crate::moves::types::{Move, MoveBuffer};

#[inline(always)]
fn push_if_own_free(board: &Board, color: Color, from: Square, to: Square, piece: Piece, buf: &mut impl MoveBuffer) {
    match board.piece_at(to) {
        Some(occ) if occ.color == color => {}
        Some(occ) => buf.push(Move::new(from, to, piece, Some(occ.piece))),
        None => buf.push(Move::new(from, to, piece, None)),
    }
}

fn king_moves(board: &Board, color: Color, from: Square, buf: &mut impl MoveBuffer) {
    const DELTAS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    for (dr, dc) in DELTAS {
        let (r, c) = (from.row as i32 + dr, from.col as i32 + dc);
        if !Square::in_bounds(r, c) {
            continue;
        }
        if !in_palace(color, r as u8, c as u8) {
            continue;
        }
        push_if_own_free(board, color, from, Square::new(r as u8, c as u8), Piece::King, buf);
    }
}

fn advisor_moves(board: &Board, color: Color, from: Square, buf: &mut impl MoveBuffer) {
    const DELTAS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
    for (dr, dc) in DELTAS {
        let (r, c) = (from.row as i32 + dr, from.col as i32 + dc);
        if !Square::in_bounds(r, c) || !in_palace(color, r as u8, c as u8) {
            continue;
        }
        push_if_own_free(board, color, from, Square::new(r as u8, c as u8), Piece::Advisor, buf);
    }
}

fn elephant_moves(board: &Board, color: Color, from: Square, buf: &mut impl MoveBuffer) {
    const DELTAS: [(i32, i32); 4] = [(2, 2), (2, -2), (-2, 2), (-2, -2)];
    for (dr, dc) in DELTAS {
        let (r, c) = (from.row as i32 + dr, from.col as i32 + dc);
        if !Square::in_bounds(r, c) || !on_own_side(color, r as u8) {
            continue;
        }
        let eye_row = (from.row as i32 + dr / 2) as u8;
        let eye_col = (from.col as i32 + dc / 2) as u8;
        if board.piece_at(Square::new(eye_row, eye_col)).is_some() {
            continue;
        }
        push_if_own_free(board, color, from, Square::new(r as u8, c as u8), Piece::Elephant, buf);
    }
}

fn knight_moves(board: &Board, color: Color, from: Square, buf: &mut impl MoveBuffer) {
    // (leg_dr, leg_dc, dest_dr, dest_dc)
    const DELTAS: [(i32, i32, i32, i32); 8] = [
        (-1, 0, -2, -1),
        (-1, 0, -2, 1),
        (1, 0, 2, -1),
        (1, 0, 2, 1),
        (0, -1, -1, -2),
        (0, 1, -1, 2),
        (0, -1, 1, -2),
        (0, 1, 1, 2),
    ];
    for (leg_dr, leg_dc, dr, dc) in DELTAS {
        let leg_r = from.row as i32 + leg_dr;
        let leg_c = from.col as i32 + leg_dc;
        if !Square::in_bounds(leg_r, leg_c) {
            continue;
        }
        if board.piece_at(Square::new(leg_r as u8, leg_c as u8)).is_some() {
            continue;
        }
        let (r, c) = (from.row as i32 + dr, from.col as i32 + dc);
        if !Square::in_bounds(r, c) {
            continue;
        }
        push_if_own_free(board, color, from, Square::new(r as u8, c as u8), Piece::Knight, buf);
    }
}

fn sliding_moves(board: &Board, color: Color, from: Square, piece: Piece, buf: &mut impl MoveBuffer) {
    const DIRS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    for (dr, dc) in DIRS {
        let mut r = from.row as i32 + dr;
        let mut c = from.col as i32 + dc;
        while Square::in_bounds(r, c) {
            let to = Square::new(r as u8, c as u8);
            match board.piece_at(to) {
                None => buf.push(Move::new(from, to, piece, None)),
                Some(occ) => {
                    if occ.color != color {
                        buf.push(Move::new(from, to, piece, Some(occ.piece)));
                    }
                    break;
                }
            }
            r += dr;
            c += dc;
        }
    }
}

fn cannon_moves(board: &Board, color: Color, from: Square, buf: &mut impl MoveBuffer) {
    const DIRS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    for (dr, dc) in DIRS {
        let mut r = from.row as i32 + dr;
        let mut c = from.col as i32 + dc;
        // Phase 1: slide over empty squares (non-capturing moves).
        while Square::in_bounds(r, c) {
            let to = Square::new(r as u8, c as u8);
            if board.piece_at(to).is_some() {
                break;
            }
            buf.push(Move::new(from, to, Piece::Cannon, None));
            r += dr;
            c += dc;
        }
        // Phase 2: the square we stopped on (if any) is the screen; the first
        // occupied square beyond it is a legal capture target.
        if Square::in_bounds(r, c) {
            r += dr;
            c += dc;
            while Square::in_bounds(r, c) {
                let to = Square::new(r as u8, c as u8);
                if let Some(occ) = board.piece_at(to) {
                    if occ.color != color {
                        buf.push(Move::new(from, to, Piece::Cannon, Some(occ.piece)));
                    }
                    break;
                }
                r += dr;
                c += dc;
            }
        }
    }
}

fn pawn_moves(board: &Board, color: Color, from: Square, buf: &mut impl MoveBuffer) {
    let forward: i32 = match color {
        Color::Red => 1,
        Color::Black => -1,
    };
    let mut candidates: Vec<(i32, i32)> = vec![(forward, 0)];
    if !on_own_side(color, from.row) {
        candidates.push((0, 1));
        candidates.push((0, -1));
    }
    for (dr, dc) in candidates {
        let (r, c) = (from.row as i32 + dr, from.col as i32 + dc);
        if !Square::in_bounds(r, c) {
            continue;
        }
        push_if_own_free(board, color, from, Square::new(r as u8, c as u8), Piece::Pawn, buf);
    }
}

/// Appends all pseudo-legal moves for `color` to `buf`. Does not filter for
/// check or flying general; see `execute::generate_legal` for that.
pub fn generate_pseudo_legal(board: &Board, color: Color, buf: &mut impl MoveBuffer) {
    for row in 0..ROWS as u8 {
        for col in 0..COLS as u8 {
            let from = Square::new(row, col);
            let Occupant { color: c, piece } = match board.piece_at(from) {
                Some(o) if o.color == color => o,
                _ => continue,
            };
            debug_assert_eq!(c, color);
            match piece {
                Piece::King => king_moves(board, color, from, buf),
                Piece::Advisor => advisor_moves(board, color, from, buf),
                Piece::Elephant => elephant_moves(board, color, from, buf),
                Piece::Knight => knight_moves(board, color, from, buf),
                Piece::Rook => sliding_moves(board, color, from, Piece::Rook, buf),
                Piece::Cannon => cannon_moves(board, color, from, buf),
                Piece::Pawn => pawn_moves(board, color, from, buf),
            }
        }
    }
}
