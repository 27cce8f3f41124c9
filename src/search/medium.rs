//! The Medium engine: a capped 2-ply alpha-beta search with a small
//! positional overlay on top of the Hard engine's material+PST evaluation.
use crate::board::{Board, Color, Piece, Square};
use crate::moves::execute::{generate_legal, make_move, undo_move};
use crate::moves::types::Move;
use crate::search::eval::evaluate;
use crate::search::ordering::order_moves;

const ROOT_MOVE_CAP: usize = 20;
const CHILD_MOVE_CAP: usize = 15;
const DEPTH: u8 = 2;
const POSITIONAL_WEIGHT: f64 = 0.10;

/// `evaluate` plus a modest overlay (center control, piece activity, king
/// safety, pawn structure) worth about 10% of the raw material+PST score,
/// to give Medium's play some texture without the cost of Hard's full move
/// ordering and quiescence.
fn positional_eval(board: &Board) -> i32 {
    let base = evaluate(board);
    let overlay = center_control(board) + piece_activity(board) + king_safety(board) + pawn_structure(board);
    base + (overlay as f64 * POSITIONAL_WEIGHT) as i32
}

fn center_control(board: &Board) -> i32 {
    let mut score = 0;
    for (sq, occ) in board.iter_occupied() {
        if (3..=5).contains(&sq.col) {
            let bonus = 4;
            score += if occ.color == Color::Red { bonus } else { -bonus };
        }
    }
    score
}

fn piece_activity(board: &Board) -> i32 {
    // Rewards pieces that have crossed their own half of the board.
    let mut score = 0;
    for (sq, occ) in board.iter_occupied() {
        let advanced = match occ.color {
            Color::Red => sq.row >= 5,
            Color::Black => sq.row <= 4,
        };
        if advanced {
            score += if occ.color == Color::Red { 6 } else { -6 };
        }
    }
    score
}

/// Counts each side's own pieces in the ring around its King.
fn king_safety(board: &Board) -> i32 {
    let mut score = 0;
    for color in [Color::Red, Color::Black] {
        let Some(king_sq) = board.king_square(color) else { continue };
        let mut protection = 0;
        for dr in -1i32..=1 {
            for dc in -1i32..=1 {
                let nr = king_sq.row as i32 + dr;
                let nc = king_sq.col as i32 + dc;
                if Square::in_bounds(nr, nc) {
                    if let Some(occ) = board.piece_at(Square::new(nr as u8, nc as u8)) {
                        if occ.color == color {
                            protection += 1;
                        }
                    }
                }
            }
        }
        let bonus = protection * 5;
        score += if color == Color::Red { bonus } else { -bonus };
    }
    score
}

/// Rewards Pawns held near the center file and Pawns standing side by side.
fn pawn_structure(board: &Board) -> i32 {
    let mut score = 0;
    for (sq, occ) in board.iter_occupied() {
        if occ.piece != Piece::Pawn {
            continue;
        }
        let mut contribution = 10 - (sq.col as i32 - 4).abs();
        for dc in [-1i32, 1] {
            let nc = sq.col as i32 + dc;
            if Square::in_bounds(sq.row as i32, nc) {
                if let Some(neighbor) = board.piece_at(Square::new(sq.row, nc as u8)) {
                    if neighbor.piece == Piece::Pawn && neighbor.color == occ.color {
                        contribution += 5;
                    }
                }
            }
        }
        score += if occ.color == Color::Red { contribution } else { -contribution };
    }
    score
}

pub fn best_move(board: &mut Board) -> Option<Move> {
    let side = board.side_to_move;
    let maximizing = side == Color::Red;

    let mut root_moves: Vec<Move> = Vec::with_capacity(64);
    generate_legal(board, side, &mut root_moves);
    if root_moves.is_empty() {
        return None;
    }

    order_moves(&mut root_moves, board, [None, None], &|_| 0, None);
    if root_moves.len() > ROOT_MOVE_CAP {
        root_moves.truncate(ROOT_MOVE_CAP);
    }

    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = root_moves[0];

    for &mv in &root_moves {
        let undo = make_move(board, mv);
        let score = alpha_beta(board, DEPTH - 1, -i32::MAX, i32::MAX);
        undo_move(board, undo);

        if (maximizing && score > best_score) || (!maximizing && score < best_score) {
            best_score = score;
            best_move = mv;
        }
    }

    Some(best_move)
}

fn alpha_beta(board: &mut Board, depth: u8, mut alpha: i32, mut beta: i32) -> i32 {
    let side = board.side_to_move;
    let maximizing = side == Color::Red;

    if depth == 0 {
        return positional_eval(board);
    }

    let mut moves: Vec<Move> = Vec::with_capacity(32);
    generate_legal(board, side, &mut moves);
    if moves.is_empty() {
        return if crate::moves::square_control::in_check(board, side) {
            if maximizing { -49000 } else { 49000 }
        } else {
            0
        };
    }

    order_moves(&mut moves, board, [None, None], &|_| 0, None);
    if moves.len() > CHILD_MOVE_CAP {
        moves.truncate(CHILD_MOVE_CAP);
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        let undo = make_move(board, mv);
        let score = alpha_beta(board, depth - 1, alpha, beta);
        undo_move(board, undo);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if alpha >= beta {
            break;
        }
    }
    best
}
