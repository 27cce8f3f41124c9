//! The Easy engine: a 1-ply heuristic selector with capture/check/escape
//! bonuses and random tie-breaking, grounded in the same shape as the
//! Hard engine's evaluation but without any recursive search.
use rand::seq::IndexedRandom;

use crate::board::{Board, Color};
use crate::moves::execute::{generate_legal, make_move, undo_move};
use crate::moves::square_control::in_check;
use crate::moves::types::Move;
use crate::search::eval::evaluate;

const CAPTURE_BONUS: i32 = 25;
const ESCAPE_CHECK_BONUS: i32 = 30;
const CHECK_BONUS: i32 = 15;

pub fn best_move(board: &mut Board) -> Option<Move> {
    let side = board.side_to_move;
    let mut moves: Vec<Move> = Vec::with_capacity(64);
    generate_legal(board, side, &mut moves);
    if moves.is_empty() {
        return None;
    }

    order_captures_and_checks_first(board, &mut moves, side);

    let sign = if side == Color::Red { 1 } else { -1 };
    let was_in_check = in_check(board, side);

    let mut best_score = i32::MIN;
    let mut tied: Vec<Move> = Vec::new();

    for &mv in &moves {
        let is_capture = mv.is_capture();
        let undo = make_move(board, mv);
        let mut score = evaluate(board) * sign;
        if is_capture {
            score += CAPTURE_BONUS;
        }
        if in_check(board, side.opposite()) {
            score += CHECK_BONUS;
        }
        if was_in_check && !in_check(board, side) {
            score += ESCAPE_CHECK_BONUS;
        }
        undo_move(board, undo);

        match score.cmp(&best_score) {
            std::cmp::Ordering::Greater => {
                best_score = score;
                tied.clear();
                tied.push(mv);
            }
            std::cmp::Ordering::Equal => tied.push(mv),
            std::cmp::Ordering::Less => {}
        }
    }

    tied.choose(&mut rand::rng()).copied()
}

fn order_captures_and_checks_first(board: &mut Board, moves: &mut [Move], side: Color) {
    let opponent = side.opposite();
    moves.sort_by_cached_key(|&mv| {
        if mv.is_capture() {
            return 0;
        }
        let undo = make_move(board, mv);
        let gives_check = in_check(board, opponent);
        undo_move(board, undo);
        if gives_check { 1 } else { 2 }
    });
}
