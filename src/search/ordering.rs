use crate::board::Board;
use crate::moves::execute::{make_move, undo_move};
use crate::moves::types::Move;
use crate::search::eval::evaluate;

const HASH_MOVE_SCORE: i32 = 2_000_000_000;
const CAPTURE_BASE: i32 = 1_000_000;
const KILLER1_SCORE: i32 = 900_000;
const KILLER2_SCORE: i32 = 800_000;

/// `|value(captured)| * 10 - |value(mover)|`.
pub fn mvv_lva_score(mv: Move) -> i32 {
    match mv.captured {
        Some(captured) => captured.value().abs() * 10 - mv.piece.value().abs(),
        None => 0,
    }
}

/// Cheap incremental estimate of a quiet move's positional value: the eval
/// delta it produces, from the mover's own perspective.
fn pst_delta(board: &mut Board, mv: Move) -> i32 {
    let mover = board.side_to_move;
    let before = evaluate(board);
    let undo = make_move(board, mv);
    let after = evaluate(board);
    undo_move(board, undo);
    let delta = after - before;
    match mover {
        crate::board::Color::Red => delta,
        crate::board::Color::Black => -delta,
    }
}

pub fn order_moves(
    moves: &mut [Move],
    board: &mut Board,
    killers: [Option<Move>; 2],
    history: &dyn Fn(Move) -> i32,
    hash_move: Option<Move>,
) {
    let scored: Vec<(Move, i32)> = moves
        .iter()
        .map(|&mv| {
            if Some(mv) == hash_move {
                return (mv, HASH_MOVE_SCORE);
            }
            if mv.is_capture() {
                return (mv, CAPTURE_BASE + mvv_lva_score(mv) + pst_delta(board, mv));
            }
            if Some(mv) == killers[0] {
                return (mv, KILLER1_SCORE);
            }
            if Some(mv) == killers[1] {
                return (mv, KILLER2_SCORE);
            }
            (mv, history(mv) + pst_delta(board, mv))
        })
        .collect();

    let mut indexed: Vec<usize> = (0..moves.len()).collect();
    indexed.sort_by_key(|&i| std::cmp::Reverse(scored[i].1));
    let ordered: Vec<Move> = indexed.into_iter().map(|i| scored[i].0).collect();
    moves.copy_from_slice(&ordered);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Occupant, Piece, Square};

    #[test]
    fn hash_move_sorted_first() {
        let mut board = Board::starting_position();
        let mut moves = vec![
            Move::new(Square::new(3, 0), Square::new(4, 0), Piece::Pawn, None),
            Move::new(Square::new(2, 1), Square::new(2, 4), Piece::Cannon, None),
        ];
        let hash_move = moves[1];
        order_moves(&mut moves, &mut board, [None, None], &|_| 0, Some(hash_move));
        assert_eq!(moves[0], hash_move);
    }

    #[test]
    fn captures_outrank_quiets() {
        let mut board = Board::empty();
        board.set(Square::new(0, 0), Some(Occupant { color: Color::Red, piece: Piece::Rook }));
        board.set(Square::new(0, 8), Some(Occupant { color: Color::Black, piece: Piece::Rook }));
        board.side_to_move = Color::Red;
        let capture = Move::new(Square::new(0, 0), Square::new(0, 8), Piece::Rook, Some(Piece::Rook));
        let quiet = Move::new(Square::new(0, 0), Square::new(1, 0), Piece::Rook, None);
        let mut moves = vec![quiet, capture];
        order_moves(&mut moves, &mut board, [None, None], &|_| 0, None);
        assert_eq!(moves[0], capture);
    }
}
