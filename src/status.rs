use crate::board::Board;
use crate::moves::execute::generate_legal;
use crate::moves::square_control::in_check;
use crate::moves::types::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InPlay,
    Checkmate,
    Stalemate,
}

/// The status of the position for the side to move. Repetition and
/// move-count draws are out of scope for this engine; only mate and
/// stalemate are recognized, per the legal-move-count + check test.
pub fn position_status(board: &mut Board) -> GameStatus {
    let side = board.side_to_move;
    let mut legal: Vec<Move> = Vec::with_capacity(64);
    generate_legal(board, side, &mut legal);

    if legal.is_empty() {
        if in_check(board, side) { GameStatus::Checkmate } else { GameStatus::Stalemate }
    } else {
        GameStatus::InPlay
    }
}
