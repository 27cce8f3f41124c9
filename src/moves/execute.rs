//! Move application (make/unmake) and the legal-move generator built from
//! pseudo-legal generation plus a check/flying-general filter.
use crate::board::{Board, Color, Occupant, Square};
use crate::error::{EngineError, EngineResult};
use crate::hash::zobrist::{piece_key, side_to_move_key};
use crate::moves::movegen::generate_pseudo_legal;
use crate::moves::square_control::{in_check, kings_facing};
use crate::moves::types::{Move, MoveBuffer, Undo};

/// Applies `mv` to `board`, returning a token that reverses it exactly.
pub fn make_move(board: &mut Board, mv: Move) -> Undo {
    let color = board.side_to_move;
    let from_idx = mv.from.index();
    let to_idx = mv.to.index();

    let undo = Undo {
        from: mv.from,
        to: mv.to,
        piece: mv.piece,
        color,
        captured: mv.captured.map(|p| (color.opposite(), p)),
        prev_hash: board.hash,
    };

    board.hash ^= piece_key(color, mv.piece, from_idx);
    if let Some(captured) = mv.captured {
        board.hash ^= piece_key(color.opposite(), captured, to_idx);
    }
    board.hash ^= piece_key(color, mv.piece, to_idx);
    board.hash ^= side_to_move_key();

    board.set(mv.from, None);
    board.set(mv.to, Some(Occupant { color, piece: mv.piece }));
    board.side_to_move = color.opposite();

    undo
}

/// Reverses a previous `make_move` call. Must be called with the `Undo`
/// returned by the matching `make_move`, on the same board, with no
/// intervening unrelated mutation.
pub fn undo_move(board: &mut Board, undo: Undo) {
    board.set(undo.from, Some(Occupant { color: undo.color, piece: undo.piece }));
    match undo.captured {
        Some((capt_color, capt_piece)) => {
            board.set(undo.to, Some(Occupant { color: capt_color, piece: capt_piece }));
        }
        None => board.set(undo.to, None),
    }
    board.side_to_move = undo.color;
    board.hash = undo.prev_hash;
}

/// True if `mv`, played by the side currently to move, does not leave that
/// side in check (including flying general).
fn leaves_mover_safe(board: &mut Board, mv: Move) -> bool {
    let mover = board.side_to_move;
    let undo = make_move(board, mv);
    let safe = !in_check(board, mover) && !kings_facing(board);
    undo_move(board, undo);
    safe
}

/// Appends all legal moves for `color` to `buf`. `color` need not be the
/// board's current side to move (useful for attack probing elsewhere), but
/// the common case is `board.side_to_move`.
pub fn generate_legal(board: &mut Board, color: Color, buf: &mut impl MoveBuffer) {
    let saved_side = board.side_to_move;
    board.side_to_move = color;

    let mut pseudo: Vec<Move> = Vec::with_capacity(64);
    generate_pseudo_legal(board, color, &mut pseudo);
    for mv in pseudo {
        if leaves_mover_safe(board, mv) {
            buf.push(mv);
        }
    }

    board.side_to_move = saved_side;
}

/// Appends only legal capturing moves for `color` (used by quiescence).
pub fn generate_captures(board: &mut Board, color: Color, buf: &mut impl MoveBuffer) {
    let saved_side = board.side_to_move;
    board.side_to_move = color;

    let mut pseudo: Vec<Move> = Vec::with_capacity(32);
    generate_pseudo_legal(board, color, &mut pseudo);
    for mv in pseudo.into_iter().filter(Move::is_capture) {
        if leaves_mover_safe(board, mv) {
            buf.push(mv);
        }
    }

    board.side_to_move = saved_side;
}

pub fn is_legal_move(board: &mut Board, mv: Move) -> bool {
    let mut legal: Vec<Move> = Vec::with_capacity(64);
    generate_legal(board, board.side_to_move, &mut legal);
    legal.contains(&mv)
}

/// Validates and applies a move described only by its source and
/// destination squares, the form a caller at the crate boundary (a UI, a
/// loaded game record) actually has on hand. Unlike `make_move`, this
/// never assumes the input is already a legal move for the side to move.
pub fn try_make_move(board: &mut Board, from: Square, to: Square) -> EngineResult<Undo> {
    let occ = board.piece_at(from).ok_or(EngineError::EmptySource(from))?;
    if occ.color != board.side_to_move {
        return Err(EngineError::WrongSidePiece(from));
    }

    let captured = board.piece_at(to).map(|o| o.piece);
    let mv = Move::new(from, to, occ.piece, captured);
    if !is_legal_move(board, mv) {
        return Err(EngineError::IllegalMove { from, to });
    }

    Ok(make_move(board, mv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, Square};

    #[test]
    fn apply_then_undo_restores_board_and_hash() {
        let mut board = Board::starting_position();
        let before_hash = board.hash;
        let before = format!("{board}");

        let mv = Move::new(Square::new(3, 0), Square::new(4, 0), Piece::Pawn, None);
        let undo = make_move(&mut board, mv);
        assert_ne!(board.hash, before_hash);
        undo_move(&mut board, undo);

        assert_eq!(board.hash, before_hash);
        assert_eq!(format!("{board}"), before);
    }

    #[test]
    fn starting_position_has_44_legal_moves_for_red() {
        let mut board = Board::starting_position();
        let mut moves: Vec<Move> = Vec::with_capacity(64);
        generate_legal(&mut board, Color::Red, &mut moves);
        assert_eq!(moves.len(), 44);
    }

    #[test]
    fn try_make_move_rejects_an_empty_source_square() {
        let mut board = Board::starting_position();
        let err = try_make_move(&mut board, Square::new(4, 4), Square::new(5, 4)).unwrap_err();
        assert_eq!(err, crate::error::EngineError::EmptySource(Square::new(4, 4)));
    }

    #[test]
    fn try_make_move_rejects_the_opponents_piece() {
        let mut board = Board::starting_position();
        let err = try_make_move(&mut board, Square::new(6, 0), Square::new(5, 0)).unwrap_err();
        assert_eq!(err, crate::error::EngineError::WrongSidePiece(Square::new(6, 0)));
    }

    #[test]
    fn try_make_move_rejects_an_illegal_destination() {
        let mut board = Board::starting_position();
        let err = try_make_move(&mut board, Square::new(0, 4), Square::new(9, 4)).unwrap_err();
        assert_eq!(
            err,
            crate::error::EngineError::IllegalMove { from: Square::new(0, 4), to: Square::new(9, 4) }
        );
    }

    #[test]
    fn try_make_move_applies_a_legal_pawn_push() {
        let mut board = Board::starting_position();
        let undo = try_make_move(&mut board, Square::new(3, 0), Square::new(4, 0)).expect("legal push");
        assert_eq!(board.piece_at(Square::new(4, 0)).unwrap().piece, Piece::Pawn);
        undo_move(&mut board, undo);
    }

    #[test]
    fn cannot_move_into_check() {
        // Red King alone on its file facing Black Rook with nothing between:
        // moving a blocking piece away would be illegal.
        let mut board = Board::empty();
        board.set(Square::new(0, 4), Some(Occupant { color: Color::Red, piece: Piece::King }));
        board.set(Square::new(9, 4), Some(Occupant { color: Color::Black, piece: Piece::King }));
        board.set(Square::new(5, 4), Some(Occupant { color: Color::Red, piece: Piece::Rook }));
        board.side_to_move = Color::Red;

        let mv = Move::new(Square::new(5, 4), Square::new(5, 3), Piece::Rook, None);
        assert!(!leaves_mover_safe(&mut board, mv));
    }
}
