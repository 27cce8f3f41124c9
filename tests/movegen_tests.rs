use xiangqi_engine::board::{Board, Color, Occupant, Piece, Square};
use xiangqi_engine::moves::execute::generate_legal;
use xiangqi_engine::moves::types::Move;

#[test]
fn starting_position_has_44_legal_moves_for_red() {
    let mut board = Board::starting_position();
    let mut moves: Vec<Move> = Vec::new();
    generate_legal(&mut board, Color::Red, &mut moves);
    assert_eq!(moves.len(), 44);
}

#[test]
fn every_legal_move_is_pseudo_legal_for_its_piece() {
    let mut board = Board::starting_position();
    let mut moves: Vec<Move> = Vec::new();
    generate_legal(&mut board, Color::Red, &mut moves);
    for mv in moves {
        let occ = board.piece_at(mv.from).expect("move source must be occupied");
        assert_eq!(occ.piece, mv.piece);
        assert_eq!(occ.color, Color::Red);
    }
}

#[test]
fn elephant_never_crosses_the_river() {
    let mut board = Board::starting_position();
    let mut moves: Vec<Move> = Vec::new();
    generate_legal(&mut board, Color::Red, &mut moves);
    for mv in moves.iter().filter(|m| m.piece == Piece::Elephant) {
        assert!(mv.to.row <= 4, "red elephant crossed the river to row {}", mv.to.row);
    }
}

#[test]
fn no_legal_move_leaves_mover_in_check() {
    use xiangqi_engine::moves::execute::{make_move, undo_move};
    use xiangqi_engine::moves::square_control::in_check;

    let mut board = Board::empty();
    board.set(Square::new(0, 3), Some(Occupant { color: Color::Red, piece: Piece::King }));
    board.set(Square::new(9, 4), Some(Occupant { color: Color::Black, piece: Piece::King }));
    board.set(Square::new(2, 3), Some(Occupant { color: Color::Red, piece: Piece::Rook }));
    board.set(Square::new(9, 0), Some(Occupant { color: Color::Black, piece: Piece::Rook }));
    board.side_to_move = Color::Red;

    let mut moves: Vec<Move> = Vec::new();
    generate_legal(&mut board, Color::Red, &mut moves);
    for mv in moves {
        let undo = make_move(&mut board, mv);
        assert!(!in_check(&board, Color::Red));
        undo_move(&mut board, undo);
    }
}

#[test]
fn cannon_cannot_capture_with_no_screen() {
    let mut board = Board::empty();
    board.set(Square::new(0, 0), Some(Occupant { color: Color::Red, piece: Piece::Cannon }));
    board.set(Square::new(5, 0), Some(Occupant { color: Color::Black, piece: Piece::Rook }));
    board.set(Square::new(0, 3), Some(Occupant { color: Color::Red, piece: Piece::King }));
    board.set(Square::new(9, 4), Some(Occupant { color: Color::Black, piece: Piece::King }));
    board.side_to_move = Color::Red;

    let mut moves: Vec<Move> = Vec::new();
    generate_legal(&mut board, Color::Red, &mut moves);
    assert!(!moves.iter().any(|m| m.from == Square::new(0, 0) && m.to == Square::new(5, 0)));
}

#[test]
fn flying_general_forbids_the_exposing_move() {
    let mut board = Board::empty();
    board.set(Square::new(0, 4), Some(Occupant { color: Color::Red, piece: Piece::King }));
    board.set(Square::new(9, 4), Some(Occupant { color: Color::Black, piece: Piece::King }));
    board.set(Square::new(5, 4), Some(Occupant { color: Color::Red, piece: Piece::Cannon }));
    board.side_to_move = Color::Red;

    let mut moves: Vec<Move> = Vec::new();
    generate_legal(&mut board, Color::Red, &mut moves);
    // Sliding the cannon off column 4 would expose the Kings to each other.
    assert!(!moves.iter().any(|m| m.from == Square::new(5, 4) && m.to.col != 4));
}
