use xiangqi_engine::board::{Board, Color, Occupant, Piece, Square};
use xiangqi_engine::search::eval::evaluate;

#[test]
fn starting_position_evaluates_to_zero() {
    let board = Board::starting_position();
    assert_eq!(evaluate(&board), 0);
}

#[test]
fn material_dominates_over_piece_square_placement() {
    let mut board = Board::empty();
    board.set(Square::new(0, 4), Some(Occupant { color: Color::Red, piece: Piece::King }));
    board.set(Square::new(9, 4), Some(Occupant { color: Color::Black, piece: Piece::King }));
    board.set(Square::new(0, 0), Some(Occupant { color: Color::Red, piece: Piece::Rook }));
    assert!(evaluate(&board) > 0);

    board.set(Square::new(0, 0), None);
    board.set(Square::new(9, 0), Some(Occupant { color: Color::Black, piece: Piece::Rook }));
    assert!(evaluate(&board) < 0);
}

#[test]
fn swapping_colors_on_an_otherwise_symmetric_board_negates_the_score() {
    let mut red_up = Board::empty();
    red_up.set(Square::new(0, 4), Some(Occupant { color: Color::Red, piece: Piece::King }));
    red_up.set(Square::new(9, 4), Some(Occupant { color: Color::Black, piece: Piece::King }));
    red_up.set(Square::new(3, 3), Some(Occupant { color: Color::Red, piece: Piece::Cannon }));

    let mut black_up = Board::empty();
    black_up.set(Square::new(0, 4), Some(Occupant { color: Color::Red, piece: Piece::King }));
    black_up.set(Square::new(9, 4), Some(Occupant { color: Color::Black, piece: Piece::King }));
    black_up.set(Square::new(6, 3), Some(Occupant { color: Color::Black, piece: Piece::Cannon }));

    assert_eq!(evaluate(&red_up), -evaluate(&black_up));
}

#[test]
fn endgame_king_activity_bonus_only_applies_once_material_is_thin() {
    let mut thin = Board::empty();
    thin.set(Square::new(5, 4), Some(Occupant { color: Color::Red, piece: Piece::King }));
    thin.set(Square::new(9, 4), Some(Occupant { color: Color::Black, piece: Piece::King }));
    // A Red King advanced to row 5 should score above the symmetric row-0 case
    // once the endgame bonus is active, since only 2 pieces remain.
    let mut home = Board::empty();
    home.set(Square::new(0, 4), Some(Occupant { color: Color::Red, piece: Piece::King }));
    home.set(Square::new(9, 4), Some(Occupant { color: Color::Black, piece: Piece::King }));

    assert!(evaluate(&thin) > evaluate(&home));
}
