use xiangqi_engine::board::{Board, Color};
use xiangqi_engine::hash::zobrist::hash_position;
use xiangqi_engine::moves::execute::generate_legal;
use xiangqi_engine::moves::types::Move;
use xiangqi_engine::search::tt::{Bound, TranspositionTable};

#[test]
fn store_then_probe_round_trips_on_a_real_position_hash() {
    let board = Board::starting_position();
    let key = hash_position(&board);

    let mut moves: Vec<Move> = Vec::new();
    let mut board = board;
    generate_legal(&mut board, Color::Red, &mut moves);
    let best = moves[0];

    let mut tt = TranspositionTable::new(1);
    tt.store(key, Some(best), 37, 6, Bound::Exact);

    let (stored_move, score, depth, bound) = tt.probe(key).expect("entry should be present");
    assert_eq!(stored_move, Some(best));
    assert_eq!(score, 37);
    assert_eq!(depth, 6);
    assert_eq!(bound, Bound::Exact);
}

#[test]
fn a_lower_bound_entry_only_cuts_off_once_it_meets_beta() {
    let mut tt = TranspositionTable::new(1);
    tt.store(7, None, 80, 4, Bound::LowerBound);

    assert_eq!(tt.cutoff(7, 4, -1000, 1000), None);
    assert_eq!(tt.cutoff(7, 4, -1000, 80), Some(80));
}

#[test]
fn an_upper_bound_entry_only_cuts_off_once_alpha_meets_it() {
    let mut tt = TranspositionTable::new(1);
    tt.store(9, None, -40, 4, Bound::UpperBound);

    assert_eq!(tt.cutoff(9, 4, -1000, 1000), None);
    assert_eq!(tt.cutoff(9, 4, -40, 1000), Some(-40));
}

#[test]
fn clearing_the_table_drops_every_entry() {
    let mut tt = TranspositionTable::new(1);
    tt.store(1, None, 1, 1, Bound::Exact);
    tt.store(2, None, 2, 1, Bound::Exact);
    tt.clear();
    assert_eq!(tt.probe(1), None);
    assert_eq!(tt.probe(2), None);
}

#[test]
fn a_later_store_at_the_same_key_always_replaces_the_earlier_one() {
    let mut tt = TranspositionTable::new(1);
    tt.store(5, None, 1, 10, Bound::Exact);
    tt.store(5, None, -99, 1, Bound::UpperBound);

    let (_, score, depth, bound) = tt.probe(5).expect("entry present");
    assert_eq!(score, -99);
    assert_eq!(depth, 1);
    assert_eq!(bound, Bound::UpperBound);
}
