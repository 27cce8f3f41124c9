//! A self-play/demo harness: drives the engines against each other (or
//! against a fixed difficulty for both sides) and prints the board after
//! every move. This is not a UCI frontend; that protocol is a non-goal
//! for the core.
use std::time::Duration;

use xiangqi_engine::board::Board;
use xiangqi_engine::search::search::{HardEngine, SearchBudget};
use xiangqi_engine::search::{self, Difficulty};
use xiangqi_engine::status::{self, GameStatus};

fn parse_difficulty(arg: Option<&str>) -> Difficulty {
    match arg {
        Some("easy") => Difficulty::Easy,
        Some("medium") => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}

fn main() {
    xiangqi_engine::logger::init_logging("logs/selfplay.log", "info");

    let args: Vec<String> = std::env::args().collect();
    let difficulty = parse_difficulty(args.get(1).map(String::as_str));
    let max_plies: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(200);

    let mut board = Board::starting_position();
    let mut hard_engine = HardEngine::new();

    println!("{board}");

    for ply in 0..max_plies {
        match status::position_status(&mut board) {
            GameStatus::Checkmate => {
                println!("Checkmate after {ply} plies. {:?} to move has no escape.", board.side_to_move);
                break;
            }
            GameStatus::Stalemate => {
                println!("Stalemate after {ply} plies.");
                break;
            }
            GameStatus::InPlay => {}
        }

        let mv = match difficulty {
            Difficulty::Hard => hard_engine.best_move(&mut board, SearchBudget::new(Duration::from_secs(3), 5)),
            other => search::best_move(&mut board, other),
        };

        let mv = match mv {
            Some(mv) => mv,
            None => {
                println!("No move returned with legal moves available; this is a bug.");
                break;
            }
        };

        tracing::info!(ply, mover = ?board.side_to_move, mv = %mv, "applying move");
        xiangqi_engine::moves::execute::make_move(&mut board, mv);
        println!("{ply}: {mv}");
        println!("{board}");
    }
}
