pub mod context;
pub mod easy;
pub mod eval;
pub mod medium;
pub mod ordering;
pub mod pst;
pub mod search;
pub mod tt;

use std::time::Duration;

use crate::board::Board;
use crate::moves::types::Move;
use search::{HardEngine, SearchBudget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn budget(self) -> SearchBudget {
        match self {
            Difficulty::Easy => SearchBudget::new(Duration::from_millis(50), 1),
            Difficulty::Medium => SearchBudget::new(Duration::from_millis(200), 3),
            Difficulty::Hard => SearchBudget::new(Duration::from_secs(3), 5),
        }
    }
}

/// Dispatches to the engine matching `difficulty`. Returns `None` only when
/// `board.side_to_move` has no legal move (checkmate or stalemate).
pub fn best_move(board: &mut Board, difficulty: Difficulty) -> Option<Move> {
    match difficulty {
        Difficulty::Easy => easy::best_move(board),
        Difficulty::Medium => medium::best_move(board),
        Difficulty::Hard => HardEngine::new().best_move(board, difficulty.budget()),
    }
}
