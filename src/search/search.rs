//! The Hard engine: iterative-deepening alpha-beta with aspiration windows,
//! principal variation search, late move reduction, quiescence, a
//! transposition table, and killer/history move ordering.
use std::time::{Duration, Instant};

use crate::board::{Board, Color};
use crate::moves::execute::{generate_captures, generate_legal, make_move, undo_move};
use crate::moves::square_control::in_check;
use crate::moves::types::Move;
use crate::search::context::SearchContext;
use crate::search::eval::evaluate;
use crate::search::ordering::order_moves;
use crate::search::tt::TranspositionTable;

/// A mate score magnitude at ply 0; any returned score whose magnitude
/// exceeds `MATE_THRESHOLD` represents a forced mate, shallower mates
/// reported with a larger magnitude.
pub const MATE_SCORE: i32 = 50_000;
pub const MATE_THRESHOLD: i32 = 40_000;

const ASPIRATION_WINDOW: i32 = 50;
const ROOT_MOVE_CAP: usize = 20;
const NODE_MOVE_CAP: usize = 24;
const LMR_MIN_DEPTH: u8 = 3;
const LMR_MOVE_THRESHOLD: usize = 4;
const NODES_PER_TIME_CHECK: u64 = 2048;
const BUDGET_STOP_FRACTION: f64 = 0.8;

#[derive(Debug, Clone, Copy)]
pub struct SearchBudget {
    pub time_limit: Duration,
    pub max_depth: u8,
}

impl SearchBudget {
    pub fn new(time_limit: Duration, max_depth: u8) -> Self {
        SearchBudget { time_limit, max_depth }
    }
}

struct Clock {
    start: Instant,
    limit: Duration,
    nodes: u64,
    stopped: bool,
}

impl Clock {
    fn new(limit: Duration) -> Self {
        Clock { start: Instant::now(), limit, nodes: 0, stopped: false }
    }

    fn elapsed_fraction(&self) -> f64 {
        self.start.elapsed().as_secs_f64() / self.limit.as_secs_f64().max(1e-9)
    }

    fn should_stop_iterating(&self) -> bool {
        self.elapsed_fraction() >= BUDGET_STOP_FRACTION
    }

    /// Hard wall-clock check: true once the budget is actually exhausted,
    /// not just the soft between-depths threshold.
    fn time_up(&self) -> bool {
        self.stopped || self.start.elapsed() >= self.limit
    }

    /// Increments the node counter and, every `NODES_PER_TIME_CHECK` nodes,
    /// re-polls the wall clock so a long-running subtree can be abandoned
    /// mid-iteration instead of only between whole depths.
    fn tick(&mut self) {
        self.nodes += 1;
        if self.nodes % NODES_PER_TIME_CHECK == 0 && self.start.elapsed() >= self.limit {
            self.stopped = true;
        }
    }
}

pub struct HardEngine {
    tt: TranspositionTable,
}

impl Default for HardEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HardEngine {
    pub fn new() -> Self {
        HardEngine { tt: TranspositionTable::new(16) }
    }

    /// Returns a legal move for `board.side_to_move`, or `None` if there is
    /// none (checkmate or stalemate). Never returns `None` when legal moves
    /// exist, even if the budget is exhausted before depth 1 completes.
    pub fn best_move(&mut self, board: &mut Board, budget: SearchBudget) -> Option<Move> {
        let mut root_moves: Vec<Move> = Vec::with_capacity(64);
        generate_legal(board, board.side_to_move, &mut root_moves);
        if root_moves.is_empty() {
            return None;
        }

        let mut ctx = SearchContext::new();
        let mut clock = Clock::new(budget.time_limit);
        let maximizing = board.side_to_move == Color::Red;

        order_moves(&mut root_moves, board, [None, None], &|_| 0, None);
        if root_moves.len() > ROOT_MOVE_CAP {
            root_moves.truncate(ROOT_MOVE_CAP);
        }

        let mut overall_best = root_moves[0];
        let mut prev_score = evaluate(board);

        for depth in 1..=budget.max_depth {
            if depth > 1 && clock.should_stop_iterating() {
                break;
            }

            let (window_alpha, window_beta) = if depth > 2 {
                (prev_score - ASPIRATION_WINDOW, prev_score + ASPIRATION_WINDOW)
            } else {
                (-i32::MAX, i32::MAX)
            };

            let mut pass = self.search_root(board, &root_moves, depth, window_alpha, window_beta, maximizing, &mut ctx, &mut clock);
            if pass.score <= window_alpha || pass.score >= window_beta {
                pass = self.search_root(board, &root_moves, depth, -i32::MAX, i32::MAX, maximizing, &mut ctx, &mut clock);
            }

            overall_best = pass.best_move;
            prev_score = pass.score;

            tracing::debug!(depth, score = pass.score, nodes = clock.nodes, "iterative deepening pass complete");

            if clock.should_stop_iterating() || clock.time_up() || prev_score.abs() >= MATE_THRESHOLD {
                break;
            }
        }

        Some(overall_best)
    }

    fn search_root(
        &mut self,
        board: &mut Board,
        root_moves: &[Move],
        depth: u8,
        alpha: i32,
        beta: i32,
        maximizing: bool,
        ctx: &mut SearchContext,
        clock: &mut Clock,
    ) -> RootPass {
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = root_moves[0];
        let mut alpha = alpha;
        let mut beta = beta;

        for (i, &mv) in root_moves.iter().enumerate() {
            let undo = make_move(board, mv);
            let score = if i == 0 {
                self.alpha_beta(board, depth.saturating_sub(1), alpha, beta, 1, ctx, clock)
            } else {
                self.pvs_child(board, mv, depth, alpha, beta, maximizing, i, 1, ctx, clock)
            };
            undo_move(board, undo);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = mv;
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = mv;
                }
                beta = beta.min(best_score);
            }

            if clock.time_up() {
                break;
            }
        }

        RootPass { best_move, score: best_score }
    }

    /// `ply` is the ply of the node `mv` leads into (the caller's own ply
    /// plus one), not the caller's ply itself.
    #[allow(clippy::too_many_arguments)]
    fn pvs_child(
        &mut self,
        board: &mut Board,
        mv: Move,
        depth: u8,
        alpha: i32,
        beta: i32,
        maximizing: bool,
        move_index: usize,
        ply: usize,
        ctx: &mut SearchContext,
        clock: &mut Clock,
    ) -> i32 {
        let quiet = mv.is_quiet();
        let reduction = if depth >= LMR_MIN_DEPTH && move_index >= LMR_MOVE_THRESHOLD && quiet { 1 } else { 0 };
        let child_depth = depth.saturating_sub(1).saturating_sub(reduction);

        if maximizing {
            let s = self.alpha_beta(board, child_depth, alpha, alpha + 1, ply, ctx, clock);
            if s > alpha && s < beta {
                self.alpha_beta(board, depth.saturating_sub(1), alpha, beta, ply, ctx, clock)
            } else {
                s
            }
        } else {
            let s = self.alpha_beta(board, child_depth, beta - 1, beta, ply, ctx, clock);
            if s < beta && s > alpha {
                self.alpha_beta(board, depth.saturating_sub(1), alpha, beta, ply, ctx, clock)
            } else {
                s
            }
        }
    }

    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        ply: usize,
        ctx: &mut SearchContext,
        clock: &mut Clock,
    ) -> i32 {
        clock.tick();
        if clock.stopped {
            return evaluate(board);
        }

        let key = board.hash;
        if let Some(cut) = self.tt.cutoff(key, depth, alpha, beta) {
            return cut;
        }

        if depth == 0 {
            return self.quiescence(board, alpha, beta, ply, clock);
        }

        let side = board.side_to_move;
        let maximizing = side == Color::Red;

        let mut moves: Vec<Move> = Vec::with_capacity(48);
        generate_legal(board, side, &mut moves);

        if moves.is_empty() {
            return if in_check(board, side) {
                if maximizing { -(MATE_SCORE - ply as i32) } else { MATE_SCORE - ply as i32 }
            } else {
                0
            };
        }

        let hash_move = self.tt.probe(key).and_then(|(mv, ..)| mv);
        let killers = ctx.killers_at(ply);
        {
            let history_fn = |mv: Move| ctx.history_score(mv);
            order_moves(&mut moves, board, killers, &history_fn, hash_move);
        }
        if moves.len() > NODE_MOVE_CAP {
            moves.truncate(NODE_MOVE_CAP);
        }

        let orig_alpha = alpha;
        let orig_beta = beta;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move: Option<Move> = None;

        for (i, &mv) in moves.iter().enumerate() {
            let undo = make_move(board, mv);
            let score = if i == 0 {
                self.alpha_beta(board, depth - 1, alpha, beta, ply + 1, ctx, clock)
            } else {
                self.pvs_child(board, mv, depth, alpha, beta, maximizing, i, ply + 1, ctx, clock)
            };
            undo_move(board, undo);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best_score);
            }

            if alpha >= beta {
                if mv.is_quiet() {
                    ctx.update_killer(ply, mv);
                    ctx.update_history(mv, depth as i32);
                }
                break;
            }

            if clock.stopped {
                break;
            }
        }

        let bound = TranspositionTable::classify(best_score, orig_alpha, orig_beta);
        self.tt.store(key, best_move, best_score, depth, bound);
        best_score
    }

    fn quiescence(&mut self, board: &mut Board, mut alpha: i32, mut beta: i32, ply: usize, clock: &mut Clock) -> i32 {
        clock.tick();

        let side = board.side_to_move;
        let maximizing = side == Color::Red;
        let stand_pat = evaluate(board);

        if clock.stopped {
            return stand_pat;
        }

        if maximizing {
            if stand_pat >= beta {
                return stand_pat;
            }
            alpha = alpha.max(stand_pat);
        } else {
            if stand_pat <= alpha {
                return stand_pat;
            }
            beta = beta.min(stand_pat);
        }

        let mut captures: Vec<Move> = Vec::with_capacity(16);
        generate_captures(board, side, &mut captures);
        captures.sort_by_key(|mv| std::cmp::Reverse(crate::search::ordering::mvv_lva_score(*mv)));

        let mut best_score = stand_pat;
        for mv in captures {
            let undo = make_move(board, mv);
            let score = self.quiescence(board, alpha, beta, ply + 1, clock);
            undo_move(board, undo);

            if maximizing {
                if score > best_score {
                    best_score = score;
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                }
                beta = beta.min(best_score);
            }
            if alpha >= beta || clock.stopped {
                break;
            }
        }
        best_score
    }
}

struct RootPass {
    best_move: Move,
    score: i32,
}
