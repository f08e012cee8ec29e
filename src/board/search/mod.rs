//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Features:
//! - Fail-hard alpha-beta with an explicit maximizing flag
//! - Leaves scored by the static evaluator from the root mover's view
//! - Checkmate scored by distance from the root, stalemate as zero
//! - Cooperative cutoff via a stop flag, node cap and time cap

mod params;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use super::{Color, Move, Position};
pub use params::{SearchLimits, SearchParams};

/// Outcome of [`find_best_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best fully searched root move; `None` only when the root has no
    /// legal moves.
    pub best_move: Option<Move>,
    /// Score of `best_move` from the root mover's view.
    pub score: i32,
    /// Positions visited, root included.
    pub nodes: u64,
    /// False when the search was cut off before every root move was searched.
    pub completed: bool,
}

const INFINITY: i32 = i32::MAX / 2;

// Time is checked once per this many nodes.
const TIME_CHECK_INTERVAL: u64 = 1024;

struct SearchContext<'a> {
    params: &'a SearchParams,
    limits: &'a SearchLimits,
    stop: &'a AtomicBool,
    start_time: Instant,
    root_color: Color,
    nodes: u64,
    aborted: bool,
}

impl SearchContext<'_> {
    fn should_stop(&mut self) -> bool {
        if self.aborted {
            return true;
        }
        let out_of_time = self.nodes % TIME_CHECK_INTERVAL == 0
            && self
                .limits
                .max_time
                .is_some_and(|limit| self.start_time.elapsed() >= limit);
        if self.stop.load(Ordering::Relaxed)
            || self.limits.max_nodes.is_some_and(|cap| self.nodes >= cap)
            || out_of_time
        {
            log::debug!("search cut off after {} nodes", self.nodes);
            self.aborted = true;
        }
        self.aborted
    }

    fn leaf_score(&self, position: &Position) -> i32 {
        let score = position.evaluate_with(self.params);
        if position.side_to_move() == self.root_color {
            score
        } else {
            -score
        }
    }

    /// Score of a position with no legal moves, from the root mover's view.
    fn terminal_score(&self, position: &Position, ply: i32) -> i32 {
        if !position.in_check() {
            return 0;
        }
        let mated = self.params.mate_score - ply;
        if position.side_to_move() == self.root_color {
            -mated
        } else {
            mated
        }
    }

    fn minimax(
        &mut self,
        position: &mut Position,
        depth: u32,
        ply: i32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;
        if self.should_stop() || depth == 0 {
            return self.leaf_score(position);
        }

        let moves = position.legal_moves();
        if moves.is_empty() {
            return self.terminal_score(position, ply);
        }

        if maximizing {
            for mv in moves {
                let info = position.make_move(mv);
                let value = self.minimax(position, depth - 1, ply + 1, alpha, beta, false);
                position.unmake_move(mv, info);
                if self.aborted {
                    break;
                }
                if value >= beta {
                    return beta;
                }
                alpha = alpha.max(value);
            }
            alpha
        } else {
            for mv in moves {
                let info = position.make_move(mv);
                let value = self.minimax(position, depth - 1, ply + 1, alpha, beta, true);
                position.unmake_move(mv, info);
                if self.aborted {
                    break;
                }
                if value <= alpha {
                    return alpha;
                }
                beta = beta.min(value);
            }
            beta
        }
    }
}

/// Search `position` to the depth in `limits` and return the best root move.
///
/// `position` is restored before returning. Setting `stop` from another
/// thread, or exhausting a node or time cap, unwinds the search; the result
/// then reflects only root moves searched to completion.
pub fn find_best_move(
    position: &mut Position,
    limits: &SearchLimits,
    stop: &AtomicBool,
) -> SearchResult {
    find_best_move_with(position, limits, &SearchParams::default(), stop)
}

/// [`find_best_move`] with explicit evaluation tunables.
pub fn find_best_move_with(
    position: &mut Position,
    limits: &SearchLimits,
    params: &SearchParams,
    stop: &AtomicBool,
) -> SearchResult {
    let mut ctx = SearchContext {
        params,
        limits,
        stop,
        start_time: Instant::now(),
        root_color: position.side_to_move(),
        nodes: 1,
        aborted: false,
    };
    let depth = limits.depth.max(1);

    let moves = position.legal_moves();
    if moves.is_empty() {
        return SearchResult {
            best_move: None,
            score: ctx.terminal_score(position, 0),
            nodes: ctx.nodes,
            completed: true,
        };
    }

    let mut best_move = None;
    let mut best_score = -INFINITY;
    for mv in &moves {
        let info = position.make_move(*mv);
        let value = ctx.minimax(position, depth - 1, 1, best_score, INFINITY, false);
        position.unmake_move(*mv, info);
        if ctx.aborted {
            break;
        }
        log::debug!("root move {mv}: {value}");
        if value > best_score {
            best_score = value;
            best_move = Some(*mv);
        }
    }

    // Cut off before any root move finished: fall back to a legal move.
    if best_move.is_none() {
        best_move = moves.first();
        best_score = position.evaluate_with(params);
    }

    SearchResult {
        best_move,
        score: best_score,
        nodes: ctx.nodes,
        completed: !ctx.aborted,
    }
}
