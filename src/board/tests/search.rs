//! Search algorithm tests.

use std::sync::atomic::AtomicBool;
use std::time::Duration;

use crate::board::{
    find_best_move, find_best_move_with, Color, Position, SearchLimits, SearchParams, START_FEN,
};

const MATE_SCORE: i32 = 100_000;

/// Exhaustive minimax with no pruning, scored from `root`'s view.
fn full_width_minimax(
    position: &mut Position,
    depth: u32,
    ply: i32,
    root: Color,
    maximizing: bool,
) -> i32 {
    if depth == 0 {
        let score = position.evaluate();
        return if position.side_to_move() == root { score } else { -score };
    }

    let moves = position.legal_moves();
    if moves.is_empty() {
        if !position.in_check() {
            return 0;
        }
        let mated = MATE_SCORE - ply;
        return if position.side_to_move() == root { -mated } else { mated };
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        let info = position.make_move(mv);
        let value = full_width_minimax(position, depth - 1, ply + 1, root, !maximizing);
        position.unmake_move(mv, info);
        best = if maximizing { best.max(value) } else { best.min(value) };
    }
    best
}

#[test]
fn finds_mate_in_one() {
    // White to move, Qe8# is mate
    let mut board = Position::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    let stop = AtomicBool::new(false);

    let result = find_best_move(&mut board, &SearchLimits::depth(2), &stop);
    let mv = result.best_move.expect("Should find a move");
    assert_eq!(mv.to_string(), "e1e8", "Should find Qe8#");
    assert_eq!(result.score, 100_000 - 1);
    assert!(result.completed);
}

#[test]
fn mate_score_follows_params() {
    let mut board = Position::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    let stop = AtomicBool::new(false);
    let params = SearchParams {
        mate_score: 50_000,
        ..SearchParams::default()
    };

    let result = find_best_move_with(&mut board, &SearchLimits::depth(3), &params, &stop);
    assert_eq!(result.score, 50_000 - 1);
}

#[test]
fn captures_hanging_queen() {
    let mut board = Position::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
    let stop = AtomicBool::new(false);

    let result = find_best_move(&mut board, &SearchLimits::depth(2), &stop);
    assert_eq!(result.best_move.map(|mv| mv.to_string()), Some("d1d5".to_string()));
    assert!(result.score > 0);
}

#[test]
fn stalemated_root_has_no_move() {
    let mut board = Position::from_fen("k7/8/1QK5/8/8/8/8/8 b - - 0 1");
    let stop = AtomicBool::new(false);

    let result = find_best_move(&mut board, &SearchLimits::depth(4), &stop);
    assert!(result.best_move.is_none(), "Should return None for stalemate");
    assert_eq!(result.score, 0);
    assert!(result.completed);
}

#[test]
fn checkmated_root_scores_as_lost() {
    let mut board = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    let stop = AtomicBool::new(false);

    let result = find_best_move(&mut board, &SearchLimits::depth(3), &stop);
    assert!(result.best_move.is_none());
    assert_eq!(result.score, -100_000);
}

#[test]
fn depth_zero_searches_one_ply() {
    let mut board = Position::new();
    let stop = AtomicBool::new(false);

    let result = find_best_move(&mut board, &SearchLimits::depth(0), &stop);
    assert!(result.best_move.is_some());
    assert!(result.completed);
    assert_eq!(result.nodes, 21);
}

#[test]
fn search_restores_position() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let mut board = Position::from_fen(fen);
    let stop = AtomicBool::new(false);

    find_best_move(&mut board, &SearchLimits::depth(2), &stop);
    assert_eq!(board.to_fen(), fen);
}

#[test]
fn raised_stop_flag_returns_first_legal_move() {
    let mut board = Position::from_fen(START_FEN);
    let stop = AtomicBool::new(true);

    let result = find_best_move(&mut board, &SearchLimits::depth(4), &stop);
    assert!(!result.completed);
    assert_eq!(result.best_move, board.legal_moves().first());
    assert_eq!(board.to_fen(), START_FEN);
}

#[test]
fn node_limit_cuts_search_short() {
    let mut board = Position::new();
    let stop = AtomicBool::new(false);
    let limits = SearchLimits::depth(5).with_max_nodes(500);

    let result = find_best_move(&mut board, &limits, &stop);
    assert!(!result.completed);
    assert!(result.nodes <= 500, "visited {} nodes", result.nodes);
    assert!(result.best_move.is_some());
    assert_eq!(board, Position::new());
}

#[test]
fn time_limit_cuts_search_short() {
    let mut board = Position::new();
    let stop = AtomicBool::new(false);
    let limits = SearchLimits::depth(6).with_max_time(Duration::ZERO);

    let result = find_best_move(&mut board, &limits, &stop);
    assert!(!result.completed);
    assert!(result.best_move.is_some());
}

#[test]
fn pruned_score_matches_full_width_minimax() {
    let fens = [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2",
    ];
    let stop = AtomicBool::new(false);

    for fen in fens {
        for depth in 1..=3 {
            let mut board = Position::from_fen(fen);
            let root = board.side_to_move();
            let expected = board
                .legal_moves()
                .into_iter()
                .map(|mv| {
                    let info = board.make_move(mv);
                    let value = full_width_minimax(&mut board, depth - 1, 1, root, false);
                    board.unmake_move(mv, info);
                    value
                })
                .max()
                .unwrap();

            let result = find_best_move(&mut board, &SearchLimits::depth(depth), &stop);
            assert!(result.completed);
            assert_eq!(result.score, expected, "{fen} at depth {depth}");

            // The chosen move must reach the reported score.
            let mv = result.best_move.unwrap();
            let info = board.make_move(mv);
            let value = full_width_minimax(&mut board, depth - 1, 1, root, false);
            board.unmake_move(mv, info);
            assert_eq!(value, expected, "{fen}: {mv} at depth {depth}");
        }
    }
}
