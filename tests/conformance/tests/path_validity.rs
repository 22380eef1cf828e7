//! The move-validity invariant every returned path must satisfy.
//!
//! A path excludes the start, ends at the goal, and each hop is exactly
//! one legal blank move; replaying the recovered move sequence from the
//! start must land on the goal.

use conformance_tests::{goal, scrambles};
use npuzzle_board::{Board, Move};
use npuzzle_search::{run, CancelToken, HeuristicKind, SearchOutcome, SearchPolicy, Strategy};

const ALL_STRATEGIES: [Strategy; 5] = [
    Strategy::Bfs,
    Strategy::Dfs,
    Strategy::IterativeDeepening,
    Strategy::AStar(HeuristicKind::Manhattan),
    Strategy::AStar(HeuristicKind::Euclidean),
];

fn solved_path(start: Board, strategy: Strategy) -> Vec<Board> {
    let outcome = run(
        start,
        goal(),
        strategy,
        &SearchPolicy::default(),
        &CancelToken::new(),
    );
    match outcome {
        SearchOutcome::Solved { path, .. } => path,
        other => panic!("{strategy:?} failed on {start}: {other:?}"),
    }
}

#[test]
fn every_hop_is_one_legal_move() {
    for (start, _) in scrambles() {
        for strategy in ALL_STRATEGIES {
            let path = solved_path(start, strategy);
            assert_eq!(path.last(), Some(&goal()), "{strategy:?} on {start}");

            let mut previous = start;
            for state in &path {
                assert!(
                    Move::between(&previous, state).is_some(),
                    "{strategy:?} on {start}: {previous} -> {state} is not one move"
                );
                previous = *state;
            }
        }
    }
}

#[test]
fn paths_exclude_the_start_state() {
    for (start, _) in scrambles() {
        for strategy in ALL_STRATEGIES {
            let path = solved_path(start, strategy);
            assert_ne!(path.first(), Some(&start), "{strategy:?} on {start}");
        }
    }
}

#[test]
fn replaying_the_recovered_moves_reproduces_the_goal() {
    for (start, _) in scrambles() {
        for strategy in ALL_STRATEGIES {
            let path = solved_path(start, strategy);

            let mut current = start;
            for state in &path {
                let mv = Move::between(&current, state)
                    .unwrap_or_else(|| panic!("{strategy:?}: no move {current} -> {state}"));
                current = current
                    .apply(mv)
                    .unwrap_or_else(|| panic!("{strategy:?}: illegal replay move {mv}"));
            }
            assert_eq!(current, goal(), "{strategy:?} on {start}");
        }
    }
}
