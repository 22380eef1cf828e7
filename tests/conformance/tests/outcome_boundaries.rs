//! Boundary outcomes: trivial instances, exhaustion, and budget aborts.

use conformance_tests::{board, goal};
use npuzzle_search::{
    run, AbortReason, CancelToken, HeuristicKind, SearchOutcome, SearchPolicy, Strategy,
};

const ALL_STRATEGIES: [Strategy; 5] = [
    Strategy::Bfs,
    Strategy::Dfs,
    Strategy::IterativeDeepening,
    Strategy::AStar(HeuristicKind::Manhattan),
    Strategy::AStar(HeuristicKind::Euclidean),
];

#[test]
fn start_equals_goal_is_an_empty_solution() {
    for strategy in ALL_STRATEGIES {
        let outcome = run(
            goal(),
            goal(),
            strategy,
            &SearchPolicy::default(),
            &CancelToken::new(),
        );
        let SearchOutcome::Solved { path, report } = outcome else {
            panic!("{strategy:?} must solve the trivial instance");
        };
        assert!(path.is_empty(), "{strategy:?}");
        assert_eq!(report.explored_nodes, 1, "{strategy:?}");
    }
}

#[test]
fn unsolvable_instance_exhausts_to_not_found() {
    // Two swapped tiles flip permutation parity: no move sequence reaches
    // the goal, so breadth-first drains the entire reachable half of the
    // state space and reports exhaustion — not an error, and not a success.
    let start = board("012345687");
    let outcome = run(
        start,
        goal(),
        Strategy::Bfs,
        &SearchPolicy::default(),
        &CancelToken::new(),
    );
    let SearchOutcome::NotFound { report } = outcome else {
        panic!("expected exhaustion, got {outcome:?}");
    };
    // 9!/2 reachable states from any start.
    assert_eq!(report.explored_nodes, 181_440);
}

#[test]
fn insufficient_depth_ceiling_is_not_found_even_when_solvable() {
    let start = board("312645708"); // optimal depth 3
    let policy = SearchPolicy {
        max_depth: 3,
        ..SearchPolicy::default()
    };
    let outcome = run(
        start,
        goal(),
        Strategy::IterativeDeepening,
        &policy,
        &CancelToken::new(),
    );
    assert!(
        matches!(outcome, SearchOutcome::NotFound { .. }),
        "got {outcome:?}"
    );
}

#[test]
fn budget_aborts_are_distinct_from_exhaustion() {
    let start = board("012345687"); // unsolvable: only a budget can stop early
    let policy = SearchPolicy {
        max_expansions: Some(1_000),
        ..SearchPolicy::default()
    };
    let outcome = run(
        start,
        goal(),
        Strategy::Bfs,
        &policy,
        &CancelToken::new(),
    );
    let SearchOutcome::Aborted { reason, report } = outcome else {
        panic!("expected an abort, got {outcome:?}");
    };
    assert_eq!(reason, AbortReason::ExpansionBudgetExhausted);
    assert_eq!(report.explored_nodes, 1_000);
}

#[test]
fn cancellation_stops_every_strategy() {
    let cancel = CancelToken::new();
    cancel.cancel();
    for strategy in ALL_STRATEGIES {
        let outcome = run(
            board("125670834"),
            goal(),
            strategy,
            &SearchPolicy::default(),
            &cancel,
        );
        assert!(
            matches!(
                outcome,
                SearchOutcome::Aborted {
                    reason: AbortReason::Cancelled,
                    ..
                }
            ),
            "{strategy:?} ignored the cancel token"
        );
    }
}
