//! Strategy selection, the four search loops, and path reconstruction.
//!
//! The strategies share a skeleton — check budgets, pop, count the
//! expansion, test the goal, push successors — and differ only in frontier
//! discipline and bookkeeping. Breadth-first and depth-first are literally
//! one loop handed different frontiers; iterative deepening wraps the
//! bounded variant in a rising depth limit; A* replaces the visited set
//! with cost relaxation over a priority frontier.
//!
//! Every run creates its frontier and maps fresh and drops them on return.

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::time::{Duration, Instant};

use rustc_hash::{FxHashMap, FxHashSet};

use npuzzle_board::{Board, MOVE_COST};

use crate::frontier::{BestFirstFrontier, FifoFrontier, Frontier, LifoFrontier, SearchNode};
use crate::heuristic::{Heuristic, HeuristicKind};
use crate::policy::{CancelToken, SearchPolicy};
use crate::report::{SearchReport, Telemetry};

/// Which search strategy a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uninformed FIFO. Optimal for unit-cost moves.
    Bfs,
    /// Uninformed LIFO. Terminates on the visited-pruned finite space, but
    /// path quality is whatever it stumbles on first.
    Dfs,
    /// Depth-bounded LIFO under a rising limit. Optimal, bounded memory.
    IterativeDeepening,
    /// Best-first by `f = g + h` with the selected heuristic. Optimal.
    AStar(HeuristicKind),
}

/// Why a run stopped before finishing its work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// The caller's [`CancelToken`] fired.
    Cancelled,
    /// The policy's wall-clock budget ran out.
    TimeBudgetExhausted,
    /// The policy's expansion cap was reached.
    ExpansionBudgetExhausted,
}

impl std::fmt::Display for AbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Cancelled => "cancelled",
            Self::TimeBudgetExhausted => "time budget exhausted",
            Self::ExpansionBudgetExhausted => "expansion budget exhausted",
        };
        f.write_str(name)
    }
}

/// Result of a run.
///
/// Exhaustion is a normal, reportable outcome, not a fault — callers
/// inspect the variant instead of catching errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Goal reached. `path` holds every state after `start` through `goal`
    /// inclusive; it is empty when `start == goal`.
    Solved {
        path: Vec<Board>,
        report: SearchReport,
    },
    /// The reachable space (or, for iterative deepening, the whole depth
    /// range) was exhausted without meeting the goal. Implies
    /// exhaustiveness, unlike [`SearchOutcome::Aborted`].
    NotFound { report: SearchReport },
    /// An external budget stopped the run mid-search.
    Aborted {
        reason: AbortReason,
        report: SearchReport,
    },
}

impl SearchOutcome {
    /// The report, whichever way the run ended.
    #[must_use]
    pub fn report(&self) -> &SearchReport {
        match self {
            Self::Solved { report, .. }
            | Self::NotFound { report }
            | Self::Aborted { report, .. } => report,
        }
    }

    /// True if the run reached the goal.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

/// Run the selected strategy from `start` to `goal`.
///
/// Both boards are valid permutations by construction, so no validation
/// happens here. The call blocks until the run completes, exhausts, or a
/// budget fires; for responsiveness run it on a worker and use the
/// [`CancelToken`] from another thread.
#[must_use]
pub fn run(
    start: Board,
    goal: Board,
    strategy: Strategy,
    policy: &SearchPolicy,
    cancel: &CancelToken,
) -> SearchOutcome {
    match strategy {
        Strategy::Bfs => run_uninformed(start, goal, FifoFrontier::new(), policy, cancel),
        Strategy::Dfs => run_uninformed(start, goal, LifoFrontier::new(), policy, cancel),
        Strategy::IterativeDeepening => run_deepening(start, goal, policy, cancel),
        Strategy::AStar(kind) => run_best_first(start, goal, kind, policy, cancel),
    }
}

/// Budget clock shared by the loops: consulted once per expansion, before
/// the pop, so an aborted run never half-expands a node.
struct BudgetClock<'a> {
    started: Instant,
    policy: &'a SearchPolicy,
    cancel: &'a CancelToken,
}

impl<'a> BudgetClock<'a> {
    fn new(policy: &'a SearchPolicy, cancel: &'a CancelToken) -> Self {
        Self {
            started: Instant::now(),
            policy,
            cancel,
        }
    }

    /// The budget that fired, if any.
    fn check(&self, explored_nodes: u64) -> Option<AbortReason> {
        if self.cancel.is_cancelled() {
            return Some(AbortReason::Cancelled);
        }
        if let Some(budget) = self.policy.time_budget {
            if self.started.elapsed() >= budget {
                return Some(AbortReason::TimeBudgetExhausted);
            }
        }
        if let Some(cap) = self.policy.max_expansions {
            if explored_nodes >= cap {
                return Some(AbortReason::ExpansionBudgetExhausted);
            }
        }
        None
    }

    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Shared loop for the uninformed strategies. The frontier discipline is
/// the entire difference between breadth-first and depth-first.
///
/// Dedup happens at enqueue: a state enters the visited set and the
/// came-from map at most once, so reconstruction can never cycle.
fn run_uninformed<F: Frontier>(
    start: Board,
    goal: Board,
    mut frontier: F,
    policy: &SearchPolicy,
    cancel: &CancelToken,
) -> SearchOutcome {
    let clock = BudgetClock::new(policy, cancel);
    let mut telemetry = Telemetry::new();
    let mut came_from: FxHashMap<Board, Board> = FxHashMap::default();
    let mut visited: FxHashSet<Board> = FxHashSet::default();

    visited.insert(start);
    frontier.push(SearchNode {
        board: start,
        depth: 0,
    });

    loop {
        if let Some(reason) = clock.check(telemetry.explored_nodes()) {
            let report = telemetry.finish(clock.elapsed(), frontier.high_water(), None);
            return SearchOutcome::Aborted { reason, report };
        }
        let Some(node) = frontier.pop() else {
            let report = telemetry.finish(clock.elapsed(), frontier.high_water(), None);
            return SearchOutcome::NotFound { report };
        };
        telemetry.observe_expansion(node.depth);

        if node.board == goal {
            let path = reconstruct_path(&came_from, goal);
            let report = telemetry.finish(clock.elapsed(), frontier.high_water(), None);
            return SearchOutcome::Solved { path, report };
        }

        for neighbor in node.board.neighbors() {
            if visited.insert(neighbor.board) {
                came_from.insert(neighbor.board, node.board);
                frontier.push(SearchNode {
                    board: neighbor.board,
                    depth: node.depth + 1,
                });
            }
        }
    }
}

/// Iterative deepening: a fresh depth-bounded LIFO pass per limit.
///
/// The visited map is depth-aware — a state re-entered through a strictly
/// shallower path within the same pass must be re-explored, or the pass
/// could miss solutions sitting at its own limit. The first limit that
/// meets the goal equals the minimum move count.
fn run_deepening(
    start: Board,
    goal: Board,
    policy: &SearchPolicy,
    cancel: &CancelToken,
) -> SearchOutcome {
    let clock = BudgetClock::new(policy, cancel);
    let mut telemetry = Telemetry::new();
    let mut high_water = 0u64;

    for limit in 0..policy.max_depth {
        let mut frontier = LifoFrontier::new();
        let mut came_from: FxHashMap<Board, Board> = FxHashMap::default();
        let mut shallowest: FxHashMap<Board, u32> = FxHashMap::default();

        shallowest.insert(start, 0);
        frontier.push(SearchNode {
            board: start,
            depth: 0,
        });

        loop {
            if let Some(reason) = clock.check(telemetry.explored_nodes()) {
                let report = telemetry.finish(
                    clock.elapsed(),
                    high_water.max(frontier.high_water()),
                    None,
                );
                return SearchOutcome::Aborted { reason, report };
            }
            let Some(node) = frontier.pop() else {
                break;
            };
            telemetry.observe_expansion(node.depth);

            if node.board == goal {
                let path = reconstruct_path(&came_from, goal);
                let report = telemetry.finish(
                    clock.elapsed(),
                    high_water.max(frontier.high_water()),
                    None,
                );
                return SearchOutcome::Solved { path, report };
            }

            if node.depth < limit {
                let depth = node.depth + 1;
                for neighbor in node.board.neighbors() {
                    let blocked = shallowest
                        .get(&neighbor.board)
                        .is_some_and(|&previous| previous <= depth);
                    if !blocked {
                        shallowest.insert(neighbor.board, depth);
                        came_from.insert(neighbor.board, node.board);
                        frontier.push(SearchNode {
                            board: neighbor.board,
                            depth,
                        });
                    }
                }
            }
        }

        high_water = high_water.max(frontier.high_water());
    }

    let report = telemetry.finish(clock.elapsed(), high_water, None);
    SearchOutcome::NotFound { report }
}

/// A*: best-first by `f = g + h`, unit edge cost for `g`.
///
/// The cost map drives relaxation: a neighbor is pushed when unseen or
/// reached more cheaply than before. Stale frontier entries are not
/// skipped on pop — with a consistent heuristic re-expansion is harmless,
/// and the cost map keeps the loop finite.
fn run_best_first(
    start: Board,
    goal: Board,
    kind: HeuristicKind,
    policy: &SearchPolicy,
    cancel: &CancelToken,
) -> SearchOutcome {
    let clock = BudgetClock::new(policy, cancel);
    let mut telemetry = Telemetry::new();
    let heuristic = Heuristic::new(kind, &goal);

    let mut frontier = BestFirstFrontier::new();
    let mut came_from: FxHashMap<Board, Board> = FxHashMap::default();
    let mut cost_so_far: FxHashMap<Board, u32> = FxHashMap::default();

    cost_so_far.insert(start, 0);
    frontier.push(0.0, SearchNode {
        board: start,
        depth: 0,
    });

    loop {
        if let Some(reason) = clock.check(telemetry.explored_nodes()) {
            let report = telemetry.finish(clock.elapsed(), frontier.high_water(), None);
            return SearchOutcome::Aborted { reason, report };
        }
        let Some(node) = frontier.pop() else {
            let report = telemetry.finish(clock.elapsed(), frontier.high_water(), None);
            return SearchOutcome::NotFound { report };
        };
        telemetry.observe_expansion(node.depth);

        // Every pushed node has a cost entry, written before its push.
        let current_cost = cost_so_far[&node.board];

        if node.board == goal {
            let path = reconstruct_path(&came_from, goal);
            let report = telemetry.finish(
                clock.elapsed(),
                frontier.high_water(),
                Some(current_cost),
            );
            return SearchOutcome::Solved { path, report };
        }

        for neighbor in node.board.neighbors() {
            let new_cost = current_cost + MOVE_COST;
            let improves = match cost_so_far.get(&neighbor.board) {
                Some(&known) => new_cost < known,
                None => true,
            };
            if improves {
                cost_so_far.insert(neighbor.board, new_cost);
                came_from.insert(neighbor.board, node.board);
                let f_cost = f64::from(new_cost) + heuristic.estimate(&neighbor.board);
                frontier.push(f_cost, SearchNode {
                    board: neighbor.board,
                    depth: node.depth + 1,
                });
            }
        }
    }
}

/// Walk the predecessor map backward from `goal` and reverse.
///
/// The returned path runs from the first state after `start` through
/// `goal` inclusive; it is empty when `goal` never entered the map
/// (`start == goal`). The map is acyclic because every strategy inserts a
/// state with a strictly cheaper reach than its predecessor's.
#[must_use]
pub fn reconstruct_path<S: BuildHasher>(
    came_from: &HashMap<Board, Board, S>,
    goal: Board,
) -> Vec<Board> {
    let mut path = Vec::new();
    let mut current = goal;
    while let Some(&previous) = came_from.get(&current) {
        path.push(current);
        current = previous;
    }
    path.reverse();
    path
}
