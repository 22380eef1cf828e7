//! Search-quality telemetry accumulated during a run.

use std::time::Duration;

/// Fixed-shape report produced by every run.
///
/// Built once when the run returns and read-only afterward, whichever way
/// the run ended.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    /// Nodes dequeued from the frontier. Iterative deepening accumulates
    /// across its passes — the re-explored shallow nodes are real work and
    /// the report shows them.
    pub explored_nodes: u64,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
    /// Deepest node dequeued.
    pub max_depth: u32,
    /// Peak frontier size.
    pub frontier_high_water: u64,
    /// Total solution cost; `Some` only for the cost-aware strategy (A*).
    pub solution_cost: Option<u32>,
}

/// Accumulator the strategy loops update at each expansion.
///
/// [`Telemetry::finish`] consumes it, freezing the values into a report.
#[derive(Debug, Default)]
pub(crate) struct Telemetry {
    explored_nodes: u64,
    max_depth: u32,
}

impl Telemetry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record one dequeued node.
    pub(crate) fn observe_expansion(&mut self, depth: u32) {
        self.explored_nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    pub(crate) fn explored_nodes(&self) -> u64 {
        self.explored_nodes
    }

    pub(crate) fn finish(
        self,
        elapsed: Duration,
        frontier_high_water: u64,
        solution_cost: Option<u32>,
    ) -> SearchReport {
        SearchReport {
            explored_nodes: self.explored_nodes,
            elapsed,
            max_depth: self.max_depth,
            frontier_high_water,
            solution_cost,
        }
    }
}
