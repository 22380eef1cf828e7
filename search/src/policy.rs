//! Run budgets and cooperative cancellation.
//!
//! None of the strategies imposes a ceiling by default — an unbounded run
//! is the baseline behavior. Callers needing responsiveness set a budget
//! here, or hand the run a [`CancelToken`] from another thread; either way
//! the run returns a distinct aborted outcome rather than pretending the
//! space was exhausted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Default depth-limit ceiling for iterative deepening. Generous on
/// purpose: it guarantees eventual termination while staying far above any
/// reachable 8-puzzle solution depth.
pub const DEFAULT_MAX_DEPTH: u32 = 500;

/// Budgets consulted during a run.
///
/// `max_depth` bounds only the iterative-deepening strategy (the classic
/// trade-off: repeated shallow work buys bounded memory, and the ceiling
/// bounds the repetition). The expansion and time budgets apply to every
/// strategy and are off by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Depth-limit ceiling for iterative deepening; limits run `0..max_depth`.
    pub max_depth: u32,
    /// Hard cap on node expansions, any strategy.
    pub max_expansions: Option<u64>,
    /// Wall-clock ceiling, checked once per expansion.
    pub time_budget: Option<Duration>,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_expansions: None,
            time_budget: None,
        }
    }
}

/// Cooperative cancellation flag, checked once per node expansion.
///
/// Clone the token, hand one copy to the worker running the search, and
/// call [`CancelToken::cancel`] from anywhere else. The default token never
/// fires.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the run to stop at its next expansion.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// True once [`cancel`](Self::cancel) has been called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
