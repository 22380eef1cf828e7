//! Heuristic evaluators: admissible distance estimates to a goal.
//!
//! Both estimators sum a per-tile distance from each non-blank tile's
//! current position to its goal position. Manhattan is the tighter bound;
//! Euclidean never exceeds it, so both are admissible for unit-cost moves.
//! An inadmissible choice is simply not offered.

use npuzzle_board::{Board, BLANK, TILE_COUNT};

/// Which estimator an A* run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicKind {
    /// `|Δrow| + |Δcol|` per tile. Admissible and consistent.
    Manhattan,
    /// `sqrt(Δrow² + Δcol²)` per tile. Admissible but looser, so it
    /// typically expands more nodes than Manhattan.
    Euclidean,
}

/// An estimator bound to a goal board.
///
/// Goal positions are tabulated once at construction, so per-node
/// evaluation is a table walk with no allocation.
#[derive(Debug, Clone)]
pub struct Heuristic {
    kind: HeuristicKind,
    /// `goal_position[label]` = (row, col) of `label` in the goal board.
    goal_position: [(usize, usize); TILE_COUNT],
}

impl Heuristic {
    /// Bind an estimator to a goal board.
    #[must_use]
    pub fn new(kind: HeuristicKind, goal: &Board) -> Self {
        let mut goal_position = [(0, 0); TILE_COUNT];
        for (index, &tile) in goal.tiles().iter().enumerate() {
            goal_position[usize::from(tile)] = Board::position(index);
        }
        Self {
            kind,
            goal_position,
        }
    }

    /// Estimated remaining cost from `board` to the bound goal.
    ///
    /// Zero at the goal, never negative, and the blank is excluded from the
    /// sum.
    #[must_use]
    pub fn estimate(&self, board: &Board) -> f64 {
        match self.kind {
            HeuristicKind::Manhattan => f64::from(self.manhattan(board)),
            HeuristicKind::Euclidean => self.euclidean(board),
        }
    }

    /// Total Manhattan distance over non-blank tiles.
    #[must_use]
    pub fn manhattan(&self, board: &Board) -> u32 {
        let mut distance = 0u32;
        for (index, &tile) in board.tiles().iter().enumerate() {
            if tile == BLANK {
                continue;
            }
            let (row, col) = Board::position(index);
            let (goal_row, goal_col) = self.goal_position[usize::from(tile)];
            distance += to_u32(row.abs_diff(goal_row) + col.abs_diff(goal_col));
        }
        distance
    }

    /// Total Euclidean distance over non-blank tiles.
    #[must_use]
    pub fn euclidean(&self, board: &Board) -> f64 {
        let mut distance = 0.0f64;
        for (index, &tile) in board.tiles().iter().enumerate() {
            if tile == BLANK {
                continue;
            }
            let (row, col) = Board::position(index);
            let (goal_row, goal_col) = self.goal_position[usize::from(tile)];
            let d_row = to_f64(row.abs_diff(goal_row));
            let d_col = to_f64(col.abs_diff(goal_col));
            distance += d_row.hypot(d_col);
        }
        distance
    }
}

/// Per-tile distances are bounded by the grid side, far below any cast edge.
fn to_u32(distance: usize) -> u32 {
    u32::try_from(distance).unwrap_or(u32::MAX)
}

fn to_f64(distance: usize) -> f64 {
    to_u32(distance).into()
}
