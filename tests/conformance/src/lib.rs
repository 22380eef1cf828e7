//! Shared helpers for the conformance suite.
//!
//! The suite cross-checks the strategies against each other rather than
//! against hard-coded node counts, so instances are built by walking a
//! known move sequence away from the goal — the sequence length is an
//! upper bound on the optimal depth.

use npuzzle_board::{Board, Move};

/// Parse a board literal. Panics on malformed input, which is fine here —
/// the literals are part of the suite.
#[must_use]
pub fn board(s: &str) -> Board {
    s.parse().unwrap_or_else(|error| panic!("bad board literal {s}: {error}"))
}

/// The canonical goal used across the suite.
#[must_use]
pub fn goal() -> Board {
    board("012345678")
}

/// Apply a move sequence, panicking on an illegal move.
#[must_use]
pub fn apply_all(start: Board, moves: &[Move]) -> Board {
    moves.iter().fold(start, |current, &mv| {
        current
            .apply(mv)
            .unwrap_or_else(|| panic!("illegal move {mv} from {current}"))
    })
}

/// Instances at a spread of depths, each paired with the length of the
/// scramble walk that produced it (an upper bound on the optimal depth).
#[must_use]
pub fn scrambles() -> Vec<(Board, usize)> {
    use Move::{Down, Left, Right, Up};

    let walks: [&[Move]; 5] = [
        &[Right],
        &[Down, Right],
        &[Down, Down, Right],
        &[Right, Down, Left, Down],
        &[Down, Down, Right, Up, Up, Right, Down, Down, Left, Up],
    ];

    walks
        .iter()
        .map(|walk| (apply_all(goal(), walk), walk.len()))
        .collect()
}
