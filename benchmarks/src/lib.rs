//! Fixtures shared by the strategy benchmarks.
//!
//! Instances are produced by walking a fixed move sequence away from the
//! goal, so every benchmark input is solvable, deterministic, and labeled
//! by its scramble length.

use npuzzle_board::{Board, Move};

/// The goal every benchmark solves toward.
#[must_use]
pub fn goal() -> Board {
    "012345678".parse().expect("goal literal is valid")
}

/// Apply a move sequence, panicking on an illegal move. Benchmark walks
/// are fixed, so a panic here means the fixture itself is wrong.
#[must_use]
pub fn apply_all(start: Board, moves: &[Move]) -> Board {
    moves.iter().fold(start, |current, &mv| {
        current
            .apply(mv)
            .unwrap_or_else(|| panic!("illegal fixture move {mv} from {current}"))
    })
}

/// Labeled instances at increasing scramble lengths.
#[must_use]
pub fn instances() -> Vec<(&'static str, Board)> {
    use Move::{Down, Left, Right, Up};

    let shallow: &[Move] = &[Down, Down, Right];
    let medium: &[Move] = &[Down, Down, Right, Up, Up, Right, Down, Down, Left, Up];
    let deep: &[Move] = &[
        Down, Right, Down, Right, Up, Left, Up, Left, Down, Down, Right, Right, Up, Left, Down,
        Left, Up, Up, Right, Down,
    ];

    vec![
        ("scramble-3", apply_all(goal(), shallow)),
        ("scramble-10", apply_all(goal(), medium)),
        ("scramble-20", apply_all(goal(), deep)),
    ]
}
