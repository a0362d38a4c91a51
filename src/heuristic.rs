//! Admissible estimates of the remaining number of moves.

use crate::{Pos, State};

/// Number of non-blank tiles not on their goal cell.
///
/// A move relocates exactly one tile, so this never overestimates and changes by at most one per
/// move.
pub fn misplaced_tiles(state: &State, goal: &State) -> u32 {
    Pos::all()
        .filter(|&pos| state[pos] != 0 && state[pos] != goal[pos])
        .count() as u32
}
