//! Reachability between states by permutation parity.
//!
//! On a board of odd width a move either shifts a tile within its row, which keeps the linear
//! order of the tiles, or jumps it over `SIDE - 1` tiles, which flips an even number of pairs. The
//! parity of [`inversions`] is therefore invariant under moves, and two states are mutually
//! reachable exactly when their parities agree.

use crate::State;

/// Number of out-of-order pairs among the non-blank tiles, read row-major.
pub fn inversions(state: &State) -> u32 {
    let tiles = state.tiles();
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count() as u32
        })
        .sum()
}

/// Whether `goal` can be reached from `start`.
///
/// Against [`State::GOAL`], which has no inversions, this is "`start` has an even number of
/// inversions".
pub fn is_solvable(start: &State, goal: &State) -> bool {
    inversions(start) % 2 == inversions(goal) % 2
}
