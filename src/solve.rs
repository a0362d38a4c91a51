use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::str::FromStr;

use anyhow::bail;

use crate::heuristic::misplaced_tiles;
use crate::State;

/// Every state discovered by one search, in discovery order.
pub type Explored = indexmap::IndexMap<State, Node, fxhash::FxBuildHasher>;

/// Parent index of the start state.
const ROOT: usize = !0usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    /// Index of the predecessor in [`Explored`], `!0` for the start.
    pub parent: usize,
    /// Best known number of moves from the start.
    pub cost: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Bfs,
    AStar,
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "bfs" => Self::Bfs,
            "astar" | "a*" => Self::AStar,
            _ => bail!("Unknown strategy {s:?}, expecting `bfs` or `astar`"),
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Bfs => "Breadth-First Search".fmt(f),
            Strategy::AStar => "A* (misplaced tiles)".fmt(f),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// States from start to goal inclusive, or `None` if the goal is unreachable.
    pub path: Option<Vec<State>>,
    pub expanded: usize,
    pub explored: Explored,
}

impl SearchOutcome {
    fn found(explored: Explored, goal: &State, expanded: usize) -> Self {
        let path = reconstruct(&explored, goal).expect("Goal must be discovered before expanded");
        log::debug!(
            "Found a {}-move path after {expanded} expansions ({} states discovered)",
            path.len() - 1,
            explored.len(),
        );
        Self {
            path: Some(path),
            expanded,
            explored,
        }
    }

    fn exhausted(explored: Explored, expanded: usize) -> Self {
        log::debug!("Exhausted {} states without reaching the goal", explored.len());
        Self {
            path: None,
            expanded,
            explored,
        }
    }

    /// Number of moves on the path.
    pub fn moves(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len() - 1)
    }
}

pub fn search(
    strategy: Strategy,
    start: &State,
    goal: &State,
    on_step: impl FnMut(),
) -> SearchOutcome {
    match strategy {
        Strategy::Bfs => bfs(start, goal, on_step),
        Strategy::AStar => astar(start, goal, on_step),
    }
}

/// Uninformed breadth-first search. The explored map doubles as the FIFO frontier.
pub fn bfs(start: &State, goal: &State, mut on_step: impl FnMut()) -> SearchOutcome {
    let mut explored = Explored::default();
    explored.insert(*start, Node { parent: ROOT, cost: 0 }); // Sentinel.

    let mut cursor = 0;
    while let Some((&state, &node)) = explored.get_index(cursor) {
        #[cfg(feature = "coz")]
        coz::progress!("Expand");

        on_step();
        if state == *goal {
            return SearchOutcome::found(explored, goal, cursor + 1);
        }

        // First discovery is at minimal depth.
        for next in state.successors() {
            explored.entry(next).or_insert(Node {
                parent: cursor,
                cost: node.cost + 1,
            });
        }
        cursor += 1;
    }

    SearchOutcome::exhausted(explored, cursor)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Open {
    estimate: u32,
    cost: u32,
    index: usize,
}

// `BinaryHeap` is a max-heap: the greatest entry has the lowest estimate, then the highest cost,
// then the earliest discovery.
impl Ord for Open {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .cmp(&self.estimate)
            .then(self.cost.cmp(&other.cost))
            .then(other.index.cmp(&self.index))
    }
}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* guided by [`misplaced_tiles`].
///
/// Improved states are pushed again instead of being re-keyed; entries whose cost is worse than
/// the recorded one are dropped when popped and do not count as expansions.
pub fn astar(start: &State, goal: &State, mut on_step: impl FnMut()) -> SearchOutcome {
    let mut explored = Explored::default();
    explored.insert(*start, Node { parent: ROOT, cost: 0 }); // Sentinel.

    let mut frontier = BinaryHeap::new();
    frontier.push(Open {
        estimate: misplaced_tiles(start, goal),
        cost: 0,
        index: 0,
    });

    let mut expanded = 0;
    while let Some(open) = frontier.pop() {
        let Some((&state, &node)) = explored.get_index(open.index) else {
            continue;
        };
        if open.cost > node.cost {
            log::trace!("Skipping stale entry for state #{}", open.index);
            continue;
        }

        #[cfg(feature = "coz")]
        coz::progress!("Expand");

        expanded += 1;
        on_step();
        if state == *goal {
            return SearchOutcome::found(explored, goal, expanded);
        }

        let cost = node.cost + 1;
        for next in state.successors() {
            let relaxed = Node {
                parent: open.index,
                cost,
            };
            let index = match explored.get_full_mut(&next) {
                Some((_, _, known)) if known.cost <= cost => continue,
                Some((index, _, known)) => {
                    *known = relaxed;
                    index
                }
                None => explored.insert_full(next, relaxed).0,
            };
            frontier.push(Open {
                estimate: cost + misplaced_tiles(&next, goal),
                cost,
                index,
            });
        }
    }

    SearchOutcome::exhausted(explored, expanded)
}

/// Follow parent links from `goal` back to the start, returning the states in path order.
///
/// Returns `None` if `goal` was never discovered.
pub fn reconstruct(explored: &Explored, goal: &State) -> Option<Vec<State>> {
    let mut states = std::iter::successors(explored.get_key_value(goal), |(_, node)| {
        explored.get_index(node.parent)
    })
    .map(|(state, _)| *state)
    .collect::<Vec<_>>();
    if states.is_empty() {
        return None;
    }
    states.reverse();
    Some(states)
}
