use std::ops::Index;

use anyhow::{ensure, Result};
use arrayvec::ArrayVec;

mod fmt;
pub mod heuristic;
mod parse;
pub mod solvable;
pub mod solve;

/// Width and height of the board.
pub const SIDE: u8 = 3;
pub const CELLS: usize = (SIDE * SIDE) as usize;

/// A cell of the board, numbered row-major from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos(pub u8);

impl Pos {
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..CELLS as u8).map(Pos)
    }

    pub fn row(self) -> u8 {
        self.0 / SIDE
    }

    pub fn col(self) -> u8 {
        self.0 % SIDE
    }

    pub fn sibling(self, dir: Direction) -> Option<Pos> {
        const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
        let row = self.row().checked_add_signed(DIRECTIONS[dir as usize].0)?;
        let col = self.col().checked_add_signed(DIRECTIONS[dir as usize].1)?;
        if SIDE <= row || SIDE <= col {
            return None;
        }
        Some(Pos(row * SIDE + col))
    }
}

/// The way the blank travels in a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right = 0,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    pub fn reversed(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }
}

// Cells the blank may swap with, in ascending order. The order fixes how BFS breaks ties.
static MOVE_TABLE: [&[Pos]; CELLS] = [
    &[Pos(1), Pos(3)],
    &[Pos(0), Pos(2), Pos(4)],
    &[Pos(1), Pos(5)],
    &[Pos(0), Pos(4), Pos(6)],
    &[Pos(1), Pos(3), Pos(5), Pos(7)],
    &[Pos(2), Pos(4), Pos(8)],
    &[Pos(3), Pos(7)],
    &[Pos(4), Pos(6), Pos(8)],
    &[Pos(5), Pos(7)],
];

/// Cells adjacent to `pos`, i.e. the cells a blank at `pos` can move into.
pub fn neighbors_of(pos: Pos) -> &'static [Pos] {
    MOVE_TABLE[pos.0 as usize]
}

/// A board configuration: a permutation of `0..=8` where `0` is the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    tiles: [u8; CELLS],
    blank: Pos,
}

impl Index<Pos> for State {
    type Output = u8;
    fn index(&self, pos: Pos) -> &Self::Output {
        &self.tiles[pos.0 as usize]
    }
}

impl State {
    pub const GOAL: Self = Self {
        tiles: [1, 2, 3, 4, 5, 6, 7, 8, 0],
        blank: Pos(8),
    };

    pub fn from_tiles(tiles: [u8; CELLS]) -> Result<Self> {
        let mut seen = [false; CELLS];
        for tile in tiles {
            ensure!((tile as usize) < CELLS, "Tile {tile} is out of range 0..=8");
            ensure!(!seen[tile as usize], "Tile {tile} occurs more than once");
            seen[tile as usize] = true;
        }
        // All nine values are present, so the blank is too.
        let blank = Pos::all()
            .find(|&pos| tiles[pos.0 as usize] == 0)
            .unwrap_or(Pos(0));
        Ok(Self { tiles, blank })
    }

    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    pub fn blank_index(&self) -> Pos {
        self.blank
    }

    /// Swap the blank with the tile at `target`, which must be adjacent to the blank.
    pub fn apply_move(&self, target: Pos) -> Self {
        debug_assert!(
            neighbors_of(self.blank).contains(&target),
            "{target:?} is not adjacent to the blank at {:?}",
            self.blank,
        );
        let mut tiles = self.tiles;
        tiles.swap(self.blank.0 as usize, target.0 as usize);
        Self {
            tiles,
            blank: target,
        }
    }

    pub fn successors(&self) -> ArrayVec<Self, 4> {
        neighbors_of(self.blank)
            .iter()
            .map(|&pos| self.apply_move(pos))
            .collect()
    }

    /// The blank move that turns `self` into `next`, if they are one move apart.
    pub fn step_to(&self, next: &Self) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&dir| {
            self.blank
                .sibling(dir)
                .map_or(false, |pos| self.apply_move(pos) == *next)
        })
    }
}
