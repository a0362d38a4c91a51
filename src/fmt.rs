use std::fmt;

use crate::{Direction, Pos, State, SIDE};

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in Pos::all() {
            match self[pos] {
                0 => " .".fmt(f)?,
                tile => write!(f, "{tile:2}")?,
            }
            if pos.col() + 1 == SIDE {
                "\n".fmt(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Right => "R".fmt(f),
            Direction::Down => "D".fmt(f),
            Direction::Left => "L".fmt(f),
            Direction::Up => "U".fmt(f),
        }
    }
}
