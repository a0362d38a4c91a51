use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::{State, CELLS};

impl FromStr for State {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s
            .split(|ch: char| ch == ',' || ch.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .collect::<Vec<_>>();
        ensure!(
            tokens.len() == CELLS,
            "You must enter exactly 9 numbers, got {}",
            tokens.len(),
        );

        let mut tiles = [0u8; CELLS];
        for (tile, tok) in tiles.iter_mut().zip(&tokens) {
            *tile = tok
                .parse()
                .with_context(|| format!("Invalid number: {tok:?}"))?;
        }
        State::from_tiles(tiles)
            .context("State must contain all numbers from 0 to 8 exactly once")
    }
}
