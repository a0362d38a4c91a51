use std::path::Path;

use anyhow::{bail, Context, Result};
use eight_puzzle_solver::State;

pub const SEPARATOR: &str = "================\n";
pub const TEST_DIR: &str = "tests";
pub const EXTENTION: &str = "puzzle";

/// Moves along `path` as a direction string, `-` for the empty path.
#[allow(unused)]
pub fn fmt_moves(path: &[State]) -> Result<String> {
    if path.len() <= 1 {
        return Ok("-".into());
    }
    path.windows(2)
        .zip(1..)
        .map(|(w, i)| -> Result<String> {
            let dir = w[0]
                .step_to(&w[1])
                .with_context(|| format!("Step {i} is not a single move"))?;
            Ok(dir.to_string())
        })
        .collect()
}

#[allow(unused)]
pub fn parse_pair(input: &str) -> Result<(State, State)> {
    let mut lines = input.lines().map(|line| line.trim());
    let start = lines
        .next()
        .context("Missing start state")?
        .parse::<State>()?;
    let goal = lines
        .next()
        .context("Missing goal state")?
        .parse::<State>()?;
    if let Some(extra) = lines.find(|line| !line.is_empty()) {
        bail!("Unexpected line: {extra:?}");
    }
    Ok((start, goal))
}

pub fn run_tests(subdir: &str, mut f: impl FnMut(&str) -> Result<String>) {
    let mut tests = std::fs::read_dir(Path::new(TEST_DIR).join(subdir))
        .unwrap()
        .filter_map(|ent| {
            let path = ent.unwrap().path();
            if path.extension().map_or(true, |ext| ext != EXTENTION) {
                return None;
            }
            let name = path.file_stem().unwrap().to_str().unwrap().to_owned();
            Some((name, path))
        })
        .collect::<Vec<_>>();
    tests.sort();

    let do_update_tests = std::env::var("UPDATE_EXPECT").map_or(false, |v| v == "1");

    let mut failed_cnt = 0;
    for (name, path) in &tests {
        eprint!("{name}: ");
        let content = std::fs::read_to_string(path).unwrap();
        match f(&content) {
            Ok(got) if got == content => eprintln!("\x1B[32mOK\x1B[0m"),
            Ok(got) if do_update_tests => {
                std::fs::write(path, got).unwrap();
                eprintln!("\x1B[33mUpdated\x1B[0m");
            }
            Ok(got) => {
                eprintln!("\x1B[31mFAILED\x1B[0m\n{got}");
                failed_cnt += 1;
            }
            Err(err) => {
                eprintln!("\x1B[31mFAILED\x1B[0m\n{:?}", err);
                failed_cnt += 1;
            }
        }
    }

    if failed_cnt != 0 {
        eprintln!("{failed_cnt}/{} tests failed", tests.len());
        std::process::exit(1);
    }
}
