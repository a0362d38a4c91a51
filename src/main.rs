use std::time::{Duration, Instant};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use console::style;
use eight_puzzle_solver::heuristic::misplaced_tiles;
use eight_puzzle_solver::solvable::{inversions, is_solvable};
use eight_puzzle_solver::solve::{self, Strategy};
use eight_puzzle_solver::State;
use indicatif::{ProgressBar, ProgressStyle};

/// Solve the 8-puzzle by state-space search.
#[derive(Debug, Parser)]
#[command(name = "eight-puzzle", version)]
struct Args {
    /// Start state, 9 numbers with 0 as the blank, e.g. "1 8 7 0 3 5 2 4 6".
    start: String,

    /// Goal state.
    #[arg(default_value = "1 2 3 4 5 6 7 8 0")]
    goal: String,

    /// Search strategy: `astar` or `bfs`.
    #[arg(short, long, default_value = "astar")]
    strategy: Strategy,

    /// Print every state along the solution.
    #[arg(long)]
    steps: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = args
        .start
        .parse::<State>()
        .context("Invalid start state")?;
    let goal = args.goal.parse::<State>().context("Invalid goal state")?;

    ensure!(
        is_solvable(&start, &goal),
        "The start state has {} inversions and is not solvable for this goal configuration",
        inversions(&start),
    );
    log::info!("Solving with {}", args.strategy);

    let pb = ProgressBar::new_spinner().with_style(
        ProgressStyle::with_template("{spinner} [{elapsed}] {pos} states expanded")
            .context("Invalid progress template")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let t0 = Instant::now();
    let outcome = solve::search(args.strategy, &start, &goal, || pb.inc(1));
    let elapsed = t0.elapsed();
    pb.finish_and_clear();

    let path = outcome
        .path
        .context("No solution found (this should not happen for solvable states)")?;
    let moves = path
        .windows(2)
        .filter_map(|w| w[0].step_to(&w[1]))
        .map(|dir| dir.to_string())
        .collect::<String>();

    println!("{}", style("Results").bold());
    println!("Solution length (moves): {}", path.len() - 1);
    println!("Nodes expanded: {}", outcome.expanded);
    println!("Search time (s): {:.3}", elapsed.as_secs_f64());
    println!("Moves: {}", if moves.is_empty() { "-" } else { moves.as_str() });

    if args.steps {
        let last = path.len() - 1;
        for (g, state) in path.iter().enumerate() {
            println!();
            println!("{}", style(format!("Step {g} / {last}")).bold());
            print!("{state}");
            match args.strategy {
                Strategy::AStar => {
                    let h = misplaced_tiles(state, &goal) as usize;
                    println!("g(n) = {g}  (cost so far)");
                    println!("h(n) = {h}  (misplaced tiles)");
                    println!("f(n) = g(n) + h(n) = {}", g + h);
                }
                Strategy::Bfs => println!("Depth = {g}"),
            }
        }
    }

    Ok(())
}
