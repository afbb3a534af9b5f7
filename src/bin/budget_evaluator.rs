use clap::Parser;
use env_logger::Env;
use fifteen_solver::engine::{Board, BOARD_SIZE, MAX_BOARD_SIZE};
use fifteen_solver::solver::{search, SearchConfig, SearchOutcome};
use log::info;
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare search budgets over seeded scrambles", long_about = None)]
struct Args {
    /// Number of scrambled boards per budget
    #[clap(long, default_value_t = 50)]
    boards: usize,

    /// Random moves per scramble
    #[clap(long, default_value_t = 40)]
    scramble: usize,

    /// Seed of the first board; board i uses seed + i
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Board width and height
    #[clap(long, default_value_t = BOARD_SIZE)]
    size: usize,

    /// Comma-separated budgets to evaluate
    #[clap(long, value_delimiter = ',', default_values_t = vec![100usize, 1000, 3000, 10000])]
    budgets: Vec<usize>,
}

#[derive(Default, Debug)]
struct Tally {
    found: usize,
    fallback: usize,
    solved_already: usize,
    total_expanded: usize,
    total_depth: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if !(2..=MAX_BOARD_SIZE).contains(&args.size) {
        return Err(format!(
            "board size must be between 2 and {}, got {}",
            MAX_BOARD_SIZE, args.size
        )
        .into());
    }

    let boards: Vec<Board> = (0..args.boards as u64)
        .map(|i| Board::scramble(args.size, args.scramble, args.seed + i))
        .collect();
    info!(
        "evaluating {} budgets over {} boards ({} scramble moves)",
        args.budgets.len(),
        boards.len(),
        args.scramble
    );

    println!(
        "{:>8} {:>8} {:>8} {:>10} {:>10}",
        "budget", "found", "greedy", "avg pops", "avg depth"
    );
    for &budget in &args.budgets {
        let config = SearchConfig::with_budget(budget);
        let tally = boards
            .par_iter()
            .map(|board| search(board, &config))
            .fold(Tally::default, |mut t, report| {
                t.total_expanded += report.expanded;
                match report.outcome {
                    SearchOutcome::AlreadySolved => t.solved_already += 1,
                    SearchOutcome::GoalFound { depth } => {
                        t.found += 1;
                        t.total_depth += depth;
                    }
                    SearchOutcome::Fallback { .. } => t.fallback += 1,
                }
                t
            })
            .reduce(Tally::default, |a, b| Tally {
                found: a.found + b.found,
                fallback: a.fallback + b.fallback,
                solved_already: a.solved_already + b.solved_already,
                total_expanded: a.total_expanded + b.total_expanded,
                total_depth: a.total_depth + b.total_depth,
            });

        let searched = boards.len() - tally.solved_already;
        let avg_pops = if searched == 0 {
            0.0
        } else {
            tally.total_expanded as f64 / searched as f64
        };
        let avg_depth = if tally.found == 0 {
            0.0
        } else {
            tally.total_depth as f64 / tally.found as f64
        };
        println!(
            "{:>8} {:>8} {:>8} {:>10.1} {:>10.2}",
            budget, tally.found, tally.fallback, avg_pops, avg_depth
        );
    }

    Ok(())
}
