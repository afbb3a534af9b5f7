use clap::Parser;
use env_logger::Env;
use fifteen_solver::engine::Board;
use fifteen_solver::heuristics::manhattan_distance;
use fifteen_solver::solver::{search, SearchConfig, SearchOutcome, DEFAULT_SEARCH_BUDGET};
use fifteen_solver::utils::board_from_str;
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Advise the next move for a sliding-tile puzzle", long_about = None)]
struct Args {
    /// Maximum number of nodes the search may expand before falling back to a greedy move
    #[clap(short, long, default_value_t = DEFAULT_SEARCH_BUDGET)]
    budget: usize,

    /// Keep applying the engine's moves for up to this many steps (0 = advise once)
    #[clap(short, long, default_value_t = 0)]
    follow: usize,

    /// Path to the board file (one row per line, whitespace-separated values, 0 or . for the empty cell)
    board_file: PathBuf,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    board_from_str(&content).map_err(|e| format!("Invalid board format: {}", e))
}

fn describe(outcome: SearchOutcome) -> String {
    match outcome {
        SearchOutcome::AlreadySolved => "board already solved".to_string(),
        SearchOutcome::GoalFound { depth } => format!("optimal path of {} moves found", depth),
        SearchOutcome::Fallback {
            exhausted_queue: true,
        } => "no path exists, greedy move".to_string(),
        SearchOutcome::Fallback {
            exhausted_queue: false,
        } => "budget exhausted, greedy move".to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut board = read_board_file(&args.board_file)?;
    let config = SearchConfig::with_budget(args.budget);
    println!("Loaded board from {}\n", args.board_file.display());
    println!("{}\n", board);

    if !board.is_solvable() {
        warn!("this board cannot reach the goal; the engine will only ever fall back to greedy moves");
    }

    let report = search(&board, &config);
    match report.chosen {
        Some(target) => println!(
            "Advised move: {} (tile {}) - {}, {} nodes expanded",
            target,
            board.tile_at(target),
            describe(report.outcome),
            report.expanded
        ),
        None => println!("Nothing to do: {}", describe(report.outcome)),
    }

    if args.follow == 0 {
        return Ok(());
    }

    info!("following the engine for up to {} moves", args.follow);
    let mut steps = 0;
    while steps < args.follow {
        let report = search(&board, &config);
        let target = match report.chosen {
            Some(target) => target,
            None => break,
        };
        board = board.apply_move(target);
        steps += 1;
        println!(
            "Move {}: {} ({}, distance now {})\n{}\n",
            steps,
            target,
            describe(report.outcome),
            manhattan_distance(&board),
            board
        );
    }

    if board.is_goal() {
        println!("Solved in {} moves.", steps);
    } else {
        println!("Not solved after {} moves.", steps);
    }
    Ok(())
}
