use clap::Parser;
use env_logger::Env;
use fifteen_solver::engine::{Board, BOARD_SIZE, MAX_BOARD_SIZE};
use fifteen_solver::heuristics::manhattan_distance;
use fifteen_solver::solver::{select_move_with, SearchConfig, DEFAULT_SEARCH_BUDGET};
use log::debug;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Play a sliding-tile puzzle with engine hints", long_about = None)]
struct Args {
    /// Board width and height
    #[clap(long, default_value_t = BOARD_SIZE)]
    size: usize,

    /// Number of random moves used to scramble the board
    #[clap(long, default_value_t = 40)]
    scramble: usize,

    /// Seed for the scramble
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Search budget used for hints
    #[clap(long, default_value_t = DEFAULT_SEARCH_BUDGET)]
    budget: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    if !(2..=MAX_BOARD_SIZE).contains(&args.size) {
        return Err(format!(
            "board size must be between 2 and {}, got {}",
            MAX_BOARD_SIZE, args.size
        )
        .into());
    }

    let config = SearchConfig::with_budget(args.budget);
    let mut board = Board::scramble(args.size, args.scramble, args.seed);
    let mut history: Vec<Board> = Vec::new();
    println!("Welcome to the sliding puzzle!");

    loop {
        println!("---------------------");
        println!(
            "Moves: {}, Distance: {}",
            history.len(),
            manhattan_distance(&board)
        );
        println!("{}", board);

        if board.is_goal() {
            println!();
            println!("---------------------");
            println!("Solved in {} moves!", history.len());
            println!("---------------------");
            break;
        }

        print!("Enter a cell index to slide into the gap, 'h' for a hint, 'a' to let the engine move, 'u' to undo, 'q' to quit: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            println!();
            break;
        }

        match input.trim() {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "u" => match history.pop() {
                Some(previous) => {
                    board = previous;
                    println!("Move undone.");
                }
                None => println!("Cannot undo further (no moves made)."),
            },
            "h" => match select_move_with(&board, &config) {
                Some(target) => println!(
                    "Hint: slide tile {} (cell {}) into the gap.",
                    board.tile_at(target),
                    target
                ),
                None => println!("Already solved."),
            },
            "a" => {
                if let Some(target) = select_move_with(&board, &config) {
                    debug!("engine plays {}", target);
                    history.push(board.clone());
                    board = board.apply_move(target);
                    println!("Engine moved tile from cell {}.", target);
                }
            }
            other => match other.parse::<usize>() {
                Ok(target) => match board.try_apply_move(target) {
                    Ok(next) => {
                        history.push(board.clone());
                        board = next;
                    }
                    Err(e) => println!("Invalid move: {}. Legal cells: {:?}", e, board.legal_moves()),
                },
                Err(_) => println!("Invalid input. Use a cell index, 'h', 'a', 'u', or 'q'."),
            },
        }
    }
    Ok(())
}
