//! # Fifteen Solver Library
//!
//! This library provides the board model for the 15-puzzle (and other square
//! sliding-tile puzzles) and a bounded A* engine that picks the next move for an
//! automated player.
//!
//! It is used by three binaries:
//! - `ai_solver`: Reads a board from a file and prints the move the engine advises,
//!   optionally following the engine's moves for a number of steps.
//! - `human_player`: Interactive play on a scrambled board, with engine hints and undo.
//! - `budget_evaluator`: Measures how often a given search budget reaches the goal
//!   over a set of seeded scrambles.
//!
//! ## Modules
//! - `engine`: The board representation (`Board`), its validation errors (`BoardError`),
//!   and move generation and application.
//! - `heuristics`: The Manhattan distance estimate and the greedy one-step move choice.
//! - `solver`: `select_move` and `search`, the bounded A* engine.
//! - `utils`: Parsing boards from text.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;
