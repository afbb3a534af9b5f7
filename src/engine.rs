//! Board model for the sliding-tile puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Board`: an immutable, validated arrangement of tiles on a square grid,
//!   with methods for locating the empty cell, enumerating legal moves and
//!   producing the board that results from a move.
//! - `BoardError`: everything that can be wrong with untrusted board input.
//!
//! Every board carries its own size, so the goal configuration is derived from
//! the board rather than from process-wide constants. `BOARD_SIZE` is only the
//! default used by the 15-puzzle entry points.
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use thiserror::Error;

/// Default width and height of the board. A `BOARD_SIZE` of 4 gives the classic 15-puzzle.
pub const BOARD_SIZE: usize = 4;

/// Largest supported width. A 16x16 grid uses every `u8` value as a tile.
pub const MAX_BOARD_SIZE: usize = 16;

/// Value used for the empty cell.
pub const EMPTY: u8 = 0;

/// Errors raised when a board or a move coming from outside the crate is malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size must be at least 2, got {0}")]
    SizeTooSmall(usize),
    #[error("board size {0} is too large for u8 tiles")]
    SizeTooLarge(usize),
    #[error("expected {expected} cells for a {size}x{size} board, found {found}")]
    WrongLength {
        size: usize,
        expected: usize,
        found: usize,
    },
    #[error("tile value {value} at index {index} is out of range 0..{limit}")]
    ValueOutOfRange { index: usize, value: usize, limit: usize },
    #[error("tile value {value} appears more than once (again at index {index})")]
    DuplicateValue { index: usize, value: u8 },
    #[error("cell {target} is not adjacent to the empty cell at {empty}")]
    IllegalMove { target: usize, empty: usize },
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unrecognized token '{token}' in row {row}")]
    BadToken { row: usize, token: String },
}

/// A sliding-puzzle configuration.
///
/// Cells are stored row-major; cell `i` sits at row `i / size`, column `i % size`.
/// The values are a permutation of `0..size*size` where `0` is the empty cell.
/// Construction validates this invariant, so every `Board` in circulation is well formed.
///
/// Boards are values: moves return a new board and never mutate the receiver,
/// which lets a search branch from one parent into several children.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<u8>,
    empty: usize,
}

impl Board {
    /// Creates a 4x4 board from sixteen row-major tile values.
    ///
    /// # Examples
    /// ```
    /// use fifteen_solver::engine::Board;
    /// let board = Board::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 13, 14, 15, 12]).unwrap();
    /// assert_eq!(board.locate_empty(), 11);
    /// assert!(Board::new(vec![1, 2, 3]).is_err());
    /// ```
    pub fn new(cells: Vec<u8>) -> Result<Self, BoardError> {
        Self::from_cells(BOARD_SIZE, cells)
    }

    /// Creates a board of the given size from row-major tile values.
    ///
    /// # Arguments
    /// * `size`: Width (and height) of the grid. Must be at least 2.
    /// * `cells`: Exactly `size * size` values forming a permutation of `0..size*size`.
    ///
    /// # Returns
    /// * `Ok(Board)` for a valid permutation.
    /// * `Err(BoardError)` describing the first problem found otherwise.
    pub fn from_cells(size: usize, cells: Vec<u8>) -> Result<Self, BoardError> {
        if size < 2 {
            return Err(BoardError::SizeTooSmall(size));
        }
        if size > MAX_BOARD_SIZE {
            return Err(BoardError::SizeTooLarge(size));
        }
        let expected = size * size;
        if cells.len() != expected {
            return Err(BoardError::WrongLength {
                size,
                expected,
                found: cells.len(),
            });
        }

        let mut seen = vec![false; expected];
        let mut empty = 0;
        for (index, &value) in cells.iter().enumerate() {
            let slot = value as usize;
            if slot >= expected {
                return Err(BoardError::ValueOutOfRange {
                    index,
                    value: slot,
                    limit: expected,
                });
            }
            if seen[slot] {
                return Err(BoardError::DuplicateValue { index, value });
            }
            seen[slot] = true;
            if value == EMPTY {
                empty = index;
            }
        }
        // Length matches and no value repeats, so every value (including 0) is present.

        Ok(Board { size, cells, empty })
    }

    /// Returns the solved board `[1, 2, ..., size*size - 1, 0]`.
    ///
    /// # Panics
    /// Panics if `size` is below 2 or too large for `u8` tiles.
    pub fn goal(size: usize) -> Self {
        assert!(
            (2..=MAX_BOARD_SIZE).contains(&size),
            "board size must be between 2 and {}",
            MAX_BOARD_SIZE
        );
        let count = size * size;
        let cells = (1..count)
            .map(|v| v as u8)
            .chain(std::iter::once(EMPTY))
            .collect();
        Board {
            size,
            cells,
            empty: count - 1,
        }
    }

    /// Produces a solvable board by walking `steps` random legal moves away from the goal.
    ///
    /// The walk is driven by a `SmallRng` seeded with `seed`, so the same arguments
    /// always yield the same board. Walks may undo themselves, so the result can be
    /// closer to the goal than `steps` suggests.
    pub fn scramble(size: usize, steps: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::goal(size);
        for _ in 0..steps {
            let moves = board.legal_moves();
            if let Some(&target) = moves.choose(&mut rng) {
                board = board.apply_move(target);
            }
        }
        board
    }

    /// Width and height of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major tile values.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Returns the tile at `index`.
    ///
    /// # Panics
    /// Panics if `index >= size * size`.
    pub fn tile_at(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// Index of the empty cell.
    pub fn locate_empty(&self) -> usize {
        self.empty
    }

    /// Returns the cells orthogonally adjacent to the empty cell.
    ///
    /// Indices come back in ascending order (up, left, right, down), which is also
    /// the order the search engine iterates them in. A board of size 2 or more
    /// always has between two and four legal moves.
    ///
    /// # Examples
    /// ```
    /// use fifteen_solver::engine::{Board, BOARD_SIZE};
    /// let goal = Board::goal(BOARD_SIZE);
    /// assert_eq!(goal.legal_moves(), vec![11, 14]);
    /// ```
    pub fn legal_moves(&self) -> Vec<usize> {
        let size = self.size as isize;
        let row = (self.empty / self.size) as isize;
        let col = (self.empty % self.size) as isize;

        let dr = [-1, 0, 0, 1];
        let dc = [0, -1, 1, 0];

        let mut moves = Vec::with_capacity(4);
        for i in 0..4 {
            let nr = row + dr[i];
            let nc = col + dc[i];
            if nr >= 0 && nr < size && nc >= 0 && nc < size {
                moves.push((nr * size + nc) as usize);
            }
        }
        moves
    }

    /// Whether `target` is a cell the empty cell may slide into.
    pub fn is_legal_move(&self, target: usize) -> bool {
        if target >= self.cells.len() {
            return false;
        }
        let (er, ec) = (self.empty / self.size, self.empty % self.size);
        let (tr, tc) = (target / self.size, target % self.size);
        er.abs_diff(tr) + ec.abs_diff(tc) == 1
    }

    /// Returns a copy of the board with cells `i` and `j` exchanged.
    ///
    /// This is the raw primitive behind moves: swapping the same pair twice
    /// yields the original board. It does not check adjacency.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn swap(&self, i: usize, j: usize) -> Board {
        let mut cells = self.cells.clone();
        cells.swap(i, j);
        let empty = if self.empty == i {
            j
        } else if self.empty == j {
            i
        } else {
            self.empty
        };
        Board {
            size: self.size,
            cells,
            empty,
        }
    }

    /// Slides the tile at `target` into the empty cell and returns the new board.
    ///
    /// The receiver is left untouched.
    ///
    /// # Panics
    /// Panics if `target` is not a legal move. Callers holding untrusted input
    /// should use [`Board::try_apply_move`].
    pub fn apply_move(&self, target: usize) -> Board {
        assert!(
            self.is_legal_move(target),
            "cell {} is not adjacent to the empty cell at {}",
            target,
            self.empty
        );
        self.swap(self.empty, target)
    }

    /// Like [`Board::apply_move`], but reports an illegal target as an error.
    pub fn try_apply_move(&self, target: usize) -> Result<Board, BoardError> {
        if !self.is_legal_move(target) {
            return Err(BoardError::IllegalMove {
                target,
                empty: self.empty,
            });
        }
        Ok(self.swap(self.empty, target))
    }

    /// Whether the board equals the goal for its size.
    pub fn is_goal(&self) -> bool {
        let last = self.cells.len() - 1;
        self.empty == last
            && self.cells[..last]
                .iter()
                .enumerate()
                .all(|(i, &v)| v as usize == i + 1)
    }

    /// Whether the goal can be reached from this board at all.
    ///
    /// Uses the inversion-parity rule: with an odd width the inversion count must be
    /// even; with an even width the inversion count plus the empty cell's row
    /// (counted from the top, 0-based) must be odd.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.count_inversions();
        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.empty / self.size) % 2 == 1
        }
    }

    fn count_inversions(&self) -> usize {
        let tiles: Vec<u8> = self.cells.iter().copied().filter(|&v| v != EMPTY).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &v)| tiles[i + 1..].iter().filter(|&&next| next < v).count())
            .sum()
    }
}

impl fmt::Display for Board {
    /// Right-aligned grid, one row per line, `.` for the empty cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cells.len() - 1).to_string().len();
        for (r, row) in self.cells.chunks(self.size).enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if value == EMPTY {
                    write!(f, "{:>width$}", ".", width = width)?;
                } else {
                    write!(f, "{:>width$}", value, width = width)?;
                }
            }
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_move_board() -> Board {
        Board::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 13, 14, 15, 12]).unwrap()
    }

    #[test]
    fn test_goal_board_layout() {
        let goal = Board::goal(BOARD_SIZE);
        assert_eq!(
            goal.cells(),
            &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0]
        );
        assert_eq!(goal.locate_empty(), 15);
        assert!(goal.is_goal());
        assert!(!one_move_board().is_goal());

        let small = Board::goal(3);
        assert_eq!(small.cells(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert!(small.is_goal());
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = Board::new(vec![1, 2, 0]).unwrap_err();
        assert_eq!(
            err,
            BoardError::WrongLength {
                size: 4,
                expected: 16,
                found: 3
            }
        );
    }

    #[test]
    fn test_new_rejects_duplicates_and_out_of_range() {
        let mut cells: Vec<u8> = (0..16).collect();
        cells[3] = 5;
        assert!(matches!(
            Board::new(cells),
            Err(BoardError::DuplicateValue { value: 5, .. })
        ));

        let mut cells: Vec<u8> = (0..16).collect();
        cells[0] = 16;
        assert!(matches!(
            Board::new(cells),
            Err(BoardError::ValueOutOfRange { value: 16, .. })
        ));
    }

    #[test]
    fn test_from_cells_rejects_tiny_size() {
        assert_eq!(
            Board::from_cells(1, vec![0]),
            Err(BoardError::SizeTooSmall(1))
        );
    }

    #[test]
    fn test_from_cells_rejects_huge_size_without_overflow() {
        assert_eq!(
            Board::from_cells(17, vec![]),
            Err(BoardError::SizeTooLarge(17))
        );
        assert_eq!(
            Board::from_cells(usize::MAX, vec![0]),
            Err(BoardError::SizeTooLarge(usize::MAX))
        );
        assert!(Board::from_cells(MAX_BOARD_SIZE, (0..=255).collect()).is_ok());
    }

    #[test]
    fn test_locate_empty() {
        assert_eq!(one_move_board().locate_empty(), 11);
        let corner = Board::new(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]).unwrap();
        assert_eq!(corner.locate_empty(), 0);
    }

    #[test]
    fn test_legal_moves_corner_edge_center() {
        let corner = Board::new(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]).unwrap();
        assert_eq!(corner.legal_moves(), vec![1, 4]);

        // Empty at index 11 (row 2, col 3): right edge.
        assert_eq!(one_move_board().legal_moves(), vec![7, 10, 15]);

        let center = Board::new(vec![1, 2, 3, 4, 5, 0, 6, 7, 9, 10, 11, 8, 13, 14, 15, 12]).unwrap();
        assert_eq!(center.legal_moves(), vec![1, 4, 6, 9]);
    }

    #[test]
    fn test_legal_moves_are_adjacent_on_scrambles() {
        for seed in 0..50 {
            let board = Board::scramble(BOARD_SIZE, 60, seed);
            let moves = board.legal_moves();
            assert!(
                (2..=4).contains(&moves.len()),
                "seed {} gave {} moves",
                seed,
                moves.len()
            );
            let empty = board.locate_empty();
            for m in moves {
                assert!(m < 16);
                let distance = (empty / 4).abs_diff(m / 4) + (empty % 4).abs_diff(m % 4);
                assert_eq!(distance, 1, "move {} not adjacent to empty {}", m, empty);
            }
        }
    }

    #[test]
    fn test_apply_move_does_not_mutate_input() {
        let board = one_move_board();
        let before = board.clone();
        let next = board.apply_move(15);
        assert_eq!(board, before);
        assert!(next.is_goal());
        assert_eq!(next.locate_empty(), 15);
    }

    #[test]
    fn test_swap_twice_is_identity() {
        for seed in 0..20 {
            let board = Board::scramble(BOARD_SIZE, 40, seed);
            let empty = board.locate_empty();
            for m in board.legal_moves() {
                let there = board.swap(empty, m);
                assert_eq!(there.swap(empty, m), board);
                // As a move, going back means targeting the old empty cell.
                assert_eq!(board.apply_move(m).apply_move(empty), board);
            }
        }
    }

    #[test]
    #[should_panic(expected = "not adjacent")]
    fn test_apply_move_panics_on_illegal_target() {
        one_move_board().apply_move(0);
    }

    #[test]
    fn test_try_apply_move_reports_illegal_target() {
        let board = one_move_board();
        assert_eq!(
            board.try_apply_move(0),
            Err(BoardError::IllegalMove {
                target: 0,
                empty: 11
            })
        );
        assert_eq!(
            board.try_apply_move(99),
            Err(BoardError::IllegalMove {
                target: 99,
                empty: 11
            })
        );
        assert!(board.try_apply_move(15).unwrap().is_goal());
    }

    #[test]
    fn test_scramble_is_deterministic_and_solvable() {
        let a = Board::scramble(BOARD_SIZE, 40, 7);
        let b = Board::scramble(BOARD_SIZE, 40, 7);
        assert_eq!(a, b);
        for seed in 0..30 {
            assert!(Board::scramble(BOARD_SIZE, 40, seed).is_solvable());
            assert!(Board::scramble(3, 40, seed).is_solvable());
        }
        assert_eq!(Board::scramble(BOARD_SIZE, 0, 1), Board::goal(BOARD_SIZE));
    }

    #[test]
    fn test_is_solvable_detects_swapped_tiles() {
        // Swapping two tiles (not the blank) flips the permutation parity.
        let unsolvable =
            Board::new(vec![2, 1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0]).unwrap();
        assert!(!unsolvable.is_solvable());
        assert!(Board::goal(BOARD_SIZE).is_solvable());
        assert!(one_move_board().is_solvable());
    }

    #[test]
    fn test_display_board_formatting() {
        let text = one_move_board().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], " 1  2  3  4");
        assert_eq!(lines[2], " 9 10 11  .");
        assert_eq!(lines[3], "13 14 15 12");
    }
}
