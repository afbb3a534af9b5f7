use crate::engine::{Board, EMPTY};
use log::trace;

/// Sums the Manhattan distance of every tile from its goal cell.
///
/// Tile `v` belongs at index `v - 1`; the empty cell is not counted. The estimate
/// never exceeds the true number of moves left, and a single move changes it by
/// exactly one since only one tile shifts by one cell.
///
/// # Arguments
/// * `board`: A reference to the `Board` to evaluate.
///
/// # Returns
/// The total distance as `usize`; `0` exactly when the board is solved.
///
/// # Examples
/// ```
/// use fifteen_solver::engine::{Board, BOARD_SIZE};
/// use fifteen_solver::heuristics::manhattan_distance;
///
/// assert_eq!(manhattan_distance(&Board::goal(BOARD_SIZE)), 0);
/// let board = Board::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 13, 14, 15, 12]).unwrap();
/// assert_eq!(manhattan_distance(&board), 1);
/// ```
pub fn manhattan_distance(board: &Board) -> usize {
    let size = board.size();
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value != EMPTY)
        .map(|(index, &value)| {
            let target = value as usize - 1;
            (index / size).abs_diff(target / size) + (index % size).abs_diff(target % size)
        })
        .sum()
}

/// Chooses the legal move whose resulting board has the smallest Manhattan distance.
///
/// This is the one-step fallback used when the search budget runs out. Moves are
/// considered in ascending index order and only a strictly better score replaces
/// the current pick, so ties go to the lowest index.
///
/// # Returns
/// An `Option` containing a tuple:
///   - `usize`: The Manhattan distance of the board after the chosen move.
///   - `usize`: The chosen move (cell index the empty cell slides into).
/// Returns `None` only if the board has no legal moves, which a valid board never does.
pub fn choose_move_greedy(board: &Board) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for target in board.legal_moves() {
        let score = manhattan_distance(&board.apply_move(target));
        trace!("greedy candidate {} -> distance {}", target, score);
        match best {
            Some((best_score, _)) if score >= best_score => {}
            _ => best = Some((score, target)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BOARD_SIZE;

    #[test]
    fn test_manhattan_goal_is_zero() {
        assert_eq!(manhattan_distance(&Board::goal(BOARD_SIZE)), 0);
        assert_eq!(manhattan_distance(&Board::goal(3)), 0);
        assert_eq!(manhattan_distance(&Board::goal(5)), 0);
    }

    #[test]
    fn test_manhattan_known_values() {
        // Tiles 14 and 15 each one cell right of home.
        let board = Board::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 0, 14, 15]).unwrap();
        assert_eq!(manhattan_distance(&board), 2);

        // Tile 1 in the far corner: 3 rows + 3 columns.
        let board = Board::new(vec![0, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 1]).unwrap();
        assert_eq!(manhattan_distance(&board), 6);
    }

    #[test]
    fn test_manhattan_changes_by_one_per_move() {
        for seed in 0..40 {
            let board = Board::scramble(BOARD_SIZE, 80, seed);
            let h = manhattan_distance(&board);
            for m in board.legal_moves() {
                let next = manhattan_distance(&board.apply_move(m));
                assert_eq!(
                    h.abs_diff(next),
                    1,
                    "seed {} move {}: {} -> {}",
                    seed,
                    m,
                    h,
                    next
                );
            }
        }
    }

    #[test]
    fn test_greedy_picks_solving_move() {
        let board = Board::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 13, 14, 15, 12]).unwrap();
        assert_eq!(choose_move_greedy(&board), Some((0, 15)));
    }

    #[test]
    fn test_greedy_ties_go_to_lowest_index() {
        // Empty in the top-left corner; both neighbours improve by one.
        let board = Board::new(vec![0, 5, 3, 4, 1, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 2]).unwrap();
        let h = manhattan_distance(&board);
        let (score, chosen) = choose_move_greedy(&board).unwrap();
        assert_eq!(chosen, 1);
        assert_eq!(score, h - 1);
        assert_eq!(manhattan_distance(&board.apply_move(4)), score);
    }
}
