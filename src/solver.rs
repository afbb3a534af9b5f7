use crate::engine::Board;
use crate::heuristics::{choose_move_greedy, manhattan_distance};
use log::debug;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Number of nodes the search may pop before it falls back to the greedy choice.
pub const DEFAULT_SEARCH_BUDGET: usize = 3000;

/// Tunables for a single search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of nodes popped from the frontier. `0` skips straight to the fallback.
    pub budget: usize,
}

impl SearchConfig {
    pub fn with_budget(budget: usize) -> Self {
        SearchConfig { budget }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            budget: DEFAULT_SEARCH_BUDGET,
        }
    }
}

/// How a search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The start board was already solved; there is no move to make.
    AlreadySolved,
    /// The goal was popped; `depth` is the length of the path found, which is optimal.
    GoalFound { depth: usize },
    /// The goal was not reached and the greedy one-step choice was used instead.
    /// `exhausted_queue` is true when the frontier ran dry rather than the budget.
    Fallback { exhausted_queue: bool },
}

/// Result of [`search`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// The move to play, or `None` when the board is already solved.
    pub chosen: Option<usize>,
    pub outcome: SearchOutcome,
    /// Nodes popped from the frontier.
    pub expanded: usize,
}

/// Frontier entry. Ordered so that `BinaryHeap` pops the smallest
/// `(f, g, first_move, seq)` first.
#[derive(Debug)]
struct Node {
    f: usize,
    g: usize,
    board: Board,
    /// Move taken from the start board that begins this path; `None` only for the start.
    first_move: Option<usize>,
    seq: u64,
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.first_move.cmp(&self.first_move))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

/// Records `g` as the cost of reaching `board` when it is the first or a strictly
/// cheaper way there. Returns whether the board should be queued.
fn record_if_cheaper(best_g: &mut HashMap<Board, usize>, board: &Board, g: usize) -> bool {
    match best_g.get_mut(board) {
        Some(known) if g >= *known => false,
        Some(known) => {
            *known = g;
            true
        }
        None => {
            best_g.insert(board.clone(), g);
            true
        }
    }
}

/// Picks the move to play from `board` using the default budget.
///
/// Returns `None` if the board is already solved, otherwise one of `board.legal_moves()`.
///
/// # Examples
/// ```
/// use fifteen_solver::engine::Board;
/// use fifteen_solver::solver::select_move;
///
/// let board = Board::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 13, 14, 15, 12]).unwrap();
/// assert_eq!(select_move(&board), Some(15));
/// ```
pub fn select_move(board: &Board) -> Option<usize> {
    select_move_with(board, &SearchConfig::default())
}

/// Like [`select_move`] with an explicit configuration.
pub fn select_move_with(board: &Board, config: &SearchConfig) -> Option<usize> {
    search(board, config).chosen
}

/// Runs a bounded A* search from `start` and reports the chosen move.
///
/// Nodes are expanded in order of `g + h` where `h` is the Manhattan distance,
/// with ties broken by lower `g`, then lower first move, then insertion order.
/// A child is queued only if it has not been reached before or is reached now at
/// a strictly lower cost. Every queued node remembers which move from the start
/// board began its path; that move is returned as soon as the goal is popped.
///
/// If `config.budget` pops pass without reaching the goal, or the frontier empties
/// (unsolvable boards on tiny grids), the search falls back to
/// [`choose_move_greedy`] on the start board.
///
/// All state is local to the call, so concurrent searches need no coordination.
pub fn search(start: &Board, config: &SearchConfig) -> SearchReport {
    if start.is_goal() {
        debug!("search: start board already solved");
        return SearchReport {
            chosen: None,
            outcome: SearchOutcome::AlreadySolved,
            expanded: 0,
        };
    }

    let mut frontier = BinaryHeap::new();
    let mut best_g: HashMap<Board, usize> = HashMap::new();
    let mut seq: u64 = 0;

    frontier.push(Node {
        f: manhattan_distance(start),
        g: 0,
        board: start.clone(),
        first_move: None,
        seq,
    });
    best_g.insert(start.clone(), 0);

    let mut expanded = 0;
    while expanded < config.budget {
        let node = match frontier.pop() {
            Some(node) => node,
            None => break,
        };
        expanded += 1;

        if node.board.is_goal() {
            debug!(
                "search: goal at depth {} after {} pops ({} boards seen)",
                node.g,
                expanded,
                best_g.len()
            );
            return SearchReport {
                chosen: node.first_move,
                outcome: SearchOutcome::GoalFound { depth: node.g },
                expanded,
            };
        }

        for target in node.board.legal_moves() {
            let child = node.board.apply_move(target);
            let g = node.g + 1;
            if !record_if_cheaper(&mut best_g, &child, g) {
                continue;
            }

            let h = manhattan_distance(&child);
            seq += 1;
            frontier.push(Node {
                f: g + h,
                g,
                board: child,
                first_move: Some(node.first_move.unwrap_or(target)),
                seq,
            });
        }
    }

    let exhausted_queue = frontier.is_empty();
    let chosen = choose_move_greedy(start).map(|(_, target)| target);
    debug!(
        "search: no goal after {} pops (frontier {}, queue exhausted: {}), greedy fallback {:?}",
        expanded,
        frontier.len(),
        exhausted_queue,
        chosen
    );
    SearchReport {
        chosen,
        outcome: SearchOutcome::Fallback { exhausted_queue },
        expanded,
    }
}
