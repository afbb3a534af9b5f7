use crate::engine::{Board, BoardError, MAX_BOARD_SIZE};

/// Parses rows of whitespace-separated tile values into a `Board`.
///
/// Each string slice is one row, starting from the top. The number of rows sets the
/// board size, and every row must hold exactly that many values. Blank rows (only
/// whitespace) are skipped, so text read straight from a file can be passed in
/// line by line. The empty cell may be written as `0`, `.` or `_`.
///
/// # Arguments
/// * `rows`: A slice of string slices (`&[&str]`), one per board row.
///
/// # Returns
/// * `Ok(Board)` if every token parses and the values form a valid board.
/// * `Err(BoardError)` if there are more than `MAX_BOARD_SIZE` rows, a token is not a
///   number, a row has the wrong number of entries, or the resulting cells are not a
///   permutation (see `Board::from_cells`).
///
/// # Examples
/// ```
/// use fifteen_solver::utils::board_from_rows;
///
/// let board = board_from_rows(&[
///     " 1  2  3  4",
///     " 5  6  7  8",
///     " 9 10 11  .",
///     "13 14 15 12",
/// ]).unwrap();
/// assert_eq!(board.locate_empty(), 11);
///
/// assert!(board_from_rows(&["1 2", "3 x"]).is_err());
/// ```
pub fn board_from_rows(rows: &[&str]) -> Result<Board, BoardError> {
    let rows: Vec<&str> = rows
        .iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .collect();
    let size = rows.len();
    if size > MAX_BOARD_SIZE {
        return Err(BoardError::SizeTooLarge(size));
    }

    let mut cells = Vec::new();
    for (r, row) in rows.iter().enumerate() {
        let mut count = 0;
        for token in row.split_whitespace() {
            let value = match token {
                "." | "_" => 0,
                _ => token.parse::<u8>().map_err(|_| BoardError::BadToken {
                    row: r,
                    token: token.to_string(),
                })?,
            };
            cells.push(value);
            count += 1;
        }
        if count != size {
            return Err(BoardError::RaggedRow {
                row: r,
                expected: size,
                found: count,
            });
        }
    }

    Board::from_cells(size, cells)
}

/// Parses a whole board text, one row per line. See [`board_from_rows`].
pub fn board_from_str(text: &str) -> Result<Board, BoardError> {
    let lines: Vec<&str> = text.lines().collect();
    board_from_rows(&lines)
}
