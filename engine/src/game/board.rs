use super::types::{CELL_COUNT, Mark, SIDE};
use crate::error::MoveError;

const MAIN_DIAGONAL: [usize; 3] = [0, 4, 8];
const ANTI_DIAGONAL: [usize; 3] = [2, 4, 6];

/// All eight winning lines: rows, columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    MAIN_DIAGONAL,
    ANTI_DIAGONAL,
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Empty cell indices in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        debug_assert_ne!(mark, Mark::Empty);

        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::OutOfRange(index))?;
        if *cell != Mark::Empty {
            return Err(MoveError::OccupiedCell(index));
        }
        *cell = mark;
        Ok(())
    }

    /// Undoes a hypothetical placement made during search.
    pub(crate) fn clear_cell(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn empty_count(&self) -> usize {
        self.count(Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Checks only the lines through `last_index`: its row, its column and,
    /// for even indices, the diagonals it lies on.
    pub fn check_win(&self, last_index: usize, mark: Mark) -> bool {
        if last_index >= CELL_COUNT || mark == Mark::Empty {
            return false;
        }

        let row_start = (last_index / SIDE) * SIDE;
        if (row_start..row_start + SIDE).all(|i| self.cells[i] == mark) {
            return true;
        }

        let col = last_index % SIDE;
        if (0..SIDE).all(|r| self.cells[col + r * SIDE] == mark) {
            return true;
        }

        if last_index % 2 == 0 {
            for diagonal in [MAIN_DIAGONAL, ANTI_DIAGONAL] {
                if diagonal.contains(&last_index) && self.line_is(&diagonal, mark) {
                    return true;
                }
            }
        }

        false
    }

    fn line_is(&self, line: &[usize; 3], mark: Mark) -> bool {
        line.iter().all(|&i| self.cells[i] == mark)
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const F: Mark = Mark::First;
    const S: Mark = Mark::Second;
    const E: Mark = Mark::Empty;

    fn board_from_code(mut code: usize) -> Board {
        let mut cells = [E; CELL_COUNT];
        for cell in cells.iter_mut() {
            *cell = match code % 3 {
                0 => E,
                1 => F,
                _ => S,
            };
            code /= 3;
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_available_moves_after_reset() {
        let mut board = Board::from_cells([F, S, F, S, F, S, S, F, S]);
        assert!(board.available_moves().is_empty());

        board.reset();
        assert_eq!(board.available_moves(), vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_available_moves_ascending() {
        let board = Board::from_cells([F, E, E, S, F, E, E, S, E]);
        assert_eq!(board.available_moves(), vec![1, 2, 5, 6, 8]);
    }

    #[test]
    fn test_apply_move_on_occupied_cell_leaves_board_unchanged() {
        let mut board = Board::new();
        board.apply_move(4, F).unwrap();
        let before = board;

        assert_eq!(board.apply_move(4, S), Err(MoveError::OccupiedCell(4)));
        assert_eq!(board, before);
        assert_eq!(board.get(4), Some(F));
    }

    #[test]
    fn test_apply_move_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(9, F), Err(MoveError::OutOfRange(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        assert!(!board.is_full());
        for (i, mark) in [F, S, F, S, F, S, S, F, S].into_iter().enumerate() {
            assert!(!board.is_full());
            board.apply_move(i, mark).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.empty_count(), 0);
        assert_eq!(board.count(F), 4);
        assert_eq!(board.count(S), 5);
    }

    #[test]
    fn test_check_win_every_canonical_line() {
        for line in LINES {
            for mark in [F, S] {
                let mut board = Board::new();
                for &i in &line {
                    board.apply_move(i, mark).unwrap();
                }
                for &i in &line {
                    assert!(board.check_win(i, mark), "line {line:?} via {i}");
                    assert!(!board.check_win(i, mark.opponent().unwrap()));
                }
            }
        }
    }

    #[test]
    fn test_check_win_matches_full_scan_on_every_board() {
        for code in 0..3usize.pow(CELL_COUNT as u32) {
            let board = board_from_code(code);
            for index in 0..CELL_COUNT {
                for mark in [F, S] {
                    let expected = LINES
                        .iter()
                        .filter(|line| line.contains(&index))
                        .any(|line| line.iter().all(|&i| board.cells()[i] == mark));
                    assert_eq!(
                        board.check_win(index, mark),
                        expected,
                        "board {:?}, index {index}, mark {mark:?}",
                        board.cells()
                    );
                }
            }
        }
    }

    #[test]
    fn test_check_win_ignores_lines_not_through_last_move() {
        let board = Board::from_cells([F, F, F, E, S, E, S, E, E]);
        assert!(board.check_win(1, F));
        assert!(!board.check_win(4, F));
        assert!(!board.check_win(8, F));
    }

    #[test]
    fn test_check_win_rejects_almost_lines() {
        let board = Board::from_cells([F, F, S, S, S, F, F, S, F]);
        for index in 0..CELL_COUNT {
            assert!(!board.check_win(index, F));
            assert!(!board.check_win(index, S));
        }
    }
}
