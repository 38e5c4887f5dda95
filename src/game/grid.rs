//! The 6×5 letter grid

use crate::core::WORD_LENGTH;

/// Number of guesses per game
pub const MAX_GUESSES: usize = 6;

/// Letter cells, one row per guess
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<char>; WORD_LENGTH]; MAX_GUESSES],
}

impl Grid {
    /// A blank grid
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Letter at a cell, `None` when blank or out of range
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &[Option<char>; WORD_LENGTH] {
        &self.cells[row]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, letter: char) {
        self.cells[row][col] = Some(letter);
    }

    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = None;
    }

    /// Letters of a row joined in order, blanks skipped
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.cells[row].iter().flatten().collect()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_blank() {
        let grid = Grid::new();
        assert!(grid.is_blank());
        assert_eq!(grid.cell(0, 0), None);
        assert_eq!(grid.row_text(5), "");
    }

    #[test]
    fn set_and_clear_cells() {
        let mut grid = Grid::new();
        grid.set(2, 0, 'a');
        grid.set(2, 1, 'b');
        assert_eq!(grid.cell(2, 1), Some('b'));
        assert_eq!(grid.row_text(2), "ab");
        assert!(!grid.is_blank());

        grid.clear(2, 1);
        assert_eq!(grid.row_text(2), "a");
    }

    #[test]
    fn out_of_range_cells_are_blank() {
        let grid = Grid::new();
        assert_eq!(grid.cell(MAX_GUESSES, 0), None);
        assert_eq!(grid.cell(0, WORD_LENGTH), None);
    }
}
