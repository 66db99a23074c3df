//! Colony grid - a square boolean matrix
//!
//! The grid is a 2D array of cells, row-major, with a runtime-mutable
//! dimension. Two accessor families coexist on purpose: the public
//! [`Grid::get`]/[`Grid::set`] pair silently tolerates any coordinate
//! (edits arrive from pointer-derived positions that may fall outside the
//! grid mid-drag), while the crate-internal in-range accessors used by the
//! rule evaluation panic on escape, since the step path computes every
//! index by wraparound and can never legitimately go out of bounds.

/// A square grid of boolean cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Cells in row-major order, `size * size` entries
    cells: Vec<bool>,
    /// Grid dimension (rows == cols)
    size: usize,
}

impl Grid {
    /// Create a new all-dead grid with the given dimension
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![false; size * size],
            size,
        }
    }

    /// Grid dimension
    pub fn size(&self) -> usize {
        self.size
    }

    /// Read a cell. Out-of-range coordinates read as dead, never an error.
    pub fn get(&self, row: isize, col: isize) -> bool {
        if row < 0 || row as usize >= self.size || col < 0 || col as usize >= self.size {
            return false;
        }
        self.cells[row as usize * self.size + col as usize]
    }

    /// Write a cell. Out-of-range coordinates are ignored, never an error.
    pub fn set(&mut self, row: isize, col: isize, alive: bool) {
        if row < 0 || row as usize >= self.size || col < 0 || col as usize >= self.size {
            return;
        }
        self.cells[row as usize * self.size + col as usize] = alive;
    }

    /// True iff every cell is dead
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&alive| !alive)
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// In-range read. Panics if the coordinate escapes the grid.
    pub(crate) fn alive(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.size && col < self.size,
            "grid read out of range: ({}, {}) on size {}",
            row,
            col,
            self.size
        );
        self.cells[row * self.size + col]
    }

    /// In-range write. Panics if the coordinate escapes the grid.
    pub(crate) fn mark(&mut self, row: usize, col: usize, alive: bool) {
        assert!(
            row < self.size && col < self.size,
            "grid write out of range: ({}, {}) on size {}",
            row,
            col,
            self.size
        );
        self.cells[row * self.size + col] = alive;
    }
}
