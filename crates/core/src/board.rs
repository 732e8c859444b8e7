//! Board module - manages the game grid
//!
//! The board is a `cols` x `rows` grid (10x20 by default) of cell values, stored
//! as a flat row-major vector. Row 0 is the top.
//!
//! Every lookup is bounds-checked on both axes; what "outside the grid" means is
//! up to the caller (the collision check treats it as blocked).

use crate::collision::collides;
use crate::piece::ActivePiece;
use crate::types::{Cell, DEFAULT_COLS, DEFAULT_ROWS, EMPTY, MAX_CELL};

/// Result of one row sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sweep {
    /// Number of rows removed
    pub rows_cleared: u32,
    /// Points earned: base, then doubled for each further row in the same sweep
    pub score: u32,
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: u8,
    rows: u8,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new(cols: u8, rows: u8) -> Self {
        Self {
            cols,
            rows,
            cells: vec![EMPTY; cols as usize * rows as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.cols as i16 || y < 0 || y >= self.rows as i16 {
            return None;
        }
        Some(y as usize * self.cols as usize + x as usize)
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Cell at (x, y), `None` if out of bounds
    pub fn cell_at(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y).
    /// Returns false if out of bounds or the value is not a valid cell.
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        if cell > MAX_CELL {
            return false;
        }
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    pub fn is_open(&self, x: i16, y: i16) -> bool {
        self.cell_at(x, y) == Some(EMPTY)
    }

    /// Row `y` as a slice, `None` if out of bounds
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.rows as usize {
            return None;
        }
        let start = y * self.cols as usize;
        Some(&self.cells[start..start + self.cols as usize])
    }

    /// Rows top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols.max(1) as usize)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| !row.is_empty() && row.iter().all(|&c| c != EMPTY))
    }

    /// Remove row `y`, shift every row above it down by one, and empty the top row
    fn remove_row(&mut self, y: usize) {
        let width = self.cols as usize;
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells.copy_within(src_start..src_start + width, row * width);
        }
        self.cells[..width].fill(EMPTY);
    }

    /// Write every occupied cell of `piece` into the board.
    ///
    /// The piece is expected to be at a non-colliding position; cells that land
    /// outside the grid are skipped.
    pub fn merge(&mut self, piece: &ActivePiece) {
        for (x, y, value) in piece.cells() {
            self.set(x, y, value);
        }
    }

    /// Remove completed rows, scanning bottom-up.
    ///
    /// Row 0 is never examined. After a removal the rows above have shifted down
    /// into the same index, so that index is examined again before moving up.
    /// The first row removed earns `base`, each further row twice the previous.
    pub fn sweep_completed_rows(&mut self, base: u32) -> Sweep {
        let mut sweep = Sweep::default();
        let mut reward = base;
        let mut y = self.rows as usize;

        while y > 1 {
            let candidate = y - 1;
            if self.is_row_full(candidate) {
                self.remove_row(candidate);
                sweep.rows_cleared += 1;
                sweep.score = sweep.score.saturating_add(reward);
                reward = reward.saturating_mul(2);
                continue;
            }
            y -= 1;
        }

        sweep
    }

    /// Clear the board if `piece` collides where it stands.
    /// Returns whether the board was cleared.
    pub fn reset_if_blocked(&mut self, piece: &ActivePiece) -> bool {
        if collides(self, piece) {
            self.clear();
            return true;
        }
        false
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == EMPTY)
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_COLS, DEFAULT_ROWS)
    }
}
