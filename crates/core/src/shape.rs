//! Shape module - rectangular piece matrices
//!
//! A shape is a small row-major matrix of cells (at most 4x4) stored inline, so
//! rotating or copying a piece never touches the heap. Rotation builds a new
//! matrix by index mapping and works for non-square shapes (h x w -> w x h).

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::types::{Cell, Spin, EMPTY, MAX_SHAPE_CELLS, MAX_SHAPE_SIDE};

/// Rectangular matrix of cells; nonzero cells are occupied
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Shape {
    width: u8,
    height: u8,
    /// Row-major, `width * height` entries
    cells: ArrayVec<Cell, MAX_SHAPE_CELLS>,
}

impl Shape {
    /// Build a shape from fixed-size rows (used by the piece catalog)
    pub(crate) fn from_template<const W: usize, const H: usize>(rows: [[Cell; W]; H]) -> Self {
        debug_assert!(W > 0 && W <= MAX_SHAPE_SIDE && H > 0 && H <= MAX_SHAPE_SIDE);
        let mut cells = ArrayVec::new();
        cells.extend(rows.iter().flatten().copied());
        Self {
            width: W as u8,
            height: H as u8,
            cells,
        }
    }

    /// Build a shape from arbitrary rows.
    ///
    /// Returns `None` if there are no rows, the rows are ragged, or either side
    /// exceeds 4 cells.
    pub fn from_rows(rows: &[&[Cell]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || width > MAX_SHAPE_SIDE || height > MAX_SHAPE_SIDE {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut cells = ArrayVec::new();
        for row in rows {
            cells.try_extend_from_slice(row).ok()?;
        }
        Some(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell at shape-relative (x, y); empty outside the matrix
    pub fn get(&self, x: u8, y: u8) -> Cell {
        if x >= self.width || y >= self.height {
            return EMPTY;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width as usize)
    }

    /// Occupied cells as `(x, y, value)`, row by row
    pub fn occupied(&self) -> impl Iterator<Item = (u8, u8, Cell)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell != EMPTY)
            .map(move |(i, cell)| ((i % width) as u8, (i / width) as u8, *cell))
    }

    /// Quarter-turn copy of this shape.
    ///
    /// Clockwise: `dst[i][j] = src[h-1-j][i]`.
    /// Counter-clockwise: `dst[i][j] = src[j][w-1-i]`.
    pub fn rotated(&self, spin: Spin) -> Shape {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut cells = ArrayVec::new();

        // The result has `w` rows of `h` cells.
        for i in 0..w {
            for j in 0..h {
                let src = match spin {
                    Spin::Cw => (h - 1 - j) * w + i,
                    Spin::Ccw => j * w + (w - 1 - i),
                };
                cells.push(self.cells[src]);
            }
        }

        Shape {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}
