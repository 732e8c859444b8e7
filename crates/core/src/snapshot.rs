//! Read-only view of a session for renderers and logs

use serde::Serialize;

use crate::piece::{ActivePiece, NextPiece};
use crate::shape::Shape;
use crate::types::{Cell, Facing, PieceKind, EMPTY};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub facing: Facing,
    pub x: i16,
    pub y: i16,
    pub shape: Shape,
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(value: &ActivePiece) -> Self {
        Self {
            kind: value.kind,
            facing: value.facing,
            x: value.x,
            y: value.y,
            shape: value.shape.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
}

impl From<&NextPiece> for NextSnapshot {
    fn from(value: &NextPiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape.clone(),
        }
    }
}

/// Everything a renderer needs for one frame.
///
/// `board` holds the locked cells only, row-major; the active piece is drawn
/// on top of it from `active`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub cols: u8,
    pub rows: u8,
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub next: Option<NextSnapshot>,
    pub score: u32,
    pub paused: bool,
    /// Gravity accumulator at the time of the snapshot
    pub drop_ms: u32,
    pub lines_cleared: u32,
    pub pieces_locked: u32,
}

impl Snapshot {
    /// Locked cell at (x, y); `EMPTY` outside the board
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.cols as usize || y >= self.rows as usize {
            return EMPTY;
        }
        self.board
            .get(y * self.cols as usize + x)
            .copied()
            .unwrap_or(EMPTY)
    }

    /// Board rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.board.chunks(self.cols.max(1) as usize)
    }

    /// Cell at (x, y) with the active piece drawn over the locked board
    pub fn visible_cell(&self, x: usize, y: usize) -> Cell {
        if let Some(active) = &self.active {
            let dx = x as i32 - active.x as i32;
            let dy = y as i32 - active.y as i32;
            if (0..active.shape.width() as i32).contains(&dx)
                && (0..active.shape.height() as i32).contains(&dy)
            {
                let v = active.shape.get(dx as u8, dy as u8);
                if v != EMPTY {
                    return v;
                }
            }
        }
        self.cell(x, y)
    }
}
