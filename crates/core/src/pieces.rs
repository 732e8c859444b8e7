//! Pieces module - the tetromino catalog and wall kick tables
//!
//! Spawn matrices are fixed templates: [`shape_for`] hands out a fresh copy every
//! time, so callers can never alter the catalog.
//!
//! Kick offsets follow the Super Rotation System (https://tetris.wiki/SRS) with
//! the y axis growing downward. Offsets are tried in order after a rotation and
//! the first one that fits wins.

use crate::shape::Shape;
use crate::types::{Facing, PieceKind};

/// Spawn matrix for a piece kind
pub fn shape_for(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::T => Shape::from_template([[0, 1, 0], [1, 1, 1]]),
        PieceKind::O => Shape::from_template([[2, 2], [2, 2]]),
        PieceKind::L => Shape::from_template([[0, 0, 3], [3, 3, 3]]),
        PieceKind::J => Shape::from_template([[4, 0, 0], [4, 4, 4]]),
        PieceKind::I => Shape::from_template([[5, 5, 5, 5]]),
        PieceKind::S => Shape::from_template([[0, 6, 6], [6, 6, 0]]),
        PieceKind::Z => Shape::from_template([[7, 7, 0], [0, 7, 7]]),
    }
}

/// Which kick table a piece uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum KickCategory {
    /// O: never kicks
    Square,
    /// I: its own table
    Line,
    /// T, L, J, S, Z share one table
    Standard,
}

fn kick_category(kind: PieceKind) -> KickCategory {
    match kind {
        PieceKind::O => KickCategory::Square,
        PieceKind::I => KickCategory::Line,
        _ => KickCategory::Standard,
    }
}

/// Offset applied to the piece position: (dx, dy)
pub type KickOffset = (i8, i8);

/// Five offsets for each of the eight quarter-turn transitions
pub type KickTable = [[KickOffset; 5]; 8];

/// Used for the square and for transitions that are not a single quarter-turn
static NO_KICK: [KickOffset; 1] = [(0, 0)];

static STANDARD_KICKS: KickTable = [
    // 0>1
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 0>3
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 1>0
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 1>2
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 2>1
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 2>3
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 3>2
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 3>0
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
];

static LINE_KICKS: KickTable = [
    // 0>1
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 0>3
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 1>0
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 1>2
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 2>1
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 2>3
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 3>2
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 3>0
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
];

/// Row of a [`KickTable`] for a transition, `None` unless it is a single quarter-turn
fn transition_index(from: Facing, to: Facing) -> Option<usize> {
    match (from, to) {
        (Facing::North, Facing::East) => Some(0),
        (Facing::North, Facing::West) => Some(1),
        (Facing::East, Facing::North) => Some(2),
        (Facing::East, Facing::South) => Some(3),
        (Facing::South, Facing::East) => Some(4),
        (Facing::South, Facing::West) => Some(5),
        (Facing::West, Facing::South) => Some(6),
        (Facing::West, Facing::North) => Some(7),
        _ => None,
    }
}

/// Ordered candidate offsets to try after rotating `kind` from `from` to `to`
pub fn wall_kick_offsets(kind: PieceKind, from: Facing, to: Facing) -> &'static [KickOffset] {
    let table = match kick_category(kind) {
        KickCategory::Square => return &NO_KICK,
        KickCategory::Line => &LINE_KICKS,
        KickCategory::Standard => &STANDARD_KICKS,
    };

    match transition_index(from, to) {
        Some(i) => &table[i],
        None => &NO_KICK,
    }
}
