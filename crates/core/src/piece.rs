//! The falling piece and the queued next piece

use crate::pieces::shape_for;
use crate::rng::SimpleRng;
use crate::shape::Shape;
use crate::types::{Facing, PieceKind};

/// Active falling piece
///
/// `x`/`y` is the top-left corner of the shape matrix in board coordinates.
/// Coordinates are signed so kicks and drops can probe past the edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i16,
    pub y: i16,
    pub facing: Facing,
}

impl ActivePiece {
    /// Place a piece at the spawn position for a board `cols` wide:
    /// top row, horizontally centred (rounded toward the left), facing north.
    pub fn spawn(kind: PieceKind, shape: Shape, cols: u8) -> Self {
        let x = (cols as i16 - shape.width() as i16).div_euclid(2);
        Self {
            kind,
            shape,
            x,
            y: 0,
            facing: Facing::North,
        }
    }

    /// Copy of this piece moved by (dx, dy)
    pub fn shifted(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    /// Occupied cells in board coordinates as `(x, y, value)`
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16, u8)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy, v)| (self.x + dx as i16, self.y + dy as i16, v))
    }
}

/// Lookahead piece shown to the player
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NextPiece {
    pub kind: PieceKind,
    pub shape: Shape,
}

impl NextPiece {
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: shape_for(kind),
        }
    }

    pub fn random(rng: &mut SimpleRng) -> Self {
        Self::new(rng.next_kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_centres_by_shape_width() {
        let t = ActivePiece::spawn(PieceKind::T, shape_for(PieceKind::T), 10);
        assert_eq!((t.x, t.y), (3, 0));
        assert_eq!(t.facing, Facing::North);

        let o = ActivePiece::spawn(PieceKind::O, shape_for(PieceKind::O), 10);
        assert_eq!(o.x, 4);

        let i = ActivePiece::spawn(PieceKind::I, shape_for(PieceKind::I), 10);
        assert_eq!(i.x, 3);

        // floor((7 - 4) / 2) = 1
        let i = ActivePiece::spawn(PieceKind::I, shape_for(PieceKind::I), 7);
        assert_eq!(i.x, 1);
    }

    #[test]
    fn test_cells_are_offset_by_position() {
        let o = ActivePiece::spawn(PieceKind::O, shape_for(PieceKind::O), 10).shifted(-4, 5);
        let cells: Vec<_> = o.cells().collect();
        assert_eq!(cells, vec![(0, 5, 2), (1, 5, 2), (0, 6, 2), (1, 6, 2)]);
    }
}
