//! Collision and transform engine
//!
//! Pure functions over a board and a piece: the collision test, matrix rotation
//! and wall-kick resolution. Nothing here mutates its inputs.

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::pieces::wall_kick_offsets;
use crate::shape::Shape;
use crate::types::Spin;

/// True iff any occupied cell of `piece` lies outside the grid (on either axis)
/// or on a nonzero board cell.
pub fn collides(board: &Board, piece: &ActivePiece) -> bool {
    piece.cells().any(|(x, y, _)| !board.is_open(x, y))
}

/// Rotate a shape a quarter-turn: clockwise for `dir > 0`, counter-clockwise otherwise.
pub fn rotate(shape: &Shape, dir: i8) -> Shape {
    shape.rotated(Spin::from_dir(dir))
}

/// Rotate `piece` with wall kicks.
///
/// The rotated shape is tried at each kick offset in table order; the first
/// placement that does not collide is returned with its new facing. `None`
/// means every offset collided and the piece should stay as it was.
pub fn try_rotate(board: &Board, piece: &ActivePiece, spin: Spin) -> Option<ActivePiece> {
    let facing = piece.facing.turn(spin);
    let mut candidate = ActivePiece {
        kind: piece.kind,
        shape: piece.shape.rotated(spin),
        x: piece.x,
        y: piece.y,
        facing,
    };

    for &(dx, dy) in wall_kick_offsets(piece.kind, piece.facing, facing) {
        candidate.x = piece.x + dx as i16;
        candidate.y = piece.y + dy as i16;
        if !collides(board, &candidate) {
            return Some(candidate);
        }
    }

    None
}
