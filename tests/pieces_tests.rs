//! Piece catalog, rotation and wall kick tests

use blockfall::core::{rotate, shape_for, wall_kick_offsets, Shape};
use blockfall::types::{Facing, PieceKind, Spin};

fn rows(shape: &Shape) -> Vec<Vec<u8>> {
    shape.rows().map(|r| r.to_vec()).collect()
}

#[test]
fn test_catalog_matrices() {
    assert_eq!(rows(&shape_for(PieceKind::T)), vec![vec![0, 1, 0], vec![1, 1, 1]]);
    assert_eq!(rows(&shape_for(PieceKind::O)), vec![vec![2, 2], vec![2, 2]]);
    assert_eq!(rows(&shape_for(PieceKind::L)), vec![vec![0, 0, 3], vec![3, 3, 3]]);
    assert_eq!(rows(&shape_for(PieceKind::J)), vec![vec![4, 0, 0], vec![4, 4, 4]]);
    assert_eq!(rows(&shape_for(PieceKind::I)), vec![vec![5, 5, 5, 5]]);
    assert_eq!(rows(&shape_for(PieceKind::S)), vec![vec![0, 6, 6], vec![6, 6, 0]]);
    assert_eq!(rows(&shape_for(PieceKind::Z)), vec![vec![7, 7, 0], vec![0, 7, 7]]);
}

#[test]
fn test_catalog_is_never_aliased() {
    let rotated = rotate(&shape_for(PieceKind::T), 1);
    assert_ne!(rotated, shape_for(PieceKind::T));
    assert_eq!(shape_for(PieceKind::T).width(), 3);
}

#[test]
fn test_rotate_clockwise_mapping() {
    // [[0,1,0],[1,1,1]] -> [[1,0],[1,1],[1,0]]
    let t = rotate(&shape_for(PieceKind::T), 1);
    assert_eq!(rows(&t), vec![vec![1, 0], vec![1, 1], vec![1, 0]]);

    // [[4,0,0],[4,4,4]] ccw -> [[0,4],[0,4],[4,4]]
    let j = rotate(&shape_for(PieceKind::J), -1);
    assert_eq!(rows(&j), vec![vec![0, 4], vec![0, 4], vec![4, 4]]);
}

#[test]
fn test_rotate_changes_dimensions() {
    let i = rotate(&shape_for(PieceKind::I), 1);
    assert_eq!((i.width(), i.height()), (1, 4));
}

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        for dir in [1, -1] {
            let start = shape_for(kind);
            let mut s = start.clone();
            for _ in 0..4 {
                s = rotate(&s, dir);
            }
            assert_eq!(s, start, "{:?} dir {}", kind, dir);
        }
    }
}

#[test]
fn test_rotate_then_reverse_is_identity() {
    let custom = Shape::from_rows(&[&[1, 2, 3, 4], &[5, 6, 7, 0]]).unwrap();
    assert_eq!(rotate(&rotate(&custom, 1), -1), custom);
    assert_eq!(rotate(&rotate(&custom, -1), 1), custom);

    for kind in PieceKind::ALL {
        let s = shape_for(kind);
        assert_eq!(rotate(&rotate(&s, 1), -1), s, "{:?}", kind);
    }
}

#[test]
fn test_square_never_kicks() {
    for from in [Facing::North, Facing::East, Facing::South, Facing::West] {
        for spin in [Spin::Cw, Spin::Ccw] {
            assert_eq!(
                wall_kick_offsets(PieceKind::O, from, from.turn(spin)),
                &[(0, 0)]
            );
        }
    }
}

type Kicks = [(i8, i8); 5];

const STANDARD: [(u8, u8, Kicks); 8] = [
    (0, 1, [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)]),
    (1, 0, [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)]),
    (1, 2, [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)]),
    (2, 1, [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)]),
    (2, 3, [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)]),
    (3, 2, [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)]),
    (3, 0, [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)]),
    (0, 3, [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)]),
];

const LINE: [(u8, u8, Kicks); 8] = [
    (0, 1, [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)]),
    (1, 0, [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)]),
    (1, 2, [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)]),
    (2, 1, [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)]),
    (2, 3, [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)]),
    (3, 2, [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)]),
    (3, 0, [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)]),
    (0, 3, [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)]),
];

#[test]
fn test_kick_tables() {
    let standard_kinds = [
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];
    for kind in standard_kinds {
        for (from, to, expected) in STANDARD {
            assert_eq!(
                wall_kick_offsets(kind, Facing::from_index(from), Facing::from_index(to)),
                &expected,
                "{:?} {}>{}",
                kind,
                from,
                to
            );
        }
    }

    for (from, to, expected) in LINE {
        assert_eq!(
            wall_kick_offsets(PieceKind::I, Facing::from_index(from), Facing::from_index(to)),
            &expected,
            "I {}>{}",
            from,
            to
        );
    }
}

#[test]
fn test_every_quarter_turn_has_five_kicks_starting_in_place() {
    for kind in PieceKind::ALL {
        if kind == PieceKind::O {
            continue;
        }
        for from in [Facing::North, Facing::East, Facing::South, Facing::West] {
            for spin in [Spin::Cw, Spin::Ccw] {
                let kicks = wall_kick_offsets(kind, from, from.turn(spin));
                assert_eq!(kicks.len(), 5);
                assert_eq!(kicks[0], (0, 0));
            }
        }
    }
}
