//! Descriptor table tests - occupancy, insets, and spawn metadata

use blockfall::core::{descriptor, MAX_DIMENSION};
use blockfall::types::{PieceKind, Rotation};

// ============== Dimension Tests ==============

#[test]
fn test_dimensions() {
    assert_eq!(descriptor(PieceKind::I).dimension(), 4);
    assert_eq!(descriptor(PieceKind::O).dimension(), 2);

    for kind in [
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ] {
        assert_eq!(descriptor(kind).dimension(), 3, "{:?}", kind);
    }
}

// ============== Occupancy Tests ==============

#[test]
fn test_every_rotation_has_four_cells() {
    for kind in PieceKind::ALL {
        let desc = descriptor(kind);
        for rotation in Rotation::ALL {
            let count = desc.occupied_cells(rotation).count();
            assert_eq!(count, 4, "{:?} {:?} should have 4 occupied cells", kind, rotation);
        }
    }
}

#[test]
fn test_occupancy_outside_box_is_empty() {
    for kind in PieceKind::ALL {
        let desc = descriptor(kind);
        let dim = desc.dimension() as usize;
        for rotation in Rotation::ALL {
            for row in dim..MAX_DIMENSION + 1 {
                for col in 0..MAX_DIMENSION + 1 {
                    assert!(!desc.occupancy(rotation, row, col));
                    assert!(!desc.occupancy(rotation, col, row));
                }
            }
        }
    }
}

#[test]
fn test_i_piece_rotation_zero_row() {
    let desc = descriptor(PieceKind::I);
    // Horizontal bar on box row 1
    for col in 0..4 {
        assert!(desc.occupancy(Rotation::North, 1, col));
    }
    for col in 0..4 {
        assert!(!desc.occupancy(Rotation::North, 0, col));
        assert!(!desc.occupancy(Rotation::North, 2, col));
        assert!(!desc.occupancy(Rotation::North, 3, col));
    }
}

#[test]
fn test_i_piece_east_column() {
    let desc = descriptor(PieceKind::I);
    // Clockwise quarter turn of the bar: vertical on box column 2
    for row in 0..4 {
        assert!(desc.occupancy(Rotation::East, row, 2));
        assert!(!desc.occupancy(Rotation::East, row, 1));
    }
}

#[test]
fn test_o_piece_identical_rotations() {
    let desc = descriptor(PieceKind::O);
    for rotation in Rotation::ALL {
        for row in 0..2 {
            for col in 0..2 {
                assert!(desc.occupancy(rotation, row, col));
            }
        }
    }
}

#[test]
fn test_rotation_preserves_cell_count() {
    for kind in PieceKind::ALL {
        let desc = descriptor(kind);
        let north = desc.occupied_cells(Rotation::North).count();
        for rotation in Rotation::ALL {
            assert_eq!(desc.occupied_cells(rotation).count(), north);
        }
    }
}

// ============== Inset Tests ==============

#[test]
fn test_insets_match_occupancy() {
    // The stored insets must equal the smallest margins recomputed from the
    // occupancy table
    for kind in PieceKind::ALL {
        let desc = descriptor(kind);
        let dim = desc.dimension() as usize;

        for rotation in Rotation::ALL {
            let mut min_row = dim;
            let mut max_row = 0;
            let mut min_col = dim;
            let mut max_col = 0;
            for row in 0..dim {
                for col in 0..dim {
                    if desc.occupancy(rotation, row, col) {
                        min_row = min_row.min(row);
                        max_row = max_row.max(row);
                        min_col = min_col.min(col);
                        max_col = max_col.max(col);
                    }
                }
            }

            let insets = desc.insets(rotation);
            assert_eq!(insets.top as usize, min_row, "{:?} {:?}", kind, rotation);
            assert_eq!(insets.bottom as usize, dim - 1 - max_row, "{:?} {:?}", kind, rotation);
            assert_eq!(insets.left as usize, min_col, "{:?} {:?}", kind, rotation);
            assert_eq!(insets.right as usize, dim - 1 - max_col, "{:?} {:?}", kind, rotation);
        }
    }
}

#[test]
fn test_no_occupied_cell_inside_inset_margin() {
    for kind in PieceKind::ALL {
        let desc = descriptor(kind);
        let dim = desc.dimension() as usize;

        for rotation in Rotation::ALL {
            let insets = desc.insets(rotation);
            for (row, col) in desc.occupied_cells(rotation) {
                let (row, col) = (row as usize, col as usize);
                assert!(col >= insets.left as usize);
                assert!(col < dim - insets.right as usize);
                assert!(row >= insets.top as usize);
                assert!(row < dim - insets.bottom as usize);
            }
        }
    }
}

#[test]
fn test_i_piece_insets() {
    let desc = descriptor(PieceKind::I);

    let north = desc.insets(Rotation::North);
    assert_eq!((north.left, north.right, north.top, north.bottom), (0, 0, 1, 2));

    let east = desc.insets(Rotation::East);
    assert_eq!((east.left, east.right, east.top, east.bottom), (2, 1, 0, 0));
}

// ============== Spawn Tests ==============

#[test]
fn test_spawn_columns_centered() {
    assert_eq!(descriptor(PieceKind::I).spawn_column(), 3);
    assert_eq!(descriptor(PieceKind::O).spawn_column(), 4);
    assert_eq!(descriptor(PieceKind::T).spawn_column(), 4);
    assert_eq!(descriptor(PieceKind::J).spawn_column(), 4);
}

#[test]
fn test_spawn_row_puts_top_cell_on_row_zero() {
    for kind in PieceKind::ALL {
        let desc = descriptor(kind);
        let top = desc.insets(Rotation::North).top as i8;
        assert_eq!(desc.spawn_row() + top, 0, "{:?}", kind);
    }
}
