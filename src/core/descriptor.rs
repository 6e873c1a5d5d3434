//! Piece descriptors - immutable shape and metadata per tetromino kind
//!
//! One descriptor per kind, covering all four rotation states. Rotations 1-3
//! are derived from the rotation-0 grid by quarter-turn clockwise rotation at
//! construction time, and the side insets are computed from the derived
//! grids. The whole table is built in const context, so an occupancy table
//! with an empty rotation fails the build instead of surfacing at runtime.

use crate::types::{PieceKind, Rotation, KIND_COUNT};

/// Side length of the largest bounding box (the I piece)
pub const MAX_DIMENSION: usize = 4;

/// Number of rotation states
pub const ROTATION_COUNT: usize = 4;

/// Bounding-box occupancy, padded to `MAX_DIMENSION`; cells outside the
/// piece's own dimension are always false
type OccupancyGrid = [[bool; MAX_DIMENSION]; MAX_DIMENSION];

/// Empty bounding-box margins on each side of a rotation's occupied cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insets {
    pub left: u8,
    pub right: u8,
    pub top: u8,
    pub bottom: u8,
}

/// Immutable shape/metadata record for one piece kind
#[derive(Debug)]
pub struct PieceDescriptor {
    kind: PieceKind,
    dimension: u8,
    occupancy: [OccupancyGrid; ROTATION_COUNT],
    insets: [Insets; ROTATION_COUNT],
    spawn_column: i8,
    spawn_row: i8,
}

impl PieceDescriptor {
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Side length of the bounding square (2 for O, 4 for I, 3 otherwise)
    pub fn dimension(&self) -> u8 {
        self.dimension
    }

    /// Whether the cell at (row, col) is filled in the given rotation.
    /// Coordinates outside the bounding box are reported empty.
    pub fn occupancy(&self, rotation: Rotation, row: usize, col: usize) -> bool {
        if row >= MAX_DIMENSION || col >= MAX_DIMENSION {
            return false;
        }
        self.occupancy[rotation.index()][row][col]
    }

    /// Empty margins around the occupied cells in the given rotation
    pub fn insets(&self, rotation: Rotation) -> Insets {
        self.insets[rotation.index()]
    }

    /// Board column of the bounding box's left edge at spawn (rotation 0)
    pub fn spawn_column(&self) -> i8 {
        self.spawn_column
    }

    /// Board row of the bounding box's top edge at spawn (rotation 0).
    /// Negative for pieces whose box starts above the visible top.
    pub fn spawn_row(&self) -> i8 {
        self.spawn_row
    }

    /// Iterate the (row, col) bounding-box offsets of the occupied cells
    pub fn occupied_cells(&self, rotation: Rotation) -> impl Iterator<Item = (i8, i8)> + '_ {
        let dim = self.dimension as usize;
        let grid = &self.occupancy[rotation.index()];
        (0..dim).flat_map(move |row| {
            (0..dim).filter_map(move |col| grid[row][col].then_some((row as i8, col as i8)))
        })
    }
}

/// Shared read-only lookup for a kind's descriptor
pub fn descriptor(kind: PieceKind) -> &'static PieceDescriptor {
    &DESCRIPTORS[kind.index()]
}

const fn grid(cells: &[(usize, usize)]) -> OccupancyGrid {
    let mut out = [[false; MAX_DIMENSION]; MAX_DIMENSION];
    let mut i = 0;
    while i < cells.len() {
        out[cells[i].0][cells[i].1] = true;
        i += 1;
    }
    out
}

/// Quarter-turn clockwise within the piece's own bounding box
const fn rotate_cw_grid(source: OccupancyGrid, dimension: usize) -> OccupancyGrid {
    let mut out = [[false; MAX_DIMENSION]; MAX_DIMENSION];
    let mut row = 0;
    while row < dimension {
        let mut col = 0;
        while col < dimension {
            out[row][col] = source[dimension - 1 - col][row];
            col += 1;
        }
        row += 1;
    }
    out
}

/// Smallest margins consistent with the occupancy grid. Evaluated in const
/// context, so an all-empty rotation is a build failure.
const fn compute_insets(source: OccupancyGrid, dimension: usize) -> Insets {
    let mut min_row = dimension;
    let mut max_row = 0;
    let mut min_col = dimension;
    let mut max_col = 0;
    let mut occupied = false;

    let mut row = 0;
    while row < dimension {
        let mut col = 0;
        while col < dimension {
            if source[row][col] {
                occupied = true;
                if row < min_row {
                    min_row = row;
                }
                if row > max_row {
                    max_row = row;
                }
                if col < min_col {
                    min_col = col;
                }
                if col > max_col {
                    max_col = col;
                }
            }
            col += 1;
        }
        row += 1;
    }

    if !occupied {
        panic!("piece rotation has no occupied cells");
    }

    Insets {
        left: min_col as u8,
        right: (dimension - 1 - max_col) as u8,
        top: min_row as u8,
        bottom: (dimension - 1 - max_row) as u8,
    }
}

const fn build(kind: PieceKind, dimension: usize, base: OccupancyGrid) -> PieceDescriptor {
    let r0 = base;
    let r1 = rotate_cw_grid(r0, dimension);
    let r2 = rotate_cw_grid(r1, dimension);
    let r3 = rotate_cw_grid(r2, dimension);

    let insets = [
        compute_insets(r0, dimension),
        compute_insets(r1, dimension),
        compute_insets(r2, dimension),
        compute_insets(r3, dimension),
    ];

    // Spawn centered horizontally; vertically so the topmost occupied row
    // lands on the board's top visible row.
    let spawn_column = 5 - (dimension as i8) / 2;
    let spawn_row = -(insets[0].top as i8);

    PieceDescriptor {
        kind,
        dimension: dimension as u8,
        occupancy: [r0, r1, r2, r3],
        insets,
        spawn_column,
        spawn_row,
    }
}

/// The descriptor table, indexed by `PieceKind::index()`
static DESCRIPTORS: [PieceDescriptor; KIND_COUNT] = [
    build(PieceKind::I, 4, grid(&[(1, 0), (1, 1), (1, 2), (1, 3)])),
    build(PieceKind::J, 3, grid(&[(0, 0), (1, 0), (1, 1), (1, 2)])),
    build(PieceKind::L, 3, grid(&[(0, 2), (1, 0), (1, 1), (1, 2)])),
    build(PieceKind::O, 2, grid(&[(0, 0), (0, 1), (1, 0), (1, 1)])),
    build(PieceKind::S, 3, grid(&[(0, 1), (0, 2), (1, 0), (1, 1)])),
    build(PieceKind::T, 3, grid(&[(0, 1), (1, 0), (1, 1), (1, 2)])),
    build(PieceKind::Z, 3, grid(&[(0, 0), (0, 1), (1, 1), (1, 2)])),
];
