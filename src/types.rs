//! Core types shared across the engine
//! This module contains pure data types with no game logic attached

use thiserror::Error;

/// Board extents (visible grid)
pub const COLUMN_COUNT: u8 = 10;
pub const ROW_COUNT: u8 = 20;

/// Number of distinct piece kinds
pub const KIND_COUNT: usize = 7;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in ordinal order (the order `kind_at` indexes by)
    pub const ALL: [PieceKind; KIND_COUNT] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Ordinal of this kind within [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Rotation states (North = spawn orientation, successors are clockwise)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// All rotation states in index order
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotation index in `0..4`
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Rotation state for an index in `0..4`
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Rotate clockwise
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Engine error taxonomy.
///
/// Deliberately narrow: placement and rotation failures are not errors, they
/// are ordinary rejections reported through `bool` status returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An ordinal outside the valid set of piece kinds
    #[error("kind index {index} out of range (kind count is {count})")]
    OutOfRange { index: usize, count: usize },
    /// An operation attempted while the controller is not in the state it
    /// requires
    #[error("operation not valid in the controller's current state")]
    InvalidState,
}
