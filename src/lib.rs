//! Falling-block puzzle engine core.
//!
//! Tracks the active and next piece, validates placement against a fixed
//! grid, resolves rotation requests with a bounding-box clamp, and sequences
//! the stream of upcoming piece kinds. Rendering, input wiring, scoring,
//! and persistence are external collaborators; the engine exposes read-only
//! accessors for them and consumes only the board's placement contract.

pub mod core;
pub mod types;

pub use crate::core::{Board, BoardQuery, PieceController, PieceGenerator};
pub use crate::types::{EngineError, PieceKind, Rotation};
