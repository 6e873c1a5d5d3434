//! Core module - pure engine logic with no UI, networking, or I/O
//!
//! Leaves first: descriptors (immutable shape tables), the seeded RNG and
//! generator, the board collaborator, and on top of them the piece
//! controller state machine.

pub mod board;
pub mod controller;
pub mod descriptor;
pub mod generator;
pub mod rng;

// Re-export commonly used types
pub use board::{Board, BoardQuery};
pub use controller::PieceController;
pub use descriptor::{descriptor, Insets, PieceDescriptor, MAX_DIMENSION, ROTATION_COUNT};
pub use generator::PieceGenerator;
pub use rng::SimpleRng;
