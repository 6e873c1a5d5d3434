//! Piece generator - sequences the stream of upcoming piece kinds
//!
//! Each draw is uniform over the full kind set, independent, with
//! replacement: immediate repeats are possible and a kind may sit out a
//! short window. This is intentionally not a fairness-balanced "7-bag"
//! randomizer; the draw stream matches the original game's behavior.

use crate::core::rng::SimpleRng;
use crate::types::{EngineError, PieceKind, KIND_COUNT};

/// Draws piece kinds uniformly at random and resolves kind ordinals
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
}

impl PieceGenerator {
    /// Create a generator with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next kind, uniformly with replacement
    pub fn next_kind(&mut self) -> PieceKind {
        let index = self.rng.next_range(KIND_COUNT as u32) as usize;
        PieceKind::ALL[index]
    }

    /// Pure ordinal lookup; does not consume entropy
    pub fn kind_at(&self, index: usize) -> Result<PieceKind, EngineError> {
        PieceKind::ALL
            .get(index)
            .copied()
            .ok_or(EngineError::OutOfRange {
                index,
                count: KIND_COUNT,
            })
    }

    /// Number of distinct kinds the generator draws from
    pub fn kind_count(&self) -> usize {
        KIND_COUNT
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
