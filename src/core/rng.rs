//! RNG module - spawn randomization
//!
//! Every turn spawns 3 pieces: colors are drawn ahead of time (so the
//! next batch can be previewed), positions are drawn only when the spawn
//! step runs. All draws come from a seeded LCG so a given seed replays
//! the same game.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::core::Board;
use crate::types::{Color, Coord, SPAWN_BATCH_LEN};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Asked to place a piece on a board with no empty cell.
///
/// Callers detect game over before spawning, so hitting this is an
/// internal invariant violation rather than a player-facing condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no empty cell available to place a spawned piece")]
pub struct NoSpaceError;

/// Produces spawn colors and positions from an injectable seeded source
#[derive(Debug, Clone)]
pub struct SpawnGenerator {
    rng: SimpleRng,
}

impl SpawnGenerator {
    /// Create a generator with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the colors for one spawn batch, each independently and
    /// uniformly from the playable colors (never `Empty`)
    pub fn generate_colors(&mut self) -> [Color; SPAWN_BATCH_LEN] {
        let mut colors = [Color::A; SPAWN_BATCH_LEN];
        for slot in &mut colors {
            *slot = Color::PLAYABLE[self.rng.next_range(Color::PLAYABLE.len() as u32) as usize];
        }
        colors
    }

    /// Choose distinct empty-cell targets for one spawn batch.
    ///
    /// Each slot draws uniformly from the board's empty cells, rejecting
    /// cells already claimed by an earlier slot in this batch. When fewer
    /// empty cells remain than batch slots, the batch is truncated to the
    /// remaining empties; the spawn that fills the board is what trips
    /// game-over detection. Errors only when the board has no empty cell
    /// at all.
    pub fn generate_positions(
        &mut self,
        board: &Board,
    ) -> Result<ArrayVec<Coord, SPAWN_BATCH_LEN>, NoSpaceError> {
        let empties = board.empty_cells();
        if empties.is_empty() {
            return Err(NoSpaceError);
        }

        let slots = empties.len().min(SPAWN_BATCH_LEN);
        let mut chosen: ArrayVec<Coord, SPAWN_BATCH_LEN> = ArrayVec::new();
        while chosen.len() < slots {
            let pick = empties[self.rng.next_range(empties.len() as u32) as usize];
            if !chosen.contains(&pick) {
                chosen.push(pick);
            }
        }
        Ok(chosen)
    }

    /// Get the current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state
    }
}
