//! Core module - pure game logic with no I/O
//!
//! This module contains the whole simulation: the board, the run-matching
//! algorithm, the spawn randomizer, the turn state machine, and the
//! snapshot codec. It is:
//!
//! - **Deterministic**: the same seed replays the same game
//! - **Event-driven**: the machine advances only on explicit calls, never
//!   by polling
//! - **Headless**: rendering, input, and file I/O live in the caller
//!
//! # Module structure
//!
//! - [`board`]: 9x9 grid with a precomputed 8-direction adjacency table
//! - [`matching`]: straight-line run detection and the clear sweep
//! - [`rng`]: seeded LCG and the spawn color/position generator
//! - [`session`]: the Spawning/AwaitingMove/Matching/Paused turn cycle
//! - [`snapshot`]: JSON save/load of a complete session

pub mod board;
pub mod matching;
pub mod rng;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use board::{Board, OutOfRangeError};
pub use matching::{mark_runs, sweep, ClearSet};
pub use rng::{NoSpaceError, SimpleRng, SpawnGenerator};
pub use session::{GameSession, SpawnBatch};
pub use snapshot::{LoadError, Snapshot};
