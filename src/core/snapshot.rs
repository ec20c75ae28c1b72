//! Snapshot module - save/load codec for a complete session
//!
//! A snapshot is the JSON object `{ score, time, state, tiles }` where
//! `tiles` lists all 81 cell colors in row-major order (y outer, x
//! inner), matching the board's own scan order. The codec is string
//! level only: the presentation layer owns file paths and disk I/O, so a
//! failed write can never corrupt the in-memory session.
//!
//! The spawn batch is deliberately not persisted; a restored session
//! draws a fresh one (see [`GameSession::restore`]).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::GameSession;
use crate::types::{Color, TurnPhase, CELL_COUNT};

/// A malformed or mismatched snapshot; callers fall back to a fresh
/// session
#[derive(Debug, Error)]
pub enum LoadError {
    /// Bad JSON, or an unrecognized color/phase tag
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The tile sequence does not cover the board
    #[error("snapshot has {found} tiles, expected {expected}")]
    BadTileCount { expected: usize, found: usize },
}

/// Serialized form of a full game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub score: u32,
    /// Elapsed seconds
    pub time: u32,
    pub state: TurnPhase,
    /// All cell colors, row-major
    pub tiles: Vec<Color>,
}

impl Snapshot {
    /// Capture the persistable parts of a session
    pub fn capture(session: &GameSession) -> Self {
        Self {
            score: session.score(),
            time: session.elapsed_secs(),
            state: session.phase(),
            tiles: session.board().cells().to_vec(),
        }
    }

    /// Encode to the JSON text form
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decode and validate the JSON text form
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let snapshot: Snapshot = serde_json::from_str(text)?;
        if snapshot.tiles.len() != CELL_COUNT {
            return Err(LoadError::BadTileCount {
                expected: CELL_COUNT,
                found: snapshot.tiles.len(),
            });
        }
        Ok(snapshot)
    }
}
