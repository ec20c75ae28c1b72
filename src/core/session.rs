//! Session module - the turn state machine
//!
//! Sequences the Spawning -> AwaitingMove -> Matching cycle over one
//! board, owns the score and clock counters, and exposes the single
//! external mutation entry point (`attempt_move`) plus pause/resume and
//! snapshot restore.
//!
//! The machine is event-driven: an external driver calls [`advance`]
//! once per tick and [`tick_time`] as wall-clock seconds pass. Neither
//! call blocks; `AwaitingMove` and `Paused` are idle states that simply
//! do nothing until `attempt_move` or `resume` arrives.
//!
//! [`advance`]: GameSession::advance
//! [`tick_time`]: GameSession::tick_time

use arrayvec::ArrayVec;

use crate::core::matching;
use crate::core::snapshot::{LoadError, Snapshot};
use crate::core::{Board, SpawnGenerator};
use crate::types::{Color, Coord, TurnPhase, CELL_COUNT, SPAWN_BATCH_LEN};

/// Pending spawn: 3 colors drawn ahead for preview, positions chosen
/// only when the spawn step is prepared
#[derive(Debug, Clone)]
pub struct SpawnBatch {
    colors: [Color; SPAWN_BATCH_LEN],
    positions: Option<ArrayVec<Coord, SPAWN_BATCH_LEN>>,
}

impl SpawnBatch {
    fn new(colors: [Color; SPAWN_BATCH_LEN]) -> Self {
        Self {
            colors,
            positions: None,
        }
    }

    /// Colors of the pending batch (the spawn preview)
    pub fn colors(&self) -> &[Color; SPAWN_BATCH_LEN] {
        &self.colors
    }
}

/// Complete game session: board, pending spawn, score, clock, and phase
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    spawner: SpawnGenerator,
    batch: SpawnBatch,
    phase: TurnPhase,
    /// Phase to return to when leaving `Paused`
    resume_phase: Option<TurnPhase>,
    score: u32,
    elapsed_secs: u32,
    game_over: bool,
}

impl GameSession {
    /// Create a new session with the given RNG seed.
    ///
    /// The session starts in `Spawning` with the first batch's colors
    /// already drawn; the first `advance` places them.
    pub fn new(seed: u32) -> Self {
        let mut spawner = SpawnGenerator::new(seed);
        let batch = SpawnBatch::new(spawner.generate_colors());

        Self {
            board: Board::new(),
            spawner,
            batch,
            phase: TurnPhase::Spawning,
            resume_phase: None,
            score: 0,
            elapsed_secs: 0,
            game_over: false,
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Colors of the next spawn batch (for the preview display)
    pub fn preview_colors(&self) -> &[Color; SPAWN_BATCH_LEN] {
        self.batch.colors()
    }

    /// Advance the state machine by one step.
    ///
    /// Returns `true` if the phase changed. `AwaitingMove` and `Paused`
    /// are idle: calling this every frame while in them is a no-op.
    pub fn advance(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        match self.phase {
            TurnPhase::Spawning => self.step_spawn(),
            TurnPhase::AwaitingMove | TurnPhase::Paused => false,
            TurnPhase::Matching => self.step_match(),
        }
    }

    /// Spawning step: place the pending batch, draw the next preview
    /// colors, then check for a full board
    fn step_spawn(&mut self) -> bool {
        // Positions are normally chosen by the preceding Matching step;
        // the first turn and the first turn after a restore choose here.
        let positions = match self.batch.positions.take() {
            Some(positions) => positions,
            None => match self.spawner.generate_positions(&self.board) {
                Ok(positions) => positions,
                Err(_) => {
                    // Board already full; latch the terminal state.
                    self.game_over = true;
                    return false;
                }
            },
        };

        for (slot, pos) in positions.iter().enumerate() {
            // Targets come from empty_cells, so this cannot be out of range.
            let _ = self.board.set_color(pos.x, pos.y, self.batch.colors[slot]);
        }

        self.batch = SpawnBatch::new(self.spawner.generate_colors());

        if self.board.occupied_count() == CELL_COUNT {
            self.game_over = true;
            return false;
        }

        self.phase = TurnPhase::AwaitingMove;
        true
    }

    /// Matching step: clear qualifying runs, score them, and prepare the
    /// next batch's positions
    fn step_match(&mut self) -> bool {
        let cleared = matching::sweep(&mut self.board);
        self.score += cleared;

        // The board cannot be full here: a full board ends the session at
        // spawn time, and moves do not change occupancy.
        self.batch.positions = self.spawner.generate_positions(&self.board).ok();

        self.phase = TurnPhase::Spawning;
        true
    }

    /// Attempt to relocate one piece, completing the player's turn.
    ///
    /// Succeeds only when the phase is `AwaitingMove`, `from` holds a
    /// piece, `to` is empty, and the two cells share a row or column
    /// (adjacency is not required). On success the piece moves and the
    /// phase becomes `Matching`. Any other case is an expected rejection:
    /// the board and phase are untouched and `false` is returned.
    pub fn attempt_move(&mut self, from: Coord, to: Coord) -> bool {
        if self.phase != TurnPhase::AwaitingMove {
            return false;
        }
        if from.x != to.x && from.y != to.y {
            return false;
        }
        // A drag released off the grid is a rejection, not a fault.
        let Ok(src) = self.board.color_at(from.x, from.y) else {
            return false;
        };
        let Ok(dst) = self.board.color_at(to.x, to.y) else {
            return false;
        };
        if src.is_empty() || !dst.is_empty() {
            return false;
        }

        // In-range by the checks above.
        let _ = self.board.set_color(to.x, to.y, src);
        let _ = self.board.set_color(from.x, from.y, Color::Empty);
        self.phase = TurnPhase::Matching;
        true
    }

    /// Enter `Paused`, remembering the current phase.
    /// No-op while already paused or after game over.
    pub fn pause(&mut self) {
        if self.game_over || self.phase == TurnPhase::Paused {
            return;
        }
        self.resume_phase = Some(self.phase);
        self.phase = TurnPhase::Paused;
    }

    /// Leave `Paused`, returning to exactly the remembered phase
    pub fn resume(&mut self) {
        if self.phase != TurnPhase::Paused {
            return;
        }
        self.phase = self.resume_phase.take().unwrap_or(TurnPhase::AwaitingMove);
    }

    /// Feed elapsed wall-clock seconds into the session clock.
    /// The clock does not advance while paused or after game over.
    pub fn tick_time(&mut self, seconds: u32) {
        if self.phase == TurnPhase::Paused || self.game_over {
            return;
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(seconds);
    }

    /// Throw away the current game and start over with a fresh seed
    pub fn restart(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    /// Replace score, clock, phase, and board contents from a snapshot.
    ///
    /// The spawn batch is not persisted: its colors are redrawn fresh and
    /// positions are chosen at the next `Spawning` step. Validates the
    /// tile count before touching any state, so a bad snapshot leaves the
    /// session unchanged.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), LoadError> {
        if snapshot.tiles.len() != CELL_COUNT {
            return Err(LoadError::BadTileCount {
                expected: CELL_COUNT,
                found: snapshot.tiles.len(),
            });
        }

        self.score = snapshot.score;
        self.elapsed_secs = snapshot.time;
        self.phase = snapshot.state;
        // The pre-pause phase is not part of the snapshot; a restored
        // pause resumes into the player-facing idle state.
        self.resume_phase = match snapshot.state {
            TurnPhase::Paused => Some(TurnPhase::AwaitingMove),
            _ => None,
        };

        for (idx, color) in snapshot.tiles.iter().enumerate() {
            self.board.cells_mut()[idx] = *color;
        }
        self.game_over = self.board.occupied_count() == CELL_COUNT;
        self.batch = SpawnBatch::new(self.spawner.generate_colors());

        Ok(())
    }
}
