//! color-lines: simulation core of a 9x9 color-matching puzzle.
//!
//! Players relocate colored pieces along a row or column; contiguous
//! same-color runs of 5 or more in any of the eight compass directions
//! clear and score, and every turn spawns three new pieces at random
//! empty cells. This crate is the board/match/turn engine only: a
//! presentation layer drives it through [`core::GameSession`] and renders
//! what the accessors expose.
//!
//! ```
//! use color_lines::core::GameSession;
//! use color_lines::types::{Coord, TurnPhase};
//!
//! let mut game = GameSession::new(12345);
//! game.advance(); // place the first spawn batch
//! assert_eq!(game.phase(), TurnPhase::AwaitingMove);
//!
//! // A drag gesture becomes a straight-line relocation attempt.
//! let moved = game.attempt_move(Coord::new(0, 0), Coord::new(0, 8));
//! if moved {
//!     game.advance(); // resolve matches, then spawn again
//! }
//! ```

pub mod core;
pub mod types;
