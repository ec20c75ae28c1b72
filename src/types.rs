//! Core types shared across the crate
//! This module contains pure data types with no dependencies beyond serde derives

use serde::{Deserialize, Serialize};

/// Board edge length (the grid is square)
pub const BOARD_SIZE: u8 = 9;

/// Total number of cells on the board
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Minimum straight-line run length that qualifies for clearing,
/// counting the starting cell
pub const MATCH_RUN_LEN: usize = 5;

/// Number of pieces spawned per turn
pub const SPAWN_BATCH_LEN: usize = 3;

/// Cell contents: empty, or one of the three playable colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Empty,
    A,
    B,
    C,
}

impl Color {
    /// The colors the spawn generator may draw (never `Empty`)
    pub const PLAYABLE: [Color; 3] = [Color::A, Color::B, Color::C];

    pub fn is_empty(&self) -> bool {
        matches!(self, Color::Empty)
    }

    /// Parse a snapshot tag
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Empty" => Some(Color::Empty),
            "A" => Some(Color::A),
            "B" => Some(Color::B),
            "C" => Some(Color::C),
            _ => None,
        }
    }

    /// Snapshot tag for this color
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Empty => "Empty",
            Color::A => "A",
            Color::B => "B",
            Color::C => "C",
        }
    }
}

/// Board coordinate, `0 <= x, y < BOARD_SIZE` for on-board cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Whether this coordinate lies on the board
    pub fn in_bounds(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }
}

/// The eight compass directions, in adjacency-table order.
///
/// The order is fixed (N, NE, E, SE, S, SW, W, NW) and significant: it
/// defines the direction indices used by the board's adjacency table and
/// the match engine's walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions in index order
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// (dx, dy) step for this direction; y grows downward (row-major)
    pub fn offset(&self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Index of this direction in [`Direction::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Phase of the turn cycle; exactly one is active at any instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    Spawning,
    AwaitingMove,
    Matching,
    Paused,
}

impl TurnPhase {
    /// Parse a snapshot tag
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Spawning" => Some(TurnPhase::Spawning),
            "AwaitingMove" => Some(TurnPhase::AwaitingMove),
            "Matching" => Some(TurnPhase::Matching),
            "Paused" => Some(TurnPhase::Paused),
            _ => None,
        }
    }

    /// Snapshot tag for this phase
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnPhase::Spawning => "Spawning",
            TurnPhase::AwaitingMove => "AwaitingMove",
            TurnPhase::Matching => "Matching",
            TurnPhase::Paused => "Paused",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_tags_roundtrip() {
        for color in [Color::Empty, Color::A, Color::B, Color::C] {
            assert_eq!(Color::from_str(color.as_str()), Some(color));
        }
        assert_eq!(Color::from_str("D"), None);
        assert_eq!(Color::from_str("empty"), None);
    }

    #[test]
    fn test_phase_tags_roundtrip() {
        for phase in [
            TurnPhase::Spawning,
            TurnPhase::AwaitingMove,
            TurnPhase::Matching,
            TurnPhase::Paused,
        ] {
            assert_eq!(TurnPhase::from_str(phase.as_str()), Some(phase));
        }
        assert_eq!(TurnPhase::from_str("Idle"), None);
    }

    #[test]
    fn test_direction_order_and_offsets() {
        // Opposite directions sit 4 apart in the table.
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
            let (dx, dy) = dir.offset();
            let (ox, oy) = Direction::ALL[(i + 4) % 8].offset();
            assert_eq!((dx, dy), (-ox, -oy));
        }
        assert_eq!(Direction::North.offset(), (0, -1));
        assert_eq!(Direction::SouthWest.offset(), (-1, 1));
    }

    #[test]
    fn test_playable_excludes_empty() {
        assert!(!Color::PLAYABLE.contains(&Color::Empty));
        assert_eq!(Color::PLAYABLE.len(), 3);
    }
}
