//! Board module - manages the 9x9 puzzle grid
//!
//! The board is a flat array of colors in row-major order (y * SIZE + x),
//! plus a precomputed adjacency table mapping each cell to its up-to-8
//! neighbors. The table is built once at construction, edge-clipped with
//! no wraparound, and never mutated afterwards.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::types::{Color, Coord, Direction, BOARD_SIZE, CELL_COUNT};

/// Coordinate outside the board; a caller bug per the error taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("coordinate ({x}, {y}) is outside the 9x9 board")]
pub struct OutOfRangeError {
    pub x: u8,
    pub y: u8,
}

/// The 9x9 game board with precomputed 8-direction adjacency
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * SIZE + x)
    cells: [Color; CELL_COUNT],
    /// Per-cell neighbor indices, one slot per [`Direction`]; `None` off-board
    neighbors: [[Option<u8>; 8]; CELL_COUNT],
}

impl Board {
    /// Create a new empty board and build the adjacency table
    pub fn new() -> Self {
        let mut neighbors = [[None; 8]; CELL_COUNT];
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let idx = Self::index(x, y);
                for dir in Direction::ALL {
                    let (dx, dy) = dir.offset();
                    let nx = x as i8 + dx;
                    let ny = y as i8 + dy;
                    if (0..BOARD_SIZE as i8).contains(&nx) && (0..BOARD_SIZE as i8).contains(&ny)
                    {
                        neighbors[idx][dir.index()] = Some(Self::index(nx as u8, ny as u8) as u8);
                    }
                }
            }
        }

        Self {
            cells: [Color::Empty; CELL_COUNT],
            neighbors,
        }
    }

    /// Calculate flat index from (x, y); caller must check bounds
    #[inline(always)]
    fn index(x: u8, y: u8) -> usize {
        (y as usize) * (BOARD_SIZE as usize) + (x as usize)
    }

    /// Coordinate for a flat index
    #[inline(always)]
    fn coord(idx: usize) -> Coord {
        Coord::new((idx % BOARD_SIZE as usize) as u8, (idx / BOARD_SIZE as usize) as u8)
    }

    /// Get the color at (x, y)
    pub fn color_at(&self, x: u8, y: u8) -> Result<Color, OutOfRangeError> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(OutOfRangeError { x, y });
        }
        Ok(self.cells[Self::index(x, y)])
    }

    /// Set the color at (x, y)
    pub fn set_color(&mut self, x: u8, y: u8, color: Color) -> Result<(), OutOfRangeError> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(OutOfRangeError { x, y });
        }
        self.cells[Self::index(x, y)] = color;
        Ok(())
    }

    /// Neighbor of a cell in one direction, or `None` at a board edge
    pub fn neighbor(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        if !coord.in_bounds() {
            return None;
        }
        self.neighbors[Self::index(coord.x, coord.y)][dir.index()]
            .map(|idx| Self::coord(idx as usize))
    }

    /// All present neighbors of (x, y), in direction-table order
    /// (N, NE, E, SE, S, SW, W, NW)
    pub fn neighbors(&self, x: u8, y: u8) -> ArrayVec<Coord, 8> {
        let mut result = ArrayVec::new();
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return result;
        }
        for slot in self.neighbors[Self::index(x, y)] {
            if let Some(idx) = slot {
                result.push(Self::coord(idx as usize));
            }
        }
        result
    }

    /// Number of cells holding a non-empty color
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// All empty cells in board-scan (row-major) order
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(idx, _)| Self::coord(idx))
            .collect()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Color; CELL_COUNT] {
        &self.cells
    }

    /// Get a mutable reference to the internal cells array
    pub(crate) fn cells_mut(&mut self) -> &mut [Color; CELL_COUNT] {
        &mut self.cells
    }

    /// Reset every cell to empty
    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            *cell = Color::Empty;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
