//! Matching module - straight-line run detection and clearing
//!
//! A run is a maximal straight-line sequence of same-colored, non-empty
//! cells along one of the 8 compass directions. Runs of length
//! [`MATCH_RUN_LEN`] or more (counting the starting cell) are cleared and
//! score 1 point per cell.
//!
//! Detection walks each direction iteratively through the board's
//! adjacency table, bounded by the board edge, instead of recursing.
//! Marks are union-only: a cell qualifying in any single direction from
//! any start stays marked, so intersecting runs (an L or T shape) clear
//! together in one pass. The pass is a pure function of board contents,
//! independent of scan order.

use arrayvec::ArrayVec;

use crate::core::Board;
use crate::types::{Color, Coord, Direction, BOARD_SIZE, CELL_COUNT, MATCH_RUN_LEN};

/// Cells marked for clearing by one match pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearSet {
    marks: [bool; CELL_COUNT],
    len: usize,
}

impl ClearSet {
    fn new() -> Self {
        Self {
            marks: [false; CELL_COUNT],
            len: 0,
        }
    }

    fn insert(&mut self, coord: Coord) {
        let idx = (coord.y as usize) * (BOARD_SIZE as usize) + (coord.x as usize);
        if !self.marks[idx] {
            self.marks[idx] = true;
            self.len += 1;
        }
    }

    /// Whether this cell is marked for clearing
    pub fn contains(&self, coord: Coord) -> bool {
        coord.in_bounds()
            && self.marks[(coord.y as usize) * (BOARD_SIZE as usize) + (coord.x as usize)]
    }

    /// Number of marked cells
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Scan the board and mark every cell belonging to a qualifying run.
///
/// For each non-empty cell, each of the 8 directions is walked while the
/// neighbor's color equals the starting cell's color. A walk whose total
/// length (start cell included) reaches [`MATCH_RUN_LEN`] marks the start
/// and every walked cell. The board is not mutated.
pub fn mark_runs(board: &Board) -> ClearSet {
    let mut set = ClearSet::new();

    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let start = Coord::new(x, y);
            let color = board.cells()[(y as usize) * (BOARD_SIZE as usize) + (x as usize)];
            if color.is_empty() {
                continue;
            }

            for dir in Direction::ALL {
                // Longest possible walk is the board edge length minus the start.
                let mut walked: ArrayVec<Coord, { BOARD_SIZE as usize }> = ArrayVec::new();
                let mut cursor = start;
                while let Some(next) = board.neighbor(cursor, dir) {
                    if board.cells()
                        [(next.y as usize) * (BOARD_SIZE as usize) + (next.x as usize)]
                        != color
                    {
                        break;
                    }
                    walked.push(next);
                    cursor = next;
                }

                if 1 + walked.len() >= MATCH_RUN_LEN {
                    set.insert(start);
                    for coord in &walked {
                        set.insert(*coord);
                    }
                }
            }
        }
    }

    set
}

/// Run one full match pass: mark qualifying runs, then clear them.
///
/// Returns the number of cells cleared; each contributes exactly 1 point.
pub fn sweep(board: &mut Board) -> u32 {
    let set = mark_runs(board);
    if set.is_empty() {
        return 0;
    }

    let mut cleared = 0u32;
    for (idx, cell) in board.cells_mut().iter_mut().enumerate() {
        if set.marks[idx] {
            *cell = Color::Empty;
            cleared += 1;
        }
    }
    cleared
}
