use serde_derive::{Deserialize, Serialize};
use smallvec::SmallVec;

pub type CellSmallVec = SmallVec<[Cell; 4]>;

/// One grid unit, addressed by row (top to bottom) and column (left to right).
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    /// The cell one step away in `direction`, or None when that would need a negative index.
    ///
    /// There is no upper bound check here, a `GridDimensions` knows where the grid ends.
    pub fn offset(self, direction: Direction) -> Option<Cell> {
        let Neighbour { row_delta, col_delta, .. } = direction.neighbour();
        let row = offset_index(self.row, row_delta)?;
        let col = offset_index(self.col, col_delta)?;
        Some(Cell::new(row, col))
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    pub fn neighbour(self) -> Neighbour {
        match self {
            Direction::Up => NEIGHBOURS[0],
            Direction::Right => NEIGHBOURS[1],
            Direction::Down => NEIGHBOURS[2],
            Direction::Left => NEIGHBOURS[3],
        }
    }

    /// Passages to the left or right cross a vertical wall.
    pub fn crosses_vertical_wall(self) -> bool {
        match self {
            Direction::Left | Direction::Right => true,
            Direction::Up | Direction::Down => false,
        }
    }
}

/// A candidate step away from a cell, tagged with the direction it heads in.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Neighbour {
    pub row_delta: isize,
    pub col_delta: isize,
    pub direction: Direction,
}

/// Up, right, down, left.
pub const NEIGHBOURS: [Neighbour; 4] = [
    Neighbour { row_delta: -1, col_delta: 0, direction: Direction::Up },
    Neighbour { row_delta: 0, col_delta: 1, direction: Direction::Right },
    Neighbour { row_delta: 1, col_delta: 0, direction: Direction::Down },
    Neighbour { row_delta: 0, col_delta: -1, direction: Direction::Left },
];

#[inline]
fn offset_index(index: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        index.checked_sub(delta.unsigned_abs())
    } else {
        index.checked_add(delta as usize)
    }
}
