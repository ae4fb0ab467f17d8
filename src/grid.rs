use bit_set::BitSet;
use std::fmt;

use crate::cells::{Cell, CellSmallVec, Direction, NEIGHBOURS};
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::units::{ColumnsCount, NodesCount, RowsCount};


/// Open/closed state of a rectangular block of walls. Every wall starts closed.
#[derive(Clone, PartialEq, Eq)]
pub struct WallMatrix {
    rows: usize,
    columns: usize,
    open: BitSet,
}

impl WallMatrix {
    pub fn new(rows: usize, columns: usize) -> WallMatrix {
        WallMatrix {
            rows,
            columns,
            open: BitSet::with_capacity(rows * columns),
        }
    }

    /// Build from rows of open flags, `true` meaning the wall has been removed.
    ///
    /// Panics if the rows are ragged.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> WallMatrix {
        let columns = rows.first().map_or(0, |r| r.as_ref().len());
        let mut matrix = WallMatrix::new(rows.len(), columns);
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), columns, "ragged wall matrix row {}", row_index);
            for (col_index, &is_open) in row.iter().enumerate() {
                if is_open {
                    matrix.open(row_index, col_index);
                }
            }
        }
        matrix
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Has the wall at `(row, col)` been removed? Panics outside the matrix.
    #[inline]
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.open.contains(self.index(row, col))
    }

    /// Remove the wall at `(row, col)`. Idempotent. Panics outside the matrix.
    #[inline]
    pub fn open(&mut self, row: usize, col: usize) {
        let index = self.index(row, col);
        self.open.insert(index);
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    pub fn closed_count(&self) -> usize {
        self.rows * self.columns - self.open.len()
    }

    /// `(row, col, is_open)` for every wall, row major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let columns = self.columns;
        (0..self.rows * columns).map(move |index| {
            (index / columns, index % columns, self.open.contains(index))
        })
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows && col < self.columns,
                "wall ({}, {}) is outside a {}x{} wall matrix",
                row,
                col,
                self.rows,
                self.columns);
        row * self.columns + col
    }
}

impl fmt::Debug for WallMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = (0..self.rows)
            .map(|r| (0..self.columns).map(|c| self.is_open(r, c)).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        write!(f, "WallMatrix {:?}", rows)
    }
}


/// The mutable state of one maze generation pass: which cells have been visited and
/// which walls between neighbouring cells have been opened.
///
/// `verticals` is `rows x (cols - 1)`, entry `(r, c)` separating `(r, c)` from `(r, c + 1)`.
/// `horizontals` is `(rows - 1) x cols`, entry `(r, c)` separating `(r, c)` from `(r + 1, c)`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    dimensions: GridDimensions,
    visited: BitSet,
    verticals: WallMatrix,
    horizontals: WallMatrix,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Grid :: rows: {:?}, columns: {:?}, visited: {}, passages: {}",
               self.rows(),
               self.columns(),
               self.visited.len(),
               self.passages_count())
    }
}

impl Grid {
    /// A fully walled, unvisited grid.
    pub fn new(dimensions: GridDimensions) -> Grid {
        let (RowsCount(rows), ColumnsCount(columns)) = (dimensions.rows(), dimensions.columns());
        Grid {
            dimensions,
            visited: BitSet::with_capacity(rows * columns),
            verticals: WallMatrix::new(rows, columns - 1),
            horizontals: WallMatrix::new(rows - 1, columns),
        }
    }

    /// Rebuild a grid from wall matrices produced elsewhere. No cell is marked visited.
    pub fn from_walls(verticals: WallMatrix, horizontals: WallMatrix) -> Result<Grid> {
        let dimensions = walls_dimensions(&verticals, &horizontals)?;
        Ok(Grid {
            dimensions,
            visited: BitSet::with_capacity(dimensions.size().0),
            verticals,
            horizontals,
        })
    }

    #[inline]
    pub fn dimensions(&self) -> &GridDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.dimensions.rows()
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.dimensions.columns()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size().0
    }

    #[inline]
    pub fn verticals(&self) -> &WallMatrix {
        &self.verticals
    }

    #[inline]
    pub fn horizontals(&self) -> &WallMatrix {
        &self.horizontals
    }

    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited.contains(self.cell_index(cell))
    }

    pub fn mark_visited(&mut self, cell: Cell) {
        let index = self.cell_index(cell);
        self.visited.insert(index);
    }

    pub fn visited_count(&self) -> NodesCount {
        NodesCount(self.visited.len())
    }

    pub fn all_visited(&self) -> bool {
        self.visited.len() == self.size()
    }

    pub fn open_vertical(&mut self, row: usize, col: usize) {
        self.verticals.open(row, col);
    }

    pub fn open_horizontal(&mut self, row: usize, col: usize) {
        self.horizontals.open(row, col);
    }

    pub fn is_vertical_open(&self, row: usize, col: usize) -> bool {
        self.verticals.is_open(row, col)
    }

    pub fn is_horizontal_open(&self, row: usize, col: usize) -> bool {
        self.horizontals.is_open(row, col)
    }

    pub fn neighbour_towards(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        self.dimensions.neighbour(cell, direction.neighbour())
    }

    /// Open the wall between `cell` and its neighbour in `direction`, returning the neighbour.
    ///
    /// The wall is addressed by the lower indexed cell of the pair. Panics if the neighbour is
    /// outside the grid.
    pub fn open_wall_towards(&mut self, cell: Cell, direction: Direction) -> Cell {
        let neighbour = self.neighbour_towards(cell, direction)
            .unwrap_or_else(|| {
                panic!("no neighbour {:?} of {:?} inside a {}x{} grid",
                       direction,
                       cell,
                       self.rows().0,
                       self.columns().0)
            });
        let (row, col) = wall_index(cell, neighbour);
        if direction.crosses_vertical_wall() {
            self.open_vertical(row, col);
        } else {
            self.open_horizontal(row, col);
        }
        neighbour
    }

    /// Is there a passage from `cell` in `direction`? Always false at the grid boundary.
    pub fn is_linked_towards(&self, cell: Cell, direction: Direction) -> bool {
        self.neighbour_towards(cell, direction)
            .map_or(false, |neighbour| {
                let (row, col) = wall_index(cell, neighbour);
                if direction.crosses_vertical_wall() {
                    self.is_vertical_open(row, col)
                } else {
                    self.is_horizontal_open(row, col)
                }
            })
    }

    /// Cells reachable from `cell` through a single open wall.
    pub fn links(&self, cell: Cell) -> CellSmallVec {
        NEIGHBOURS.iter()
            .filter(|n| self.is_linked_towards(cell, n.direction))
            .filter_map(|n| self.neighbour_towards(cell, n.direction))
            .collect()
    }

    pub fn passages_count(&self) -> usize {
        self.verticals.open_count() + self.horizontals.open_count()
    }

    /// All cells, row major.
    pub fn iter(&self) -> impl Iterator<Item = Cell> {
        let dimensions = self.dimensions;
        (0..dimensions.size().0).map(move |index| dimensions.index_to_cell(index))
    }

    /// Every opened wall as the pair of cells it joins, vertical walls first.
    pub fn iter_passages(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        let across = self.verticals
            .iter()
            .filter(|&(_, _, open)| open)
            .map(|(r, c, _)| (Cell::new(r, c), Cell::new(r, c + 1)));
        let down = self.horizontals
            .iter()
            .filter(|&(_, _, open)| open)
            .map(|(r, c, _)| (Cell::new(r, c), Cell::new(r + 1, c)));
        across.chain(down)
    }

    fn cell_index(&self, cell: Cell) -> usize {
        self.dimensions
            .cell_to_index(cell)
            .unwrap_or_else(|| {
                panic!("cell {:?} is outside a {}x{} grid",
                       cell,
                       self.rows().0,
                       self.columns().0)
            })
    }
}

/// Grid shape implied by a pair of wall matrices, rejecting pairs that do not fit together.
pub fn walls_dimensions(verticals: &WallMatrix, horizontals: &WallMatrix) -> Result<GridDimensions> {
    // A single row grid has no horizontal walls, so only the vertical walls know the width.
    let rows = verticals.rows();
    let columns = verticals.columns() + 1;
    let horizontals_fit = horizontals.rows() + 1 == rows &&
                          (horizontals.rows() == 0 || horizontals.columns() == columns);
    if rows == 0 || !horizontals_fit {
        return invalid_dimensions(format!("vertical walls {}x{} and horizontal walls {}x{} do \
                                           not describe one grid",
                                          verticals.rows(),
                                          verticals.columns(),
                                          horizontals.rows(),
                                          horizontals.columns()));
    }
    GridDimensions::new(RowsCount(rows), ColumnsCount(columns))
}

#[inline]
fn wall_index(a: Cell, b: Cell) -> (usize, usize) {
    let lower = if a < b { a } else { b };
    (lower.row, lower.col)
}
