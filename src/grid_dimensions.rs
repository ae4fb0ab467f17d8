use crate::cells::{Cell, Neighbour};
use crate::errors::*;
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};


/// The shape of a rectangular maze grid. Never has a zero sized side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridDimensions {
    rows: RowsCount,
    columns: ColumnsCount,
}

impl GridDimensions {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<GridDimensions> {
        if rows.0 == 0 || columns.0 == 0 {
            return invalid_dimensions(format!("grid of {} rows by {} columns has no cells",
                                              rows.0,
                                              columns.0));
        }
        rows.0
            .checked_mul(columns.0)
            .ok_or_else(|| -> Error {
                ErrorKind::InvalidDimensions(format!("grid of {} rows by {} columns is too large",
                                                     rows.0,
                                                     columns.0))
                    .into()
            })?;

        Ok(GridDimensions { rows, columns })
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.rows.0 * self.columns.0)
    }

    /// Cell count and the count of internal walls that could be opened.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let (rows, columns) = (self.rows.0, self.columns.0);
        let vertical_walls = rows * (columns - 1);
        let horizontal_walls = (rows - 1) * columns;
        (self.size(), EdgesCount(vertical_walls + horizontal_walls))
    }

    /// Passages in a perfect maze over this grid.
    pub fn spanning_tree_edges(&self) -> EdgesCount {
        EdgesCount(self.size().0 - 1)
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows.0 && cell.col < self.columns.0
    }

    /// Step from `cell` by `neighbour`, None if that leaves the grid.
    pub fn neighbour(&self, cell: Cell, neighbour: Neighbour) -> Option<Cell> {
        cell.offset(neighbour.direction)
            .filter(|adjacent| self.contains(*adjacent))
    }

    /// Row major index of a cell in the range 0..size, None if the cell is outside the grid.
    #[inline]
    pub fn cell_to_index(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row * self.columns.0 + cell.col)
        } else {
            None
        }
    }

    #[inline]
    pub fn index_to_cell(&self, index: usize) -> Cell {
        Cell::new(index / self.columns.0, index % self.columns.0)
    }

    /// The goal always sits in the bottom right corner.
    pub fn goal_cell(&self) -> Cell {
        Cell::new(self.rows.0 - 1, self.columns.0 - 1)
    }
}
