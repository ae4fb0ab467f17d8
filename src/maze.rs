use log::debug;
use rand::Rng;

use crate::cells::Cell;
use crate::config::MazeConfig;
use crate::errors::*;
use crate::generators;
use crate::geometry::{self, MazeGeometry};
use crate::grid::Grid;

/// A generated perfect maze: the finished grid, the cell the walk started from and the goal.
///
/// The goal is always the bottom right cell whatever the start, so the distance between them
/// varies from maze to maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Cell,
    goal: Cell,
}

impl Maze {
    /// Validate the configuration then carve a maze with randomness drawn from `rng`.
    ///
    /// Nothing is generated if the configuration is invalid.
    pub fn generate<R>(config: &MazeConfig, rng: &mut R) -> Result<Maze>
        where R: Rng + ?Sized
    {
        config.validate()?;
        let dimensions = config.grid_dimensions()?;

        let mut grid = Grid::new(dimensions);
        let start = generators::recursive_backtracker(&mut grid, rng);
        let goal = dimensions.goal_cell();
        debug!("generated {}x{} maze, start {:?}, goal {:?}",
               config.rows,
               config.cols,
               start,
               goal);

        Ok(Maze { grid, start, goal })
    }

    /// `generate` with the configuration's own random source.
    pub fn from_config(config: &MazeConfig) -> Result<Maze> {
        Maze::generate(config, &mut config.rng())
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn geometry(&self, config: &MazeConfig) -> Result<MazeGeometry> {
        if config.grid_dimensions()? != *self.grid.dimensions() {
            return invalid_dimensions(format!("configuration is {}x{} but the maze is {}x{}",
                                              config.rows,
                                              config.cols,
                                              self.grid.rows().0,
                                              self.grid.columns().0));
        }
        geometry::export_geometry(self.grid.verticals(), self.grid.horizontals(), &config.canvas()?)
    }
}
