use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use serde_derive::{Deserialize, Serialize};

use crate::errors::*;
use crate::geometry::Canvas;
use crate::grid_dimensions::GridDimensions;
use crate::units::{ColumnsCount, Height, RowsCount, Width};

pub const DEFAULT_WALL_THICKNESS: f64 = 5.0;

/// Everything one generate-and-export session needs to know.
///
/// The small debug maze and the viewport sized maze are just two presets of this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Cells down the grid
    pub rows: usize,
    /// Cells across the grid
    pub cols: usize,
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
    /// Thickness of the internal walls
    pub wall_thickness: f64,
    /// Ask the consumer to draw outlines instead of filled bodies
    #[serde(alias = "debugWireframes")]
    pub debug_wireframes: bool,
    /// Fixed seed for a repeatable maze, fresh entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig::viewport(1280.0, 720.0)
    }
}

impl MazeConfig {
    /// The 14 x 20 maze stretched over a viewport.
    pub fn viewport(width: f64, height: f64) -> MazeConfig {
        MazeConfig {
            rows: 14,
            cols: 20,
            width,
            height,
            wall_thickness: DEFAULT_WALL_THICKNESS,
            debug_wireframes: false,
            seed: None,
        }
    }

    /// A 3 x 3 maze drawn as wireframes, handy when checking the generator by eye.
    pub fn debug() -> MazeConfig {
        MazeConfig {
            rows: 3,
            cols: 3,
            width: 600.0,
            height: 600.0,
            wall_thickness: DEFAULT_WALL_THICKNESS,
            debug_wireframes: true,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> MazeConfig {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations no maze can be built from, before any generation work.
    pub fn validate(&self) -> Result<()> {
        self.grid_dimensions()?;
        self.canvas()?;
        Ok(())
    }

    pub fn grid_dimensions(&self) -> Result<GridDimensions> {
        GridDimensions::new(RowsCount(self.rows), ColumnsCount(self.cols))
    }

    pub fn canvas(&self) -> Result<Canvas> {
        Canvas::new(Width(self.width), Height(self.height), self.wall_thickness)
    }

    pub fn unit_width(&self) -> f64 {
        self.width / self.cols as f64
    }

    pub fn unit_height(&self) -> f64 {
        self.height / self.rows as f64
    }

    /// The random source for this session, repeatable when a seed is configured.
    pub fn rng(&self) -> XorShiftRng {
        match self.seed {
            Some(seed) => XorShiftRng::seed_from_u64(seed),
            None => XorShiftRng::from_entropy(),
        }
    }
}
