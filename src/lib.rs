//! **maze_walls** generates perfect mazes with a recursive backtracker and exports the closed
//! walls as static rectangles ready for a 2D physics sandbox.

pub mod cells;
pub mod config;
pub mod errors;
pub mod generators;
pub mod geometry;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod maze;
pub mod pathing;
pub mod randomizer;
pub mod renderers;
pub mod sandbox;
pub mod units;
mod utils;
