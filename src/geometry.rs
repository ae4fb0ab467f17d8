//! Translation of a finished grid into the bodies a physics sandbox needs: static wall
//! rectangles, the goal rectangle and the point the ball starts from.
//!
//! Positions are rectangle centres, the convention physics engines place bodies by. `x` runs
//! right along the columns and `y` runs down along the rows.

use serde_derive::{Deserialize, Serialize};

use crate::cells::Cell;
use crate::errors::*;
use crate::grid::{self, WallMatrix};
use crate::grid_dimensions::GridDimensions;
use crate::units::{Height, Width};

/// Thickness of the four walls around the canvas edge.
pub const BOUNDARY_THICKNESS: f64 = 2.0;
/// Goal side length as a fraction of the cell's side.
pub const GOAL_SCALE: f64 = 0.7;
/// Ball radius as a fraction of the smaller cell side.
pub const BALL_SCALE: f64 = 0.25;

const BOUNDARY_WALLS_COUNT: usize = 4;

/// Tag an engine can use to tell bodies apart, e.g. when a collision pair is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyLabel {
    Wall,
    Goal,
    Ball,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

/// The drawing area the maze is stretched over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Canvas {
    width: f64,
    height: f64,
    wall_thickness: f64,
}

impl Canvas {
    pub fn new(width: Width, height: Height, wall_thickness: f64) -> Result<Canvas> {
        let (Width(w), Height(h)) = (width, height);
        for &(name, value) in &[("width", w), ("height", h), ("wall thickness", wall_thickness)] {
            if !(value.is_finite() && value > 0.0) {
                return invalid_dimensions(format!("canvas {} must be positive, got {}", name, value));
            }
        }
        Ok(Canvas {
            width: w,
            height: h,
            wall_thickness,
        })
    }

    #[inline]
    pub fn width(&self) -> Width {
        Width(self.width)
    }

    #[inline]
    pub fn height(&self) -> Height {
        Height(self.height)
    }

    #[inline]
    pub fn wall_thickness(&self) -> f64 {
        self.wall_thickness
    }
}

/// Canvas length covered by one cell along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct UnitSize {
    width: f64,
    height: f64,
}

impl UnitSize {
    fn new(canvas: &Canvas, dimensions: &GridDimensions) -> UnitSize {
        UnitSize {
            width: canvas.width / dimensions.columns().0 as f64,
            height: canvas.height / dimensions.rows().0 as f64,
        }
    }

    fn cell_centre(&self, cell: Cell) -> Point {
        Point::new(cell.col as f64 * self.width + self.width / 2.0,
                   cell.row as f64 * self.height + self.height / 2.0)
    }
}

/// An axis aligned rectangle handed to the engine as a static body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallRectangle {
    pub centre: Point,
    pub width: f64,
    pub height: f64,
    pub is_static: bool,
    pub label: BodyLabel,
}

impl WallRectangle {
    pub fn new(centre: Point, width: f64, height: f64) -> WallRectangle {
        WallRectangle {
            centre,
            width,
            height,
            is_static: true,
            label: BodyLabel::Wall,
        }
    }

    /// The closed wall along the bottom edge of cell `(row, col)`.
    fn horizontal(units: &UnitSize, thickness: f64, row: usize, col: usize) -> WallRectangle {
        WallRectangle::new(Point::new(col as f64 * units.width + units.width / 2.0,
                                      row as f64 * units.height + units.height),
                           units.width,
                           thickness)
    }

    /// The closed wall along the right edge of cell `(row, col)`.
    fn vertical(units: &UnitSize, thickness: f64, row: usize, col: usize) -> WallRectangle {
        WallRectangle::new(Point::new(col as f64 * units.width + units.width,
                                      row as f64 * units.height + units.height / 2.0),
                           thickness,
                           units.height)
    }

    pub fn left(&self) -> f64 {
        self.centre.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.centre.x + self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.centre.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.centre.y + self.height / 2.0
    }
}

/// Static body the ball has to touch to win.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalRectangle {
    pub centre: Point,
    pub width: f64,
    pub height: f64,
    pub is_static: bool,
    pub label: BodyLabel,
}

/// Where the movable ball is created, and how big it is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StartPoint {
    pub centre: Point,
    pub radius: f64,
    pub label: BodyLabel,
}

/// All the bodies for one maze, in the order they should be added to the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MazeGeometry {
    pub canvas: Canvas,
    /// Four canvas boundary walls, then closed horizontal walls then closed vertical walls,
    /// each row major.
    pub walls: Vec<WallRectangle>,
    pub goal: GoalRectangle,
    pub start: StartPoint,
}

impl MazeGeometry {
    pub fn boundary_walls(&self) -> &[WallRectangle] {
        &self.walls[..self.boundary_count()]
    }

    pub fn internal_walls(&self) -> &[WallRectangle] {
        &self.walls[self.boundary_count()..]
    }

    #[inline]
    fn boundary_count(&self) -> usize {
        self.walls.len().min(BOUNDARY_WALLS_COUNT)
    }
}

/// Turn the final wall matrices into engine bodies scaled to the canvas.
///
/// Pure: the same matrices and canvas always give the same geometry. Fails only if the two
/// matrices do not describe the same grid.
pub fn export_geometry(verticals: &WallMatrix,
                       horizontals: &WallMatrix,
                       canvas: &Canvas)
                       -> Result<MazeGeometry> {
    let dimensions = grid::walls_dimensions(verticals, horizontals)?;
    let units = UnitSize::new(canvas, &dimensions);
    let thickness = canvas.wall_thickness;

    let mut walls = Vec::with_capacity(BOUNDARY_WALLS_COUNT + verticals.closed_count() + horizontals.closed_count());
    walls.extend_from_slice(&boundary_walls(canvas));
    walls.extend(horizontals.iter()
        .filter(|&(_, _, open)| !open)
        .map(|(row, col, _)| WallRectangle::horizontal(&units, thickness, row, col)));
    walls.extend(verticals.iter()
        .filter(|&(_, _, open)| !open)
        .map(|(row, col, _)| WallRectangle::vertical(&units, thickness, row, col)));

    let goal = GoalRectangle {
        centre: units.cell_centre(dimensions.goal_cell()),
        width: units.width * GOAL_SCALE,
        height: units.height * GOAL_SCALE,
        is_static: true,
        label: BodyLabel::Goal,
    };

    let start = StartPoint {
        centre: units.cell_centre(Cell::new(0, 0)),
        radius: units.width.min(units.height) * BALL_SCALE,
        label: BodyLabel::Ball,
    };

    Ok(MazeGeometry {
        canvas: *canvas,
        walls,
        goal,
        start,
    })
}

fn boundary_walls(canvas: &Canvas) -> [WallRectangle; BOUNDARY_WALLS_COUNT] {
    let (w, h) = (canvas.width, canvas.height);
    [
        WallRectangle::new(Point::new(w / 2.0, 0.0), w, BOUNDARY_THICKNESS),
        WallRectangle::new(Point::new(w / 2.0, h), w, BOUNDARY_THICKNESS),
        WallRectangle::new(Point::new(0.0, h / 2.0), BOUNDARY_THICKNESS, h),
        WallRectangle::new(Point::new(w, h / 2.0), BOUNDARY_THICKNESS, h),
    ]
}
