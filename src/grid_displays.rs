use std::fmt;

use crate::cells::{Cell, Direction};
use crate::grid::Grid;
use crate::utils::{self, FnvHashSet};


pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: Cell) -> String {
        String::from("   ")
    }
}

#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start: Cell,
    end: Cell,
}
impl StartEndPointsDisplay {
    pub fn new(start: Cell, end: Cell) -> StartEndPointsDisplay {
        StartEndPointsDisplay { start, end }
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, cell: Cell) -> String {
        if cell == self.start {
            String::from(" S ")
        } else if cell == self.end {
            String::from(" E ")
        } else {
            String::from("   ")
        }
    }
}

/// Start and end markers with the cells of a path between them dotted in.
#[derive(Debug)]
pub struct PathDisplay {
    end_points: StartEndPointsDisplay,
    on_path_cells: FnvHashSet<Cell>,
}
impl PathDisplay {
    pub fn new(start: Cell, end: Cell, path: &[Cell]) -> Self {
        let mut on_path_cells = utils::fnv_hashset(path.len());
        on_path_cells.extend(path.iter().cloned());
        PathDisplay {
            end_points: StartEndPointsDisplay::new(start, end),
            on_path_cells,
        }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, cell: Cell) -> String {
        let marker = self.end_points.render_cell_body(cell);
        if marker.trim().is_empty() && self.on_path_cells.contains(&cell) {
            String::from(" . ")
        } else {
            marker
        }
    }
}

/// A grid paired with what to show inside its cells.
pub struct MazeDisplay<'a> {
    grid: &'a Grid,
    cell_bodies: &'a dyn GridDisplay,
}
impl<'a> MazeDisplay<'a> {
    pub fn new(grid: &'a Grid, cell_bodies: &'a dyn GridDisplay) -> MazeDisplay<'a> {
        MazeDisplay { grid, cell_bodies }
    }
}
impl<'a> fmt::Display for MazeDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_text(self.grid, Some(self.cell_bodies)))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_text(self, None))
    }
}

fn render_text(grid: &Grid, cell_bodies: Option<&dyn GridDisplay>) -> String {
    const WALL_L: &str = "╴";
    const WALL_R: &str = "╶";
    const WALL_U: &str = "╵";
    const WALL_D: &str = "╷";
    const WALL_LR_3: &str = "───";
    const WALL_LR: &str = "─";
    const WALL_UD: &str = "│";
    const WALL_LD: &str = "┐";
    const WALL_RU: &str = "└";
    const WALL_LU: &str = "┘";
    const WALL_RD: &str = "┌";
    const WALL_LRU: &str = "┴";
    const WALL_LRD: &str = "┬";
    const WALL_LRUD: &str = "┼";
    const WALL_RUD: &str = "├";
    const WALL_LUD: &str = "┤";

    let columns_count = grid.columns().0;
    let rows_count = grid.rows().0;

    // Start by special case rendering the text for the top most boundary
    let mut output = String::from(WALL_RD);
    for col in 0..columns_count {
        output.push_str(WALL_LR_3);
        let cell = Cell::new(0, col);
        if grid.is_linked_towards(cell, Direction::Right) {
            output.push_str(WALL_LR);
        } else if col == columns_count - 1 {
            output.push_str(WALL_LD);
        } else {
            output.push_str(WALL_LRD);
        }
    }
    output.push('\n');

    for row in 0..rows_count {
        let is_last_row = row == rows_count - 1;

        // The top section of each cell is drawn by the row above.
        let mut row_middle_section_render = String::from(WALL_UD);
        let mut row_bottom_section_render = String::new();

        for col in 0..columns_count {
            let cell = Cell::new(row, col);
            let is_first_column = col == 0;
            let is_last_column = col == columns_count - 1;
            let right_open = grid.is_linked_towards(cell, Direction::Right);
            let down_open = grid.is_linked_towards(cell, Direction::Down);

            match cell_bodies {
                Some(displayer) => row_middle_section_render.push_str(&displayer.render_cell_body(cell)),
                None => row_middle_section_render.push_str("   "),
            }
            row_middle_section_render.push_str(if right_open { " " } else { WALL_UD });

            if is_first_column {
                row_bottom_section_render = String::from(if is_last_row {
                    WALL_RU
                } else if down_open {
                    WALL_UD
                } else {
                    WALL_RUD
                });
            }
            row_bottom_section_render.push_str(if down_open { "   " } else { WALL_LR_3 });

            let corner = match (is_last_row, is_last_column) {
                (true, true) => WALL_LU,
                (true, false) => if right_open { WALL_LR } else { WALL_LRU },
                (false, true) => if down_open { WALL_UD } else { WALL_LUD },
                (false, false) => {
                    let access_corner_from_right =
                        grid.neighbour_towards(cell, Direction::Right)
                            .map_or(false, |c| grid.is_linked_towards(c, Direction::Down));
                    let access_corner_from_below =
                        grid.neighbour_towards(cell, Direction::Down)
                            .map_or(false, |c| grid.is_linked_towards(c, Direction::Right));
                    let show_right_section = !access_corner_from_right;
                    let show_down_section = !access_corner_from_below;
                    let show_up_section = !right_open;
                    let show_left_section = !down_open;

                    match (show_left_section,
                           show_right_section,
                           show_up_section,
                           show_down_section) {
                        (true, true, true, true) => WALL_LRUD,
                        (true, true, true, false) => WALL_LRU,
                        (true, true, false, true) => WALL_LRD,
                        (true, false, true, true) => WALL_LUD,
                        (false, true, true, true) => WALL_RUD,
                        (true, true, false, false) => WALL_LR,
                        (false, false, true, true) => WALL_UD,
                        (false, true, true, false) => WALL_RU,
                        (true, false, false, true) => WALL_LD,
                        (true, false, true, false) => WALL_LU,
                        (false, true, false, true) => WALL_RD,
                        (true, false, false, false) => WALL_L,
                        (false, true, false, false) => WALL_R,
                        (false, false, true, false) => WALL_U,
                        (false, false, false, true) => WALL_D,
                        _ => " ",
                    }
                }
            };
            row_bottom_section_render.push_str(corner);
        }

        output.push_str(&row_middle_section_render);
        output.push('\n');
        output.push_str(&row_bottom_section_render);
        output.push('\n');
    }

    output
}
