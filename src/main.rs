use docopt::Docopt;
use log::info;
use maze_walls::{
    cells::Cell,
    config::MazeConfig,
    grid_displays::{MazeDisplay, PathDisplay, StartEndPointsDisplay},
    maze::Maze,
    pathing,
    renderers,
};
use serde_derive::Deserialize;
use std::{
    fs::{self, File},
    io::prelude::*,
    path::Path,
};

const USAGE: &str = "Maze Walls

Usage:
    maze_driver -h | --help
    maze_driver [--config=<path> | --debug | [--rows=<r> --cols=<c> --width=<w> --height=<h> --wall-thickness=<t>]] [--seed=<s>] [--wireframes] [--show-path] [--text-out=<path>] [--image-out=<path> --pixels-per-unit=<n>] [--geometry-out=<path>]

Options:
    -h --help                Show this screen.
    --config=<path>          Read the maze configuration from a JSON file.
    --debug                  Use the small 3x3 debug maze drawn as wireframes.
    --rows=<r>               Cells down the maze [default: 14].
    --cols=<c>               Cells across the maze [default: 20].
    --width=<w>              Canvas width [default: 1280].
    --height=<h>             Canvas height [default: 720].
    --wall-thickness=<t>     Thickness of the internal walls [default: 5].
    --seed=<s>               Seed the random source for a repeatable maze.
    --wireframes             Outline bodies instead of filling them when rendering an image.
    --show-path              Mark the route from the ball to the goal in the text rendering.
    --text-out=<path>        Write the text rendering to a file instead of stdout.
    --image-out=<path>       Write a PNG rendering of the exported bodies.
    --pixels-per-unit=<n>    Image pixels per canvas length unit [default: 1].
    --geometry-out=<path>    Write the exported bodies as JSON.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_config: String,
    flag_debug: bool,
    flag_rows: usize,
    flag_cols: usize,
    flag_width: f64,
    flag_height: f64,
    flag_wall_thickness: f64,
    flag_seed: Option<u64>,
    flag_wireframes: bool,
    flag_show_path: bool,
    flag_text_out: String,
    flag_image_out: String,
    flag_pixels_per_unit: f64,
    flag_geometry_out: String,
}

mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Maze(::maze_walls::errors::Error, ::maze_walls::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            Json(::serde_json::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;
    let config = maze_config_from_args(&args)?;
    info!("maze configuration {:?}", config);

    let maze = Maze::from_config(&config)?;
    let geometry = maze.geometry(&config)?;
    info!("exported {} walls ({} internal)",
          geometry.walls.len(),
          geometry.internal_walls().len());

    let text = text_rendering(&maze, args.flag_show_path);
    if args.flag_text_out.is_empty() {
        println!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if !args.flag_geometry_out.is_empty() {
        let json = serde_json::to_string_pretty(&geometry)?;
        write_text_to_file(&json, &args.flag_geometry_out)
            .chain_err(|| format!("Failed to write maze geometry to {}", args.flag_geometry_out))?;
    }

    if !args.flag_image_out.is_empty() {
        let render_options = renderers::RenderOptionsBuilder::new()
            .wireframes(args.flag_wireframes || config.debug_wireframes)
            .pixels_per_unit(args.flag_pixels_per_unit)
            .output_file(Some(Path::new(&args.flag_image_out)))
            .build();
        renderers::render_geometry(&geometry, &render_options)?;
    }

    Ok(())
}

/// A config file wins over the debug preset which wins over the size flags.
/// The seed and wireframe flags apply on top of whichever was chosen.
fn maze_config_from_args(args: &MazeArgs) -> Result<MazeConfig> {
    let mut config = if !args.flag_config.is_empty() {
        let json = fs::read_to_string(&args.flag_config)
            .chain_err(|| format!("Failed to read maze configuration {}", args.flag_config))?;
        serde_json::from_str::<MazeConfig>(&json)?
    } else if args.flag_debug {
        MazeConfig::debug()
    } else {
        MazeConfig {
            rows: args.flag_rows,
            cols: args.flag_cols,
            wall_thickness: args.flag_wall_thickness,
            ..MazeConfig::viewport(args.flag_width, args.flag_height)
        }
    };

    if let Some(seed) = args.flag_seed {
        config.seed = Some(seed);
    }
    config.debug_wireframes |= args.flag_wireframes;
    config.validate()?;
    Ok(config)
}

/// The ball starts in the top left cell whatever cell the generator started from.
fn text_rendering(maze: &Maze, show_path: bool) -> String {
    let ball = Cell::new(0, 0);
    let goal = maze.goal();

    let path = pathing::Distances::new(maze.grid(), ball).and_then(|distances| {
        info!("furthest cell from the ball is {} steps away", distances.max());
        pathing::shortest_path(maze.grid(), &distances, goal)
    });
    if let Some(ref path) = path {
        info!("ball to goal path is {} cells long", path.len());
    }

    match path {
        Some(ref path) if show_path => {
            let display = PathDisplay::new(ball, goal, path);
            format!("{}", MazeDisplay::new(maze.grid(), &display))
        }
        _ => {
            let display = StartEndPointsDisplay::new(ball, goal);
            format!("{}", MazeDisplay::new(maze.grid(), &display))
        }
    }
}

fn write_text_to_file(data: &str, file_name: &str) -> ::std::io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
