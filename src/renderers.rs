use image::{Rgb, RgbImage};
use log::info;
use std::path::Path;

use crate::errors::*;
use crate::geometry::{MazeGeometry, Point, StartPoint, WallRectangle};

const BACKGROUND: Rgb<u8> = Rgb([0x14, 0x15, 0x1f]);
const WALL: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
const GOAL: Rgb<u8> = Rgb([0x00, 0x80, 0x00]);
const BALL: Rgb<u8> = Rgb([0x00, 0x00, 0xff]);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions<'path> {
    wireframes: bool,
    pixels_per_unit: f64,
    output_file: Option<&'path Path>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptionsBuilder<'path> {
    options: RenderOptions<'path>,
}

impl<'path> RenderOptionsBuilder<'path> {
    pub fn new() -> RenderOptionsBuilder<'path> {
        RenderOptionsBuilder {
            options: RenderOptions {
                wireframes: false,
                pixels_per_unit: 1.0,
                output_file: None,
            },
        }
    }

    /// Outline bodies instead of filling them.
    pub fn wireframes(mut self, on: bool) -> Self {
        self.options.wireframes = on;
        self
    }

    /// Image pixels per canvas length unit.
    pub fn pixels_per_unit(mut self, scale: f64) -> Self {
        self.options.pixels_per_unit = scale;
        self
    }

    /// Write the image as a PNG here as well as returning it.
    pub fn output_file(mut self, output_file: Option<&'path Path>) -> Self {
        self.options.output_file = output_file;
        self
    }

    pub fn build(self) -> RenderOptions<'path> {
        self.options
    }
}

impl<'path> Default for RenderOptionsBuilder<'path> {
    fn default() -> Self {
        RenderOptionsBuilder::new()
    }
}

/// Rasterise the maze bodies, walls first then the goal then the ball on top.
pub fn render_geometry(geometry: &MazeGeometry, options: &RenderOptions) -> Result<RgbImage> {
    let scale = options.pixels_per_unit;
    if !(scale.is_finite() && scale > 0.0) {
        return invalid_dimensions(format!("render scale must be positive, got {}", scale));
    }
    let img_width = to_pixels(geometry.canvas.width().0, scale).max(1);
    let img_height = to_pixels(geometry.canvas.height().0, scale).max(1);
    let mut image = RgbImage::from_pixel(img_width, img_height, BACKGROUND);

    for wall in &geometry.walls {
        draw_rectangle(&mut image, wall, scale, WALL, options.wireframes);
    }
    let goal = WallRectangle::new(geometry.goal.centre, geometry.goal.width, geometry.goal.height);
    draw_rectangle(&mut image, &goal, scale, GOAL, options.wireframes);
    draw_ball(&mut image, &geometry.start, scale, options.wireframes);

    if let Some(path) = options.output_file {
        image.save(path)
            .chain_err(|| format!("Failed to write maze image to {}", path.display()))?;
        info!("maze image written to {}", path.display());
    }

    Ok(image)
}

#[inline]
fn to_pixels(length: f64, scale: f64) -> u32 {
    (length * scale).round().max(0.0) as u32
}

fn draw_rectangle(image: &mut RgbImage,
                  rect: &WallRectangle,
                  scale: f64,
                  colour: Rgb<u8>,
                  outline_only: bool) {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return;
    }
    let clamp_x = |x: f64| to_pixels(x, scale).min(width - 1);
    let clamp_y = |y: f64| to_pixels(y, scale).min(height - 1);
    let (x1, x2) = (clamp_x(rect.left()), clamp_x(rect.right()));
    let (y1, y2) = (clamp_y(rect.top()), clamp_y(rect.bottom()));

    for x in x1..=x2 {
        for y in y1..=y2 {
            let on_edge = x == x1 || x == x2 || y == y1 || y == y2;
            if !outline_only || on_edge {
                image.put_pixel(x, y, colour);
            }
        }
    }
}

fn draw_ball(image: &mut RgbImage, start: &StartPoint, scale: f64, outline_only: bool) {
    let (width, height) = image.dimensions();
    let Point { x: cx, y: cy } = start.centre;
    let (cx, cy, radius) = (cx * scale, cy * scale, start.radius * scale);

    for x in 0..width {
        for y in 0..height {
            let distance = ((x as f64 - cx).powi(2) + (y as f64 - cy).powi(2)).sqrt();
            let inside = if outline_only {
                (distance - radius).abs() < 0.5
            } else {
                distance <= radius
            };
            if inside {
                image.put_pixel(x, y, BALL);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{export_geometry, Canvas};
    use crate::grid::WallMatrix;
    use crate::units::{Height, Width};

    fn single_cell_geometry() -> MazeGeometry {
        let canvas = Canvas::new(Width(100.0), Height(100.0), 5.0).unwrap();
        export_geometry(&WallMatrix::new(1, 0), &WallMatrix::new(0, 1), &canvas).unwrap()
    }

    #[test]
    fn image_matches_canvas_scale() {
        let options = RenderOptionsBuilder::new().pixels_per_unit(2.0).build();
        let image = render_geometry(&single_cell_geometry(), &options).unwrap();
        assert_eq!(image.dimensions(), (200, 200));
    }

    #[test]
    fn filled_bodies() {
        let image = render_geometry(&single_cell_geometry(), &RenderOptionsBuilder::new().build())
            .unwrap();
        // boundary
        assert_eq!(*image.get_pixel(50, 0), WALL);
        // ball over the goal at the centre
        assert_eq!(*image.get_pixel(50, 50), BALL);
        // goal outside the ball radius of 25
        assert_eq!(*image.get_pixel(20, 20), GOAL);
        // gap between goal and boundary
        assert_eq!(*image.get_pixel(5, 5), BACKGROUND);
    }

    #[test]
    fn wireframes_leave_bodies_hollow() {
        let options = RenderOptionsBuilder::new().wireframes(true).build();
        let image = render_geometry(&single_cell_geometry(), &options).unwrap();
        assert_eq!(*image.get_pixel(50, 50), BACKGROUND);
        assert_eq!(*image.get_pixel(15, 50), GOAL);
        assert_eq!(*image.get_pixel(50, 25), BALL);
    }

    #[test]
    fn bad_scale_is_rejected() {
        let options = RenderOptionsBuilder::new().pixels_per_unit(0.0).build();
        assert!(render_geometry(&single_cell_geometry(), &options).is_err());
    }
}
