//! Coordinate transforms between screen pixels, world centimeters and grid cells.
//!
//! The pan origin is stored in pixel units and converted to world units at the
//! point of use. Grid cells are computed from a round-tripped pixel position,
//! so the grid stays anchored to the canvas pixel frame while panning moves the
//! world underneath it.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::CM_PER_FOOT;
use crate::tile::Tile;

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fixed pixel/centimeter scale. There is no zoom, so this never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub cm_per_pixel: f64,
    pub pixels_per_cm: f64,
}

impl Scale {
    /// Derive the scale from a real-world foot-to-pixel ratio.
    #[must_use]
    pub fn from_pixels_per_foot(pixels_per_foot: f64) -> Self {
        let cm_per_pixel = CM_PER_FOOT * (1.0 / pixels_per_foot);
        Self { cm_per_pixel, pixels_per_cm: 1.0 / cm_per_pixel }
    }
}

/// Pannable view onto the floorplan.
///
/// `origin_x` / `origin_y` are in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub origin_x: f64,
    pub origin_y: f64,
    pub scale: Scale,
}

impl Viewport {
    /// A viewport with its origin at the canvas corner.
    #[must_use]
    pub fn new(scale: Scale) -> Self {
        Self { origin_x: 0.0, origin_y: 0.0, scale }
    }

    /// A viewport whose origin places `center` (world space) in the middle of
    /// a `canvas_w` x `canvas_h` pixel canvas.
    #[must_use]
    pub fn centered(center: Point, canvas_w: f64, canvas_h: f64, scale: Scale) -> Self {
        Self {
            origin_x: center.x * scale.pixels_per_cm - canvas_w / 2.0,
            origin_y: center.y * scale.pixels_per_cm - canvas_h / 2.0,
            scale,
        }
    }

    /// Convert a screen-space point (canvas pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        let cm = self.scale.cm_per_pixel;
        Point {
            x: screen.x * cm + self.origin_x * cm,
            y: screen.y * cm + self.origin_y * cm,
        }
    }

    /// Convert a world-space point to screen coordinates (canvas pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        let cm = self.scale.cm_per_pixel;
        Point {
            x: (world.x - self.origin_x * cm) * self.scale.pixels_per_cm,
            y: (world.y - self.origin_y * cm) * self.scale.pixels_per_cm,
        }
    }

    /// The grid cell containing `world`, for tiles of `tile_w` x `tile_h` pixels.
    #[must_use]
    pub fn world_to_grid(&self, world: Point, tile_w: f64, tile_h: f64) -> Tile {
        let screen = self.world_to_screen(world);
        Tile::new(floor_index(screen.y / tile_h), floor_index(screen.x / tile_w))
    }

    /// Shift the origin by a pixel delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.origin_x += dx;
        self.origin_y += dy;
    }
}

/// Corners of `tile` in canvas pixels, clockwise from the top-left.
#[must_use]
pub fn tile_corners(tile: Tile, tile_w: f64, tile_h: f64) -> [Point; 4] {
    #[allow(clippy::cast_precision_loss)]
    let (col, row) = (tile.col() as f64, tile.row() as f64);
    [
        Point::new(col * tile_w, row * tile_h),
        Point::new((col + 1.0) * tile_w, row * tile_h),
        Point::new((col + 1.0) * tile_w, (row + 1.0) * tile_h),
        Point::new(col * tile_w, (row + 1.0) * tile_h),
    ]
}

#[allow(clippy::cast_possible_truncation)]
fn floor_index(v: f64) -> i64 {
    v.floor() as i64
}
