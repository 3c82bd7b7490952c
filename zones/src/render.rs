//! Rendering: draws the zone editor scene onto a [`Surface`].
//!
//! The renderer reads editor and floorplan state and produces drawing calls;
//! it never mutates anything. Floorplan geometry is converted with the
//! editor's viewport, while the grid and every tile are drawn in the canvas
//! pixel frame, matching how the editor maps clicks to cells.
//!
//! Layers, bottom first: rooms, grid, walls, saved zones, the in-progress
//! zone, and the highlighted target cell.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::camera::{Point, Viewport, tile_corners};
use crate::config::{EditorConfig, Style};
use crate::consts::{MAX_CANVAS_PX, MIN_TILE_SIZE_PX};
use crate::engine::EditorCore;
use crate::floorplan::{Floorplan, Room, Wall};
use crate::tile::Tile;

/// Outline parameters for [`Surface::polygon`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke<'a> {
    pub color: &'a str,
    pub width: f64,
}

/// A 2D drawing target in canvas pixel coordinates.
pub trait Surface {
    type Error;

    /// Erase everything within `width` x `height`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the call fails.
    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    /// Stroke a straight line.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the call fails.
    fn line(&mut self, from: Point, to: Point, width: f64, color: &str) -> Result<(), Self::Error>;

    /// Draw a closed polygon, filled and/or outlined.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the call fails.
    fn polygon(&mut self, points: &[Point], fill: Option<&str>, stroke: Option<Stroke<'_>>) -> Result<(), Self::Error>;
}

/// Draw the full scene for `editor`.
///
/// # Errors
///
/// Propagates the first error returned by `surface`.
pub fn draw<S: Surface, F: Floorplan>(surface: &mut S, editor: &EditorCore<F>) -> Result<(), S::Error> {
    let config = editor.config();
    let style = &config.style;
    let viewport = editor.viewport();
    let floorplan = editor.floorplan();
    let (width, height) = editor.canvas_size();

    surface.clear(width, height)?;

    for room in floorplan.rooms() {
        draw_room(surface, room, &viewport, style)?;
    }

    draw_grid(surface, config, width, height)?;

    for wall in floorplan.walls() {
        draw_wall(surface, wall, &viewport, style)?;
    }

    for zone in floorplan.floor_zones() {
        for &tile in zone.tiles() {
            draw_tile(surface, tile, zone.color(), config)?;
        }
    }

    let current = editor.current_zone();
    for &tile in current.tiles() {
        draw_tile(surface, tile, current.color(), config)?;
    }

    draw_tile(surface, editor.target_tile(), current.color(), config)
}

// =============================================================
// Layers
// =============================================================

fn draw_room<S: Surface>(surface: &mut S, room: &Room, viewport: &Viewport, style: &Style) -> Result<(), S::Error> {
    if room.corners.len() < 3 {
        return Ok(());
    }
    let points: Vec<Point> = room.corners.iter().map(|&c| viewport.world_to_screen(c)).collect();
    surface.polygon(&points, Some(&style.room_color), None)
}

/// Grid lines at every tile boundary, anchored at the canvas pixel origin.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn draw_grid<S: Surface>(surface: &mut S, config: &EditorConfig, width: f64, height: f64) -> Result<(), S::Error> {
    let style = &config.style;
    if !drawable_tile_edge(config.tile_width) || !drawable_tile_edge(config.tile_height) {
        return Ok(());
    }
    let max_lines = (MAX_CANVAS_PX / MIN_TILE_SIZE_PX) as u64;
    let cols = ((width / config.tile_width).floor().max(0.0) as u64).min(max_lines);
    let rows = ((height / config.tile_height).floor().max(0.0) as u64).min(max_lines);

    for i in 0..=cols {
        let x = config.tile_width * i as f64;
        surface.line(Point::new(x, 0.0), Point::new(x, height), style.grid_line_width, &style.grid_color)?;
    }
    for i in 0..=rows {
        let y = config.tile_height * i as f64;
        surface.line(Point::new(0.0, y), Point::new(width, y), style.grid_line_width, &style.grid_color)?;
    }
    Ok(())
}

fn drawable_tile_edge(size: f64) -> bool {
    size.is_finite() && size >= MIN_TILE_SIZE_PX
}

/// A wall is a thick center line with both of its faces outlined.
fn draw_wall<S: Surface>(surface: &mut S, wall: &Wall, viewport: &Viewport, style: &Style) -> Result<(), S::Error> {
    let start = viewport.world_to_screen(wall.start);
    let end = viewport.world_to_screen(wall.end);
    surface.line(start, end, style.wall_width, &style.wall_color)?;

    let (dx, dy) = (end.x - start.x, end.y - start.y);
    let len = dx.hypot(dy);
    if len <= f64::EPSILON {
        return Ok(());
    }
    let half = style.wall_width / 2.0;
    let (nx, ny) = (-dy / len * half, dx / len * half);
    let faces = [
        Point::new(start.x + nx, start.y + ny),
        Point::new(end.x + nx, end.y + ny),
        Point::new(end.x - nx, end.y - ny),
        Point::new(start.x - nx, start.y - ny),
    ];
    surface.polygon(&faces, None, Some(Stroke { color: &style.edge_color, width: style.edge_width }))
}

fn draw_tile<S: Surface>(surface: &mut S, tile: Tile, color: &str, config: &EditorConfig) -> Result<(), S::Error> {
    let corners = tile_corners(tile, config.tile_width, config.tile_height);
    surface.polygon(&corners, Some(color), Some(Stroke { color, width: config.style.tile_stroke_width }))
}
