//! Shared numeric and style defaults for the zones crate.

// ── Scale ───────────────────────────────────────────────────────

/// Centimeters in one foot.
pub const CM_PER_FOOT: f64 = 30.48;

/// Default on-screen pixels per real-world foot.
pub const PIXELS_PER_FOOT: f64 = 15.0;

// ── Grid ────────────────────────────────────────────────────────

/// Default tile width in canvas pixels.
pub const TILE_WIDTH_PX: f64 = 32.0;

/// Default tile height in canvas pixels.
pub const TILE_HEIGHT_PX: f64 = 32.0;

/// Smallest accepted tile edge in canvas pixels.
pub const MIN_TILE_SIZE_PX: f64 = 1.0;

/// Largest canvas edge the editor will lay a grid over.
pub const MAX_CANVAS_PX: f64 = 16_384.0;

pub const GRID_LINE_WIDTH: f64 = 1.0;
pub const GRID_COLOR: &str = "#d1d1d1";

/// Stroke width used when outlining a zone tile.
pub const TILE_STROKE_WIDTH: f64 = 1.0;

// ── Floorplan geometry ──────────────────────────────────────────

pub const ROOM_COLOR: &str = "#f9f9f9";
pub const WALL_WIDTH: f64 = 5.0;
pub const WALL_COLOR: &str = "#dddddd";
pub const EDGE_COLOR: &str = "#888888";
pub const EDGE_WIDTH: f64 = 1.0;

// ── Zones ───────────────────────────────────────────────────────

/// Name given to every fresh in-progress zone.
pub const DEFAULT_ZONE_NAME: &str = "New Floor Zone";
