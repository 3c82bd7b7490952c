//! Editor configuration: grid size, scale, and drawing style.
//!
//! A single [`EditorConfig`] is passed to the editor and the renderer at
//! construction, so separate editor instances can run at different scales.
//! Every field has a default; a JSON config file only needs the keys it
//! overrides.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::Scale;
use crate::consts;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Colors and stroke widths used by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub grid_line_width: f64,
    pub grid_color: String,
    pub room_color: String,
    pub wall_width: f64,
    pub wall_color: String,
    pub edge_color: String,
    pub edge_width: f64,
    pub tile_stroke_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            grid_line_width: consts::GRID_LINE_WIDTH,
            grid_color: consts::GRID_COLOR.to_owned(),
            room_color: consts::ROOM_COLOR.to_owned(),
            wall_width: consts::WALL_WIDTH,
            wall_color: consts::WALL_COLOR.to_owned(),
            edge_color: consts::EDGE_COLOR.to_owned(),
            edge_width: consts::EDGE_WIDTH,
            tile_stroke_width: consts::TILE_STROKE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Tile width in canvas pixels.
    pub tile_width: f64,
    /// Tile height in canvas pixels.
    pub tile_height: f64,
    pub pixels_per_foot: f64,
    /// Name given to each fresh in-progress zone.
    pub default_zone_name: String,
    /// Pan the view while dragging. Off by default; dragging never edits tiles.
    pub drag_pan: bool,
    /// Seed for zone color generation. `None` draws from OS entropy.
    pub color_seed: Option<u64>,
    pub style: Style,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tile_width: consts::TILE_WIDTH_PX,
            tile_height: consts::TILE_HEIGHT_PX,
            pixels_per_foot: consts::PIXELS_PER_FOOT,
            default_zone_name: consts::DEFAULT_ZONE_NAME.to_owned(),
            drag_pan: false,
            color_seed: None,
            style: Style::default(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a config from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and
    /// [`ConfigError::Invalid`] when a value fails validation.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise the
    /// same errors as [`EditorConfig::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.display().to_string(), source })?;
        Self::from_json_str(&raw)
    }

    /// Reject values that would break the coordinate transform.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_at_least("tile_width", self.tile_width, consts::MIN_TILE_SIZE_PX)?;
        require_at_least("tile_height", self.tile_height, consts::MIN_TILE_SIZE_PX)?;
        require_positive("pixels_per_foot", self.pixels_per_foot)?;
        Ok(())
    }

    /// The fixed pixel/centimeter scale implied by `pixels_per_foot`.
    #[must_use]
    pub fn scale(&self) -> Scale {
        Scale::from_pixels_per_foot(self.pixels_per_foot)
    }
}

fn require_at_least(field: &'static str, value: f64, min: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= min {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: format!("must be a number >= {min}, got {value}") })
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: format!("must be a positive number, got {value}") })
    }
}
