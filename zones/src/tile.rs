//! Grid tile: the unit cell a zone is built from.

#[cfg(test)]
#[path = "tile_test.rs"]
mod tile_test;

use serde::{Deserialize, Serialize};

/// One grid cell, identified by integer row and column indices.
///
/// Tiles are plain values: two tiles are equal iff both indices match.
/// Ordering is row-major and exists only so zones can keep their tiles in a
/// deterministic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    row: i64,
    col: i64,
}

impl Tile {
    #[must_use]
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub fn row(self) -> i64 {
        self.row
    }

    #[must_use]
    pub fn col(self) -> i64 {
        self.col
    }
}
