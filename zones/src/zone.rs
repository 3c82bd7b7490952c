//! Floor zones: named, colored collections of grid tiles.
//!
//! A zone only knows about its own tiles. The cross-zone rule that a tile
//! belongs to at most one saved zone is enforced by the editor before it
//! calls [`Zone::toggle_tile`].

#[cfg(test)]
#[path = "zone_test.rs"]
mod zone_test;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tile::Tile;

/// Opaque unique identifier for a zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(String);

impl ZoneId {
    /// Generate a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ZoneId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ZoneId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, colored set of tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    id: ZoneId,
    name: String,
    /// CSS color string used to paint the zone's tiles.
    color: String,
    #[serde(default)]
    tiles: BTreeSet<Tile>,
}

impl Zone {
    /// Create an empty zone. A fresh id is generated when `id` is `None`.
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>, id: Option<ZoneId>) -> Self {
        Self {
            id: id.unwrap_or_else(ZoneId::generate),
            name: name.into(),
            color: color.into(),
            tiles: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &ZoneId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Read-only view of the zone's tiles.
    #[must_use]
    pub fn tiles(&self) -> &BTreeSet<Tile> {
        &self.tiles
    }

    /// Replace the display name. Empty names are accepted.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Remove `tile` if present, otherwise insert it.
    ///
    /// This is the only way to change tile membership, so applying the same
    /// toggle twice always restores the previous set.
    pub fn toggle_tile(&mut self, tile: Tile) {
        if !self.tiles.remove(&tile) {
            self.tiles.insert(tile);
        }
    }

    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
