//! The floorplan the editor draws zones onto.
//!
//! The editor never owns room or wall geometry. It talks to the floorplan
//! through the [`Floorplan`] trait: reading the center to position the view,
//! and handing over saved zones. [`FloorplanDoc`] is the in-memory,
//! JSON-serializable implementation used by the CLI and the tests.

#[cfg(test)]
#[path = "floorplan_test.rs"]
mod floorplan_test;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::tile::Tile;
use crate::zone::{Zone, ZoneId};

#[derive(Debug, thiserror::Error)]
pub enum FloorplanError {
    #[error("invalid floorplan JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("zone id {id} is used by more than one saved zone")]
    DuplicateZoneId { id: ZoneId },
    #[error("tile ({row}, {col}) is claimed by both zone {first} and zone {second}")]
    SharedTile { row: i64, col: i64, first: ZoneId, second: ZoneId },
}

/// A room outline in world coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default)]
    pub name: String,
    pub corners: Vec<Point>,
}

/// A wall segment in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub start: Point,
    pub end: Point,
}

/// Boundary the editor uses to read geometry and store saved zones.
pub trait Floorplan {
    /// Saved zones, in insertion order.
    fn floor_zones(&self) -> &[Zone];

    /// Take ownership of a saved zone.
    fn add_floor_zone(&mut self, zone: Zone);

    /// Drop the zone with `id`. Returns `false` if no such zone exists.
    fn remove_floor_zone(&mut self, id: &ZoneId) -> bool;

    /// World-space center of the floorplan geometry.
    fn center(&self) -> Point;

    fn rooms(&self) -> &[Room];

    fn walls(&self) -> &[Wall];

    /// Replace room and wall geometry. Saved zones are kept.
    fn set_geometry(&mut self, rooms: Vec<Room>, walls: Vec<Wall>);

    /// The saved zone that owns `tile`, if any.
    fn zone_owning(&self, tile: Tile) -> Option<&Zone> {
        self.floor_zones().iter().find(|zone| zone.contains(tile))
    }
}

/// In-memory floorplan document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloorplanDoc {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub walls: Vec<Wall>,
    #[serde(default)]
    pub floor_zones: Vec<Zone>,
}

impl FloorplanDoc {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from JSON and check its saved zones.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::Json`] for malformed input, otherwise the
    /// errors of [`FloorplanDoc::check_zones`].
    pub fn from_json_str(raw: &str) -> Result<Self, FloorplanError> {
        let doc: Self = serde_json::from_str(raw)?;
        doc.check_zones()?;
        Ok(doc)
    }

    /// Verify that zone ids are unique and no tile belongs to two zones.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::DuplicateZoneId`] or
    /// [`FloorplanError::SharedTile`] for the first conflict found.
    pub fn check_zones(&self) -> Result<(), FloorplanError> {
        let mut ids = BTreeSet::new();
        let mut owners: BTreeMap<Tile, &ZoneId> = BTreeMap::new();
        for zone in &self.floor_zones {
            if !ids.insert(zone.id()) {
                return Err(FloorplanError::DuplicateZoneId { id: zone.id().clone() });
            }
            for &tile in zone.tiles() {
                if let Some(first) = owners.insert(tile, zone.id()) {
                    return Err(FloorplanError::SharedTile {
                        row: tile.row(),
                        col: tile.col(),
                        first: first.clone(),
                        second: zone.id().clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Serialize the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn corners(&self) -> impl Iterator<Item = Point> + '_ {
        self.rooms
            .iter()
            .flat_map(|room| room.corners.iter().copied())
            .chain(self.walls.iter().flat_map(|wall| [wall.start, wall.end]))
    }
}

impl Floorplan for FloorplanDoc {
    fn floor_zones(&self) -> &[Zone] {
        &self.floor_zones
    }

    fn add_floor_zone(&mut self, zone: Zone) {
        self.floor_zones.push(zone);
    }

    fn remove_floor_zone(&mut self, id: &ZoneId) -> bool {
        let before = self.floor_zones.len();
        self.floor_zones.retain(|zone| zone.id() != id);
        self.floor_zones.len() != before
    }

    /// Center of the bounding box of every room corner and wall endpoint.
    fn center(&self) -> Point {
        let mut corners = self.corners();
        let Some(first) = corners.next() else {
            return Point::default();
        };
        let (mut min, mut max) = (first, first);
        for p in corners {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Point::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0)
    }

    fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    fn walls(&self) -> &[Wall] {
        &self.walls
    }

    fn set_geometry(&mut self, rooms: Vec<Room>, walls: Vec<Wall>) {
        self.rooms = rooms;
        self.walls = walls;
    }
}
