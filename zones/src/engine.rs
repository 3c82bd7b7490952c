//! Zone editor controller.
//!
//! `EditorCore` owns everything the editor mutates: the in-progress zone, the
//! gesture state, the pointer position, and the pan origin. Saved zones live in
//! the [`Floorplan`], which the core holds and writes to only through the
//! trait. Every handler returns the [`Action`]s the host should react to
//! (repaint, rebuild the zone list), so the core stays free of any canvas or
//! DOM dependency and can be driven directly from tests.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::camera::{Point, Viewport};
use crate::color::{generate_color, generate_distinct_color};
use crate::config::EditorConfig;
use crate::consts::MAX_CANVAS_PX;
use crate::floorplan::{Floorplan, FloorplanDoc, Room, Wall};
use crate::input::{InputState, PointerEvent, PointerState};
use crate::tile::Tile;
use crate::zone::{Zone, ZoneId};

/// Actions returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The visible state changed; repaint.
    RenderNeeded,
    /// A tile was added to (`added`) or removed from the in-progress zone.
    TileToggled { tile: Tile, added: bool },
    /// The in-progress zone was handed to the floorplan.
    ZoneSaved { id: ZoneId },
    /// A saved zone was dropped from the floorplan.
    ZoneRemoved { id: ZoneId },
    /// The set of saved zones changed; rebuild the zone list.
    ZoneListChanged,
}

/// One row of the zone list UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneListEntry {
    pub id: ZoneId,
    pub name: String,
    pub color: String,
    pub tile_count: usize,
    /// `true` for saved zones (offer remove), `false` for the in-progress zone (offer save).
    pub saved: bool,
}

impl ZoneListEntry {
    fn from_zone(zone: &Zone, saved: bool) -> Self {
        Self {
            id: zone.id().clone(),
            name: zone.name().to_owned(),
            color: zone.color().to_owned(),
            tile_count: zone.len(),
            saved,
        }
    }
}

/// Editor state: all logic that doesn't depend on a drawing surface.
pub struct EditorCore<F = FloorplanDoc> {
    floorplan: F,
    config: EditorConfig,
    viewport: Viewport,
    pointer: PointerState,
    input: InputState,
    /// World-space point under the cursor; the highlighted cell is derived from it.
    target: Point,
    current: Zone,
    rng: StdRng,
    canvas_width: f64,
    canvas_height: f64,
}

impl Default for EditorCore<FloorplanDoc> {
    fn default() -> Self {
        Self::new(FloorplanDoc::new(), EditorConfig::default())
    }
}

impl<F: Floorplan> EditorCore<F> {
    #[must_use]
    pub fn new(floorplan: F, config: EditorConfig) -> Self {
        let mut rng = match config.color_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let current = Zone::new(config.default_zone_name.clone(), generate_color(&mut rng), None);
        Self {
            viewport: Viewport::new(config.scale()),
            floorplan,
            config,
            pointer: PointerState::default(),
            input: InputState::default(),
            target: Point::default(),
            current,
            rng,
            canvas_width: 0.0,
            canvas_height: 0.0,
        }
    }

    // --- Input events ---

    /// Dispatch a raw pointer event to the matching handler.
    pub fn handle(&mut self, event: PointerEvent) -> Vec<Action> {
        let pt = event.position();
        match event {
            PointerEvent::Press { .. } => self.on_pointer_down(pt),
            PointerEvent::Move { .. } => self.on_pointer_move(pt),
            PointerEvent::Release { .. } => self.on_pointer_up(pt),
            PointerEvent::Leave { .. } => self.on_pointer_leave(pt),
        }
    }

    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Vec<Action> {
        self.input = InputState::Pressed { last_screen: screen_pt, moved: false };
        self.track_pointer(screen_pt)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        if let InputState::Pressed { last_screen, .. } = self.input {
            if self.config.drag_pan {
                self.viewport.pan_by(last_screen.x - screen_pt.x, last_screen.y - screen_pt.y);
            }
            self.input = InputState::Pressed { last_screen: screen_pt, moved: true };
        }
        self.track_pointer(screen_pt);
        vec![Action::RenderNeeded]
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point) -> Vec<Action> {
        let InputState::Pressed { moved, .. } = self.input else {
            return Vec::new();
        };
        self.input = InputState::Idle;
        if moved {
            debug!("drag released; no tile change");
            return Vec::new();
        }
        let retargeted = !self.track_pointer(screen_pt).is_empty();
        let mut actions = self.toggle_target();
        if retargeted && actions.is_empty() {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    pub fn on_pointer_leave(&mut self, _screen_pt: Point) -> Vec<Action> {
        if self.input.is_pressed() {
            debug!("pointer left canvas; gesture aborted");
        }
        self.input = InputState::Idle;
        Vec::new()
    }

    // --- Zones ---

    /// Name the in-progress zone, hand it to the floorplan, and start a new one.
    ///
    /// Empty and duplicate names are accepted as-is.
    pub fn save_current_zone(&mut self, name: &str) -> Vec<Action> {
        let fresh = self.fresh_zone();
        let mut zone = std::mem::replace(&mut self.current, fresh);
        zone.rename(name);
        let id = zone.id().clone();
        info!(zone_id = %id, zone_name = name, tiles = zone.len(), "zone saved");
        self.floorplan.add_floor_zone(zone);
        vec![Action::ZoneSaved { id }, Action::ZoneListChanged, Action::RenderNeeded]
    }

    /// Drop a saved zone. Unknown ids are ignored.
    pub fn remove_zone(&mut self, id: &ZoneId) -> Vec<Action> {
        if !self.floorplan.remove_floor_zone(id) {
            debug!(zone_id = %id, "remove ignored; no such zone");
            return Vec::new();
        }
        info!(zone_id = %id, "zone removed");
        vec![Action::ZoneRemoved { id: id.clone() }, Action::ZoneListChanged, Action::RenderNeeded]
    }

    // --- Viewport ---

    /// Set the canvas size in pixels and re-center the view.
    ///
    /// Each edge is clamped to `0..=MAX_CANVAS_PX`; NaN counts as zero.
    pub fn resize(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.canvas_width = canvas_extent("width", width);
        self.canvas_height = canvas_extent("height", height);
        self.reset()
    }

    /// Replace floorplan geometry and re-center the view.
    pub fn load_geometry(&mut self, rooms: Vec<Room>, walls: Vec<Wall>) -> Vec<Action> {
        self.floorplan.set_geometry(rooms, walls);
        self.reset()
    }

    /// Center the floorplan in the canvas and request a full redraw.
    ///
    /// The target point keeps its world position, so the highlighted cell may
    /// move when the origin changes.
    pub fn reset(&mut self) -> Vec<Action> {
        self.viewport =
            Viewport::centered(self.floorplan.center(), self.canvas_width, self.canvas_height, self.config.scale());
        info!(
            origin_x = self.viewport.origin_x,
            origin_y = self.viewport.origin_y,
            width = self.canvas_width,
            height = self.canvas_height,
            "view reset"
        );
        vec![Action::ZoneListChanged, Action::RenderNeeded]
    }

    // --- Queries ---

    #[must_use]
    pub fn floorplan(&self) -> &F {
        &self.floorplan
    }

    /// Give up the editor and return the floorplan with its saved zones.
    #[must_use]
    pub fn into_floorplan(self) -> F {
        self.floorplan
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn floor_zones(&self) -> &[Zone] {
        self.floorplan.floor_zones()
    }

    #[must_use]
    pub fn current_zone(&self) -> &Zone {
        &self.current
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    #[must_use]
    pub fn input_state(&self) -> InputState {
        self.input
    }

    /// Canvas width and height in pixels.
    #[must_use]
    pub fn canvas_size(&self) -> (f64, f64) {
        (self.canvas_width, self.canvas_height)
    }

    /// The grid cell currently under the cursor, recomputed on every call.
    #[must_use]
    pub fn target_tile(&self) -> Tile {
        self.viewport.world_to_grid(self.target, self.config.tile_width, self.config.tile_height)
    }

    /// Id of the saved zone that owns `tile`, if any.
    #[must_use]
    pub fn owner_of(&self, tile: Tile) -> Option<&ZoneId> {
        self.floorplan.zone_owning(tile).map(Zone::id)
    }

    /// Saved zones in collection order, followed by the in-progress zone.
    #[must_use]
    pub fn zone_listing(&self) -> Vec<ZoneListEntry> {
        self.floorplan
            .floor_zones()
            .iter()
            .map(|zone| ZoneListEntry::from_zone(zone, true))
            .chain(std::iter::once(ZoneListEntry::from_zone(&self.current, false)))
            .collect()
    }

    // --- Internals ---

    /// Record the pointer position and retarget. Returns a render request when
    /// the highlighted cell changed.
    fn track_pointer(&mut self, screen_pt: Point) -> Vec<Action> {
        let before = self.target_tile();
        self.pointer = PointerState { screen: screen_pt, world: self.viewport.screen_to_world(screen_pt) };
        self.target = self.pointer.world;
        if self.target_tile() == before {
            Vec::new()
        } else {
            vec![Action::RenderNeeded]
        }
    }

    fn toggle_target(&mut self) -> Vec<Action> {
        let tile = self.target_tile();
        if let Some(owner) = self.floorplan.zone_owning(tile) {
            debug!(row = tile.row(), col = tile.col(), zone_id = %owner.id(), "tile already owned; toggle rejected");
            return Vec::new();
        }
        let added = !self.current.contains(tile);
        self.current.toggle_tile(tile);
        debug!(row = tile.row(), col = tile.col(), added, "tile toggled");
        vec![Action::TileToggled { tile, added }, Action::RenderNeeded]
    }

    fn fresh_zone(&mut self) -> Zone {
        let color = generate_distinct_color(&mut self.rng, self.current.color());
        Zone::new(self.config.default_zone_name.clone(), color, None)
    }
}

fn canvas_extent(edge: &'static str, value: f64) -> f64 {
    if (0.0..=MAX_CANVAS_PX).contains(&value) {
        return value;
    }
    let clamped = if value.is_nan() { 0.0 } else { value.clamp(0.0, MAX_CANVAS_PX) };
    warn!(edge, requested = value, used = clamped, "canvas size out of range; clamped");
    clamped
}
