//! Scripted editor sessions.
//!
//! A script is a JSON array of steps. Pointer steps use the same tagged shape
//! as [`PointerEvent`] (`{"type":"press","x":50,"y":10}`); zone and canvas
//! steps drive the save, remove, and reset protocols.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use serde::Deserialize;
use tracing::debug;
use zones::engine::{Action, EditorCore};
use zones::floorplan::Floorplan;
use zones::input::PointerEvent;
use zones::zone::{Zone, ZoneId};

/// Zone list and canvas operations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ZoneStep {
    /// Name and commit the in-progress zone.
    Save { name: String },
    /// Remove a saved zone by id.
    Remove { id: ZoneId },
    /// Remove the first saved zone with this name.
    RemoveNamed { name: String },
    /// Resize the canvas, which re-centers the view.
    Resize { width: f64, height: f64 },
}

/// One scripted step.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Pointer(PointerEvent),
    Zone(ZoneStep),
}

/// Totals gathered while replaying a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub steps: usize,
    pub renders: usize,
    pub toggles: usize,
    pub saves: usize,
    pub removals: usize,
}

impl ReplaySummary {
    fn record(&mut self, actions: &[Action]) {
        for action in actions {
            match action {
                Action::RenderNeeded => self.renders += 1,
                Action::TileToggled { .. } => self.toggles += 1,
                Action::ZoneSaved { .. } => self.saves += 1,
                Action::ZoneRemoved { .. } => self.removals += 1,
                Action::ZoneListChanged => {}
            }
        }
    }
}

/// Parse a script from JSON.
///
/// # Errors
///
/// Returns the `serde_json` error for malformed input or unknown step types.
pub fn parse(raw: &str) -> Result<Vec<Step>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Apply `steps` to `editor` in order.
pub fn replay<F: Floorplan>(editor: &mut EditorCore<F>, steps: &[Step]) -> ReplaySummary {
    let mut summary = ReplaySummary::default();
    for step in steps {
        debug!(?step, "replay step");
        let actions = apply(editor, step);
        summary.steps += 1;
        summary.record(&actions);
    }
    summary
}

fn apply<F: Floorplan>(editor: &mut EditorCore<F>, step: &Step) -> Vec<Action> {
    match step {
        Step::Pointer(event) => editor.handle(*event),
        Step::Zone(ZoneStep::Save { name }) => editor.save_current_zone(name),
        Step::Zone(ZoneStep::Remove { id }) => editor.remove_zone(id),
        Step::Zone(ZoneStep::RemoveNamed { name }) => {
            let id = editor.floor_zones().iter().find(|z| z.name() == name).map(Zone::id).cloned();
            match id {
                Some(id) => editor.remove_zone(&id),
                None => {
                    debug!(zone_name = %name, "remove ignored; no zone with that name");
                    Vec::new()
                }
            }
        }
        Step::Zone(ZoneStep::Resize { width, height }) => editor.resize(*width, *height),
    }
}
