//! Input model: pointer events and the click/drag gesture state machine.
//!
//! The editor only distinguishes a click (press then release with no move in
//! between) from a drag. `InputState` carries the press context, so the moved
//! flag cannot exist outside an active press.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;

/// A raw pointer event in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerEvent {
    Press { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Release { x: f64, y: f64 },
    /// The pointer left the canvas.
    Leave { x: f64, y: f64 },
}

impl PointerEvent {
    /// Screen-space position carried by the event.
    #[must_use]
    pub fn position(self) -> Point {
        match self {
            Self::Press { x, y } | Self::Move { x, y } | Self::Release { x, y } | Self::Leave { x, y } => {
                Point::new(x, y)
            }
        }
    }
}

/// Latest pointer position, in both screen and world space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub screen: Point,
    pub world: Point,
}

/// Gesture state between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// No press in progress.
    #[default]
    Idle,
    /// The pointer is held down.
    Pressed {
        /// Screen position of the press, advanced on each pan step.
        last_screen: Point,
        /// Latched once any move arrives before release.
        moved: bool,
    },
}

impl InputState {
    #[must_use]
    pub fn is_pressed(self) -> bool {
        matches!(self, Self::Pressed { .. })
    }
}
