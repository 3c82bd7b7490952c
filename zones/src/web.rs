//! Browser host: draws onto an HTML canvas through `CanvasRenderingContext2d`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::Point;
use crate::config::EditorConfig;
use crate::engine::{Action, EditorCore};
use crate::floorplan::FloorplanDoc;
use crate::input::PointerEvent;
use crate::render::{self, Stroke, Surface};
use crate::zone::ZoneId;

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error> {
        self.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, width: f64, color: &str) -> Result<(), Self::Error> {
        self.begin_path();
        self.move_to(from.x, from.y);
        self.line_to(to.x, to.y);
        self.set_line_width(width);
        self.set_stroke_style_str(color);
        self.stroke();
        Ok(())
    }

    fn polygon(&mut self, points: &[Point], fill: Option<&str>, stroke: Option<Stroke<'_>>) -> Result<(), Self::Error> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        self.begin_path();
        self.move_to(first.x, first.y);
        for p in rest {
            self.line_to(p.x, p.y);
        }
        self.close_path();
        if let Some(color) = fill {
            self.set_fill_style_str(color);
            self.fill();
        }
        if let Some(stroke) = stroke {
            self.set_line_width(stroke.width);
            self.set_stroke_style_str(stroke.color);
            self.stroke();
        }
        Ok(())
    }
}

/// The full editor. Wraps `EditorCore` and owns the browser canvas element.
pub struct Editor {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EditorCore<FloorplanDoc>,
}

impl Editor {
    /// Create an editor bound to `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, floorplan: FloorplanDoc, config: EditorConfig) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, core: EditorCore::new(floorplan, config) })
    }

    /// Feed a pointer event and repaint if needed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if drawing fails.
    pub fn handle(&mut self, event: PointerEvent) -> Result<Vec<Action>, JsValue> {
        let actions = self.core.handle(event);
        self.render_if_needed(&actions)?;
        Ok(actions)
    }

    /// Resize the backing canvas and re-center the view.
    ///
    /// # Errors
    ///
    /// Returns `Err` if drawing fails.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<Vec<Action>, JsValue> {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        let actions = self.core.resize(f64::from(width), f64::from(height));
        self.render_if_needed(&actions)?;
        Ok(actions)
    }

    /// Save the in-progress zone under `name` and repaint.
    ///
    /// # Errors
    ///
    /// Returns `Err` if drawing fails.
    pub fn save_current_zone(&mut self, name: &str) -> Result<Vec<Action>, JsValue> {
        let actions = self.core.save_current_zone(name);
        self.render_if_needed(&actions)?;
        Ok(actions)
    }

    /// Remove a saved zone and repaint.
    ///
    /// # Errors
    ///
    /// Returns `Err` if drawing fails.
    pub fn remove_zone(&mut self, id: &ZoneId) -> Result<Vec<Action>, JsValue> {
        let actions = self.core.remove_zone(id);
        self.render_if_needed(&actions)?;
        Ok(actions)
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any canvas call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        render::draw(&mut self.ctx, &self.core)
    }

    fn render_if_needed(&mut self, actions: &[Action]) -> Result<(), JsValue> {
        if actions.contains(&Action::RenderNeeded) {
            self.render()?;
        }
        Ok(())
    }
}
