//! SVG output for the renderer, used for headless snapshots.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use std::fmt::Write;

use crate::camera::Point;
use crate::render::{Stroke, Surface};

/// Accumulates drawing calls as SVG elements.
#[derive(Debug, Default)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
}

impl SvgSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the accumulated elements in an `<svg>` document.
    #[must_use]
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }
}

impl Surface for SvgSurface {
    type Error = std::fmt::Error;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error> {
        self.width = width;
        self.height = height;
        self.body.clear();
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, width: f64, color: &str) -> Result<(), Self::Error> {
        writeln!(
            self.body,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            from.x,
            from.y,
            to.x,
            to.y,
            escape(color),
            width
        )
    }

    fn polygon(&mut self, points: &[Point], fill: Option<&str>, stroke: Option<Stroke<'_>>) -> Result<(), Self::Error> {
        self.body.push_str("<polygon points=\"");
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                self.body.push(' ');
            }
            write!(self.body, "{},{}", p.x, p.y)?;
        }
        write!(self.body, "\" fill=\"{}\"", fill.map_or_else(|| "none".to_owned(), escape))?;
        if let Some(stroke) = stroke {
            write!(self.body, " stroke=\"{}\" stroke-width=\"{}\"", escape(stroke.color), stroke.width)?;
        }
        self.body.push_str("/>\n");
        Ok(())
    }
}

/// Escape a value for use inside a double-quoted XML attribute.
fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('"', "&quot;").replace('<', "&lt;")
}
