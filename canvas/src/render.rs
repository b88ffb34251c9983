//! Rendering: draws the full map scene to a [`Surface`].
//!
//! This module receives read-only views of the grid, the component list, and
//! the cursor preview, and produces pixels. It never mutates application
//! state. [`Surface`] is implemented for [`web_sys::CanvasRenderingContext2d`]
//! so the browser engine draws straight into the page; other implementations
//! (SVG output, test rasters) reuse the same drawing order.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use web_sys::CanvasRenderingContext2d;

use crate::consts::GRID_STROKE;
use crate::doc::{Component, ComponentList};
use crate::grid::GridConfig;

/// Minimal 2D drawing target used by the renderer.
pub trait Surface {
    /// Erase a rectangle back to transparent.
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    /// Start a new path, discarding any pending subpaths.
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Stroke the current path with `color`.
    fn stroke(&mut self, color: &str);
    /// Fill a rectangle with `color`.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
}

impl Surface for CanvasRenderingContext2d {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, w, h);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn stroke(&mut self, color: &str) {
        self.set_stroke_style_str(color);
        CanvasRenderingContext2d::stroke(self);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }
}

/// Draw one frame: clear, grid, placed components, then the cursor preview.
///
/// The preview is drawn last so it always sits on top of placed components.
pub fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    grid: &GridConfig,
    components: &ComponentList,
    preview: Option<&Component>,
) {
    let cell = grid.cell_size();

    // Layer 1: erase.
    surface.clear_rect(0.0, 0.0, grid.width(), grid.height());

    // Layer 2: grid lines.
    draw_grid(surface, grid);

    // Layer 3: components in insertion order (first placed is bottom-most).
    for component in components {
        component.render(surface, cell);
    }

    // Layer 4: preview.
    if let Some(preview) = preview {
        preview.render(surface, cell);
    }
}

/// Stroke every vertical and horizontal cell boundary, far edges included,
/// as a single path.
pub fn draw_grid<S: Surface + ?Sized>(surface: &mut S, grid: &GridConfig) {
    let cell = grid.cell_size();
    let (width, height) = (grid.width(), grid.height());

    surface.begin_path();
    for col in 0..=grid.columns() {
        let x = f64::from(col) * cell;
        surface.move_to(x, 0.0);
        surface.line_to(x, height);
    }
    for row in 0..=grid.rows() {
        let y = f64::from(row) * cell;
        surface.move_to(0.0, y);
        surface.line_to(width, y);
    }
    surface.stroke(GRID_STROKE);
}
