use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::doc::{Component, ComponentList};
use crate::grid::{CanvasBounds, GridConfig, Point, Snapped, locate};
use crate::input::Selection;
use crate::render::{self, Surface};
use crate::transfer::{self, ImportError};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    CursorMoved(Point),
    ComponentPlaced(Component),
}

/// Core editor state: everything that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone, Default)]
pub struct EditorCore {
    pub grid: GridConfig,
    pub bounds: CanvasBounds,
    pub components: ComponentList,
    /// Last in-bounds snapped pointer position; `None` until the pointer first
    /// enters the canvas.
    pub cursor: Option<Point>,
}

impl EditorCore {
    #[must_use]
    pub fn new(grid: GridConfig) -> Self {
        Self { grid, ..Self::default() }
    }

    // --- Geometry ---

    /// Refresh the cached on-screen canvas origin. Call after resize or scroll.
    pub fn set_bounds(&mut self, bounds: CanvasBounds) {
        log::debug!("canvas bounds now ({}, {})", bounds.left, bounds.top);
        self.bounds = bounds;
    }

    /// Snap a client-space pointer position against the cached bounds.
    #[must_use]
    pub fn locate(&self, client: Point) -> Snapped {
        locate(client, &self.bounds, &self.grid)
    }

    // --- Input events ---

    /// Track the cursor cell. Outside the canvas the last position is kept, so
    /// the preview freezes at the edge.
    pub fn on_pointer_move(&mut self, client: Point) -> Action {
        let snapped = self.locate(client);
        if !snapped.is_inside() {
            return Action::None;
        }
        let at = snapped.point();
        if self.cursor == Some(at) {
            return Action::None;
        }
        self.cursor = Some(at);
        Action::CursorMoved(at)
    }

    /// Place a component at the pointer's cell, if the pointer is on the canvas.
    pub fn on_pointer_down(&mut self, client: Point, selection: &Selection) -> Action {
        let snapped = self.locate(client);
        if !snapped.is_inside() {
            return Action::None;
        }
        let component = selection.place(snapped.point());
        log::debug!(
            "placed {}x{} {} at ({}, {})",
            component.width,
            component.height,
            component.color,
            component.x,
            component.y
        );
        self.components.append(component.clone());
        Action::ComponentPlaced(component)
    }

    // --- List operations ---

    /// Remove every placed component. The next redraw shows an empty map.
    pub fn clear(&mut self) {
        log::info!("cleared {} components", self.components.len());
        self.components.clear();
    }

    /// Append the components in `text`. Returns how many were added.
    ///
    /// # Errors
    ///
    /// Returns an [`ImportError`] and leaves the list unchanged if any part of
    /// `text` is malformed.
    pub fn import_json(&mut self, text: &str) -> Result<usize, ImportError> {
        let added = transfer::import_into(&mut self.components, text)?;
        log::info!("imported {added} components ({} total)", self.components.len());
        Ok(added)
    }

    /// Serialize the placed components in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error only if serialization itself fails.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        let json = transfer::export(&self.components)?;
        log::info!("exported {} components", self.components.len());
        Ok(json)
    }

    // --- Render ---

    /// The cursor preview for `selection`, if the pointer has entered the canvas.
    #[must_use]
    pub fn preview(&self, selection: &Selection) -> Option<Component> {
        self.cursor.map(|at| selection.preview(at))
    }

    /// Draw one frame. Without a selection no preview is drawn.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, selection: Option<&Selection>) {
        let preview = selection.and_then(|sel| self.preview(sel));
        render::draw(surface, &self.grid, &self.components, preview.as_ref());
    }
}

/// The full canvas engine. Wraps `EditorCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EditorCore,
}

impl Engine {
    /// Bind to `canvas`, sizing its backing store to the grid.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, grid: GridConfig) -> Result<Self, JsValue> {
        canvas.set_width(pixels(grid.width()));
        canvas.set_height(pixels(grid.height()));
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, core: EditorCore::new(grid) })
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Re-read the canvas's on-screen position into the bounds cache.
    pub fn refresh_bounds(&mut self) {
        let rect = self.canvas.get_bounding_client_rect();
        self.core.set_bounds(CanvasBounds::new(rect.left(), rect.top()));
    }

    // --- Delegated input events ---

    pub fn on_pointer_move(&mut self, client: Point) -> Action {
        self.core.on_pointer_move(client)
    }

    pub fn on_pointer_down(&mut self, client: Point, selection: &Selection) -> Action {
        self.core.on_pointer_down(client, selection)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    pub fn render(&mut self, selection: Option<&Selection>) {
        self.core.draw(&mut self.ctx, selection);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixels(len: f64) -> u32 {
    len.max(0.0).round() as u32
}
