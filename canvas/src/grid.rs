//! Grid geometry: configuration, cached canvas bounds, and pointer snapping.
//!
//! Pointer events arrive in client (viewport) coordinates. They are converted
//! to canvas-relative coordinates using the cached [`CanvasBounds`], then
//! floored to the top-left corner of the enclosing cell. Out-of-bounds results
//! are normal and carried as flags on [`Snapped`]; callers decide what to do.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::consts::{DEFAULT_CELL_SIZE, DEFAULT_COLUMNS, DEFAULT_ROWS};

/// A point in client or canvas space, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Error returned by [`GridConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
    #[error("grid must have at least one column")]
    ZeroColumns,
    #[error("grid must have at least one row")]
    ZeroRows,
}

/// Fixed grid dimensions. Set once at startup; there is no zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    cell_size: u32,
    columns: u32,
    rows: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cell_size: DEFAULT_CELL_SIZE, columns: DEFAULT_COLUMNS, rows: DEFAULT_ROWS }
    }
}

impl GridConfig {
    /// Build a grid of `columns` × `rows` cells, each `cell_size` pixels square.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if any dimension is zero.
    pub fn new(cell_size: u32, columns: u32, rows: u32) -> Result<Self, GridError> {
        if cell_size == 0 {
            return Err(GridError::ZeroCellSize);
        }
        if columns == 0 {
            return Err(GridError::ZeroColumns);
        }
        if rows == 0 {
            return Err(GridError::ZeroRows);
        }
        Ok(Self { cell_size, columns, rows })
    }

    /// Pixel length of one cell.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        f64::from(self.cell_size)
    }

    #[must_use]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        f64::from(self.cell_size) * f64::from(self.columns)
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        f64::from(self.cell_size) * f64::from(self.rows)
    }

    /// Floor a canvas-relative point to its cell corner and bounds-check it.
    #[must_use]
    pub fn snap(&self, relative: Point) -> Snapped {
        let cell = self.cell_size();
        let x = (relative.x / cell).floor() * cell;
        let y = (relative.y / cell).floor() * cell;
        Snapped {
            x,
            y,
            within_x: 0.0 <= x && x < self.width(),
            within_y: 0.0 <= y && y < self.height(),
        }
    }
}

/// On-screen origin of the canvas element, as last reported by the browser.
///
/// Stale until [`crate::engine::EditorCore::set_bounds`] is called after a
/// resize or scroll.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasBounds {
    pub left: f64,
    pub top: f64,
}

impl CanvasBounds {
    #[must_use]
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Convert a client-space point to canvas-relative coordinates.
    #[must_use]
    pub fn to_canvas(&self, client: Point) -> Point {
        Point { x: client.x - self.left, y: client.y - self.top }
    }
}

/// A pointer position snapped to the grid, with per-axis bounds flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapped {
    pub x: f64,
    pub y: f64,
    pub within_x: bool,
    pub within_y: bool,
}

impl Snapped {
    /// Whether the snapped cell lies on the canvas on both axes.
    #[must_use]
    pub fn is_inside(&self) -> bool {
        self.within_x && self.within_y
    }

    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Snap a client-space pointer position against the cached canvas bounds.
#[must_use]
pub fn locate(client: Point, bounds: &CanvasBounds, grid: &GridConfig) -> Snapped {
    grid.snap(bounds.to_canvas(client))
}
