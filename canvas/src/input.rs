//! Input model: the component selection read from the page controls.
//!
//! The color picker and the width/height fields belong to the host page. Their
//! raw string values are parsed into a [`Selection`] on every placement and
//! every redraw; the engine never caches them.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::color::{is_hex_color, with_alpha};
use crate::consts::PREVIEW_ALPHA;
use crate::doc::Component;
use crate::grid::Point;

/// Error returned by [`Selection::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("color `{0}` is not a #RRGGBB or #RRGGBBAA value")]
    InvalidColor(String),
    #[error("{field} `{value}` is not a number")]
    NotANumber { field: &'static str, value: String },
}

/// What the next placed component will look like.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Fill color, `#RRGGBB` or `#RRGGBBAA`.
    pub color: String,
    /// Width in grid cells.
    pub width: f64,
    /// Height in grid cells.
    pub height: f64,
}

impl Selection {
    #[must_use]
    pub fn new(color: impl Into<String>, width: f64, height: f64) -> Self {
        Self { color: color.into(), width, height }
    }

    /// Parse raw control values. Zero and negative sizes are accepted.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectionError`] if the color is not a hex color or a size
    /// is not a finite number.
    pub fn parse(color: &str, width: &str, height: &str) -> Result<Self, SelectionError> {
        if !is_hex_color(color) {
            return Err(SelectionError::InvalidColor(color.to_owned()));
        }
        Ok(Self {
            color: color.trim().to_owned(),
            width: parse_cells("width", width)?,
            height: parse_cells("height", height)?,
        })
    }

    /// A component with this selection's size and color at `at`.
    #[must_use]
    pub fn place(&self, at: Point) -> Component {
        Component::new(at.x, at.y, self.width, self.height, self.color.clone())
    }

    /// The semi-transparent cursor component drawn at `at`.
    #[must_use]
    pub fn preview(&self, at: Point) -> Component {
        let color = with_alpha(&self.color, PREVIEW_ALPHA).unwrap_or_else(|| format!("{}{PREVIEW_ALPHA}", self.color));
        Component::new(at.x, at.y, self.width, self.height, color)
    }
}

fn parse_cells(field: &'static str, raw: &str) -> Result<f64, SelectionError> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(SelectionError::NotANumber { field, value: raw.to_owned() }),
    }
}
