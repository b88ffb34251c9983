//! Document model: placed map components and the list that owns them.
//!
//! A [`Component`] is a colored rectangle anchored at a pixel position and
//! sized in whole grid cells. The [`ComponentList`] keeps components in
//! insertion order, which is also paint order: later entries draw on top.
//!
//! Components enter the list from two places, a click on the canvas (via the
//! input handlers in [`crate::engine`]) or an import (via [`crate::transfer`]),
//! and leave it only through [`ComponentList::clear`].

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Serialize, Serializer};

use crate::render::Surface;

/// A placed map object (building, road, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    /// Left edge in canvas pixels.
    #[serde(serialize_with = "serialize_number")]
    pub x: f64,
    /// Top edge in canvas pixels.
    #[serde(serialize_with = "serialize_number")]
    pub y: f64,
    /// Width in grid cells.
    #[serde(serialize_with = "serialize_number")]
    pub width: f64,
    /// Height in grid cells.
    #[serde(serialize_with = "serialize_number")]
    pub height: f64,
    /// Fill color, `#RRGGBB` or `#RRGGBBAA`.
    pub color: String,
}

impl Component {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, color: impl Into<String>) -> Self {
        Self { x, y, width, height, color: color.into() }
    }

    /// Pixel extent `(width, height)` for the given cell size.
    #[must_use]
    pub fn pixel_size(&self, cell_size: f64) -> (f64, f64) {
        (self.width * cell_size, self.height * cell_size)
    }

    /// Fill this component's rectangle on `surface`.
    ///
    /// Zero or negative sizes are passed through unchanged; the surface decides
    /// what (if anything) they paint.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, cell_size: f64) {
        let (w, h) = self.pixel_size(cell_size);
        surface.fill_rect(self.x, self.y, w, h, &self.color);
    }
}

/// Write integral values without a fractional part so exported maps read
/// `"x":15` rather than `"x":15.0`.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation, clippy::trivially_copy_pass_by_ref)]
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.trunc() == *value && value.abs() <= MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Insertion-ordered list of placed components.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ComponentList {
    components: Vec<Component>,
}

impl ComponentList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component on top of everything placed so far.
    pub fn append(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Append every component from `batch`, preserving its order.
    pub fn extend(&mut self, batch: Vec<Component>) {
        self.components.extend(batch);
    }

    /// Discard every component.
    pub fn clear(&mut self) {
        self.components.clear();
    }

    /// Components in insertion (paint) order.
    #[must_use]
    pub fn snapshot(&self) -> &[Component] {
        &self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl<'a> IntoIterator for &'a ComponentList {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
