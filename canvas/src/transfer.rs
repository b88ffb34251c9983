//! Map import and export as a flat JSON array.
//!
//! Each array element is an object with `x`, `y` (pixels), `width`, `height`
//! (grid cells) and `color`. There is no envelope and no version field.
//!
//! Imports are all-or-nothing: every entry is validated before any of them is
//! appended, so a malformed entry leaves the target list untouched. Positions
//! are taken as written (no re-snapping, no bounds check). Numeric fields may
//! be JSON numbers or numeric strings, since maps saved by earlier editors
//! store the cell sizes as strings.

#[cfg(test)]
#[path = "transfer_test.rs"]
mod transfer_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::color::is_hex_color;
use crate::consts::EXPORT_DATA_URI_PREFIX;
use crate::doc::{Component, ComponentList};

/// Error returned by [`parse_components`] and [`import_into`].
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("map is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("map must be a JSON array of components")]
    NotAnArray,
    #[error("component {index} is malformed: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("component {index} has invalid color `{color}`")]
    InvalidColor { index: usize, color: String },
}

/// Wire shape of one exported component.
#[derive(Debug, Deserialize)]
struct ComponentRecord {
    #[serde(deserialize_with = "number_or_string")]
    x: f64,
    #[serde(deserialize_with = "number_or_string")]
    y: f64,
    #[serde(deserialize_with = "number_or_string")]
    width: f64,
    #[serde(deserialize_with = "number_or_string")]
    height: f64,
    color: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(D::Error::custom(format!("`{s}` is not a number"))),
        },
    }
}

/// Parse and validate map JSON into components, in file order.
///
/// # Errors
///
/// Returns an [`ImportError`] if the text is not JSON, is not an array, or any
/// entry is missing a field or carries a malformed value.
pub fn parse_components(text: &str) -> Result<Vec<Component>, ImportError> {
    let serde_json::Value::Array(items) = serde_json::from_str::<serde_json::Value>(text)? else {
        return Err(ImportError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let record: ComponentRecord =
                serde_json::from_value(item).map_err(|source| ImportError::InvalidEntry { index, source })?;
            let color = record.color.trim();
            if !is_hex_color(color) {
                return Err(ImportError::InvalidColor { index, color: record.color });
            }
            Ok(Component::new(record.x, record.y, record.width, record.height, color))
        })
        .collect()
}

/// Append every component in `text` to `list`. Returns how many were added.
///
/// # Errors
///
/// See [`parse_components`]. On error `list` is unchanged.
pub fn import_into(list: &mut ComponentList, text: &str) -> Result<usize, ImportError> {
    let batch = parse_components(text)?;
    let count = batch.len();
    list.extend(batch);
    Ok(count)
}

/// Serialize `list` as a compact JSON array in insertion order.
///
/// # Errors
///
/// Returns an error only if serialization itself fails.
pub fn export(list: &ComponentList) -> Result<String, serde_json::Error> {
    serde_json::to_string(list)
}

/// Serialize `list` as indented JSON, for files meant to be read by people.
///
/// # Errors
///
/// Returns an error only if serialization itself fails.
pub fn export_pretty(list: &ComponentList) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(list)
}

/// Wrap exported JSON in a `data:` URI suitable for a download link.
#[must_use]
pub fn data_uri(json: &str) -> String {
    format!("{EXPORT_DATA_URI_PREFIX}{}", urlencoding::encode(json))
}
