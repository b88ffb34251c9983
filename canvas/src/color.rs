//! Hex color parsing and the preview alpha override.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// RGB channels plus an optional alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Option<u8>,
}

/// Parse `#RRGGBB` or `#RRGGBBAA` values into channels.
#[must_use]
pub fn parse_hex_color(raw: &str) -> Option<Rgba> {
    let hex = raw.trim().strip_prefix('#')?;
    let bytes = hex.as_bytes();
    let channel = |i: usize| hex_byte(bytes[i], bytes[i + 1]);
    match bytes.len() {
        6 => Some(Rgba { r: channel(0)?, g: channel(2)?, b: channel(4)?, a: None }),
        8 => Some(Rgba { r: channel(0)?, g: channel(2)?, b: channel(4)?, a: Some(channel(6)?) }),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn hex_byte(hi: u8, lo: u8) -> Option<u8> {
    let hi = char::from(hi).to_digit(16)?;
    let lo = char::from(lo).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}

/// Whether `raw` is a `#RRGGBB` or `#RRGGBBAA` color.
#[must_use]
pub fn is_hex_color(raw: &str) -> bool {
    parse_hex_color(raw).is_some()
}

/// Replace the alpha channel of a hex color, keeping the RGB digits as written.
///
/// Returns `None` when `color` is not a hex color.
#[must_use]
pub fn with_alpha(color: &str, alpha: &str) -> Option<String> {
    if !is_hex_color(color) {
        return None;
    }
    let rgb = &color.trim()[..7];
    Some(format!("{rgb}{alpha}"))
}
