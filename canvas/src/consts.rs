//! Shared constants for the canvas crate.

// ── Grid ────────────────────────────────────────────────────────

/// Pixel length of one grid cell.
pub const DEFAULT_CELL_SIZE: u32 = 15;

/// Number of grid columns (canvas width = 750 px at the default cell size).
pub const DEFAULT_COLUMNS: u32 = 50;

/// Number of grid rows (canvas height = 450 px at the default cell size).
pub const DEFAULT_ROWS: u32 = 30;

/// Stroke color for grid lines.
pub const GRID_STROKE: &str = "#000000";

// ── Redraw ──────────────────────────────────────────────────────

/// Period of the redraw cycle in milliseconds.
pub const REDRAW_INTERVAL_MS: u32 = 100;

/// Alpha channel appended to the selected color for the cursor preview.
pub const PREVIEW_ALPHA: &str = "AA";

// ── Export ──────────────────────────────────────────────────────

/// File name offered for download on export.
pub const EXPORT_FILENAME: &str = "mapExport.json";

/// Prefix for the `data:` URI carrying an exported map.
pub const EXPORT_DATA_URI_PREFIX: &str = "data:text/json;charset=utf-8,";
