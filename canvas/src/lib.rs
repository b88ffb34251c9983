//! Grid-snapped map editor for the browser.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! editing lifecycle of a single map: snapping pointer positions to the grid,
//! placing colored rectangular components, repainting the canvas on a fixed
//! interval, and moving maps in and out as JSON. The host page supplies the
//! container element and the color/width/height inputs; everything else lives
//! here.
//!
//! Everything except [`host`] is plain Rust and is also used by the native
//! `mapeditor` command-line tool.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EditorCore`] |
//! | [`doc`] | Placed components and the ordered component list |
//! | [`grid`] | Grid configuration, canvas bounds, and snapping |
//! | [`input`] | Parsing the current selection from the page controls |
//! | [`render`] | The [`render::Surface`] trait and frame drawing |
//! | [`transfer`] | JSON import and export |
//! | [`color`] | Hex color parsing and alpha overrides |
//! | [`consts`] | Shared constants (grid defaults, redraw period, export name) |
//! | `host` | `wasm-bindgen` entry point (feature `web`) |

pub mod color;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod grid;
#[cfg(feature = "web")]
pub mod host;
pub mod input;
pub mod render;
pub mod transfer;
