//! seatview - interactive seating-chart core
//!
//! Imports spreadsheet rosters and manages the chart's state in the browser
//! via WebAssembly:
//! - Roster ingestion (.xlsx, .xls, .csv) with cleaning and shape validation
//! - Fit-to-viewport scaling with bounded, resettable user zoom
//! - Exclusive placard selection driven by click events
//!
//! Rendering is the embedder's concern: the viewer exposes the grid, the
//! effective scale, and the active seat id, and signals redraws through a
//! callback.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { SeatView } from 'seatview';
//! await init();
//! const viewer = new SeatView(container);
//! viewer.set_render_callback(draw);
//! viewer.load(bytes, file.name);
//! ```

// Parsing modules
pub mod cell_ref;
pub mod color;
mod csv;
pub mod error;
pub mod format;
pub mod ingest;
pub mod parser;
pub mod sample;
pub mod types;

// Viewer state modules
pub mod layout;
pub mod viewer;

use wasm_bindgen::prelude::*;

// Re-export the main viewer struct
pub use viewer::SeatView;

pub use types::*;

/// Import a roster file: recognize the container format from the file name,
/// parse the bytes into raw rows, and ingest them into a validated grid.
///
/// # Errors
/// Returns the specific [`error::SeatviewError`] for an unrecognized
/// extension, unreadable content, empty input, or ragged rows.
pub fn import(data: &[u8], file_name: &str) -> error::Result<SeatingGrid> {
    let file_format = format::FileFormat::from_file_name(file_name)?;
    let raw_rows = format::parse_rows(data, file_format)?;
    ingest::ingest(&raw_rows)
}

/// Parse a roster file and return the seating grid as a JSON string
///
/// # Arguments
/// * `data` - The raw bytes of the roster file
/// * `file_name` - The original file name, used for format recognition
///
/// # Errors
/// Returns an error if the format is unrecognized or the content invalid.
#[wasm_bindgen]
pub fn parse_seating(data: &[u8], file_name: &str) -> Result<String, JsValue> {
    let grid = import(data, file_name).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&grid)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Parse a roster file and return the grid as a `JsValue`
///
/// This is more efficient than `parse_seating` when the result will be
/// used directly in JavaScript.
///
/// # Errors
/// Returns an error if the format is unrecognized or the content invalid.
#[wasm_bindgen]
pub fn parse_seating_to_js(data: &[u8], file_name: &str) -> Result<JsValue, JsValue> {
    let grid = import(data, file_name).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&grid)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
