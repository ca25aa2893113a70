//! Structured error types for seatview.
//!
//! Every import-path failure maps to exactly one variant so callers can
//! surface a specific user-facing message without string matching.

/// All errors that can occur while importing and committing a seating grid.
#[derive(Debug, thiserror::Error)]
pub enum SeatviewError {
    /// File extension is not one of the recognized container formats.
    #[error("unsupported file format \"{0}\" (expected .xlsx, .xls, or .csv)")]
    UnsupportedFormat(String),

    /// No data rows remain after blank-row filtering.
    #[error("the file appears to be empty or contains no valid data")]
    EmptyInput,

    /// Rows of differing lengths. The grid must be rectangular.
    #[error("row {row} has {actual} columns, expected {expected} (all rows must have the same number of columns)")]
    IrregularShape {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Underlying byte-read or container-parse failure.
    #[error("could not read file: {0}")]
    Read(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SeatviewError>;

impl From<zip::result::ZipError> for SeatviewError {
    fn from(e: zip::result::ZipError) -> Self {
        Self::Read(e.to_string())
    }
}

impl From<quick_xml::Error> for SeatviewError {
    fn from(e: quick_xml::Error) -> Self {
        Self::Read(e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<SeatviewError> for wasm_bindgen::JsValue {
    fn from(e: SeatviewError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
