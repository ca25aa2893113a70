//! Container-format recognition and dispatch to the matching row parser.
//!
//! Recognition is by file extension only (case-insensitive), matching what
//! the import surface advertises. Content-level failures inside a recognized
//! format surface as [`SeatviewError::Read`], not `UnsupportedFormat`.

use crate::csv;
use crate::error::{Result, SeatviewError};
use crate::parser;

/// Supported import containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Xlsx,
    /// Legacy Excel extension. Files saved as OOXML under this name load
    /// fine; true BIFF content fails at read time.
    Xls,
    Csv,
}

impl FileFormat {
    /// Recognize a format from the file name's extension.
    ///
    /// # Errors
    /// [`SeatviewError::UnsupportedFormat`] for anything other than
    /// `.xlsx`, `.xls`, or `.csv` in any casing.
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("xlsx") => Ok(Self::Xlsx),
            Some("xls") => Ok(Self::Xls),
            Some("csv") => Ok(Self::Csv),
            Some(other) => Err(SeatviewError::UnsupportedFormat(other.to_string())),
            None => Err(SeatviewError::UnsupportedFormat(file_name.to_string())),
        }
    }
}

/// Turn raw file bytes into header-less rows of cell text.
pub fn parse_rows(data: &[u8], format: FileFormat) -> Result<Vec<Vec<String>>> {
    match format {
        FileFormat::Xlsx | FileFormat::Xls => parser::parse(data),
        FileFormat::Csv => Ok(csv::parse_delimited(data)),
    }
}
