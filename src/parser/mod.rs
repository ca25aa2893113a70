//! OOXML spreadsheet parser.
//!
//! Extracts the first worksheet of an `.xlsx` archive as header-less rows of
//! cell text, the raw input the ingestion pipeline consumes. Only the parts
//! of the package needed for that are touched: workbook relationships, the
//! shared-string table, and one sheet.

mod shared_strings;
mod worksheet;

use std::collections::HashMap;
use std::io::{BufReader, Cursor};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::error::{Result, SeatviewError};

use shared_strings::parse_shared_strings;
use worksheet::parse_sheet_rows;

/// Parse XLSX bytes into the raw string rows of the first sheet.
///
/// Blank cells inside the used range become empty strings and every row is
/// padded to the sheet's used width; rows with no cells at all are dropped.
///
/// # Errors
/// Fails with [`SeatviewError::Read`] when the bytes are not a readable
/// OOXML package (bad ZIP, malformed XML, no worksheets).
pub fn parse(data: &[u8]) -> Result<Vec<Vec<String>>> {
    let cursor = Cursor::new(data);
    let mut archive = ZipArchive::new(cursor)?;

    let worksheet_rels = parse_worksheet_relationships(&mut archive);
    let sheet_path = first_sheet_path(&mut archive, &worksheet_rels)?;
    let shared_strings = parse_shared_strings(&mut archive);

    parse_sheet_rows(&mut archive, &sheet_path, &shared_strings)
}

/// Map relationship ids to worksheet paths from `xl/_rels/workbook.xml.rels`.
fn parse_worksheet_relationships<R: std::io::Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
) -> HashMap<String, String> {
    let mut rels = HashMap::new();

    let Ok(file) = archive.by_name("xl/_rels/workbook.xml.rels") else {
        return rels; // Relationships file is optional
    };

    let reader = BufReader::new(file);
    let mut xml = Reader::from_reader(reader);
    xml.trim_text(true);

    let mut buf = Vec::new();
    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e) | Event::Start(ref e)) => {
                if e.local_name().as_ref() == b"Relationship" {
                    let mut id = String::new();
                    let mut target = String::new();
                    let mut is_worksheet = false;

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"Id" => {
                                id = String::from_utf8_lossy(&attr.value).into_owned();
                            }
                            b"Target" => {
                                target = String::from_utf8_lossy(&attr.value).into_owned();
                            }
                            b"Type" => {
                                is_worksheet =
                                    String::from_utf8_lossy(&attr.value).contains("worksheet");
                            }
                            _ => {}
                        }
                    }

                    if is_worksheet && !id.is_empty() && !target.is_empty() {
                        // Targets are relative to xl/ unless absolute
                        let full_path = match target.strip_prefix('/') {
                            Some(stripped) => stripped.to_string(),
                            None => format!("xl/{target}"),
                        };
                        rels.insert(id, full_path);
                    }
                }
            }
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
        buf.clear();
    }

    rels
}

/// Find the archive path of the first sheet listed in `xl/workbook.xml`.
fn first_sheet_path<R: std::io::Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
    worksheet_rels: &HashMap<String, String>,
) -> Result<String> {
    let file = archive.by_name("xl/workbook.xml")?;

    let reader = BufReader::new(file);
    let mut xml = Reader::from_reader(reader);
    xml.trim_text(true);

    let mut buf = Vec::new();
    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e) | Event::Start(ref e)) => {
                if e.local_name().as_ref() == b"sheet" {
                    let mut r_id = String::new();
                    for attr in e.attributes().flatten() {
                        // r:id carries a namespace prefix
                        let key = attr.key.as_ref();
                        if key == b"id" || key.ends_with(b":id") {
                            r_id = String::from_utf8_lossy(&attr.value).into_owned();
                        }
                    }

                    let path = worksheet_rels
                        .get(&r_id)
                        .cloned()
                        .unwrap_or_else(|| "xl/worksheets/sheet1.xml".to_string());
                    return Ok(path);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    Err(SeatviewError::Read(
        "workbook contains no worksheets".to_string(),
    ))
}
