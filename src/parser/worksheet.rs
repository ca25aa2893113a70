//! Worksheet parsing - flattens one sheet's cells into dense string rows.

use std::collections::BTreeMap;
use std::io::BufReader;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::cell_ref::parse_cell_ref_bytes;
use crate::error::Result;

/// Value-bearing cell kind from the `t` attribute of a `<c>` element.
#[derive(Copy, Clone)]
enum CellKind {
    Shared,
    Inline,
    Bool,
    /// Numbers, formula strings, errors: the raw `<v>` text is the display.
    Raw,
}

fn parse_cell_kind(value: &[u8]) -> CellKind {
    match value {
        b"s" => CellKind::Shared,
        b"inlineStr" => CellKind::Inline,
        b"b" => CellKind::Bool,
        _ => CellKind::Raw,
    }
}

/// Parse one worksheet into dense rows of cell text.
///
/// Cell positions come from `r` attributes where present; cells without one
/// continue from the previous column, rows without one from the previous row.
/// Every emitted row is padded to the sheet's used width so downstream
/// validation sees what the sheet actually contains; rows with no
/// value-bearing cells are dropped.
// Row/col indices fit usize on every supported target.
#[allow(clippy::cast_possible_truncation)]
pub(super) fn parse_sheet_rows<R: std::io::Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
    path: &str,
    shared_strings: &[String],
) -> Result<Vec<Vec<String>>> {
    let file = archive.by_name(path)?;

    let reader = BufReader::new(file);
    let mut xml = Reader::from_reader(reader);
    xml.trim_text(false);

    // Sparse (row -> [(col, text)]) collected in document order.
    let mut cells: BTreeMap<u32, Vec<(u32, String)>> = BTreeMap::new();
    let mut max_col: u32 = 0;

    let mut buf = Vec::new();
    let mut current_row: u32 = 0;
    let mut next_col: u32 = 0;
    let mut cell_pos: Option<(u32, u32)> = None;
    let mut cell_kind = CellKind::Raw;
    let mut in_value = false;
    let mut in_inline_text = false;
    let mut pending_text = String::new();

    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"row" => {
                    let mut row = current_row;
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"r" {
                            if let Some(parsed) = parse_row_number(&attr.value) {
                                row = parsed.saturating_sub(1);
                            }
                        }
                    }
                    current_row = row;
                    next_col = 0;
                }
                b"c" => {
                    let mut col = next_col;
                    cell_kind = CellKind::Raw;
                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"r" => {
                                if let Some((c, r)) = parse_cell_ref_bytes(&attr.value) {
                                    col = c;
                                    current_row = r;
                                }
                            }
                            b"t" => cell_kind = parse_cell_kind(&attr.value),
                            _ => {}
                        }
                    }
                    cell_pos = Some((current_row, col));
                    next_col = col + 1;
                    pending_text.clear();
                }
                b"v" => in_value = true,
                b"t" if cell_pos.is_some() => in_inline_text = true,
                _ => {}
            },
            // Self-closing cells carry no value but still advance the column
            // cursor for any unreferenced siblings that follow.
            Ok(Event::Empty(ref e)) => {
                if e.local_name().as_ref() == b"c" {
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"r" {
                            if let Some((c, r)) = parse_cell_ref_bytes(&attr.value) {
                                next_col = c;
                                current_row = r;
                            }
                        }
                    }
                    next_col += 1;
                }
            }
            Ok(Event::Text(ref e)) if in_value || in_inline_text => {
                if let Ok(text) = e.unescape() {
                    pending_text.push_str(&text);
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"v" => in_value = false,
                b"t" => in_inline_text = false,
                b"c" => {
                    if let Some((row, col)) = cell_pos.take() {
                        if !pending_text.is_empty() {
                            let text = resolve_cell_text(
                                cell_kind,
                                std::mem::take(&mut pending_text),
                                shared_strings,
                            );
                            max_col = max_col.max(col);
                            cells.entry(row).or_default().push((col, text));
                        }
                    }
                }
                b"row" => {
                    current_row += 1;
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    let width = (max_col as usize) + 1;
    let mut rows = Vec::with_capacity(cells.len());
    for row_cells in cells.into_values() {
        let mut row = vec![String::new(); width];
        for (col, text) in row_cells {
            if let Some(slot) = row.get_mut(col as usize) {
                *slot = text;
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

fn resolve_cell_text(kind: CellKind, raw: String, shared_strings: &[String]) -> String {
    match kind {
        CellKind::Shared => raw
            .parse::<usize>()
            .ok()
            .and_then(|idx| shared_strings.get(idx))
            .cloned()
            .unwrap_or_default(),
        CellKind::Bool => {
            if raw.trim() == "0" {
                "FALSE".to_string()
            } else {
                "TRUE".to_string()
            }
        }
        CellKind::Inline | CellKind::Raw => raw,
    }
}

fn parse_row_number(value: &[u8]) -> Option<u32> {
    let mut num: u32 = 0;
    let mut seen = false;
    for &b in value {
        if !b.is_ascii_digit() {
            return None;
        }
        seen = true;
        num = num.saturating_mul(10).saturating_add(u32::from(b - b'0'));
    }
    seen.then_some(num)
}
