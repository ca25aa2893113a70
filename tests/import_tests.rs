//! End-to-end import tests: file bytes through format recognition, parsing,
//! and ingestion.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]


use seatview::error::SeatviewError;
use seatview::import;
use test_case::test_case;
use test_helpers::{create_roster_xlsx, create_shared_strings_xlsx};

#[test]
fn test_xlsx_inline_strings() {
    let data = create_roster_xlsx(&[&["Alice", "Bob"], &["Carol", "Dave"]]);
    let grid = import(&data, "roster.xlsx").unwrap();

    assert_eq!((grid.row_count(), grid.col_count()), (2, 2));
    assert_eq!(grid.seat(0, 0).unwrap().name, "Alice");
    assert_eq!(grid.seat(1, 1).unwrap().name, "Dave");
    assert_eq!(grid.seat(1, 1).unwrap().seat_number, 4);
}

#[test]
fn test_xlsx_shared_strings() {
    let data = create_shared_strings_xlsx(&[&["Alice", "Bob", "Alice"]]);
    let grid = import(&data, "roster.xlsx").unwrap();

    assert_eq!((grid.row_count(), grid.col_count()), (1, 3));
    // Repeated names share one table entry but map to distinct seats
    assert_eq!(grid.seat(0, 0).unwrap().name, "Alice");
    assert_eq!(grid.seat(0, 2).unwrap().name, "Alice");
    assert_ne!(grid.seat(0, 0).unwrap().id, grid.seat(0, 2).unwrap().id);
}

#[test]
fn test_xlsx_cjk_names() {
    let data = create_shared_strings_xlsx(&[&["张伟", "李娜"], &["王芳", "刘强"]]);
    let grid = import(&data, "roster.xlsx").unwrap();
    assert_eq!(grid.seat(0, 0).unwrap().name, "张伟");
    assert_eq!(grid.seat(1, 1).unwrap().name, "刘强");
}

#[test]
fn test_xlsx_escaped_characters() {
    let data = create_roster_xlsx(&[&["O'Brien & Sons", "A <B>"]]);
    let grid = import(&data, "roster.xlsx").unwrap();
    assert_eq!(grid.seat(0, 0).unwrap().name, "O'Brien & Sons");
    assert_eq!(grid.seat(0, 1).unwrap().name, "A <B>");
}

#[test]
fn test_csv_import() {
    let grid = import("Alice,Bob\nCarol,Dave\n".as_bytes(), "roster.csv").unwrap();
    assert_eq!((grid.row_count(), grid.col_count()), (2, 2));
    assert_eq!(grid.seat(1, 0).unwrap().name, "Carol");
}

#[test]
fn test_csv_with_utf8_bom_free_cjk() {
    let grid = import("张伟,李娜\n王芳,刘强".as_bytes(), "roster.csv").unwrap();
    assert_eq!(grid.seat(0, 1).unwrap().name, "李娜");
}

#[test_case("roster.txt"; "plain text")]
#[test_case("roster.json"; "json")]
#[test_case("roster.xlsm"; "macro workbook")]
#[test_case("roster"; "no extension")]
fn test_unsupported_extension(file_name: &str) {
    let err = import(b"Alice,Bob", file_name).unwrap_err();
    assert!(matches!(err, SeatviewError::UnsupportedFormat(_)));
}

#[test_case("ROSTER.CSV"; "upper case")]
#[test_case("Roster.Csv"; "mixed case")]
fn test_extension_matching_ignores_case(file_name: &str) {
    assert!(import(b"Alice,Bob", file_name).is_ok());
}

#[test]
fn test_corrupt_xlsx_is_a_read_error() {
    let err = import(b"this is not a zip archive", "roster.xlsx").unwrap_err();
    assert!(matches!(err, SeatviewError::Read(_)));
}

#[test]
fn test_legacy_xls_content_is_a_read_error() {
    // BIFF magic bytes, not a ZIP container
    let biff = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
    let err = import(&biff, "roster.xls").unwrap_err();
    assert!(matches!(err, SeatviewError::Read(_)));
}

#[test]
fn test_ooxml_misnamed_as_xls_still_loads() {
    let data = create_roster_xlsx(&[&["Alice", "Bob"]]);
    let grid = import(&data, "roster.xls").unwrap();
    assert_eq!(grid.col_count(), 2);
}

#[test]
fn test_empty_csv_is_empty_input() {
    let err = import(b"", "roster.csv").unwrap_err();
    assert!(matches!(err, SeatviewError::EmptyInput));
}

#[test]
fn test_whitespace_only_csv_is_empty_input() {
    let err = import(b"  , \n\t,  \n", "roster.csv").unwrap_err();
    assert!(matches!(err, SeatviewError::EmptyInput));
}

#[test]
fn test_empty_sheet_is_empty_input() {
    let data = create_roster_xlsx(&[]);
    let err = import(&data, "roster.xlsx").unwrap_err();
    assert!(matches!(err, SeatviewError::EmptyInput));
}

#[test]
fn test_ragged_csv_is_irregular() {
    let err = import(b"a,b,c\nd,e,f\ng,h", "roster.csv").unwrap_err();
    assert!(matches!(
        err,
        SeatviewError::IrregularShape {
            row: 3,
            expected: 3,
            actual: 2
        }
    ));
}

#[test]
fn test_xlsx_pads_sparse_rows_to_used_width() {
    // Row 2 only fills column A; the sheet's used width is 3, so the row
    // pads with empty names instead of failing the shape check.
    let data = create_roster_xlsx(&[&["a", "b", "c"], &["d"]]);
    let grid = import(&data, "roster.xlsx").unwrap();
    assert_eq!((grid.row_count(), grid.col_count()), (2, 3));
    assert_eq!(grid.seat(1, 0).unwrap().name, "d");
    assert_eq!(grid.seat(1, 2).unwrap().name, "");
}

#[test]
fn test_xlsx_blank_rows_are_dropped() {
    let data = create_roster_xlsx(&[&["a", "b"], &[], &["c", "d"]]);
    let grid = import(&data, "roster.xlsx").unwrap();
    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.seat(1, 1).unwrap().name, "d");
}

#[test]
fn test_grid_serializes_with_camel_case_fields() {
    let data = create_roster_xlsx(&[&["Alice"]]);
    let grid = import(&data, "roster.xlsx").unwrap();
    let json = serde_json::to_string(&grid).unwrap();

    assert!(json.contains("\"seatNumber\":1"));
    assert!(json.contains("\"expression\":\"smile\""));
    assert!(json.contains("\"id\":\"0-0\""));
    assert!(!json.contains("department"));
}
