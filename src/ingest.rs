//! Ingestion pipeline: raw spreadsheet rows in, validated seating grid out.
//!
//! Pure: either the whole grid is produced or a typed error is returned,
//! so a failed import can never disturb a grid that is already displayed.

use crate::color::{outfit_color, outfit_pattern};
use crate::error::{Result, SeatviewError};
use crate::types::{Expression, Outfit, Seat, SeatingGrid};

/// Build a seating grid from raw rows of cell text.
///
/// Pipeline, in order: drop rows that are entirely blank after trimming,
/// trim every remaining cell, fail on empty input, fail on ragged rows,
/// then map cells to seats in row-major order.
///
/// # Errors
/// [`SeatviewError::EmptyInput`] when nothing survives blank-row filtering;
/// [`SeatviewError::IrregularShape`] when row lengths differ.
pub fn ingest(raw_rows: &[Vec<String>]) -> Result<SeatingGrid> {
    let cleaned: Vec<Vec<&str>> = raw_rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.trim()).collect::<Vec<_>>())
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .collect();

    let Some(first) = cleaned.first() else {
        return Err(SeatviewError::EmptyInput);
    };

    let column_count = first.len();
    for (idx, row) in cleaned.iter().enumerate() {
        if row.len() != column_count {
            return Err(SeatviewError::IrregularShape {
                row: idx + 1,
                expected: column_count,
                actual: row.len(),
            });
        }
    }

    let rows = cleaned
        .iter()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, cell)| build_seat(r, c, column_count, cell))
                .collect()
        })
        .collect();

    SeatingGrid::new(rows)
}

// Seat numbers fit u32 comfortably; a grid that large would never render.
#[allow(clippy::cast_possible_truncation)]
fn build_seat(row: usize, col: usize, column_count: usize, name: &str) -> Seat {
    let index = row * column_count + col;
    Seat {
        id: Seat::id_for(row, col),
        name: name.to_string(),
        seat_number: (index + 1) as u32,
        department: None,
        expression: Expression::Smile,
        outfit: Outfit {
            color: outfit_color(index),
            pattern: Some(outfit_pattern(index)),
        },
    }
}
