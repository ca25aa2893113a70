use serde::{Deserialize, Serialize};

use crate::error::{Result, SeatviewError};

use super::Seat;

/// Rectangular, row-major grid of seats.
///
/// Rectangularity is checked when the grid is constructed, the second of
/// the two enforcement points (ingestion being the first), so a grid that
/// reaches the renderer can never be ragged no matter where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatingGrid {
    rows: Vec<Vec<Seat>>,
}

/// Shape of a grid, for the import preview ("arranged in R × C").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSummary {
    pub rows: usize,
    pub cols: usize,
}

impl SeatingGrid {
    /// Build a grid from rows of seats, failing loudly on ragged input.
    pub fn new(rows: Vec<Vec<Seat>>) -> Result<Self> {
        ensure_rectangular(&rows)?;
        Ok(Self { rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn summary(&self) -> GridSummary {
        GridSummary {
            rows: self.row_count(),
            cols: self.col_count(),
        }
    }

    pub fn seat(&self, row: usize, col: usize) -> Option<&Seat> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn seat_by_id(&self, id: &str) -> Option<&Seat> {
        self.seats().find(|s| s.id == id)
    }

    /// Row-major iteration over every seat.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.rows.iter().flatten()
    }

    pub fn grid_rows(&self) -> &[Vec<Seat>] {
        &self.rows
    }
}

fn ensure_rectangular(rows: &[Vec<Seat>]) -> Result<()> {
    let Some(first) = rows.first() else {
        return Ok(());
    };
    let expected = first.len();
    for (idx, row) in rows.iter().enumerate() {
        if row.len() != expected {
            return Err(SeatviewError::IrregularShape {
                row: idx + 1,
                expected,
                actual: row.len(),
            });
        }
    }
    Ok(())
}
