//! Built-in roster shown before any file is imported.

use crate::error::Result;
use crate::types::{Expression, Outfit, Pattern, Seat, SeatingGrid};

/// Name, department, expression, outfit color, outfit pattern.
type SampleRow = (
    &'static str,
    &'static str,
    Expression,
    &'static str,
    Pattern,
);

const SAMPLE_PEOPLE: [SampleRow; 8] = [
    (
        "John Smith",
        "Engineering",
        Expression::Smile,
        "#4299E1",
        Pattern::Stripes,
    ),
    (
        "Sarah Johnson",
        "Design",
        Expression::Smile,
        "#ED64A6",
        Pattern::Checks,
    ),
    (
        "Michael Brown",
        "Marketing",
        Expression::Surprised,
        "#48BB78",
        Pattern::Solid,
    ),
    (
        "Emily Davis",
        "Sales",
        Expression::Smile,
        "#9F7AEA",
        Pattern::Stripes,
    ),
    (
        "David Wilson",
        "Engineering",
        Expression::Frown,
        "#F6AD55",
        Pattern::Checks,
    ),
    (
        "Lisa Anderson",
        "Design",
        Expression::Smile,
        "#FC8181",
        Pattern::Solid,
    ),
    (
        "James Taylor",
        "Support",
        Expression::Smile,
        "#4FD1C5",
        Pattern::Stripes,
    ),
    (
        "Maria Garcia",
        "Sales",
        Expression::Surprised,
        "#F6E05E",
        Pattern::Checks,
    ),
];

/// Seats per row when chunking the roster into a grid.
const SAMPLE_COLS: usize = 4;

/// The default 2×4 sample grid.
#[allow(clippy::cast_possible_truncation)]
pub fn sample_grid() -> Result<SeatingGrid> {
    let rows = SAMPLE_PEOPLE
        .chunks(SAMPLE_COLS)
        .enumerate()
        .map(|(r, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(c, &(name, department, expression, color, pattern))| Seat {
                    id: Seat::id_for(r, c),
                    name: name.to_string(),
                    seat_number: (r * SAMPLE_COLS + c + 1) as u32,
                    department: Some(department.to_string()),
                    expression,
                    outfit: Outfit {
                        color: color.to_string(),
                        pattern: Some(pattern),
                    },
                })
                .collect()
        })
        .collect();
    SeatingGrid::new(rows)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_grid_is_rectangular() {
        let grid = sample_grid().unwrap();
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.col_count(), 4);
    }

    #[test]
    fn test_sample_seat_numbers_are_row_major() {
        let grid = sample_grid().unwrap();
        let numbers: Vec<u32> = grid.seats().map(|s| s.seat_number).collect();
        assert_eq!(numbers, (1..=8).collect::<Vec<_>>());
    }
}
