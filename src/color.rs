//! Outfit color assignment for imported seats.
//!
//! Imported rosters carry no appearance information, so outfits are assigned
//! from a fixed palette keyed by seat index. Deterministic on purpose: the
//! same file always produces the same chart, and tests can assert exact
//! values instead of just format.

use crate::types::Pattern;

/// Outfit palette. Spread across hues so neighboring seats stay visually
/// distinct when the palette wraps.
pub const OUTFIT_PALETTE: [&str; 12] = [
    "#4299E1", // blue
    "#ED64A6", // pink
    "#48BB78", // green
    "#9F7AEA", // purple
    "#F6AD55", // orange
    "#FC8181", // red
    "#4FD1C5", // teal
    "#F6E05E", // yellow
    "#63B3ED", // light blue
    "#B794F4", // light purple
    "#68D391", // light green
    "#F687B3", // light pink
];

/// Outfit color for the seat at the given row-major index.
pub fn outfit_color(seat_index: usize) -> String {
    let idx = seat_index % OUTFIT_PALETTE.len();
    OUTFIT_PALETTE.get(idx).copied().unwrap_or("#808080").to_string()
}

/// Outfit pattern for the seat at the given row-major index.
pub fn outfit_pattern(seat_index: usize) -> Pattern {
    match seat_index % 3 {
        0 => Pattern::Stripes,
        1 => Pattern::Checks,
        _ => Pattern::Solid,
    }
}

/// Whether a string is a `#RRGGBB` hex color.
pub fn is_hex_rgb(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}
