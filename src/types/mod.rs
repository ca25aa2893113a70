//! Data types for the seating chart.

mod grid;
mod seat;
mod selection;

pub use grid::*;
pub use seat::*;
pub use selection::*;
