//! Layout engine for fitting the seat grid to its container.
//!
//! This module handles:
//! - Computing the uniform scale that packs an R×C grid of fixed-size seats
//!   into the available container space
//! - User zoom composed on top of the computed fit scale, with bounds
//! - Mapping container coordinates back to seat positions (hit-testing)

mod fit;
mod viewport;

pub use fit::{FitConfig, ScaleState, MAX_SCALE, MIN_SCALE};
pub use viewport::Viewport;
