//! Container viewport and coordinate transforms for the centered grid.

use super::FitConfig;

/// The container the chart renders into. The grid is centered inside it and
/// scaled about its own center, so container→grid mapping only needs the
/// effective scale and the grid's unscaled size.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height.max(0.0);
    }

    /// Convert container coordinates to unscaled grid coordinates.
    ///
    /// Origin is the grid's top-left seat corner; results can be negative
    /// or past the grid for points outside it.
    pub fn to_grid(
        &self,
        x: f32,
        y: f32,
        fit: &FitConfig,
        rows: usize,
        cols: usize,
        scale: f32,
    ) -> (f32, f32) {
        let (required_width, required_height) = fit.required_size(rows, cols);
        let origin_x = (self.width - required_width * scale) / 2.0;
        let origin_y = (self.height - required_height * scale) / 2.0;
        ((x - origin_x) / scale, (y - origin_y) / scale)
    }

    /// The seat under a container point, if any.
    ///
    /// Points that land in the gaps between seats, in the padding, or
    /// outside the grid entirely hit nothing: clicking there counts as an
    /// outside click and clears the selection.
    pub fn seat_at(
        &self,
        x: f32,
        y: f32,
        fit: &FitConfig,
        rows: usize,
        cols: usize,
        scale: f32,
    ) -> Option<(usize, usize)> {
        if rows == 0 || cols == 0 || scale <= 0.0 {
            return None;
        }

        let (gx, gy) = self.to_grid(x, y, fit, rows, cols, scale);
        let col = axis_index(gx, fit.cell_width, fit.gap, cols)?;
        let row = axis_index(gy, fit.cell_height, fit.gap, rows)?;
        Some((row, col))
    }
}

/// Index of the cell containing `pos` along one axis of a `cell`+`gap`
/// strided run, or `None` for gaps and out-of-range positions.
fn axis_index(pos: f32, cell: f32, gap: f32, count: usize) -> Option<usize> {
    if pos < 0.0 {
        return None;
    }
    let stride = cell + gap;
    let index = f32_to_index(pos / stride);
    if index >= count {
        return None;
    }
    // Inside the cell, not the trailing gap
    let offset = pos - index as f32 * stride;
    (offset <= cell).then_some(index)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn f32_to_index(v: f32) -> usize {
    v.clamp(0.0, u32::MAX as f32).floor() as usize
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn fit() -> FitConfig {
        FitConfig::default()
    }

    #[test]
    fn test_to_grid_centering() {
        // 2x4 grid at scale 1: required 472x304; in an 800x600 container the
        // grid origin sits at (164, 148).
        let vp = Viewport::new(800.0, 600.0);
        let (gx, gy) = vp.to_grid(164.0, 148.0, &fit(), 2, 4, 1.0);
        assert_eq!((gx, gy), (0.0, 0.0));
    }

    #[test]
    fn test_seat_at_corners() {
        let vp = Viewport::new(800.0, 600.0);
        // Top-left seat interior
        assert_eq!(vp.seat_at(170.0, 150.0, &fit(), 2, 4, 1.0), Some((0, 0)));
        // Last seat: col 3 starts at 164 + 3*124 = 536
        assert_eq!(vp.seat_at(600.0, 400.0, &fit(), 2, 4, 1.0), Some((1, 3)));
    }

    #[test]
    fn test_gap_between_seats_misses() {
        let vp = Viewport::new(800.0, 600.0);
        // x = 164 + 110 lands in the gap after the first column
        assert_eq!(vp.seat_at(274.0, 150.0, &fit(), 2, 4, 1.0), None);
    }

    #[test]
    fn test_outside_grid_misses() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.seat_at(10.0, 10.0, &fit(), 2, 4, 1.0), None);
        assert_eq!(vp.seat_at(790.0, 590.0, &fit(), 2, 4, 1.0), None);
    }

    #[test]
    fn test_scaled_hit() {
        let vp = Viewport::new(800.0, 600.0);
        // At half scale the grid spans 236x152 centered at (282,224)..(518,376);
        // probe a point solidly inside seat (0, 0): origin + 25px.
        // (The container center would land near a seat boundary.)
        assert_eq!(vp.seat_at(307.0, 249.0, &fit(), 2, 4, 0.5), Some((0, 0)));
    }
}
