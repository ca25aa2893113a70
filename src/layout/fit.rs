//! Fit-to-viewport scale computation and user zoom state.

/// Smallest scale the chart will render at, fit-computed or zoomed.
pub const MIN_SCALE: f32 = 0.2;
/// Largest scale; the chart never renders above natural size.
pub const MAX_SCALE: f32 = 1.0;

const PADDING: f32 = 48.0;
const SEAT_WIDTH: f32 = 100.0;
const SEAT_HEIGHT: f32 = 140.0;
const GRID_GAP: f32 = 24.0;
const SAFETY_MARGIN: f32 = 0.95;

const ZOOM_IN_STEP: f32 = 1.2;
const ZOOM_OUT_STEP: f32 = 0.8;

/// Geometry the scale computation works against. Policy constants, not
/// derived values; the defaults are the shipped behavior.
#[derive(Debug, Clone, Copy)]
pub struct FitConfig {
    /// Footprint of one seat element, unscaled.
    pub cell_width: f32,
    pub cell_height: f32,
    /// Gap between adjacent seats, both axes.
    pub gap: f32,
    /// Container inset on every side.
    pub padding: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// Applied to available space before computing, for breathing room.
    pub safety_margin: f32,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            cell_width: SEAT_WIDTH,
            cell_height: SEAT_HEIGHT,
            gap: GRID_GAP,
            padding: PADDING,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            safety_margin: SAFETY_MARGIN,
        }
    }
}

impl FitConfig {
    /// Unscaled size of an R×C grid including inter-seat gaps.
    pub fn required_size(&self, rows: usize, cols: usize) -> (f32, f32) {
        let cols_f = cols as f32;
        let rows_f = rows as f32;
        let gaps_w = self.gap * cols.saturating_sub(1) as f32;
        let gaps_h = self.gap * rows.saturating_sub(1) as f32;
        (
            self.cell_width * cols_f + gaps_w,
            self.cell_height * rows_f + gaps_h,
        )
    }

    /// The uniform scale that fits an R×C grid inside the viewport in both
    /// dimensions at once, clamped to the policy bounds.
    ///
    /// Callers guard the degenerate empty grid; with `rows` and `cols` both
    /// at least 1 the result is always in `[min_scale, max_scale]`.
    pub fn compute_scale(
        &self,
        viewport_width: f32,
        viewport_height: f32,
        rows: usize,
        cols: usize,
    ) -> f32 {
        let available_width = viewport_width - self.padding * 2.0;
        let available_height = viewport_height - self.padding * 2.0;

        let (required_width, required_height) = self.required_size(rows, cols);

        let width_scale = available_width * self.safety_margin / required_width;
        let height_scale = available_height * self.safety_margin / required_height;

        width_scale
            .min(height_scale)
            .clamp(self.min_scale, self.max_scale)
    }
}

/// Rendering scale: the computed fit scale composed with user zoom.
///
/// The fit scale is recomputed on viewport resize and grid replacement; the
/// user multiplier survives resizes but resets to neutral when a new grid is
/// committed. The product never leaves `[min_scale, max_scale]`.
#[derive(Debug, Clone, Copy)]
pub struct ScaleState {
    computed: f32,
    user_multiplier: f32,
}

impl Default for ScaleState {
    fn default() -> Self {
        Self {
            computed: 1.0,
            user_multiplier: 1.0,
        }
    }
}

impl ScaleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the fit scale for the current viewport and grid shape.
    /// Empty grids are skipped; there is nothing to fit.
    pub fn recompute(
        &mut self,
        fit: &FitConfig,
        viewport_width: f32,
        viewport_height: f32,
        rows: usize,
        cols: usize,
    ) {
        if rows == 0 || cols == 0 {
            return;
        }
        self.computed = fit.compute_scale(viewport_width, viewport_height, rows, cols);
    }

    /// The scale the renderer applies: computed fit × user zoom.
    pub fn effective(&self) -> f32 {
        self.computed * self.user_multiplier
    }

    pub fn computed(&self) -> f32 {
        self.computed
    }

    pub fn user_multiplier(&self) -> f32 {
        self.user_multiplier
    }

    /// Effective scale as a whole percentage, for the zoom indicator.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u32 {
        (self.effective() * 100.0).round().clamp(0.0, f32::from(u16::MAX)) as u32
    }

    /// Step the user zoom in, capped so the effective scale never exceeds
    /// the maximum.
    pub fn zoom_in(&mut self, fit: &FitConfig) {
        self.user_multiplier = (self.user_multiplier * ZOOM_IN_STEP).min(fit.max_scale / self.computed);
    }

    /// Step the user zoom out, floored so the effective scale never drops
    /// below the minimum.
    pub fn zoom_out(&mut self, fit: &FitConfig) {
        self.user_multiplier = (self.user_multiplier * ZOOM_OUT_STEP).max(fit.min_scale / self.computed);
    }

    /// Back to neutral zoom. Also applied whenever a new grid is committed.
    pub fn reset_zoom(&mut self) {
        self.user_multiplier = 1.0;
    }

    /// False exactly when the effective scale is already at the maximum;
    /// the UI renders the control disabled then.
    pub fn can_zoom_in(&self, fit: &FitConfig) -> bool {
        self.effective() < fit.max_scale
    }

    pub fn can_zoom_out(&self, fit: &FitConfig) -> bool {
        self.effective() > fit.min_scale
    }

    pub fn can_reset(&self) -> bool {
        (self.user_multiplier - 1.0).abs() > f32::EPSILON
    }
}
