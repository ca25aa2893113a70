//! Main `SeatView` struct - the primary entry point for the seating-chart core.
//!
//! This module provides the WASM-exported `SeatView` struct that handles:
//! - Importing roster files and committing the resulting grid
//! - Managing viewport state and the fit-to-container scale
//! - Composing user zoom on top of the computed scale, with bounds
//! - Seat selection from click events
//!
//! Event handlers for selection and resize-driven rescaling are registered
//! when the viewer is created - no manual JavaScript wiring required. The
//! viewer owns state only; drawing the figures is the embedder's job, driven
//! through the render callback.

mod events;
mod resize;

pub use resize::ResizeCoalescer;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlElement, MouseEvent, ResizeObserver};

#[cfg(not(target_arch = "wasm32"))]
use crate::error::Result;
use crate::layout::{FitConfig, ScaleState, Viewport};
use crate::sample::sample_grid;
use crate::types::{GridSummary, SeatingGrid, Selection};

/// Shared state that can be accessed by event handlers (wasm32 only)
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    pub(crate) grid: Option<SeatingGrid>,
    pub(crate) viewport: Viewport,
    pub(crate) fit: FitConfig,
    pub(crate) scale: ScaleState,
    pub(crate) selection: Selection,
    pub(crate) resize_coalescer: ResizeCoalescer,
    pub(crate) resize_timer: Option<i32>,
    pub(crate) resize_closure: Option<Closure<dyn FnMut()>>,
    pub(crate) needs_render: bool,
    pub(crate) render_callback: Option<Function>,
}

// Timing helper for debounce deadlines.
#[cfg(target_arch = "wasm32")]
pub(crate) fn now_ms() -> f64 {
    if let Some(window) = web_sys::window() {
        if let Some(perf) = window.performance() {
            return perf.now();
        }
    }
    js_sys::Date::now()
}

/// The main viewer struct exported to JavaScript
#[wasm_bindgen]
pub struct SeatView {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<SharedState>>,
    #[cfg(target_arch = "wasm32")]
    container: HtmlElement,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)] // Kept alive for the observer's lifetime
    resize_observer: Option<ResizeObserver>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)] // Kept alive for the observer's lifetime
    resize_observer_closure: Option<Closure<dyn FnMut(js_sys::Array)>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)] // Kept alive for the listener's lifetime
    click_closure: Option<Closure<dyn FnMut(MouseEvent)>>,

    // Non-wasm32 fields
    #[cfg(not(target_arch = "wasm32"))]
    grid: Option<SeatingGrid>,
    #[cfg(not(target_arch = "wasm32"))]
    viewport: Viewport,
    #[cfg(not(target_arch = "wasm32"))]
    fit: FitConfig,
    #[cfg(not(target_arch = "wasm32"))]
    scale: ScaleState,
    #[cfg(not(target_arch = "wasm32"))]
    selection: Selection,
    #[cfg(not(target_arch = "wasm32"))]
    resize_coalescer: ResizeCoalescer,
    #[cfg(not(target_arch = "wasm32"))]
    needs_render: bool,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl SeatView {
    /// Create a viewer bound to its container element. Starts on the
    /// built-in sample roster; resize observation and click handling are
    /// wired immediately.
    #[wasm_bindgen(constructor)]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(container: HtmlElement) -> std::result::Result<SeatView, JsValue> {
        console_error_panic_hook::set_once();

        let rect = container.get_bounding_client_rect();
        let viewport = Viewport::new(rect.width() as f32, rect.height() as f32);

        let mut state = SharedState {
            grid: None,
            viewport,
            fit: FitConfig::default(),
            scale: ScaleState::new(),
            selection: Selection::new(),
            resize_coalescer: ResizeCoalescer::new(),
            resize_timer: None,
            resize_closure: None,
            needs_render: true,
            render_callback: None,
        };
        let grid = sample_grid()?;
        Self::commit_grid_state(&mut state, grid);

        let state = Rc::new(RefCell::new(state));
        let mut view = SeatView {
            state,
            container,
            resize_observer: None,
            resize_observer_closure: None,
            click_closure: None,
        };
        view.attach_resize_observer()?;
        view.attach_click_handler()?;
        Ok(view)
    }

    /// Import a roster file and commit it as the new grid.
    ///
    /// Returns the grid summary (rows × cols) for the import preview. On
    /// any failure the previously committed grid, selection, and zoom are
    /// left untouched.
    pub fn load(&mut self, data: &[u8], file_name: &str) -> std::result::Result<JsValue, JsValue> {
        let grid = crate::import(data, file_name)?;
        let summary = grid.summary();

        let callback = {
            let mut s = self.state.borrow_mut();
            Self::commit_grid_state(&mut s, grid);
            s.render_callback.clone()
        };
        Self::invoke_render_callback(callback);

        serde_wasm_bindgen::to_value(&summary)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// The committed grid as a JS object.
    pub fn grid(&self) -> std::result::Result<JsValue, JsValue> {
        let s = self.state.borrow();
        serde_wasm_bindgen::to_value(&s.grid)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Rows × cols of the committed grid.
    pub fn summary(&self) -> std::result::Result<JsValue, JsValue> {
        let s = self.state.borrow();
        let summary = s.grid.as_ref().map(SeatingGrid::summary);
        serde_wasm_bindgen::to_value(&summary)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Id of the seat whose placard is flipped, if any.
    pub fn active_seat_id(&self) -> Option<String> {
        self.state.borrow().selection.active_id().map(String::from)
    }

    /// The scale the renderer should apply (computed fit × user zoom).
    pub fn effective_scale(&self) -> f32 {
        self.state.borrow().scale.effective()
    }

    /// Effective scale as a whole percentage for the zoom indicator.
    pub fn scale_percent(&self) -> u32 {
        self.state.borrow().scale.percent()
    }

    pub fn zoom_in(&mut self) {
        let callback = {
            let mut s = self.state.borrow_mut();
            if !s.scale.can_zoom_in(&s.fit) {
                return;
            }
            let fit = s.fit;
            s.scale.zoom_in(&fit);
            s.needs_render = true;
            s.render_callback.clone()
        };
        Self::invoke_render_callback(callback);
    }

    pub fn zoom_out(&mut self) {
        let callback = {
            let mut s = self.state.borrow_mut();
            if !s.scale.can_zoom_out(&s.fit) {
                return;
            }
            let fit = s.fit;
            s.scale.zoom_out(&fit);
            s.needs_render = true;
            s.render_callback.clone()
        };
        Self::invoke_render_callback(callback);
    }

    pub fn reset_zoom(&mut self) {
        let callback = {
            let mut s = self.state.borrow_mut();
            if !s.scale.can_reset() {
                return;
            }
            s.scale.reset_zoom();
            s.needs_render = true;
            s.render_callback.clone()
        };
        Self::invoke_render_callback(callback);
    }

    /// Whether the zoom-in affordance should be enabled.
    pub fn can_zoom_in(&self) -> bool {
        let s = self.state.borrow();
        s.scale.can_zoom_in(&s.fit)
    }

    pub fn can_zoom_out(&self) -> bool {
        let s = self.state.borrow();
        s.scale.can_zoom_out(&s.fit)
    }

    pub fn can_reset_zoom(&self) -> bool {
        self.state.borrow().scale.can_reset()
    }

    /// Clear the selection (outside-click signal from the embedder).
    pub fn clear_selection(&mut self) {
        let callback = {
            let mut s = self.state.borrow_mut();
            s.selection.clear();
            s.needs_render = true;
            s.render_callback.clone()
        };
        Self::invoke_render_callback(callback);
    }

    /// Register a callback invoked whenever state changes require a redraw.
    pub fn set_render_callback(&mut self, callback: Function) {
        self.state.borrow_mut().render_callback = Some(callback);
    }
}

#[cfg(target_arch = "wasm32")]
impl SeatView {
    /// Replace the grid wholesale: selection cleared, user zoom reset to
    /// neutral, fit scale recomputed against the current viewport.
    pub(crate) fn commit_grid_state(s: &mut SharedState, grid: SeatingGrid) {
        s.selection.clear();
        s.scale.reset_zoom();
        s.scale.recompute(
            &s.fit,
            s.viewport.width,
            s.viewport.height,
            grid.row_count(),
            grid.col_count(),
        );
        s.grid = Some(grid);
        s.needs_render = true;
    }

    pub(crate) fn invoke_render_callback(callback: Option<Function>) {
        if let Some(cb) = callback {
            let _ = cb.call0(&JsValue::NULL);
        }
    }
}

// ============================================================================
// Non-wasm implementation for host-side testing
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl SeatView {
    /// Create a viewer with an explicit viewport (non-wasm version for
    /// testing). Starts empty; call [`SeatView::load_sample`] or
    /// [`SeatView::load`] to commit a grid.
    pub fn new_test(width: f32, height: f32) -> Self {
        SeatView {
            grid: None,
            viewport: Viewport::new(width, height),
            fit: FitConfig::default(),
            scale: ScaleState::new(),
            selection: Selection::new(),
            resize_coalescer: ResizeCoalescer::new(),
            needs_render: true,
        }
    }

    /// Commit the built-in sample roster.
    pub fn load_sample(&mut self) -> Result<()> {
        let grid = sample_grid()?;
        self.commit_grid(grid);
        Ok(())
    }

    /// Import a roster file and commit it as the new grid.
    ///
    /// Parsing and validation complete before any state is touched, so a
    /// failed import leaves the current grid, selection, and zoom intact.
    pub fn load(&mut self, data: &[u8], file_name: &str) -> Result<GridSummary> {
        let grid = crate::import(data, file_name)?;
        let summary = grid.summary();
        self.commit_grid(grid);
        Ok(summary)
    }

    fn commit_grid(&mut self, grid: SeatingGrid) {
        self.selection.clear();
        self.scale.reset_zoom();
        self.scale.recompute(
            &self.fit,
            self.viewport.width,
            self.viewport.height,
            grid.row_count(),
            grid.col_count(),
        );
        self.grid = Some(grid);
        self.needs_render = true;
    }

    /// Record a resize signal; the rescale fires via [`SeatView::pump`]
    /// once the debounce window goes quiet.
    pub fn observe_resize(&mut self, width: f32, height: f32, now_ms: f64) {
        self.resize_coalescer.signal(width, height, now_ms);
    }

    /// Drive pending debounced work. Returns true when a coalesced resize
    /// was applied and the fit scale recomputed.
    pub fn pump(&mut self, now_ms: f64) -> bool {
        let Some((width, height)) = self.resize_coalescer.poll(now_ms) else {
            return false;
        };
        self.viewport.resize(width, height);
        if let Some(grid) = &self.grid {
            self.scale.recompute(
                &self.fit,
                self.viewport.width,
                self.viewport.height,
                grid.row_count(),
                grid.col_count(),
            );
        }
        self.needs_render = true;
        true
    }

    /// Toggle the seat under a container point, or clear the selection on
    /// a miss. Returns the new active seat id.
    pub fn click(&mut self, x: f32, y: f32) -> Option<&str> {
        self.needs_render = true;
        let hit = self.grid.as_ref().and_then(|grid| {
            let pos = self.viewport.seat_at(
                x,
                y,
                &self.fit,
                grid.row_count(),
                grid.col_count(),
                self.scale.effective(),
            )?;
            grid.seat(pos.0, pos.1)
        });
        match hit.map(|seat| seat.id.clone()) {
            Some(id) => self.selection.toggle(&id),
            None => {
                self.selection.clear();
                None
            }
        }
    }

    /// Clear the selection (outside-click signal).
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.needs_render = true;
    }

    pub fn zoom_in(&mut self) {
        if !self.scale.can_zoom_in(&self.fit) {
            return;
        }
        self.scale.zoom_in(&self.fit);
        self.needs_render = true;
    }

    pub fn zoom_out(&mut self) {
        if !self.scale.can_zoom_out(&self.fit) {
            return;
        }
        self.scale.zoom_out(&self.fit);
        self.needs_render = true;
    }

    pub fn reset_zoom(&mut self) {
        if !self.scale.can_reset() {
            return;
        }
        self.scale.reset_zoom();
        self.needs_render = true;
    }

    pub fn can_zoom_in(&self) -> bool {
        self.scale.can_zoom_in(&self.fit)
    }

    pub fn can_zoom_out(&self) -> bool {
        self.scale.can_zoom_out(&self.fit)
    }

    pub fn can_reset_zoom(&self) -> bool {
        self.scale.can_reset()
    }

    pub fn grid(&self) -> Option<&SeatingGrid> {
        self.grid.as_ref()
    }

    pub fn summary(&self) -> Option<GridSummary> {
        self.grid.as_ref().map(SeatingGrid::summary)
    }

    pub fn active_seat_id(&self) -> Option<&str> {
        self.selection.active_id()
    }

    pub fn effective_scale(&self) -> f32 {
        self.scale.effective()
    }

    pub fn computed_scale(&self) -> f32 {
        self.scale.computed()
    }

    pub fn scale_percent(&self) -> u32 {
        self.scale.percent()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn needs_render(&self) -> bool {
        self.needs_render
    }
}
