//! Resize coalescing for `SeatView`.
//!
//! Viewport resize arrives as a continuous signal stream; recomputing the fit
//! scale for every intermediate size causes visible thrash. Signals within
//! the debounce window collapse into one recomputation using the final size.
//!
//! The coalescer itself is a plain timestamp-driven state machine so the
//! policy is testable on the host; the wasm half below wires it to a
//! `ResizeObserver` and the browser's timeout clock.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::ResizeObserver;

#[cfg(target_arch = "wasm32")]
use super::{now_ms, SeatView, SharedState};

/// Delay (ms) after the last resize signal before the fit scale recomputes.
pub(crate) const RESIZE_DEBOUNCE_MS: f64 = 100.0;

/// Collapses bursts of resize signals into a single deliverable size.
#[derive(Debug, Clone)]
pub struct ResizeCoalescer {
    pending: Option<(f32, f32)>,
    deadline_ms: f64,
    delay_ms: f64,
}

impl Default for ResizeCoalescer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizeCoalescer {
    pub fn new() -> Self {
        Self::with_delay(RESIZE_DEBOUNCE_MS)
    }

    pub fn with_delay(delay_ms: f64) -> Self {
        Self {
            pending: None,
            deadline_ms: 0.0,
            delay_ms,
        }
    }

    /// Record the latest observed size and push the deadline out.
    pub fn signal(&mut self, width: f32, height: f32, now_ms: f64) {
        self.pending = Some((width, height));
        self.deadline_ms = now_ms + self.delay_ms;
    }

    /// Take the coalesced size once the window has gone quiet.
    pub fn poll(&mut self, now_ms: f64) -> Option<(f32, f32)> {
        if self.pending.is_some() && now_ms >= self.deadline_ms {
            return self.pending.take();
        }
        None
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(target_arch = "wasm32")]
impl SeatView {
    /// Observe the container: every size change signals the coalescer and
    /// (re)arms the debounce timer.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn attach_resize_observer(&mut self) -> std::result::Result<(), JsValue> {
        let state = Rc::clone(&self.state);
        let closure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            let last = entries.get(entries.length().saturating_sub(1));
            let Ok(entry) = last.dyn_into::<web_sys::ResizeObserverEntry>() else {
                return;
            };
            let rect = entry.content_rect();
            {
                let mut s = state.borrow_mut();
                s.resize_coalescer
                    .signal(rect.width() as f32, rect.height() as f32, now_ms());
            }
            SeatView::schedule_resize_timeout(&state);
        }) as Box<dyn FnMut(js_sys::Array)>);

        let observer = ResizeObserver::new(closure.as_ref().unchecked_ref())?;
        observer.observe(&self.container);
        self.resize_observer = Some(observer);
        self.resize_observer_closure = Some(closure);
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn schedule_resize_timeout(state: &Rc<RefCell<SharedState>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut s = state.borrow_mut();
        // Re-arm: cancel any timer from an earlier signal in the burst
        if let Some(timer_id) = s.resize_timer.take() {
            window.clear_timeout_with_handle(timer_id);
        }
        if s.resize_closure.is_none() {
            let weak_state = Rc::downgrade(state);
            let closure = Closure::wrap(Box::new(move || {
                if let Some(state) = weak_state.upgrade() {
                    SeatView::handle_resize_fire(&state);
                }
            }) as Box<dyn FnMut()>);
            s.resize_closure = Some(closure);
        }
        let Some(callback) = s.resize_closure.as_ref() else {
            return;
        };
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            RESIZE_DEBOUNCE_MS as i32,
        ) {
            Ok(id) => s.resize_timer = Some(id),
            Err(_) => s.resize_timer = None,
        }
    }

    pub(crate) fn handle_resize_fire(state: &Rc<RefCell<SharedState>>) {
        let callback = {
            let mut s = state.borrow_mut();
            s.resize_timer = None;
            let Some((width, height)) = s.resize_coalescer.poll(now_ms()) else {
                // Signals kept arriving; wait for the window to go quiet
                if s.resize_coalescer.is_pending() {
                    drop(s);
                    Self::schedule_resize_timeout(state);
                }
                return;
            };
            let s = &mut *s;
            s.viewport.resize(width, height);
            if let Some(grid) = &s.grid {
                s.scale.recompute(
                    &s.fit,
                    s.viewport.width,
                    s.viewport.height,
                    grid.row_count(),
                    grid.col_count(),
                );
            }
            s.needs_render = true;
            s.render_callback.clone()
        };
        Self::invoke_render_callback(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_window_delivers_final_size() {
        let mut co = ResizeCoalescer::new();
        co.signal(800.0, 600.0, 0.0);
        co.signal(820.0, 610.0, 30.0);
        co.signal(900.0, 700.0, 60.0);

        // Still inside the window of the last signal
        assert_eq!(co.poll(100.0), None);
        // Window expired: only the final size comes out
        assert_eq!(co.poll(160.0), Some((900.0, 700.0)));
        // Delivered once
        assert_eq!(co.poll(200.0), None);
    }

    #[test]
    fn test_each_signal_pushes_deadline() {
        let mut co = ResizeCoalescer::new();
        co.signal(800.0, 600.0, 0.0);
        assert_eq!(co.poll(99.0), None);
        assert_eq!(co.poll(100.0), Some((800.0, 600.0)));
    }

    #[test]
    fn test_idle_polls_are_empty() {
        let mut co = ResizeCoalescer::new();
        assert!(!co.is_pending());
        assert_eq!(co.poll(1000.0), None);
    }
}
