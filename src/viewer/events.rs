//! Click handling for `SeatView`.
//!
//! A single document-level listener implements both halves of the selection
//! contract: a click that lands on a seat toggles it, and a click anywhere
//! else (gaps, padding, or outside the container) clears the active seat.
//!
//! All methods here are `pub(crate)` helpers called from the wasm-exported
//! public API that lives in `mod.rs`.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::MouseEvent;

#[cfg(target_arch = "wasm32")]
use super::{SeatView, SharedState};

#[cfg(target_arch = "wasm32")]
impl SeatView {
    /// Register the document click listener. Coordinates are translated
    /// into container space before hit-testing.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn attach_click_handler(&mut self) -> std::result::Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        let state = Rc::clone(&self.state);
        let container = self.container.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            let rect = container.get_bounding_client_rect();
            let x = event.client_x() as f32 - rect.left() as f32;
            let y = event.client_y() as f32 - rect.top() as f32;
            SeatView::internal_click(&state, x, y);
        }) as Box<dyn FnMut(MouseEvent)>);

        document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        self.click_closure = Some(closure);
        Ok(())
    }

    pub(crate) fn internal_click(state: &Rc<RefCell<SharedState>>, x: f32, y: f32) {
        let callback = {
            let mut s = state.borrow_mut();
            let s = &mut *s;

            let hit = s.grid.as_ref().and_then(|grid| {
                let (row, col) = s.viewport.seat_at(
                    x,
                    y,
                    &s.fit,
                    grid.row_count(),
                    grid.col_count(),
                    s.scale.effective(),
                )?;
                grid.seat(row, col).map(|seat| seat.id.clone())
            });

            match hit {
                Some(id) => {
                    s.selection.toggle(&id);
                }
                None => s.selection.clear(),
            }
            s.needs_render = true;
            s.render_callback.clone()
        };
        Self::invoke_render_callback(callback);
    }
}
