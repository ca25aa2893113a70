//! Viewer state tests: commit lifecycle, debounced resize, click routing.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use seatview::layout::{MAX_SCALE, MIN_SCALE};
use seatview::SeatView;

fn csv(content: &str) -> Vec<u8> {
    content.as_bytes().to_vec()
}

#[test]
fn test_starts_empty_until_sample_loads() {
    let mut view = SeatView::new_test(800.0, 600.0);
    assert!(view.grid().is_none());

    view.load_sample().unwrap();
    let summary = view.summary().unwrap();
    assert_eq!((summary.rows, summary.cols), (2, 4));
    // 2x4 sample fits 800x600 at natural size
    assert_eq!(view.effective_scale(), MAX_SCALE);
}

#[test]
fn test_commit_recomputes_scale_for_new_shape() {
    let mut view = SeatView::new_test(800.0, 600.0);
    view.load_sample().unwrap();
    assert_eq!(view.computed_scale(), 1.0);

    // A much wider roster forces a shrink
    let wide: String = (0..20)
        .map(|i| format!("p{i}"))
        .collect::<Vec<_>>()
        .join(",");
    view.load(&csv(&wide), "wide.csv").unwrap();
    assert!(view.computed_scale() < 1.0);
}

#[test]
fn test_commit_resets_zoom_and_selection() {
    let mut view = SeatView::new_test(800.0, 600.0);
    view.load_sample().unwrap();

    view.zoom_out();
    view.click(170.0, 150.0);
    assert!(view.active_seat_id().is_some());
    assert!(view.can_reset_zoom());

    view.load(&csv("a,b\nc,d"), "update.csv").unwrap();
    assert_eq!(view.active_seat_id(), None);
    assert!(!view.can_reset_zoom());
}

#[test]
fn test_failed_import_leaves_state_untouched() {
    let mut view = SeatView::new_test(800.0, 600.0);
    view.load(&csv("a,b\nc,d"), "roster.csv").unwrap();
    view.zoom_out();
    // Grid is 2x2: origin (262, 148); click inside seat (0, 0)... at 0.8 zoom
    view.clear_selection();
    let grid_before = view.grid().cloned();
    let scale_before = view.effective_scale();

    // Wrong extension
    assert!(view.load(&csv("x,y"), "roster.txt").is_err());
    // Ragged content
    assert!(view.load(&csv("a,b,c\nd,e"), "ragged.csv").is_err());
    // Unreadable xlsx bytes
    assert!(view.load(b"not a zip archive", "roster.xlsx").is_err());

    assert_eq!(view.grid().cloned(), grid_before);
    assert_eq!(view.effective_scale(), scale_before);
    assert_eq!(view.active_seat_id(), None);
}

#[test]
fn test_resize_recompute_is_coalesced() {
    let mut view = SeatView::new_test(800.0, 600.0);
    view.load_sample().unwrap();
    assert_eq!(view.computed_scale(), 1.0);

    // A burst of shrinking resizes; nothing recomputes mid-burst
    view.observe_resize(700.0, 500.0, 0.0);
    view.observe_resize(600.0, 450.0, 40.0);
    view.observe_resize(400.0, 300.0, 80.0);
    assert!(!view.pump(120.0));
    assert_eq!(view.computed_scale(), 1.0);

    // Window expires: one recompute against the final size
    assert!(view.pump(190.0));
    assert_eq!(view.viewport().width, 400.0);
    let fitted = view.computed_scale();
    assert!(fitted < 1.0);

    // Nothing left pending
    assert!(!view.pump(300.0));
    assert_eq!(view.computed_scale(), fitted);
}

#[test]
fn test_click_toggles_and_outside_click_clears() {
    let mut view = SeatView::new_test(800.0, 600.0);
    view.load_sample().unwrap();

    // Sample grid is 2x4 at scale 1.0: origin (164, 148)
    assert_eq!(view.click(170.0, 150.0), Some("0-0"));
    assert!(view.active_seat_id().is_some());

    // Same seat again deactivates
    assert_eq!(view.click(170.0, 150.0), None);

    // Different seat switches
    view.click(170.0, 150.0);
    assert_eq!(view.click(600.0, 400.0), Some("1-3"));

    // A miss (container corner) clears
    assert_eq!(view.click(5.0, 5.0), None);
    assert_eq!(view.active_seat_id(), None);
}

#[test]
fn test_zoom_affordances_on_viewer() {
    let mut view = SeatView::new_test(800.0, 600.0);
    view.load_sample().unwrap();

    // Computed scale is at max; zooming in is a no-op
    assert!(!view.can_zoom_in());
    let before = view.effective_scale();
    view.zoom_in();
    assert_eq!(view.effective_scale(), before);

    for _ in 0..50 {
        view.zoom_out();
    }
    assert_eq!(view.effective_scale(), MIN_SCALE);
    assert!(!view.can_zoom_out());
    assert!(view.can_zoom_in());

    view.reset_zoom();
    assert_eq!(view.effective_scale(), before);
}

#[test]
fn test_scale_percent_for_indicator() {
    let mut view = SeatView::new_test(800.0, 600.0);
    view.load_sample().unwrap();
    assert_eq!(view.scale_percent(), 100);
    view.zoom_out();
    assert_eq!(view.scale_percent(), 80);
}

#[test]
fn test_selection_follows_current_grid_geometry() {
    let mut view = SeatView::new_test(800.0, 600.0);
    // Single row of two seats: required 224x140, origin (288, 230)
    view.load(&csv("Alice,Bob"), "pair.csv").unwrap();

    assert_eq!(view.click(300.0, 240.0), Some("0-0"));
    assert_eq!(view.click(430.0, 240.0), Some("0-1"));
    assert_eq!(view.active_seat_id(), Some("0-1"));
}
