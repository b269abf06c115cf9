//! Turning minimap positions into main-canvas view offsets.
//!
//! Click-to-jump and drag-to-pan share one rule: take a minimap point, map it
//! to world space, and propose the offset that centers that world point in
//! the main viewport at the current scale. The main scale is never changed.

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

use crate::camera::{PhysicalSize, Point, ViewState};
use crate::transform::MinimapTransform;

/// Offset that centers the world point under minimap point `target`.
#[must_use]
pub fn center_on_minimap_point(
    target: Point,
    transform: &MinimapTransform,
    view: &ViewState,
    physical: PhysicalSize,
) -> Point {
    let world = transform.minimap_to_world(target);
    view.offset_centering(world, physical)
}

/// Offset for a click at `click`, or `None` if the click belongs to a drag gesture.
#[must_use]
pub fn click_offset(
    click: Point,
    drag_in_progress: bool,
    transform: &MinimapTransform,
    view: &ViewState,
    physical: PhysicalSize,
) -> Option<Point> {
    if drag_in_progress {
        return None;
    }
    Some(center_on_minimap_point(click, transform, view, physical))
}
