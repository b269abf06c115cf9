#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Point, Rect};
use crate::consts::MIN_SHAPE_SIZE;
use crate::transform::MinimapTransform;

/// What a minimap-space point landed on.
///
/// The viewport marker is the only hit target; layer shapes are never tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    ViewportMarker,
    Background,
}

/// The viewport marker as drawn: the visible world rect in minimap space,
/// floored to [`MIN_SHAPE_SIZE`] so it stays grabbable when tiny.
#[must_use]
pub fn marker_rect(transform: &MinimapTransform, viewport: Rect) -> Rect {
    transform.rect_to_minimap(viewport).with_min_size(MIN_SHAPE_SIZE)
}

/// Exact marker center in minimap space, independent of the size floor.
#[must_use]
pub fn marker_center(transform: &MinimapTransform, viewport: Rect) -> Point {
    transform.world_to_minimap(viewport.center())
}

/// Classify a widget-local point against the marker.
#[must_use]
pub fn hit_test(pt: Point, marker: Rect) -> HitPart {
    if marker.contains(pt) { HitPart::ViewportMarker } else { HitPart::Background }
}
