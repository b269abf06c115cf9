#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use tracing::debug;

use crate::consts::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_SENSITIVITY};
use crate::input::WheelDelta;

/// The minimap's own zoom factor, applied on top of the fit scale.
///
/// Only wheel input changes it. There is no pan state: the displayed region
/// is re-derived from the content bounds every pass, so zooming always
/// scales about the bounds center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapZoom {
    value: f64,
}

impl Default for MinimapZoom {
    fn default() -> Self {
        Self { value: DEFAULT_ZOOM }
    }
}

impl MinimapZoom {
    /// Start from `value`, clamped into the allowed range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value: clamp_zoom(value) }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.value
    }

    /// Apply one wheel event. Returns `true` if the zoom changed.
    pub fn apply_wheel(&mut self, delta: WheelDelta) -> bool {
        if !delta.dy.is_finite() {
            return false;
        }
        let next = clamp_zoom(self.value - delta.dy * WHEEL_ZOOM_SENSITIVITY);
        if (next - self.value).abs() < f64::EPSILON {
            return false;
        }
        if next <= MIN_ZOOM || next >= MAX_ZOOM {
            debug!(zoom = next, "minimap zoom reached limit");
        }
        self.value = next;
        true
    }
}

fn clamp_zoom(value: f64) -> f64 {
    if value.is_nan() { DEFAULT_ZOOM } else { value.clamp(MIN_ZOOM, MAX_ZOOM) }
}
