//! Content bounds: the world region the minimap displays.
//!
//! Always the union of every layer box and the current viewport, padded by a
//! fixed fraction of the union's larger side. Recomputed from scratch on every
//! call so it can never lag behind the layers, view state, or viewport size.

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

use crate::camera::Rect;
use crate::consts::CONTENT_PADDING_RATIO;
use crate::layer::LayerSummary;

/// Compute the padded world region covering `layers` and `viewport`.
///
/// With no layers this is the viewport padded by 10% of its larger side. A
/// zero-size union yields zero padding; [`crate::transform::MinimapTransform`]
/// handles that case.
#[must_use]
pub fn content_bounds(layers: &[LayerSummary], viewport: Rect) -> Rect {
    let union = layers.iter().fold(viewport, |acc, layer| acc.union(&layer.bounds()));
    let padding = CONTENT_PADDING_RATIO * union.width.max(union.height);
    union.inflate(padding)
}
