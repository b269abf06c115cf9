#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use tracing::trace;

use crate::camera::{Point, Rect};
use crate::consts::MIN_WORLD_EXTENT;

/// Uniform scale + offset mapping world space into minimap space.
///
/// `minimap = (world - bounds.origin) * scale + offset` on each axis. The
/// content bounds are fitted (letterboxed and centered) into the display
/// size, then scaled by the minimap's own zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapTransform {
    /// Content bounds after zero-extent substitution.
    pub bounds: Rect,
    /// Minimap units per world unit (fit scale times zoom).
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl MinimapTransform {
    /// Fit `bounds` into a `display_w` x `display_h` minimap at the given zoom.
    ///
    /// A zero, negative or non-finite bounds dimension is replaced by
    /// [`MIN_WORLD_EXTENT`] so the scale stays finite and positive.
    #[must_use]
    pub fn fit(bounds: Rect, zoom: f64, display_w: f64, display_h: f64) -> Self {
        let bounds = Rect {
            width: sanitize_extent(bounds.width),
            height: sanitize_extent(bounds.height),
            ..bounds
        };

        let scale = (display_w / bounds.width).min(display_h / bounds.height) * zoom;
        let scaled_w = bounds.width * scale;
        let scaled_h = bounds.height * scale;

        Self {
            bounds,
            scale,
            offset_x: (display_w - scaled_w) / 2.0,
            offset_y: (display_h - scaled_h) / 2.0,
        }
    }

    /// Map a world point into minimap space.
    #[must_use]
    pub fn world_to_minimap(&self, world: Point) -> Point {
        Point {
            x: (world.x - self.bounds.x) * self.scale + self.offset_x,
            y: (world.y - self.bounds.y) * self.scale + self.offset_y,
        }
    }

    /// Map a minimap point back into world space.
    #[must_use]
    pub fn minimap_to_world(&self, minimap: Point) -> Point {
        Point {
            x: (minimap.x - self.offset_x) / self.scale + self.bounds.x,
            y: (minimap.y - self.offset_y) / self.scale + self.bounds.y,
        }
    }

    /// Map a world rectangle into minimap space.
    #[must_use]
    pub fn rect_to_minimap(&self, world: Rect) -> Rect {
        let origin = self.world_to_minimap(Point::new(world.x, world.y));
        Rect::new(origin.x, origin.y, world.width * self.scale, world.height * self.scale)
    }
}

fn sanitize_extent(extent: f64) -> f64 {
    if extent.is_finite() && extent > 0.0 {
        extent
    } else {
        trace!(extent, substitute = MIN_WORLD_EXTENT, "degenerate content extent");
        MIN_WORLD_EXTENT
    }
}
