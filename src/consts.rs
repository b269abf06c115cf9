//! Shared numeric constants for the minimap engine.

// ── Display ─────────────────────────────────────────────────────

/// Default minimap width in host layout units.
pub const MINIMAP_WIDTH: f64 = 200.0;

/// Default minimap height in host layout units.
pub const MINIMAP_HEIGHT: f64 = 150.0;

/// Smallest width/height a layer or marker rectangle is drawn at, in minimap units.
pub const MIN_SHAPE_SIZE: f64 = 2.0;

// ── Bounds ──────────────────────────────────────────────────────

/// Padding around the content union, as a fraction of its larger dimension.
pub const CONTENT_PADDING_RATIO: f64 = 0.1;

/// World-space extent substituted for a zero-size bounds dimension.
pub const MIN_WORLD_EXTENT: f64 = 1.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Lower clamp for the minimap's own zoom.
pub const MIN_ZOOM: f64 = 0.5;

/// Upper clamp for the minimap's own zoom.
pub const MAX_ZOOM: f64 = 3.0;

/// Zoom applied when nothing has been restored.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Zoom change per wheel pixel. Positive wheel `dy` (scroll down) zooms out.
pub const WHEEL_ZOOM_SENSITIVITY: f64 = 0.002;
