//! Coordinate and interaction engine for a canvas overview minimap.
//!
//! The minimap is a small fixed-size window showing the whole extent of a
//! pannable, zoomable canvas of layers, with a marker for the region visible
//! on the main canvas. This crate owns the math and the gestures: fitting the
//! content into the window, mapping between world and minimap space, the
//! minimap's own wheel zoom, dragging the viewport marker, and click-to-jump.
//! The host owns everything else: it feeds layers and view state in, paints
//! the [`render::Scene`], and applies (or ignores) the offsets proposed via
//! [`engine::Action`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::MinimapEngine`]: inputs, event handlers, actions |
//! | [`camera`] | Points, rectangles, main view state, visible-rect tracking |
//! | [`layer`] | Layer summaries and render ordering |
//! | [`bounds`] | Content bounds (layers + viewport, padded) |
//! | [`transform`] | World and minimap space conversions |
//! | [`zoom`] | Clamped wheel-driven minimap zoom |
//! | [`input`] | Buttons, wheel deltas, and the drag state machine |
//! | [`hit`] | Viewport marker geometry and hit-testing |
//! | [`navigate`] | Minimap point to centered view offset |
//! | [`render`] | Scene building for the painter |
//! | [`config`] | Display size, zoom policy, palette |
//! | [`consts`] | Shared numeric constants |

pub mod bounds;
pub mod camera;
pub mod config;
pub mod consts;
pub mod engine;
pub mod hit;
pub mod input;
pub mod layer;
pub mod navigate;
pub mod render;
pub mod transform;
pub mod zoom;
