use serde::Serialize;
use tracing::{debug, trace};

use crate::bounds::content_bounds;
use crate::camera::{PhysicalSize, Point, Rect, ViewState};
use crate::config::{MinimapConfig, ZoomPolicy};
use crate::hit::{self, HitPart};
use crate::input::{Button, DragController, DragEnd, WheelDelta};
use crate::layer::{LayerId, LayerSummary};
use crate::navigate;
use crate::render::{self, Scene, SceneInputs};
use crate::transform::MinimapTransform;
use crate::zoom::MinimapZoom;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Pointer cursor the host should show over the minimap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    #[default]
    Pointer,
    Grab,
    Grabbing,
}

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Proposed new main-canvas offset. The host decides whether to apply it.
    ProposeOffset { offset: Point },
    /// Attach a window-level pointer-release listener and route it to `on_pointer_up`.
    CaptureGlobalRelease,
    /// Detach the listener attached for `CaptureGlobalRelease`.
    ReleaseGlobalRelease,
    SetCursor { cursor: Cursor },
    RenderNeeded,
}

/// Per-pass derived state. Rebuilt from the current inputs on every query.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// World rectangle visible on the main canvas.
    pub viewport: Rect,
    /// Padded union of layers and viewport.
    pub bounds: Rect,
    pub transform: MinimapTransform,
}

/// Minimap engine state: host inputs plus the engine's own zoom and drag gesture.
///
/// Inputs are replaced wholesale by the host's setters; nothing derived from
/// them is stored, so a query always reflects the latest layers, view and size.
#[derive(Debug, Clone, Default)]
pub struct MinimapEngine {
    config: MinimapConfig,
    layers: Vec<LayerSummary>,
    selection: Option<LayerId>,
    view: ViewState,
    physical: PhysicalSize,
    zoom: MinimapZoom,
    drag: DragController,
    cursor: Cursor,
}

impl MinimapEngine {
    #[must_use]
    pub fn new(config: MinimapConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Data inputs ---

    /// Replace the layer summaries.
    pub fn set_layers(&mut self, layers: Vec<LayerSummary>) {
        self.layers = layers;
    }

    pub fn set_selection(&mut self, selection: Option<LayerId>) {
        self.selection = selection;
    }

    /// Replace the main canvas view state. Called whenever the host pans or zooms,
    /// including after applying an offset this engine proposed.
    pub fn set_view(&mut self, view: ViewState) {
        self.view = view;
    }

    pub fn set_physical_size(&mut self, size: PhysicalSize) {
        self.physical = size;
    }

    /// Hand back a zoom the host saved earlier. Ignored under [`ZoomPolicy::Reset`].
    /// Returns `true` if the value was applied.
    pub fn restore_zoom(&mut self, value: f64) -> bool {
        match self.config.zoom_policy {
            ZoomPolicy::Reset => {
                debug!(value, "zoom restore ignored by policy");
                false
            }
            ZoomPolicy::Restore => {
                self.zoom = MinimapZoom::new(value);
                true
            }
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &MinimapConfig {
        &self.config
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom.value()
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Recompute viewport, content bounds, and transform from the current inputs.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let viewport = self.view.visible_rect(self.physical);
        let bounds = content_bounds(&self.layers, viewport);
        let transform = MinimapTransform::fit(bounds, self.zoom.value(), self.config.width, self.config.height);
        Frame { viewport, bounds, transform }
    }

    /// Build the scene for the painter.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let frame = self.frame();
        render::build_scene(SceneInputs {
            layers: &self.layers,
            selected: self.selection,
            transform: &frame.transform,
            viewport: frame.viewport,
            palette: &self.config.palette,
            width: self.config.width,
            height: self.config.height,
            zoom: self.zoom.value(),
        })
    }

    // --- Input events (widget-local coordinates) ---

    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        // A second press mid-drag (another finger, a lost release) keeps the current grab.
        if button != Button::Primary || self.drag.is_dragging() {
            return Vec::new();
        }
        self.drag.pointer_down();

        let frame = self.frame();
        let marker = hit::marker_rect(&frame.transform, frame.viewport);
        if hit::hit_test(pt, marker) != HitPart::ViewportMarker {
            return Vec::new();
        }

        self.drag.begin(pt, hit::marker_center(&frame.transform, frame.viewport));
        let mut actions = vec![Action::CaptureGlobalRelease];
        actions.extend(self.set_cursor(Cursor::Grabbing));
        actions
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let frame = self.frame();
        if let Some(target) = self.drag.target_center(pt) {
            let offset = navigate::center_on_minimap_point(target, &frame.transform, &self.view, self.physical);
            trace!(x = offset.x, y = offset.y, "drag proposes offset");
            return vec![Action::ProposeOffset { offset }];
        }

        let marker = hit::marker_rect(&frame.transform, frame.viewport);
        let cursor = match hit::hit_test(pt, marker) {
            HitPart::ViewportMarker => Cursor::Grab,
            HitPart::Background => Cursor::Pointer,
        };
        self.set_cursor(cursor).into_iter().collect()
    }

    /// Button released anywhere, delivered by the global listener. Only the
    /// primary button ends a drag.
    pub fn on_pointer_up(&mut self, pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || !self.drag.end(DragEnd::PointerUp) {
            return Vec::new();
        }
        let frame = self.frame();
        let cursor = match hit::hit_test(pt, hit::marker_rect(&frame.transform, frame.viewport)) {
            HitPart::ViewportMarker => Cursor::Grab,
            HitPart::Background => Cursor::Pointer,
        };
        let mut actions = vec![Action::ReleaseGlobalRelease];
        actions.extend(self.set_cursor(cursor));
        actions
    }

    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.abort_drag(DragEnd::PointerCancel)
    }

    /// Window blurred; a release may never be delivered.
    pub fn on_focus_lost(&mut self) -> Vec<Action> {
        self.abort_drag(DragEnd::FocusLost)
    }

    /// Jump the main view to the clicked point, unless the click belongs to a drag.
    pub fn on_click(&mut self, pt: Point) -> Vec<Action> {
        let suppressed = self.drag.take_click_suppression();
        let frame = self.frame();
        match navigate::click_offset(pt, suppressed, &frame.transform, &self.view, self.physical) {
            Some(offset) => {
                trace!(x = offset.x, y = offset.y, "click proposes offset");
                vec![Action::ProposeOffset { offset }]
            }
            None => Vec::new(),
        }
    }

    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Action> {
        if self.zoom.apply_wheel(delta) { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    /// Drop any gesture in progress, e.g. when the widget unmounts.
    pub fn reset(&mut self) -> Vec<Action> {
        self.abort_drag(DragEnd::Reset)
    }

    fn abort_drag(&mut self, reason: DragEnd) -> Vec<Action> {
        if !self.drag.end(reason) {
            return Vec::new();
        }
        // The pointer position is unknown here.
        let mut actions = vec![Action::ReleaseGlobalRelease];
        actions.extend(self.set_cursor(Cursor::Pointer));
        actions
    }

    fn set_cursor(&mut self, cursor: Cursor) -> Option<Action> {
        if self.cursor == cursor {
            return None;
        }
        self.cursor = cursor;
        Some(Action::SetCursor { cursor })
    }
}
