//! Input model: pointer buttons, wheel deltas, and the viewport-drag state machine.
//!
//! All positions arriving here are already in widget-local minimap units. The
//! drag controller is the only piece of engine state whose lifetime is shorter
//! than the engine's: a [`DragSession`] exists from a pointer-down on the
//! viewport marker until the gesture ends, whichever way it ends.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::camera::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    #[default]
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels. Ignored by the minimap zoom.
    #[serde(default)]
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Grab offset captured when a drag starts.
///
/// `grab_dx`/`grab_dy` are the pointer position minus the marker center at
/// pointer-down, held constant so the marker never jumps under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub grab_dx: f64,
    pub grab_dy: f64,
}

/// State of the viewport-marker gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress; waiting for a pointer-down on the marker.
    #[default]
    Idle,
    /// The marker is following the pointer.
    Dragging(DragSession),
}

/// Why a drag ended. Every variant commits the last proposed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEnd {
    /// Primary button released, inside or outside the widget.
    PointerUp,
    /// The host cancelled the pointer (touch interrupted, capture lost).
    PointerCancel,
    /// The window lost focus mid-gesture.
    FocusLost,
    /// The engine was reset by its owner.
    Reset,
}

/// Tracks the drag gesture and whether the click that trails it must be swallowed.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
    suppress_click: bool,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Start of a new pointer gesture. Clears any click suppression left over
    /// from a previous drag whose trailing click never arrived.
    pub fn pointer_down(&mut self) {
        self.suppress_click = false;
    }

    /// Enter `Dragging`, remembering where on the marker the pointer grabbed it.
    pub fn begin(&mut self, pointer: Point, marker_center: Point) {
        let session = DragSession { grab_dx: pointer.x - marker_center.x, grab_dy: pointer.y - marker_center.y };
        debug!(grab_dx = session.grab_dx, grab_dy = session.grab_dy, "viewport drag started");
        self.state = DragState::Dragging(session);
        self.suppress_click = true;
    }

    /// Where the marker center should be for the current pointer position.
    /// `None` when idle.
    #[must_use]
    pub fn target_center(&self, pointer: Point) -> Option<Point> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(session) => {
                Some(Point::new(pointer.x - session.grab_dx, pointer.y - session.grab_dy))
            }
        }
    }

    /// Return to `Idle`. Returns `true` if a drag was actually in progress.
    pub fn end(&mut self, reason: DragEnd) -> bool {
        if !self.is_dragging() {
            return false;
        }
        debug!(?reason, "viewport drag ended");
        self.state = DragState::Idle;
        true
    }

    /// Whether a click arriving now belongs to a drag gesture. Consumes the
    /// suppression so only the one trailing click is swallowed.
    pub fn take_click_suppression(&mut self) -> bool {
        if self.is_dragging() {
            return true;
        }
        std::mem::take(&mut self.suppress_click)
    }
}
