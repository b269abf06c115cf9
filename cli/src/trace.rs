//! Recorded interaction traces and their replay through the engine.
//!
//! A trace is a JSON document holding the host state at the start of a session
//! and the ordered input events that followed:
//!
//! ```json
//! {
//!   "physical": { "width": 1280, "height": 720 },
//!   "view": { "offset": { "x": 0, "y": 0 }, "scale": 1 },
//!   "layers": [{ "id": "...", "type": "image", "x": 0, "y": 0, "width": 400, "height": 300 }],
//!   "events": [
//!     { "type": "pointer_down", "x": 40, "y": 30 },
//!     { "type": "pointer_move", "x": 48, "y": 30 },
//!     { "type": "pointer_up", "x": 48, "y": 30 }
//!   ]
//! }
//! ```

#[cfg(test)]
#[path = "trace_test.rs"]
mod trace_test;

use minimap::camera::{PhysicalSize, Point, ViewState};
use minimap::config::MinimapConfig;
use minimap::engine::{Action, MinimapEngine};
use minimap::input::{Button, WheelDelta};
use minimap::layer::{LayerId, LayerSummary};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
pub struct Trace {
    /// Replaces the environment config when present.
    #[serde(default)]
    pub config: Option<MinimapConfig>,
    #[serde(default)]
    pub layers: Vec<LayerSummary>,
    #[serde(default)]
    pub selection: Option<LayerId>,
    #[serde(default)]
    pub view: ViewState,
    pub physical: PhysicalSize,
    #[serde(default)]
    pub events: Vec<TraceEvent>,
}

/// One recorded input. Coordinates are widget-local minimap units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceEvent {
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
    },
    PointerMove { x: f64, y: f64 },
    PointerUp {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
    },
    PointerCancel,
    Click { x: f64, y: f64 },
    Wheel {
        #[serde(default)]
        dx: f64,
        dy: f64,
    },
    Blur,
    /// The host changed the main view on its own (or applied an offset late).
    SetView { view: ViewState },
    Resize { width: f64, height: f64 },
    RestoreZoom { value: f64 },
}

/// One line of replay output: an action and the event that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub event: usize,
    #[serde(flatten)]
    pub action: Action,
}

impl Trace {
    /// Build an engine holding the trace's initial state.
    #[must_use]
    pub fn engine(&self, config: MinimapConfig) -> MinimapEngine {
        let mut engine = MinimapEngine::new(config);
        engine.set_layers(self.layers.clone());
        engine.set_selection(self.selection);
        engine.set_view(self.view);
        engine.set_physical_size(self.physical);
        engine
    }
}

/// Feed every event into `engine`, collecting the actions it emits.
///
/// With `apply` set, each proposed offset is written back into the engine's
/// view, the way a host that always accepts proposals would.
pub fn replay(engine: &mut MinimapEngine, events: &[TraceEvent], apply: bool) -> Vec<Step> {
    let mut steps = Vec::new();
    for (index, event) in events.iter().enumerate() {
        let actions = dispatch(engine, event);
        debug!(index, ?event, emitted = actions.len(), "replayed event");
        for action in actions {
            if apply {
                if let Action::ProposeOffset { offset } = action {
                    engine.set_view(ViewState { offset, ..engine.view() });
                }
            }
            steps.push(Step { event: index, action });
        }
    }
    steps
}

fn dispatch(engine: &mut MinimapEngine, event: &TraceEvent) -> Vec<Action> {
    match *event {
        TraceEvent::PointerDown { x, y, button } => engine.on_pointer_down(Point::new(x, y), button),
        TraceEvent::PointerMove { x, y } => engine.on_pointer_move(Point::new(x, y)),
        TraceEvent::PointerUp { x, y, button } => engine.on_pointer_up(Point::new(x, y), button),
        TraceEvent::PointerCancel => engine.on_pointer_cancel(),
        TraceEvent::Click { x, y } => engine.on_click(Point::new(x, y)),
        TraceEvent::Wheel { dx, dy } => engine.on_wheel(WheelDelta { dx, dy }),
        TraceEvent::Blur => engine.on_focus_lost(),
        TraceEvent::SetView { view } => {
            engine.set_view(view);
            Vec::new()
        }
        TraceEvent::Resize { width, height } => {
            engine.set_physical_size(PhysicalSize::new(width, height));
            Vec::new()
        }
        TraceEvent::RestoreZoom { value } => {
            let applied = engine.restore_zoom(value);
            debug!(value, applied, "restore zoom");
            Vec::new()
        }
    }
}
