//! Layer model: the read-only summaries of canvas content the minimap displays.
//!
//! The host's layer store owns the real layers; the engine only sees
//! `LayerSummary` values, borrowed for the duration of a query. This module
//! also fixes the order in which summaries reach the renderer: groups form a
//! backdrop, everything else draws on top, and the selected layer is last.

#[cfg(test)]
#[path = "layer_test.rs"]
mod layer_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Rect;

/// Unique identifier for a canvas layer.
pub type LayerId = Uuid;

/// The kind of content a layer holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Image,
    Video,
    Audio,
    Note,
    /// Container drawn as a backdrop beneath its children.
    Group,
    Drawing,
    Text,
}

impl LayerKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 7] =
        [Self::Image, Self::Video, Self::Audio, Self::Note, Self::Group, Self::Drawing, Self::Text];

    #[must_use]
    pub fn is_group(self) -> bool {
        matches!(self, Self::Group)
    }
}

/// What the minimap knows about one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSummary {
    pub id: LayerId,
    #[serde(rename = "type", alias = "kind")]
    pub kind: LayerKind,
    /// Left edge in world coordinates.
    pub x: f64,
    /// Top edge in world coordinates.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, alias = "isSelected")]
    pub is_selected: bool,
    #[serde(default, alias = "isLoading")]
    pub is_loading: bool,
}

impl LayerSummary {
    /// World-space bounding box.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Order layers for drawing: groups first, then other layers, then the
/// selected layer regardless of kind. Relative order is otherwise preserved.
#[must_use]
pub fn render_order(layers: &[LayerSummary], selected: Option<LayerId>) -> Vec<&LayerSummary> {
    let is_selected = |layer: &LayerSummary| selected == Some(layer.id);

    let mut ordered: Vec<&LayerSummary> = Vec::with_capacity(layers.len());
    ordered.extend(layers.iter().filter(|l| l.kind.is_group() && !is_selected(l)));
    ordered.extend(layers.iter().filter(|l| !l.kind.is_group() && !is_selected(l)));
    ordered.extend(layers.iter().filter(|l| is_selected(l)));
    ordered
}
