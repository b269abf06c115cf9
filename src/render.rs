//! Scene building: everything the painter needs for one frame.
//!
//! This module never paints. It turns the layer summaries and the current
//! transform into minimap-space rectangles in draw order, plus the viewport
//! marker. Colors come from the configured palette where one is set; loading
//! and selection styling are left to the painter, which receives the flags.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::camera::Rect;
use crate::config::Palette;
use crate::consts::MIN_SHAPE_SIZE;
use crate::hit;
use crate::layer::{LayerId, LayerKind, LayerSummary, render_order};
use crate::transform::MinimapTransform;

/// One layer as it appears on the minimap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerShape {
    pub id: LayerId,
    pub kind: LayerKind,
    /// Minimap-space rectangle, each side at least [`MIN_SHAPE_SIZE`].
    pub rect: Rect,
    pub is_selected: bool,
    pub is_loading: bool,
    /// Palette fill, or `None` to let the painter choose.
    pub fill: Option<String>,
}

/// A complete minimap frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    /// Shapes in draw order (first is bottom-most).
    pub shapes: Vec<LayerShape>,
    pub viewport_marker: Rect,
    pub zoom: f64,
}

/// Everything `build_scene` reads for one frame.
#[derive(Debug, Clone, Copy)]
pub struct SceneInputs<'a> {
    pub layers: &'a [LayerSummary],
    pub selected: Option<LayerId>,
    pub transform: &'a MinimapTransform,
    /// World-space rectangle visible on the main canvas.
    pub viewport: Rect,
    pub palette: &'a Palette,
    pub width: f64,
    pub height: f64,
    pub zoom: f64,
}

/// Project every layer and the viewport into minimap space.
#[must_use]
pub fn build_scene(inputs: SceneInputs<'_>) -> Scene {
    let shapes = render_order(inputs.layers, inputs.selected)
        .into_iter()
        .map(|layer| LayerShape {
            id: layer.id,
            kind: layer.kind,
            rect: inputs.transform.rect_to_minimap(layer.bounds()).with_min_size(MIN_SHAPE_SIZE),
            is_selected: layer.is_selected || inputs.selected == Some(layer.id),
            is_loading: layer.is_loading,
            fill: inputs.palette.fill(layer.kind).map(str::to_string),
        })
        .collect();

    Scene {
        width: inputs.width,
        height: inputs.height,
        shapes,
        viewport_marker: hit::marker_rect(inputs.transform, inputs.viewport),
        zoom: inputs.zoom,
    }
}
