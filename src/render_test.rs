#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::bounds::content_bounds;
use crate::consts::{MINIMAP_HEIGHT, MINIMAP_WIDTH};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn make_layer(kind: LayerKind, x: f64, y: f64, w: f64, h: f64) -> LayerSummary {
    LayerSummary { id: Uuid::new_v4(), kind, x, y, width: w, height: h, is_selected: false, is_loading: false }
}

fn scene_for(layers: &[LayerSummary], selected: Option<LayerId>, viewport: Rect) -> Scene {
    let bounds = content_bounds(layers, viewport);
    let transform = MinimapTransform::fit(bounds, 1.0, MINIMAP_WIDTH, MINIMAP_HEIGHT);
    let palette = Palette::default();
    build_scene(SceneInputs {
        layers,
        selected,
        transform: &transform,
        viewport,
        palette: &palette,
        width: MINIMAP_WIDTH,
        height: MINIMAP_HEIGHT,
        zoom: 1.0,
    })
}

// =============================================================
// Empty
// =============================================================

#[test]
fn empty_layers_still_have_marker() {
    let scene = scene_for(&[], None, Rect::new(0.0, 0.0, 800.0, 600.0));
    assert!(scene.shapes.is_empty());
    assert!(scene.viewport_marker.width > 0.0);
    assert!(scene.viewport_marker.height > 0.0);
    assert_eq!(scene.width, MINIMAP_WIDTH);
    assert_eq!(scene.height, MINIMAP_HEIGHT);
}

#[test]
fn empty_layers_marker_is_centered() {
    let scene = scene_for(&[], None, Rect::new(-300.0, 40.0, 800.0, 600.0));
    let c = scene.viewport_marker.center();
    assert!(approx_eq(c.x, MINIMAP_WIDTH / 2.0));
    assert!(approx_eq(c.y, MINIMAP_HEIGHT / 2.0));
}

// =============================================================
// Shapes
// =============================================================

#[test]
fn shapes_follow_render_order() {
    let note = make_layer(LayerKind::Note, 0.0, 0.0, 100.0, 100.0);
    let group = make_layer(LayerKind::Group, 0.0, 0.0, 400.0, 400.0);
    let image = make_layer(LayerKind::Image, 200.0, 200.0, 50.0, 50.0);
    let layers = vec![note.clone(), group.clone(), image.clone()];

    let scene = scene_for(&layers, Some(note.id), Rect::new(0.0, 0.0, 800.0, 600.0));
    let order: Vec<LayerId> = scene.shapes.iter().map(|s| s.id).collect();
    assert_eq!(order, vec![group.id, image.id, note.id]);
}

#[test]
fn tiny_layer_is_floored_to_min_size() {
    let layers = vec![make_layer(LayerKind::Text, 10.0, 10.0, 0.0, 0.5)];
    let scene = scene_for(&layers, None, Rect::new(0.0, 0.0, 10000.0, 7500.0));
    assert_eq!(scene.shapes[0].rect.width, MIN_SHAPE_SIZE);
    assert_eq!(scene.shapes[0].rect.height, MIN_SHAPE_SIZE);
}

#[test]
fn large_layer_keeps_projected_size() {
    let layers = vec![make_layer(LayerKind::Image, 0.0, 0.0, 1000.0, 500.0)];
    let viewport = Rect::new(0.0, 0.0, 1000.0, 500.0);
    let scene = scene_for(&layers, None, viewport);
    // bounds = 1200 x 700 => scale = min(200/1200, 150/700)
    let scale = (200.0_f64 / 1200.0).min(150.0 / 700.0);
    assert!(approx_eq(scene.shapes[0].rect.width, 1000.0 * scale));
    assert!(approx_eq(scene.shapes[0].rect.height, 500.0 * scale));
}

#[test]
fn flags_are_passed_through() {
    let mut layer = make_layer(LayerKind::Video, 0.0, 0.0, 100.0, 100.0);
    layer.is_loading = true;
    layer.is_selected = true;
    let scene = scene_for(std::slice::from_ref(&layer), None, Rect::new(0.0, 0.0, 800.0, 600.0));
    assert!(scene.shapes[0].is_loading);
    assert!(scene.shapes[0].is_selected);
    assert_eq!(scene.shapes[0].kind, LayerKind::Video);
}

#[test]
fn fill_comes_from_palette() {
    let layers = vec![
        make_layer(LayerKind::Image, 0.0, 0.0, 10.0, 10.0),
        make_layer(LayerKind::Drawing, 0.0, 0.0, 10.0, 10.0),
    ];
    let scene = scene_for(&layers, None, Rect::new(0.0, 0.0, 800.0, 600.0));
    let palette = Palette::default();
    assert_eq!(scene.shapes[0].fill.as_deref(), palette.fill(LayerKind::Image));
    assert!(scene.shapes[1].fill.is_none());
}

#[test]
fn every_shape_lies_inside_display_at_unit_zoom() {
    let layers = vec![
        make_layer(LayerKind::Image, -500.0, -200.0, 300.0, 300.0),
        make_layer(LayerKind::Note, 2000.0, 900.0, 100.0, 40.0),
    ];
    let scene = scene_for(&layers, None, Rect::new(0.0, 0.0, 800.0, 600.0));
    let display = Rect::new(0.0, 0.0, MINIMAP_WIDTH, MINIMAP_HEIGHT);
    for shape in &scene.shapes {
        assert!(display.inflate(EPSILON).contains_rect(&shape.rect), "{shape:?}");
    }
    assert!(display.inflate(EPSILON).contains_rect(&scene.viewport_marker));
}

#[test]
fn selection_id_marks_shape_selected() {
    let layer = make_layer(LayerKind::Audio, 0.0, 0.0, 100.0, 100.0);
    let other = make_layer(LayerKind::Audio, 200.0, 0.0, 100.0, 100.0);
    let layers = vec![layer.clone(), other];
    let scene = scene_for(&layers, Some(layer.id), Rect::new(0.0, 0.0, 800.0, 600.0));
    let last = scene.shapes.last().unwrap();
    assert_eq!(last.id, layer.id);
    assert!(last.is_selected);
    assert!(!scene.shapes[0].is_selected);
}
