#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::layer::LayerKind;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn rect_approx_eq(a: Rect, b: Rect) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.width, b.width) && approx_eq(a.height, b.height)
}

fn layer_at(x: f64, y: f64, w: f64, h: f64) -> LayerSummary {
    LayerSummary {
        id: Uuid::new_v4(),
        kind: LayerKind::Image,
        x,
        y,
        width: w,
        height: h,
        is_selected: false,
        is_loading: false,
    }
}

// =============================================================
// Empty layer set
// =============================================================

#[test]
fn empty_layers_pad_viewport_by_larger_side() {
    let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
    let bounds = content_bounds(&[], viewport);
    // padding = 0.1 * 800 = 80 on every side
    assert!(rect_approx_eq(bounds, Rect::new(-80.0, -80.0, 960.0, 760.0)));
}

#[test]
fn empty_layers_tall_viewport_uses_height() {
    let viewport = Rect::new(100.0, 100.0, 200.0, 1000.0);
    let bounds = content_bounds(&[], viewport);
    assert!(rect_approx_eq(bounds, Rect::new(0.0, 0.0, 400.0, 1200.0)));
}

// =============================================================
// Union
// =============================================================

#[test]
fn layers_inside_viewport_do_not_grow_union() {
    let viewport = Rect::new(0.0, 0.0, 1000.0, 500.0);
    let layers = vec![layer_at(10.0, 10.0, 50.0, 50.0), layer_at(500.0, 200.0, 100.0, 100.0)];
    let bounds = content_bounds(&layers, viewport);
    assert!(rect_approx_eq(bounds, viewport.inflate(100.0)));
}

#[test]
fn far_layer_extends_union() {
    let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
    let layers = vec![layer_at(900.0, 0.0, 100.0, 100.0)];
    let bounds = content_bounds(&layers, viewport);
    // union = [0, 1000] x [0, 100], padding = 100
    assert!(rect_approx_eq(bounds, Rect::new(-100.0, -100.0, 1200.0, 300.0)));
}

#[test]
fn viewport_far_from_content_is_included() {
    let viewport = Rect::new(-5000.0, -5000.0, 400.0, 300.0);
    let layers = vec![layer_at(0.0, 0.0, 100.0, 100.0)];
    let bounds = content_bounds(&layers, viewport);
    assert!(bounds.contains_rect(&viewport));
    assert!(bounds.contains_rect(&layers[0].bounds()));
}

#[test]
fn negative_coordinates_are_handled() {
    let viewport = Rect::new(-50.0, -50.0, 10.0, 10.0);
    let layers = vec![layer_at(-200.0, -100.0, 20.0, 20.0)];
    let bounds = content_bounds(&layers, viewport);
    // union = [-200, -40] x [-100, -40] => 160 x 60, padding 16
    assert!(rect_approx_eq(bounds, Rect::new(-216.0, -116.0, 192.0, 92.0)));
}

#[test]
fn padding_tracks_larger_union_dimension() {
    let viewport = Rect::new(0.0, 0.0, 10.0, 10.0);
    let layers = vec![layer_at(0.0, 0.0, 10.0, 2000.0)];
    let bounds = content_bounds(&layers, viewport);
    assert!(approx_eq(bounds.x, -200.0));
    assert!(approx_eq(bounds.width, 410.0));
    assert!(approx_eq(bounds.height, 2400.0));
}

// =============================================================
// Degenerate
// =============================================================

#[test]
fn zero_size_union_gets_zero_padding() {
    let viewport = Rect::new(5.0, 5.0, 0.0, 0.0);
    let layers = vec![layer_at(5.0, 5.0, 0.0, 0.0)];
    let bounds = content_bounds(&layers, viewport);
    assert_eq!(bounds, Rect::new(5.0, 5.0, 0.0, 0.0));
}

#[test]
fn recompute_reflects_new_inputs() {
    let mut layers = vec![layer_at(0.0, 0.0, 10.0, 10.0)];
    let viewport = Rect::new(0.0, 0.0, 10.0, 10.0);
    let before = content_bounds(&layers, viewport);
    layers.push(layer_at(100.0, 100.0, 10.0, 10.0));
    let after = content_bounds(&layers, viewport);
    assert!(after.width > before.width);
    assert!(after.contains_rect(&layers[1].bounds()));
}
