#![allow(clippy::float_cmp)]

use super::*;

fn wheel(dy: f64) -> WheelDelta {
    WheelDelta { dx: 0.0, dy }
}

#[test]
fn default_is_one() {
    assert_eq!(MinimapZoom::default().value(), 1.0);
}

#[test]
fn new_clamps() {
    assert_eq!(MinimapZoom::new(10.0).value(), MAX_ZOOM);
    assert_eq!(MinimapZoom::new(0.01).value(), MIN_ZOOM);
    assert_eq!(MinimapZoom::new(f64::NAN).value(), DEFAULT_ZOOM);
}

#[test]
fn wheel_up_zooms_in() {
    let mut zoom = MinimapZoom::default();
    assert!(zoom.apply_wheel(wheel(-100.0)));
    assert!((zoom.value() - 1.2).abs() < 1e-12);
}

#[test]
fn wheel_down_zooms_out() {
    let mut zoom = MinimapZoom::default();
    assert!(zoom.apply_wheel(wheel(100.0)));
    assert!((zoom.value() - 0.8).abs() < 1e-12);
}

#[test]
fn horizontal_wheel_is_ignored() {
    let mut zoom = MinimapZoom::default();
    assert!(!zoom.apply_wheel(WheelDelta { dx: 300.0, dy: 0.0 }));
    assert_eq!(zoom.value(), 1.0);
}

#[test]
fn repeated_zoom_in_stops_at_max() {
    let mut zoom = MinimapZoom::default();
    for _ in 0..100 {
        zoom.apply_wheel(wheel(-250.0));
        assert!(zoom.value() <= MAX_ZOOM);
    }
    assert_eq!(zoom.value(), MAX_ZOOM);
    assert!(!zoom.apply_wheel(wheel(-250.0)));
}

#[test]
fn repeated_zoom_out_stops_at_min() {
    let mut zoom = MinimapZoom::default();
    for _ in 0..100 {
        zoom.apply_wheel(wheel(250.0));
        assert!(zoom.value() >= MIN_ZOOM);
    }
    assert_eq!(zoom.value(), MIN_ZOOM);
    assert!(!zoom.apply_wheel(wheel(250.0)));
}

#[test]
fn overshooting_delta_clamps_in_one_step() {
    let mut zoom = MinimapZoom::default();
    zoom.apply_wheel(wheel(-1_000_000.0));
    assert_eq!(zoom.value(), MAX_ZOOM);
}

#[test]
fn non_finite_delta_is_ignored() {
    let mut zoom = MinimapZoom::new(2.0);
    assert!(!zoom.apply_wheel(wheel(f64::NAN)));
    assert!(!zoom.apply_wheel(wheel(f64::INFINITY)));
    assert_eq!(zoom.value(), 2.0);
}

#[test]
fn zoom_is_monotonic_with_wheel_sign() {
    let mut zoom = MinimapZoom::default();
    let mut last = zoom.value();
    for _ in 0..20 {
        zoom.apply_wheel(wheel(-37.0));
        assert!(zoom.value() >= last);
        last = zoom.value();
    }
    for _ in 0..40 {
        zoom.apply_wheel(wheel(53.0));
        assert!(zoom.value() <= last);
        last = zoom.value();
    }
}
