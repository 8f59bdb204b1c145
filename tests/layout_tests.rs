// Host-side tests for canvas sizing against container box and pixel ratio.

#![allow(dead_code)]
mod common;

use common::core::constants::*;
use common::core::layout::*;
use common::{RecordingSurface, SurfaceOp};

#[test]
fn hd_container_at_ratio_two() {
    let layout = CanvasLayout::compute(1000.0, 600.0, 2.0);
    assert_eq!(layout.backing_width, 2000);
    assert_eq!(layout.backing_height, 1200);
    assert_eq!(layout.css_width, 1000.0);
    assert_eq!(layout.css_height, 600.0);
    assert_eq!(layout.ratio, 2.0);

    let mut surface = RecordingSurface::default();
    layout.apply(&mut surface);
    assert_eq!(
        surface.ops,
        vec![
            SurfaceOp::ResizeBacking(2000, 1200),
            SurfaceOp::CssSize(1000.0, 600.0),
            SurfaceOp::Scale(2.0),
        ]
    );
}

#[test]
fn pixel_ratio_is_capped_and_defaulted() {
    assert_eq!(effective_pixel_ratio(3.0), MAX_PIXEL_RATIO);
    assert_eq!(effective_pixel_ratio(1.5), 1.5);
    assert_eq!(effective_pixel_ratio(0.0), 1.0);
    assert_eq!(effective_pixel_ratio(-2.0), 1.0);
    assert_eq!(effective_pixel_ratio(f64::NAN), 1.0);
    assert_eq!(effective_pixel_ratio(f64::INFINITY), 1.0);

    let dense = CanvasLayout::compute(1000.0, 600.0, 3.0);
    assert_eq!((dense.backing_width, dense.backing_height), (2000, 1200));
}

#[test]
fn collapsed_container_uses_floor_dimensions() {
    let layout = CanvasLayout::compute(0.0, 0.0, 1.0);
    assert_eq!(layout.css_width, MIN_CANVAS_WIDTH);
    assert_eq!(layout.css_height, MIN_CANVAS_HEIGHT);
    assert_eq!((layout.backing_width, layout.backing_height), (320, 280));

    let nan = CanvasLayout::compute(f64::NAN, 100.0, 2.0);
    assert_eq!(nan.css_width, MIN_CANVAS_WIDTH);
    assert_eq!((nan.backing_width, nan.backing_height), (640, 560));
}

#[test]
fn backing_store_rounds_down() {
    let layout = CanvasLayout::compute(333.3, 401.7, 1.5);
    assert_eq!(layout.backing_width, 499);
    assert_eq!(layout.backing_height, 602);
}

#[test]
fn resizing_twice_with_same_inputs_is_idempotent() {
    let a = CanvasLayout::compute(1280.0, 720.0, 1.25);
    let b = CanvasLayout::compute(1280.0, 720.0, 1.25);
    assert_eq!(a, b);

    let mut first = RecordingSurface::default();
    let mut second = RecordingSurface::default();
    a.apply(&mut first);
    b.apply(&mut second);
    assert_eq!(first.ops, second.ops);
}

#[test]
fn normalized_positions_map_to_css_pixels() {
    let layout = CanvasLayout::compute(1000.0, 600.0, 2.0);
    assert_eq!(layout.to_css_px(glam::Vec2::new(0.5, 0.5)), (500.0, 300.0));
    assert_eq!(layout.to_css_px(glam::Vec2::ZERO), (0.0, 0.0));
}
