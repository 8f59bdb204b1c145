// Host-side tests for scroll-driven helpers (canvas fade, navbar, progress,
// parallax, reveal delays).

#![allow(dead_code)]
mod common;

use common::core::constants::*;
use common::core::scroll::*;

#[test]
fn canvas_opacity_bounds() {
    assert_eq!(hero_canvas_opacity(0.0), OPACITY_CEILING);
    assert_eq!(hero_canvas_opacity(520.0), OPACITY_FLOOR);
    assert_eq!(hero_canvas_opacity(5_000.0), OPACITY_FLOOR);
    // overscroll bounce reports negative offsets
    assert_eq!(hero_canvas_opacity(-40.0), OPACITY_CEILING);
    assert_eq!(hero_canvas_opacity(f64::NAN), OPACITY_CEILING);
}

#[test]
fn canvas_opacity_is_monotonic_over_fade_distance() {
    let mut prev = hero_canvas_opacity(0.0);
    for y in 1..=600 {
        let o = hero_canvas_opacity(y as f64);
        assert!(o <= prev + 1e-12, "opacity rose at y={}", y);
        assert!((OPACITY_FLOOR..=OPACITY_CEILING).contains(&o));
        prev = o;
    }
}

#[test]
fn canvas_opacity_midpoint() {
    let mid = hero_canvas_opacity(260.0);
    assert!((mid - 0.725).abs() < 1e-9);
}

#[test]
fn navbar_switches_after_eight_pixels() {
    assert!(!nav_is_scrolled(0.0));
    assert!(!nav_is_scrolled(8.0));
    assert!(nav_is_scrolled(8.5));
    assert!(nav_is_scrolled(400.0));
}

#[test]
fn progress_percent_is_clamped() {
    assert_eq!(scroll_progress_percent(0.0, 2000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress_percent(500.0, 2000.0, 1000.0), 50.0);
    assert_eq!(scroll_progress_percent(1000.0, 2000.0, 1000.0), 100.0);
    assert_eq!(scroll_progress_percent(1200.0, 2000.0, 1000.0), 100.0);
    assert_eq!(scroll_progress_percent(-10.0, 2000.0, 1000.0), 0.0);
}

#[test]
fn progress_on_non_scrolling_page_is_zero() {
    assert_eq!(scroll_progress_percent(0.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_progress_percent(10.0, 700.0, 800.0), 0.0);
}

#[test]
fn parallax_strength_parsing() {
    assert_eq!(parallax_strength(Some("0.2")), 0.2);
    assert_eq!(parallax_strength(Some(" 0.15 ")), 0.15);
    assert_eq!(parallax_strength(Some("-0.1")), -0.1);
    assert_eq!(parallax_strength(None), PARALLAX_DEFAULT_STRENGTH);
    assert_eq!(parallax_strength(Some("")), PARALLAX_DEFAULT_STRENGTH);
    assert_eq!(parallax_strength(Some("0")), PARALLAX_DEFAULT_STRENGTH);
    assert_eq!(parallax_strength(Some("lots")), PARALLAX_DEFAULT_STRENGTH);
}

#[test]
fn parallax_is_zero_at_viewport_center_and_opposes_offset() {
    assert_eq!(parallax_translate(400.0, 800.0, 1.0), 0.0);
    // element below center drifts up, above center drifts down
    assert!(parallax_translate(800.0, 800.0, 1.0) < 0.0);
    assert!(parallax_translate(0.0, 800.0, 1.0) > 0.0);
    // rel = 0.5 -> -0.5 * 24 * 0.08
    let t = parallax_translate(800.0, 800.0, 0.08);
    assert!((t + 0.96).abs() < 1e-12);
}

#[test]
fn parallax_falls_back_to_default_viewport() {
    assert_eq!(
        parallax_translate(400.0, 0.0, 1.0),
        parallax_translate(400.0, PARALLAX_FALLBACK_VIEWPORT, 1.0)
    );
}

#[test]
fn parallax_transform_uses_two_decimals() {
    assert_eq!(parallax_transform(-0.96), "translate3d(0, -0.96px, 0)");
    assert_eq!(parallax_transform(1.0 / 3.0), "translate3d(0, 0.33px, 0)");
}

#[test]
fn reveal_delay_parsing() {
    assert_eq!(reveal_transition_delay(Some("120")), Some("120ms".to_string()));
    assert_eq!(reveal_transition_delay(Some("80.5")), Some("80.5ms".to_string()));
    assert_eq!(reveal_transition_delay(Some("")), None);
    assert_eq!(reveal_transition_delay(Some("soon")), None);
    assert_eq!(reveal_transition_delay(None), None);
}
