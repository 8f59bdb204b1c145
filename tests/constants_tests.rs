// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn orb_ranges_are_well_formed() {
    assert!(ORB_COUNT > 0);
    assert!(ORB_SPAWN_MIN < ORB_SPAWN_MAX);
    assert!(ORB_RADIUS_MIN > 0.0 && ORB_RADIUS_MIN < ORB_RADIUS_MAX);
    assert!(ORB_MAX_VX > 0.0 && ORB_MAX_VY > 0.0);

    // Spawn band must sit inside the reflective band
    assert!(ORB_BAND_MIN < ORB_SPAWN_MIN);
    assert!(ORB_SPAWN_MAX < ORB_BAND_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn palette_is_translucent_hsla() {
    for [h, s, l, a] in ORB_PALETTE {
        assert!((0.0..360.0).contains(&h));
        assert!((0.0..=100.0).contains(&s));
        assert!((0.0..=100.0).contains(&l));
        // glow, not paint
        assert!(a > 0.0 && a <= 0.1);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn canvas_and_opacity_limits() {
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(MIN_CANVAS_WIDTH > 0.0 && MIN_CANVAS_HEIGHT > 0.0);
    assert!(OPACITY_FLOOR < OPACITY_CEILING);
    assert!(OPACITY_CEILING <= 1.0);
    assert!(OPACITY_FADE_DISTANCE > 0.0);
    assert!(HERO_VISIBILITY_THRESHOLD > 0.0 && HERO_VISIBILITY_THRESHOLD < 1.0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn micro_interaction_tuning() {
    assert!(MAGNET_MAX_OFFSET > 0.0);
    assert!(MAGNET_DIVISOR > 0.0);
    assert!(MAGNET_GLOW_GAIN >= 1.0);
    assert!(PARALLAX_DEFAULT_STRENGTH > 0.0);
    assert!(PARALLAX_FALLBACK_VIEWPORT > 0.0);
    assert!(TRANSITION_MS > 0);
}

#[test]
fn markup_hooks_are_consistent() {
    assert!(THEME_TRANSITION_CSS.contains(THEME_TRANSITION_CLASS));
    assert!(MAGNET_RELEASE_TRANSITION.contains(&format!("{}ms", TRANSITION_MS)));
    assert!(THEME_TRANSITION_CSS.contains(&format!("{}ms", TRANSITION_MS)));
    for id in [HERO_ID, HERO_CANVAS_ID, MODAL_ID, CONTACT_FORM_ID, THEME_TOGGLE_ID] {
        assert!(!id.is_empty() && !id.starts_with('#'));
    }
    assert!(PARALLAX_SELECTOR.contains(PARALLAX_ATTR));
}
