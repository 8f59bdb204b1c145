use super::constants::*;

/// Hero canvas opacity for a given vertical scroll offset: ceiling at the top,
/// linear fade to the floor over `OPACITY_FADE_DISTANCE`.
#[inline]
pub fn hero_canvas_opacity(scroll_y: f64) -> f64 {
    let y = if scroll_y.is_finite() { scroll_y } else { 0.0 };
    let t = (1.0 - y / OPACITY_FADE_DISTANCE).clamp(0.0, 1.0);
    OPACITY_FLOOR * (1.0 - t) + OPACITY_CEILING * t
}

#[inline]
pub fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_OFFSET
}

/// Reading progress in percent (0..=100). A page that cannot scroll reports 0.
pub fn scroll_progress_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    let p = if scrollable > 0.0 {
        scroll_top / scrollable * 100.0
    } else {
        0.0
    };
    p.clamp(0.0, 100.0)
}

/// Parses a `data-parallax` value; missing, zero or non-numeric gives the default.
pub fn parallax_strength(attr: Option<&str>) -> f64 {
    attr.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v != 0.0)
        .unwrap_or(PARALLAX_DEFAULT_STRENGTH)
}

/// Vertical offset (px) for an element whose center sits at `center_y` in a
/// viewport of height `viewport_h`.
pub fn parallax_translate(center_y: f64, viewport_h: f64, strength: f64) -> f64 {
    let vh = if viewport_h > 0.0 {
        viewport_h
    } else {
        PARALLAX_FALLBACK_VIEWPORT
    };
    let rel = (center_y - vh / 2.0) / vh;
    -rel * PARALLAX_RANGE_PX * strength
}

#[inline]
pub fn parallax_transform(translate_y: f64) -> String {
    format!("translate3d(0, {:.2}px, 0)", translate_y)
}

/// `data-reveal-delay` (ms) as an inline `transition-delay` value.
pub fn reveal_transition_delay(attr: Option<&str>) -> Option<String> {
    let raw = attr?.trim();
    if raw.is_empty() {
        return None;
    }
    let ms = raw.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(format!("{}ms", ms))
}
