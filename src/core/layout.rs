use super::constants::{MAX_PIXEL_RATIO, MIN_CANVAS_HEIGHT, MIN_CANVAS_WIDTH};
use super::surface::OrbSurface;
use glam::Vec2;

/// Device pixel ratio as used for the backing store: missing or bogus values
/// fall back to 1, and dense displays are capped.
#[inline]
pub fn effective_pixel_ratio(device_ratio: f64) -> f64 {
    if device_ratio.is_finite() && device_ratio > 0.0 {
        device_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Canvas geometry derived from the container's rendered box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasLayout {
    pub css_width: f64,
    pub css_height: f64,
    pub ratio: f64,
    pub backing_width: u32,
    pub backing_height: u32,
}

impl CanvasLayout {
    pub fn compute(rendered_width: f64, rendered_height: f64, device_ratio: f64) -> Self {
        let ratio = effective_pixel_ratio(device_ratio);
        // f64::max picks the floor for NaN as well
        let css_width = rendered_width.max(MIN_CANVAS_WIDTH);
        let css_height = rendered_height.max(MIN_CANVAS_HEIGHT);
        Self {
            css_width,
            css_height,
            ratio,
            backing_width: (css_width * ratio).floor() as u32,
            backing_height: (css_height * ratio).floor() as u32,
        }
    }

    /// Push backing size, CSS size and the ratio transform to the surface.
    pub fn apply<S: OrbSurface + ?Sized>(&self, surface: &mut S) {
        surface.resize_backing(self.backing_width, self.backing_height);
        surface.set_css_size(self.css_width, self.css_height);
        surface.set_scale(self.ratio);
    }

    #[inline]
    pub fn to_css_px(&self, normalized: Vec2) -> (f64, f64) {
        (
            normalized.x as f64 * self.css_width,
            normalized.y as f64 * self.css_height,
        )
    }
}
