// Narrow host seams for the hero animation. The browser side implements these
// over `requestAnimationFrame` and a 2D canvas context; tests use recorders.

use super::orbs::Hsla;

/// Opaque id returned by the host's per-refresh scheduling primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

pub trait FrameScheduler {
    /// Ask for one callback on the next display refresh.
    /// `None` means the host refused (no window, API missing).
    fn request_frame(&mut self) -> Option<FrameHandle>;

    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Drawing surface for the orb field. All coordinates are CSS pixels once
/// `set_scale` has been applied.
pub trait OrbSurface {
    fn resize_backing(&mut self, width_px: u32, height_px: u32);
    fn set_css_size(&mut self, width: f64, height: f64);
    fn set_scale(&mut self, ratio: f64);
    fn clear(&mut self, width: f64, height: f64);
    /// Radial gradient from `color` at the center to transparent at `radius`.
    fn fill_radial_orb(&mut self, cx: f64, cy: f64, radius: f64, color: &Hsla);
    fn set_opacity(&mut self, opacity: f64);
}
