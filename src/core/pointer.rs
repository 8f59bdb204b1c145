use super::constants::{MAGNET_DIVISOR, MAGNET_GLOW_GAIN, MAGNET_MAX_OFFSET};

/// Axis-aligned box in client coordinates, mirroring `DOMRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ClientRect {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Inclusive on every edge.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// Pull toward the pointer, clamped per axis.
pub fn magnet_offset(rect: &ClientRect, client_x: f64, client_y: f64) -> (f64, f64) {
    let (cx, cy) = rect.center();
    let pull = |d: f64| (d / MAGNET_DIVISOR).clamp(-MAGNET_MAX_OFFSET, MAGNET_MAX_OFFSET);
    (pull(client_x - cx), pull(client_y - cy))
}

#[inline]
pub fn glow_offset(offset: (f64, f64)) -> (f64, f64) {
    (offset.0 * MAGNET_GLOW_GAIN, offset.1 * MAGNET_GLOW_GAIN)
}

#[inline]
pub fn magnet_transform(offset: (f64, f64)) -> String {
    format!("translate3d({}px, {}px, 0)", offset.0, offset.1)
}

/// Pointer position as percentages of the card box, formatted for `--sx`/`--sy`.
pub fn spotlight_percent(rect: &ClientRect, client_x: f64, client_y: f64) -> Option<(String, String)> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let x = (client_x - rect.left) / rect.width * 100.0;
    let y = (client_y - rect.top) / rect.height * 100.0;
    Some((format!("{:.2}%", x), format!("{:.2}%", y)))
}
