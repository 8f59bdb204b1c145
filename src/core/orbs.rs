use super::constants::*;
use super::layout::CanvasLayout;
use super::surface::OrbSurface;
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

/// Hue (degrees), saturation and lightness (percent), alpha (0..1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    pub const fn from_array(c: [f32; 4]) -> Self {
        Self {
            h: c[0],
            s: c[1],
            l: c[2],
            a: c[3],
        }
    }

    /// CSS Color 4 space-separated form, e.g. `hsla(220 90% 60% / 0.1)`.
    pub fn css(&self) -> String {
        format!("hsla({} {}% {}% / {})", self.h, self.s, self.l, self.a)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Orb {
    /// Normalized position inside the canvas (0..1 per axis).
    pub pos: Vec2,
    /// Normalized delta applied once per frame.
    pub vel: Vec2,
    /// Radius in CSS pixels.
    pub radius: f32,
    pub color: Hsla,
}

impl Orb {
    /// Advance one frame, flipping the velocity on any axis that has left the
    /// soft band. The position is never clamped.
    #[inline]
    pub fn step(&mut self) {
        self.pos += self.vel;
        if self.pos.x < ORB_BAND_MIN || self.pos.x > ORB_BAND_MAX {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < ORB_BAND_MIN || self.pos.y > ORB_BAND_MAX {
            self.vel.y = -self.vel.y;
        }
    }
}

#[derive(Clone, Debug)]
pub struct HeroConfig {
    pub orb_count: usize,
    pub palette: Vec<Hsla>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            orb_count: ORB_COUNT,
            palette: ORB_PALETTE.iter().copied().map(Hsla::from_array).collect(),
        }
    }
}

pub type Orbs = SmallVec<[Orb; 8]>;

/// Fixed collection of orbs. Created once; only positions change afterwards.
#[derive(Clone, Debug)]
pub struct OrbField {
    orbs: Orbs,
}

impl OrbField {
    pub fn spawn<R: Rng + ?Sized>(config: &HeroConfig, rng: &mut R) -> Self {
        let fallback = Hsla::from_array(ORB_PALETTE[0]);
        let orbs = (0..config.orb_count)
            .map(|_| {
                let color = config.palette.choose(rng).copied().unwrap_or(fallback);
                Orb {
                    pos: Vec2::new(
                        rng.gen_range(ORB_SPAWN_MIN..=ORB_SPAWN_MAX),
                        rng.gen_range(ORB_SPAWN_MIN..=ORB_SPAWN_MAX),
                    ),
                    radius: rng.gen_range(ORB_RADIUS_MIN..=ORB_RADIUS_MAX),
                    vel: Vec2::new(
                        rng.gen_range(-ORB_MAX_VX..=ORB_MAX_VX),
                        rng.gen_range(-ORB_MAX_VY..=ORB_MAX_VY),
                    ),
                    color,
                }
            })
            .collect();
        Self { orbs }
    }

    pub fn from_orbs(orbs: impl IntoIterator<Item = Orb>) -> Self {
        Self {
            orbs: orbs.into_iter().collect(),
        }
    }

    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    pub fn len(&self) -> usize {
        self.orbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbs.is_empty()
    }

    /// Clear the surface, then step and paint every orb in collection order.
    pub fn render_frame<S: OrbSurface + ?Sized>(&mut self, layout: &CanvasLayout, surface: &mut S) {
        surface.clear(layout.css_width, layout.css_height);
        for orb in self.orbs.iter_mut() {
            orb.step();
            let (cx, cy) = layout.to_css_px(orb.pos);
            surface.fill_radial_orb(cx, cy, orb.radius as f64, &orb.color);
        }
    }
}
