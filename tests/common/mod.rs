// Shared host-side harness. The main crate is wasm-only, so the pure-Rust
// modules are included directly, along with recording stand-ins for the
// canvas surface and the frame scheduler.

#![allow(dead_code)]

pub mod core {
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod contact {
        include!("../../src/core/contact.rs");
    }
    pub mod gate {
        include!("../../src/core/gate.rs");
    }
    pub mod hero {
        include!("../../src/core/hero.rs");
    }
    pub mod layout {
        include!("../../src/core/layout.rs");
    }
    pub mod orbs {
        include!("../../src/core/orbs.rs");
    }
    pub mod pointer {
        include!("../../src/core/pointer.rs");
    }
    pub mod projects {
        include!("../../src/core/projects.rs");
    }
    pub mod scroll {
        include!("../../src/core/scroll.rs");
    }
    pub mod surface {
        include!("../../src/core/surface.rs");
    }
    pub mod theme {
        include!("../../src/core/theme.rs");
    }
}

use self::core::orbs::Hsla;
use self::core::surface::{FrameHandle, FrameScheduler, OrbSurface};

#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    ResizeBacking(u32, u32),
    CssSize(f64, f64),
    Scale(f64),
    Clear(f64, f64),
    Orb { cx: f64, cy: f64, radius: f64, color: Hsla },
    Opacity(f64),
}

#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn orb_ops(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Orb { .. }))
            .count()
    }

    pub fn clears(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Clear(..)))
            .count()
    }
}

impl OrbSurface for RecordingSurface {
    fn resize_backing(&mut self, width_px: u32, height_px: u32) {
        self.ops.push(SurfaceOp::ResizeBacking(width_px, height_px));
    }

    fn set_css_size(&mut self, width: f64, height: f64) {
        self.ops.push(SurfaceOp::CssSize(width, height));
    }

    fn set_scale(&mut self, ratio: f64) {
        self.ops.push(SurfaceOp::Scale(ratio));
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(SurfaceOp::Clear(width, height));
    }

    fn fill_radial_orb(&mut self, cx: f64, cy: f64, radius: f64, color: &Hsla) {
        self.ops.push(SurfaceOp::Orb {
            cx,
            cy,
            radius,
            color: *color,
        });
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.ops.push(SurfaceOp::Opacity(opacity));
    }
}

/// Hands out increasing ids and tracks which ones are still outstanding.
#[derive(Default, Debug)]
pub struct FakeScheduler {
    pub next_id: i32,
    pub pending: Vec<FrameHandle>,
    pub requested: usize,
    pub cancelled: Vec<FrameHandle>,
    pub refuse: bool,
}

impl FakeScheduler {
    /// Simulate the host firing the oldest pending callback.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl FrameScheduler for FakeScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}
