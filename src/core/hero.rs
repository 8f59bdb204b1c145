use super::gate::{GateTransition, VisibilityGate};
use super::layout::CanvasLayout;
use super::orbs::{HeroConfig, OrbField};
use super::scroll::hero_canvas_opacity;
use super::surface::{FrameScheduler, OrbSurface};
use rand::Rng;

/// Rendered box of the hero container plus the display's pixel density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerBox {
    pub width: f64,
    pub height: f64,
    pub device_ratio: f64,
}

/// The hero orb animation: particle state, canvas layout and visibility gate.
pub struct HeroScene {
    field: OrbField,
    layout: CanvasLayout,
    gate: VisibilityGate,
}

impl HeroScene {
    /// Returns `None` when reduced motion is requested; in that case the
    /// surface is never touched.
    pub fn boot<S, R>(
        config: &HeroConfig,
        reduced_motion: bool,
        container: ContainerBox,
        surface: &mut S,
        rng: &mut R,
    ) -> Option<Self>
    where
        S: OrbSurface + ?Sized,
        R: Rng + ?Sized,
    {
        if reduced_motion {
            return None;
        }
        let mut scene = Self::with_field(OrbField::spawn(config, rng), container);
        scene.layout.apply(surface);
        Some(scene)
    }

    /// Build around an existing field without touching any surface.
    pub fn with_field(field: OrbField, container: ContainerBox) -> Self {
        Self {
            field,
            layout: CanvasLayout::compute(container.width, container.height, container.device_ratio),
            gate: VisibilityGate::new(),
        }
    }

    pub fn field(&self) -> &OrbField {
        &self.field
    }

    pub fn layout(&self) -> &CanvasLayout {
        &self.layout
    }

    pub fn gate(&self) -> &VisibilityGate {
        &self.gate
    }

    pub fn resize<S: OrbSurface + ?Sized>(
        &mut self,
        container: ContainerBox,
        surface: &mut S,
    ) -> CanvasLayout {
        self.layout = CanvasLayout::compute(container.width, container.height, container.device_ratio);
        self.layout.apply(surface);
        self.layout
    }

    /// Feed an intersection change. Starting draws one frame right away and
    /// schedules the next; stopping cancels whatever is pending.
    pub fn set_visible<F, S>(&mut self, visible: bool, scheduler: &mut F, surface: &mut S) -> GateTransition
    where
        F: FrameScheduler + ?Sized,
        S: OrbSurface + ?Sized,
    {
        let transition = self.gate.set_visible(visible, scheduler);
        if transition == GateTransition::Started {
            self.field.render_frame(&self.layout, surface);
            self.gate.schedule_next(scheduler);
        }
        transition
    }

    /// Body of the per-refresh callback. Returns whether a frame was drawn.
    pub fn on_frame<F, S>(&mut self, scheduler: &mut F, surface: &mut S) -> bool
    where
        F: FrameScheduler + ?Sized,
        S: OrbSurface + ?Sized,
    {
        if !self.gate.begin_frame() {
            return false;
        }
        self.field.render_frame(&self.layout, surface);
        self.gate.schedule_next(scheduler);
        true
    }

    /// Scroll-linked fade; independent of the gate.
    pub fn apply_scroll<S: OrbSurface + ?Sized>(&self, scroll_y: f64, surface: &mut S) -> f64 {
        let opacity = hero_canvas_opacity(scroll_y);
        surface.set_opacity(opacity);
        opacity
    }
}
