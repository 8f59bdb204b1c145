use crate::core::{FrameHandle, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` behind the `FrameScheduler` seam. The callback slot
/// is filled once after construction and re-armed from inside itself.
#[derive(Clone, Default)]
pub struct RafScheduler {
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_callback(&self, tick: impl FnMut() + 'static) {
        *self.callback.borrow_mut() = Some(Closure::wrap(Box::new(tick) as Box<dyn FnMut()>));
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let window = web::window()?;
        let slot = self.callback.borrow();
        let tick = slot.as_ref()?;
        match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle.0);
        }
    }
}

/// One-shot frame coalescing: any number of `request` calls before the next
/// refresh collapse into a single callback.
pub struct FrameThrottle {
    ticking: Rc<RefCell<bool>>,
    scheduler: RefCell<RafScheduler>,
}

impl FrameThrottle {
    pub fn new(mut update: impl FnMut() + 'static) -> Rc<Self> {
        let ticking = Rc::new(RefCell::new(false));
        let scheduler = RafScheduler::new();
        let ticking_tick = ticking.clone();
        scheduler.set_callback(move || {
            *ticking_tick.borrow_mut() = false;
            update();
        });
        Rc::new(Self {
            ticking,
            scheduler: RefCell::new(scheduler),
        })
    }

    pub fn request(&self) {
        if *self.ticking.borrow() {
            return;
        }
        if self.scheduler.borrow_mut().request_frame().is_some() {
            *self.ticking.borrow_mut() = true;
        }
    }
}
