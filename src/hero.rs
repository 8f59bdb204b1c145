use crate::constants::{HERO_CANVAS_ID, HERO_ID};
use crate::core::{
    ContainerBox, HeroConfig, HeroScene, Hsla, OrbSurface, HERO_VISIBILITY_THRESHOLD,
};
use crate::dom;
use crate::frame::RafScheduler;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const TRANSPARENT: &str = "rgba(0,0,0,0)";

/// `#heroCanvas` and its 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn acquire(canvas: web::HtmlCanvasElement) -> Option<Self> {
        let opts = js_sys::Object::new();
        _ = js_sys::Reflect::set(&opts, &JsValue::from_str("alpha"), &JsValue::TRUE);
        let ctx = canvas
            .get_context_with_context_options("2d", &opts)
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }
}

impl OrbSurface for CanvasSurface {
    fn resize_backing(&mut self, width_px: u32, height_px: u32) {
        self.canvas.set_width(width_px);
        self.canvas.set_height(height_px);
    }

    fn set_css_size(&mut self, width: f64, height: f64) {
        dom::set_style(&self.canvas, "width", &format!("{}px", width));
        dom::set_style(&self.canvas, "height", &format!("{}px", height));
    }

    fn set_scale(&mut self, ratio: f64) {
        _ = self.ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_radial_orb(&mut self, cx: f64, cy: f64, radius: f64, color: &Hsla) {
        let gradient = match self.ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, radius) {
            Ok(g) => g,
            Err(_) => return,
        };
        _ = gradient.add_color_stop(0.0, &color.css());
        _ = gradient.add_color_stop(1.0, TRANSPARENT);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        _ = self.ctx.arc(cx, cy, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn set_opacity(&mut self, opacity: f64) {
        dom::set_style(&self.canvas, "opacity", &opacity.to_string());
    }
}

struct HeroRuntime {
    scene: HeroScene,
    surface: CanvasSurface,
    scheduler: RafScheduler,
}

fn container_box(window: &web::Window, container: &web::Element) -> ContainerBox {
    let rect = container.get_bounding_client_rect();
    ContainerBox {
        width: rect.width(),
        height: rect.height(),
        device_ratio: window.device_pixel_ratio(),
    }
}

/// Start the hero orb animation. Every missing piece (reduced motion, no
/// canvas, no 2D context, no observer) leaves the page untouched.
pub fn init(window: &web::Window, document: &web::Document, reduced_motion: bool) {
    if reduced_motion {
        log::info!("[hero] reduced motion requested; orbs disabled");
        return;
    }
    let Some(canvas) = dom::element_as::<web::HtmlCanvasElement>(document, HERO_CANVAS_ID) else {
        return;
    };
    let Some(mut surface) = CanvasSurface::acquire(canvas) else {
        log::warn!("[hero] 2d context unavailable; orbs disabled");
        return;
    };
    let container: web::Element = match document.get_element_by_id(HERO_ID) {
        Some(el) => el,
        None => match document.body() {
            Some(body) => body.into(),
            None => return,
        },
    };

    let mut rng = StdRng::from_entropy();
    let Some(scene) = HeroScene::boot(
        &HeroConfig::default(),
        false,
        container_box(window, &container),
        &mut surface,
        &mut rng,
    ) else {
        return;
    };
    log::info!(
        "[hero] orbs={} canvas={}x{} ratio={}",
        scene.field().len(),
        scene.layout().backing_width,
        scene.layout().backing_height,
        scene.layout().ratio
    );

    let scheduler = RafScheduler::new();
    let runtime = Rc::new(RefCell::new(HeroRuntime {
        scene,
        surface,
        scheduler: scheduler.clone(),
    }));

    let rt_tick = runtime.clone();
    scheduler.set_callback(move || {
        let mut guard = rt_tick.borrow_mut();
        let HeroRuntime {
            scene,
            surface,
            scheduler,
        } = &mut *guard;
        scene.on_frame(scheduler, surface);
    });

    if let Err(e) = observe_visibility(&container, runtime.clone()) {
        log::warn!("[hero] visibility observer unavailable: {:?}", e);
        return;
    }

    let rt_resize = runtime.clone();
    let container_resize = container.clone();
    dom::listen(window, "resize", true, move |_| {
        let Some(w) = web::window() else { return };
        let mut guard = rt_resize.borrow_mut();
        let HeroRuntime { scene, surface, .. } = &mut *guard;
        scene.resize(container_box(&w, &container_resize), surface);
    });

    let rt_scroll = runtime;
    dom::listen(window, "scroll", true, move |_| {
        let Some(w) = web::window() else { return };
        let mut guard = rt_scroll.borrow_mut();
        let HeroRuntime { scene, surface, .. } = &mut *guard;
        scene.apply_scroll(dom::scroll_y(&w), surface);
    });
}

fn observe_visibility(
    container: &web::Element,
    runtime: Rc<RefCell<HeroRuntime>>,
) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<web::IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            let mut guard = runtime.borrow_mut();
            let HeroRuntime {
                scene,
                surface,
                scheduler,
            } = &mut *guard;
            let transition = scene.set_visible(visible, scheduler, surface);
            log::debug!("[hero] visible={} -> {:?}", visible, transition);
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(HERO_VISIBILITY_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(container);
    callback.forget();
    Ok(())
}
