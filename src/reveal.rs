use crate::constants::{REVEAL_DELAY_ATTR, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_VISIBLE_CLASS};
use crate::core::scroll::reveal_transition_delay;
use crate::core::REVEAL_THRESHOLD;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn apply_delay_fallback(elements: &[web::HtmlElement]) {
    for el in elements {
        let attr = el.get_attribute(REVEAL_DELAY_ATTR);
        if let Some(delay) = reveal_transition_delay(attr.as_deref()) {
            dom::set_style(el, "transition-delay", &delay);
        }
    }
}

fn observe(elements: &[web::HtmlElement]) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(
        |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                _ = target.class_list().add_1(REVEAL_VISIBLE_CLASS);
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for el in elements {
        observer.observe(el);
    }
    callback.forget();
    Ok(())
}

pub fn wire(document: &web::Document) {
    let elements = dom::query_all(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return;
    }
    apply_delay_fallback(&elements);
    if let Err(e) = observe(&elements) {
        log::warn!("[reveal] observer unavailable, showing all: {:?}", e);
        for el in &elements {
            _ = el.class_list().add_1(REVEAL_VISIBLE_CLASS);
        }
    }
}
