use crate::constants::{PARALLAX_ATTR, PARALLAX_SELECTOR};
use crate::core::scroll::{parallax_strength, parallax_transform, parallax_translate};
use crate::dom;
use crate::frame::FrameThrottle;
use std::rc::Rc;
use web_sys as web;

fn update_parallax(elements: &[web::HtmlElement]) {
    let Some(window) = web::window() else { return };
    let vh = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    for el in elements {
        let strength = parallax_strength(el.get_attribute(PARALLAX_ATTR).as_deref());
        let rect = dom::client_rect(el);
        let translate = parallax_translate(rect.center().1, vh, strength);
        dom::set_style(el, "transform", &parallax_transform(translate));
    }
}

/// Light scroll parallax, at most one update per display refresh.
pub fn wire_parallax(window: &web::Window, document: &web::Document, reduced_motion: bool) {
    let elements = Rc::new(dom::query_all(document, PARALLAX_SELECTOR));
    if elements.is_empty() || reduced_motion {
        return;
    }
    update_parallax(&elements);

    let els = elements.clone();
    let throttle = FrameThrottle::new(move || update_parallax(&els));
    for event in ["scroll", "resize"] {
        let t = throttle.clone();
        dom::listen(window, event, true, move |_| t.request());
    }
}
