use crate::{modal, nav};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, document: &web::Document) {
    if !is_dismiss_key(&ev.key()) {
        return;
    }
    if nav::is_menu_open(document) {
        nav::set_menu_open(document, false);
    }
    // native <dialog> handles Escape itself; this covers the attribute fallback
    if modal::is_open(document) {
        modal::close(document);
    }
}

pub fn wire_global_keydown(window: &web::Window) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if let Some(document) = web::window().and_then(|w| w.document()) {
            handle_global_keydown(&ev, &document);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
