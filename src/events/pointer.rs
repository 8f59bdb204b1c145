use crate::constants::{
    HOVER_QUERY, MAGNETIC_SELECTOR, MAGNET_GLOW_SELECTOR, MAGNET_RELEASE_TRANSITION,
    SPOTLIGHT_SELECTOR,
};
use crate::core::pointer::{glow_offset, magnet_offset, magnet_transform, spotlight_percent, ClientRect};
use crate::core::TRANSITION_MS;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct MagnetWiring {
    el: web::HtmlElement,
    glow: Option<web::HtmlElement>,
    // cached on enter so moves don't force layout
    rect: Rc<RefCell<Option<ClientRect>>>,
}

impl MagnetWiring {
    fn set_offset(&self, offset: (f64, f64)) {
        dom::set_style(&self.el, "transform", &magnet_transform(offset));
        if let Some(glow) = &self.glow {
            let (gx, gy) = glow_offset(offset);
            dom::set_style(glow, "--mx", &format!("{}px", gx));
            dom::set_style(glow, "--my", &format!("{}px", gy));
        }
    }
}

fn add_mouse_listener(w: &MagnetWiring, event: &str, handler: impl FnMut(web::MouseEvent) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::MouseEvent)>);
    _ = w
        .el
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mouseenter(w: &MagnetWiring) {
    let w2 = w.clone();
    add_mouse_listener(w, "mouseenter", move |_ev| {
        *w2.rect.borrow_mut() = Some(dom::client_rect(&w2.el));
    });
}

fn wire_mousemove(w: &MagnetWiring) {
    let w2 = w.clone();
    add_mouse_listener(w, "mousemove", move |ev| {
        let rect = *w2
            .rect
            .borrow_mut()
            .get_or_insert_with(|| dom::client_rect(&w2.el));
        let offset = magnet_offset(&rect, ev.client_x() as f64, ev.client_y() as f64);
        w2.set_offset(offset);
    });
}

fn wire_mouseleave(w: &MagnetWiring) {
    let w2 = w.clone();
    add_mouse_listener(w, "mouseleave", move |_ev| {
        dom::set_style(&w2.el, "transition", MAGNET_RELEASE_TRANSITION);
        w2.set_offset((0.0, 0.0));
        if let Some(window) = web::window() {
            let el = w2.el.clone();
            dom::set_timeout(&window, TRANSITION_MS, move || {
                dom::set_style(&el, "transition", "");
            });
        }
    });
}

pub fn wire_magnetic_buttons(document: &web::Document, reduced_motion: bool) {
    if reduced_motion {
        return;
    }
    for el in dom::query_all(document, MAGNETIC_SELECTOR) {
        let glow = dom::query_all_in(&el, MAGNET_GLOW_SELECTOR).into_iter().next();
        let w = MagnetWiring {
            el,
            glow,
            rect: Rc::new(RefCell::new(None)),
        };
        wire_mouseenter(&w);
        wire_mousemove(&w);
        wire_mouseleave(&w);
    }
}

pub fn wire_spotlight_cards(window: &web::Window, document: &web::Document) {
    let cards = dom::query_all(document, SPOTLIGHT_SELECTOR);
    if cards.is_empty() || !dom::media_matches(window, HOVER_QUERY) {
        return;
    }
    for card in cards {
        let card_move = card.clone();
        dom::listen(&card, "mousemove", true, move |ev| {
            let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let rect = dom::client_rect(&card_move);
            if let Some((sx, sy)) =
                spotlight_percent(&rect, mouse.client_x() as f64, mouse.client_y() as f64)
            {
                dom::set_style(&card_move, "--sx", &sx);
                dom::set_style(&card_move, "--sy", &sy);
            }
        });
    }
}
