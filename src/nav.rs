use crate::constants::*;
use crate::core::scroll::{nav_is_scrolled, scroll_progress_percent};
use crate::dom;
use web_sys as web;

fn sync_navbar(window: &web::Window, nav: &web::Element) {
    _ = nav
        .class_list()
        .toggle_with_force(NAV_SCROLLED_CLASS, nav_is_scrolled(dom::scroll_y(window)));
}

pub fn wire_navbar(window: &web::Window, document: &web::Document) {
    let Ok(Some(nav)) = document.query_selector(NAV_SELECTOR) else {
        return;
    };
    sync_navbar(window, &nav);
    dom::listen(window, "scroll", true, move |_| {
        if let Some(w) = web::window() {
            sync_navbar(&w, &nav);
        }
    });
}

pub fn is_menu_open(document: &web::Document) -> bool {
    document
        .get_element_by_id(BURGER_ID)
        .and_then(|b| b.get_attribute("aria-expanded"))
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// Open/close the mobile menu; locks body scroll while open.
pub fn set_menu_open(document: &web::Document, open: bool) {
    let (Some(burger), Some(menu)) = (
        document.get_element_by_id(BURGER_ID),
        dom::html_element(document, MOBILE_MENU_ID),
    ) else {
        return;
    };
    _ = burger.set_attribute("aria-expanded", if open { "true" } else { "false" });
    menu.set_hidden(!open);
    if let Some(body) = document.body() {
        dom::set_style(&body, "overflow", if open { "hidden" } else { "" });
    }
}

pub fn wire_mobile_menu(document: &web::Document) {
    let (Some(_), Some(menu)) = (
        document.get_element_by_id(BURGER_ID),
        document.get_element_by_id(MOBILE_MENU_ID),
    ) else {
        return;
    };

    dom::add_click_listener(document, BURGER_ID, || {
        if let Some(d) = dom::window_document() {
            let open = is_menu_open(&d);
            set_menu_open(&d, !open);
        }
    });

    for link in dom::query_all_in(&menu, MOBILE_MENU_LINKS) {
        dom::listen(&link, "click", false, |_| {
            if let Some(d) = dom::window_document() {
                set_menu_open(&d, false);
            }
        });
    }
}

fn sync_progress(document: &web::Document, bar: &web::HtmlElement) {
    let Some(root) = document.document_element() else {
        return;
    };
    let mut scroll_top = root.scroll_top() as f64;
    if scroll_top == 0.0 {
        if let Some(body) = document.body() {
            scroll_top = body.scroll_top() as f64;
        }
    }
    let p = scroll_progress_percent(
        scroll_top,
        root.scroll_height() as f64,
        root.client_height() as f64,
    );
    dom::set_style(bar, "width", &format!("{}%", p));
}

pub fn wire_scroll_progress(window: &web::Window, document: &web::Document) {
    let Some(bar) = dom::html_element(document, SCROLL_PROGRESS_ID) else {
        return;
    };
    sync_progress(document, &bar);
    dom::listen(window, "scroll", true, move |_| {
        if let Some(d) = dom::window_document() {
            sync_progress(&d, &bar);
        }
    });
}

