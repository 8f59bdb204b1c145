use crate::constants::*;
use crate::core::pointer::ClientRect;
use crate::core::projects::find_project;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

fn fill_bullets(document: &web::Document, bullets: &[&str]) {
    let Some(list) = document.get_element_by_id(MODAL_BULLETS_ID) else {
        return;
    };
    list.set_inner_html("");
    for &bullet in bullets {
        if let Ok(li) = document.create_element("li") {
            li.set_text_content(Some(bullet));
            _ = list.append_child(&li);
        }
    }
}

/// Fill the dialog from the catalog and show it. Unknown keys do nothing.
pub fn open(document: &web::Document, key: &str) {
    let Some(modal) = document.get_element_by_id(MODAL_ID) else {
        return;
    };
    let Some(project) = find_project(key) else {
        log::warn!("[modal] unknown project {:?}", key);
        return;
    };
    set_text(document, MODAL_KICKER_ID, project.kicker);
    set_text(document, MODAL_TITLE_ID, project.title);
    set_text(document, MODAL_META_ID, project.meta);
    set_text(document, MODAL_DESC_ID, project.desc);
    fill_bullets(document, project.bullets);

    match modal.dyn_ref::<web::HtmlDialogElement>() {
        Some(dialog) => {
            if dialog.show_modal().is_err() {
                // already open non-modally, or detached
                _ = modal.set_attribute("open", "true");
            }
        }
        None => {
            // fallback for browsers without <dialog>
            _ = modal.set_attribute("open", "true");
        }
    }
}

pub fn close(document: &web::Document) {
    let Some(modal) = document.get_element_by_id(MODAL_ID) else {
        return;
    };
    match modal.dyn_ref::<web::HtmlDialogElement>() {
        Some(dialog) => dialog.close(),
        None => {
            _ = modal.remove_attribute("open");
        }
    }
}

#[inline]
pub fn is_open(document: &web::Document) -> bool {
    document
        .get_element_by_id(MODAL_ID)
        .map(|m| m.has_attribute("open"))
        .unwrap_or(false)
}

pub fn wire(document: &web::Document) {
    for button in dom::query_all(document, MODAL_OPEN_SELECTOR) {
        let key = button.get_attribute(MODAL_PROJECT_ATTR).unwrap_or_default();
        dom::listen(&button, "click", false, move |_| {
            if let Some(d) = dom::window_document() {
                open(&d, &key);
            }
        });
    }

    for button in dom::query_all(document, MODAL_CLOSE_SELECTOR) {
        dom::listen(&button, "click", false, |_| {
            if let Some(d) = dom::window_document() {
                close(&d);
            }
        });
    }

    // Clicks on the backdrop land on the dialog itself but outside its box.
    if let Some(modal) = document.get_element_by_id(MODAL_ID) {
        let modal_for_click = modal.clone();
        dom::listen(&modal, "click", false, move |ev| {
            let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let rect: ClientRect = dom::client_rect(&modal_for_click);
            if !rect.contains(mouse.client_x() as f64, mouse.client_y() as f64) {
                if let Some(d) = dom::window_document() {
                    close(&d);
                }
            }
        });
    }
}
