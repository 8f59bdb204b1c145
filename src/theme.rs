use crate::constants::{THEME_KEY, THEME_TOGGLE_ID, THEME_TRANSITION_CLASS, THEME_TRANSITION_CSS};
use crate::core::theme::{persist_theme, resolve_theme, PreferenceStore, Theme};
use crate::core::TRANSITION_MS;
use crate::dom;
use web_sys as web;

/// `localStorage`, when the browser exposes it. Failures are silent: the
/// preference simply does not persist.
pub struct LocalStore(Option<web::Storage>);

impl LocalStore {
    pub fn open(window: &web::Window) -> Self {
        Self(window.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.0 {
            _ = storage.set_item(key, value);
        }
    }
}

fn inject_transition_style(document: &web::Document) {
    let Some(head) = document.head() else { return };
    if let Ok(style) = document.create_element("style") {
        style.set_text_content(Some(THEME_TRANSITION_CSS));
        _ = head.append_child(&style);
    }
}

pub fn apply(window: &web::Window, document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        _ = root.class_list().add_1(THEME_TRANSITION_CLASS);
        let root_later = root.clone();
        dom::set_timeout(window, TRANSITION_MS, move || {
            _ = root_later.class_list().remove_1(THEME_TRANSITION_CLASS);
        });
        _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Some(toggle) = document.get_element_by_id(THEME_TOGGLE_ID) {
        _ = toggle.set_attribute("aria-pressed", theme.aria_pressed());
    }
    persist_theme(&mut LocalStore::open(window), THEME_KEY, theme);
}

pub fn init(window: &web::Window, document: &web::Document) {
    inject_transition_style(document);
    let initial = resolve_theme(&LocalStore::open(window), THEME_KEY);
    apply(window, document, initial);
    log::info!("[theme] {}", initial.as_str());

    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        let (Some(w), Some(d)) = (web::window(), dom::window_document()) else {
            return;
        };
        let current = d
            .document_element()
            .and_then(|root| root.get_attribute("data-theme"));
        apply(&w, &d, Theme::next_from_attr(current.as_deref()));
    });
}
