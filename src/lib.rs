#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod contact;
mod core;
mod dom;
mod events;
mod frame;
mod hero;
mod modal;
mod nav;
mod reveal;
mod theme;

fn set_footer_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(constants::YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let reduced_motion = dom::media_matches(&window, constants::REDUCED_MOTION_QUERY);

    theme::init(&window, &document);

    nav::wire_navbar(&window, &document);
    nav::wire_mobile_menu(&document);
    nav::wire_scroll_progress(&window, &document);
    events::wire_global_keydown(&window);

    reveal::wire(&document);

    // Hero orbs are skipped entirely under reduced motion
    hero::init(&window, &document, reduced_motion);

    events::wire_parallax(&window, &document, reduced_motion);
    events::wire_magnetic_buttons(&document, reduced_motion);
    events::wire_spotlight_cards(&window, &document);

    modal::wire(&document);
    contact::wire(&document);

    set_footer_year(&document);
    Ok(())
}
