use crate::constants::*;
use crate::core::contact::{check_endpoint, classify_response, FormNotice, SubmitError};
use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

async fn post_form(action: &str, form: &web::HtmlFormElement) -> Result<(), SubmitError> {
    let network = |e: wasm_bindgen::JsValue| SubmitError::Network(format!("{:?}", e));

    let window = web::window().ok_or_else(|| SubmitError::Network("no window".into()))?;
    let data = web::FormData::new_with_form(form).map_err(network)?;
    let headers = web::Headers::new().map_err(network)?;
    headers.set("Accept", "application/json").map_err(network)?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_body(&data);
    init.set_headers(&headers);
    let request = web::Request::new_with_str_and_init(action, &init).map_err(network)?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?
        .dyn_into::<web::Response>()
        .map_err(network)?;
    classify_response(response.ok(), response.status())
}

fn show_notice(document: &web::Document, form: &web::HtmlFormElement, notice: FormNotice) {
    match notice {
        FormNotice::Success => {
            if let Some(success) = dom::html_element(document, FORM_SUCCESS_ID) {
                success.set_hidden(false);
                form.reset();
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Nearest);
                success.scroll_into_view_with_scroll_into_view_options(&opts);
            } else {
                form.reset();
            }
        }
        FormNotice::Error(message) => {
            if let Some(error) = dom::html_element(document, FORM_ERROR_ID) {
                error.set_hidden(false);
                if let Some(text) = message {
                    error.set_text_content(Some(text));
                }
            }
        }
    }
}

async fn submit(form: web::HtmlFormElement) {
    let Some(document) = dom::window_document() else {
        return;
    };
    for id in [FORM_SUCCESS_ID, FORM_ERROR_ID] {
        if let Some(el) = dom::html_element(&document, id) {
            el.set_hidden(true);
        }
    }

    let action = form.get_attribute("action");
    let result = match check_endpoint(action.as_deref()) {
        Ok(endpoint) => post_form(endpoint, &form).await,
        Err(e) => Err(e),
    };
    match &result {
        Ok(()) => log::info!("[form] submitted"),
        Err(e) => log::warn!("[form] {}", e),
    }
    show_notice(&document, &form, FormNotice::from(&result));
}

pub fn wire(document: &web::Document) {
    let Some(form) = dom::element_as::<web::HtmlFormElement>(document, CONTACT_FORM_ID) else {
        return;
    };
    if !form.has_attribute(CONTACT_FORM_FLAG) {
        return;
    }
    let form_submit = form.clone();
    dom::listen(&form, "submit", false, move |ev| {
        ev.prevent_default();
        spawn_local(submit(form_submit.clone()));
    });
}
