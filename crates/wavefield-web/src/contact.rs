use crate::constants::*;
use crate::dom;
use js_sys::{Object, Reflect, JSON};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use wavefield_core::prefs::PreferenceValue;
use wavefield_core::{
    t, ContactForm, FieldErrors, Interest, Language, SubmitStatus, BANNER_DISMISS_MS,
};
use web_sys as web;

/// Wire the submit handler. Validation failures render per-field messages
/// and nothing is sent; a valid form dispatches the notification and the
/// auto-reply in order, disabling the submit button while in flight.
pub fn wire_contact_form(document: &web::Document) {
    let Some(form_el) = document.get_element_by_id(CONTACT_FORM_ID) else {
        log::warn!("contact form not present; skipping wiring");
        return;
    };
    let sending = Rc::new(Cell::new(false));
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let Some(document) = dom::window_document() else {
            return;
        };
        let lang = current_language(&document);
        let form = read_form(&document);
        match form.validate() {
            Err(errors) => show_errors(&document, &errors, lang),
            Ok(()) => {
                show_errors(&document, &FieldErrors::default(), lang);
                if sending.get() {
                    return; // one submission at a time
                }
                sending.set(true);
                set_sending_ui(&document, true, lang);
                let sending = sending.clone();
                spawn_local(async move {
                    let status = match dispatch(&form).await {
                        Ok(()) => SubmitStatus::Sent,
                        Err(e) => {
                            log::error!("contact dispatch failed: {e:?}");
                            SubmitStatus::Failed
                        }
                    };
                    if let Some(document) = dom::window_document() {
                        let lang = current_language(&document);
                        set_sending_ui(&document, false, lang);
                        if status == SubmitStatus::Sent {
                            clear_form(&document);
                        }
                        show_banner(&document, status, lang);
                    }
                    sending.set(false);
                });
            }
        }
    }) as Box<dyn FnMut(web::Event)>);
    let _ = form_el.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// The document `lang` attribute is the source of truth once the language
/// preference has been applied.
fn current_language(document: &web::Document) -> Language {
    document
        .document_element()
        .and_then(|root| root.get_attribute("lang"))
        .and_then(|tag| Language::parse(&tag))
        .unwrap_or_default()
}

fn read_form(document: &web::Document) -> ContactForm {
    ContactForm {
        name: input_value(document, NAME_INPUT_ID),
        email: input_value(document, EMAIL_INPUT_ID),
        interest: Interest::parse(&select_value(document, INTEREST_SELECT_ID)),
        message: textarea_value(document, MESSAGE_INPUT_ID),
    }
}

fn input_value(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default()
}

fn select_value(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default()
}

fn textarea_value(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default()
}

fn show_errors(document: &web::Document, errors: &FieldErrors, lang: Language) {
    set_field_error(document, NAME_INPUT_ID, errors.name, lang);
    set_field_error(document, EMAIL_INPUT_ID, errors.email, lang);
    set_field_error(document, INTEREST_SELECT_ID, errors.interest, lang);
    set_field_error(document, MESSAGE_INPUT_ID, errors.message, lang);
}

/// Each input has a `<id>-error` slot under it in the markup.
fn set_field_error(document: &web::Document, input_id: &str, key: Option<&str>, lang: Language) {
    let slot = format!("{input_id}-error");
    let text = key.map(|k| t(lang, k)).unwrap_or("");
    dom::set_text(document, &slot, text);
}

fn set_sending_ui(document: &web::Document, sending: bool, lang: Language) {
    if let Some(button) = document
        .get_element_by_id(SUBMIT_BUTTON_ID)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    {
        button.set_disabled(sending);
        let key = if sending { "sendingButton" } else { "sendButton" };
        button.set_text_content(Some(t(lang, key)));
    }
}

fn clear_form(document: &web::Document) {
    for id in [NAME_INPUT_ID, EMAIL_INPUT_ID] {
        if let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        {
            el.set_value("");
        }
    }
    if let Some(el) = document
        .get_element_by_id(INTEREST_SELECT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok())
    {
        el.set_value("");
    }
    if let Some(el) = document
        .get_element_by_id(MESSAGE_INPUT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
    {
        el.set_value("");
    }
}

fn show_banner(document: &web::Document, status: SubmitStatus, lang: Language) {
    let Some(key) = status.banner_key() else {
        return;
    };
    let Some(el) = document.get_element_by_id(STATUS_BANNER_ID) else {
        return;
    };
    el.set_text_content(Some(t(lang, key)));
    let _ = el.class_list().add_1("visible");
    let _ = el
        .class_list()
        .toggle_with_force("error", status == SubmitStatus::Failed);
    schedule_banner_dismiss(el);
}

fn schedule_banner_dismiss(el: web::Element) {
    let cb = Closure::wrap(Box::new(move || {
        let _ = el.class_list().remove_1("visible");
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            BANNER_DISMISS_MS,
        );
    }
    cb.forget();
}

/// Send both templated messages in order: the studio notification first,
/// then the visitor auto-reply. A failure in either surfaces as a failed
/// submission; there is no retry.
async fn dispatch(form: &ContactForm) -> anyhow::Result<()> {
    send_template(EMAIL_NOTIFY_TEMPLATE_ID, &form.notification_params()).await?;
    send_template(EMAIL_REPLY_TEMPLATE_ID, &form.auto_reply_params()).await?;
    Ok(())
}

async fn send_template(template_id: &str, params: &[(&'static str, String)]) -> anyhow::Result<()> {
    let template_params = Object::new();
    for (key, value) in params {
        let _ = Reflect::set(
            &template_params,
            &JsValue::from_str(key),
            &JsValue::from_str(value),
        );
    }
    let payload = Object::new();
    let _ = Reflect::set(&payload, &"service_id".into(), &EMAIL_SERVICE_ID.into());
    let _ = Reflect::set(&payload, &"template_id".into(), &template_id.into());
    let _ = Reflect::set(&payload, &"user_id".into(), &EMAIL_PUBLIC_KEY.into());
    let _ = Reflect::set(&payload, &"template_params".into(), &template_params.into());
    let body: String = JSON::stringify(&payload)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .into();

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));
    let request = web::Request::new_with_str_and_init(EMAIL_ENDPOINT, &init)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("unexpected fetch result"))?;
    if !response.ok() {
        anyhow::bail!("mail API returned status {}", response.status());
    }
    Ok(())
}
