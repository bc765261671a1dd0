use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wavefield_core::{backing_size, t, Language};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

// Page-lifetime listener; the closure is forgotten, not retained.
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("element #{} not found; listener not attached", element_id);
    }
}

/// Keep a canvas backing store in sync with its CSS size, pixel ratio cap
/// applied. No-op when nothing changed.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let (width, height) = backing_size(rect.width(), rect.height(), window.device_pixel_ratio());
        if canvas.width() != width {
            canvas.set_width(width);
        }
        if canvas.height() != height {
            canvas.set_height(height);
        }
    }
}

pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// Re-render every element tagged `data-i18n` in the current language.
pub fn apply_translations(document: &web::Document, lang: Language) {
    let Ok(nodes) = document.query_selector_all("[data-i18n]") else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(el) = node.dyn_into::<web::Element>() else {
            continue;
        };
        if let Some(key) = el.get_attribute("data-i18n") {
            el.set_text_content(Some(t(lang, &key)));
        }
    }
}
