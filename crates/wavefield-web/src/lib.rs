#![cfg(target_arch = "wasm32")]

mod background;
mod constants;
mod contact;
mod dom;
mod frame;
mod prefs;
mod render;

use background::WaveField;
use constants::{BACKGROUND_CONTAINER_ID, LANGUAGE_TOGGLE_ID, THEME_TOGGLE_ID};
use prefs::LocalStorageStore;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use wavefield_core::{BandValue, Language, Preference, Theme, WaveFieldConfig};

thread_local! {
    static BACKGROUND: RefCell<Option<WaveField>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wavefield-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Preferences first, so the page paints with the stored theme and
    // language before the GPU comes up.
    let theme = Rc::new(RefCell::new(Preference::<Theme, _>::load(LocalStorageStore)));
    let language = Rc::new(RefCell::new(Preference::<Language, _>::load(
        LocalStorageStore,
    )));
    prefs::apply_theme(&document, theme.borrow().get());
    prefs::apply_language(&document, language.borrow().get());

    {
        let theme = theme.clone();
        dom::add_click_listener(&document, THEME_TOGGLE_ID, move || {
            let next = theme.borrow().get().toggled();
            theme.borrow_mut().set(next);
            if let Some(document) = dom::window_document() {
                prefs::apply_theme(&document, next);
            }
            // the field follows the theme so light mode gets a light canvas
            BACKGROUND.with(|slot| {
                if let Some(field) = slot.borrow().as_ref() {
                    field.set_config(page_config(next));
                }
            });
        });
    }
    {
        let language = language.clone();
        dom::add_click_listener(&document, LANGUAGE_TOGGLE_ID, move || {
            let next = language.borrow().get().toggled();
            language.borrow_mut().set(next);
            if let Some(document) = dom::window_document() {
                prefs::apply_language(&document, next);
            }
        });
    }

    contact::wire_contact_form(&document);

    let container = document
        .get_element_by_id(BACKGROUND_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", BACKGROUND_CONTAINER_ID))?;
    // read the theme before the await so no borrow is held while the
    // toggle listeners are already live
    let initial_theme = theme.borrow().get();
    let field = WaveField::mount(&container, page_config(initial_theme)).await?;
    BACKGROUND.with(|slot| *slot.borrow_mut() = Some(field));
    log::info!("wave field mounted");
    Ok(())
}

/// Detach the animated background, releasing the canvas and GPU resources.
/// Exposed so a page teardown (or a test harness) can unmount cleanly.
#[wasm_bindgen]
pub fn dispose_background() {
    BACKGROUND.with(|slot| {
        if let Some(field) = slot.borrow_mut().take() {
            field.dispose();
        }
    });
}

/// The composition the shipped page uses, keyed to the theme: the wave
/// colors stay put, the canvas background follows light/dark.
fn page_config(theme: Theme) -> WaveFieldConfig {
    WaveFieldConfig {
        line_count: BandValue::PerBand(vec![10, 5, 10]),
        line_spacing: BandValue::PerBand(vec![8.0, 6.0, 4.0]),
        gradient: vec!["#0504aa".into(), "#00ccff".into(), "#000000".into()],
        background: match theme {
            Theme::Dark => "#000000",
            Theme::Light => "#ffffff",
        }
        .into(),
        ..WaveFieldConfig::default()
    }
}
