use wavefield_core::prefs::PreferenceStore;
use wavefield_core::{Language, Theme};
use web_sys as web;

/// `localStorage`-backed store. Disabled storage degrades to the defaults;
/// failed writes are dropped silently.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage(&self) -> Option<web::Storage> {
        web::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn store(&self, key: &str, value: &str) {
        if let Some(s) = self.storage() {
            let _ = s.set_item(key, value);
        }
    }
}

/// Reflect the theme as a `dark` class on the document root, which the
/// stylesheet keys off.
pub fn apply_theme(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        let _ = match theme {
            Theme::Dark => classes.add_1("dark"),
            Theme::Light => classes.remove_1("dark"),
        };
    }
}

/// Reflect the language on the root `lang` attribute and re-render every
/// translated element.
pub fn apply_language(document: &web::Document, lang: Language) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", lang.tag());
    }
    crate::dom::apply_translations(document, lang);
}
