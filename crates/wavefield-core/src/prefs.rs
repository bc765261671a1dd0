use std::cell::RefCell;
use std::collections::HashMap;

/// Backing store for string preferences. Injected rather than global, so
/// the same provider logic runs against browser localStorage on the web and
/// an in-memory map in host tests.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&self, key: &str, value: &str);
}

impl<S: PreferenceStore> PreferenceStore for &S {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }
    fn store(&self, key: &str, value: &str) {
        (**self).store(key, value)
    }
}

/// A value persisted under a fixed key.
pub trait PreferenceValue: Copy + PartialEq {
    const KEY: &'static str;
    fn fallback() -> Self;
    fn as_str(self) -> &'static str;
    fn parse(raw: &str) -> Option<Self>;
}

/// UI color scheme. Dark is the shipped default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl PreferenceValue for Theme {
    const KEY: &'static str = "theme";

    fn fallback() -> Self {
        Theme::Dark
    }

    fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// One persisted preference: the current typed value plus its store.
pub struct Preference<T: PreferenceValue, S: PreferenceStore> {
    store: S,
    current: T,
}

impl<T: PreferenceValue, S: PreferenceStore> Preference<T, S> {
    /// Initialize from the store. Missing or unrecognized stored values fall
    /// back to the default without writing anything back.
    pub fn load(store: S) -> Self {
        let current = store
            .load(T::KEY)
            .and_then(|raw| T::parse(&raw))
            .unwrap_or_else(T::fallback);
        Self { store, current }
    }

    pub fn get(&self) -> T {
        self.current
    }

    /// Change the value and write it through to the store.
    pub fn set(&mut self, value: T) {
        self.current = value;
        self.store.store(T::KEY, value.as_str());
    }
}

/// HashMap-backed store for host tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.into(), value.into());
    }
}
