use std::cell::Cell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use log::{debug, info, warn};

use crate::config::{THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use crate::dom;
use crate::error::StorageError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable string key-value storage.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Wherever the active theme has to be reflected for styling.
pub trait ThemeTarget {
    fn reflect(&self, preference: ThemePreference);
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable),
            Err(err) => Err(StorageError::Access(format!("{:?}", err))),
        }
    }
}

impl PreferenceStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StorageError::Access(format!("{:?}", err)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Access(format!("{:?}", err)))
    }
}

/// `<html data-theme="...">`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentTheme;

impl ThemeTarget for DocumentTheme {
    fn reflect(&self, preference: ThemePreference) {
        let Some(root) = dom::document_root() else {
            debug!("No document root to reflect theme onto");
            return;
        };
        if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, preference.as_str()) {
            warn!("Failed to set {}: {:?}", THEME_ATTRIBUTE, err);
        }
    }
}

/// Cache-aside theme preference: the document attribute is updated
/// synchronously on every `set`, the persisted copy best-effort. Once set,
/// the session value wins over storage so a failed write still sticks until
/// reload.
pub struct ThemeStore<S = BrowserStorage, T = DocumentTheme> {
    storage: S,
    target: T,
    system_dark: bool,
    session: Cell<Option<ThemePreference>>,
}

impl ThemeStore {
    pub fn browser() -> Self {
        ThemeStore::new(BrowserStorage, DocumentTheme, dom::prefers_dark_scheme())
    }
}

impl<S: PreferenceStorage, T: ThemeTarget> ThemeStore<S, T> {
    pub fn new(storage: S, target: T, system_dark: bool) -> Self {
        Self {
            storage,
            target,
            system_dark,
            session: Cell::new(None),
        }
    }

    pub fn get(&self) -> ThemePreference {
        if let Some(preference) = self.session.get() {
            return preference;
        }
        match self.storage.read(THEME_STORAGE_KEY) {
            Ok(Some(saved)) => {
                if let Some(preference) = ThemePreference::parse(&saved) {
                    return preference;
                }
                debug!("Ignoring unrecognised stored theme {:?}", saved);
            }
            Ok(None) => {}
            Err(err) => debug!("Theme read failed, using system preference: {}", err),
        }
        self.system_preference()
    }

    pub fn set(&self, preference: ThemePreference) {
        self.session.set(Some(preference));
        self.target.reflect(preference);
        if let Err(err) = self.storage.write(THEME_STORAGE_KEY, preference.as_str()) {
            warn!("Theme {} applied for this session only: {}", preference, err);
        }
    }

    pub fn toggle(&self) -> ThemePreference {
        let next = self.get().toggled();
        self.set(next);
        info!("Theme toggled -> {}", next);
        next
    }

    fn system_preference(&self) -> ThemePreference {
        if self.system_dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }
}

/// The app-wide store, handed to pages through a `ContextProvider` so the
/// session value outlives any single page mount. Equality is identity.
pub struct ThemeHandle<S = BrowserStorage, T = DocumentTheme>(Rc<ThemeStore<S, T>>);

impl ThemeHandle {
    pub fn browser() -> Self {
        ThemeHandle::new(ThemeStore::browser())
    }
}

impl<S, T> ThemeHandle<S, T> {
    pub fn new(store: ThemeStore<S, T>) -> Self {
        ThemeHandle(Rc::new(store))
    }
}

impl<S, T> Clone for ThemeHandle<S, T> {
    fn clone(&self) -> Self {
        ThemeHandle(Rc::clone(&self.0))
    }
}

impl<S, T> PartialEq for ThemeHandle<S, T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<S, T> Deref for ThemeHandle<S, T> {
    type Target = ThemeStore<S, T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
