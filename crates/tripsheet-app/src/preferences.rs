//! Local key-value storage and the typed preferences stored in it.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::AppError;
use crate::language::Language;
use crate::theme::ThemeMode;

pub const VIEWED_ONBOARDING_KEY: &str = "@viewedOnboarding";
pub const THEME_MODE_KEY: &str = "@themeMode";
pub const LANGUAGE_KEY: &str = "@language";

/// String-keyed storage. Single-threaded; implementations use interior
/// mutability.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove_item(&self, key: &str) -> Result<(), AppError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// A JSON object on disk, rewritten on every change.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    items: RefCell<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open `path`, starting empty when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|source| AppError::Json {
                path: Some(path.clone()),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} not found; starting with empty preferences", path.display());
                BTreeMap::new()
            }
            Err(source) => return Err(AppError::Io { path, source }),
        };
        Ok(Self {
            path,
            items: RefCell::new(items),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), AppError> {
        let text = serde_json::to_string_pretty(&*self.items.borrow())?;
        fs::write(&self.path, text).map_err(|source| AppError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        self.flush()
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        let removed = self.items.borrow_mut().remove(key).is_some();
        if removed {
            self.flush()?;
        }
        Ok(())
    }
}

/// Typed access to the app's persisted flags.
#[derive(Clone)]
pub struct Preferences {
    store: Rc<dyn KeyValueStore>,
}

impl Preferences {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStore::new()))
    }

    /// Any stored value counts as seen.
    pub fn has_viewed_onboarding(&self) -> Result<bool, AppError> {
        Ok(self.store.get_item(VIEWED_ONBOARDING_KEY)?.is_some())
    }

    pub fn mark_onboarding_viewed(&self) -> Result<(), AppError> {
        self.store.set_item(VIEWED_ONBOARDING_KEY, "true")
    }

    /// The saved mode; unknown values are treated as unset.
    pub fn theme_mode(&self) -> Result<Option<ThemeMode>, AppError> {
        let stored = self.store.get_item(THEME_MODE_KEY)?;
        Ok(stored.and_then(|value| match value.parse() {
            Ok(mode) => Some(mode),
            Err(_) => {
                log::warn!("ignoring unknown theme mode {value:?}");
                None
            }
        }))
    }

    pub fn set_theme_mode(&self, mode: ThemeMode) -> Result<(), AppError> {
        self.store.set_item(THEME_MODE_KEY, mode.as_str())
    }

    pub fn language(&self) -> Result<Option<Language>, AppError> {
        let stored = self.store.get_item(LANGUAGE_KEY)?;
        Ok(stored.and_then(|value| match value.parse() {
            Ok(language) => Some(language),
            Err(_) => {
                log::warn!("ignoring unknown language {value:?}");
                None
            }
        }))
    }

    pub fn set_language(&self, language: Language) -> Result<(), AppError> {
        self.store.set_item(LANGUAGE_KEY, language.as_str())
    }

    pub fn reset(&self) -> Result<(), AppError> {
        self.store.remove_item(VIEWED_ONBOARDING_KEY)?;
        self.store.remove_item(THEME_MODE_KEY)?;
        self.store.remove_item(LANGUAGE_KEY)
    }
}

#[cfg(test)]
#[path = "tests/preferences_tests.rs"]
mod tests;
