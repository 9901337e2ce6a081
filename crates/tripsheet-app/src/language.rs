//! Interface language chosen in settings.

use std::fmt;
use std::str::FromStr;

use tripsheet_core::{MutableState, Subscription};

use crate::error::AppError;
use crate::preferences::Preferences;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    French,
    Arabic,
    Spanish,
    German,
    Italian,
}

impl Language {
    /// In the order the settings list shows them.
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::French,
        Language::Arabic,
        Language::Spanish,
        Language::German,
        Language::Italian,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::Arabic => "Arabic",
            Language::Spanish => "Spanish",
            Language::German => "German",
            Language::Italian => "Italian",
        }
    }

    pub fn is_right_to_left(self) -> bool {
        matches!(self, Language::Arabic)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language {:?}", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.as_str() == value)
            .ok_or_else(|| UnknownLanguage(value.to_owned()))
    }
}

/// Current language, persisted through [`Preferences`].
#[derive(Clone)]
pub struct LanguageStore {
    language: MutableState<Language>,
    preferences: Preferences,
}

impl LanguageStore {
    /// Restore the saved language, defaulting to English.
    pub fn load(preferences: Preferences) -> Result<Self, AppError> {
        let language = preferences.language()?.unwrap_or_default();
        Ok(Self {
            language: MutableState::new(language),
            preferences,
        })
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn set_language(&self, language: Language) -> Result<(), AppError> {
        self.preferences.set_language(language)?;
        self.language.set(language);
        Ok(())
    }

    pub fn subscribe(&self, observer: impl Fn(Language) + 'static) -> Subscription {
        self.language.subscribe(move |language| observer(*language))
    }
}
