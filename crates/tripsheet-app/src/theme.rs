//! Light and dark palettes and the observable theme selection.

use std::fmt;
use std::str::FromStr;

use tripsheet_core::{MutableState, Subscription};
use tripsheet_graphics::Color;

use crate::error::AppError;
use crate::preferences::Preferences;

/// Scheme reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// The user's choice; `System` follows the platform scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    pub fn resolve(self, system: ColorScheme) -> ColorScheme {
        match self {
            ThemeMode::Light => ColorScheme::Light,
            ThemeMode::Dark => ColorScheme::Dark,
            ThemeMode::System => system,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl fmt::Display for UnknownThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme mode {:?}", self.0)
    }
}

impl std::error::Error for UnknownThemeMode {}

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(UnknownThemeMode(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub scheme: ColorScheme,
    pub text: Color,
    pub background: Color,
    pub sheet_background: Color,
    pub sheet_handle: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            scheme: ColorScheme::Light,
            text: Color::from_rgb_u8(0x33, 0x33, 0x33),
            background: Color::WHITE,
            sheet_background: Color::WHITE,
            sheet_handle: Color::BLACK,
        }
    }

    pub fn dark() -> Self {
        Self {
            scheme: ColorScheme::Dark,
            text: Color::WHITE,
            background: Color::from_rgb_u8(0x33, 0x33, 0x33),
            sheet_background: Color::from_rgb_u8(0x12, 0x12, 0x12),
            sheet_handle: Color::WHITE,
        }
    }

    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ThemeSelection {
    mode: ThemeMode,
    system: ColorScheme,
}

impl ThemeSelection {
    fn theme(self) -> Theme {
        Theme::for_scheme(self.mode.resolve(self.system))
    }
}

/// Current theme, persisted through [`Preferences`].
#[derive(Clone)]
pub struct ThemeStore {
    selection: MutableState<ThemeSelection>,
    preferences: Preferences,
}

impl ThemeStore {
    /// Restore the saved mode, defaulting to `System`.
    pub fn load(preferences: Preferences, system: ColorScheme) -> Result<Self, AppError> {
        let mode = preferences.theme_mode()?.unwrap_or_default();
        Ok(Self {
            selection: MutableState::new(ThemeSelection { mode, system }),
            preferences,
        })
    }

    pub fn mode(&self) -> ThemeMode {
        self.selection.with(|selection| selection.mode)
    }

    pub fn theme(&self) -> Theme {
        self.selection.with(|selection| selection.theme())
    }

    /// Persist first so a failed write leaves the visible theme unchanged.
    pub fn set_mode(&self, mode: ThemeMode) -> Result<(), AppError> {
        self.preferences.set_theme_mode(mode)?;
        self.selection.update(|selection| selection.mode = mode);
        Ok(())
    }

    pub fn set_system_scheme(&self, system: ColorScheme) {
        self.selection.update(|selection| selection.system = system);
    }

    /// Called whenever the mode or the system scheme changes.
    pub fn subscribe(&self, observer: impl Fn(&Theme) + 'static) -> Subscription {
        self.selection
            .subscribe(move |selection| observer(&selection.theme()))
    }
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
