//! Application state around the sheets: theme, language, preferences,
//! session, routes, trips and location pickers.

mod alerts;
mod error;
mod language;
mod locations;
mod picker;
mod preferences;
mod routes;
mod session;
mod theme;
mod trips;

pub use alerts::Alert;
pub use error::AppError;
pub use language::{Language, LanguageStore, UnknownLanguage};
pub use locations::{filter_by_city, Location};
pub use picker::LocationPicker;
pub use preferences::{
    JsonFileStore, KeyValueStore, MemoryStore, Preferences, LANGUAGE_KEY, THEME_MODE_KEY,
    VIEWED_ONBOARDING_KEY,
};
pub use routes::{LocationKind, RootStack, Route, Tab};
pub use session::{AuthService, SessionGate, User};
pub use theme::{ColorScheme, Theme, ThemeMode, ThemeStore, UnknownThemeMode};
pub use trips::{format_price, load_trip_listings, Company, JsonTripSource, Trip, TripListing, TripSource};

pub mod prelude {
    pub use crate::{
        Alert, AppError, LocationPicker, Preferences, RootStack, Route, SessionGate, Theme,
        ThemeStore, TripListing,
    };
}
