//! City picker hosted in a bottom sheet.

use tripsheet_core::MutableState;
use tripsheet_sheet::SheetController;

use crate::locations::{filter_by_city, Location};
use crate::routes::LocationKind;

/// Search state plus the sheet it lives in. Picking a city records it and
/// closes the sheet.
pub struct LocationPicker {
    kind: LocationKind,
    locations: Vec<Location>,
    query: MutableState<String>,
    selected: MutableState<Option<String>>,
    sheet: SheetController,
}

impl LocationPicker {
    pub fn new(kind: LocationKind, locations: Vec<Location>, sheet: SheetController) -> Self {
        Self {
            kind,
            locations,
            query: MutableState::new(String::new()),
            selected: MutableState::new(None),
            sheet,
        }
    }

    pub fn title(&self) -> String {
        format!("Select {} Location", self.kind.label())
    }

    pub fn search_placeholder(&self) -> String {
        format!("Search {} locations...", self.kind.label().to_lowercase())
    }

    pub fn sheet(&self) -> &SheetController {
        &self.sheet
    }

    /// Shared so the owning screen can observe the chosen city.
    pub fn selection(&self) -> MutableState<Option<String>> {
        self.selected.clone()
    }

    /// Opens with an empty search.
    pub fn open(&self) -> bool {
        self.query.set(String::new());
        self.sheet.expand()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.query.set(query.into());
    }

    pub fn visible(&self) -> Vec<&Location> {
        let query = self.query.get();
        filter_by_city(&self.locations, &query)
    }

    /// Select by id among the visible rows. Returns the chosen city.
    pub fn select(&self, id: u32) -> Option<String> {
        let city = self
            .visible()
            .into_iter()
            .find(|location| location.id == id)
            .map(|location| location.city.clone())?;
        log::debug!("{} picked {city}", self.kind.label());
        self.selected.set(Some(city.clone()));
        self.sheet.close();
        Some(city)
    }
}

#[cfg(test)]
#[path = "tests/picker_tests.rs"]
mod tests;
