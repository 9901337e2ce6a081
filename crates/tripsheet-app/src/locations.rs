use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub city: String,
    pub region: String,
    pub country: String,
}

impl Location {
    pub fn new(
        id: u32,
        city: impl Into<String>,
        region: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            id,
            city: city.into(),
            region: region.into(),
            country: country.into(),
        }
    }

    /// `"City, Region, Country"` as shown in the picker rows.
    pub fn label(&self) -> String {
        format!("{}, {}, {}", self.city, self.region, self.country)
    }
}

/// Locations whose city contains `query`, ignoring case. An empty query
/// keeps everything.
pub fn filter_by_city<'a>(locations: &'a [Location], query: &str) -> Vec<&'a Location> {
    let query = query.trim().to_lowercase();
    locations
        .iter()
        .filter(|location| location.city.to_lowercase().contains(&query))
        .collect()
}
