//! Trip documents, their companies, and the joined listing.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    #[serde(default)]
    pub car_type: String,
    /// Empty when the document names no company.
    #[serde(default)]
    pub company_id: String,
    #[serde(default)]
    pub created_at: String,
    pub date_time: String,
    pub departure_city: String,
    pub destination_city: String,
    pub price: f64,
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub seats_available: u32,
    #[serde(default)]
    pub seats_booked: u32,
    #[serde(default)]
    pub status: String,
}

impl Trip {
    pub fn seats_left(&self) -> u32 {
        self.seats_available.saturating_sub(self.seats_booked)
    }

    pub fn is_active(&self) -> bool {
        self.status == "Active"
    }

    /// Departure as written in the document, without converting zones.
    ///
    /// Accepts RFC 3339 and offset-less ISO timestamps.
    pub fn departure(&self) -> Option<NaiveDateTime> {
        DateTime::parse_from_rfc3339(&self.date_time)
            .map(|date_time| date_time.naive_local())
            .or_else(|_| NaiveDateTime::parse_from_str(&self.date_time, "%Y-%m-%dT%H:%M:%S%.f"))
            .ok()
    }

    /// `"11/5/2024"`, or the raw timestamp when it cannot be parsed.
    pub fn date_label(&self) -> String {
        match self.departure() {
            Some(departure) => departure.format("%-m/%-d/%Y").to_string(),
            None => self.date_time.clone(),
        }
    }

    /// `"07:30 AM"`, or an empty string when the timestamp cannot be parsed.
    pub fn time_label(&self) -> String {
        self.departure()
            .map(|departure| departure.format("%I:%M %p").to_string())
            .unwrap_or_default()
    }

    /// The stored route, or `"From - To"` when the document has none.
    pub fn route_label(&self) -> String {
        if self.route.is_empty() {
            format!("{} - {}", self.departure_city, self.destination_city)
        } else {
            self.route.clone()
        }
    }
}

/// A trip with its company attached, when the company could be found.
#[derive(Debug, Clone, PartialEq)]
pub struct TripListing {
    pub trip: Trip,
    pub company: Option<Company>,
}

impl TripListing {
    pub fn company_name(&self) -> &str {
        self.company
            .as_ref()
            .map_or("Unknown Company", |company| company.name.as_str())
    }

    pub fn company_phone(&self) -> &str {
        match &self.company {
            Some(company) if !company.phone.is_empty() => &company.phone,
            _ => "N/A",
        }
    }
}

/// Document store holding the `trips` and `companies` collections.
pub trait TripSource {
    fn fetch_trips(&self) -> Result<Vec<Trip>, AppError>;
    fn fetch_company(&self, id: &str) -> Result<Option<Company>, AppError>;
}

/// Fetch every trip and attach its company.
///
/// A trip-fetch failure fails the whole load. A company that is missing,
/// unnamed or fails to load leaves that listing's company empty.
pub fn load_trip_listings(source: &dyn TripSource) -> Result<Vec<TripListing>, AppError> {
    let trips = source.fetch_trips()?;
    log::debug!("fetched {} trips", trips.len());
    let listings = trips
        .into_iter()
        .map(|trip| {
            if trip.company_id.is_empty() {
                log::debug!("trip {} names no company", trip.id);
                return TripListing {
                    trip,
                    company: None,
                };
            }
            let company = match source.fetch_company(&trip.company_id) {
                Ok(company) => company,
                Err(err) => {
                    log::warn!("company {} for trip {}: {err}", trip.company_id, trip.id);
                    None
                }
            };
            TripListing { trip, company }
        })
        .collect();
    Ok(listings)
}

/// `1500` -> `"1,500 MRU"`. Up to three fraction digits, trailing zeros
/// dropped.
pub fn format_price(price: f64) -> String {
    format!("{} MRU", group_thousands(price))
}

fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.3}", value.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + fraction.len() + 2);
    if value < 0.0 && (whole != "0" || !fraction.is_empty()) {
        grouped.push('-');
    }
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Trips and companies read from two JSON arrays.
#[derive(Debug, Clone, Default)]
pub struct JsonTripSource {
    trips: Vec<Trip>,
    companies: HashMap<String, Company>,
}

impl JsonTripSource {
    pub fn new(trips: Vec<Trip>, companies: Vec<Company>) -> Self {
        let companies = companies
            .into_iter()
            .map(|company| (company.id.clone(), company))
            .collect();
        Self { trips, companies }
    }

    pub fn from_json(trips: &str, companies: &str) -> Result<Self, AppError> {
        Ok(Self::new(
            serde_json::from_str(trips)?,
            serde_json::from_str(companies)?,
        ))
    }

    pub fn from_files(trips: &Path, companies: &Path) -> Result<Self, AppError> {
        Ok(Self::new(read_json(trips)?, read_json(companies)?))
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| AppError::Json {
        path: Some(path.to_path_buf()),
        source,
    })
}

impl TripSource for JsonTripSource {
    fn fetch_trips(&self) -> Result<Vec<Trip>, AppError> {
        Ok(self.trips.clone())
    }

    fn fetch_company(&self, id: &str) -> Result<Option<Company>, AppError> {
        Ok(self.companies.get(id).cloned())
    }
}

#[cfg(test)]
#[path = "tests/trips_tests.rs"]
mod tests;
