//! Render the joined trip listing.

use std::fmt::Write as _;
use std::path::Path;

use tripsheet_app::{format_price, load_trip_listings, Alert, JsonTripSource, TripListing};

/// Load both files and join them. Failures come back as the alert the app
/// would show.
pub fn load(trips: &Path, companies: &Path) -> Result<Vec<TripListing>, Alert> {
    JsonTripSource::from_files(trips, companies)
        .and_then(|source| load_trip_listings(&source))
        .map_err(|err| {
            log::error!("loading trips failed: {err}");
            Alert::trips_fetch_failed(&err)
        })
}

pub fn render(listings: &[TripListing]) -> String {
    if listings.is_empty() {
        return "No trips found\n".to_owned();
    }
    let mut out = String::new();
    for listing in listings {
        let trip = &listing.trip;
        let _ = writeln!(
            out,
            "{}  [{}]  {}",
            trip.route_label(),
            listing.company_name(),
            format_price(trip.price)
        );
        let _ = writeln!(
            out,
            "    {} -> {}  Date: {}  Time: {}  ({}, {} seats left, {})",
            trip.departure_city,
            trip.destination_city,
            trip.date_label(),
            trip.time_label(),
            if trip.car_type.is_empty() { "car" } else { trip.car_type.as_str() },
            trip.seats_left(),
            if trip.status.is_empty() { "Unknown" } else { trip.status.as_str() }
        );
        let _ = writeln!(out, "    contact: {}", listing.company_phone());
    }
    out
}
