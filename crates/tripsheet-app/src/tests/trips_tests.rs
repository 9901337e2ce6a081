use super::*;

const TRIPS: &str = r#"[
  {
    "id": "t1",
    "carType": "Minibus",
    "companyId": "c1",
    "createdAt": "2024-11-02T08:00:00Z",
    "dateTime": "2024-11-05T07:30:00Z",
    "departureCity": "Nouakchott",
    "destinationCity": "Nouadhibou",
    "price": 1500,
    "route": "Nouakchott - Nouadhibou",
    "seatsAvailable": 14,
    "seatsBooked": 3,
    "status": "Active"
  },
  {
    "id": "t2",
    "companyId": "missing",
    "dateTime": "2024-11-06T09:00:00Z",
    "departureCity": "Atar",
    "destinationCity": "Nouakchott",
    "price": 950.5
  }
]"#;

const COMPANIES: &str = r#"[
  { "id": "c1", "name": "Sahel Transport", "logoUrl": "https://x/logo.png", "phone": "+222 45 00 00 00" }
]"#;

struct FailingCompanies(JsonTripSource);

impl TripSource for FailingCompanies {
    fn fetch_trips(&self) -> Result<Vec<Trip>, AppError> {
        self.0.fetch_trips()
    }

    fn fetch_company(&self, _id: &str) -> Result<Option<Company>, AppError> {
        Err(AppError::backend("unavailable"))
    }
}

struct FailingTrips;

impl TripSource for FailingTrips {
    fn fetch_trips(&self) -> Result<Vec<Trip>, AppError> {
        Err(AppError::backend("Missing or insufficient permissions."))
    }

    fn fetch_company(&self, _id: &str) -> Result<Option<Company>, AppError> {
        panic!("companies must not be fetched when trips fail")
    }
}

#[test]
fn camel_case_documents_deserialize() {
    let source = JsonTripSource::from_json(TRIPS, COMPANIES).unwrap();
    let trips = source.fetch_trips().unwrap();
    assert_eq!(trips[0].car_type, "Minibus");
    assert_eq!(trips[0].seats_left(), 11);
    assert!(trips[0].is_active());
    assert!(!trips[1].is_active());
    assert_eq!(trips[0].route_label(), "Nouakchott - Nouadhibou");
    assert_eq!(trips[1].route_label(), "Atar - Nouakchott");
}

#[test]
fn join_attaches_known_companies_only() {
    let source = JsonTripSource::from_json(TRIPS, COMPANIES).unwrap();
    let listings = load_trip_listings(&source).unwrap();

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].company_name(), "Sahel Transport");
    assert_eq!(listings[0].company_phone(), "+222 45 00 00 00");
    assert_eq!(listings[1].company, None);
    assert_eq!(listings[1].company_name(), "Unknown Company");
    assert_eq!(listings[1].company_phone(), "N/A");
}

#[test]
fn company_failure_yields_missing_company() {
    let source = FailingCompanies(JsonTripSource::from_json(TRIPS, COMPANIES).unwrap());
    let listings = load_trip_listings(&source).unwrap();
    assert!(listings.iter().all(|listing| listing.company.is_none()));
}

#[test]
fn trip_failure_yields_no_partial_list() {
    let err = load_trip_listings(&FailingTrips).unwrap_err();
    assert_eq!(err.to_string(), "Missing or insufficient permissions.");
}

#[test]
fn prices_are_grouped() {
    assert_eq!(format_price(0.0), "0 MRU");
    assert_eq!(format_price(950.0), "950 MRU");
    assert_eq!(format_price(1500.0), "1,500 MRU");
    assert_eq!(format_price(1234567.0), "1,234,567 MRU");
    assert_eq!(format_price(950.5), "950.5 MRU");
    assert_eq!(format_price(12.3456), "12.346 MRU");
    assert_eq!(format_price(-2500.0), "-2,500 MRU");
}

#[test]
fn trip_without_company_is_still_listed() {
    let trips = r#"[
      { "id": "t3", "dateTime": "2024-11-07T18:05:00Z", "departureCity": "Kiffa",
        "destinationCity": "Rosso", "price": 700 }
    ]"#;
    let source = FailingCompanies(JsonTripSource::from_json(trips, COMPANIES).unwrap());
    let listings = load_trip_listings(&source).unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].trip.company_id, "");
    assert_eq!(listings[0].company_name(), "Unknown Company");
}

#[test]
fn departure_splits_into_date_and_time() {
    let source = JsonTripSource::from_json(TRIPS, COMPANIES).unwrap();
    let trips = source.fetch_trips().unwrap();
    assert_eq!(trips[0].date_label(), "11/5/2024");
    assert_eq!(trips[0].time_label(), "07:30 AM");
    assert_eq!(trips[1].time_label(), "09:00 AM");

    let mut evening = trips[0].clone();
    evening.date_time = "2024-12-31T21:45:00+01:00".into();
    assert_eq!(evening.date_label(), "12/31/2024");
    assert_eq!(evening.time_label(), "09:45 PM");

    evening.date_time = "2025-01-02T00:15:00".into();
    assert_eq!(evening.time_label(), "12:15 AM");

    evening.date_time = "soon".into();
    assert_eq!(evening.departure(), None);
    assert_eq!(evening.date_label(), "soon");
    assert_eq!(evening.time_label(), "");
}
