//! Start-up to trip list, the way the app walks through it.

use std::rc::Rc;

use tempfile::TempDir;
use tripsheet_app::{
    format_price, load_trip_listings, Alert, AppError, AuthService, ColorScheme, JsonFileStore,
    JsonTripSource, Preferences, RootStack, Route, SessionGate, Tab, ThemeMode, ThemeStore,
    TripSource, User,
};

struct StaticAuth;

impl AuthService for StaticAuth {
    fn sign_in(&self, email: &str, password: &str) -> Result<User, AppError> {
        if password.len() >= 6 {
            Ok(User {
                uid: "42".into(),
                email: email.into(),
            })
        } else {
            Err(AppError::auth("Firebase: Error (auth/invalid-credential)."))
        }
    }

    fn sign_up(&self, _email: &str, _password: &str) -> Result<User, AppError> {
        Err(AppError::auth("Firebase: Error (auth/email-already-in-use)."))
    }

    fn send_password_reset(&self, _email: &str) -> Result<(), AppError> {
        Err(AppError::auth("Firebase: Error (auth/user-not-found)."))
    }

    fn sign_out(&self) -> Result<(), AppError> {
        Ok(())
    }
}

struct Offline;

impl TripSource for Offline {
    fn fetch_trips(&self) -> Result<Vec<tripsheet_app::Trip>, AppError> {
        Err(AppError::backend("Failed to get document because the client is offline."))
    }

    fn fetch_company(&self, _id: &str) -> Result<Option<tripsheet_app::Company>, AppError> {
        Ok(None)
    }
}

fn preferences_at(dir: &TempDir) -> Preferences {
    let store = JsonFileStore::open(dir.path().join("storage.json")).expect("open store");
    Preferences::new(Rc::new(store))
}

#[test]
fn second_launch_skips_onboarding_and_keeps_theme() {
    let dir = TempDir::new().unwrap();
    {
        let preferences = preferences_at(&dir);
        let gate = SessionGate::load(preferences.clone()).unwrap();
        assert_eq!(gate.root_stack().initial_route(), Route::Onboarding);
        gate.finish_onboarding().unwrap();
        ThemeStore::load(preferences, ColorScheme::Light)
            .unwrap()
            .set_mode(ThemeMode::Dark)
            .unwrap();
    }

    let preferences = preferences_at(&dir);
    let gate = SessionGate::load(preferences.clone()).unwrap();
    assert_eq!(gate.root_stack(), RootStack::Unauthenticated);
    assert_eq!(gate.root_stack().initial_route(), Route::Welcome);
    let theme = ThemeStore::load(preferences, ColorScheme::Light).unwrap();
    assert_eq!(theme.theme().scheme, ColorScheme::Dark);
}

#[test]
fn failed_sign_in_surfaces_an_alert() {
    let gate = SessionGate::load(Preferences::in_memory()).unwrap();
    let err = gate.sign_in(&StaticAuth, "driver@trip.mr", "123").unwrap_err();
    assert_eq!(
        Alert::sign_in_failed(&err).message,
        "Sign in failed, Firebase: Error (auth/invalid-credential)."
    );
    assert_eq!(gate.root_stack(), RootStack::Onboarding);

    gate.sign_in(&StaticAuth, "driver@trip.mr", "123456").unwrap();
    assert_eq!(
        gate.root_stack().initial_route(),
        Route::Inside { tab: Tab::Home }
    );
}

#[test]
fn registration_and_reset_failures_surface_alerts() {
    let gate = SessionGate::load(Preferences::in_memory()).unwrap();

    let err = gate.sign_up(&StaticAuth, "driver@trip.mr", "123456").unwrap_err();
    assert_eq!(
        Alert::sign_up_failed(&err).message,
        "Registration failed, Firebase: Error (auth/email-already-in-use)."
    );
    assert_eq!(gate.user(), None);

    let err = gate.send_password_reset(&StaticAuth, "").unwrap_err();
    assert_eq!(
        Alert::password_reset_failed(&err).message,
        "Please enter your email address."
    );
    let err = gate
        .send_password_reset(&StaticAuth, "driver@trip.mr")
        .unwrap_err();
    assert_eq!(
        Alert::password_reset_failed(&err).message,
        "Failed to send password reset email: Firebase: Error (auth/user-not-found)."
    );
}

#[test]
fn trip_list_renders_or_alerts() {
    let source = JsonTripSource::from_json(
        r#"[{"id":"t","companyId":"c","dateTime":"2024-01-01T10:00:00Z",
             "departureCity":"Rosso","destinationCity":"Kaédi","price":2300}]"#,
        r#"[{"id":"c","name":"Chinguetti Lines"}]"#,
    )
    .unwrap();
    let listings = load_trip_listings(&source).unwrap();
    assert_eq!(listings[0].company_name(), "Chinguetti Lines");
    assert_eq!(format_price(listings[0].trip.price), "2,300 MRU");

    let err = load_trip_listings(&Offline).unwrap_err();
    let alert = Alert::trips_fetch_failed(&err);
    assert!(alert
        .message
        .starts_with("Failed to fetch trips: Failed to get document because the client is offline."));
}
