//! Screens and the root stacks that group them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Home,
    Explore,
    Bookings,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Explore, Tab::Bookings, Tab::Settings];
}

/// Which end of a trip a location picker fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    Departure,
    Destination,
}

impl LocationKind {
    pub fn label(self) -> &'static str {
        match self {
            LocationKind::Departure => "Departure",
            LocationKind::Destination => "Destination",
        }
    }
}

/// Every screen, with the parameters it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Onboarding,
    Welcome,
    Login,
    Signup,
    ForgotPassword,
    Inside { tab: Tab },
    Trips,
    LocationPicker { kind: LocationKind },
}

/// Top-level navigator, chosen from the session and the onboarding flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootStack {
    Onboarding,
    Unauthenticated,
    Authenticated,
}

impl RootStack {
    pub fn select(signed_in: bool, viewed_onboarding: bool) -> Self {
        match (signed_in, viewed_onboarding) {
            (true, _) => RootStack::Authenticated,
            (false, true) => RootStack::Unauthenticated,
            (false, false) => RootStack::Onboarding,
        }
    }

    pub fn initial_route(self) -> Route {
        match self {
            RootStack::Onboarding => Route::Onboarding,
            RootStack::Unauthenticated => Route::Welcome,
            RootStack::Authenticated => Route::Inside { tab: Tab::Home },
        }
    }

    /// Whether `route` can be reached without switching stacks.
    pub fn contains(self, route: &Route) -> bool {
        match self {
            RootStack::Onboarding | RootStack::Unauthenticated => matches!(
                route,
                Route::Onboarding
                    | Route::Welcome
                    | Route::Login
                    | Route::Signup
                    | Route::ForgotPassword
            ),
            RootStack::Authenticated => matches!(
                route,
                Route::Inside { .. } | Route::Trips | Route::LocationPicker { .. }
            ),
        }
    }
}
