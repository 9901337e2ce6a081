//! Signed-in user and the root stack derived from it.

use tripsheet_core::{MutableState, Subscription};

use crate::error::AppError;
use crate::preferences::Preferences;
use crate::routes::RootStack;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub uid: String,
    pub email: String,
}

pub trait AuthService {
    fn sign_in(&self, email: &str, password: &str) -> Result<User, AppError>;
    /// Create an account. The new user is signed in.
    fn sign_up(&self, email: &str, password: &str) -> Result<User, AppError>;
    fn send_password_reset(&self, email: &str) -> Result<(), AppError>;
    fn sign_out(&self) -> Result<(), AppError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct SessionState {
    user: Option<User>,
    viewed_onboarding: bool,
}

impl SessionState {
    fn root_stack(&self) -> RootStack {
        RootStack::select(self.user.is_some(), self.viewed_onboarding)
    }
}

/// Owns the session and recomputes the root stack on every change.
#[derive(Clone)]
pub struct SessionGate {
    state: MutableState<SessionState>,
    preferences: Preferences,
}

impl SessionGate {
    pub fn load(preferences: Preferences) -> Result<Self, AppError> {
        let viewed_onboarding = preferences.has_viewed_onboarding()?;
        Ok(Self {
            state: MutableState::new(SessionState {
                user: None,
                viewed_onboarding,
            }),
            preferences,
        })
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|state| state.user.clone())
    }

    pub fn root_stack(&self) -> RootStack {
        self.state.with(SessionState::root_stack)
    }

    /// Called with the new stack after every session change.
    pub fn subscribe(&self, observer: impl Fn(RootStack) + 'static) -> Subscription {
        self.state.subscribe(move |state| observer(state.root_stack()))
    }

    /// Auth state pushed by the backend (restored session, remote sign-out).
    pub fn set_user(&self, user: Option<User>) {
        self.state.update(|state| state.user = user);
    }

    pub fn finish_onboarding(&self) -> Result<(), AppError> {
        self.preferences.mark_onboarding_viewed()?;
        self.state.update(|state| state.viewed_onboarding = true);
        Ok(())
    }

    pub fn sign_in(
        &self,
        auth: &dyn AuthService,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        let user = auth.sign_in(email, password)?;
        log::info!("signed in as {}", user.email);
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    pub fn sign_up(
        &self,
        auth: &dyn AuthService,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        let user = auth.sign_up(email, password)?;
        log::info!("registered {}", user.email);
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    /// Rejects an empty address before reaching the auth service.
    pub fn send_password_reset(&self, auth: &dyn AuthService, email: &str) -> Result<(), AppError> {
        if email.is_empty() {
            return Err(AppError::MissingEmail);
        }
        auth.send_password_reset(email)
    }

    pub fn sign_out(&self, auth: &dyn AuthService) -> Result<(), AppError> {
        auth.sign_out()?;
        self.set_user(None);
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
