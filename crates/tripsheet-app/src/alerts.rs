use crate::error::AppError;

/// A blocking message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn trips_fetch_failed(error: &AppError) -> Self {
        Self::new(
            "Error",
            format!(
                "Failed to fetch trips: {}\n\nPlease check your internet connection and try again.",
                error.user_message()
            ),
        )
    }

    pub fn sign_in_failed(error: &AppError) -> Self {
        Self::new("Sign in", format!("Sign in failed, {}", error.user_message()))
    }

    pub fn sign_up_succeeded() -> Self {
        Self::new("Sign up", "Check your emails!")
    }

    pub fn sign_up_failed(error: &AppError) -> Self {
        Self::new("Sign up", format!("Registration failed, {}", error.user_message()))
    }

    pub fn password_reset_sent() -> Self {
        Self::new(
            "Success",
            "A password reset link has been sent to your email address.",
        )
    }

    /// A missing address is reported as is; backend failures are prefixed.
    pub fn password_reset_failed(error: &AppError) -> Self {
        let message = match error {
            AppError::MissingEmail => error.user_message(),
            other => format!(
                "Failed to send password reset email: {}",
                other.user_message()
            ),
        };
        Self::new("Error", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_alert_carries_raw_backend_message() {
        let alert = Alert::trips_fetch_failed(&AppError::backend("permission-denied"));
        assert_eq!(alert.title, "Error");
        assert_eq!(
            alert.message,
            "Failed to fetch trips: permission-denied\n\nPlease check your internet connection and try again."
        );
    }

    #[test]
    fn sign_up_alerts() {
        assert_eq!(Alert::sign_up_succeeded().message, "Check your emails!");
        let alert = Alert::sign_up_failed(&AppError::auth("auth/email-already-in-use"));
        assert_eq!(alert.message, "Registration failed, auth/email-already-in-use");
    }

    #[test]
    fn password_reset_alerts() {
        let missing = Alert::password_reset_failed(&AppError::MissingEmail);
        assert_eq!(missing, Alert::new("Error", "Please enter your email address."));

        let failed = Alert::password_reset_failed(&AppError::auth("auth/user-not-found"));
        assert_eq!(
            failed.message,
            "Failed to send password reset email: auth/user-not-found"
        );
        assert_eq!(Alert::password_reset_sent().title, "Success");
    }

    #[test]
    fn sign_in_alert_prefixes_message() {
        let alert = Alert::sign_in_failed(&AppError::auth("auth/wrong-password"));
        assert_eq!(alert.message, "Sign in failed, auth/wrong-password");
    }
}
