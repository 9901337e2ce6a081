use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    /// A backend call failed; the message is shown to the user verbatim.
    Backend(String),
    /// The auth service rejected a request.
    Auth(String),
    /// A form was submitted without an email address.
    MissingEmail,
    Io { path: PathBuf, source: io::Error },
    Json { path: Option<PathBuf>, source: serde_json::Error },
}

impl AppError {
    pub fn backend(message: impl Into<String>) -> Self {
        AppError::Backend(message.into())
    }

    pub fn auth(message: impl Into<String>) -> Self {
        AppError::Auth(message.into())
    }

    /// The message alerts carry.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Backend(message) | AppError::Auth(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Backend(message) => write!(f, "{message}"),
            AppError::Auth(message) => write!(f, "{message}"),
            AppError::MissingEmail => f.write_str("Please enter your email address."),
            AppError::Io { path, source } => write!(f, "{}: {source}", path.display()),
            AppError::Json {
                path: Some(path),
                source,
            } => write!(f, "invalid JSON in {}: {source}", path.display()),
            AppError::Json { path: None, source } => write!(f, "invalid JSON: {source}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io { source, .. } => Some(source),
            AppError::Json { source, .. } => Some(source),
            AppError::Backend(_) | AppError::Auth(_) | AppError::MissingEmail => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(source: serde_json::Error) -> Self {
        AppError::Json { path: None, source }
    }
}
