//! Core error types for the deal desk.
//!
//! Every error is terminal for the user action that triggered it: nothing in
//! this crate retries. Callers surface [`Error::user_message`] to the user.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the deal desk.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A non-2xx response from the mock API.
    #[error("Request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Input validation errors, raised before a request is made or at the API
/// boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("All fields required")]
    MissingFields,

    #[error("Invalid role")]
    InvalidRole,

    #[error("{0}")]
    InvalidInput(String),
}

impl Error {
    /// Message to show for a failed user action.
    ///
    /// Validation errors are shown as-is so the form can render them inline;
    /// everything else collapses to the caller's generic `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Validation(e) => e.to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

// === From implementations for common error types ===

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Repository(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_keep_their_message() {
        let err = Error::from(ValidationError::MissingFields);
        assert_eq!(err.user_message("Calculation failed"), "All fields required");
        assert!(err.is_validation());
    }

    #[test]
    fn other_errors_collapse_to_fallback() {
        let err = Error::Network("connection refused".to_string());
        assert_eq!(err.user_message("Calculation failed"), "Calculation failed");

        let err = Error::Api {
            status: 400,
            message: "Invalid role".to_string(),
        };
        assert_eq!(err.user_message("Login failed"), "Login failed");
    }
}
