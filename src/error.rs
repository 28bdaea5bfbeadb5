//! Error types for the Business Elements client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the client.
///
/// `Validation` and `Configuration` are raised locally, before any request
/// reaches the executor. Everything else comes back from the execution
/// collaborator and is propagated unchanged.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A required argument was missing or empty.
    #[error("{0}")]
    Validation(&'static str),

    /// An endpoint was requested by an unknown name or with the wrong
    /// number of path parameters.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request never produced an HTTP response.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Server { status: StatusCode, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse response JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing the local configuration failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status of a server rejection, if that is what this is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Server { status, .. } => Some(*status),
            Error::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Short message suitable for showing to a user.
    ///
    /// Server details are not echoed back; only the status class is described.
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(message) => (*message).to_string(),
            Error::Configuration(message) => format!("Configuration error: {}", message),
            Error::Server { status, .. } => match status.as_u16() {
                400 => "Invalid request. Check your parameters.".to_string(),
                401 => "Authentication failed. Run 'be login' first.".to_string(),
                403 => "Permission denied.".to_string(),
                404 => "Resource not found.".to_string(),
                409 => {
                    "Resource conflict. The resource may already exist or be in use.".to_string()
                },
                429 => "Rate limit exceeded. Please try again later.".to_string(),
                500..=599 => "Server temporarily unavailable. Please try again.".to_string(),
                _ => format!("Request failed with status {}.", status.as_u16()),
            },
            Error::Transport(_) => {
                "Request failed. Check your network connection and try again.".to_string()
            },
            Error::InvalidUrl(_) => "Invalid base URL.".to_string(),
            Error::Json(_) => "The server returned a malformed response.".to_string(),
            Error::Io(err) => format!("Could not access local configuration: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_displayed_verbatim() {
        let err = Error::Validation("An email address is required.");
        assert_eq!(err.to_string(), "An email address is required.");
        assert_eq!(err.user_message(), "An email address is required.");
    }

    #[test]
    fn test_server_error_user_message_hides_body() {
        let err = Error::Server {
            status: StatusCode::FORBIDDEN,
            body: "{\"internal\":\"secret detail\"}".to_string(),
        };
        assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
        assert_eq!(err.user_message(), "Permission denied.");
    }

    #[test]
    fn test_server_error_5xx() {
        let err = Error::Server {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: String::new(),
        };
        assert!(err.user_message().contains("temporarily unavailable"));
    }

    #[test]
    fn test_configuration_has_no_status() {
        let err = Error::Configuration("unknown endpoint 'nope'".to_string());
        assert_eq!(err.status(), None);
    }
}
