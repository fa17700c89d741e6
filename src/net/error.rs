//! Client-wide error taxonomy.
//!
//! Four kinds: transport failures (`Network`), 401/403 (`Auth`),
//! client-side checks (`Validation`), and every other non-2xx (`Server`).
//! All of them surface as transient toasts; nothing retries automatically.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response received.
    #[error("network error: {0}")]
    Network(String),

    /// The session cookie was missing, expired, or insufficient.
    #[error("not authorized (status {status})")]
    Auth { status: u16 },

    /// Rejected client-side before any request was made.
    #[error("{0}")]
    Validation(String),

    /// The server answered with a non-2xx outside the auth range.
    #[error("server error (status {status})")]
    Server { status: u16, message: Option<String> },
}

impl ApiError {
    /// Classify a non-2xx response status.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 | 403 => Self::Auth { status },
            _ => Self::Server { status, message },
        }
    }

    /// Text suitable for a toast. Prefers whatever the server said.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Network error. Please check your connection.".to_owned(),
            Self::Auth { .. } => "You are not authorized for this action.".to_owned(),
            Self::Validation(msg) => msg.clone(),
            Self::Server {
                message: Some(msg), ..
            } => msg.clone(),
            Self::Server { status, .. } => format!("Request failed with status {status}"),
        }
    }
}

/// Pull a human-readable message out of an error body, preferring
/// `message` over `error`.
pub fn body_message(value: &serde_json::Value) -> Option<String> {
    for key in ["message", "error"] {
        if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
            if !text.is_empty() {
                return Some(text.to_owned());
            }
        }
    }
    None
}
