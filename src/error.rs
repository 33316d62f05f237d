//! Client Error Types
//!
//! Every remote-call wrapper in this crate returns `Result<T, ClientError>`;
//! there are no ad hoc success flags. Each variant renders as a single
//! human-readable message for the view layer to display.
//!
//! # Error Categories
//!
//! - `Auth` - login or registration rejected by the server
//! - `Resolution` - identity lookup could not produce an internal user id
//! - `Gateway` - a profile or feed endpoint returned a non-success status
//! - `Network` - transport-level failure
//! - `Storage` - the session file could not be read or written
//!
//! Token decode failures are deliberately NOT an error: a malformed token
//! collapses to "no claims" (see `token::decode_claims`), which expiry checks
//! treat as expired.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Failures surfaced to callers of the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Credential failure on login or registration. The message is the
    /// server-provided one when the body carries it, else a generic
    /// statused message.
    #[error("{message}")]
    Auth {
        /// Human-readable error message
        message: String,
    },

    /// Identity resolution dead end: no token, no subject claim, or no
    /// profile matching the subject email.
    #[error("{message}")]
    Resolution {
        /// Human-readable error message
        message: String,
    },

    /// Non-success status from a profile, feed, or directory endpoint.
    #[error("{message}")]
    Gateway {
        /// HTTP status code, when the server responded at all
        status: Option<u16>,
        /// Human-readable error message
        message: String,
    },

    /// Transport failure (connection refused, DNS, malformed response body).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Session storage failure.
    #[error("Storage error: {message}")]
    Storage {
        /// Human-readable error message
        message: String,
    },
}

impl ClientError {
    /// Create a new authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a new resolution error
    pub fn resolution(message: impl Into<String>) -> Self {
        Self::Resolution {
            message: message.into(),
        }
    }

    /// Create a new gateway error
    pub fn gateway(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Gateway {
            status,
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Map a rejected login/register response, consuming its body. The
    /// server's `message` field wins; anything else becomes a statused
    /// generic message.
    pub(crate) async fn auth_failure(response: reqwest::Response) -> Self {
        let status = response.status();
        let message = structured_message(response)
            .await
            .unwrap_or_else(|| statused_message(status));
        Self::Auth { message }
    }

    /// Map a rejected gateway response, consuming its body.
    pub(crate) async fn gateway_failure(response: reqwest::Response) -> Self {
        let status = response.status();
        let message = structured_message(response)
            .await
            .unwrap_or_else(|| statused_message(status));
        Self::Gateway {
            status: Some(status.as_u16()),
            message,
        }
    }

    /// Like `gateway_failure`, but when the body is not structured its raw
    /// text is kept as the message. Profile fetch uses this: the backend
    /// sometimes answers with a bare text body there.
    pub(crate) async fn gateway_failure_with_text(response: reqwest::Response) -> Self {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let message = parse_message(&text)
            .or_else(|| {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| statused_message(status));
        Self::Gateway {
            status: Some(status.as_u16()),
            message,
        }
    }
}

/// Structured error body used by the backend's exception handler.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn statused_message(status: StatusCode) -> String {
    format!(
        "Error {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("request failed")
    )
}

fn parse_message(text: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(text)
        .ok()
        .and_then(|body| body.message)
}

async fn structured_message(response: reqwest::Response) -> Option<String> {
    let text = response.text().await.ok()?;
    parse_message(&text)
}
