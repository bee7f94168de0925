//! Login request and response handling
//!
//! The backend is an external service. This module only knows the shape of
//! its `POST /api/v1/login` exchange and how to classify the outcome.

use crate::credentials::Credentials;
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown when required form fields are empty
pub const MISSING_INPUT_MESSAGE: &str = "Username and password are required.";

/// Shown when the backend rejects the login without a message of its own
pub const REJECTED_FALLBACK_MESSAGE: &str = "Invalid credentials. Please try again.";

/// Shown when the request could not reach the backend
pub const NETWORK_ERROR_MESSAGE: &str = "Login failed. Check your connection.";

/// Shown when the session could not be written after a successful login
pub const STORAGE_ERROR_MESSAGE: &str = "Signed in, but the session could not be saved.";

/// JSON body sent to the login endpoint
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            username: &credentials.username,
            password: &credentials.password,
        }
    }
}

/// JSON body returned by the login endpoint.
///
/// Every field is optional; the backend sends `access_token` on success and
/// `msg` (or `message`) on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default, alias = "msg")]
    pub message: Option<String>,
}

/// Raw reply from the login endpoint: HTTP status plus undecoded body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginReply {
    pub status: u16,
    pub body: String,
}

impl LoginReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Classify the reply, returning the issued token on success.
    ///
    /// Success needs a 2xx status and a non-empty `access_token`. Anything
    /// else, including a body that is not JSON, is a rejection.
    pub fn into_token(self) -> Result<String, LoginError> {
        // A browser `response.json()` would throw on a non-JSON body and land
        // in the connectivity error. Here only a failed request is a network
        // error; a reply we cannot parse is a rejection.
        let parsed: LoginResponse = serde_json::from_str(&self.body).unwrap_or_default();
        let ok = (200..300).contains(&self.status);

        match parsed.access_token {
            Some(token) if ok && !token.is_empty() => Ok(token),
            _ => Err(LoginError::Rejected {
                status: self.status,
                message: parsed
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_string()),
            }),
        }
    }
}

/// Why a login attempt did not produce a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    /// A required form field was left empty; no request was sent
    #[error("Missing required field: {field}")]
    MissingInput { field: &'static str },

    /// The backend answered but did not issue a token
    #[error("Login rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// The token was issued but could not be persisted
    #[error("Failed to store session: {0}")]
    Storage(#[from] StorageError),
}

impl LoginError {
    /// Text to show the user on the login page
    pub fn user_message(&self) -> String {
        match self {
            LoginError::MissingInput { .. } => MISSING_INPUT_MESSAGE.to_string(),
            LoginError::Rejected { message, .. } => message.clone(),
            LoginError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            LoginError::Storage(_) => STORAGE_ERROR_MESSAGE.to_string(),
        }
    }
}
