//! Error types for the Tuya client.
//!
//! This module provides a unified error type with explicit variants for
//! input validation, missing credentials, transport, protocol and
//! cancellation failures.

use std::fmt;
use thiserror::Error;

/// The unified error type for Tuya client operations.
///
/// Every variant propagates unchanged to the caller; the client never
/// retries or suppresses a failure.
#[derive(Debug, Error)]
pub enum Error {
    /// Input validation errors (missing identifier, malformed id or URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Authentication errors (no usable access token).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Network transport errors (connection, timeout, undecodable body).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Protocol errors (non-success status or a failed cloud envelope).
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The operation was cancelled while in flight.
    #[error("operation cancelled")]
    Cancelled,
}

impl Error {
    /// Returns true if the failure came from the transport call itself,
    /// either at the network level or as a rejected response.
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Protocol(_))
    }

    /// Returns true if no access token was available for an authenticated call.
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Error::Auth(AuthError::MissingCredential { .. }))
    }

    /// Returns true if the operation was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// The response body could not be decoded into the expected type.
    #[error("failed to decode response: {message}")]
    Decode { message: String },
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Neither an explicit token nor an established session was available.
    #[error(
        "missing `{parameter}` for a request that requires authentication; \
         provide it or establish a session on the client first"
    )]
    MissingCredential { parameter: &'static str },
}

/// Cloud error code for a bad request signature.
pub const CODE_SIGN_INVALID: i64 = 1004;

/// Cloud error code for an invalid access token.
pub const CODE_TOKEN_INVALID: i64 = 1010;

/// Protocol-level errors from API responses.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Cloud error code (if present).
    pub code: Option<i64>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, code: Option<i64>, message: Option<String>) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
            || self.code == Some(CODE_TOKEN_INVALID)
            || self.code == Some(CODE_SIGN_INVALID)
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// A domain object was passed without the identifier the request needs.
    #[error("{kind} has no identifier")]
    MissingIdentifier { kind: &'static str },

    /// An identifier cannot be substituted into a resource path.
    #[error("invalid identifier '{value}': {reason}")]
    Identifier { value: String, reason: String },

    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_names_parameter_and_remedy() {
        let err: Error = AuthError::MissingCredential {
            parameter: "access_token",
        }
        .into();
        let message = err.to_string();
        assert!(message.contains("access_token"));
        assert!(message.contains("establish a session"));
        assert!(err.is_missing_credential());
        assert!(!err.is_transport_failure());
    }

    #[test]
    fn protocol_error_display() {
        let err = ProtocolError::new(200, Some(1106), Some("permission deny".to_string()));
        assert_eq!(err.to_string(), "HTTP 200 [1106]: permission deny");
        assert!(!err.is_auth_error());

        let err = ProtocolError::new(502, None, None);
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn token_invalid_is_auth_error() {
        let err = ProtocolError::new(200, Some(CODE_TOKEN_INVALID), None);
        assert!(err.is_auth_error());
        assert!(Error::Protocol(err).is_transport_failure());
    }

    #[test]
    fn decode_errors_are_transport_failures() {
        let json_err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err = Error::from(json_err);
        assert!(matches!(err, Error::Transport(TransportError::Decode { .. })));
        assert!(err.is_transport_failure());
    }
}
