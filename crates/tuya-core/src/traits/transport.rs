//! Transport trait.

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::{AccessToken, Result};

/// HTTP methods used by the cloud API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request handed to a [`Transport`].
///
/// `path` is relative to the transport's base address and may include a
/// query string. `body` is already serialized JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub token: Option<AccessToken>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Create an unauthenticated request without a body.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            token: None,
            body: None,
        }
    }

    /// Attach the access token to present.
    pub fn with_token(mut self, token: AccessToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Attach a serialized JSON body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// The boundary between the client and the network.
///
/// An implementation performs exactly one call to `base + request.path`,
/// sends `request.body` when present and decodes the response into `R`.
/// It fails on connectivity, non-success responses and decode errors.
/// Dropping the returned future abandons the call.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request and decode its result.
    async fn send_request<R>(&self, request: ApiRequest) -> Result<R>
    where
        R: DeserializeOwned + Send + 'static;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder() {
        let request = ApiRequest::new(HttpMethod::Post, "/v1.0/devices/x/commands")
            .with_token(AccessToken::new("tok"))
            .with_body("{}");

        assert_eq!(request.method.to_string(), "POST");
        assert_eq!(request.token, Some(AccessToken::new("tok")));
        assert_eq!(request.body.as_deref(), Some("{}"));
    }
}
