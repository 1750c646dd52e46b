//! HTTP transport implementation.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};
use uuid::Uuid;

use tuya_core::error::{Error, ProtocolError, TransportError};
use tuya_core::{ApiRequest, ApiUrl, Credentials, HttpMethod, Result, Transport};

use crate::envelope::ApiEnvelope;
use crate::signing::RequestSigner;

/// Signed HTTP transport for one API base address.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base: ApiUrl,
    signer: RequestSigner,
}

impl HttpTransport {
    /// Create a transport for the given base address and credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base: ApiUrl, credentials: Credentials) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("tuya-http/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport_error)?;

        Ok(Self::with_client(client, base, credentials))
    }

    /// Create a transport over an existing `reqwest` client.
    pub fn with_client(client: reqwest::Client, base: ApiUrl, credentials: Credentials) -> Self {
        Self {
            client,
            base,
            signer: RequestSigner::new(credentials),
        }
    }

    /// Returns the base address this transport sends to.
    pub fn base(&self) -> &ApiUrl {
        &self.base
    }

    /// Handle an API response, unwrapping the envelope or the error.
    async fn handle_response<R: DeserializeOwned>(&self, response: reqwest::Response) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "API response");

        if status == StatusCode::NOT_FOUND {
            debug!("Resource not found");
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }

        if !status.is_success() {
            return Err(Error::Protocol(self.parse_error_response(response).await));
        }

        let body = response.bytes().await.map_err(transport_error)?;
        let envelope: ApiEnvelope = serde_json::from_slice(&body)?;
        trace!(success = envelope.success, t = ?envelope.t, "API envelope");

        if !envelope.success {
            return Err(ProtocolError::new(status.as_u16(), envelope.code, envelope.msg).into());
        }

        Ok(serde_json::from_value(
            envelope.result.unwrap_or(serde_json::Value::Null),
        )?)
    }

    /// Parse a non-success response, keeping the cloud code when present.
    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();

        let Ok(body) = response.text().await else {
            return ProtocolError::new(status, None, None);
        };

        match serde_json::from_str::<ApiEnvelope>(&body) {
            Ok(envelope) => ProtocolError::new(status, envelope.code, envelope.msg),
            Err(_) => {
                let message = Some(body.trim().to_string()).filter(|m| !m.is_empty());
                ProtocolError::new(status, None, message)
            }
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(base = %self.base, method = %request.method, path = %request.path))]
    async fn send_request<R>(&self, request: ApiRequest) -> Result<R>
    where
        R: DeserializeOwned + Send + 'static,
    {
        let url = self.base.endpoint(&request.path);
        let body = request.body.unwrap_or_default();
        debug!(%url, "API request");

        let headers = self
            .signer
            .sign(
                request.method,
                &self.base.resource_path(&request.path),
                body.as_bytes(),
                request.token.as_ref(),
                Utc::now().timestamp_millis(),
                &Uuid::new_v4().simple().to_string(),
            )?
            .into_header_map()?;

        let mut builder = self
            .client
            .request(reqwest_method(request.method), &url)
            .headers(headers);

        if !body.is_empty() {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        self.handle_response(response).await
    }
}

fn reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    let message = err.to_string();
    let transport = if err.is_timeout() {
        TransportError::Timeout { message }
    } else if err.is_connect() {
        TransportError::Connection { message }
    } else if err.is_decode() {
        TransportError::Decode { message }
    } else {
        TransportError::Http { message }
    };
    Error::Transport(transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_creation() {
        let base = ApiUrl::new("https://api.example.com").unwrap();
        let transport = HttpTransport::new(base.clone(), Credentials::new("id", "secret")).unwrap();
        assert_eq!(transport.base(), &base);
    }

    #[test]
    fn debug_hides_client_secret() {
        let base = ApiUrl::new("https://api.example.com").unwrap();
        let transport =
            HttpTransport::new(base, Credentials::new("id", "very-secret-value")).unwrap();
        assert!(!format!("{:?}", transport).contains("very-secret-value"));
    }

    #[test]
    fn methods_map_to_reqwest() {
        assert_eq!(reqwest_method(HttpMethod::Get), Method::GET);
        assert_eq!(reqwest_method(HttpMethod::Post), Method::POST);
    }
}
