//! The session core: token caching and authenticated dispatch.

use std::fmt;
use std::sync::{PoisonError, RwLock};

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument};

use crate::endpoints::TOKEN_GRANT;
use crate::error::{AuthError, Error};
use crate::managers::{Devices, Users};
use crate::traits::{ApiRequest, HttpMethod, Transport};
use crate::{AccessToken, AccessTokenInfo, Result};

/// A client for the cloud API on behalf of one project account.
///
/// The client owns at most one cached access token. It starts out
/// anonymous; [`establish_session`](Self::establish_session) fetches a token
/// and caches it, replacing any previous one. Every authenticated request
/// presents the token passed explicitly for that call if there is one, and
/// the cached token otherwise.
///
/// # Limitations
///
/// - The cached token is never checked for expiry nor refreshed. Call
///   `establish_session` again to replace it.
/// - Concurrent `establish_session` calls are not serialized: each one
///   fetches its own token and the last write wins.
///
/// # Example
///
/// ```no_run
/// use tuya_core::{TuyaClient, Transport, Command};
/// use tuya_core::traits::DeviceManager;
///
/// # async fn example<T: Transport>(transport: T) -> tuya_core::Result<()> {
/// let client = TuyaClient::new(transport);
/// let sent = client
///     .establish_session(None)
///     .await?
///     .devices()
///     .send_command("vdevo123", Command::new("switch_led", true), None, None)
///     .await?;
/// assert!(sent);
/// # Ok(())
/// # }
/// ```
pub struct TuyaClient<T> {
    transport: T,
    token: RwLock<Option<AccessTokenInfo>>,
}

impl<T: Transport> TuyaClient<T> {
    /// Create an anonymous client over the given transport.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            token: RwLock::new(None),
        }
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Device operations backed by this client.
    pub fn devices(&self) -> Devices<'_, T> {
        Devices::new(self)
    }

    /// User operations backed by this client.
    pub fn users(&self) -> Users<'_, T> {
        Users::new(self)
    }

    /// Fetch a fresh access token from the token grant endpoint.
    ///
    /// The cached token is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the grant call fails or carries no
    /// grant, or [`Error::Cancelled`] if `cancel` fires first.
    #[instrument(skip(self, cancel))]
    pub async fn fetch_token(&self, cancel: Option<&CancellationToken>) -> Result<AccessTokenInfo> {
        info!("Obtaining access token");

        let request = ApiRequest::new(HttpMethod::Get, TOKEN_GRANT);
        // A grant without a result (or a 404) fails to decode
        self.dispatch(request, cancel).await
    }

    /// Fetch an access token and cache it on this client.
    ///
    /// This is the only operation that writes the cached token. A previous
    /// token is replaced unconditionally. Returns `self` so calls can be
    /// chained.
    #[instrument(skip(self, cancel))]
    pub async fn establish_session(&self, cancel: Option<&CancellationToken>) -> Result<&Self> {
        let grant = self.fetch_token(cancel).await?;

        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(grant);

        debug!("Session established");
        Ok(self)
    }

    /// Perform a request that requires authentication.
    ///
    /// The token presented is `token` if given, else the cached one. The
    /// result is whatever the transport returns.
    ///
    /// # Errors
    ///
    /// Fails with [`AuthError::MissingCredential`] before any network
    /// activity when neither token is available. Transport failures and
    /// cancellation propagate unchanged.
    #[instrument(skip(self, token, body, cancel))]
    pub async fn authenticated_request<R>(
        &self,
        method: HttpMethod,
        path: &str,
        token: Option<&AccessToken>,
        body: Option<String>,
        cancel: Option<&CancellationToken>,
    ) -> Result<R>
    where
        R: DeserializeOwned + Send + 'static,
    {
        debug!("Performing authenticated request");

        let resolved = match token {
            Some(explicit) => explicit.clone(),
            None => match self.cached_access_token() {
                Some(cached) => cached,
                None => {
                    error!(
                        %method,
                        path,
                        "Missing access token for a request that requires authentication"
                    );
                    return Err(AuthError::MissingCredential {
                        parameter: "access_token",
                    }
                    .into());
                }
            },
        };

        let mut request = ApiRequest::new(method, path).with_token(resolved);
        if let Some(body) = body {
            request = request.with_body(body);
        }

        self.dispatch(request, cancel).await
    }

    /// Returns a copy of the cached token grant, if a session was established.
    pub fn token_info(&self) -> Option<AccessTokenInfo> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns true if a session was established.
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn cached_access_token(&self) -> Option<AccessToken> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|grant| grant.access_token().clone())
    }

    async fn dispatch<R>(&self, request: ApiRequest, cancel: Option<&CancellationToken>) -> Result<R>
    where
        R: DeserializeOwned + Send + 'static,
    {
        let Some(cancel) = cancel else {
            return self.transport.send_request(request).await;
        };

        // biased: a token cancelled up front never reaches the transport
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!("Request cancelled");
                Err(Error::Cancelled)
            }
            result = self.transport.send_request(request) => result,
        }
    }
}

// Custom Debug impl that hides sensitive data
impl<T> fmt::Debug for TuyaClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let authenticated = self
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some();
        f.debug_struct("TuyaClient")
            .field("authenticated", &authenticated)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
