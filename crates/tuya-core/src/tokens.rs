//! Token types for authenticated requests.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// An access token presented on authenticated requests.
///
/// Tokens are either obtained by establishing a session on a
/// [`TuyaClient`](crate::TuyaClient) or supplied by the caller per request.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Create a new access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in request headers and signatures.
    ///
    /// # Security
    ///
    /// Use only when constructing authenticated requests.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// A refresh token returned alongside an access token grant.
///
/// The client never uses it on its own; it is kept so callers can persist
/// the full grant.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefreshToken(String);

impl RefreshToken {
    /// Create a new refresh token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefreshToken").field(&"[REDACTED]").finish()
    }
}

/// The result of a token grant.
///
/// `expire_time` is reported by the cloud but never checked: a cached grant
/// is used until it is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenInfo {
    /// The access token to present on authenticated requests.
    pub access_token: AccessToken,
    /// Lifetime of the access token in seconds, as reported at grant time.
    #[serde(default)]
    pub expire_time: u64,
    /// Token used by the cloud to issue a new access token.
    #[serde(default)]
    pub refresh_token: Option<RefreshToken>,
    /// User id of the project owner the grant belongs to.
    #[serde(default)]
    pub uid: Option<String>,
}

impl AccessTokenInfo {
    /// Create a grant holding only an access token.
    pub fn new(access_token: AccessToken) -> Self {
        Self {
            access_token,
            expire_time: 0,
            refresh_token: None,
            uid: None,
        }
    }

    /// Returns the access token.
    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the lifetime reported at grant time.
    pub fn expires_in(&self) -> Duration {
        Duration::from_secs(self.expire_time)
    }
}

impl From<AccessTokenInfo> for AccessToken {
    fn from(info: AccessTokenInfo) -> Self {
        info.access_token
    }
}
