//! API credentials type.

use std::fmt;

/// Cloud project credentials used to sign requests.
///
/// This type holds the client id (access id) and client secret (access
/// secret) of a cloud development project. They are fixed for the lifetime
/// of the transport that owns them.
///
/// # Security
///
/// The secret is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use tuya_core::Credentials;
///
/// let creds = Credentials::new("4p8ad9x5hd8wkbs3", "secret-here");
/// assert_eq!(creds.client_id(), "4p8ad9x5hd8wkbs3");
/// ```
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Create new credentials.
    ///
    /// # Arguments
    ///
    /// * `client_id` - The project's access id
    /// * `client_secret` - The project's access secret
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Returns the client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the client secret.
    ///
    /// # Security
    ///
    /// Use this only as the key when signing requests.
    /// Never log or display this value.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}
