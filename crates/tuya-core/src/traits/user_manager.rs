//! User operations trait.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::types::{Device, User, require_id};
use crate::{AccessToken, Result};

/// End user reads.
#[async_trait]
pub trait UserManager: Send + Sync {
    /// Get an end user by uid.
    async fn get_user(
        &self,
        user_id: &str,
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<User>>;

    /// List the devices bound to an end user.
    async fn get_user_devices(
        &self,
        user_id: &str,
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<Vec<Device>>>;

    /// List the devices bound to a user record.
    async fn get_user_devices_of(
        &self,
        user: &User,
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<Vec<Device>>> {
        let id = require_id(user)?;
        self.get_user_devices(id, token, cancel).await
    }
}
