//! User operations backed by a [`TuyaClient`].

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::instrument;

use crate::client::TuyaClient;
use crate::endpoints;
use crate::traits::{HttpMethod, Transport, UserManager};
use crate::types::{Device, User, validate_id};
use crate::{AccessToken, Result};

/// User operations routed through a client's authenticated dispatch.
///
/// Obtained from [`TuyaClient::users`].
pub struct Users<'a, T> {
    client: &'a TuyaClient<T>,
}

impl<'a, T: Transport> Users<'a, T> {
    pub(crate) fn new(client: &'a TuyaClient<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<'a, T: Transport> UserManager for Users<'a, T> {
    #[instrument(skip(self, token, cancel))]
    async fn get_user(
        &self,
        user_id: &str,
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<User>> {
        let id = validate_id(user_id)?;
        self.client
            .authenticated_request(HttpMethod::Get, &endpoints::user_info(id), token, None, cancel)
            .await
    }

    #[instrument(skip(self, token, cancel))]
    async fn get_user_devices(
        &self,
        user_id: &str,
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<Vec<Device>>> {
        let id = validate_id(user_id)?;
        self.client
            .authenticated_request(
                HttpMethod::Get,
                &endpoints::user_devices(id),
                token,
                None,
                cancel,
            )
            .await
    }
}
