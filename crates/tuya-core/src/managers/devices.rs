//! Device operations backed by a [`TuyaClient`].

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::instrument;

use crate::client::TuyaClient;
use crate::endpoints::{self, SendCommandsRequest};
use crate::error::InvalidInputError;
use crate::traits::{DeviceManager, HttpMethod, Transport};
use crate::types::{Command, Device, DeviceInfo, DeviceStatus, InstructionInfo, validate_id};
use crate::{AccessToken, Result};

/// Device operations routed through a client's authenticated dispatch.
///
/// Obtained from [`TuyaClient::devices`].
pub struct Devices<'a, T> {
    client: &'a TuyaClient<T>,
}

impl<'a, T: Transport> Devices<'a, T> {
    pub(crate) fn new(client: &'a TuyaClient<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<'a, T: Transport> DeviceManager for Devices<'a, T> {
    #[instrument(skip(self, token, cancel))]
    async fn get_device(
        &self,
        device_id: &str,
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<Device>> {
        let id = validate_id(device_id)?;
        self.client
            .authenticated_request(HttpMethod::Get, &endpoints::device(id), token, None, cancel)
            .await
    }

    #[instrument(skip(self, token, cancel))]
    async fn get_device_info(
        &self,
        device_id: &str,
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<DeviceInfo>> {
        let id = validate_id(device_id)?;
        self.client
            .authenticated_request(
                HttpMethod::Get,
                &endpoints::device_info(id),
                token,
                None,
                cancel,
            )
            .await
    }

    #[instrument(skip(self, token, cancel))]
    async fn get_device_status(
        &self,
        device_id: &str,
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<Vec<DeviceStatus>>> {
        let id = validate_id(device_id)?;
        self.client
            .authenticated_request(
                HttpMethod::Get,
                &endpoints::device_status(id),
                token,
                None,
                cancel,
            )
            .await
    }

    #[instrument(skip(self, token, cancel))]
    async fn get_devices_by_user(
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

    #[instrument(skip(self, token, cancel))]
    async fn get_device_instructions(
        &self,
        device_id: &str,
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<InstructionInfo>> {
        let id = validate_id(device_id)?;
        self.client
            .authenticated_request(
                HttpMethod::Get,
                &endpoints::device_functions(id),
                token,
                None,
                cancel,
            )
            .await
    }

    #[instrument(skip(self, commands, token, cancel), fields(count = commands.len()))]
    async fn send_command_list(
        &self,
        device_id: &str,
        commands: &[Command],
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<bool> {
        let id = validate_id(device_id)?;
        let body = serde_json::to_string(&SendCommandsRequest { commands }).map_err(|e| {
            InvalidInputError::Other {
                message: format!("cannot serialize commands: {}", e),
            }
        })?;

        self.client
            .authenticated_request(
                HttpMethod::Post,
                &endpoints::device_commands(id),
                token,
                Some(body),
                cancel,
            )
            .await
    }
}
