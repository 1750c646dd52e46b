//! Device operations trait.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::types::{Command, Device, DeviceInfo, DeviceStatus, InstructionInfo, User, require_id};
use crate::{AccessToken, Result};

/// Device reads and command sends.
///
/// Every operation accepts an explicit token, which takes precedence over
/// the client's cached one, and an optional cancellation token. Reads
/// return `Ok(None)` when the cloud reports no such resource.
///
/// The record-taking variants and [`send_command`](Self::send_command) are
/// provided in terms of the id-based operations, so every implementation
/// shares their validation and wire behavior.
#[async_trait]
pub trait DeviceManager: Send + Sync {
    /// Get a device by id.
    async fn get_device(
        &self,
        device_id: &str,
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<Device>>;

    /// Get extended device details by id.
    async fn get_device_info(
        &self,
        device_id: &str,
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<DeviceInfo>>;

    /// Get the current status data points of a device.
    async fn get_device_status(
        &self,
        device_id: &str,
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<Vec<DeviceStatus>>>;

    /// List the devices of an end user.
    async fn get_devices_by_user(
        &self,
        user_id: &str,
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<Vec<Device>>>;

    /// Get the instructions a device accepts.
    async fn get_device_instructions(
        &self,
        device_id: &str,
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<InstructionInfo>>;

    /// Send a list of commands to a device in one request.
    ///
    /// Returns the success flag reported by the cloud.
    async fn send_command_list(
        &self,
        device_id: &str,
        commands: &[Command],
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<bool>;

    /// Send a single command to a device.
    async fn send_command(
        &self,
        device_id: &str,
        command: Command,
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<bool> {
        let commands = [command];
        self.send_command_list(device_id, &commands, token, cancel)
            .await
    }

    /// Get the current status of a device record.
    async fn get_device_status_of(
        &self,
        device: &DeviceInfo,
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<Vec<DeviceStatus>>> {
        let id = require_id(device)?;
        self.get_device_status(id, token, cancel).await
    }

    /// List the devices of a user record.
    async fn get_devices_of(
        &self,
        user: &User,
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<Vec<Device>>> {
        let id = require_id(user)?;
        self.get_devices_by_user(id, token, cancel).await
    }

    /// Get the instructions of a device record.
    async fn get_device_instructions_of(
        &self,
        device: &DeviceInfo,
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Option<InstructionInfo>> {
        let id = require_id(device)?;
        self.get_device_instructions(id, token, cancel).await
    }

    /// Send a list of commands to a device record.
    async fn send_command_list_to(
        &self,
        device: &DeviceInfo,
        commands: &[Command],
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<bool> {
        let id = require_id(device)?;
        self.send_command_list(id, commands, token, cancel).await
    }

    /// Send a single command to a device record.
    async fn send_command_to(
        &self,
        device: &DeviceInfo,
        command: Command,
        token: Option<&AccessToken>,
        cancel: Option<&CancellationToken>,
    ) -> Result<bool> {
        let id = require_id(device)?;
        self.send_command(id, command, token, cancel).await
    }
}
