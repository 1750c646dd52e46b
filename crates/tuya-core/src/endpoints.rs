//! Resource paths and request bodies of the cloud API.

use serde::Serialize;

use crate::types::Command;

/// Token grant, the only unauthenticated endpoint.
pub const TOKEN_GRANT: &str = "/v1.0/token?grant_type=1";

/// `/v1.0/devices/{id}`
pub fn device(device_id: &str) -> String {
    format!("/v1.0/devices/{}", device_id)
}

/// `/v1.1/iot-03/devices/{id}`
pub fn device_info(device_id: &str) -> String {
    format!("/v1.1/iot-03/devices/{}", device_id)
}

/// `/v1.0/devices/{id}/status`
pub fn device_status(device_id: &str) -> String {
    format!("/v1.0/devices/{}/status", device_id)
}

/// `/v1.0/devices/{id}/functions`
pub fn device_functions(device_id: &str) -> String {
    format!("/v1.0/devices/{}/functions", device_id)
}

/// `/v1.0/devices/{id}/commands`
pub fn device_commands(device_id: &str) -> String {
    format!("/v1.0/devices/{}/commands", device_id)
}

/// `/v1.0/users/{id}/devices`
pub fn user_devices(user_id: &str) -> String {
    format!("/v1.0/users/{}/devices", user_id)
}

/// `/v1.0/users/{id}/infos`
pub fn user_info(user_id: &str) -> String {
    format!("/v1.0/users/{}/infos", user_id)
}

/// Request body for sending commands.
#[derive(Debug, Serialize)]
pub struct SendCommandsRequest<'a> {
    pub commands: &'a [Command],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_substitute_identifier() {
        assert_eq!(device("d1"), "/v1.0/devices/d1");
        assert_eq!(device_info("d1"), "/v1.1/iot-03/devices/d1");
        assert_eq!(device_status("d1"), "/v1.0/devices/d1/status");
        assert_eq!(device_functions("d1"), "/v1.0/devices/d1/functions");
        assert_eq!(device_commands("d1"), "/v1.0/devices/d1/commands");
        assert_eq!(user_devices("u1"), "/v1.0/users/u1/devices");
        assert_eq!(user_info("u1"), "/v1.0/users/u1/infos");
    }

    #[test]
    fn commands_body_wraps_list() {
        let commands = [Command::new("switch_led", true)];
        let body = serde_json::to_string(&SendCommandsRequest {
            commands: &commands,
        })
        .unwrap();
        assert_eq!(body, r#"{"commands":[{"code":"switch_led","value":true}]}"#);
    }
}
