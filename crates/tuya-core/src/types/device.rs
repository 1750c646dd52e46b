//! Device records.

use serde::{Deserialize, Serialize};

use super::Identifiable;

/// A device as returned by `/v1.0/devices/{id}` and the user device list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    pub id: Option<String>,
    pub name: Option<String>,
    pub uid: Option<String>,
    pub local_key: Option<String>,
    pub category: Option<String>,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub sub: bool,
    pub uuid: Option<String>,
    pub owner_id: Option<String>,
    pub online: bool,
    pub status: Vec<DeviceStatus>,
    pub active_time: Option<i64>,
    pub create_time: Option<i64>,
    pub update_time: Option<i64>,
    pub biz_type: Option<i64>,
    pub icon: Option<String>,
    pub ip: Option<String>,
    pub time_zone: Option<String>,
}

/// Extended device details as returned by `/v1.1/iot-03/devices/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub category_name: Option<String>,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub model: Option<String>,
    pub uuid: Option<String>,
    pub local_key: Option<String>,
    pub asset_id: Option<String>,
    pub gateway_id: Option<String>,
    #[serde(alias = "online")]
    pub is_online: bool,
    pub sub: bool,
    pub ip: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub time_zone: Option<String>,
    pub icon: Option<String>,
    pub active_time: Option<i64>,
    pub create_time: Option<i64>,
    pub update_time: Option<i64>,
}

impl DeviceInfo {
    /// Create device details carrying only an identifier.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

impl Identifiable for DeviceInfo {
    const KIND: &'static str = "device";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// One data point of a device's current status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatus {
    /// Data point code, e.g. `switch_led`.
    pub code: String,
    /// Current value; its JSON type depends on the data point.
    #[serde(default)]
    pub value: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn device_decodes_with_status() {
        let device: Device = serde_json::from_value(json!({
            "id": "vdevo123",
            "name": "Desk lamp",
            "online": true,
            "category": "dj",
            "status": [
                { "code": "switch_led", "value": true },
                { "code": "bright_value", "value": 255 }
            ],
            "unknown_field": "ignored"
        }))
        .unwrap();

        assert_eq!(device.id.as_deref(), Some("vdevo123"));
        assert!(device.online);
        assert_eq!(device.status.len(), 2);
        assert_eq!(device.status[1].value, json!(255));
    }

    #[test]
    fn device_info_accepts_both_online_spellings() {
        let a: DeviceInfo = serde_json::from_value(json!({ "is_online": true })).unwrap();
        let b: DeviceInfo = serde_json::from_value(json!({ "online": true })).unwrap();
        assert!(a.is_online);
        assert!(b.is_online);
    }

    #[test]
    fn device_info_without_id_has_no_identifier() {
        let info: DeviceInfo = serde_json::from_value(json!({ "name": "lamp" })).unwrap();
        assert!(Identifiable::id(&info).is_none());
        assert_eq!(Identifiable::id(&DeviceInfo::with_id("x")), Some("x"));
    }
}
