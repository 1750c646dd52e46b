//! Device control commands.

use serde::{Deserialize, Serialize};

/// A single data-point command sent to a device.
///
/// ```
/// use tuya_core::Command;
///
/// let cmd = Command::new("switch_led", true);
/// assert_eq!(serde_json::to_string(&cmd).unwrap(),
///            r#"{"code":"switch_led","value":true}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Data point code, as listed by the device instructions.
    pub code: String,
    /// Value to set.
    pub value: serde_json::Value,
}

impl Command {
    /// Create a new command.
    pub fn new(code: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            code: code.into(),
            value: value.into(),
        }
    }
}
