//! The response envelope wrapped around every cloud result.

use serde::Deserialize;

/// `{ "success": .., "result": .., "code": .., "msg": .., "t": .. }`
#[derive(Debug, Deserialize)]
pub(crate) struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub t: Option<i64>,
}
