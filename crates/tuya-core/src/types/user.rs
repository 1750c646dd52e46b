//! End user records.

use serde::{Deserialize, Serialize};

use super::Identifiable;

/// An end user of an app account, from `/v1.0/users/{uid}/infos`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "uid", alias = "id")]
    pub id: Option<String>,
    pub username: Option<String>,
    pub nick_name: Option<String>,
    pub country_code: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub avatar: Option<String>,
    pub time_zone_id: Option<String>,
    pub create_time: Option<i64>,
    pub update_time: Option<i64>,
}

impl User {
    /// Create a user record carrying only an identifier.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

impl Identifiable for User {
    const KIND: &'static str = "user";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_decodes_uid() {
        let user: User = serde_json::from_value(json!({
            "uid": "ay1622097934070h5Mpi",
            "username": "alice@example.com",
            "country_code": "1"
        }))
        .unwrap();
        assert_eq!(Identifiable::id(&user), Some("ay1622097934070h5Mpi"));
    }

    #[test]
    fn user_accepts_id_alias() {
        let user: User = serde_json::from_value(json!({ "id": "u-1" })).unwrap();
        assert_eq!(user.id.as_deref(), Some("u-1"));
    }
}
