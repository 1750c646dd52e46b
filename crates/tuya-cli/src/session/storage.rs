//! Token storage for persisting login state.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, TimeDelta, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use tuya_core::{AccessToken, AccessTokenInfo};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// A token grant as written to disk.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoredToken {
    pub base_url: String,
    pub client_id: String,
    access_token: String,
    pub uid: Option<String>,
    pub expire_time: u64,
    pub obtained_at: DateTime<Utc>,
}

impl StoredToken {
    /// Record a grant obtained just now.
    pub fn from_grant(base_url: &str, client_id: &str, grant: &AccessTokenInfo) -> Self {
        Self {
            base_url: base_url.to_string(),
            client_id: client_id.to_string(),
            access_token: grant.access_token().as_str().to_string(),
            uid: grant.uid.clone(),
            expire_time: grant.expire_time,
            obtained_at: Utc::now(),
        }
    }

    pub fn access_token(&self) -> AccessToken {
        AccessToken::new(&self.access_token)
    }

    /// When the token stops being accepted, if a lifetime was reported.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.expire_time).ok().filter(|s| *s > 0)?;
        self.obtained_at
            .checked_add_signed(TimeDelta::try_seconds(secs)?)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|expiry| now >= expiry)
    }

    /// Whether this token was issued for the given project and data centre.
    pub fn matches(&self, base_url: &str, client_id: &str) -> bool {
        self.base_url == base_url && self.client_id == client_id
    }
}

/// Get the token file path.
fn token_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "tuya").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("token.json"))
}

/// Save a token to disk.
pub fn save_token(token: &StoredToken) -> Result<()> {
    let path = token_path()?;
    let json = serde_json::to_string_pretty(token)?;

    fs::write(&path, &json).context("Failed to write token file")?;

    // Set restrictive permissions (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    tracing::debug!(path = %path.display(), "Token saved");
    Ok(())
}

/// Load the stored token, if any.
pub fn load_token() -> Result<Option<StoredToken>> {
    let path = token_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read token file")?;
    let stored = serde_json::from_str(&json).context("Invalid token file")?;

    Ok(Some(stored))
}

/// Remove the stored token. Returns false if there was none.
pub fn clear_token() -> Result<bool> {
    let path = token_path()?;

    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(&path).context("Failed to remove token file")?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stored(expire_time: u64) -> StoredToken {
        StoredToken {
            base_url: "https://openapi.tuyaus.com".to_string(),
            client_id: "client-123".to_string(),
            access_token: "tok-A".to_string(),
            uid: Some("bay1".to_string()),
            expire_time,
            obtained_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn expiry_follows_reported_lifetime() {
        let token = stored(7200);
        let expiry = Utc.with_ymd_and_hms(2024, 1, 1, 14, 0, 0).unwrap();

        assert_eq!(token.expires_at(), Some(expiry));
        assert!(!token.is_expired_at(expiry - TimeDelta::seconds(1)));
        assert!(token.is_expired_at(expiry));
    }

    #[test]
    fn zero_lifetime_never_expires() {
        let token = stored(0);
        assert_eq!(token.expires_at(), None);
        assert!(!token.is_expired_at(Utc::now()));
    }

    #[test]
    fn out_of_range_lifetime_has_no_expiry() {
        // Past the last representable date
        let token = stored(1_000_000_000_000_000);
        assert_eq!(token.expires_at(), None);
        assert!(!token.is_expired_at(Utc::now()));

        // Too large for a time delta
        assert_eq!(stored(i64::MAX as u64).expires_at(), None);
        assert_eq!(stored(u64::MAX).expires_at(), None);
    }

    #[test]
    fn matches_project_and_data_centre() {
        let token = stored(7200);
        assert!(token.matches("https://openapi.tuyaus.com", "client-123"));
        assert!(!token.matches("https://openapi.tuyaeu.com", "client-123"));
        assert!(!token.matches("https://openapi.tuyaus.com", "other"));
    }

    #[test]
    fn grant_round_trips_through_json() {
        let mut grant = AccessTokenInfo::new(AccessToken::new("tok-B"));
        grant.uid = Some("bay2".to_string());
        grant.expire_time = 3600;

        let token = StoredToken::from_grant("https://openapi.tuyaeu.com", "client-9", &grant);
        let json = serde_json::to_string(&token).unwrap();
        let parsed: StoredToken = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.access_token(), AccessToken::new("tok-B"));
        assert_eq!(parsed.uid.as_deref(), Some("bay2"));
        assert!(parsed.matches("https://openapi.tuyaeu.com", "client-9"));
    }
}
