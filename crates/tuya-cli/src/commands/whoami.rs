//! Whoami command implementation.

use anyhow::{Context, Result};
use chrono::Utc;

use crate::output;
use crate::session::storage;

pub fn run() -> Result<()> {
    let stored = storage::load_token()
        .context("Failed to load token")?
        .context("No stored token. Run 'tuya login' first.")?;

    output::field("UID", stored.uid.as_deref().unwrap_or("-"));
    output::field("API", &stored.base_url);
    output::field("Client", &stored.client_id);
    output::field("Obtained", &stored.obtained_at.to_rfc3339());

    if let Some(expiry) = stored.expires_at() {
        let state = if stored.is_expired_at(Utc::now()) {
            " (expired)"
        } else {
            ""
        };
        output::field("Expires", &format!("{}{}", expiry.to_rfc3339(), state));
    }

    Ok(())
}
