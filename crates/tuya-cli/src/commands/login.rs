//! Login command implementation.

use anyhow::{Context, Result};
use colored::Colorize;
use tokio_util::sync::CancellationToken;

use crate::cli::ApiArgs;
use crate::output;
use crate::session::{build_client, storage};

pub async fn run(args: &ApiArgs, cancel: &CancellationToken) -> Result<()> {
    let (client, base, credentials) = build_client(args)?;

    eprintln!("{}", "Logging in...".dimmed());

    let grant = client
        .establish_session(Some(cancel))
        .await
        .context("Failed to login")?
        .token_info()
        .context("No token after login")?;

    let stored = storage::StoredToken::from_grant(base.as_str(), credentials.client_id(), &grant);
    storage::save_token(&stored).context("Failed to save token")?;

    output::success("Logged in successfully");
    println!();
    if let Some(uid) = &stored.uid {
        output::field("UID", uid);
    }
    output::field("API", base.as_str());
    if let Some(expiry) = stored.expires_at() {
        output::field("Expires", &expiry.to_rfc3339());
    }

    Ok(())
}
