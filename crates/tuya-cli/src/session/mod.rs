//! Client construction and token resolution for commands.

pub mod storage;

use anyhow::{Context, Result};
use colored::Colorize;
use tokio_util::sync::CancellationToken;

use tuya_core::{AccessToken, ApiUrl, Credentials, TuyaClient};
use tuya_http::HttpTransport;

use crate::cli::ApiArgs;

/// A client ready to make authenticated calls.
///
/// `token` is the explicit token to pass on each call; when it is `None`
/// the client holds an established session instead.
pub struct ApiContext {
    pub client: TuyaClient<HttpTransport>,
    pub token: Option<AccessToken>,
}

impl ApiContext {
    /// Returns the explicit token for a call, if one was resolved.
    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }
}

/// Build an anonymous client from the connection flags.
pub fn build_client(args: &ApiArgs) -> Result<(TuyaClient<HttpTransport>, ApiUrl, Credentials)> {
    let base = ApiUrl::new(&args.base_url).context("Invalid base URL")?;

    let client_id = args
        .client_id
        .as_deref()
        .context("Missing client id. Pass --client-id or set TUYA_CLIENT_ID.")?;
    let client_secret = args
        .client_secret
        .as_deref()
        .context("Missing client secret. Pass --client-secret or set TUYA_CLIENT_SECRET.")?;
    let credentials = Credentials::new(client_id, client_secret);

    let transport = HttpTransport::new(base.clone(), credentials.clone())
        .context("Failed to create HTTP transport")?;

    Ok((TuyaClient::new(transport), base, credentials))
}

/// Build a client and decide which token it presents.
///
/// Order: `--token`, then a stored token issued for the same project and
/// data centre, then a freshly established session. A stored token is
/// presented as-is; once the cloud rejects it, `tuya login` replaces it.
pub async fn connect(args: &ApiArgs, cancel: &CancellationToken) -> Result<ApiContext> {
    let (client, base, credentials) = build_client(args)?;

    if let Some(token) = &args.token {
        tracing::debug!("Using access token from command line");
        return Ok(ApiContext {
            client,
            token: Some(AccessToken::new(token)),
        });
    }

    if let Some(stored) = storage::load_token().context("Failed to load stored token")? {
        if stored.matches(base.as_str(), credentials.client_id()) {
            return Ok(ApiContext {
                token: Some(stored.access_token()),
                client,
            });
        }
        tracing::debug!("Stored token belongs to another project, ignoring it");
    }

    eprintln!("{}", "Obtaining access token...".dimmed());
    client
        .establish_session(Some(cancel))
        .await
        .context("Failed to establish session")?;

    Ok(ApiContext {
        client,
        token: None,
    })
}
