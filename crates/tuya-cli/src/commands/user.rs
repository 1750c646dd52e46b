//! End user commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use tokio_util::sync::CancellationToken;

use tuya_core::UserManager;

use crate::cli::ApiArgs;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    /// Show an end user's profile
    Get {
        /// User id
        uid: String,
    },

    /// List the devices bound to an end user
    Devices {
        /// User id
        uid: String,
    },
}

pub async fn handle(cmd: UserCommand, args: &ApiArgs, cancel: &CancellationToken) -> Result<()> {
    let ctx = session::connect(args, cancel).await?;
    let users = ctx.client.users();

    match cmd.command {
        UserSubcommand::Get { uid } => {
            let user = users
                .get_user(&uid, ctx.token(), Some(cancel))
                .await
                .context("Failed to get user")?
                .with_context(|| format!("User '{}' not found", uid))?;
            output::json_pretty(&user)
        }
        UserSubcommand::Devices { uid } => {
            let devices = users
                .get_user_devices(&uid, ctx.token(), Some(cancel))
                .await
                .context("Failed to list user devices")?
                .unwrap_or_default();
            output::json_pretty(&devices)
        }
    }
}
