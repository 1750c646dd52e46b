//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use tuya_core::ApiUrl;

use crate::commands::device::DeviceCommand;
use crate::commands::user::UserCommand;

/// Tuya cloud CLI tool for device exploration.
#[derive(Parser, Debug)]
#[command(name = "tuya")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub api: ApiArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection settings shared by every command that talks to the cloud.
#[derive(Args, Debug, Clone)]
pub struct ApiArgs {
    /// API base URL of the project's data centre
    #[arg(long, env = "TUYA_BASE_URL", default_value = ApiUrl::WESTERN_AMERICA, global = true)]
    pub base_url: String,

    /// Project client id (access id)
    #[arg(long, env = "TUYA_CLIENT_ID", global = true)]
    pub client_id: Option<String>,

    /// Project client secret (access secret)
    #[arg(long, env = "TUYA_CLIENT_SECRET", hide_env_values = true, global = true)]
    pub client_secret: Option<String>,

    /// Access token to present instead of the stored one
    #[arg(long, env = "TUYA_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Obtain an access token and store it
    Login,

    /// Remove the stored access token
    Logout,

    /// Display the stored access token's owner
    Whoami,

    /// Device operations
    Device(DeviceCommand),

    /// End user operations
    User(UserCommand),
}
