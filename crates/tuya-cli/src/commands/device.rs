//! Device commands.

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use tuya_core::{Command, DeviceManager};

use crate::cli::ApiArgs;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct DeviceCommand {
    #[command(subcommand)]
    pub command: DeviceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DeviceSubcommand {
    /// Fetch a device with its current status
    Get {
        /// Device id
        id: String,
    },

    /// Fetch a device's descriptive details
    Info {
        /// Device id
        id: String,
    },

    /// Fetch a device's data point values
    Status {
        /// Device id
        id: String,
    },

    /// List the instructions a device accepts
    Functions {
        /// Device id
        id: String,
    },

    /// Send one or more commands to a device
    Send(SendArgs),
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Device id
    pub id: String,

    /// Instruction code (repeat together with --value)
    #[arg(long, required = true)]
    pub code: Vec<String>,

    /// Instruction value as JSON; bare words are sent as strings
    #[arg(long, required = true)]
    pub value: Vec<String>,
}

pub async fn handle(cmd: DeviceCommand, args: &ApiArgs, cancel: &CancellationToken) -> Result<()> {
    // Reject malformed command lists before obtaining a token
    let commands = match &cmd.command {
        DeviceSubcommand::Send(send) => Some(parse_commands(&send.code, &send.value)?),
        _ => None,
    };

    let ctx = session::connect(args, cancel).await?;
    let devices = ctx.client.devices();
    let token = ctx.token();

    match cmd.command {
        DeviceSubcommand::Get { id } => {
            let device = devices
                .get_device(&id, token, Some(cancel))
                .await
                .context("Failed to get device")?
                .with_context(|| not_found(&id))?;
            output::json_pretty(&device)
        }
        DeviceSubcommand::Info { id } => {
            let info = devices
                .get_device_info(&id, token, Some(cancel))
                .await
                .context("Failed to get device info")?
                .with_context(|| not_found(&id))?;
            output::json_pretty(&info)
        }
        DeviceSubcommand::Status { id } => {
            let status = devices
                .get_device_status(&id, token, Some(cancel))
                .await
                .context("Failed to get device status")?
                .with_context(|| not_found(&id))?;
            output::json_pretty(&status)
        }
        DeviceSubcommand::Functions { id } => {
            let functions = devices
                .get_device_instructions(&id, token, Some(cancel))
                .await
                .context("Failed to get device functions")?
                .with_context(|| not_found(&id))?;
            output::json_pretty(&functions)
        }
        DeviceSubcommand::Send(send) => {
            let commands = commands.unwrap_or_default();
            let accepted = devices
                .send_command_list(&send.id, &commands, token, Some(cancel))
                .await
                .context("Failed to send commands")?;

            if !accepted {
                bail!("Device '{}' rejected the commands", send.id);
            }
            output::success(&format!("Sent {} command(s) to {}", commands.len(), send.id));
            Ok(())
        }
    }
}

fn not_found(id: &str) -> String {
    format!("Device '{}' not found", id)
}

/// Pair up `--code` and `--value` occurrences into commands.
fn parse_commands(codes: &[String], values: &[String]) -> Result<Vec<Command>> {
    if codes.len() != values.len() {
        bail!(
            "Every --code needs a matching --value (got {} codes and {} values)",
            codes.len(),
            values.len()
        );
    }

    Ok(codes
        .iter()
        .zip(values)
        .map(|(code, value)| Command::new(code.as_str(), parse_value(value)))
        .collect())
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn values_parse_as_json() {
        assert_eq!(parse_value("true"), json!(true));
        assert_eq!(parse_value("250"), json!(250));
        assert_eq!(parse_value(r#"{"h":120,"s":1000,"v":1000}"#), json!({"h":120,"s":1000,"v":1000}));
    }

    #[test]
    fn bare_words_become_strings() {
        assert_eq!(parse_value("white"), json!("white"));
        assert_eq!(parse_value(r#""colour""#), json!("colour"));
    }

    #[test]
    fn codes_pair_with_values_in_order() {
        let commands = parse_commands(
            &strings(&["switch_led", "work_mode"]),
            &strings(&["true", "white"]),
        )
        .unwrap();

        assert_eq!(
            commands,
            vec![
                Command::new("switch_led", true),
                Command::new("work_mode", "white"),
            ]
        );
    }

    #[test]
    fn unmatched_codes_are_rejected() {
        let err = parse_commands(&strings(&["switch_led", "bright_value"]), &strings(&["true"]))
            .unwrap_err();
        assert!(err.to_string().contains("matching --value"));
    }
}
