//! Core types for the Tuya cloud API.
//!
//! - [`ApiUrl`] - Validated API base address
//! - [`Device`], [`DeviceInfo`], [`DeviceStatus`] - Device records
//! - [`Command`] - A single control command
//! - [`InstructionInfo`], [`Instruction`] - Device capability descriptors
//! - [`User`] - End user records

mod api_url;
mod command;
mod device;
mod identifier;
mod instruction;
mod user;

pub use api_url::ApiUrl;
pub use command::Command;
pub use device::{Device, DeviceInfo, DeviceStatus};
pub use identifier::{Identifiable, require_id, validate_id};
pub use instruction::{Instruction, InstructionInfo};
pub use user::User;
