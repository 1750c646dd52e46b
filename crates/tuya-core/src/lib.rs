//! tuya-core - Core types, traits and session handling for the Tuya cloud API.
//!
//! All authenticated operations flow through a [`TuyaClient`], which owns the
//! cached access token and resolves which token each request presents. The
//! network itself sits behind the [`Transport`] trait.
//!
//! # Example
//!
//! ```no_run
//! use tuya_core::{TuyaClient, Transport};
//! use tuya_core::traits::DeviceManager;
//!
//! # async fn example<T: Transport>(transport: T) -> tuya_core::Result<()> {
//! let client = TuyaClient::new(transport);
//! client.establish_session(None).await?;
//!
//! if let Some(device) = client.devices().get_device("vdevo123", None, None).await? {
//!     println!("{:?}", device.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod credentials;
pub mod endpoints;
pub mod error;
pub mod tokens;
pub mod traits;
pub mod types;

mod managers;

pub use client::TuyaClient;
pub use credentials::Credentials;
pub use error::Error;
pub use managers::{Devices, Users};
pub use tokens::{AccessToken, AccessTokenInfo, RefreshToken};
pub use traits::{ApiRequest, DeviceManager, HttpMethod, Transport, UserManager};
pub use types::{
    ApiUrl, Command, Device, DeviceInfo, DeviceStatus, Identifiable, Instruction,
    InstructionInfo, User,
};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
