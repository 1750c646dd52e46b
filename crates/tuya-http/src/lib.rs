//! tuya-http - Signed HTTP transport for the Tuya cloud API.
//!
//! [`HttpTransport`] implements [`tuya_core::Transport`] over `reqwest`:
//! it signs every request with the project credentials and unwraps the
//! cloud's response envelope.
//!
//! ```no_run
//! use tuya_core::{ApiUrl, Credentials, TuyaClient};
//! use tuya_core::traits::DeviceManager;
//! use tuya_http::HttpTransport;
//!
//! # async fn example() -> tuya_core::Result<()> {
//! let api = ApiUrl::new(ApiUrl::CENTRAL_EUROPE)?;
//! let transport = HttpTransport::new(api, Credentials::new("client-id", "client-secret"))?;
//! let client = TuyaClient::new(transport);
//!
//! client.establish_session(None).await?;
//! let status = client.devices().get_device_status("vdevo123", None, None).await?;
//! println!("{:?}", status);
//! # Ok(())
//! # }
//! ```

mod client;
mod envelope;
mod signing;

pub use client::HttpTransport;
pub use signing::{RequestSigner, SIGN_METHOD, SignedHeaders, string_to_sign};
