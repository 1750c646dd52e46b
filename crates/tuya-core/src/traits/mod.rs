//! Core traits for transport and resource behavior.

mod device_manager;
mod transport;
mod user_manager;

pub use device_manager::DeviceManager;
pub use transport::{ApiRequest, HttpMethod, Transport};
pub use user_manager::UserManager;
