//! Resource façades over the session core.

mod devices;
mod users;

pub use devices::Devices;
pub use users::Users;
