//! Subcommand implementations.

pub mod device;
pub mod login;
pub mod logout;
pub mod user;
pub mod whoami;
