//! Logout command implementation.

use anyhow::{Context, Result};

use crate::output;
use crate::session::storage;

pub fn run() -> Result<()> {
    if storage::clear_token().context("Failed to remove token")? {
        output::success("Logged out");
    } else {
        output::warning("No stored token");
    }
    Ok(())
}
