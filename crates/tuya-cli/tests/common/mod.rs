use std::path::Path;
use std::process::{Command, Output};

pub const CLIENT_ID: &str = "client-123";
pub const CLIENT_SECRET: &str = "secret-456";

/// Run the CLI with an isolated HOME and no ambient `TUYA_*` settings.
pub fn run_cli_with_env(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tuya"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    for var in [
        "TUYA_BASE_URL",
        "TUYA_CLIENT_ID",
        "TUYA_CLIENT_SECRET",
        "TUYA_ACCESS_TOKEN",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI against an API base URL with the test credentials.
pub fn run_cli_against(args: &[&str], home: &Path, base_url: &str) -> Output {
    let mut full = vec![
        "--base-url",
        base_url,
        "--client-id",
        CLIENT_ID,
        "--client-secret",
        CLIENT_SECRET,
    ];
    full.extend_from_slice(args);
    run_cli_with_env(&full, home)
}

/// Assert success and return stdout.
pub fn expect_success(args: &[&str], output: &Output) -> String {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Assert failure and return stderr.
pub fn expect_failure(args: &[&str], output: &Output) -> String {
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}
