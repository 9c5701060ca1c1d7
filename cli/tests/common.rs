//! # StycoBot Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test crates in `cli/tests/`. Every
//! command built here runs against an explicit temporary configuration file
//! and a temporary working directory, so a developer's own
//! `~/.config/stycobot/config.toml` or `.stycobot.toml` never leaks into a test.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// Registry with the three people used throughout the tests.
pub const THREE_USERS: &str = r#"
[bot]
name = "StycoBot"

[[users]]
name = "Ruzan"
age = 34
favorite_food = "Shrimp"
favorite_quote = "Never give up"

[[users]]
name = "Sean"
age = "34"
favorite_food = "Daar"
favorite_quote = "Main who Daan Can't Love Yourself"

[[users]]
name = "Brijesh"
age = 32
favorite_food = "Pizza"
favorite_quote = "Life is beautiful"
"#;

/// # Get StycoBot Command (`stycobot_cmd`)
///
/// Returns a command for the compiled `stycobot` binary using `config_toml`
/// as its only configuration source. Keep the returned `TempDir` alive for
/// as long as the command is used.
///
/// ## Panics
/// Panics if the temp directory cannot be created or the binary is missing.
pub fn stycobot_cmd(config_toml: &str) -> (TempDir, Command) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("stycobot.toml");
    fs::write(&config_path, config_toml).expect("Failed to write test config");

    let mut cmd = Command::cargo_bin("stycobot").expect("Failed to find stycobot binary for testing");
    cmd.current_dir(temp_dir.path())
        .env_remove("STYCOBOT_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config_path);
    (temp_dir, cmd)
}
