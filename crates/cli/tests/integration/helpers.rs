//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use assert_cmd::Command;

/// Create a CLI command for the compiled binary.
pub fn ratelab_cmd() -> Command {
    Command::cargo_bin("ratelab").unwrap()
}
