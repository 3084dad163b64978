//! Common test utilities for integration tests.
//!
//! This module provides helpers for creating and managing temporary
//! git repositories in tests.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod test_repo;

pub use test_repo::TestRepo;

/// Whether a usable `git` binary is on PATH
pub fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Return early from a test when git is not installed
#[macro_export]
macro_rules! skip_if_no_git {
    () => {
        if !common::git_available() {
            eprintln!("git not found, skipping");
            return;
        }
    };
}
