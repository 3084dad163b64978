//! git command execution layer
//!
//! Produces the raw blobs the washer parses. Nothing here interprets log
//! output beyond short-hash lookups.

pub mod constants;
mod executor;
mod request;

pub use executor::GitExecutor;
pub use request::LogRequest;

use std::io;
use thiserror::Error;

/// Errors that can occur when executing git commands
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}
