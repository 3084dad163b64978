//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::PathBuf;
use std::process::Command;

use super::GitError;
use super::LogRequest;
use super::constants::{self, commands, errors, flags};
use crate::wash::ShortHashResolver;

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Run a git command with the given arguments
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }

        cmd.args(args);
        log::debug!("running git {}", args.join(" "));

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Produce the raw blob for one parse pass
    pub fn log_raw(&self, request: &LogRequest) -> Result<String, GitError> {
        let args = request.args();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.run(&args)
    }
}

impl ShortHashResolver for GitExecutor {
    fn short_hash(&self, rev: &str) -> Option<String> {
        let rev = rev.trim();
        if rev.is_empty() {
            return None;
        }
        match self.run(&[
            commands::REV_PARSE,
            flags::SHORT,
            flags::VERIFY,
            flags::QUIET,
            rev,
        ]) {
            Ok(out) => {
                let short = out.trim();
                (!short.is_empty()).then(|| short.to_string())
            }
            Err(e) => {
                log::debug!("rev-parse --short {} failed: {}", rev, e);
                None
            }
        }
    }
}
