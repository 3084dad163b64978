//! TestRepo helper for integration tests.
//!
//! Provides a temporary git repository with deterministic identities and
//! commit dates.

use std::cell::Cell;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Commit time of the first commit; each later commit is one minute newer
pub const BASE_EPOCH: i64 = 1_420_070_400;

/// A temporary git repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
    commits: Cell<i64>,
}

impl TestRepo {
    /// Create a new git repository in a temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let repo = Self {
            dir,
            commits: Cell::new(0),
        };

        repo.git(&["init", "-q"]);
        repo.git(&["symbolic-ref", "HEAD", "refs/heads/main"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo.git(&["config", "log.showSignature", "false"]);

        repo
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Execute a git command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn git(&self, args: &[&str]) -> String {
        let date = format!("{} +0000", BASE_EPOCH + self.commits.get() * 60);
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .env("GIT_AUTHOR_DATE", &date)
            .env("GIT_COMMITTER_DATE", &date)
            .output()
            .expect("Failed to execute git command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "git {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Write a file in the repository.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Write a file and commit it with `message`.
    pub fn commit(&self, name: &str, content: &str, message: &str) {
        self.write_file(name, content);
        self.git(&["add", name]);
        self.git(&["commit", "-q", "-m", message]);
        self.commits.set(self.commits.get() + 1);
    }

    /// Commit `count` changes to `log.txt`, named `<prefix> 1..=count`.
    pub fn commit_many(&self, prefix: &str, count: usize) {
        for n in 1..=count {
            self.commit("log.txt", &format!("{prefix} {n}\n"), &format!("{prefix} {n}"));
        }
    }

    /// Full id of a revision.
    pub fn rev_parse(&self, rev: &str) -> String {
        self.git(&["rev-parse", rev]).trim().to_string()
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
