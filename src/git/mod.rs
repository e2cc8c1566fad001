//! git
//!
//! Thin interface for the git staging/commit step.
//!
//! # Design
//!
//! Caretaker's only git needs are `git add .` and `git commit -m <msg>` at
//! the end of a changelog run, so it shells out to the `git` binary instead
//! of linking a git library. A non-success exit status is an error; the
//! changelog has already been written at that point and is left as-is.

use std::io;
use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Errors from git invocation.
#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to run git: {0}")]
    Launch(#[from] io::Error),

    #[error("git {command} failed")]
    Failed { command: String },
}

impl GitError {
    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

fn run(cwd: &Path, args: &[&str]) -> Result<(), GitError> {
    let status = Command::new("git").args(args).current_dir(cwd).status()?;
    if !status.success() {
        return Err(GitError::Failed {
            command: args.join(" "),
        });
    }
    Ok(())
}

/// Stage everything in the working tree (`git add .`).
pub fn stage_all(cwd: &Path) -> Result<(), GitError> {
    run(cwd, &["add", "."])
}

/// Create a commit with the given message (`git commit -m <msg>`).
pub fn commit(cwd: &Path, message: &str) -> Result<(), GitError> {
    run(cwd, &["commit", "-m", message])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) {
        assert!(Command::new("git")
            .args(args)
            .current_dir(dir)
            .status()
            .unwrap()
            .success());
    }

    #[test]
    fn stage_and_commit_in_fresh_repo() {
        let dir = TempDir::new().unwrap();
        git(dir.path(), &["init", "-b", "main"]);
        git(dir.path(), &["config", "user.email", "test@example.com"]);
        git(dir.path(), &["config", "user.name", "Test User"]);

        std::fs::write(dir.path().join("CHANGELOG.md"), "# Changelog\n").unwrap();
        stage_all(dir.path()).unwrap();
        commit(dir.path(), "add changelog").unwrap();

        let log = Command::new("git")
            .args(["log", "--format=%s", "-1"])
            .current_dir(dir.path())
            .output()
            .unwrap();
        assert_eq!(String::from_utf8_lossy(&log.stdout).trim(), "add changelog");
    }

    #[test]
    fn commit_outside_repo_fails() {
        let dir = TempDir::new().unwrap();
        assert!(commit(dir.path(), "nope").is_err());
    }
}
