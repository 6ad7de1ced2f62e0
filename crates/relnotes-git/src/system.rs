// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! `git` binary backend
//!
//! Every query is a single blocking subprocess call. No timeout is applied;
//! a hung git process hangs the caller.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::debug;

use crate::error::GitError;
use crate::source::LogSource;

/// Pretty format emitting each full message followed by a NUL byte
const LOG_FORMAT: &str = "--pretty=format:%B%x00";

/// Queries a repository through the system `git` binary
#[derive(Debug, Clone)]
pub struct SystemGit {
    repo_path: PathBuf,
}

impl SystemGit {
    /// Open the repository containing `path`
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if `path` is not inside a git
    /// work tree, or `GitError::Io` if git cannot be spawned.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let git = Self {
            repo_path: path.to_path_buf(),
        };

        let output = git.git_cmd().args(["rev-parse", "--git-dir"]).output()?;
        if !output.status.success() {
            return Err(GitError::RepositoryNotFound {
                path: path.display().to_string(),
            });
        }

        Ok(git)
    }

    /// Create a git command with an isolated environment
    ///
    /// Only `PATH` and `HOME` survive so user-level environment overrides
    /// (`GIT_DIR`, pager settings) cannot redirect the query.
    fn git_cmd(&self) -> Command {
        let mut cmd = Command::new("git");
        cmd.arg("-C").arg(&self.repo_path);

        cmd.env_clear();
        if let Ok(path) = std::env::var("PATH") {
            cmd.env("PATH", path);
        }
        if let Ok(home) = std::env::var("HOME") {
            cmd.env("HOME", home);
        }

        cmd.args(["-c", "core.quotePath=false"]);
        cmd
    }

    /// Run a git command, returning its output only if it succeeded
    fn run(&self, args: &[&str]) -> Result<Output, GitError> {
        debug!(args = ?args, repo = %self.repo_path.display(), "running git");
        let output = self.git_cmd().args(args).output()?;
        if output.status.success() {
            Ok(output)
        } else {
            Err(GitError::Command {
                command: format!("git {}", args.join(" ")),
                message: failure_text(&output),
            })
        }
    }
}

/// Describe a failed git invocation from its stderr, or exit status if silent
fn failure_text(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        output.status.to_string()
    } else {
        stderr
    }
}

/// Arguments for a first-parent, oldest-first log of `range`
///
/// Signature verification output would otherwise land inside the records.
fn log_args(range: &str) -> [&str; 8] {
    [
        "-c",
        "log.showSignature=false",
        "log",
        "--first-parent",
        "--reverse",
        LOG_FORMAT,
        "--end-of-options",
        range,
    ]
}

impl LogSource for SystemGit {
    fn previous_tag(&self, reference: &str) -> Result<String, GitError> {
        let parent = format!("{reference}^");
        let not_found = || GitError::NotFound {
            reference: reference.to_string(),
        };

        let output = self
            .run(&[
                "describe",
                "--tags",
                "--abbrev=0",
                "--first-parent",
                "--end-of-options",
                &parent,
            ])
            .map_err(|e| match e {
                GitError::Command { .. } => not_found(),
                other => other,
            })?;

        let tag = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if tag.is_empty() {
            return Err(not_found());
        }
        Ok(tag)
    }

    fn commit_log(&self, range: &str) -> Result<Vec<u8>, GitError> {
        let output = self.run(&log_args(range))?;
        Ok(output.stdout)
    }

    fn branch_merge_ref(&self, branch: &str) -> Option<String> {
        let key = format!("branch.{branch}.merge");
        let output = self.run(&["config", "--get", &key]).ok()?;
        let merge_ref = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!merge_ref.is_empty()).then_some(merge_ref)
    }

    fn tag_message(&self, tag: &str) -> Option<String> {
        let refname = format!("refs/tags/{tag}");
        let output = self
            .run(&[
                "for-each-ref",
                "--format=%(objecttype)%00%(contents)",
                &refname,
            ])
            .ok()?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let (object_type, contents) = stdout.split_once('\0')?;
        if object_type != "tag" {
            return None;
        }
        let message = contents.trim();
        (!message.is_empty()).then(|| message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn workspace_git() -> SystemGit {
        let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
        SystemGit {
            repo_path: PathBuf::from(manifest_dir),
        }
    }

    #[test]
    fn test_open_nonexistent_repository() {
        let result = SystemGit::open("/nonexistent/path");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_reference_is_not_found() {
        let git = workspace_git();
        let result = git.previous_tag("nonexistent-ref-12345");
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(
                e.is_not_found() || matches!(e, GitError::Io(_)),
                "unexpected error: {e}"
            );
        }
    }

    #[test]
    fn test_log_args_suppress_signatures() {
        let args = log_args("v1.0.0..HEAD");
        let config = args.iter().position(|a| *a == "log.showSignature=false");
        let log = args.iter().position(|a| *a == "log");
        assert_eq!(args[0], "-c");
        assert!(config.is_some_and(|c| log.is_some_and(|l| c < l)));
    }

    #[test]
    fn test_log_args_range_after_end_of_options() {
        let args = log_args("--all");
        assert_eq!(&args[args.len() - 2..], &["--end-of-options", "--all"]);
    }

    #[test]
    fn test_invalid_range_is_command_error() {
        let git = workspace_git();
        let result = git.commit_log("nonexistent-a..nonexistent-b");
        assert!(matches!(
            result,
            Err(GitError::Command { .. } | GitError::Io(_))
        ));
    }
}
